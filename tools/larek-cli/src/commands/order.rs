//! Place an order.

use anyhow::{anyhow, bail, Result};
use dialoguer::{Confirm, Input, Select};
use larek_commerce::prelude::*;

use super::OrderArgs;
use crate::context::Context;
use crate::output::format_amount;

const STEPS: u8 = 3;

/// Run the order command.
pub async fn run(args: OrderArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;

    let spinner = ctx.output.spinner("Loading catalog...");
    let loaded = store.load_catalog().await.map(|_| ());
    spinner.finish_and_clear();
    loaded?;

    for raw in &args.ids {
        let id = ProductId::new(raw.as_str());
        if store.catalog().find_by_id(&id).is_none() {
            bail!("Product not found: {}", id);
        }
        if !store.add_to_cart(&id) {
            ctx.output.warn(&format!("Already in cart: {}", id));
        }
    }

    fill_from_args(&args, store.buyer_mut())?;

    while !store.flow().is_complete() {
        let step = store.flow().step();
        ctx.output.step(step.number(), STEPS, &step_label(store.flow()));

        match store.advance_checkout() {
            Ok(_) => {}
            Err(CommerceError::Validation(errors)) if !args.yes => {
                prompt_missing(&errors, store.buyer_mut())?;
            }
            Err(e) => return Err(e.into()),
        }
    }

    print_summary(ctx, store.cart(), store.buyer());

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt("Place order?")
            .default(true)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Order cancelled");
            return Ok(());
        }
    }

    let spinner = ctx.output.spinner("Placing order...");
    let placed = store.place_order().await;
    spinner.finish_and_clear();
    let confirmation = placed?;

    if ctx.output.is_json() {
        ctx.output.json(&confirmation);
        return Ok(());
    }

    ctx.output.success("Order placed");
    ctx.output.kv("id", confirmation.id.as_str());
    ctx.output.kv("total", &format!("{} synapses", format_amount(confirmation.total)));

    Ok(())
}

fn step_label(flow: &CheckoutFlow) -> String {
    format!("{} ({}%)", flow.step().display_name(), flow.progress_percent())
}

fn fill_from_args(args: &OrderArgs, buyer: &mut Buyer) -> Result<()> {
    if let Some(payment) = args.payment.as_deref() {
        let method = PaymentMethod::from_str(payment)
            .ok_or_else(|| anyhow!("Unknown payment method: {} (expected card or cash)", payment))?;
        buyer.set_payment(method);
    }
    if let Some(address) = &args.address {
        buyer.set_address(address.as_str());
    }
    if let Some(email) = &args.email {
        buyer.set_email(email.as_str());
    }
    if let Some(phone) = &args.phone {
        buyer.set_phone(phone.as_str());
    }
    Ok(())
}

fn prompt_missing(errors: &ValidationErrors, buyer: &mut Buyer) -> Result<()> {
    if errors.contains(BuyerField::Payment) {
        let methods = [PaymentMethod::Card, PaymentMethod::Cash];
        let items: Vec<&str> = methods.iter().map(PaymentMethod::display_name).collect();
        let selection = Select::new()
            .with_prompt("Payment method")
            .items(&items)
            .default(0)
            .interact()?;
        buyer.set_payment(methods[selection]);
    }

    if errors.contains(BuyerField::Address) {
        let address: String = Input::new()
            .with_prompt("Delivery address")
            .interact_text()?;
        buyer.set_address(address);
    }

    // Email and phone are reported together; either one is enough.
    if errors.contains(BuyerField::Email) {
        let email: String = Input::new()
            .with_prompt("Email (leave empty to give a phone number)")
            .allow_empty(true)
            .interact_text()?;
        buyer.set_email(email);
    }

    if errors.contains(BuyerField::Phone) && buyer.email().trim().is_empty() {
        let phone: String = Input::new()
            .with_prompt("Phone")
            .interact_text()?;
        buyer.set_phone(phone);
    }

    Ok(())
}

fn print_summary(ctx: &Context, cart: &Cart, buyer: &Buyer) {
    ctx.output.header("Order");
    for product in cart.items() {
        ctx.output.kv(&product.title, &format_amount(product.price_or_zero()));
    }
    ctx.output.kv("total", &format!("{} synapses", format_amount(cart.total())));

    if let Some(payment) = buyer.payment() {
        ctx.output.kv("payment", payment.display_name());
    }
    ctx.output.kv("address", buyer.address());
    if !buyer.email().is_empty() {
        ctx.output.kv("email", buyer.email());
    }
    if !buyer.phone().is_empty() {
        ctx.output.kv("phone", buyer.phone());
    }
}
