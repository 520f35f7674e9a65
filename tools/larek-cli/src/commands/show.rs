//! Product details.

use anyhow::{anyhow, Result};
use larek_commerce::ProductId;

use super::ShowArgs;
use crate::context::Context;
use crate::output::{category_badge, format_price};

/// Run the show command.
pub async fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;

    let spinner = ctx.output.spinner("Loading catalog...");
    let loaded = store.load_catalog().await.map(|_| ());
    spinner.finish_and_clear();
    loaded?;

    let id = ProductId::new(args.id);
    let product = store
        .catalog_mut()
        .select_by_id(&id)
        .cloned()
        .ok_or_else(|| anyhow!("Product not found: {}", id))?;

    let image_url = product.image_url(&ctx.config.api.cdn_url());

    if ctx.output.is_json() {
        let mut value = serde_json::to_value(&product)?;
        value["image_url"] = serde_json::Value::String(image_url);
        ctx.output.json(&value);
        return Ok(());
    }

    ctx.output.header(&product.title);
    ctx.output.kv("id", product.id.as_str());
    ctx.output.kv("category", &category_badge(&product.category));
    ctx.output.kv("price", &format_price(product.price));
    ctx.output.kv("image", &image_url);
    if !product.description.is_empty() {
        println!();
        println!("  {}", product.description);
    }
    if !product.is_for_sale() {
        ctx.output.warn("This product is not for sale");
    }

    Ok(())
}
