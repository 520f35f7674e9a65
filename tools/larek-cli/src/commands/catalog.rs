//! Product listing.

use anyhow::Result;

use super::CatalogArgs;
use crate::context::Context;
use crate::output::{category_badge, format_price};

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;

    let spinner = ctx.output.spinner("Loading catalog...");
    let loaded = store.load_catalog().await.map(|products| products.len());
    spinner.finish_and_clear();
    let count = loaded?;

    let products: Vec<_> = match args.category.as_deref() {
        Some(category) => store.catalog().by_category(category).collect(),
        None => store.catalog().all().iter().collect(),
    };

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&format!("Catalog ({} products)", count));

    if products.is_empty() {
        ctx.output.info("No products found.");
        return Ok(());
    }

    let widths = [36, 32, 16, 16];
    ctx.output.table_row(&["ID", "TITLE", "CATEGORY", "PRICE"], &widths);
    for product in products {
        let price = format_price(product.price);
        let category = category_badge(&product.category);
        ctx.output.table_row(
            &[product.id.as_str(), &product.title, &category, &price],
            &widths,
        );
    }

    Ok(())
}
