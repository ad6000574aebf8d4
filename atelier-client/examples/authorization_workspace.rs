// atelier-client/examples/authorization_workspace.rs
// Load a manufacturer's authorization workspace and print resale quotes.

use atelier_client::{AdminApi, ClientConfig, load_workspace};
use atelier_engine::{SelectionSet, build_request, is_product_authorized, quote_product};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        println!("Usage: {} <manufacturer_id>", args[0]);
        println!("  Example: {} m-1024", args[0]);
        return Ok(());
    }
    let manufacturer_id = &args[1];

    let base_url = std::env::var("ATELIER_API_URL")
        .unwrap_or_else(|_| "http://localhost:8080/api".to_string());
    let config = match std::env::var("ATELIER_TOKEN") {
        Ok(token) => ClientConfig::new(&base_url).with_token(token),
        Err(_) => ClientConfig::new(&base_url),
    };

    let api = AdminApi::new(config.build_http_client());
    let cancel = CancellationToken::new();

    let workspace = load_workspace(&api, manufacturer_id, &cancel).await?;
    tracing::info!(
        manufacturer = %workspace.manufacturer.name,
        categories = workspace.categories.len(),
        products = workspace.products.len(),
        grants = workspace.grants.len(),
        "workspace loaded"
    );

    // Quote every product under the requester's effective rule
    let tier = workspace.tier.clone().unwrap_or_default();
    for product in &workspace.products {
        let quote = quote_product(
            product,
            &tier,
            workspace.assignment.as_ref(),
            workspace.profit.as_ref(),
        );
        let authorized = is_product_authorized(product, &workspace.grants, &workspace.index);
        tracing::info!(
            product = %product.name,
            list = quote.base.list_price,
            min_resale = quote.base.discounted_price,
            commission = quote.base.commission,
            factory = quote.base.factory_income,
            authorized,
            "quoted"
        );
    }

    // Build (but do not send) a request covering the first root category
    if let Some(root) = workspace.index.roots().first() {
        let mut selection = SelectionSet::new();
        selection.toggle_category(&workspace.index, root);
        let request = build_request(
            manufacturer_id,
            &selection,
            &workspace.index,
            &workspace.products,
            None,
        )?;
        tracing::info!(scope = request.scope.label(), notes = %request.notes, "draft request");
    }

    Ok(())
}
