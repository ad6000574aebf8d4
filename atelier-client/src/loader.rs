//! Workspace Loader
//!
//! One call loads everything the authorization page needs. The independent
//! reads go out concurrently and the page proceeds once all have settled:
//! manufacturer, categories, products and grants are critical (any failure
//! fails the load), tier configuration and profit settings are not (they
//! degrade to `None` with a warning). A load superseded by navigation is
//! ignored via a cancellation token.

use crate::api::{AdminApi, Transport};
use crate::{ClientError, ClientResult};
use atelier_engine::CategoryIndex;
use shared::models::{
    AuthorizationGrant, CategoryNode, Manufacturer, ProductRecord, ProfitSettings, TierAssignment,
    TierSystem,
};
use tokio_util::sync::CancellationToken;

/// Everything the authorization page works with
#[derive(Debug, Clone)]
pub struct AuthorizationWorkspace {
    pub manufacturer: Manufacturer,
    pub categories: Vec<CategoryNode>,
    pub index: CategoryIndex,
    pub products: Vec<ProductRecord>,
    pub grants: Vec<AuthorizationGrant>,
    pub tier: Option<TierSystem>,
    pub assignment: Option<TierAssignment>,
    pub profit: Option<ProfitSettings>,
}

/// Load the authorization workspace for one manufacturer.
///
/// Returns [`ClientError::Cancelled`] when `cancel` fires before the fetches
/// settle; the caller drops that silently instead of rendering stale data.
pub async fn load_workspace<T: Transport>(
    api: &AdminApi<T>,
    manufacturer_id: &str,
    cancel: &CancellationToken,
) -> ClientResult<AuthorizationWorkspace> {
    let (manufacturer, categories, products, grants, tier, assignment, profit) = tokio::join!(
        api.manufacturer(manufacturer_id),
        api.categories(manufacturer_id),
        api.products(manufacturer_id),
        api.grants(manufacturer_id),
        api.commission_system(manufacturer_id),
        api.effective_assignment(),
        api.profit_settings(),
    );

    if cancel.is_cancelled() {
        return Err(ClientError::Cancelled);
    }

    // Critical reads fail the whole load
    let manufacturer = manufacturer?;
    let categories = categories?;
    let products = products?;
    let grants = grants?;

    // Non-critical reads degrade to defaults
    let tier = non_critical("commission system", tier);
    let assignment = non_critical("tier assignment", assignment);
    let profit = non_critical("profit settings", profit);

    let index = CategoryIndex::build(&categories);
    tracing::debug!(
        manufacturer = %manufacturer.id,
        categories = categories.len(),
        products = products.len(),
        grants = grants.len(),
        "authorization workspace loaded"
    );

    Ok(AuthorizationWorkspace {
        manufacturer,
        categories,
        index,
        products,
        grants,
        tier,
        assignment,
        profit,
    })
}

fn non_critical<T>(what: &str, result: ClientResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::warn!(%error, "failed to load {}, continuing without", what);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockTransport;
    use serde_json::json;

    fn transport() -> MockTransport {
        MockTransport::new()
            .route("manufacturers/m1", json!({"id": "m1", "name": "North Woodworks"}))
            .route(
                "manufacturers/m1/categories",
                json!([
                    {"id": "A", "name": "Seating", "parentId": null, "count": 2},
                    {"id": "B", "name": "Chairs", "parentId": "A", "count": 2}
                ]),
            )
            .route(
                "manufacturers/m1/products",
                json!([{"id": "p1", "name": "Oak Chair", "category": "B", "basePrice": 900}]),
            )
            .route("authorizations?manufacturer=m1", json!([]))
            .route(
                "commission-system/manufacturer/m1",
                json!({"roleModules": [{"id": "designer", "name": "Designer", "discountRules": [
                    {"id": "r1", "name": "standard", "discountRate": 0.6, "isDefault": true}
                ]}]}),
            )
            .route("tier-system/effective", json!({"roleModuleId": "designer"}))
            .route("profit-settings", json!({"minSaleDiscountRate": 0.6}))
    }

    #[tokio::test]
    async fn test_full_load() {
        let api = AdminApi::new(transport());
        let workspace = load_workspace(&api, "m1", &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(workspace.manufacturer.name, "North Woodworks");
        assert_eq!(workspace.categories.len(), 2);
        assert_eq!(workspace.products.len(), 1);
        assert!(workspace.index.contains("B"));
        assert!(workspace.tier.is_some());
        assert_eq!(
            workspace.assignment.unwrap().role_module_id.as_deref(),
            Some("designer")
        );
        assert_eq!(workspace.profit.unwrap().min_sale_discount_rate, 0.6);
    }

    #[tokio::test]
    async fn test_non_critical_failure_degrades() {
        let api = AdminApi::new(
            transport()
                .break_route("commission-system/manufacturer/m1")
                .break_route("profit-settings"),
        );
        let workspace = load_workspace(&api, "m1", &CancellationToken::new())
            .await
            .unwrap();

        assert!(workspace.tier.is_none());
        assert!(workspace.profit.is_none());
        // Critical data unaffected
        assert_eq!(workspace.products.len(), 1);
    }

    #[tokio::test]
    async fn test_critical_failure_propagates() {
        let api = AdminApi::new(transport().break_route("manufacturers/m1/products"));
        let err = load_workspace(&api, "m1", &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Internal(_)));
    }

    #[tokio::test]
    async fn test_cancelled_load_is_dropped() {
        let api = AdminApi::new(transport());
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = load_workspace(&api, "m1", &cancel).await.unwrap_err();
        assert!(matches!(err, ClientError::Cancelled));
    }
}
