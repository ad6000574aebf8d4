//! Typed admin API endpoints
//!
//! [`Transport`] is the seam between endpoint typing and the wire: the real
//! [`crate::HttpClient`] implements it over reqwest, tests implement it over
//! an in-memory route table.

use crate::{ClientError, ClientResult};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::ApiEnvelope;
use shared::error::{AppError, ErrorCode};
use shared::models::{
    AuthorizationGrant, AuthorizationRequest, CategoryNode, Manufacturer, PriceProposal,
    ProductRecord, ProfitSettings, TierAssignment, TierSystem,
};

/// Object-safe transport over the admin API wire
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_json(&self, path: &str) -> ClientResult<Value>;
    async fn post_json(&self, path: &str, body: Value) -> ClientResult<Value>;
}

/// Typed endpoint wrappers over a [`Transport`]
#[derive(Debug, Clone)]
pub struct AdminApi<T> {
    transport: T,
}

impl<T: Transport> AdminApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Access the underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// GET an envelope-wrapped payload
    async fn get<D: DeserializeOwned>(&self, path: &str) -> ClientResult<D> {
        let value = self.transport.get_json(path).await?;
        let envelope: ApiEnvelope<D> = serde_json::from_value(value)?;
        envelope.into_result().map_err(ClientError::Api)
    }

    /// POST a body, expect an envelope-wrapped payload back
    async fn post<D: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ClientResult<D> {
        let value = self
            .transport
            .post_json(path, serde_json::to_value(body)?)
            .await?;
        let envelope: ApiEnvelope<D> = serde_json::from_value(value)?;
        envelope.into_result().map_err(ClientError::Api)
    }

    /// POST a body, expect only an envelope-level acknowledgement
    async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> ClientResult<()> {
        let value = self
            .transport
            .post_json(path, serde_json::to_value(body)?)
            .await?;
        let envelope: ApiEnvelope<Value> = serde_json::from_value(value)?;
        if !envelope.success {
            let message = envelope
                .message
                .unwrap_or_else(|| ErrorCode::Unknown.message().to_string());
            return Err(ClientError::Api(AppError::with_message(ErrorCode::Unknown, message)));
        }
        Ok(())
    }

    // ========== Manufacturers ==========

    pub async fn manufacturers(&self) -> ClientResult<Vec<Manufacturer>> {
        self.get("manufacturers").await
    }

    pub async fn manufacturer(&self, id: &str) -> ClientResult<Manufacturer> {
        self.get(&format!("manufacturers/{}", id)).await
    }

    pub async fn categories(&self, manufacturer_id: &str) -> ClientResult<Vec<CategoryNode>> {
        self.get(&format!("manufacturers/{}/categories", manufacturer_id)).await
    }

    pub async fn products(&self, manufacturer_id: &str) -> ClientResult<Vec<ProductRecord>> {
        self.get(&format!("manufacturers/{}/products", manufacturer_id)).await
    }

    // ========== Tier / Commission ==========

    /// A manufacturer's tiered commission configuration
    pub async fn commission_system(&self, manufacturer_id: &str) -> ClientResult<TierSystem> {
        self.get(&format!("commission-system/manufacturer/{}", manufacturer_id)).await
    }

    /// The requester's effective tier assignment
    pub async fn effective_assignment(&self) -> ClientResult<TierAssignment> {
        self.get("tier-system/effective").await
    }

    pub async fn profit_settings(&self) -> ClientResult<ProfitSettings> {
        self.get("profit-settings").await
    }

    // ========== Authorizations ==========

    pub async fn grants(&self, manufacturer_id: &str) -> ClientResult<Vec<AuthorizationGrant>> {
        self.get(&format!("authorizations?manufacturer={}", manufacturer_id)).await
    }

    /// Submit a new authorization request.
    ///
    /// The payload is validated locally first; an invalid one never reaches
    /// the wire.
    pub async fn submit_authorization(
        &self,
        request: &AuthorizationRequest,
    ) -> ClientResult<AuthorizationGrant> {
        request.validate()?;
        self.post("authorizations", request).await
    }

    /// Submit a custom resale price proposal, validated locally first
    pub async fn submit_price_proposal(&self, proposal: &PriceProposal) -> ClientResult<()> {
        proposal.validate()?;
        self.post_unit("price-proposals", proposal).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockTransport;
    use serde_json::json;
    use shared::models::GrantScope;

    #[tokio::test]
    async fn test_typed_get_unwraps_envelope() {
        let transport = MockTransport::new().route(
            "manufacturers/m1",
            json!({"id": "m1", "name": "North Woodworks", "isElite": true}),
        );
        let api = AdminApi::new(transport);

        let manufacturer = api.manufacturer("m1").await.unwrap();
        assert_eq!(manufacturer.name, "North Woodworks");
        assert!(manufacturer.is_elite);
    }

    #[tokio::test]
    async fn test_envelope_failure_surfaces_message() {
        let transport = MockTransport::new().route_failure("manufacturers/m1", "manufacturer is disabled");
        let api = AdminApi::new(transport);

        let err = api.manufacturer("m1").await.unwrap_err();
        match err {
            ClientError::Api(app) => assert_eq!(app.message, "manufacturer is disabled"),
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_submit_authorization_posts_payload() {
        let transport = MockTransport::new().route_post(
            "authorizations",
            json!({"id": "g1", "manufacturerId": "m1", "scope": "specific", "products": ["p1"]}),
        );
        let api = AdminApi::new(transport);

        let request = AuthorizationRequest {
            manufacturer_id: "m1".to_string(),
            scope: GrantScope::Specific,
            categories: vec![],
            products: vec!["p1".to_string()],
            valid_until: None,
            notes: "scope=specific; products(1): p1".to_string(),
        };
        let grant = api.submit_authorization(&request).await.unwrap();
        assert_eq!(grant.id, "g1");

        let posted = api.transport().posted();
        assert_eq!(posted.len(), 1);
        assert_eq!(posted[0].0, "authorizations");
        assert_eq!(posted[0].1["scope"], "specific");
    }

    #[tokio::test]
    async fn test_invalid_submission_never_hits_the_wire() {
        let api = AdminApi::new(MockTransport::new());

        let request = AuthorizationRequest {
            manufacturer_id: "m1".to_string(),
            scope: GrantScope::Specific,
            categories: vec![],
            products: vec![],
            valid_until: None,
            notes: String::new(),
        };
        let err = api.submit_authorization(&request).await.unwrap_err();
        match err {
            ClientError::Api(app) => assert_eq!(app.code, ErrorCode::GrantScopeEmpty),
            other => panic!("expected Api error, got {:?}", other),
        }
        assert!(api.transport().posted().is_empty());
    }

    #[tokio::test]
    async fn test_price_proposal_roundtrip() {
        let transport = MockTransport::new().route_post("price-proposals", json!(null));
        let api = AdminApi::new(transport);

        let proposal = PriceProposal {
            product_id: "p1".to_string(),
            list_price: 10000.0,
            target_price: 7000.0,
            reason: Some("long-standing client".to_string()),
        };
        api.submit_price_proposal(&proposal).await.unwrap();

        // target above list is rejected locally
        let bad = PriceProposal { target_price: 12000.0, ..proposal };
        assert!(api.submit_price_proposal(&bad).await.is_err());
        assert_eq!(api.transport().posted().len(), 1);
    }
}
