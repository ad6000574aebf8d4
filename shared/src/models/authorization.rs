//! Authorization Grant Model

use crate::error::{AppError, ErrorCode};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Scope classification of an authorization grant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GrantScope {
    /// Every product of the manufacturer
    All,
    /// All products whose category id is listed
    Category,
    /// Exactly the listed products
    Specific,
    /// Union of a category grant and a specific grant
    Mixed,
}

impl GrantScope {
    /// Wire/display label for this scope
    pub fn label(&self) -> &'static str {
        match self {
            GrantScope::All => "all",
            GrantScope::Category => "category",
            GrantScope::Specific => "specific",
            GrantScope::Mixed => "mixed",
        }
    }
}

/// Lifecycle status of a grant
///
/// Only `Active` grants participate in membership tests; the others are
/// decoded for display but inert.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GrantStatus {
    Pending,
    #[default]
    Active,
    Rejected,
    Expired,
}

/// Existing authorization grant, read from the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationGrant {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub manufacturer_id: String,
    pub scope: GrantScope,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub products: Vec<String>,
    #[serde(default)]
    pub status: GrantStatus,
    #[serde(default)]
    pub valid_until: Option<NaiveDate>,
}

impl AuthorizationGrant {
    /// Whether this grant participates in membership tests
    pub fn is_active(&self) -> bool {
        self.status == GrantStatus::Active
    }
}

/// Submission payload for a new authorization request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationRequest {
    pub manufacturer_id: String,
    pub scope: GrantScope,
    pub categories: Vec<String>,
    pub products: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<NaiveDate>,
    pub notes: String,
}

impl AuthorizationRequest {
    /// Validate the payload before submission; no request is sent on failure
    pub fn validate(&self) -> Result<(), AppError> {
        if self.manufacturer_id.trim().is_empty() {
            return Err(AppError::with_message(
                ErrorCode::RequiredField,
                "manufacturerId is required",
            ));
        }
        if self.categories.is_empty() && self.products.is_empty() {
            return Err(AppError::new(ErrorCode::GrantScopeEmpty));
        }
        let consistent = match self.scope {
            GrantScope::Category => !self.categories.is_empty() && self.products.is_empty(),
            GrantScope::Specific => self.categories.is_empty() && !self.products.is_empty(),
            GrantScope::Mixed => !self.categories.is_empty() && !self.products.is_empty(),
            // `all` grants are issued server-side, never requested from here
            GrantScope::All => false,
        };
        if !consistent {
            return Err(AppError::new(ErrorCode::GrantScopeInvalid)
                .with_detail("scope", self.scope.label())
                .with_detail("categories", self.categories.len())
                .with_detail("products", self.products.len()));
        }
        Ok(())
    }
}

/// Operator's request for a custom resale price on one product
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceProposal {
    pub product_id: String,
    pub list_price: f64,
    pub target_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl PriceProposal {
    /// Validate the proposal before submission: the target must be a real
    /// price strictly below the list price.
    pub fn validate(&self) -> Result<(), AppError> {
        if !self.list_price.is_finite() || self.list_price <= 0.0 {
            return Err(
                AppError::new(ErrorCode::ProductInvalidPrice).with_detail("listPrice", self.list_price)
            );
        }
        if !self.target_price.is_finite() || self.target_price <= 0.0 {
            return Err(AppError::new(ErrorCode::ProposalPriceInvalid)
                .with_detail("targetPrice", self.target_price));
        }
        if self.target_price >= self.list_price {
            return Err(AppError::new(ErrorCode::ProposalPriceInvalid)
                .with_detail("targetPrice", self.target_price)
                .with_detail("listPrice", self.list_price));
        }
        Ok(())
    }

    /// Additional check against the contractual floor, when one is known
    pub fn validate_against_floor(
        &self,
        settings: &super::discount_rule::ProfitSettings,
    ) -> Result<(), AppError> {
        let floor = self.list_price * settings.min_sale_discount_rate.clamp(0.0, 1.0);
        if self.target_price < floor {
            return Err(AppError::new(ErrorCode::ProposalBelowFloor)
                .with_detail("targetPrice", self.target_price)
                .with_detail("floor", floor));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::discount_rule::ProfitSettings;

    fn request(scope: GrantScope, categories: Vec<&str>, products: Vec<&str>) -> AuthorizationRequest {
        AuthorizationRequest {
            manufacturer_id: "m1".to_string(),
            scope,
            categories: categories.into_iter().map(String::from).collect(),
            products: products.into_iter().map(String::from).collect(),
            valid_until: None,
            notes: String::new(),
        }
    }

    #[test]
    fn test_grant_wire_format() {
        let json = r#"{
            "id": "g1",
            "manufacturerId": "m1",
            "scope": "mixed",
            "categories": ["c1"],
            "products": ["p1", "p2"],
            "status": "active",
            "validUntil": "2026-12-31"
        }"#;
        let grant: AuthorizationGrant = serde_json::from_str(json).unwrap();
        assert_eq!(grant.scope, GrantScope::Mixed);
        assert!(grant.is_active());
        assert_eq!(grant.valid_until.unwrap().to_string(), "2026-12-31");
    }

    #[test]
    fn test_inactive_grant_statuses() {
        for (raw, status) in [
            ("pending", GrantStatus::Pending),
            ("rejected", GrantStatus::Rejected),
            ("expired", GrantStatus::Expired),
        ] {
            let json = format!(r#"{{"scope":"all","status":"{}"}}"#, raw);
            let grant: AuthorizationGrant = serde_json::from_str(&json).unwrap();
            assert_eq!(grant.status, status);
            assert!(!grant.is_active());
        }
    }

    #[test]
    fn test_request_validate_ok() {
        assert!(request(GrantScope::Category, vec!["c1"], vec![]).validate().is_ok());
        assert!(request(GrantScope::Specific, vec![], vec!["p1"]).validate().is_ok());
        assert!(request(GrantScope::Mixed, vec!["c1"], vec!["p1"]).validate().is_ok());
    }

    #[test]
    fn test_request_validate_empty_scope() {
        let err = request(GrantScope::Category, vec![], vec![]).validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::GrantScopeEmpty);
    }

    #[test]
    fn test_request_validate_scope_mismatch() {
        let err = request(GrantScope::Category, vec!["c1"], vec!["p1"]).validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::GrantScopeInvalid);

        let err = request(GrantScope::All, vec!["c1"], vec![]).validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::GrantScopeInvalid);
    }

    #[test]
    fn test_request_validate_missing_manufacturer() {
        let mut req = request(GrantScope::Specific, vec![], vec!["p1"]);
        req.manufacturer_id = "  ".to_string();
        let err = req.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
    }

    fn proposal(list: f64, target: f64) -> PriceProposal {
        PriceProposal {
            product_id: "p1".to_string(),
            list_price: list,
            target_price: target,
            reason: None,
        }
    }

    #[test]
    fn test_proposal_validate_ok() {
        assert!(proposal(10000.0, 7000.0).validate().is_ok());
    }

    #[test]
    fn test_proposal_target_must_be_below_list() {
        // target >= list is blocked before any request is sent
        assert_eq!(
            proposal(10000.0, 10000.0).validate().unwrap_err().code,
            ErrorCode::ProposalPriceInvalid
        );
        assert_eq!(
            proposal(10000.0, 12000.0).validate().unwrap_err().code,
            ErrorCode::ProposalPriceInvalid
        );
    }

    #[test]
    fn test_proposal_rejects_non_finite() {
        assert_eq!(
            proposal(f64::NAN, 1.0).validate().unwrap_err().code,
            ErrorCode::ProductInvalidPrice
        );
        assert_eq!(
            proposal(10000.0, f64::INFINITY).validate().unwrap_err().code,
            ErrorCode::ProposalPriceInvalid
        );
    }

    #[test]
    fn test_proposal_floor_check() {
        let settings = ProfitSettings { min_sale_discount_rate: 0.6 };
        // Floor is 6000: 7000 passes, 5000 does not
        assert!(proposal(10000.0, 7000.0).validate_against_floor(&settings).is_ok());
        assert_eq!(
            proposal(10000.0, 5000.0)
                .validate_against_floor(&settings)
                .unwrap_err()
                .code,
            ErrorCode::ProposalBelowFloor
        );
    }
}
