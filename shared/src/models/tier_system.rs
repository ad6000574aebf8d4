//! Tier System Model

use super::discount_rule::DiscountRule;
use serde::{Deserialize, Serialize};

/// Role module: a named bundle of discount rules for one sales channel
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleModule {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub discount_rules: Vec<DiscountRule>,
}

/// A manufacturer's tiered commission/discount configuration tree
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierSystem {
    #[serde(default)]
    pub role_modules: Vec<RoleModule>,
}

/// A requester's explicit tier assignment, if any
///
/// Both fields are optional: a user may be pinned to a role module without a
/// specific rule, or carry no assignment at all (resolution then falls back
/// to the module default and finally to the first available rule).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierAssignment {
    #[serde(default)]
    pub role_module_id: Option<String>,
    #[serde(default)]
    pub discount_rule_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_system_wire_format() {
        let json = r#"{
            "roleModules": [
                {
                    "id": "designer",
                    "name": "Designer",
                    "discountRules": [
                        {"id": "r1", "name": "standard", "discountRate": 0.6, "isDefault": true}
                    ]
                }
            ]
        }"#;
        let tier: TierSystem = serde_json::from_str(json).unwrap();
        assert_eq!(tier.role_modules.len(), 1);
        assert_eq!(tier.role_modules[0].discount_rules[0].id, "r1");
    }

    #[test]
    fn test_empty_tier_system() {
        let tier: TierSystem = serde_json::from_str("{}").unwrap();
        assert!(tier.role_modules.is_empty());
    }

    #[test]
    fn test_assignment_defaults() {
        let assignment: TierAssignment = serde_json::from_str("{}").unwrap();
        assert!(assignment.role_module_id.is_none());
        assert!(assignment.discount_rule_id.is_none());
    }
}
