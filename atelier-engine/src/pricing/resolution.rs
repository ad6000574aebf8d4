//! Discount Rule Resolution
//!
//! Which rule applies to a requester is decided by an ordered list of
//! strategies tried in sequence, each returning `Option<&DiscountRule>`:
//!
//! 1. `assignment`: the rule the user is explicitly pinned to
//! 2. `role-default`: the default-flagged rule of the assigned (or any)
//!    role module
//! 3. `first-available`: the first rule anywhere in the tier system
//!
//! The order is load-bearing: it determines which price a given designer or
//! channel actually sees. Keep each strategy independently testable.

use shared::models::{DiscountRule, TierAssignment, TierSystem};

type Strategy = for<'a> fn(&'a TierSystem, Option<&TierAssignment>) -> Option<&'a DiscountRule>;

const STRATEGIES: [(&str, Strategy); 3] = [
    ("assignment", by_assignment),
    ("role-default", by_role_default),
    ("first-available", first_available),
];

/// Resolve the effective discount rule for a requester.
///
/// Returns `None` only when the tier system carries no rules at all; the
/// caller then quotes with the documented defaults.
pub fn resolve_rule<'a>(
    tier: &'a TierSystem,
    assignment: Option<&TierAssignment>,
) -> Option<&'a DiscountRule> {
    for (name, strategy) in STRATEGIES {
        if let Some(rule) = strategy(tier, assignment) {
            tracing::debug!(strategy = name, rule = %rule.id, "discount rule resolved");
            return Some(rule);
        }
    }
    tracing::debug!("tier system carries no discount rules");
    None
}

/// Strategy 1: the user's explicit assignment, both ids required
fn by_assignment<'a>(
    tier: &'a TierSystem,
    assignment: Option<&TierAssignment>,
) -> Option<&'a DiscountRule> {
    let assignment = assignment?;
    let module_id = assignment.role_module_id.as_deref()?;
    let rule_id = assignment.discount_rule_id.as_deref()?;
    let module = tier.role_modules.iter().find(|m| m.id == module_id)?;
    module.discount_rules.iter().find(|r| r.id == rule_id)
}

/// Strategy 2: the default-flagged rule, scoped to the assigned module when
/// the assignment names one
fn by_role_default<'a>(
    tier: &'a TierSystem,
    assignment: Option<&TierAssignment>,
) -> Option<&'a DiscountRule> {
    if let Some(module_id) = assignment.and_then(|a| a.role_module_id.as_deref()) {
        let module = tier.role_modules.iter().find(|m| m.id == module_id)?;
        return module.discount_rules.iter().find(|r| r.is_default);
    }
    tier.role_modules
        .iter()
        .flat_map(|m| &m.discount_rules)
        .find(|r| r.is_default)
}

/// Strategy 3: the first rule anywhere, in module order
fn first_available<'a>(
    tier: &'a TierSystem,
    _assignment: Option<&TierAssignment>,
) -> Option<&'a DiscountRule> {
    tier.role_modules.iter().flat_map(|m| &m.discount_rules).next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{DiscountType, RoleModule};

    fn rule(id: &str, is_default: bool) -> DiscountRule {
        DiscountRule {
            id: id.to_string(),
            name: id.to_string(),
            discount_type: DiscountType::Rate,
            discount_rate: Some(0.6),
            min_discount_price: None,
            commission_rate: Some(0.4),
            is_default,
        }
    }

    fn tier() -> TierSystem {
        TierSystem {
            role_modules: vec![
                RoleModule {
                    id: "designer".to_string(),
                    name: "Designer".to_string(),
                    discount_rules: vec![rule("d-basic", false), rule("d-default", true)],
                },
                RoleModule {
                    id: "franchise".to_string(),
                    name: "Franchise".to_string(),
                    discount_rules: vec![rule("f-default", true)],
                },
            ],
        }
    }

    fn assignment(module: Option<&str>, rule: Option<&str>) -> TierAssignment {
        TierAssignment {
            role_module_id: module.map(String::from),
            discount_rule_id: rule.map(String::from),
        }
    }

    #[test]
    fn test_explicit_assignment_wins() {
        let tier = tier();
        let a = assignment(Some("designer"), Some("d-basic"));
        // d-basic is not the default, but the assignment pins it
        assert_eq!(resolve_rule(&tier, Some(&a)).unwrap().id, "d-basic");
    }

    #[test]
    fn test_assignment_to_unknown_rule_falls_back_to_module_default() {
        let tier = tier();
        let a = assignment(Some("designer"), Some("gone"));
        assert_eq!(resolve_rule(&tier, Some(&a)).unwrap().id, "d-default");
    }

    #[test]
    fn test_module_only_assignment_uses_module_default() {
        let tier = tier();
        let a = assignment(Some("franchise"), None);
        assert_eq!(resolve_rule(&tier, Some(&a)).unwrap().id, "f-default");
    }

    #[test]
    fn test_no_assignment_uses_first_default() {
        let tier = tier();
        assert_eq!(resolve_rule(&tier, None).unwrap().id, "d-default");
    }

    #[test]
    fn test_no_default_falls_back_to_first_available() {
        let tier = TierSystem {
            role_modules: vec![RoleModule {
                id: "designer".to_string(),
                name: "Designer".to_string(),
                discount_rules: vec![rule("only", false)],
            }],
        };
        assert_eq!(resolve_rule(&tier, None).unwrap().id, "only");
    }

    #[test]
    fn test_unknown_module_with_defaults_elsewhere() {
        let tier = tier();
        // Assigned module does not exist: strategy 2 misses (module lookup
        // fails), strategy 3 still yields the first rule in module order
        let a = assignment(Some("gone"), Some("gone"));
        assert_eq!(resolve_rule(&tier, Some(&a)).unwrap().id, "d-basic");
    }

    #[test]
    fn test_empty_tier_resolves_nothing() {
        assert!(resolve_rule(&TierSystem::default(), None).is_none());
    }

    #[test]
    fn test_strategies_in_isolation() {
        let tier = tier();
        let a = assignment(Some("designer"), Some("d-basic"));

        assert_eq!(by_assignment(&tier, Some(&a)).unwrap().id, "d-basic");
        assert_eq!(by_role_default(&tier, Some(&a)).unwrap().id, "d-default");
        assert_eq!(first_available(&tier, None).unwrap().id, "d-basic");
    }
}
