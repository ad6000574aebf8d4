//! Discount Rule Model

use serde::{Deserialize, Serialize};

/// Pricing basis for a discount rule
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DiscountType {
    /// Minimum resale price is `list_price * discount_rate`
    #[default]
    Rate,
    /// Minimum resale price is `min_discount_price` directly
    MinPrice,
}

/// Tier/discount rule: determines the minimum resale price and commission
/// split for a sales channel (designer, franchise, etc.)
///
/// Exactly one pricing basis is active per `discount_type`. All rate fields
/// are fractions in `[0, 1]`; out-of-range or missing values are coerced to
/// documented defaults by the pricing calculator, never rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountRule {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub discount_type: DiscountType,
    /// Fraction of the list price (rate basis)
    #[serde(default)]
    pub discount_rate: Option<f64>,
    /// Absolute minimum resale price (min-price basis)
    #[serde(default)]
    pub min_discount_price: Option<f64>,
    /// Fraction of the discounted price paid out as commission
    #[serde(default)]
    pub commission_rate: Option<f64>,
    /// Whether this is the role module's default rule
    #[serde(default)]
    pub is_default: bool,
}

/// Floor below which a computed discounted price may not fall
///
/// Overrides an overly aggressive discount rule: the effective discounted
/// price is never less than `list_price * min_sale_discount_rate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitSettings {
    pub min_sale_discount_rate: f64,
}
