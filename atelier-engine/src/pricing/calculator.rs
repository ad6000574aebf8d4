//! Quote Calculator
//!
//! Calculate resale quotes with support for:
//! - Rate-basis rules (fraction of the list price)
//! - Min-price-basis rules (absolute minimum resale price)
//! - A contractual floor that overrides aggressive rules
//! - A hard 50% commission ceiling
//!
//! Uses rust_decimal for precision calculations.

use rust_decimal::prelude::*;
use shared::models::{DiscountRule, DiscountType, ProductRecord, ProfitSettings, TierAssignment,
    TierSystem};

use super::resolution::resolve_rule;

/// Rounding strategy for monetary values (whole currency units, half-up)
const DECIMAL_PLACES: u32 = 0;

/// Discount rate applied when a rule is missing or malformed
pub const DEFAULT_DISCOUNT_RATE: f64 = 0.6;

/// Commission rate applied when a rule is missing or malformed
pub const DEFAULT_COMMISSION_RATE: f64 = 0.4;

/// Hard ceiling on the commission rate, regardless of configuration
pub const COMMISSION_RATE_CAP: f64 = 0.5;

/// Result of a single quote calculation
///
/// `factory_income` is always `discounted_price - commission`; the three
/// values are mutually consistent by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SkuQuote {
    /// List price after defensive coercion
    pub list_price: f64,
    /// Minimum resale price (floor applied, rounded)
    pub discounted_price: f64,
    /// Commission carved out of the discounted price
    pub commission: f64,
    /// Portion of the discounted price retained by the manufacturer
    pub factory_income: f64,
    /// Effective discount rate (rate basis only)
    pub discount_rate: Option<f64>,
}

/// Quote for one SKU line of a product
#[derive(Debug, Clone, PartialEq)]
pub struct SkuLineQuote {
    pub code: String,
    pub quote: SkuQuote,
}

/// Product-level quote: base price plus every SKU line
#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuote {
    pub product_id: String,
    pub base: SkuQuote,
    pub skus: Vec<SkuLineQuote>,
}

// ==================== Conversion Helpers ====================

/// Convert f64 to Decimal for calculation
#[inline]
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64, rounded to whole currency units
#[inline]
fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Coerce a price input: non-finite or negative values become 0
#[inline]
fn sanitize_price(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}

/// Coerce an optional rate into `[0, cap]`, substituting `default` when the
/// value is absent or not a number
fn effective_rate(value: Option<f64>, default: f64, cap: f64) -> f64 {
    match value {
        Some(rate) if rate.is_finite() => rate.clamp(0.0, cap),
        Some(_) => {
            tracing::debug!(default, "non-finite rate in discount rule, using default");
            default
        }
        None => default,
    }
}

// ==================== Basis Resolution ====================

/// Resolve the pricing basis actually in effect for a rule.
///
/// A rule marked `Rate` that carries no rate but does carry a usable
/// `min_discount_price` is treated as min-price: older tier configurations
/// stored only the absolute price and relied on the consumer to infer.
fn effective_basis(rule: &DiscountRule) -> DiscountType {
    match rule.discount_type {
        DiscountType::MinPrice => DiscountType::MinPrice,
        DiscountType::Rate => {
            let has_min_price = rule
                .min_discount_price
                .map(|p| p.is_finite() && p > 0.0)
                .unwrap_or(false);
            if rule.discount_rate.is_none() && has_min_price {
                DiscountType::MinPrice
            } else {
                DiscountType::Rate
            }
        }
    }
}

// ==================== Main Calculator ====================

/// Compute the resale quote for one list price.
///
/// # Calculation Steps
/// 1. Resolve the pricing basis from the rule (missing rule = rate basis
///    at the default rate).
/// 2. Raw discounted price: `list * rate` or the absolute minimum price.
/// 3. Apply the floor: `max(raw, list * min_sale_discount_rate)`; the
///    floor always wins.
/// 4. Round to whole currency units.
/// 5. Commission: `discounted * commission_rate`, rate capped at 50%.
/// 6. Factory income: `discounted - commission`.
///
/// Malformed input never errors; every value is coerced to a documented
/// default so a page render cannot fail on bad configuration.
pub fn quote_sku(
    list_price: f64,
    rule: Option<&DiscountRule>,
    settings: Option<&ProfitSettings>,
) -> SkuQuote {
    let list = to_decimal(sanitize_price(list_price));

    // Steps 1-2: raw discounted price from the rule basis
    let (raw_discounted, discount_rate) = match rule {
        None => {
            let rate = DEFAULT_DISCOUNT_RATE;
            (list * to_decimal(rate), Some(rate))
        }
        Some(rule) => match effective_basis(rule) {
            DiscountType::Rate => {
                let rate = effective_rate(rule.discount_rate, DEFAULT_DISCOUNT_RATE, 1.0);
                (list * to_decimal(rate), Some(rate))
            }
            DiscountType::MinPrice => {
                let min_price = rule
                    .min_discount_price
                    .map(sanitize_price)
                    .unwrap_or(0.0);
                (to_decimal(min_price), None)
            }
        },
    };

    // Step 3: the contractual floor overrides the rule
    let floor = settings
        .map(|s| list * to_decimal(effective_rate(Some(s.min_sale_discount_rate), 0.0, 1.0)))
        .unwrap_or(Decimal::ZERO);
    // Step 4: round before the commission split so the three published
    // figures stay consistent
    let discounted = to_decimal(to_f64(raw_discounted.max(floor)));

    // Step 5: commission, hard-capped at 50%. The ceiling binds after
    // rounding too: on an odd discounted price a half-up rounded commission
    // at exactly the cap would otherwise land one unit above it.
    let commission_rate = effective_rate(
        rule.and_then(|r| r.commission_rate),
        DEFAULT_COMMISSION_RATE,
        COMMISSION_RATE_CAP,
    );
    let ceiling = (discounted * to_decimal(COMMISSION_RATE_CAP))
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::ToZero);
    let commission = to_decimal(to_f64(discounted * to_decimal(commission_rate))).min(ceiling);

    // Step 6: factory income is derived, never configured
    let factory_income = discounted - commission;

    SkuQuote {
        list_price: to_f64(list),
        discounted_price: to_f64(discounted),
        commission: to_f64(commission),
        factory_income: to_f64(factory_income),
        discount_rate,
    }
}

/// Compute quotes for a whole product under a requester's effective rule.
///
/// Resolves the rule through the tier system fallback chain, then quotes the
/// base price and every SKU line with it.
pub fn quote_product(
    product: &ProductRecord,
    tier: &TierSystem,
    assignment: Option<&TierAssignment>,
    settings: Option<&ProfitSettings>,
) -> ProductQuote {
    let rule = resolve_rule(tier, assignment);
    if rule.is_none() {
        tracing::debug!(product = %product.id, "no discount rule resolved, quoting with defaults");
    }

    let skus = product
        .skus
        .iter()
        .map(|sku| SkuLineQuote {
            code: sku.code.clone(),
            quote: quote_sku(sku.price, rule, settings),
        })
        .collect();

    ProductQuote {
        product_id: product.id.clone(),
        base: quote_sku(product.base_price, rule, settings),
        skus,
    }
}

// ==================== Tests ====================
