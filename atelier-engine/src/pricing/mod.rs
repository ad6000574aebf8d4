//! Pricing Resolver
//!
//! Computes the minimum resale price, commission amount and factory retained
//! income for a list price under a tier/discount rule, and resolves which
//! rule applies to a given requester.

mod calculator;
mod resolution;

pub use calculator::{
    COMMISSION_RATE_CAP, DEFAULT_COMMISSION_RATE, DEFAULT_DISCOUNT_RATE, ProductQuote, SkuLineQuote,
    SkuQuote, quote_product, quote_sku,
};
pub use resolution::resolve_rule;
