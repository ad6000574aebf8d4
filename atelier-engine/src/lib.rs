//! Pricing and authorization-scope resolution for the Atelier admin console
//!
//! Pure computation over data fetched from the admin API:
//! - [`pricing`]: minimum resale price, commission split and factory income
//!   for a product or SKU under a manufacturer's tier configuration.
//! - [`authorization`]: category-tree expansion, grant membership tests,
//!   selection toggling and submission payload building.
//!
//! Nothing in this crate performs I/O; all inputs come in as `shared`
//! model values and all failure modes degrade to documented defaults.

pub mod authorization;
pub mod pricing;

pub use authorization::{CategoryIndex, SelectionSet, build_request, is_product_authorized};
pub use pricing::{ProductQuote, SkuQuote, quote_product, quote_sku, resolve_rule};
