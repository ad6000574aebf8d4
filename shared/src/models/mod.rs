//! Domain models for the admin console core

pub mod authorization;
pub mod category;
pub mod discount_rule;
pub mod manufacturer;
pub mod preferences;
pub mod product;
pub mod tier_system;

pub use authorization::{
    AuthorizationGrant, AuthorizationRequest, GrantScope, GrantStatus, PriceProposal,
};
pub use category::{CategoryNode, CategoryRef, EmbeddedCategory};
pub use discount_rule::{DiscountRule, DiscountType, ProfitSettings};
pub use manufacturer::{Manufacturer, ManufacturerStatus, ManufacturerSummary};
pub use preferences::SessionPrefs;
pub use product::{ProductRecord, SkuRecord};
pub use tier_system::{RoleModule, TierAssignment, TierSystem};
