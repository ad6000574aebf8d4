//! Manufacturer Model

use super::discount_rule::DiscountRule;
use serde::{Deserialize, Serialize};

/// Manufacturer account status
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ManufacturerStatus {
    Pending,
    #[default]
    Active,
    Disabled,
}

/// Manufacturer entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manufacturer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub status: ManufacturerStatus,
    /// Elite manufacturers expose the tiered commission system
    #[serde(default)]
    pub is_elite: bool,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
}

impl Manufacturer {
    pub fn is_disabled(&self) -> bool {
        self.status == ManufacturerStatus::Disabled
    }
}

/// Per-manufacturer metadata assembled by the batch fetcher
///
/// Every field degrades independently: a failed fetch leaves the counts at
/// zero and the rule absent rather than dropping the row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManufacturerSummary {
    pub manufacturer_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category_count: usize,
    #[serde(default)]
    pub product_count: usize,
    #[serde(default)]
    pub effective_rule: Option<DiscountRule>,
}
