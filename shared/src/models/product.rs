//! Product Model

use super::category::CategoryRef;
use serde::{Deserialize, Serialize};

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: String,
    /// Polymorphic category reference (id, name, or embedded object)
    #[serde(default)]
    pub category: CategoryRef,
    /// List price in whole currency units
    #[serde(default)]
    pub base_price: f64,
    #[serde(default)]
    pub skus: Vec<SkuRecord>,
}

/// Per-SKU pricing record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkuRecord {
    pub code: String,
    #[serde(default)]
    pub spec: String,
    pub price: f64,
    #[serde(default)]
    pub discount_price: Option<f64>,
}
