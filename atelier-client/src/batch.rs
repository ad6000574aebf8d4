//! Bounded Batch Fetcher
//!
//! Assembles per-manufacturer metadata (category/product counts, effective
//! tier rule) across a manufacturer list without overwhelming the network:
//! a fixed-size semaphore caps simultaneous in-flight requests. Completion
//! order is not guaranteed, only the cap.

use crate::api::{AdminApi, Transport};
use atelier_engine::resolve_rule;
use shared::models::{Manufacturer, ManufacturerSummary};
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Cap on simultaneous in-flight summary requests
pub const SUMMARY_CONCURRENCY: usize = 6;

/// Fetch summaries for a list of manufacturers.
///
/// Individual failures degrade to a placeholder summary (zero counts, no
/// rule) and are logged; they never abort the batch.
pub async fn fetch_summaries<T>(
    api: Arc<AdminApi<T>>,
    manufacturers: &[Manufacturer],
) -> Vec<ManufacturerSummary>
where
    T: Transport + 'static,
{
    let semaphore = Arc::new(Semaphore::new(SUMMARY_CONCURRENCY));
    let mut handles = Vec::with_capacity(manufacturers.len());

    for manufacturer in manufacturers {
        let permit = semaphore.clone().acquire_owned().await.unwrap();
        let api = api.clone();
        let id = manufacturer.id.clone();
        let name = manufacturer.name.clone();

        handles.push(tokio::spawn(async move {
            let _permit = permit;
            fetch_one(&api, id, name).await
        }));
    }

    let mut summaries = Vec::with_capacity(handles.len());
    for handle in handles {
        match handle.await {
            Ok(summary) => summaries.push(summary),
            Err(error) => {
                tracing::warn!(%error, "summary task panicked");
            }
        }
    }

    summaries
}

/// Fetch one manufacturer's summary; every field degrades independently
async fn fetch_one<T: Transport>(
    api: &AdminApi<T>,
    manufacturer_id: String,
    name: String,
) -> ManufacturerSummary {
    let category_count = match api.categories(&manufacturer_id).await {
        Ok(categories) => categories.len(),
        Err(error) => {
            tracing::warn!(manufacturer = %manufacturer_id, %error, "category fetch failed");
            0
        }
    };

    let product_count = match api.products(&manufacturer_id).await {
        Ok(products) => products.len(),
        Err(error) => {
            tracing::warn!(manufacturer = %manufacturer_id, %error, "product fetch failed");
            0
        }
    };

    let effective_rule = match api.commission_system(&manufacturer_id).await {
        Ok(tier) => resolve_rule(&tier, None).cloned(),
        Err(error) => {
            tracing::warn!(manufacturer = %manufacturer_id, %error, "tier fetch failed");
            None
        }
    };

    ManufacturerSummary {
        manufacturer_id,
        name,
        category_count,
        product_count,
        effective_rule,
    }
}
