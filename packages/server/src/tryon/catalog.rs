use sea_orm::ConnectionTrait;
use tracing::{debug, warn};

use super::prompt::DEFAULT_GARMENT;
use crate::entity::saree_item;
use crate::store::TryOnStore;

/// Resolve an optional catalog reference into a garment description.
///
/// Unknown ids and lookup failures both yield [`DEFAULT_GARMENT`]; a missing
/// catalog item never fails a try-on.
pub async fn describe_garment<C: ConnectionTrait>(
    store: &TryOnStore<'_, C>,
    item_id: Option<&str>,
) -> String {
    let Some(item_id) = item_id else {
        return DEFAULT_GARMENT.to_string();
    };

    match store.find_catalog_by_id(item_id).await {
        Ok(Some(item)) => garment_description(&item),
        Ok(None) => {
            debug!(saree_item_id = %item_id, "Catalog item not found, using default garment");
            DEFAULT_GARMENT.to_string()
        }
        Err(e) => {
            warn!(saree_item_id = %item_id, error = %e, "Catalog lookup failed, using default garment");
            DEFAULT_GARMENT.to_string()
        }
    }
}

pub fn garment_description(item: &saree_item::Model) -> String {
    format!(
        "beautiful {} saree with {} pattern, {}",
        item.color, item.pattern, item.description
    )
}
