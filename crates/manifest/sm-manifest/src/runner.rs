//! Query execution: fetch, filter, order, select.

use sm_error::Result;
use tracing::{debug, info};

use crate::RankedManifest;
use crate::config::QueryConfig;
use crate::filter::KeyFilter;
use crate::selector::{ManifestList, Selection};
use crate::source::ManifestSource;

/// Run a query against a source.
///
/// Errors from the source are returned unchanged; an unsatisfiable rank
/// yields [`SmError::OutOfRange`](sm_error::SmError::OutOfRange).
pub async fn run_query(
    source: &dyn ManifestSource,
    config: &QueryConfig,
) -> Result<Vec<RankedManifest>> {
    let filter = config.build_filter()?;
    debug!(source = %source.describe(), filter = %filter.description(), "Listing keys");

    let keys = source.list_keys().await?;
    select_from_keys(keys, &filter, config.selection)
}

/// Filter, order and select from an already-fetched key listing.
pub fn select_from_keys(
    keys: Vec<String>,
    filter: &dyn KeyFilter,
    selection: Selection,
) -> Result<Vec<RankedManifest>> {
    let listed = keys.len();
    let list = ManifestList::from_listing(keys, filter);
    debug!(listed, manifests = list.len(), "Filtered listing");

    let selected = list.select(selection)?;
    info!(%selection, selected = selected.len(), "Selected manifests");
    Ok(selected)
}
