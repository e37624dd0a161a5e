//! Batch composition.
//!
//! [`compose_batch`] validates every item of a [`BatchRequest`] and builds the
//! body of `POST /zones/{zone_id}/dns_records/batch`. Nothing is sent when any
//! item fails.

use crate::error::ValidationError;
use crate::types::{
    BatchDelete, BatchItem, BatchPatch, BatchPut, BatchRequest, CanonicalBatch, RecordRequest,
};
use crate::validator::{validate, validate_identifier};

/// Validate a batch and build its wire body.
///
/// Groups are checked in execution order (deletes, patches, puts, posts) and
/// items in caller order; the first failure is returned. Empty groups are
/// left out of the result.
///
/// # Errors
///
/// - [`ValidationError::InvalidIdentifier`] for a malformed zone or record id
/// - [`ValidationError::ZoneMismatch`] when a patch or put names another zone
/// - any error of [`validate`] for the item records
pub fn compose_batch(batch: &BatchRequest) -> Result<CanonicalBatch, ValidationError> {
    let zone_id = validate_identifier("zone_id", &batch.zone_id)?;

    let deletes = batch
        .deletes
        .iter()
        .map(|id| validate_identifier("deletes.id", id).map(|id| BatchDelete { id }))
        .collect::<Result<Vec<_>, _>>()?;

    let patches = batch
        .updates
        .iter()
        .map(|BatchPatch { id, record }| compose_item(&zone_id, "patches.id", id, record))
        .collect::<Result<Vec<_>, _>>()?;

    let puts = batch
        .overwrites
        .iter()
        .map(|BatchPut { id, record }| compose_item(&zone_id, "puts.id", id, record))
        .collect::<Result<Vec<_>, _>>()?;

    let creates = batch
        .creates
        .iter()
        .map(validate)
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!(
        "Composed batch for zone {zone_id}: {} deletes, {} patches, {} puts, {} posts",
        deletes.len(),
        patches.len(),
        puts.len(),
        creates.len()
    );

    Ok(CanonicalBatch {
        deletes: non_empty(deletes),
        patches: non_empty(patches),
        puts: non_empty(puts),
        creates: non_empty(creates),
    })
}

fn compose_item(
    zone_id: &str,
    field: &str,
    id: &str,
    record: &RecordRequest,
) -> Result<BatchItem, ValidationError> {
    let id = validate_identifier(field, id)?;

    let item_zone = record.zone_id.trim();
    if !item_zone.is_empty() && item_zone != zone_id {
        return Err(ValidationError::ZoneMismatch {
            record_id: id,
            expected: zone_id.to_string(),
            found: item_zone.to_string(),
        });
    }

    Ok(BatchItem {
        id,
        record: validate(record)?,
    })
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() { None } else { Some(items) }
}
