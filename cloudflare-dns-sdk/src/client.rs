//! The DNS records client.

use crate::batch::compose_batch;
use crate::config::ClientConfig;
use crate::error::{ApiError, Error, Result};
use crate::transport::{ErrorContext, HttpTransport, Transport};
use crate::types::{
    BatchRequest, BatchResult, DeletedRecord, DnsRecord, PaginatedResponse, RecordQueryParams,
    RecordRequest, Response,
};
use crate::validator::{validate, validate_identifier};

/// Client for `/zones/{zone_id}/dns_records`.
///
/// Every request is validated locally first; an invalid request returns
/// [`Error::Validation`] without touching the network.
///
/// The transport is a type parameter so tests can swap in their own; the
/// default is [`HttpTransport`].
#[derive(Debug, Clone)]
pub struct DnsRecordsClient<T = HttpTransport> {
    transport: T,
}

impl DnsRecordsClient<HttpTransport> {
    /// Create a client over HTTPS.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] when the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }

    /// Create a client from `CLOUDFLARE_API_TOKEN` / `CLOUDFLARE_API_BASE`.
    pub fn from_env() -> Result<Self> {
        Self::new(&ClientConfig::from_env()?)
    }
}

impl<T: Transport> DnsRecordsClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Create a record in `request.zone_id`.
    pub async fn create_record(&self, request: &RecordRequest) -> Result<DnsRecord> {
        let zone_id = validate_identifier("zone_id", &request.zone_id)?;
        let body = validate(request)?;

        let context = ErrorContext::zone(&zone_id).with_record_name(&body.name);
        let response = self.transport.post(&records_path(&zone_id), &body, &[]).await;
        let record: DnsRecord = finish("create_record", response, context)?;

        log::debug!("Created {} record {} ({})", record.record_type, record.name, record.id);
        Ok(record)
    }

    /// Fetch one record.
    pub async fn get_record(&self, zone_id: &str, record_id: &str) -> Result<DnsRecord> {
        let zone_id = validate_identifier("zone_id", zone_id)?;
        let record_id = validate_identifier("record_id", record_id)?;

        let context = ErrorContext::zone(&zone_id).with_record_id(&record_id);
        let response = self
            .transport
            .get(&record_path(&zone_id, &record_id), &[])
            .await;
        finish("get_record", response, context)
    }

    /// Fetch one page of the zone's records.
    ///
    /// `params` is clamped with [`RecordQueryParams::validated`] first.
    pub async fn list_records(
        &self,
        zone_id: &str,
        params: &RecordQueryParams,
    ) -> Result<PaginatedResponse<DnsRecord>> {
        let zone_id = validate_identifier("zone_id", zone_id)?;
        let params = params.validated();

        let response: std::result::Result<Response<Vec<DnsRecord>>, ApiError> = self
            .transport
            .get(&records_path(&zone_id), &params.to_query())
            .await;
        let total_count = response
            .as_ref()
            .ok()
            .and_then(|r| r.result_info.as_ref())
            .map(|info| info.total_count);

        let items = finish("list_records", response, ErrorContext::zone(&zone_id))?;
        let total_count =
            total_count.unwrap_or_else(|| u32::try_from(items.len()).unwrap_or(u32::MAX));

        Ok(PaginatedResponse::new(
            items,
            params.page,
            params.per_page,
            total_count,
        ))
    }

    /// Patch a record: only the fields set on `request` change.
    pub async fn update_record(
        &self,
        record_id: &str,
        request: &RecordRequest,
    ) -> Result<DnsRecord> {
        let zone_id = validate_identifier("zone_id", &request.zone_id)?;
        let record_id = validate_identifier("record_id", record_id)?;
        let body = validate(request)?;

        let context = ErrorContext::zone(&zone_id)
            .with_record_id(&record_id)
            .with_record_name(&body.name);
        let response = self
            .transport
            .patch(&record_path(&zone_id, &record_id), &body)
            .await;
        finish("update_record", response, context)
    }

    /// Replace a record entirely.
    pub async fn overwrite_record(
        &self,
        record_id: &str,
        request: &RecordRequest,
    ) -> Result<DnsRecord> {
        let zone_id = validate_identifier("zone_id", &request.zone_id)?;
        let record_id = validate_identifier("record_id", record_id)?;
        let body = validate(request)?;

        let context = ErrorContext::zone(&zone_id)
            .with_record_id(&record_id)
            .with_record_name(&body.name);
        let response = self
            .transport
            .put(&record_path(&zone_id, &record_id), &body)
            .await;
        finish("overwrite_record", response, context)
    }

    pub async fn delete_record(&self, zone_id: &str, record_id: &str) -> Result<DeletedRecord> {
        let zone_id = validate_identifier("zone_id", zone_id)?;
        let record_id = validate_identifier("record_id", record_id)?;

        let context = ErrorContext::zone(&zone_id).with_record_id(&record_id);
        let response = self
            .transport
            .delete(&record_path(&zone_id, &record_id), &[])
            .await;
        finish("delete_record", response, context)
    }

    /// Apply a batch in one call.
    ///
    /// The server runs deletes, patches, puts, then posts, and the whole batch
    /// fails or succeeds together. An empty batch returns an empty result
    /// without a request.
    pub async fn batch(&self, batch: &BatchRequest) -> Result<BatchResult> {
        let body = compose_batch(batch)?;
        let zone_id = validate_identifier("zone_id", &batch.zone_id)?;

        if batch.is_empty() {
            log::debug!("Empty batch for zone {zone_id}, nothing to send");
            return Ok(BatchResult::default());
        }

        let response = self
            .transport
            .post(&format!("{}/batch", records_path(&zone_id)), &body, &[])
            .await;
        finish("batch", response, ErrorContext::zone(&zone_id))
    }
}

fn records_path(zone_id: &str) -> String {
    format!("/zones/{zone_id}/dns_records")
}

fn record_path(zone_id: &str, record_id: &str) -> String {
    format!("/zones/{zone_id}/dns_records/{record_id}")
}

/// Unwrap a response envelope, logging failures at a level matching their cause.
fn finish<R>(
    operation: &str,
    response: std::result::Result<Response<R>, ApiError>,
    context: ErrorContext,
) -> Result<R> {
    response
        .and_then(|r| r.into_result(context))
        .map_err(|e| {
            if e.is_expected() {
                log::warn!("{operation} failed: {e}");
            } else {
                log::error!("{operation} failed: {e}");
            }
            Error::Api(e)
        })
}
