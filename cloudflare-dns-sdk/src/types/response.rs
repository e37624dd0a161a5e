//! Response envelope and record types returned by the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::{RecordData, RecordType};

/// The envelope every API response is wrapped in.
#[derive(Debug, Deserialize)]
pub struct Response<T> {
    /// Whether the call succeeded.
    pub success: bool,
    /// Errors, present when `success` is false.
    #[serde(default)]
    pub errors: Vec<ResponseInfo>,
    /// Informational messages.
    #[serde(default)]
    pub messages: Vec<ResponseInfo>,
    /// The payload.
    pub result: Option<T>,
    /// Page information, on list endpoints.
    pub result_info: Option<ResultInfo>,
}

/// An error or message entry of the envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseInfo {
    pub code: i64,
    pub message: String,
}

/// Page information of a list response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResultInfo {
    pub page: u32,
    pub per_page: u32,
    pub count: u32,
    pub total_count: u32,
    pub total_pages: u32,
}

/// Settings echoed back on a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordSettingsInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flatten_cname: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv4_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6_only: Option<bool>,
}

/// A DNS record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Record identifier.
    pub id: String,
    /// Zone identifier (only present on some endpoints).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
    /// Zone name (only present on some endpoints).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_name: Option<String>,
    /// Fully qualified record name.
    pub name: String,
    /// Record type.
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// Flat content. For structured types the API renders `data` here too.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Whether the record may be proxied.
    #[serde(default)]
    pub proxiable: bool,
    /// Whether the record is proxied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxied: Option<bool>,
    /// Time to live in seconds; `1` means automatic.
    pub ttl: u32,
    /// Priority, for MX, SRV and URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
    /// Raw structured payload; see [`typed_data`](Self::typed_data).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<RecordSettingsInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// When the record was created.
    #[serde(
        default,
        with = "crate::utils::datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_on: Option<DateTime<Utc>>,
    /// When the record was last modified.
    #[serde(
        default,
        with = "crate::utils::datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub modified_on: Option<DateTime<Utc>>,
}

impl DnsRecord {
    /// Decode [`data`](Self::data) into the shape matching the record type.
    ///
    /// `Ok(None)` when the record carries no payload or its type has none.
    pub fn typed_data(&self) -> serde_json::Result<Option<RecordData>> {
        match &self.data {
            Some(value) => RecordData::from_value(self.record_type, value.clone()),
            None => Ok(None),
        }
    }
}

/// Identifier returned after a delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedRecord {
    pub id: String,
}

/// Records affected by a batch call, grouped by operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchResult {
    pub deletes: Vec<DnsRecord>,
    pub patches: Vec<DnsRecord>,
    pub puts: Vec<DnsRecord>,
    pub posts: Vec<DnsRecord>,
}

/// One page of a list operation.
///
/// # Type Parameters
///
/// * `T`: The item type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    /// Items in the current page.
    pub items: Vec<T>,
    /// Current page number.
    pub page: u32,
    /// Page size used for this request.
    pub per_page: u32,
    /// Total number of items across all pages.
    pub total_count: u32,
    /// Whether there are more pages after this one.
    pub has_more: bool,
}

impl<T> PaginatedResponse<T> {
    /// Create a page, computing [`has_more`](Self::has_more).
    pub fn new(items: Vec<T>, page: u32, per_page: u32, total_count: u32) -> Self {
        let has_more = u64::from(page) * u64::from(per_page) < u64::from(total_count);
        Self {
            items,
            page,
            per_page,
            total_count,
            has_more,
        }
    }
}
