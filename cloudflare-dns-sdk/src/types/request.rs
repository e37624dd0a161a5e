//! Caller-facing request types and their validated wire forms.

use serde::Serialize;

use super::record::{RecordData, RecordSettings, RecordType};

// ============ Single record ============

/// A create/update/overwrite description of one DNS record.
///
/// Built by the caller and checked by [`validate`](crate::validate) before it
/// reaches the API. Which fields matter depends on `record_type`: structured
/// types read `data`, the rest read `content`.
///
/// # Examples
///
/// ```
/// use cloudflare_dns_sdk::{RecordRequest, RecordType};
///
/// let request = RecordRequest::new("023e105f4ecef8ad9ca31a8372d0c353", "www.example.com", RecordType::A)
///     .with_content("192.0.2.1")
///     .with_ttl(3600)
///     .with_proxied(true);
/// assert_eq!(request.content.as_deref(), Some("192.0.2.1"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RecordRequest {
    /// Zone the record lives in. Inside a batch, a blank value means "the
    /// batch's zone".
    pub zone_id: String,
    /// Record name (e.g. `"www.example.com"`).
    pub name: String,
    /// Record type.
    pub record_type: RecordType,
    /// Flat record content, for types without a `data` payload.
    pub content: Option<String>,
    /// Structured payload, for types that use one.
    pub data: Option<RecordData>,
    /// Priority, required for MX, SRV and URI.
    pub priority: Option<u16>,
    /// Whether the record is proxied through Cloudflare.
    pub proxied: Option<bool>,
    /// Time to live in seconds; `1` means automatic.
    pub ttl: Option<u32>,
    /// Free-form comment.
    pub comment: Option<String>,
    /// Tags in `name:value` form.
    pub tags: Vec<String>,
    /// Per-record settings.
    pub settings: Option<RecordSettings>,
}

impl RecordRequest {
    /// Start a request with only the mandatory fields set.
    pub fn new(zone_id: impl Into<String>, name: impl Into<String>, record_type: RecordType) -> Self {
        Self {
            zone_id: zone_id.into(),
            name: name.into(),
            record_type,
            content: None,
            data: None,
            priority: None,
            proxied: None,
            ttl: None,
            comment: None,
            tags: Vec::new(),
            settings: None,
        }
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: RecordData) -> Self {
        self.data = Some(data);
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: u16) -> Self {
        self.priority = Some(priority);
        self
    }

    #[must_use]
    pub fn with_proxied(mut self, proxied: bool) -> Self {
        self.proxied = Some(proxied);
        self
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    #[must_use]
    pub fn with_settings(mut self, settings: RecordSettings) -> Self {
        self.settings = Some(settings);
        self
    }
}

/// Settings as sent on the wire. Only CNAME flattening survives validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CanonicalSettings {
    /// See [`CnameSettings::flatten_cname`](super::record::CnameSettings::flatten_cname).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flatten_cname: Option<bool>,
}

/// A validated, normalized record body, ready to be sent as JSON.
///
/// Produced only by [`validate`](crate::validate): strings are trimmed, LOC
/// numerics truncated, and fields irrelevant to the record type left unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalRequest {
    /// Trimmed record name.
    pub name: String,
    /// Record type.
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// Trimmed content; unset for structured types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Normalized payload; set only for structured types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<RecordData>,
    /// Priority; set only for MX, SRV and URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxied: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    /// Trimmed comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Trimmed, non-blank tags.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<CanonicalSettings>,
}

// ============ Batch ============

/// A batch item that patches an existing record.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchPatch {
    /// Record to patch.
    pub id: String,
    /// New values.
    pub record: RecordRequest,
}

/// A batch item that overwrites an existing record.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchPut {
    /// Record to overwrite.
    pub id: String,
    /// Replacement values.
    pub record: RecordRequest,
}

/// A set of record operations applied in one call.
///
/// The API always executes deletes, then patches, then puts, then posts,
/// whatever order the caller assembled them in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BatchRequest {
    /// Zone every operation applies to.
    pub zone_id: String,
    /// Records to delete.
    pub deletes: Vec<String>,
    /// Records to patch.
    pub updates: Vec<BatchPatch>,
    /// Records to overwrite.
    pub overwrites: Vec<BatchPut>,
    /// Records to create.
    pub creates: Vec<RecordRequest>,
}

impl BatchRequest {
    pub fn new(zone_id: impl Into<String>) -> Self {
        Self {
            zone_id: zone_id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn delete(mut self, id: impl Into<String>) -> Self {
        self.deletes.push(id.into());
        self
    }

    #[must_use]
    pub fn update(mut self, id: impl Into<String>, record: RecordRequest) -> Self {
        self.updates.push(BatchPatch {
            id: id.into(),
            record,
        });
        self
    }

    #[must_use]
    pub fn overwrite(mut self, id: impl Into<String>, record: RecordRequest) -> Self {
        self.overwrites.push(BatchPut {
            id: id.into(),
            record,
        });
        self
    }

    #[must_use]
    pub fn create(mut self, record: RecordRequest) -> Self {
        self.creates.push(record);
        self
    }

    /// Whether the batch holds no operation at all.
    pub fn is_empty(&self) -> bool {
        self.deletes.is_empty()
            && self.updates.is_empty()
            && self.overwrites.is_empty()
            && self.creates.is_empty()
    }
}

/// Wire form of a batch delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchDelete {
    pub id: String,
}

/// Wire form of a batch patch or put: the canonical body plus the record id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchItem {
    pub id: String,
    #[serde(flatten)]
    pub record: CanonicalRequest,
}

/// A validated batch body.
///
/// Field order matches the server's execution order; empty groups are left
/// out of the JSON entirely.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CanonicalBatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletes: Option<Vec<BatchDelete>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patches: Option<Vec<BatchItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub puts: Option<Vec<BatchItem>>,
    #[serde(rename = "posts", skip_serializing_if = "Option::is_none")]
    pub creates: Option<Vec<CanonicalRequest>>,
}

// ============ Listing ============

/// How multiple list filters combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMatch {
    /// A record must satisfy every filter.
    All,
    /// A record must satisfy at least one filter.
    Any,
}

/// Filters and page selection for listing the records of a zone.
///
/// # Default
///
/// `page = 1, per_page = 100`, no filters.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordQueryParams {
    /// Page number (1-indexed).
    pub page: u32,
    /// Records per page.
    pub per_page: u32,
    /// Exact record name.
    pub name: Option<String>,
    /// Record type.
    pub record_type: Option<RecordType>,
    /// Exact record content.
    pub content: Option<String>,
    /// Exact comment.
    pub comment: Option<String>,
    /// Tag, as `name` or `name:value`.
    pub tag: Option<String>,
    /// How the filters above combine; the API defaults to `All`.
    pub filter_match: Option<FilterMatch>,
}

impl Default for RecordQueryParams {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 100,
            name: None,
            record_type: None,
            content: None,
            comment: None,
            tag: None,
            filter_match: None,
        }
    }
}

impl RecordQueryParams {
    /// Smallest page size the API accepts.
    pub const MIN_PER_PAGE: u32 = 5;
    /// Largest page size this client requests.
    pub const MAX_PER_PAGE: u32 = 5000;

    /// Clamp page selection to valid ranges.
    ///
    /// - `page` is clamped to `>= 1`
    /// - `per_page` is clamped to `MIN_PER_PAGE..=MAX_PER_PAGE`
    /// - filters are preserved as-is
    #[must_use]
    pub fn validated(&self) -> Self {
        Self {
            page: self.page.max(1),
            per_page: self.per_page.clamp(Self::MIN_PER_PAGE, Self::MAX_PER_PAGE),
            ..self.clone()
        }
    }

    /// Render as query-string pairs. Blank filters are skipped.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = vec![
            ("page".to_string(), self.page.to_string()),
            ("per_page".to_string(), self.per_page.to_string()),
        ];

        let filters = [
            ("name", self.name.as_deref()),
            ("type", self.record_type.map(RecordType::as_str)),
            ("content", self.content.as_deref()),
            ("comment", self.comment.as_deref()),
            ("tag", self.tag.as_deref()),
        ];
        for (key, value) in filters {
            if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
                query.push((key.to_string(), value.to_string()));
            }
        }

        if let Some(filter_match) = self.filter_match {
            let value = match filter_match {
                FilterMatch::All => "all",
                FilterMatch::Any => "any",
            };
            query.push(("match".to_string(), value.to_string()));
        }

        query
    }
}
