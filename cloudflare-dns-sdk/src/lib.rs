//! # cloudflare-dns-sdk
//!
//! A typed client for the Cloudflare DNS records API that rejects malformed
//! requests locally, before they reach the network.
//!
//! ## What is checked
//!
//! Cloudflare knows 21 record types. They differ in where the value lives:
//!
//! | Types | Value carried by | Priority |
//! |-------|------------------|----------|
//! | A, AAAA, CNAME, NS, PTR, TXT, OPENPGPKEY | `content` | - |
//! | MX | `content` | required |
//! | CAA, CERT, DNSKEY, DS, HTTPS, LOC, NAPTR, SMIMEA, SSHFP, SVCB, TLSA | typed `data` | - |
//! | SRV, URI | typed `data` | required |
//!
//! [`validate`] enforces these rules plus TTL and LOC ranges, trims strings and
//! truncates LOC numerics, then hands back a [`CanonicalRequest`] that
//! serializes to the exact wire body. [`compose_batch`] does the same for a
//! whole [`BatchRequest`] and checks that every item targets the batch's zone.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation and static builds.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cloudflare_dns_sdk::{ClientConfig, DnsRecordsClient, RecordQueryParams, RecordRequest, RecordType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DnsRecordsClient::new(&ClientConfig::new("your-token"))?;
//!     let zone = "023e105f4ecef8ad9ca31a8372d0c353";
//!
//!     let request = RecordRequest::new(zone, "www.example.com", RecordType::A)
//!         .with_content("192.0.2.1")
//!         .with_ttl(3600);
//!     let record = client.create_record(&request).await?;
//!     println!("created {}", record.id);
//!
//!     let page = client.list_records(zone, &RecordQueryParams::default()).await?;
//!     for record in &page.items {
//!         println!("{} {} {:?}", record.name, record.record_type, record.content);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Batches
//!
//! ```rust,no_run
//! # use cloudflare_dns_sdk::*;
//! # async fn example(client: DnsRecordsClient) -> Result<()> {
//! let zone = "023e105f4ecef8ad9ca31a8372d0c353";
//! let batch = BatchRequest::new(zone)
//!     .delete("372e67954025e0ba6aaa6d586b9e0b59")
//!     .create(
//!         RecordRequest::new(zone, "example.com", RecordType::Caa).with_data(RecordData::Caa(
//!             CaaData {
//!                 flags: 0,
//!                 tag: "issue".to_string(),
//!                 value: "letsencrypt.org".to_string(),
//!             },
//!         )),
//!     );
//! let result = client.batch(&batch).await?;
//! println!("{} created", result.posts.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Client methods return [`Result<T>`](Result), whose [`Error`] is either:
//!
//! - [`Error::Validation`]: the request was rejected locally; see
//!   [`ValidationError`]. Nothing was sent.
//! - [`Error::Api`]: the transport or the API failed; see [`ApiError`].
//!   Cloudflare error codes are mapped onto structured variants such as
//!   [`ApiError::RecordNotFound`] or [`ApiError::RateLimited`].
//!
//! No request is retried. [`ApiError::is_transient`] tells which failures may
//! succeed when repeated.
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`] facade; install any logger to see them.
//! Bodies are truncated and tokens masked before they are logged.

mod batch;
mod client;
mod coercion;
mod config;
mod error;
mod schema;
mod transport;
mod types;
mod utils;
mod validator;

// Validation entry points
pub use batch::compose_batch;
pub use coercion::{truncate_altitude, truncate_loc_seconds};
pub use schema::{DATA_COMPONENT_TYPES, PRIORITY_TYPES, RecordTypeSchema};
pub use validator::{TTL_AUTOMATIC, TTL_RANGE, validate, validate_identifier};

// Client
pub use client::DnsRecordsClient;
pub use config::{API_BASE_ENV, API_TOKEN_ENV, ClientConfig, DEFAULT_API_BASE};
pub use transport::{HttpTransport, Transport};

// Re-export error types
pub use error::{ApiError, Error, Result, ValidationError};

// Re-export types
pub use types::{
    AddressSettings, BatchDelete, BatchItem, BatchPatch, BatchPut, BatchRequest, BatchResult,
    CaaData, CanonicalBatch, CanonicalRequest, CanonicalSettings, CertData, CnameSettings,
    DeletedRecord, DnskeyData, DnsRecord, DsData, FilterMatch, LatitudeDirection, LocData,
    LongitudeDirection, NaptrData, PaginatedResponse, RecordData, RecordQueryParams,
    RecordRequest, RecordSettings, RecordSettingsInfo, RecordType, Response, ResponseInfo,
    ResultInfo, SrvData, SshfpData, SvcbData, TlsaData, UriData,
};

// Re-export utils module
pub use utils::datetime;
