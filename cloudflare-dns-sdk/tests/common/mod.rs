//! Shared test helpers: assertion macros, an in-memory transport, and the
//! live-API context.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::env;
use std::sync::Mutex;

use async_trait::async_trait;
use cloudflare_dns_sdk::{
    ApiError, ClientConfig, DnsRecord, DnsRecordsClient, RecordQueryParams, RecordRequest,
    RecordType, Transport,
};
use reqwest::Method;

/// Return early when any of the environment variables is missing.
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("Skipping test: environment variable {} not set", $var);
                return;
            }
        )+
    };
}

/// Assert that an `Option` is `Some` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// Assert that a `Result` is `Ok` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

pub const ZONE_ID: &str = "023e105f4ecef8ad9ca31a8372d0c353";
pub const RECORD_ID: &str = "372e67954025e0ba6aaa6d586b9e0b59";

// ============ Mock transport ============

/// A request as seen by [`MockTransport`].
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

/// Replays queued replies and records every request.
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<Result<String, ApiError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw JSON body as the next reply.
    pub fn reply(self, body: serde_json::Value) -> Self {
        self.push(Ok(body.to_string()));
        self
    }

    /// Queue a successful envelope around `result`.
    pub fn reply_ok(self, result: serde_json::Value) -> Self {
        self.reply(serde_json::json!({
            "success": true,
            "errors": [],
            "messages": [],
            "result": result,
        }))
    }

    /// Queue an unsuccessful envelope with one error entry.
    pub fn reply_error(self, code: i64, message: &str) -> Self {
        self.reply(serde_json::json!({
            "success": false,
            "errors": [{"code": code, "message": message}],
            "messages": [],
            "result": null,
        }))
    }

    /// Queue a transport failure.
    pub fn fail(self, error: ApiError) -> Self {
        self.push(Err(error));
        self
    }

    fn push(&self, reply: Result<String, ApiError>) {
        self.replies
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push_back(reply);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        self.calls().pop()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<String>,
    ) -> Result<String, ApiError> {
        let body = body.map(|b| serde_json::from_str(&b).unwrap_or(serde_json::Value::String(b)));
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(RecordedCall {
                method,
                path: path.to_string(),
                query: query.to_vec(),
                body,
            });

        self.replies
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| {
                Err(ApiError::NetworkError {
                    detail: "no reply queued".to_string(),
                })
            })
    }
}

pub fn mock_client(transport: MockTransport) -> DnsRecordsClient<MockTransport> {
    DnsRecordsClient::with_transport(transport)
}

/// A record as the API returns it.
pub fn record_json(id: &str, name: &str, record_type: &str, content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "zone_id": ZONE_ID,
        "zone_name": "example.com",
        "name": name,
        "type": record_type,
        "content": content,
        "proxiable": true,
        "proxied": false,
        "ttl": 1,
        "settings": {},
        "meta": {},
        "comment": null,
        "tags": [],
        "created_on": "2014-01-01T05:20:00.12345Z",
        "modified_on": "2014-01-01T05:20:00.12345Z"
    })
}

// ============ Live API ============

/// Unique record name under `zone_name`, prefixed `_test-`.
pub fn generate_test_record_name(zone_name: &str) -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}.{zone_name}", &uuid.to_string()[..8])
}

/// Client and zone for tests against the real API.
pub struct TestContext {
    pub client: DnsRecordsClient,
    pub zone_id: String,
    pub zone_name: String,
}

impl TestContext {
    /// Needs `CLOUDFLARE_API_TOKEN`, `CLOUDFLARE_ZONE_ID` and `TEST_DOMAIN`.
    pub fn from_env() -> Option<Self> {
        let zone_id = env::var("CLOUDFLARE_ZONE_ID").ok()?;
        let zone_name = env::var("TEST_DOMAIN").ok()?;
        let client = DnsRecordsClient::new(&ClientConfig::from_env().ok()?).ok()?;
        Some(Self {
            client,
            zone_id,
            zone_name,
        })
    }

    pub fn txt_request(&self, content: &str) -> RecordRequest {
        RecordRequest::new(
            self.zone_id.as_str(),
            generate_test_record_name(&self.zone_name),
            RecordType::Txt,
        )
        .with_content(content)
        .with_ttl(120)
        .with_comment("integration-test")
    }

    pub async fn create_test_record(&self) -> Option<DnsRecord> {
        let request = self.txt_request("integration-test");
        self.client.create_record(&request).await.ok()
    }

    pub async fn cleanup_record(&self, record_id: &str) {
        let _ = self.client.delete_record(&self.zone_id, record_id).await;
    }

    /// Delete every leftover `_test-` record.
    pub async fn cleanup_all_test_records(&self) {
        let params = RecordQueryParams {
            comment: Some("integration-test".to_string()),
            per_page: 100,
            ..RecordQueryParams::default()
        };

        if let Ok(page) = self.client.list_records(&self.zone_id, &params).await {
            for record in page.items {
                if record.name.starts_with("_test-") {
                    self.cleanup_record(&record.id).await;
                }
            }
        }
    }
}
