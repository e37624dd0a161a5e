//! Cloudflare error code mapping
//!
//! Reference: <https://developers.cloudflare.com/fundamentals/api/reference/errors/>

use crate::error::ApiError;
use crate::types::{Response, ResponseInfo};

/// What the failing call was about, used to fill error variants.
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    pub record_name: Option<String>,
    pub record_id: Option<String>,
    pub zone_id: Option<String>,
}

impl ErrorContext {
    pub fn zone(zone_id: &str) -> Self {
        Self {
            zone_id: Some(zone_id.to_string()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_record_id(mut self, record_id: &str) -> Self {
        self.record_id = Some(record_id.to_string());
        self
    }

    #[must_use]
    pub fn with_record_name(mut self, name: &str) -> Self {
        self.record_name = Some(name.to_string());
        self
    }
}

fn or_unknown(value: Option<String>) -> String {
    value.unwrap_or_else(|| "<unknown>".to_string())
}

/// Map the first error entry of a failed envelope.
pub(crate) fn map_api_error(info: ResponseInfo, context: ErrorContext) -> ApiError {
    let message = info.message;
    match info.code {
        // 6003: Invalid request headers
        // 6103: Invalid format for X-Auth-Key header
        // 6111: Invalid format for Authorization header
        // 9109: Unauthorized to access requested resource
        // 10000: Authentication error
        6003 | 6103 | 6111 | 9109 | 10000 => ApiError::InvalidCredentials {
            raw_message: Some(message),
        },

        // 1004: DNS Validation Error
        // 9000: Invalid or missing name
        // 9005/9006: Content is not a valid IPv4/IPv6 address
        // 9009: Content for MX record must be a hostname
        // 9021: Invalid TTL
        // 9041: This DNS record cannot be proxied
        code @ (1004 | 9000 | 9005 | 9006 | 9009 | 9021 | 9041) => {
            let param = match code {
                9000 => "name",
                9005 | 9006 | 9009 => "content",
                9021 => "ttl",
                9041 => "proxied",
                _ => "general",
            };
            ApiError::InvalidParameter {
                param: param.to_string(),
                detail: message,
            }
        }

        // 81053..=81058: a conflicting record already exists
        81053..=81058 => ApiError::RecordExists {
            record_name: or_unknown(context.record_name),
            raw_message: Some(message),
        },

        // 81044: Record does not exist
        81044 => ApiError::RecordNotFound {
            record_id: or_unknown(context.record_id),
            raw_message: Some(message),
        },

        // 81045: The record quota has been exceeded
        81045 => ApiError::QuotaExceeded {
            raw_message: Some(message),
        },

        // 7000: No route for that URI
        // 7003: Could not route to /path, object identifier invalid
        7000 | 7003 => ApiError::ZoneNotFound {
            zone_id: or_unknown(context.zone_id),
            raw_message: Some(message),
        },

        code => ApiError::Unknown {
            raw_code: Some(code.to_string()),
            raw_message: message,
        },
    }
}

impl<T> Response<T> {
    /// Unwrap the payload, or map the first reported error.
    pub(crate) fn into_result(self, context: ErrorContext) -> Result<T, ApiError> {
        if !self.success {
            let Some(first) = self.errors.into_iter().next() else {
                return Err(ApiError::Unknown {
                    raw_code: None,
                    raw_message: "Unknown error".to_string(),
                });
            };
            log::error!("API error {}: {}", first.code, first.message);
            return Err(map_api_error(first, context));
        }

        self.result.ok_or_else(|| ApiError::ParseError {
            detail: "Missing result field in response".to_string(),
        })
    }
}
