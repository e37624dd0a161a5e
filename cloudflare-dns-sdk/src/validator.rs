//! Single-record validation.
//!
//! [`validate`] turns a caller-built [`RecordRequest`] into the
//! [`CanonicalRequest`] that is sent on the wire. Checks run in a fixed order
//! and stop at the first failure, so a given bad request always reports the
//! same error.

use std::fmt::Display;
use std::ops::RangeInclusive;

use crate::coercion::{truncate_altitude, truncate_loc_seconds};
use crate::error::ValidationError;
use crate::schema::RecordTypeSchema;
use crate::types::{
    CaaData, CanonicalRequest, CanonicalSettings, CertData, DnskeyData, DsData, LocData,
    NaptrData, RecordData, RecordRequest, RecordSettings, RecordType, SrvData, SshfpData, SvcbData,
    TlsaData, UriData,
};

/// TTL value meaning "automatic".
pub const TTL_AUTOMATIC: u32 = 1;
/// Accepted explicit TTL range, in seconds.
///
/// Non-Enterprise zones have a 60 s floor, enforced by the API.
pub const TTL_RANGE: RangeInclusive<u32> = 30..=86_400;

/// Longest identifier the API issues.
const MAX_IDENTIFIER_LEN: usize = 32;

const LAT_DEGREES: RangeInclusive<i32> = 0..=90;
const LONG_DEGREES: RangeInclusive<i32> = 0..=180;
const MINUTES: RangeInclusive<i32> = 0..=59;
const ALTITUDE: RangeInclusive<f64> = -100_000.0..=42_849_672.95;
const LOC_METERS: RangeInclusive<i32> = 0..=90_000_000;

/// Validate and normalize a single record request.
///
/// The zone is not checked here; callers pass it in the request path.
///
/// # Errors
///
/// The first violated rule, in this order: blank name, blank content (flat
/// types), missing data (structured types), missing priority (MX/SRV/URI), TTL
/// out of range, then the `data` payload itself.
pub fn validate(request: &RecordRequest) -> Result<CanonicalRequest, ValidationError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(ValidationError::missing("name"));
    }

    let schema = RecordTypeSchema::of(request.record_type);

    let mut canonical = CanonicalRequest {
        name: name.to_string(),
        record_type: request.record_type,
        content: None,
        data: None,
        priority: None,
        proxied: request.proxied,
        ttl: None,
        comment: request.comment.as_deref().map(|c| c.trim().to_string()),
        tags: request
            .tags
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
        settings: None,
    };

    if schema.content_required() {
        canonical.content = Some(non_blank(
            "content",
            request.content.as_deref().unwrap_or_default(),
        )?);
    }

    // Settings of any other shape, or on any other type, are dropped without error.
    if request.record_type == RecordType::Cname
        && let Some(RecordSettings::Cname(settings)) = &request.settings
    {
        canonical.settings = Some(CanonicalSettings {
            flatten_cname: settings.flatten_cname,
        });
    }

    if schema.data_component && request.data.is_none() {
        return Err(ValidationError::missing("data"));
    }

    if schema.priority_required {
        let priority = request
            .priority
            .ok_or_else(|| ValidationError::missing("priority"))?;
        canonical.priority = Some(priority);
    }

    if let Some(ttl) = request.ttl {
        if ttl != TTL_AUTOMATIC && !TTL_RANGE.contains(&ttl) {
            return Err(ValidationError::out_of_range(
                "ttl",
                format!(
                    "must be {TTL_AUTOMATIC} (automatic) or between {} and {}, got {ttl}",
                    TTL_RANGE.start(),
                    TTL_RANGE.end()
                ),
            ));
        }
        canonical.ttl = Some(ttl);
    }

    if let Some(expected) = schema.expected_data()
        && let Some(data) = &request.data
    {
        canonical.data = Some(validate_data(expected, data)?);
    }

    log::debug!(
        "Validated {} record '{}'",
        canonical.record_type,
        canonical.name
    );
    Ok(canonical)
}

/// Check a zone or record identifier and return it trimmed.
///
/// Identifiers are 1 to 32 ASCII alphanumerics.
pub fn validate_identifier(field: &str, id: &str) -> Result<String, ValidationError> {
    let trimmed = id.trim();
    let well_formed = !trimmed.is_empty()
        && trimmed.len() <= MAX_IDENTIFIER_LEN
        && trimmed.bytes().all(|b| b.is_ascii_alphanumeric());

    if well_formed {
        Ok(trimmed.to_string())
    } else {
        Err(ValidationError::InvalidIdentifier {
            field: field.to_string(),
            value: id.to_string(),
        })
    }
}

fn validate_data(expected: RecordType, data: &RecordData) -> Result<RecordData, ValidationError> {
    if data.record_type() != expected {
        return Err(ValidationError::TypeMismatch {
            field: "data".to_string(),
            expected: expected.to_string(),
            found: data.record_type().to_string(),
        });
    }

    let normalized = match data {
        RecordData::Caa(caa) => RecordData::Caa(CaaData {
            flags: caa.flags,
            tag: non_blank("data.tag", &caa.tag)?,
            value: non_blank("data.value", &caa.value)?,
        }),
        RecordData::Cert(cert) => RecordData::Cert(CertData {
            certificate: non_blank("data.certificate", &cert.certificate)?,
            ..cert.clone()
        }),
        RecordData::Dnskey(key) => RecordData::Dnskey(DnskeyData {
            public_key: non_blank("data.public_key", &key.public_key)?,
            ..key.clone()
        }),
        RecordData::Ds(ds) => RecordData::Ds(DsData {
            digest: non_blank("data.digest", &ds.digest)?,
            ..ds.clone()
        }),
        RecordData::Https(svcb) => RecordData::Https(validate_svcb(svcb)?),
        RecordData::Svcb(svcb) => RecordData::Svcb(validate_svcb(svcb)?),
        RecordData::Loc(loc) => RecordData::Loc(validate_loc(loc)?),
        RecordData::Naptr(naptr) => RecordData::Naptr(NaptrData {
            flags: non_blank("data.flags", &naptr.flags)?,
            order: naptr.order,
            preference: naptr.preference,
            regex: non_blank("data.regex", &naptr.regex)?,
            replacement: non_blank("data.replacement", &naptr.replacement)?,
            service: non_blank("data.service", &naptr.service)?,
        }),
        RecordData::Smimea(tlsa) => RecordData::Smimea(validate_tlsa(tlsa)?),
        RecordData::Tlsa(tlsa) => RecordData::Tlsa(validate_tlsa(tlsa)?),
        RecordData::Srv(srv) => RecordData::Srv(SrvData {
            target: non_blank("data.target", &srv.target)?,
            ..srv.clone()
        }),
        RecordData::Sshfp(sshfp) => RecordData::Sshfp(SshfpData {
            fingerprint: non_blank("data.fingerprint", &sshfp.fingerprint)?,
            ..sshfp.clone()
        }),
        RecordData::Uri(uri) => RecordData::Uri(UriData {
            target: non_blank("data.target", &uri.target)?,
            weight: uri.weight,
        }),
    };

    Ok(normalized)
}

fn validate_svcb(svcb: &SvcbData) -> Result<SvcbData, ValidationError> {
    Ok(SvcbData {
        priority: svcb.priority,
        target: non_blank("data.target", &svcb.target)?,
        value: non_blank("data.value", &svcb.value)?,
    })
}

fn validate_tlsa(tlsa: &TlsaData) -> Result<TlsaData, ValidationError> {
    Ok(TlsaData {
        certificate: non_blank("data.certificate", &tlsa.certificate)?,
        ..tlsa.clone()
    })
}

fn validate_loc(loc: &LocData) -> Result<LocData, ValidationError> {
    in_range("data.lat_degrees", loc.lat_degrees, &LAT_DEGREES)?;
    in_range("data.lat_minutes", loc.lat_minutes, &MINUTES)?;
    seconds_in_range("data.lat_seconds", loc.lat_seconds)?;

    in_range("data.long_degrees", loc.long_degrees, &LONG_DEGREES)?;
    in_range("data.long_minutes", loc.long_minutes, &MINUTES)?;
    seconds_in_range("data.long_seconds", loc.long_seconds)?;

    in_range("data.altitude", loc.altitude, &ALTITUDE)?;
    in_range("data.size", loc.size, &LOC_METERS)?;
    in_range("data.precision_horz", loc.precision_horz, &LOC_METERS)?;
    in_range("data.precision_vert", loc.precision_vert, &LOC_METERS)?;

    Ok(LocData {
        lat_seconds: truncate_loc_seconds(loc.lat_seconds),
        long_seconds: truncate_loc_seconds(loc.long_seconds),
        altitude: truncate_altitude(loc.altitude),
        ..loc.clone()
    })
}

/// Trimmed value of a string field that must not be blank.
fn non_blank(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::missing(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn in_range<T>(field: &str, value: T, range: &RangeInclusive<T>) -> Result<(), ValidationError>
where
    T: PartialOrd + Display,
{
    // `contains` is false for NaN, which is therefore rejected too.
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::out_of_range(
            field,
            format!(
                "must be between {} and {}, got {value}",
                range.start(),
                range.end()
            ),
        ))
    }
}

/// Seconds may carry any fraction below 60; truncation happens afterwards.
fn seconds_in_range(field: &str, seconds: f64) -> Result<(), ValidationError> {
    if (0.0..60.0).contains(&seconds) {
        Ok(())
    } else {
        Err(ValidationError::out_of_range(
            field,
            format!("must be between 0 and 59.999, got {seconds}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::DATA_COMPONENT_TYPES;
    use crate::types::{
        AddressSettings, CnameSettings, LatitudeDirection, LongitudeDirection,
    };

    const ZONE: &str = "023e105f4ecef8ad9ca31a8372d0c353";

    fn request(record_type: RecordType) -> RecordRequest {
        RecordRequest::new(ZONE, "example.com", record_type)
    }

    fn loc() -> LocData {
        LocData {
            lat_degrees: 37,
            lat_minutes: 46,
            lat_seconds: 46.0,
            lat_direction: LatitudeDirection::North,
            long_degrees: 122,
            long_minutes: 23,
            long_seconds: 35.0,
            long_direction: LongitudeDirection::West,
            altitude: 0.0,
            size: 100,
            precision_horz: 0,
            precision_vert: 0,
        }
    }

    /// A correctly shaped payload for every structured type.
    fn sample_data(record_type: RecordType) -> RecordData {
        let svcb = SvcbData {
            priority: 1,
            target: ".".to_string(),
            value: "alpn=\"h3,h2\"".to_string(),
        };
        let tlsa = TlsaData {
            certificate: "d2abde240d7cd3ee6b4b28c54df034b9".to_string(),
            matching_type: 1,
            selector: 0,
            usage: 3,
        };
        match record_type {
            RecordType::Caa => RecordData::Caa(CaaData {
                flags: 0,
                tag: "issue".to_string(),
                value: "letsencrypt.org".to_string(),
            }),
            RecordType::Cert => RecordData::Cert(CertData {
                algorithm: 8,
                certificate: "MIIBIjANBgkqhkiG9w0BAQEFAAOC".to_string(),
                key_tag: 1,
                cert_type: 9,
            }),
            RecordType::Dnskey => RecordData::Dnskey(DnskeyData {
                algorithm: 13,
                flags: 257,
                protocol: 3,
                public_key: "mdsswUyr3DPW132mOi8V9xESWE8jTo0d".to_string(),
            }),
            RecordType::Ds => RecordData::Ds(DsData {
                algorithm: 13,
                digest: "436c6f7564666c617265".to_string(),
                digest_type: 2,
                key_tag: 2371,
            }),
            RecordType::Https => RecordData::Https(svcb),
            RecordType::Svcb => RecordData::Svcb(svcb),
            RecordType::Loc => RecordData::Loc(loc()),
            RecordType::Naptr => RecordData::Naptr(NaptrData {
                flags: "S".to_string(),
                order: 100,
                preference: 10,
                regex: "!^.*$!sip:info@example.com!".to_string(),
                replacement: ".".to_string(),
                service: "SIP+D2U".to_string(),
            }),
            RecordType::Smimea => RecordData::Smimea(tlsa),
            RecordType::Tlsa => RecordData::Tlsa(tlsa),
            RecordType::Srv => RecordData::Srv(SrvData {
                port: 8806,
                priority: 10,
                target: "sip.example.com".to_string(),
                weight: 5,
            }),
            RecordType::Sshfp => RecordData::Sshfp(SshfpData {
                algorithm: 4,
                fingerprint_type: 2,
                fingerprint: "123456789abcdef67890123456789abcdef67890".to_string(),
            }),
            RecordType::Uri => RecordData::Uri(UriData {
                target: "ftp://ftp1.example.com/public".to_string(),
                weight: 20,
            }),
            other => panic!("{other} has no data payload"),
        }
    }

    /// A request for `record_type` that passes every check.
    fn valid_request(record_type: RecordType) -> RecordRequest {
        let schema = RecordTypeSchema::of(record_type);
        let mut req = request(record_type);
        if schema.data_component {
            req.data = Some(sample_data(record_type));
        } else {
            req.content = Some("value.example.com".to_string());
        }
        if schema.priority_required {
            req.priority = Some(10);
        }
        req
    }

    // ---- name ----

    #[test]
    fn blank_name_rejected() {
        let mut req = valid_request(RecordType::A);
        req.name = "   ".to_string();
        assert_eq!(validate(&req), Err(ValidationError::missing("name")));
    }

    #[test]
    fn name_checked_before_content() {
        let mut req = request(RecordType::A);
        req.name = String::new();
        assert_eq!(validate(&req), Err(ValidationError::missing("name")));
    }

    #[test]
    fn name_is_trimmed() {
        let mut req = valid_request(RecordType::A);
        req.name = "  www.example.com ".to_string();
        assert_eq!(validate(&req).unwrap().name, "www.example.com");
    }

    // ---- content ----

    #[test]
    fn flat_types_require_content() {
        for t in RecordType::ALL {
            if RecordTypeSchema::of(t).data_component {
                continue;
            }
            let mut req = valid_request(t);
            req.content = Some(" \t ".to_string());
            assert_eq!(
                validate(&req),
                Err(ValidationError::missing("content")),
                "{t} accepted blank content"
            );
            req.content = None;
            assert_eq!(validate(&req), Err(ValidationError::missing("content")));
        }
    }

    #[test]
    fn flat_content_is_trimmed() {
        let req = request(RecordType::A).with_content("  127.0.1.53  ");
        let canonical = validate(&req).unwrap();
        assert_eq!(canonical.content.as_deref(), Some("127.0.1.53"));
        assert_eq!(canonical.data, None);
    }

    #[test]
    fn structured_types_clear_content() {
        let req = valid_request(RecordType::Caa).with_content("0 issue other.ca");
        assert_eq!(validate(&req).unwrap().content, None);
    }

    // ---- data presence ----

    #[test]
    fn structured_types_require_data() {
        for t in DATA_COMPONENT_TYPES {
            let mut req = valid_request(t);
            req.data = None;
            assert_eq!(
                validate(&req),
                Err(ValidationError::missing("data")),
                "{t} accepted missing data"
            );
        }
    }

    #[test]
    fn structured_types_accept_valid_data() {
        for t in DATA_COMPONENT_TYPES {
            let req = valid_request(t);
            let canonical = validate(&req).unwrap_or_else(|e| panic!("{t}: {e}"));
            assert_eq!(canonical.data.map(|d| d.record_type()), Some(t));
            assert_eq!(canonical.content, None);
        }
    }

    #[test]
    fn caa_example() {
        let req = request(RecordType::Caa).with_data(RecordData::Caa(CaaData {
            flags: 1,
            tag: "issue".to_string(),
            value: "letsencrypt.org".to_string(),
        }));
        let canonical = validate(&req).unwrap();
        assert_eq!(canonical.content, None);
        let Some(RecordData::Caa(caa)) = canonical.data else {
            panic!("expected CAA data");
        };
        assert_eq!(caa.tag, "issue");
        assert_eq!(caa.flags, 1);
    }

    #[test]
    fn data_on_flat_type_is_ignored() {
        let req = valid_request(RecordType::Txt).with_data(sample_data(RecordType::Caa));
        assert_eq!(validate(&req).unwrap().data, None);
    }

    // ---- data shape ----

    #[test]
    fn mismatched_variant_rejected() {
        let req = request(RecordType::Https).with_data(sample_data(RecordType::Svcb));
        assert_eq!(
            validate(&req),
            Err(ValidationError::TypeMismatch {
                field: "data".to_string(),
                expected: "HTTPS".to_string(),
                found: "SVCB".to_string(),
            })
        );
    }

    #[test]
    fn blank_data_strings_rejected() {
        let cases = [
            (
                RecordType::Caa,
                RecordData::Caa(CaaData {
                    flags: 0,
                    tag: "issue".to_string(),
                    value: "  ".to_string(),
                }),
                "data.value",
            ),
            (
                RecordType::Ds,
                RecordData::Ds(DsData {
                    algorithm: 13,
                    digest: String::new(),
                    digest_type: 2,
                    key_tag: 1,
                }),
                "data.digest",
            ),
            (
                RecordType::Naptr,
                RecordData::Naptr(NaptrData {
                    flags: "S".to_string(),
                    order: 1,
                    preference: 1,
                    regex: "!x!y!".to_string(),
                    replacement: "\n".to_string(),
                    service: "SIP".to_string(),
                }),
                "data.replacement",
            ),
            (
                RecordType::Tlsa,
                RecordData::Tlsa(TlsaData {
                    certificate: " ".to_string(),
                    matching_type: 1,
                    selector: 1,
                    usage: 1,
                }),
                "data.certificate",
            ),
        ];

        for (t, data, field) in cases {
            let mut req = valid_request(t);
            req.data = Some(data);
            assert_eq!(validate(&req), Err(ValidationError::missing(field)), "{t}");
        }
    }

    #[test]
    fn data_strings_are_trimmed() {
        let req = valid_request(RecordType::Srv).with_data(RecordData::Srv(SrvData {
            port: 443,
            priority: 10,
            target: "  sip.example.com. ".to_string(),
            weight: 1,
        }));
        let Some(RecordData::Srv(srv)) = validate(&req).unwrap().data else {
            panic!("expected SRV data");
        };
        assert_eq!(srv.target, "sip.example.com.");
    }

    // ---- priority ----

    #[test]
    fn priority_types_require_priority() {
        for t in [RecordType::Mx, RecordType::Srv, RecordType::Uri] {
            let mut req = valid_request(t);
            req.priority = None;
            assert_eq!(
                validate(&req),
                Err(ValidationError::missing("priority")),
                "{t}"
            );
            req.priority = Some(42);
            assert_eq!(validate(&req).unwrap().priority, Some(42));
        }
    }

    #[test]
    fn priority_dropped_for_other_types() {
        let req = valid_request(RecordType::A).with_priority(5);
        assert_eq!(validate(&req).unwrap().priority, None);
    }

    #[test]
    fn missing_data_reported_before_priority() {
        let req = request(RecordType::Srv);
        assert_eq!(validate(&req), Err(ValidationError::missing("data")));
    }

    // ---- ttl ----

    #[test]
    fn ttl_bounds() {
        for ttl in [1, 30, 60, 86_400] {
            let req = valid_request(RecordType::A).with_ttl(ttl);
            assert_eq!(validate(&req).unwrap().ttl, Some(ttl));
        }
        for ttl in [0, 2, 29, 86_401] {
            let req = valid_request(RecordType::A).with_ttl(ttl);
            assert!(
                matches!(validate(&req), Err(ValidationError::OutOfRange { ref field, .. }) if field == "ttl"),
                "ttl {ttl} accepted"
            );
        }
    }

    #[test]
    fn ttl_absent_stays_absent() {
        assert_eq!(validate(&valid_request(RecordType::A)).unwrap().ttl, None);
    }

    #[test]
    fn ttl_checked_before_data_shape() {
        let mut req = valid_request(RecordType::Caa).with_ttl(5);
        req.data = Some(sample_data(RecordType::Uri));
        assert!(matches!(
            validate(&req),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    // ---- LOC ----

    #[test]
    fn loc_truncates_seconds_and_altitude() {
        let req = request(RecordType::Loc).with_data(RecordData::Loc(LocData {
            lat_seconds: 59.9999,
            long_seconds: 12.3456,
            altitude: 12.346,
            ..loc()
        }));
        let Some(RecordData::Loc(out)) = validate(&req).unwrap().data else {
            panic!("expected LOC data");
        };
        assert_eq!(out.lat_seconds, 59.999);
        assert_eq!(out.long_seconds, 12.345);
        assert_eq!(out.altitude, 12.34);
    }

    #[test]
    fn loc_ranges() {
        let cases: Vec<(LocData, &str)> = vec![
            (LocData { lat_degrees: 91, ..loc() }, "data.lat_degrees"),
            (LocData { lat_degrees: -1, ..loc() }, "data.lat_degrees"),
            (LocData { lat_minutes: 60, ..loc() }, "data.lat_minutes"),
            (LocData { lat_seconds: 60.0, ..loc() }, "data.lat_seconds"),
            (LocData { lat_seconds: -0.5, ..loc() }, "data.lat_seconds"),
            (LocData { long_degrees: 181, ..loc() }, "data.long_degrees"),
            (LocData { long_minutes: -3, ..loc() }, "data.long_minutes"),
            (LocData { long_seconds: f64::NAN, ..loc() }, "data.long_seconds"),
            (LocData { altitude: -100_000.01, ..loc() }, "data.altitude"),
            (LocData { altitude: 42_849_673.0, ..loc() }, "data.altitude"),
            (LocData { size: 90_000_001, ..loc() }, "data.size"),
            (LocData { precision_horz: -1, ..loc() }, "data.precision_horz"),
            (LocData { precision_vert: 90_000_001, ..loc() }, "data.precision_vert"),
        ];

        for (data, field) in cases {
            let req = request(RecordType::Loc).with_data(RecordData::Loc(data));
            assert!(
                matches!(validate(&req), Err(ValidationError::OutOfRange { field: ref f, .. }) if f == field),
                "expected OutOfRange for {field}, got {:?}",
                validate(&req)
            );
        }
    }

    #[test]
    fn loc_boundaries_accepted() {
        let edge = LocData {
            lat_degrees: 90,
            lat_minutes: 59,
            lat_seconds: 59.999,
            long_degrees: 180,
            long_minutes: 0,
            long_seconds: 0.0,
            altitude: -100_000.0,
            size: 90_000_000,
            precision_horz: 90_000_000,
            precision_vert: 0,
            ..loc()
        };
        let req = request(RecordType::Loc).with_data(RecordData::Loc(edge.clone()));
        let Some(RecordData::Loc(out)) = validate(&req).unwrap().data else {
            panic!("expected LOC data");
        };
        assert_eq!(out, edge);
    }

    #[test]
    fn loc_values_at_precision_pass_unchanged() {
        let precise = LocData {
            lat_seconds: 1.001,
            long_seconds: 0.29,
            altitude: 0.29,
            ..loc()
        };
        for altitude in [0.29, 1.15, 8.2, 42_849_672.95] {
            let data = LocData {
                altitude,
                ..precise.clone()
            };
            let req = request(RecordType::Loc).with_data(RecordData::Loc(data.clone()));
            let Some(RecordData::Loc(out)) = validate(&req).unwrap().data else {
                panic!("expected LOC data");
            };
            assert_eq!(out, data, "altitude {altitude} changed");
        }
    }

    // ---- optional fields ----

    #[test]
    fn comment_and_tags_normalized() {
        let req = valid_request(RecordType::Txt)
            .with_comment("  managed by terraform ")
            .with_tag(" env:prod ")
            .with_tag("   ")
            .with_tag("team:dns")
            .with_proxied(false);
        let canonical = validate(&req).unwrap();
        assert_eq!(canonical.comment.as_deref(), Some("managed by terraform"));
        assert_eq!(canonical.tags, vec!["env:prod", "team:dns"]);
        assert_eq!(canonical.proxied, Some(false));
    }

    #[test]
    fn cname_keeps_only_flatten_flag() {
        let req = valid_request(RecordType::Cname).with_settings(RecordSettings::Cname(
            CnameSettings {
                flatten_cname: Some(true),
                ipv4_only: Some(true),
                ipv6_only: None,
            },
        ));
        assert_eq!(
            validate(&req).unwrap().settings,
            Some(CanonicalSettings {
                flatten_cname: Some(true)
            })
        );
    }

    #[test]
    fn foreign_settings_dropped_silently() {
        let address = RecordSettings::Address(AddressSettings {
            ipv4_only: Some(true),
            ipv6_only: None,
        });

        let cname = valid_request(RecordType::Cname).with_settings(address.clone());
        assert_eq!(validate(&cname).unwrap().settings, None);

        let a = valid_request(RecordType::A).with_settings(address);
        assert_eq!(validate(&a).unwrap().settings, None);
    }

    // ---- identifiers ----

    #[test]
    fn identifier_rules() {
        assert_eq!(validate_identifier("id", ZONE), Ok(ZONE.to_string()));
        assert_eq!(validate_identifier("id", "  abc123 "), Ok("abc123".to_string()));
        for bad in ["", "   ", "abc-123", "../zones", &"a".repeat(33)] {
            assert!(
                matches!(
                    validate_identifier("id", bad),
                    Err(ValidationError::InvalidIdentifier { .. })
                ),
                "accepted {bad:?}"
            );
        }
    }
}
