//! Record types and their structured `data` payloads.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// ============ Record Type ============

/// DNS record type accepted by the records API.
///
/// Serialized as the uppercase mnemonic (`"A"`, `"AAAA"`, `"OPENPGPKEY"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// IPv4 address.
    A,
    /// IPv6 address.
    Aaaa,
    /// Certification Authority Authorization.
    Caa,
    /// Certificate.
    Cert,
    /// Canonical name (alias).
    Cname,
    /// DNSSEC public key.
    Dnskey,
    /// Delegation signer.
    Ds,
    /// HTTPS service binding.
    Https,
    /// Geographic location.
    Loc,
    /// Mail exchange.
    Mx,
    /// Naming authority pointer.
    Naptr,
    /// Name server.
    Ns,
    /// OpenPGP public key.
    Openpgpkey,
    /// Reverse pointer.
    Ptr,
    /// S/MIME certificate association.
    Smimea,
    /// Service locator.
    Srv,
    /// SSH key fingerprint.
    Sshfp,
    /// General service binding.
    Svcb,
    /// TLS certificate association.
    Tlsa,
    /// Text.
    Txt,
    /// Uniform resource identifier.
    Uri,
}

impl RecordType {
    /// Every record type, in alphabetical order.
    pub const ALL: [Self; 21] = [
        Self::A,
        Self::Aaaa,
        Self::Caa,
        Self::Cert,
        Self::Cname,
        Self::Dnskey,
        Self::Ds,
        Self::Https,
        Self::Loc,
        Self::Mx,
        Self::Naptr,
        Self::Ns,
        Self::Openpgpkey,
        Self::Ptr,
        Self::Smimea,
        Self::Srv,
        Self::Sshfp,
        Self::Svcb,
        Self::Tlsa,
        Self::Txt,
        Self::Uri,
    ];

    /// Uppercase mnemonic, as used on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Caa => "CAA",
            Self::Cert => "CERT",
            Self::Cname => "CNAME",
            Self::Dnskey => "DNSKEY",
            Self::Ds => "DS",
            Self::Https => "HTTPS",
            Self::Loc => "LOC",
            Self::Mx => "MX",
            Self::Naptr => "NAPTR",
            Self::Ns => "NS",
            Self::Openpgpkey => "OPENPGPKEY",
            Self::Ptr => "PTR",
            Self::Smimea => "SMIMEA",
            Self::Srv => "SRV",
            Self::Sshfp => "SSHFP",
            Self::Svcb => "SVCB",
            Self::Tlsa => "TLSA",
            Self::Txt => "TXT",
            Self::Uri => "URI",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = ValidationError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::InvalidEnumValue {
                field: "type".to_string(),
                value: s.to_string(),
            })
    }
}

// ============ LOC directions ============

/// Hemisphere of a LOC latitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LatitudeDirection {
    /// North.
    #[serde(rename = "N")]
    North,
    /// South.
    #[serde(rename = "S")]
    South,
}

impl FromStr for LatitudeDirection {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "N" | "n" => Ok(Self::North),
            "S" | "s" => Ok(Self::South),
            _ => Err(ValidationError::InvalidEnumValue {
                field: "data.lat_direction".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Hemisphere of a LOC longitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LongitudeDirection {
    /// East.
    #[serde(rename = "E")]
    East,
    /// West.
    #[serde(rename = "W")]
    West,
}

impl FromStr for LongitudeDirection {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "E" | "e" => Ok(Self::East),
            "W" | "w" => Ok(Self::West),
            _ => Err(ValidationError::InvalidEnumValue {
                field: "data.long_direction".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

// ============ Data payloads ============

/// CAA record data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaaData {
    /// Flags byte; 128 marks the property as critical.
    pub flags: u8,
    /// Property tag (`issue`, `issuewild`, `iodef`).
    pub tag: String,
    /// Property value.
    pub value: String,
}

/// CERT record data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertData {
    /// Algorithm number.
    pub algorithm: u8,
    /// Base64 certificate or CRL.
    pub certificate: String,
    /// Key tag.
    pub key_tag: u16,
    /// Certificate type.
    #[serde(rename = "type")]
    pub cert_type: u16,
}

/// DNSKEY record data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnskeyData {
    /// Algorithm number.
    pub algorithm: u8,
    /// Key flags.
    pub flags: u16,
    /// Protocol, always 3 in practice.
    pub protocol: u8,
    /// Base64 public key.
    pub public_key: String,
}

/// DS record data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DsData {
    /// Algorithm number.
    pub algorithm: u8,
    /// Hex digest.
    pub digest: String,
    /// Digest type.
    pub digest_type: u8,
    /// Key tag.
    pub key_tag: u16,
}

/// HTTPS and SVCB record data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SvcbData {
    /// Service priority; 0 selects alias mode.
    pub priority: u16,
    /// Target name.
    pub target: String,
    /// Service parameters (e.g. `alpn="h3,h2"`).
    pub value: String,
}

/// LOC record data.
///
/// Degree/minute fields are signed so out-of-range input is reported as
/// [`ValidationError::OutOfRange`] instead of failing to construct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocData {
    /// Degrees of latitude, 0–90.
    pub lat_degrees: i32,
    /// Minutes of latitude, 0–59.
    pub lat_minutes: i32,
    /// Seconds of latitude, below 60; truncated to three decimals.
    pub lat_seconds: f64,
    /// Latitude hemisphere.
    pub lat_direction: LatitudeDirection,
    /// Degrees of longitude, 0–180.
    pub long_degrees: i32,
    /// Minutes of longitude, 0–59.
    pub long_minutes: i32,
    /// Seconds of longitude, below 60; truncated to three decimals.
    pub long_seconds: f64,
    /// Longitude hemisphere.
    pub long_direction: LongitudeDirection,
    /// Altitude in meters, −100000 to 42849672.95; truncated to two decimals.
    pub altitude: f64,
    /// Size of the located entity in meters, 0–90000000.
    pub size: i32,
    /// Horizontal precision in meters, 0–90000000.
    pub precision_horz: i32,
    /// Vertical precision in meters, 0–90000000.
    pub precision_vert: i32,
}

/// NAPTR record data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NaptrData {
    /// Flags (e.g. `S`, `A`, `U`).
    pub flags: String,
    /// Processing order.
    pub order: u16,
    /// Preference among equal orders.
    pub preference: u16,
    /// Substitution expression.
    pub regex: String,
    /// Replacement domain.
    pub replacement: String,
    /// Service parameters.
    pub service: String,
}

/// SMIMEA and TLSA record data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsaData {
    /// Hex certificate association data.
    pub certificate: String,
    /// Matching type.
    pub matching_type: u8,
    /// Selector.
    pub selector: u8,
    /// Certificate usage.
    pub usage: u8,
}

/// SRV record data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SrvData {
    /// Port of the service.
    pub port: u16,
    /// Priority (lower is preferred).
    pub priority: u16,
    /// Target host.
    pub target: String,
    /// Relative weight among equal priorities.
    pub weight: u16,
}

/// SSHFP record data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SshfpData {
    /// Key algorithm.
    pub algorithm: u8,
    /// Fingerprint type.
    #[serde(rename = "type")]
    pub fingerprint_type: u8,
    /// Hex fingerprint.
    pub fingerprint: String,
}

/// URI record data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UriData {
    /// Target URI.
    pub target: String,
    /// Relative weight among equal priorities.
    pub weight: u16,
}

/// Structured `data` payload, one variant per record type that uses one.
///
/// Serialized untagged: the owning request already carries the type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RecordData {
    /// CAA payload.
    Caa(CaaData),
    /// CERT payload.
    Cert(CertData),
    /// DNSKEY payload.
    Dnskey(DnskeyData),
    /// DS payload.
    Ds(DsData),
    /// HTTPS payload (same shape as SVCB).
    Https(SvcbData),
    /// LOC payload.
    Loc(LocData),
    /// NAPTR payload.
    Naptr(NaptrData),
    /// SMIMEA payload (same shape as TLSA).
    Smimea(TlsaData),
    /// SRV payload.
    Srv(SrvData),
    /// SSHFP payload.
    Sshfp(SshfpData),
    /// SVCB payload.
    Svcb(SvcbData),
    /// TLSA payload.
    Tlsa(TlsaData),
    /// URI payload.
    Uri(UriData),
}

impl RecordData {
    /// The record type this payload belongs to.
    pub const fn record_type(&self) -> RecordType {
        match self {
            Self::Caa(_) => RecordType::Caa,
            Self::Cert(_) => RecordType::Cert,
            Self::Dnskey(_) => RecordType::Dnskey,
            Self::Ds(_) => RecordType::Ds,
            Self::Https(_) => RecordType::Https,
            Self::Loc(_) => RecordType::Loc,
            Self::Naptr(_) => RecordType::Naptr,
            Self::Smimea(_) => RecordType::Smimea,
            Self::Srv(_) => RecordType::Srv,
            Self::Sshfp(_) => RecordType::Sshfp,
            Self::Svcb(_) => RecordType::Svcb,
            Self::Tlsa(_) => RecordType::Tlsa,
            Self::Uri(_) => RecordType::Uri,
        }
    }

    /// Decode the raw `data` object of an API response, using the record type
    /// to pick the shape.
    ///
    /// Returns `Ok(None)` for types that carry no structured data.
    pub fn from_value(
        record_type: RecordType,
        value: serde_json::Value,
    ) -> serde_json::Result<Option<Self>> {
        use serde_json::from_value;

        let data = match record_type {
            RecordType::Caa => Self::Caa(from_value(value)?),
            RecordType::Cert => Self::Cert(from_value(value)?),
            RecordType::Dnskey => Self::Dnskey(from_value(value)?),
            RecordType::Ds => Self::Ds(from_value(value)?),
            RecordType::Https => Self::Https(from_value(value)?),
            RecordType::Loc => Self::Loc(from_value(value)?),
            RecordType::Naptr => Self::Naptr(from_value(value)?),
            RecordType::Smimea => Self::Smimea(from_value(value)?),
            RecordType::Srv => Self::Srv(from_value(value)?),
            RecordType::Sshfp => Self::Sshfp(from_value(value)?),
            RecordType::Svcb => Self::Svcb(from_value(value)?),
            RecordType::Tlsa => Self::Tlsa(from_value(value)?),
            RecordType::Uri => Self::Uri(from_value(value)?),
            RecordType::A
            | RecordType::Aaaa
            | RecordType::Cname
            | RecordType::Mx
            | RecordType::Ns
            | RecordType::Openpgpkey
            | RecordType::Ptr
            | RecordType::Txt => return Ok(None),
        };
        Ok(Some(data))
    }
}

// ============ Settings ============

/// Per-record settings supplied with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSettings {
    /// Settings for CNAME records.
    Cname(CnameSettings),
    /// Settings for A/AAAA records.
    Address(AddressSettings),
}

/// CNAME settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CnameSettings {
    /// Resolve the CNAME chain at the edge and answer with the final addresses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flatten_cname: Option<bool>,
    /// Only answer with IPv4 addresses when proxied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv4_only: Option<bool>,
    /// Only answer with IPv6 addresses when proxied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6_only: Option<bool>,
}

/// A/AAAA settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressSettings {
    /// Only answer with IPv4 addresses when proxied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv4_only: Option<bool>,
    /// Only answer with IPv6 addresses when proxied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6_only: Option<bool>,
}
