//! Per-record-type validation rules.
//!
//! Every record type falls into one of two content models:
//! - **structured**: the value is carried by a typed `data` payload and `content`
//!   is ignored;
//! - **flat**: the value is the `content` string.
//!
//! Independently, MX, SRV and URI records must carry a priority.

use crate::types::RecordType;

/// Record types whose value is carried by a structured `data` payload.
pub const DATA_COMPONENT_TYPES: [RecordType; 13] = [
    RecordType::Caa,
    RecordType::Cert,
    RecordType::Dnskey,
    RecordType::Ds,
    RecordType::Https,
    RecordType::Loc,
    RecordType::Naptr,
    RecordType::Smimea,
    RecordType::Srv,
    RecordType::Sshfp,
    RecordType::Svcb,
    RecordType::Tlsa,
    RecordType::Uri,
];

/// Record types that must carry a priority.
pub const PRIORITY_TYPES: [RecordType; 3] = [RecordType::Mx, RecordType::Srv, RecordType::Uri];

/// Validation rules of one record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordTypeSchema {
    /// The type these rules belong to.
    pub record_type: RecordType,
    /// `data` is required and `content` ignored.
    pub data_component: bool,
    /// `priority` is required.
    pub priority_required: bool,
}

impl RecordTypeSchema {
    /// Look up the rules for `record_type`.
    pub const fn of(record_type: RecordType) -> Self {
        Self {
            record_type,
            data_component: listed(&DATA_COMPONENT_TYPES, record_type),
            priority_required: listed(&PRIORITY_TYPES, record_type),
        }
    }

    /// `content` must be a non-blank string.
    pub const fn content_required(&self) -> bool {
        !self.data_component
    }

    /// The [`RecordData`](crate::RecordData) variant tag a payload must carry,
    /// for structured types.
    pub const fn expected_data(&self) -> Option<RecordType> {
        if self.data_component {
            Some(self.record_type)
        } else {
            None
        }
    }
}

/// `PartialEq` is not usable in const context, so compare discriminants.
const fn listed(types: &[RecordType], record_type: RecordType) -> bool {
    let mut i = 0;
    while i < types.len() {
        if types[i] as u8 == record_type as u8 {
            return true;
        }
        i += 1;
    }
    false
}
