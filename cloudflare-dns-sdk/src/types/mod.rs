//! Request, response and record types.

mod record;
mod request;
mod response;

pub use record::{
    AddressSettings, CaaData, CertData, CnameSettings, DnskeyData, DsData, LatitudeDirection,
    LocData, LongitudeDirection, NaptrData, RecordData, RecordSettings, RecordType, SrvData,
    SshfpData, SvcbData, TlsaData, UriData,
};
pub use request::{
    BatchDelete, BatchItem, BatchPatch, BatchPut, BatchRequest, CanonicalBatch, CanonicalRequest,
    CanonicalSettings, FilterMatch, RecordQueryParams, RecordRequest,
};
pub use response::{
    BatchResult, DeletedRecord, DnsRecord, PaginatedResponse, RecordSettingsInfo, Response,
    ResponseInfo, ResultInfo,
};
