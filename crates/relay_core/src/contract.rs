use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const RECORD_MESSAGE: &str = "Hello from Lambda!";
pub const SUCCESS_MESSAGE: &str = "Success!";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Record persisted to the bucket and echoed back under `data` in the
/// success envelope. Declaration order is the serialization order, so
/// serializing the same record repeatedly yields byte-identical text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResponseRecord {
    pub message: String,
    pub timestamp: String,
    pub event: Value,
    pub bucket: String,
}

/// Decoded shape of the success envelope body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuccessBody {
    pub message: String,
    pub data: ResponseRecord,
    pub s3_location: String,
}

/// Decoded shape of the failure envelope body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

/// Pretty-printed serialization used for the stored object body and
/// the success envelope body.
pub fn pretty_contract_json(value: impl Serialize) -> String {
    serde_json::to_string_pretty(&value).expect("serialization of contract value should not fail")
}

/// Compact serialization used for the failure envelope body.
pub fn contract_json(value: impl Serialize) -> String {
    serde_json::to_string(&value).expect("serialization of contract value should not fail")
}
