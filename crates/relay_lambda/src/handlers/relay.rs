use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::adapters::clock::Clock;
use crate::adapters::record_store::RecordStore;
use crate::runtime::contract::{
    contract_json, pretty_contract_json, ErrorBody, ResponseRecord, SuccessBody,
    JSON_CONTENT_TYPE, RECORD_MESSAGE, SUCCESS_MESSAGE,
};
use crate::runtime::storage_keys::{execution_object_key, object_location};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

/// Destination as resolved by the host binary. `None` or blank means
/// the deployment is unconfigured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelayConfig {
    pub bucket: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayHandlerError {
    pub message: String,
}

/// Relays one invocation event into the bucket and formats the
/// envelope. Every failure in the sequence, configuration or storage,
/// collapses into the same 500 shape; the invocation itself always
/// completes with an envelope.
pub fn handle_relay_event(
    event: Value,
    config: &RelayConfig,
    clock: &dyn Clock,
    store: &dyn RecordStore,
) -> ApiGatewayResponse {
    match write_record(event, config, clock, store) {
        Ok(body) => {
            log_relay_info(
                "record_written",
                json!({
                    "bucket": body.data.bucket.clone(),
                    "s3_location": body.s3_location.clone(),
                }),
            );
            success_response(&body)
        }
        Err(error) => {
            let error_text = format!("Error: {}", error.message);
            log_relay_error("relay_failed", json!({ "error": error_text.clone() }));
            error_response(&error_text)
        }
    }
}

fn write_record(
    event: Value,
    config: &RelayConfig,
    clock: &dyn Clock,
    store: &dyn RecordStore,
) -> Result<SuccessBody, RelayHandlerError> {
    let bucket = match &config.bucket {
        Some(value) if !value.trim().is_empty() => value.clone(),
        _ => {
            return Err(RelayHandlerError {
                message: "BUCKET_NAME environment variable not set".to_string(),
            });
        }
    };

    // The record timestamp and the key timestamp are two separate
    // clock reads, so they can diverge by a sub-second amount when the
    // invocation straddles a second boundary.
    let record = ResponseRecord {
        message: RECORD_MESSAGE.to_string(),
        timestamp: clock.now_utc().to_rfc3339(),
        event,
        bucket: bucket.clone(),
    };

    let key = execution_object_key(&clock.now_utc());
    let body = pretty_contract_json(&record);

    store
        .put_object(&bucket, &key, body.as_bytes(), JSON_CONTENT_TYPE)
        .map_err(|error| RelayHandlerError { message: error })?;

    let s3_location = object_location(&bucket, &key);
    Ok(SuccessBody {
        message: SUCCESS_MESSAGE.to_string(),
        data: record,
        s3_location,
    })
}

fn success_response(body: &SuccessBody) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code: 200,
        headers: json!({"Content-Type": JSON_CONTENT_TYPE}),
        body: pretty_contract_json(body),
    }
}

fn error_response(error_text: &str) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code: 500,
        headers: json!({"Content-Type": JSON_CONTENT_TYPE}),
        body: contract_json(&ErrorBody {
            error: error_text.to_string(),
        }),
    }
}

fn log_relay_info(event: &str, details: Value) {
    eprintln!(
        "{}",
        json!({
            "component": "relay_handler",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

fn log_relay_error(event: &str, details: Value) {
    eprintln!(
        "{}",
        json!({
            "component": "relay_handler",
            "level": "error",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}
