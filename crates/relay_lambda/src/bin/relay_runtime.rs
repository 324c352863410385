use aws_sdk_s3::primitives::ByteStream;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use relay_lambda::adapters::clock::SystemClock;
use relay_lambda::adapters::record_store::RecordStore;
use relay_lambda::handlers::relay::{handle_relay_event, ApiGatewayResponse, RelayConfig};
use serde_json::Value;

struct S3RecordStore {
    s3_client: aws_sdk_s3::Client,
}

impl RecordStore for S3RecordStore {
    fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: &[u8],
        content_type: &str,
    ) -> Result<(), String> {
        let bucket = bucket.to_string();
        let object_key = key.to_string();
        let body_bytes = body.to_vec();
        let content_type = content_type.to_string();
        let client = self.s3_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .put_object()
                    .bucket(bucket)
                    .key(object_key)
                    .body(ByteStream::from(body_bytes))
                    .content_type(content_type)
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| format!("failed to write object to s3: {error}"))
            })
        })
    }
}

async fn handle_request(event: LambdaEvent<Value>) -> Result<ApiGatewayResponse, Error> {
    // An absent BUCKET_NAME is carried into the handler, which reports
    // it through the 500 envelope instead of failing the invocation.
    let config = RelayConfig {
        bucket: std::env::var("BUCKET_NAME").ok(),
    };

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let record_store = S3RecordStore {
        s3_client: aws_sdk_s3::Client::new(&aws_config),
    };

    Ok(handle_relay_event(
        event.payload,
        &config,
        &SystemClock,
        &record_store,
    ))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handle_request)).await
}
