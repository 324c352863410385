use chrono::{DateTime, Utc};

/// Derives the object key for one relay execution from the instant at
/// which the key is built. Granularity is one second, so two
/// invocations completing within the same second derive the same key.
pub fn execution_object_key(instant: &DateTime<Utc>) -> String {
    format!(
        "lambda-executions/{}/{}.json",
        instant.format("%Y-%m-%d"),
        instant.format("%H-%M-%S"),
    )
}

pub fn object_location(bucket: &str, key: &str) -> String {
    format!("s3://{bucket}/{key}")
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn scenario_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
            .single()
            .expect("scenario instant should be valid")
    }

    #[test]
    fn builds_key_with_utc_date_and_time_partitions() {
        let key = execution_object_key(&scenario_instant());

        assert_eq!(key, "lambda-executions/2024-01-02/03-04-05.json");
    }

    #[test]
    fn instants_within_the_same_second_share_a_key() {
        // Documented limitation: key uniqueness is not guaranteed below
        // one-second granularity.
        let first = scenario_instant() + Duration::milliseconds(100);
        let second = scenario_instant() + Duration::milliseconds(900);

        assert_eq!(
            execution_object_key(&first),
            execution_object_key(&second)
        );
    }

    #[test]
    fn instants_in_different_seconds_get_distinct_keys() {
        let first = scenario_instant();
        let second = scenario_instant() + Duration::seconds(1);

        assert_ne!(
            execution_object_key(&first),
            execution_object_key(&second)
        );
        assert_eq!(
            execution_object_key(&second),
            "lambda-executions/2024-01-02/03-04-06.json"
        );
    }

    #[test]
    fn builds_s3_location_from_bucket_and_key() {
        let location = object_location(
            "my-bucket",
            "lambda-executions/2024-01-02/03-04-05.json",
        );

        assert_eq!(
            location,
            "s3://my-bucket/lambda-executions/2024-01-02/03-04-05.json"
        );
    }
}
