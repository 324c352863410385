/// Storage write capability. The single put is assumed to
/// succeed-or-raise synchronously from the caller's point of view.
pub trait RecordStore {
    fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: &[u8],
        content_type: &str,
    ) -> Result<(), String>;
}
