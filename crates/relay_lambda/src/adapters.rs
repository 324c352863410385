pub mod clock;
pub mod record_store;
