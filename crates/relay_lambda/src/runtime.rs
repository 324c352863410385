pub use relay_core::{contract, storage_keys};
