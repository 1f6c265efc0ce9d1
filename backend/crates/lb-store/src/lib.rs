pub mod error;
pub mod record_store;
mod snapshot;


pub use error::{Result, StoreError};
pub use record_store::RecordStore;
