pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::blacklist_entry::{BlacklistEntry, BlacklistFields, NewBlacklistEntry};
pub use models::identity::Identity;
pub use models::record::Record;
pub use models::record_filter::RecordFilter;
pub use models::vehicle::{NewVehicle, Vehicle, VehicleFields};

#[cfg(test)]
mod tests;
