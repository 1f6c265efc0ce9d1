#![allow(dead_code)]

//! Test infrastructure for record store tests

use lb_auth::AuthorizationPolicy;
use lb_core::{NewVehicle, Vehicle};
use lb_store::RecordStore;

use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

pub const WRITER: &str = "A";
pub const OUTSIDER: &str = "B";

pub fn snapshot_path(dir: &TempDir) -> PathBuf {
    dir.path().join("data").join("vehicles.json")
}

/// Open a vehicle store in a fresh temp dir whose whitelist is {"A"}
pub async fn create_test_store() -> (TempDir, RecordStore<Vehicle>) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = open_store(&dir).await;
    (dir, store)
}

pub async fn open_store(dir: &TempDir) -> RecordStore<Vehicle> {
    let policy = Arc::new(AuthorizationPolicy::new([WRITER]));
    RecordStore::open(snapshot_path(dir), policy)
        .await
        .expect("Failed to open store")
}

pub fn truck() -> NewVehicle {
    vehicle_draft("Truck", 500, "Used", None)
}

pub fn vehicle_draft(name: &str, miles: u64, condition: &str, available: Option<bool>) -> NewVehicle {
    NewVehicle {
        name: Some(name.to_string()),
        miles: Some(miles),
        condition: Some(condition.to_string()),
        available,
    }
}
