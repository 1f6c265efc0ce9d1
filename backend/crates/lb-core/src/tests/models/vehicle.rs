use crate::{CoreError, Identity, NewVehicle, Record, Vehicle};

use googletest::prelude::*;

fn truck() -> NewVehicle {
    NewVehicle {
        name: Some("Truck".into()),
        miles: Some(500),
        condition: Some("Used".into()),
        available: None,
    }
}

fn field_of(error: CoreError) -> Option<String> {
    match error {
        CoreError::Validation { field, .. } => field,
    }
}

#[test]
fn given_complete_draft_when_validated_then_available_defaults_to_true() {
    let fields = Vehicle::validate(truck()).unwrap();

    assert_that!(fields.name.as_str(), eq("Truck"));
    assert_that!(fields.miles, eq(500));
    assert_that!(fields.available, eq(true));
}

#[test]
fn given_blank_name_when_validated_then_error_names_field() {
    let mut draft = truck();
    draft.name = Some("   ".into());

    let result = Vehicle::validate(draft);

    assert_that!(field_of(result.unwrap_err()), some(eq("name")));
}

#[test]
fn given_missing_miles_when_validated_then_error_names_field() {
    let mut draft = truck();
    draft.miles = None;

    let result = Vehicle::validate(draft);

    assert_that!(field_of(result.unwrap_err()), some(eq("miles")));
}

#[test]
fn given_missing_condition_when_validated_then_error_names_field() {
    let mut draft = truck();
    draft.condition = None;

    let result = Vehicle::validate(draft);

    assert_that!(field_of(result.unwrap_err()), some(eq("condition")));
}

#[test]
fn given_assembled_vehicle_when_serialized_then_uses_camel_case_added_by() {
    let fields = Vehicle::validate(truck()).unwrap();
    let vehicle = Vehicle::assemble("r1".into(), fields, Identity::new("A"));

    let json = serde_json::to_value(&vehicle).unwrap();

    assert_that!(json["id"].as_str(), some(eq("r1")));
    assert_that!(json["addedBy"].as_str(), some(eq("A")));
    assert_that!(json["miles"].as_u64(), some(eq(500)));
}

#[test]
fn given_json_without_fields_when_deserialized_then_draft_is_empty() {
    let draft: NewVehicle = serde_json::from_str("{}").unwrap();

    assert_that!(draft.name, none());
    assert_that!(draft.miles, none());
}
