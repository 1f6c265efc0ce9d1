use crate::{Identity, RecordFilter, Vehicle};

use googletest::prelude::*;

fn vehicle(available: bool) -> Vehicle {
    Vehicle {
        id: "v1".into(),
        name: "Truck".into(),
        miles: 500,
        condition: "Used".into(),
        available,
        added_by: Identity::new("A"),
    }
}

#[test]
fn given_boolean_attribute_when_filtering_then_compares_text_form() {
    let filter = RecordFilter::new("available", "true");

    assert_that!(filter.matches(&vehicle(true)), eq(true));
    assert_that!(filter.matches(&vehicle(false)), eq(false));
}

#[test]
fn given_numeric_attribute_when_filtering_then_compares_text_form() {
    assert_that!(RecordFilter::new("miles", "500").matches(&vehicle(true)), eq(true));
    assert_that!(RecordFilter::new("miles", "501").matches(&vehicle(true)), eq(false));
}

#[test]
fn given_string_attribute_when_filtering_then_compares_verbatim() {
    assert_that!(RecordFilter::new("condition", "Used").matches(&vehicle(true)), eq(true));
    assert_that!(RecordFilter::new("condition", "used").matches(&vehicle(true)), eq(false));
    assert_that!(RecordFilter::new("addedBy", "A").matches(&vehicle(true)), eq(true));
}

#[test]
fn given_unknown_attribute_when_filtering_then_nothing_matches() {
    let filter = RecordFilter::new("colour", "red");

    assert_that!(filter.matches(&vehicle(true)), eq(false));
}
