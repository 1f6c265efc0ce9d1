use crate::{BlacklistEntry, CoreError, Identity, NewBlacklistEntry, Record};

use googletest::prelude::*;

#[test]
fn given_target_and_reason_when_validated_then_fields_are_trimmed() {
    let draft = NewBlacklistEntry {
        target: Some("  griefer42 ".into()),
        reason: Some("team killing".into()),
    };

    let fields = BlacklistEntry::validate(draft).unwrap();
    let entry = BlacklistEntry::assemble("b1".into(), fields, Identity::new("mod-1"));

    assert_that!(entry.target.as_str(), eq("griefer42"));
    assert_that!(entry.added_by.as_str(), eq("mod-1"));
}

#[test]
fn given_empty_reason_when_validated_then_validation_error() {
    let draft = NewBlacklistEntry {
        target: Some("griefer42".into()),
        reason: Some(String::new()),
    };

    let result = BlacklistEntry::validate(draft);

    assert!(matches!(
        result,
        Err(CoreError::Validation { field: Some(ref f), .. }) if f == "reason"
    ));
}
