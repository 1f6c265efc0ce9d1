use crate::ApiError;
use crate::api::records::filter_from_query;

#[test]
fn test_no_parameters_means_no_filter() {
    let filter = filter_from_query(Vec::new()).unwrap();

    assert!(filter.is_none());
}

#[test]
fn test_single_parameter_becomes_filter() {
    let params = vec![("available".to_string(), "true".to_string())];

    let filter = filter_from_query(params).unwrap().unwrap();

    assert_eq!(filter.attribute, "available");
    assert_eq!(filter.value, "true");
}

#[test]
fn test_two_parameters_rejected() {
    let params = vec![
        ("available".to_string(), "true".to_string()),
        ("name".to_string(), "Truck".to_string()),
    ];

    let result = filter_from_query(params);

    assert!(matches!(result, Err(ApiError::BadRequest { .. })));
}

#[test]
fn test_repeated_key_rejected() {
    let params = vec![
        ("available".to_string(), "true".to_string()),
        ("available".to_string(), "false".to_string()),
    ];

    let result = filter_from_query(params);

    assert!(matches!(result, Err(ApiError::BadRequest { .. })));
}
