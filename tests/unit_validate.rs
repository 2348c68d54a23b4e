use assert_matches::assert_matches;
use formula_styler::errors::FormatError;
use formula_styler::validate::{is_style_input, parse_style_delta};
use serde_json::{Value, json};

#[test]
fn only_objects_pass_the_shape_check() {
    assert!(!is_style_input(&Value::Null));
    assert!(is_style_input(&json!({})));
    assert!(!is_style_input(&json!("x")));
    assert!(!is_style_input(&json!(42)));
    assert!(!is_style_input(&json!([true])));
}

#[test]
fn parses_snake_case_and_legacy_camel_case_fields() {
    let delta = parse_style_delta(&json!({
        "bold": true,
        "strikethrough": false,
        "textColor": "#FF0000",
        "bg_color": "#FFFF00"
    }))
    .unwrap();

    assert_eq!(delta.bold, Some(true));
    assert_eq!(delta.italic, None);
    assert_eq!(delta.strikethrough, Some(false));
    assert_eq!(delta.text_color.as_deref(), Some("#FF0000"));
    assert_eq!(delta.bg_color.as_deref(), Some("#FFFF00"));
}

#[test]
fn empty_object_is_valid_and_yields_an_empty_delta() {
    let delta = parse_style_delta(&json!({})).unwrap();
    assert!(delta.is_empty());
}

#[test]
fn unknown_fields_are_tolerated() {
    let delta = parse_style_delta(&json!({"shadow": true})).unwrap();
    assert!(delta.is_empty());
}

#[test]
fn non_object_input_is_rejected_before_any_work() {
    for value in [Value::Null, json!("bold"), json!(1), json!([{"bold": true}])] {
        let err = parse_style_delta(&value).unwrap_err();
        assert_matches!(
            err.downcast_ref::<FormatError>(),
            Some(FormatError::InvalidInput(_))
        );
    }
}

#[test]
fn wrong_field_types_are_rejected() {
    let err = parse_style_delta(&json!({"bold": "yes"})).unwrap_err();
    assert_matches!(
        err.downcast_ref::<FormatError>(),
        Some(FormatError::InvalidInput(_))
    );
}
