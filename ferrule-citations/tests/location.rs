use ferrule_citations::{ContentError, Location};
use serde_json::json;

#[test]
fn char_page_and_block_kinds_validate() {
    assert!(Location::char_span(0, 10).validate().is_ok());
    assert!(Location::page_span(1, 3).validate().is_ok());
    assert!(Location::block_span(2, 2).validate().is_ok());
}

#[test]
fn unknown_kind_is_rejected() {
    let location = Location {
        kind: "paragraph".to_string(),
        start: 0,
        end: 0,
    };

    let err = location.validate().unwrap_err();
    assert_eq!(
        err,
        ContentError::InvalidLocationKind {
            kind: "paragraph".to_string()
        }
    );
    assert!(err.to_string().contains("paragraph"));
}

#[test]
fn empty_kind_is_rejected() {
    let location = Location {
        kind: String::new(),
        start: 0,
        end: 0,
    };
    assert!(location.validate().is_err());
}

#[test]
fn range_ordering_and_sign_are_not_checked() {
    assert!(Location::char_span(10, 0).validate().is_ok());
    assert!(Location::page_span(-1, -5).validate().is_ok());
}

#[test]
fn kind_serializes_under_the_type_key() {
    let value = serde_json::to_value(Location::char_span(0, 10)).unwrap();
    assert_eq!(value, json!({"type": "char", "start": 0, "end": 10}));

    let decoded: Location = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, Location::char_span(0, 10));
}
