use ferrule_core::{SpecError, ToolSpec};
use serde_json::json;

fn spec(name: &str) -> ToolSpec {
    ToolSpec {
        name: name.to_string(),
        category: format!("{name}_v1"),
        description: "does something useful".to_string(),
        parameters: json!({"type": "object"}),
        ui_hints: Default::default(),
    }
}

#[test]
fn well_formed_specs_pass() {
    for name in ["lookup", "Lookup_2", "a", "with-hyphen", "_private", &"x".repeat(64)] {
        assert!(spec(name).validate().is_ok(), "expected {name:?} to pass");
    }
}

#[test]
fn empty_name_is_the_first_rule() {
    let mut bad = spec("");
    bad.description = String::new();
    assert_eq!(bad.validate().unwrap_err(), SpecError::EmptyName);
}

#[test]
fn name_longer_than_64_bytes_fails() {
    let err = spec(&"x".repeat(65)).validate().unwrap_err();
    assert_eq!(err, SpecError::NameTooLong { len: 65 });
    assert!(err.to_string().contains("64"));
}

#[test]
fn name_with_invalid_character_fails() {
    for name in ["has space", "dotted.name", "sla/sh", "émoji"] {
        let err = spec(name).validate().unwrap_err();
        assert!(
            matches!(err, SpecError::InvalidNameCharacter { .. }),
            "expected invalid-character error for {name:?}, got {err:?}"
        );
    }
}

#[test]
fn empty_description_fails() {
    let mut bad = spec("lookup");
    bad.description = String::new();
    assert_eq!(bad.validate().unwrap_err(), SpecError::EmptyDescription);
}

#[test]
fn null_parameters_fail() {
    let mut bad = spec("lookup");
    bad.parameters = serde_json::Value::Null;
    assert_eq!(bad.validate().unwrap_err(), SpecError::MissingParameters);
}

#[test]
fn wire_shape_uses_contract_names() {
    let value = serde_json::to_value(spec("lookup")).unwrap();
    assert_eq!(
        value,
        json!({
            "name": "lookup",
            "category": "lookup_v1",
            "description": "does something useful",
            "parameters": {"type": "object"},
        })
    );
}

#[test]
fn ui_hints_serialize_when_present() {
    let mut with_hints = spec("lookup");
    with_hints.ui_hints.verb = "Looking up".to_string();
    with_hints.ui_hints.long_running = true;

    let value = serde_json::to_value(&with_hints).unwrap();
    assert_eq!(
        value["ui_hints"],
        json!({"verb": "Looking up", "long_running": true})
    );
}
