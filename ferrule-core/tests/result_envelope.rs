use ferrule_citations::{CitableDocument, DocumentSource};
use ferrule_core::{ToolImage, ToolResult};
use serde_json::json;

#[test]
fn success_and_failure_are_mutually_exclusive() {
    let ok = ToolResult::success(json!({"answer": 42}));
    assert!(ok.is_success());
    assert!(!ok.is_error());
    assert!(ok.is_settled());

    let failed = ToolResult::failure("upstream timed out");
    assert!(failed.is_error());
    assert!(!failed.is_success());
    assert!(failed.is_settled());
}

#[test]
fn unsettled_envelope_is_detectable() {
    assert!(!ToolResult::default().is_settled());
}

#[test]
fn output_only_round_trip_keeps_error_absent() {
    let wire = serde_json::to_string(&ToolResult::success(json!([1, 2, 3]))).unwrap();
    assert!(!wire.contains("error"));

    let decoded: ToolResult = serde_json::from_str(&wire).unwrap();
    assert_eq!(decoded.output, Some(json!([1, 2, 3])));
    assert_eq!(decoded.error, None);
    assert!(decoded.is_settled());
}

#[test]
fn error_only_round_trip_keeps_output_absent() {
    let wire = serde_json::to_string(&ToolResult::failure("boom")).unwrap();
    assert!(!wire.contains("output"));

    let decoded: ToolResult = serde_json::from_str(&wire).unwrap();
    assert_eq!(decoded.error, Some("boom".to_string()));
    assert_eq!(decoded.output, None);
    assert!(decoded.is_settled());
}

#[test]
fn side_channels_accompany_either_outcome() {
    let failed = ToolResult::failure("rate limited")
        .with_name("fetch_page")
        .with_system("retry budget exhausted");

    let value = serde_json::to_value(&failed).unwrap();
    assert_eq!(
        value,
        json!({
            "name": "fetch_page",
            "error": "rate limited",
            "system": "retry budget exhausted",
        })
    );
}

#[test]
fn image_round_trips() {
    let ok = ToolResult::success(json!("captured")).with_image(ToolImage {
        base64_image: "aW1hZ2U=".to_string(),
        content_type: "image/png".to_string(),
    });

    let wire = serde_json::to_string(&ok).unwrap();
    let decoded: ToolResult = serde_json::from_str(&wire).unwrap();
    let image = decoded.image.unwrap();
    assert_eq!(image.base64_image, "aW1hZ2U=");
    assert_eq!(image.content_type, "image/png");
}

#[test]
fn citable_documents_serialize_under_the_contract_name() {
    let ok = ToolResult::success(json!("summary")).with_citable_documents(vec![
        CitableDocument::new("filing", DocumentSource::text("body")).with_citations(true),
    ]);

    let value = serde_json::to_value(&ok).unwrap();
    assert_eq!(value["citable_documents"][0]["unique_title"], "filing");

    let empty = serde_json::to_value(ToolResult::success(json!("x"))).unwrap();
    assert!(empty.get("citable_documents").is_none());
}
