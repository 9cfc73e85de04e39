use chrono::TimeZone;

use super::*;
use crate::blocks::BlockKind;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 5, 12, 0, 0).single().expect("valid instant")
}

#[test]
fn starter_has_one_block_of_each_kind_in_order() {
    let doc = ResumeDocument::starter(now());
    let kinds: Vec<BlockKind> = doc.blocks.iter().map(ResumeBlock::kind).collect();
    assert_eq!(kinds, BlockKind::ALL.to_vec());
    assert_eq!(doc.template_id, TemplateId::Modern);
    assert_eq!(doc.updated_at, now());
}

#[test]
fn document_serializes_camel_case() {
    let json = serde_json::to_value(ResumeDocument::starter(now())).expect("serialize");
    assert_eq!(json["templateId"], "modern");
    assert_eq!(json["updatedAt"], "2025-03-05T12:00:00Z");
    assert_eq!(json["blocks"][0]["type"], "header");
    assert_eq!(json["blocks"][0]["data"]["name"], "Alex Morgan");
}

#[test]
fn encode_then_decode_preserves_document() {
    let doc = ResumeDocument::starter(now());
    let raw = doc.encode().expect("encode");
    assert_eq!(ResumeDocument::decode(&raw).expect("decode"), doc);
}

#[test]
fn decode_rejects_duplicate_block_ids() {
    let raw = r#"{"id":"r","templateId":"classic","updatedAt":"2025-01-01T00:00:00Z","blocks":[
        {"id":"a","type":"summary","data":{"text":""}},
        {"id":"a","type":"skills","data":{"items":[]}}]}"#;
    assert!(matches!(ResumeDocument::decode(raw), Err(DocumentError::DuplicateBlockId(id)) if id == "a"));
}

#[test]
fn decode_rejects_unknown_template() {
    let raw = r#"{"id":"r","templateId":"fancy","updatedAt":"2025-01-01T00:00:00Z","blocks":[]}"#;
    assert!(matches!(ResumeDocument::decode(raw), Err(DocumentError::Json(_))));
}

#[test]
fn load_falls_back_on_missing_blob() {
    let (doc, err) = ResumeDocument::load_or_starter(None, now());
    assert_eq!(doc, ResumeDocument::starter(now()));
    assert!(err.is_none());
}

#[test]
fn load_falls_back_on_garbage_and_reports_error() {
    let (doc, err) = ResumeDocument::load_or_starter(Some("{not json"), now());
    assert_eq!(doc.id, STARTER_DOCUMENT_ID);
    assert!(matches!(err, Some(DocumentError::Json(_))));
}

#[test]
fn load_uses_stored_document() {
    let raw = r#"{"id":"mine","templateId":"minimal","updatedAt":"2024-06-01T08:30:00Z","blocks":[]}"#;
    let (doc, err) = ResumeDocument::load_or_starter(Some(raw), now());
    assert!(err.is_none());
    assert_eq!(doc.id, "mine");
    assert_eq!(doc.template_id, TemplateId::Minimal);
    assert!(doc.blocks.is_empty());
}

#[test]
fn templates_lookup() {
    for template in &TEMPLATES {
        assert_eq!(template.id.template(), template);
        assert_eq!(TemplateId::parse(template.id.as_str()), Some(template.id));
    }
    assert_eq!(TemplateId::parse("fancy"), None);
}

#[test]
fn block_lookup_by_id() {
    let mut doc = ResumeDocument::starter(now());
    assert_eq!(doc.block("skills").map(ResumeBlock::kind), Some(BlockKind::Skills));
    assert!(doc.block("nope").is_none());
    assert!(doc.block_mut("summary").is_some());
}
