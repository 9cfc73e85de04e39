use super::*;

#[test]
fn stage_walks_the_funnel() {
    let mut stage = Stage::Applied;
    let mut seen = vec![stage];
    while let Some(next) = stage.next() {
        stage = next;
        seen.push(stage);
    }
    assert_eq!(seen, [Stage::Applied, Stage::Screening, Stage::Interview, Stage::Offer, Stage::Hired]);
}

#[test]
fn stage_previous_inverts_next() {
    for stage in Stage::ALL {
        if let Some(next) = stage.next() {
            assert_eq!(next.previous(), Some(stage));
        }
    }
    assert_eq!(Stage::Rejected.previous(), None);
    assert_eq!(Stage::Rejected.next(), None);
}

#[test]
fn stage_active_excludes_terminal() {
    assert!(Stage::Offer.is_active());
    assert!(!Stage::Hired.is_active());
    assert!(!Stage::Rejected.is_active());
}

#[test]
fn job_status_parses_snake_case() {
    assert_eq!(JobStatus::parse("on_hold"), Some(JobStatus::OnHold));
    assert_eq!(JobStatus::parse("paused"), None);
    let json = serde_json::to_value(JobStatus::OnHold).expect("serialize");
    assert_eq!(json, "on_hold");
}

#[test]
fn find_by_id_resolves_dangling_to_none() {
    let clients = vec![Client {
        id: "cl-1".to_owned(),
        name: "Acme".to_owned(),
        industry: String::new(),
        contact_name: String::new(),
        contact_email: String::new(),
    }];
    assert_eq!(find_by_id(&clients, Some("cl-1"), |c| c.id.as_str()).map(|c| c.name.as_str()), Some("Acme"));
    assert!(find_by_id(&clients, Some("cl-9"), |c| c.id.as_str()).is_none());
    assert!(find_by_id(&clients, None, |c| c.id.as_str()).is_none());
}

#[test]
fn note_optional_links_default_to_none() {
    let raw = r#"{"id":"n","title":"t","body":"b","created_at":"2025-01-01T00:00:00Z","updated_at":"2025-01-01T00:00:00Z"}"#;
    let note: Note = serde_json::from_str(raw).expect("note");
    assert!(note.tags.is_empty());
    assert!(!note.pinned);
    assert_eq!(note.client_id, None);
}
