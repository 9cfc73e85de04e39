use super::*;

// =============================================================
// Kinds
// =============================================================

#[test]
fn kind_round_trips_through_str() {
    for kind in BlockKind::ALL {
        assert_eq!(BlockKind::parse(kind.as_str()), Some(kind));
    }
    assert_eq!(BlockKind::parse("photo"), None);
}

#[test]
fn default_data_matches_kind() {
    for kind in BlockKind::ALL {
        assert_eq!(kind.default_data().kind(), kind);
    }
}

#[test]
fn default_experience_starts_with_one_blank_entry() {
    let BlockData::Experience(data) = BlockKind::Experience.default_data() else {
        panic!("expected experience payload");
    };
    assert_eq!(data.entries, vec![ExperienceEntry::default()]);
}

// =============================================================
// Wire form
// =============================================================

#[test]
fn block_serializes_as_id_type_data() {
    let block = ResumeBlock::new("b1", BlockData::Summary(SummaryData { text: "Hello".to_owned() }));
    let json = serde_json::to_value(&block).expect("serialize");
    assert_eq!(json, serde_json::json!({"id": "b1", "type": "summary", "data": {"text": "Hello"}}));
}

#[test]
fn block_deserializes_from_wire_form() {
    let raw = r#"{"id":"x","type":"experience","data":{"entries":[{"company":"Acme","role":"Dev","startDate":"2020"}]}}"#;
    let block: ResumeBlock = serde_json::from_str(raw).expect("deserialize");
    assert_eq!(block.id, "x");
    let BlockData::Experience(data) = block.data else {
        panic!("expected experience payload");
    };
    assert_eq!(data.entries[0].company, "Acme");
    assert_eq!(data.entries[0].start_date, "2020");
    assert_eq!(data.entries[0].end_date, "");
}

#[test]
fn unknown_block_type_is_rejected() {
    let raw = r#"{"id":"x","type":"photo","data":{}}"#;
    assert!(serde_json::from_str::<ResumeBlock>(raw).is_err());
}

// =============================================================
// List helpers
// =============================================================

#[test]
fn skills_are_trimmed_and_deduplicated_case_insensitively() {
    let mut skills = SkillsData::default();
    assert!(skills.add("  Rust "));
    assert!(!skills.add("rust"));
    assert!(!skills.add("   "));
    assert!(skills.add("Go"));
    assert_eq!(skills.items, vec!["Rust".to_owned(), "Go".to_owned()]);
}

#[test]
fn skills_remove_ignores_case() {
    let mut skills = SkillsData { items: vec!["Rust".to_owned(), "Go".to_owned()] };
    assert!(skills.remove("RUST"));
    assert!(!skills.remove("rust"));
    assert_eq!(skills.items, vec!["Go".to_owned()]);
}

#[test]
fn experience_entries_add_and_remove() {
    let mut data = ExperienceData::default();
    assert_eq!(data.add_entry(), 0);
    assert_eq!(data.add_entry(), 1);
    data.entries[1].company = "Acme".to_owned();
    assert_eq!(data.remove_entry(0), Some(ExperienceEntry::default()));
    assert_eq!(data.entries[0].company, "Acme");
    assert_eq!(data.remove_entry(5), None);
}

#[test]
fn education_entries_add_and_remove() {
    let mut data = EducationData::default();
    data.add_entry();
    assert_eq!(data.entries.len(), 1);
    assert!(data.remove_entry(0).is_some());
    assert!(data.entries.is_empty());
}

#[test]
fn period_labels() {
    let mut entry = ExperienceEntry { start_date: "2019".to_owned(), ..ExperienceEntry::default() };
    assert_eq!(entry.period_label(), "2019 – Present");
    entry.end_date = "2022".to_owned();
    assert_eq!(entry.period_label(), "2019 – 2022");
    assert_eq!(EducationEntry::default().period_label(), "");
}

#[test]
fn header_contact_line_skips_blanks() {
    let header = HeaderData {
        email: "a@b.c".to_owned(),
        phone: " ".to_owned(),
        website: "ab.dev".to_owned(),
        ..HeaderData::default()
    };
    assert_eq!(header.contact_line(), vec!["a@b.c", "ab.dev"]);
}

// =============================================================
// Field accessors
// =============================================================

#[test]
fn header_fields_get_and_set() {
    let mut header = HeaderData::default();
    for (i, field) in HeaderField::ALL.into_iter().enumerate() {
        field.set(&mut header, format!("v{i}"));
    }
    assert_eq!(header.name, "v0");
    assert_eq!(header.website, "v5");
    assert_eq!(HeaderField::Email.get(&header), "v2");
}

#[test]
fn entry_fields_get_and_set() {
    let mut job = ExperienceEntry::default();
    ExperienceField::EndDate.set(&mut job, "2024".to_owned());
    assert_eq!(job.end_date, "2024");
    assert_eq!(ExperienceField::EndDate.get(&job), "2024");

    let mut school = EducationEntry::default();
    EducationField::Degree.set(&mut school, "BSc".to_owned());
    assert_eq!(EducationField::Degree.get(&school), "BSc");
    assert_eq!(EducationField::ALL.len(), 4);
}
