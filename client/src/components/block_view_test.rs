use super::*;

#[test]
fn header_has_no_section_heading() {
    assert_eq!(section_heading(BlockKind::Header), None);
    for kind in BlockKind::ALL.into_iter().skip(1) {
        assert!(section_heading(kind).is_some(), "{kind:?} should have a heading");
    }
}

#[test]
fn sheet_class_names_template() {
    assert_eq!(sheet_class(TemplateId::Classic), "resume-sheet resume-sheet--classic");
}

#[test]
fn sheet_style_sets_accent_and_a4_size() {
    let style = sheet_style("#2563eb");
    assert!(style.starts_with("--accent: #2563eb;"));
    assert!(style.contains("width: 794px;"));
    assert!(style.contains("min-height: 1123px;"));
}
