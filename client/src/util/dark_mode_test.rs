use super::*;

#[test]
fn theme_names() {
    assert_eq!(theme_name(true), "dark");
    assert_eq!(theme_name(false), "light");
}

#[test]
fn parse_preference_accepts_only_booleans() {
    assert_eq!(parse_preference("true"), Some(true));
    assert_eq!(parse_preference("false"), Some(false));
    assert_eq!(parse_preference("1"), None);
}

#[test]
fn read_preference_defaults_to_light_outside_browser() {
    assert!(!read_preference());
}

#[test]
fn toggle_flips_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}
