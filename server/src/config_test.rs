use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_apply_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(cfg.fixtures_dir.ends_with("client/fixtures"));
}

#[test]
fn overrides_are_read() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", " 8080 "), ("HIREBOARD_FIXTURES_DIR", "/srv/fixtures")])).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.fixtures_dir, PathBuf::from("/srv/fixtures"));
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "http".to_owned() });

    assert!(ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}

#[test]
fn blank_fixtures_dir_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("HIREBOARD_FIXTURES_DIR", "  ")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "HIREBOARD_FIXTURES_DIR", .. }));
}
