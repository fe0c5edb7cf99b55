use super::*;
use std::collections::HashMap;

fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn from_vars_defaults() {
    let cfg = Config::from_vars(vars(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr.to_string(), DEFAULT_BIND_ADDR);
    assert!(cfg.catalog_path.is_none());
}

#[test]
fn from_vars_parses_overrides() {
    let cfg = Config::from_vars(vars(&[
        ("PORT", "8080"),
        ("BIND_ADDR", "0.0.0.0"),
        ("PHRASEBOARD_CATALOG", "/etc/phraseboard/catalog.yaml"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0");
    assert_eq!(cfg.catalog_path, Some(PathBuf::from("/etc/phraseboard/catalog.yaml")));
}

#[test]
fn from_vars_blank_catalog_means_builtin() {
    let cfg = Config::from_vars(vars(&[("PHRASEBOARD_CATALOG", "  ")])).unwrap();
    assert!(cfg.catalog_path.is_none());
}

#[test]
fn from_vars_invalid_port_errors() {
    let err = Config::from_vars(vars(&[("PORT", "eighty")])).unwrap_err();
    assert!(err.to_string().contains("invalid PORT"));
    assert_eq!(err.error_code(), "E_CONFIG_INVALID");
}

#[test]
fn from_vars_invalid_bind_addr_errors() {
    let err = Config::from_vars(vars(&[("BIND_ADDR", "localhost:3000")])).unwrap_err();
    assert!(err.to_string().contains("invalid BIND_ADDR"));
}
