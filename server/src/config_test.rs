use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_applies_defaults() {
    let cfg = SiteConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.addr, DEFAULT_SITE_ADDR.parse::<SocketAddr>().unwrap());
    assert_eq!(cfg.assets_dir, PathBuf::from(DEFAULT_ASSETS_DIR));
}

#[test]
fn from_lookup_reads_overrides() {
    let cfg = SiteConfig::from_lookup(lookup_from(&[("SITE_ADDR", "127.0.0.1:8080"), ("ASSETS_DIR", "/srv/assets")]))
        .unwrap();
    assert_eq!(cfg.addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
    assert_eq!(cfg.assets_dir, PathBuf::from("/srv/assets"));
}

#[test]
fn from_lookup_treats_blank_as_unset() {
    let cfg = SiteConfig::from_lookup(lookup_from(&[("SITE_ADDR", "  "), ("ASSETS_DIR", "")])).unwrap();
    assert_eq!(cfg.addr.port(), 3000);
    assert_eq!(cfg.assets_dir, PathBuf::from(DEFAULT_ASSETS_DIR));
}

#[test]
fn from_lookup_rejects_bad_addr() {
    let err = SiteConfig::from_lookup(lookup_from(&[("SITE_ADDR", "not-an-addr")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidAddr { ref value, .. } if value == "not-an-addr"));
    assert!(err.to_string().contains("SITE_ADDR"));
}
