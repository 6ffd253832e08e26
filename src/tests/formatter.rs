use super::support::entry;
use crate::error::Error;
use crate::formatter::{check, normalize};
use crate::prompt::FixedAnswer;
use crate::restricted::RestrictedList;

fn no_restrictions() -> RestrictedList {
    RestrictedList::default()
}

#[test]
fn test_normalize_proxies_and_sets_auto_ttl() {
    let mut entries = vec![entry("A", "www", "1.1.1.1")];

    let report = normalize(&mut entries, &no_restrictions(), &FixedAnswer(false));

    let record = &entries[0].record;
    assert!(record.proxied);
    assert!(record.proxiable);
    assert_eq!(record.ttl, 1);
    assert_eq!(report.formatted, 1);
    assert_eq!(report.removed, 0);
}

#[test]
fn test_normalize_leaves_other_types_unproxied() {
    let mut entries = vec![entry("TXT", "_verify", "token"), entry("MX", "@", "mx.example.com")];

    let report = normalize(&mut entries, &no_restrictions(), &FixedAnswer(false));

    assert_eq!(report.formatted, 0);
    for e in &entries {
        assert!(e.record.proxiable);
        assert!(!e.record.proxied);
        assert_eq!(e.record.ttl, 0);
    }
}

#[test]
fn test_normalize_keeps_explicit_ttl() {
    let mut entries = vec![entry("CNAME", "docs", "example.net")];
    entries[0].record.ttl = 300;

    normalize(&mut entries, &no_restrictions(), &FixedAnswer(false));
    assert_eq!(entries[0].record.ttl, 300);
}

#[test]
fn test_normalize_is_idempotent() {
    let restricted = RestrictedList::new(["^admin$"]).unwrap();
    let mut entries = vec![
        entry("A", "www", "1.1.1.1"),
        entry("AAAA", "v6", "::1"),
        entry("TXT", "txt", "hello"),
        entry("A", "admin", "2.2.2.2"),
    ];

    normalize(&mut entries, &restricted, &FixedAnswer(true));
    let once = entries.clone();
    let report = normalize(&mut entries, &restricted, &FixedAnswer(true));

    assert_eq!(entries, once);
    assert_eq!(report.formatted, 0);
}

#[test]
fn test_normalize_removes_restricted_when_confirmed() {
    let restricted = RestrictedList::new(["^admin$", "^mail"]).unwrap();
    let mut entries = vec![
        entry("A", "admin", "1.1.1.1"),
        entry("A", "www", "2.2.2.2"),
        entry("A", "mail", "3.3.3.3"),
        entry("CNAME", "blog", "pages.dev"),
    ];

    let report = normalize(&mut entries, &restricted, &FixedAnswer(true));

    let names: Vec<&str> = entries.iter().map(|e| e.record.name.as_str()).collect();
    assert_eq!(names, vec!["www", "blog"]);
    assert_eq!(report.removed, 2);
    assert_eq!(report.formatted, 6);
}

#[test]
fn test_normalize_keeps_restricted_when_declined() {
    let restricted = RestrictedList::new(["^admin$"]).unwrap();
    let mut entries = vec![entry("A", "admin", "1.1.1.1")];

    let report = normalize(&mut entries, &restricted, &FixedAnswer(false));

    assert_eq!(entries.len(), 1);
    assert_eq!(report.removed, 0);
}

#[test]
fn test_check_passes_valid_records() {
    let mut valid = entry("A", "www", "1.1.1.1");
    valid.record.proxied = true;
    let entries = vec![valid, entry("TXT", "txt", "hello")];

    let report = check(&entries, &no_restrictions()).unwrap();
    assert_eq!(report.checked, 2);
    assert!(report.unproxied.is_empty());
}

#[test]
fn test_check_warns_on_unproxied_records() {
    let entries = vec![entry("CNAME", "blog", "pages.dev")];

    let report = check(&entries, &no_restrictions()).unwrap();
    assert_eq!(report.unproxied, vec!["blog".to_string()]);
}

#[test]
fn test_check_names_missing_field() {
    let cases = [
        (entry("", "www", "1.1.1.1"), "type"),
        (entry("A", "", "1.1.1.1"), "name"),
        (entry("A", "www", ""), "content"),
    ];

    for (bad, expected) in cases {
        let entries = vec![entry("TXT", "ok", "fine"), bad];
        let err = check(&entries, &no_restrictions()).unwrap_err();

        match &err {
            Error::Validation { index, field } => {
                assert_eq!(*index, 2);
                assert_eq!(*field, expected);
            }
            other => panic!("expected a validation error, got {:?}", other),
        }
        assert!(err.to_string().contains(&format!("record {} cannot be empty", expected)));
    }
}

#[test]
fn test_check_rejects_restricted_subdomains() {
    let restricted = RestrictedList::new(["^admin"]).unwrap();
    let entries = vec![entry("A", "www", "1.1.1.1"), entry("A", "admin", "2.2.2.2")];

    let err = check(&entries, &restricted).unwrap_err();
    match err {
        Error::RestrictedSubdomain { names } => assert_eq!(names, vec!["admin".to_string()]),
        other => panic!("expected a restricted subdomain error, got {:?}", other),
    }
}
