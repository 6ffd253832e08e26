use std::fs;

use tempfile::TempDir;

use super::support::record;
use crate::error::Error;
use crate::restricted::RestrictedList;

#[test]
fn test_is_restricted_uses_regex_search() {
    let list = RestrictedList::new(["admin", r"^www\.", r"\.internal$"]).unwrap();

    assert!(list.is_restricted("admin.example.com"));
    assert!(list.is_restricted("superadmin"));
    assert!(list.is_restricted("www.example.com"));
    assert!(list.is_restricted("db.internal"));
    assert!(!list.is_restricted("blog.example.com"));
    assert!(!list.is_restricted("wwwx"));
}

#[test]
fn test_empty_list_restricts_nothing() {
    let list = RestrictedList::default();
    assert!(list.is_empty());
    assert!(!list.is_restricted(""));
    assert!(!list.is_restricted("anything"));
}

#[test]
fn test_invalid_pattern_is_rejected() {
    let err = RestrictedList::new(["(unclosed"]).unwrap_err();
    assert!(matches!(err, Error::InvalidPattern { ref pattern, .. } if pattern == "(unclosed"));
}

#[test]
fn test_load_reads_restricted_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("restricted.json");
    fs::write(&path, r#"{"restricted_subdomain": ["^mail", "^ns[0-9]"]}"#).unwrap();

    let list = RestrictedList::load(&path).unwrap();
    assert_eq!(list.len(), 2);
    assert!(list.is_restricted("ns1.example.com"));
}

#[test]
fn test_load_missing_file_restricts_nothing() {
    let dir = TempDir::new().unwrap();
    let list = RestrictedList::load(&dir.path().join("missing.json")).unwrap();
    assert!(list.is_empty());
}

#[test]
fn test_load_malformed_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("restricted.json");
    fs::write(&path, "restricted_subdomain: nope").unwrap();

    let err = RestrictedList::load(&path).unwrap_err();
    assert!(matches!(err, Error::ConfigParse { .. }));
}

#[test]
fn test_partition_preserves_order() {
    let list = RestrictedList::new(["^admin"]).unwrap();
    let records = vec![
        record("A", "a", "1"),
        record("A", "admin", "2"),
        record("A", "b", "3"),
    ];

    let (allowed, restricted) = list.partition(records);
    let names: Vec<&str> = allowed.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(restricted[0].name, "admin");
}
