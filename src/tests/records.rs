use std::fs;

use tempfile::TempDir;

use super::support::entry;
use crate::error::Error;
use crate::records::{load_entries, load_records, save_entries, Owner, Record, RecordEntry};

#[test]
fn test_load_entries_reads_metadata() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("records.json");
    fs::write(
        &path,
        r#"[
            {
                "description": "Personal blog",
                "repo": "https://github.com/example/blog",
                "owner": {"username": "octo", "email": "octo@example.com"},
                "record": {"type": "CNAME", "name": "blog", "content": "example.github.io", "proxiable": true, "proxied": true, "ttl": 1}
            },
            {"record": {"type": "A", "name": "api", "content": "1.2.3.4"}}
        ]"#,
    )
    .unwrap();

    let entries = load_entries(&path).unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].description, "Personal blog");
    assert_eq!(entries[0].owner.username, "octo");
    assert_eq!(entries[0].record.r#type, "CNAME");
    assert!(entries[0].record.proxied);
    assert_eq!(entries[1].record.id, "");
    assert_eq!(entries[1].record.ttl, 0);
    assert!(!entries[1].record.proxied);
}

#[test]
fn test_load_records_filters_by_type() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("records.json");
    save_entries(
        &path,
        &[
            entry("A", "a", "1.1.1.1"),
            entry("TXT", "t", "text"),
            entry("CNAME", "c", "target"),
        ],
    )
    .unwrap();

    let records = load_records(&path, &["A".to_string(), "CNAME".to_string()]).unwrap();
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["a", "c"]);
}

#[test]
fn test_save_then_load_is_lossless() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("records.json");
    let entries = vec![
        RecordEntry {
            description: "Docs site".to_string(),
            repo: "example/docs".to_string(),
            owner: Owner {
                username: "docs-team".to_string(),
                email: "docs@example.com".to_string(),
            },
            record: Record {
                id: "abc123".to_string(),
                r#type: "CNAME".to_string(),
                name: "docs".to_string(),
                content: "docs.pages.dev".to_string(),
                proxiable: true,
                proxied: true,
                ttl: 1,
            },
        },
        entry("MX", "@", "mx.example.com"),
    ];

    save_entries(&path, &entries).unwrap();
    assert_eq!(load_entries(&path).unwrap(), entries);
}

#[test]
fn test_saved_file_omits_empty_id() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("records.json");
    save_entries(&path, &[entry("A", "www", "1.1.1.1")]).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(!written.contains("\"id\""));
    assert!(written.contains("\t"));
}

#[test]
fn test_malformed_records_file_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("records.json");
    fs::write(&path, "[{\"record\": ").unwrap();

    let err = load_entries(&path).unwrap_err();
    assert!(matches!(err, Error::RecordParse { .. }));
}

#[test]
fn test_missing_records_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = load_entries(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, Error::FileIo { .. }));
}
