// Author: Dustin Pilgrim
// License: MIT

#[cfg(test)]
use super::*;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    let mut file = fs::File::create(&path).expect("Failed to create file");
    file.write_all(content.as_bytes()).expect("Failed to write file");
    path
}

#[test]
fn test_merge_later_table_wins() {
    let first = SymbolTable::from_str("a = 1").unwrap();
    let second = SymbolTable::from_str("a = 2").unwrap();

    let mut forward = SymbolTable::new();
    forward.merge(first.clone());
    let overridden = forward.merge(second.clone());
    assert_eq!(overridden, vec!["a".to_string()]);
    assert_eq!(forward.get("a"), Some(&Value::Number(2.0)));

    let mut reverse = SymbolTable::new();
    reverse.merge(second);
    reverse.merge(first);
    assert_eq!(reverse.get("a"), Some(&Value::Number(1.0)));
}

#[test]
fn test_merge_keeps_disjoint_keys() {
    let mut table = SymbolTable::from_str("region = \"eu\"").unwrap();
    let overridden = table.merge(SymbolTable::from_str("zone = \"b\"").unwrap());

    assert!(overridden.is_empty());
    assert_eq!(table.len(), 2);
    assert!(table.contains_key("region"));
    assert!(table.contains_key("zone"));
}

#[test]
fn test_from_files_merges_in_order_and_tracks_origin() {
    let dir = tempfile::tempdir().unwrap();
    let base = write_file(dir.path(), "base.tfvars", "env = \"dev\"\nreplicas = 1\n");
    let prod = write_file(dir.path(), "prod.tfvars", "env = \"prod\"\n");

    let table = SymbolTable::from_files([&base, &prod]).expect("Failed to load definitions");

    assert_eq!(table.get("env"), Some(&Value::String("prod".into())));
    assert_eq!(table.get("replicas"), Some(&Value::Number(1.0)));
    let prod_label = prod.to_string_lossy().to_string();
    let base_label = base.to_string_lossy().to_string();
    assert_eq!(table.origin("env"), Some(prod_label.as_str()));
    assert_eq!(table.origin("replicas"), Some(base_label.as_str()));
}

#[test]
fn test_from_files_fails_fast_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_file(dir.path(), "a.tfvars", "a = 1\n");
    let bad = write_file(dir.path(), "b.tfvars", "foo bar\n");

    let err = SymbolTable::from_files([&good, &bad]).unwrap_err();
    match err {
        VarsError::InFile { path, source } => {
            assert_eq!(path, bad.to_string_lossy());
            assert!(matches!(*source, VarsError::MalformedLine { line: 1, .. }));
        }
        other => panic!("Expected InFile error, got {:?}", other),
    }
}

#[test]
fn test_from_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = SymbolTable::from_file(dir.path().join("nope.tfvars")).unwrap_err();
    assert!(matches!(err, VarsError::FileError { code: Some(301), .. }));
}

#[test]
fn test_lookup_dotted_paths() {
    let input = r#"
cfg = {
  name = "a"
  inner = {
    flag = "yes"
  }
}
"#;
    let table = SymbolTable::from_str(input).unwrap();

    assert_eq!(table.lookup("cfg.name"), Some(&Value::String("a".into())));
    assert_eq!(table.lookup("cfg.inner.flag"), Some(&Value::String("yes".into())));
    assert_eq!(table.lookup("cfg.inner.missing"), None);
    assert_eq!(table.lookup("cfg.name.deeper"), None);
    assert!(table.has("cfg.inner"));
    assert!(!table.has("other"));
}

#[test]
fn test_typed_access() {
    let input = r#"
region = "eu-west-1"
replicas = 3
public = false
zones = ["a", "b"]
svc = {
  port = 8080
  tls = true
}
"#;
    let table = SymbolTable::from_str(input).unwrap();

    let region: String = table.get_as("region").unwrap();
    assert_eq!(region, "eu-west-1");

    let replicas: i64 = table.get_as("replicas").unwrap();
    assert_eq!(replicas, 3);

    let public: bool = table.get_as("public").unwrap();
    assert!(!public);

    let zones: Vec<String> = table.get_as("zones").unwrap();
    assert_eq!(zones, vec!["a", "b"]);

    // members are verbatim strings, numeric access still works
    let port: u16 = table.get_as("svc.port").unwrap();
    assert_eq!(port, 8080);
    let tls: bool = table.get_as("svc.tls").unwrap();
    assert!(tls);
}

#[test]
fn test_typed_access_errors() {
    let table = SymbolTable::from_str("name = \"x\"\nbig = 70000\nratio = 0.5").unwrap();

    assert!(matches!(
        table.get_as::<String>("missing"),
        Err(VarsError::KeyNotFound { code: Some(304), .. })
    ));
    assert!(matches!(
        table.get_as::<f64>("name"),
        Err(VarsError::TypeError { code: Some(402), .. })
    ));
    assert!(matches!(
        table.get_as::<u16>("big"),
        Err(VarsError::TypeError { code: Some(403), .. })
    ));
    assert!(table.get_as::<i64>("ratio").is_err());
}

#[test]
fn test_optional_and_default_access() {
    let table = SymbolTable::from_str("timeout = 30").unwrap();

    assert_eq!(table.get_optional::<f64>("timeout").unwrap(), Some(30.0));
    assert_eq!(table.get_optional::<f64>("retries").unwrap(), None);
    assert!(table.get_optional::<bool>("timeout").is_err());

    assert_eq!(table.get_or("retries", 5i64), 5);
    assert_eq!(table.get_or("timeout", 5i64), 30);
}

#[test]
fn test_insert_and_collect() {
    let table: SymbolTable = vec![
        ("a", Value::Bool(true)),
        ("b", Value::Number(1.5)),
    ]
    .into_iter()
    .collect();

    assert_eq!(table.len(), 2);
    assert_eq!(table.keys().cloned().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(table.origin("a"), None);
}

#[test]
fn test_serializes_as_plain_mapping() {
    let table = SymbolTable::from_str("name = \"app\"\ncount = 2").unwrap();
    let json = serde_json::to_value(&table).unwrap();
    assert_eq!(json, serde_json::json!({ "name": "app", "count": 2 }));
}

#[test]
fn test_i64_conversion_rejects_two_pow_63() {
    let value = Value::Number(9223372036854775808.0);
    let result: Result<i64, VarsError> = value.try_into();
    assert!(matches!(result, Err(VarsError::TypeError { code: Some(404), .. })));

    let value = Value::Number(-9223372036854775808.0);
    let result: Result<i64, VarsError> = value.try_into();
    assert_eq!(result.unwrap(), i64::MIN);
}
