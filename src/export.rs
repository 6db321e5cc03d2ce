// Author: Dustin Pilgrim
// License: MIT

use std::fmt;
use std::str::FromStr;

use crate::table::SymbolTable;
use crate::VarsError;

/// Structured formats the merged table can be written as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Yaml,
    Json,
}

impl FromStr for ExportFormat {
    type Err = VarsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(ExportFormat::Yaml),
            "json" => Ok(ExportFormat::Json),
            other => Err(VarsError::ExportError {
                message: format!("Unknown export format '{}'", other),
                hint: Some("Use yaml or json".into()),
                code: Some(502),
            }),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Yaml => f.write_str("yaml"),
            ExportFormat::Json => f.write_str("json"),
        }
    }
}

/// Export the merged table.
///
/// Objects become nested mappings, lists sequences, scalars their natural
/// typed form. Key order follows first definition.
pub fn export_table(table: &SymbolTable, format: ExportFormat) -> Result<String, VarsError> {
    match format {
        ExportFormat::Yaml => export_to_yaml(table),
        ExportFormat::Json => export_to_json(table),
    }
}

pub fn export_to_yaml(table: &SymbolTable) -> Result<String, VarsError> {
    serde_yaml::to_string(table).map_err(|e| VarsError::ExportError {
        message: format!("Failed to encode YAML: {}", e),
        hint: None,
        code: Some(501),
    })
}

/// Pretty-printed JSON.
pub fn export_to_json(table: &SymbolTable) -> Result<String, VarsError> {
    serde_json::to_string_pretty(table).map_err(|e| VarsError::ExportError {
        message: format!("Failed to encode JSON: {}", e),
        hint: None,
        code: Some(501),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFINITIONS: &str = r#"
name = "app"
replicas = 3
public = false
zones = ["a", "b"]
cfg = {
  owner = "team"
  inner = {
    flag = "yes"
  }
}
"#;

    #[test]
    fn test_export_json_structure() {
        let table = SymbolTable::from_str(DEFINITIONS).unwrap();
        let json_output = export_to_json(&table).expect("Failed to export JSON");

        let v: serde_json::Value = serde_json::from_str(&json_output).unwrap();
        assert_eq!(v["name"], "app");
        assert_eq!(v["replicas"], 3.0);
        assert_eq!(v["public"], false);
        assert_eq!(v["zones"], serde_json::json!(["a", "b"]));
        assert_eq!(v["cfg"]["owner"], "team");
        assert_eq!(v["cfg"]["inner"]["flag"], "yes");
    }

    #[test]
    fn test_export_yaml_structure() {
        let table = SymbolTable::from_str(DEFINITIONS).unwrap();
        let yaml_output = export_to_yaml(&table).expect("Failed to export YAML");

        let v: serde_yaml::Value = serde_yaml::from_str(&yaml_output).unwrap();
        assert_eq!(v["name"].as_str(), Some("app"));
        assert_eq!(v["replicas"].as_f64(), Some(3.0));
        assert_eq!(v["public"].as_bool(), Some(false));
        assert_eq!(v["zones"][1].as_str(), Some("b"));
        assert_eq!(v["cfg"]["inner"]["flag"].as_str(), Some("yes"));
    }

    #[test]
    fn test_export_whole_numbers_without_fraction() {
        let table = SymbolTable::from_str("replicas = 3\nratio = 0.5\nneg = -2").unwrap();
        let yaml_output = export_to_yaml(&table).unwrap();
        assert_eq!(yaml_output, "replicas: 3\nratio: 0.5\nneg: -2\n");

        let json_output = export_to_json(&table).unwrap();
        assert!(json_output.contains("\"replicas\": 3,"));
        assert!(json_output.contains("\"ratio\": 0.5,"));
    }

    #[test]
    fn test_export_preserves_definition_order() {
        let table = SymbolTable::from_str("b = 1\na = 2").unwrap();
        let yaml_output = export_table(&table, ExportFormat::Yaml).unwrap();
        assert!(yaml_output.find("b:").unwrap() < yaml_output.find("a:").unwrap());
    }

    #[test]
    fn test_export_format_parsing() {
        assert_eq!("yaml".parse::<ExportFormat>().unwrap(), ExportFormat::Yaml);
        assert_eq!("YML".parse::<ExportFormat>().unwrap(), ExportFormat::Yaml);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("toml".parse::<ExportFormat>().is_err());
        assert_eq!(ExportFormat::default().to_string(), "yaml");
    }

    #[test]
    fn test_export_empty_table() {
        let json_output = export_to_json(&SymbolTable::new()).unwrap();
        assert_eq!(json_output, "{}");
    }
}
