use std::path::Path;

use tracing::debug;

use super::enrich::Enricher;
use super::types::{RawSpec, Spec};
use crate::error::{Result, ScaffoldError};

/// File name used when no declaration path is given.
pub const DEFAULT_SPEC_FILE: &str = "scaffold.json";

/// Declaration formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
    Json,
    Yaml,
    Toml,
}

impl SpecFormat {
    /// `.yaml`/`.yml` and `.toml` are recognised; everything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => SpecFormat::Yaml,
            Some("toml") => SpecFormat::Toml,
            _ => SpecFormat::Json,
        }
    }
}

/// Decode declaration text in the given format.
pub fn parse_raw_spec(content: &str, format: SpecFormat) -> Result<RawSpec> {
    let decoded = match format {
        SpecFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        SpecFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        SpecFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
    };
    decoded.map_err(|e| ScaffoldError::config(format!("cannot decode {format:?} declaration - {e}")))
}

/// Read and decode a declaration file without enriching it.
pub fn load_raw_spec(path: &Path) -> Result<RawSpec> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ScaffoldError::io("read specification file", path, e))?;
    let format = SpecFormat::from_path(path);
    debug!(path = %path.display(), ?format, "loading specification");
    parse_raw_spec(&content, format).map_err(|e| match e {
        ScaffoldError::Config { message } => {
            ScaffoldError::config(format!("{}: {message}", path.display()))
        }
        other => other,
    })
}

/// Read, decode and enrich a declaration file.
pub fn load_spec(path: &Path) -> Result<Spec> {
    let raw = load_raw_spec(path)?;
    Enricher::new().enrich(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(SpecFormat::from_path(Path::new("a.yaml")), SpecFormat::Yaml);
        assert_eq!(SpecFormat::from_path(Path::new("a.YML")), SpecFormat::Yaml);
        assert_eq!(SpecFormat::from_path(Path::new("a.toml")), SpecFormat::Toml);
        assert_eq!(SpecFormat::from_path(Path::new("scaffold.json")), SpecFormat::Json);
        assert_eq!(SpecFormat::from_path(Path::new("scaffold")), SpecFormat::Json);
    }

    #[test]
    fn test_parse_json_camel_case_keys() {
        let raw = parse_raw_spec(
            r#"{
                "name": "animals",
                "sourceBase": "github.com/acme/animals",
                "db": "mysql",
                "dbuser": "webuser",
                "resources": [
                    {"name": "mouse", "plural": "mice", "tableName": "mice",
                     "fields": [{"name": "name", "type": "string", "mandatory": true,
                                 "excludeFromDisplay": false, "testValues": ["Jerry"]}]}
                ]
            }"#,
            SpecFormat::Json,
        )
        .unwrap();
        assert_eq!(raw.source_base, "github.com/acme/animals");
        let mouse = &raw.resources[0];
        assert_eq!(mouse.plural.as_deref(), Some("mice"));
        assert_eq!(mouse.table_name.as_deref(), Some("mice"));
        assert!(mouse.fields[0].mandatory);
        assert_eq!(mouse.fields[0].test_values.len(), 1);
    }

    #[test]
    fn test_parse_yaml_with_numeric_values() {
        let raw = parse_raw_spec(
            "name: animals\ndbport: 3307\nresources:\n  - name: cat\n    fields:\n      - name: age\n        type: int\n        testValues: [3, 4]\n",
            SpecFormat::Yaml,
        )
        .unwrap();
        assert_eq!(raw.dbport.unwrap().to_string(), "3307");
        let values: Vec<String> = raw.resources[0].fields[0]
            .test_values
            .iter()
            .map(|v| v.to_string())
            .collect();
        assert_eq!(values, vec!["3", "4"]);
    }

    #[test]
    fn test_parse_toml() {
        let raw = parse_raw_spec(
            "name = \"animals\"\n\n[[resources]]\nname = \"cat\"\n\n[[resources.fields]]\nname = \"alive\"\ntype = \"bool\"\n",
            SpecFormat::Toml,
        )
        .unwrap();
        assert_eq!(raw.resources[0].fields[0].field_type, "bool");
    }

    #[test]
    fn test_undecodable_is_config_error() {
        let err = parse_raw_spec("{ not json", SpecFormat::Json).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_raw_spec(Path::new("/definitely/not/here/scaffold.json")).unwrap_err();
        assert!(matches!(err, ScaffoldError::Io { .. }));
    }
}
