//! Format-detecting config loading

use crate::{Error, Result, TargetPath, io};
use serde::de::DeserializeOwned;

/// Loads typed configuration, picking the parser from the file extension:
/// `.toml`, `.json`, `.yaml` or `.yml`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    pub fn load<T: DeserializeOwned>(&self, path: &TargetPath) -> Result<T> {
        let extension = path.extension().unwrap_or("").to_lowercase();
        let format = match extension.as_str() {
            "toml" => "TOML",
            "json" => "JSON",
            "yaml" | "yml" => "YAML",
            _ => return Err(Error::UnsupportedFormat { extension }),
        };

        let content = io::read_text(path)?;
        self.parse(path, format, &content)
    }

    fn parse<T: DeserializeOwned>(
        &self,
        path: &TargetPath,
        format: &str,
        content: &str,
    ) -> Result<T> {
        let parsed = match format {
            "TOML" => toml::from_str(content).map_err(|e| e.to_string()),
            "JSON" => serde_json::from_str(content).map_err(|e| e.to_string()),
            _ => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| Error::ConfigParse {
            path: path.to_native(),
            format: format.into(),
            message,
        })
    }
}
