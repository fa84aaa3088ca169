// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for printed/exported reports

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

/// Machine-readable document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportOutputFormat {
    Json,
    Yaml,
}

impl ReportOutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportOutputFormat::Json => "json",
            ReportOutputFormat::Yaml => "yaml",
        }
    }

    pub fn serialize<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        match self {
            ReportOutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
            ReportOutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        }
    }
}

/// Console output: coloured text or a serialized document on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    /// The document format, or `None` for human-readable text.
    pub fn document(&self) -> Option<ReportOutputFormat> {
        match self {
            OutputFormat::Text => None,
            OutputFormat::Json => Some(ReportOutputFormat::Json),
            OutputFormat::Yaml => Some(ReportOutputFormat::Yaml),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn document_extensions() {
        assert_eq!(ReportOutputFormat::Json.extension(), "json");
        assert_eq!(ReportOutputFormat::Yaml.extension(), "yaml");
    }

    #[test]
    fn serializes_any_value() {
        let value = json!({"locale": "th", "paths": ["/th", "/en"]});
        let yaml = ReportOutputFormat::Yaml.serialize(&value).unwrap();
        assert!(yaml.contains("locale: th"));
        let json = ReportOutputFormat::Json.serialize(&value).unwrap();
        assert!(json.contains("\"/en\""));
    }

    #[test]
    fn text_has_no_document_format() {
        assert_eq!(OutputFormat::Text.document(), None);
        assert_eq!(OutputFormat::Yaml.document(), Some(ReportOutputFormat::Yaml));
    }
}
