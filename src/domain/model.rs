//! Canonical model records resolved from the VMH record store

use serde::{Deserialize, Serialize};

/// A genome-scale metabolic reconstruction in canonical form.
///
/// Upstream records come in loosely-typed shapes; mapping normalizes them
/// into this representation once, after which the record is immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRecord {
    /// Upstream identifier coerced to a string, or a generated token when
    /// the upstream record has none.
    pub id: String,
    /// Best available display name: reconstruction identifier, else
    /// organism name, else a positional fallback label.
    pub name: String,
    /// Link to the binary (MAT) artifact, synthesized from the
    /// reconstruction identifier when the upstream record does not carry
    /// an explicit one.
    pub download_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sbml_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organism: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
}

/// The outcome of resolving a single query name.
///
/// Exactly one of these exists per normalized input name, in input order.
/// A failed resolution carries an empty model list and a user-facing
/// error message; it never fails the enclosing batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    pub query: String,
    pub models: Vec<ModelRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QueryResult {
    pub fn resolved(query: impl Into<String>, models: Vec<ModelRecord>) -> Self {
        Self {
            query: query.into(),
            models,
            error: None,
        }
    }

    pub fn failed(query: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            models: Vec::new(),
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> ModelRecord {
        ModelRecord {
            id: id.to_string(),
            name: "Escherichia_coli_str_K_12_substr_MG1655".to_string(),
            download_url: Some("https://example.org/m.mat".to_string()),
            sbml_url: None,
            organism: Some("Escherichia coli".to_string()),
            strain: None,
            family: None,
            source_name: None,
        }
    }

    #[test]
    fn test_model_record_wire_field_names() {
        let json = serde_json::to_value(record("42")).unwrap();
        assert_eq!(json["id"], "42");
        assert_eq!(json["downloadUrl"], "https://example.org/m.mat");
        assert_eq!(json["organism"], "Escherichia coli");
        // Absent optionals are omitted entirely
        assert!(json.get("sbmlUrl").is_none());
        assert!(json.get("strain").is_none());
        assert!(json.get("sourceName").is_none());
    }

    #[test]
    fn test_null_download_url_is_serialized() {
        let mut rec = record("1");
        rec.download_url = None;
        let json = serde_json::to_value(rec).unwrap();
        assert!(json["downloadUrl"].is_null());
    }

    #[test]
    fn test_query_result_error_omitted_on_success() {
        let result = QueryResult::resolved("E. coli", vec![record("1")]);
        let json = serde_json::to_value(result).unwrap();
        assert!(json.get("error").is_none());
        assert_eq!(json["models"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_failed_query_result_has_empty_models() {
        let result = QueryResult::failed("bad name", "upstream unavailable");
        assert!(result.models.is_empty());
        assert_eq!(result.error.as_deref(), Some("upstream unavailable"));
    }
}
