//! Mapping of raw VMH records to canonical model records
//!
//! Upstream records are loosely typed and the field names vary across
//! response variants, so every canonical field is resolved through an
//! ordered list of candidate source fields. A record missing expected
//! fields degrades to `None`/synthesized values; it is never dropped.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;
use uuid::Uuid;

use crate::config::VmhConfig;
use crate::domain::ModelRecord;

/// Matches the escaping of JavaScript's `encodeURIComponent`, which the
/// artifact file server expects in path segments.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const RECONSTRUCTION_FIELDS: &[&str] = &["reconstruction", "reconstruction_name"];
const ORGANISM_FIELDS: &[&str] = &["organism", "organism_name"];
const STRAIN_FIELDS: &[&str] = &["strain"];
const FAMILY_FIELDS: &[&str] = &["family"];
const SOURCE_NAME_FIELDS: &[&str] = &["source_name", "sourceName", "source"];
/// An explicit upstream download link wins over URL synthesis.
const DOWNLOAD_FIELDS: &[&str] = &["download_url", "downloadUrl", "file", "url"];

/// Map one page of raw records for `query` into canonical records.
pub fn map_records(query: &str, items: &[Value], vmh: &VmhConfig) -> Vec<ModelRecord> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| map_record(query, index + 1, item, vmh))
        .collect()
}

fn map_record(query: &str, position: usize, item: &Value, vmh: &VmhConfig) -> ModelRecord {
    let reconstruction = first_string(item, RECONSTRUCTION_FIELDS);
    let organism = first_string(item, ORGANISM_FIELDS);

    let name = reconstruction
        .clone()
        .or_else(|| organism.clone())
        .unwrap_or_else(|| format!("{query} ({position})"));

    let download_url = first_string(item, DOWNLOAD_FIELDS).or_else(|| {
        reconstruction
            .as_deref()
            .map(|recon| artifact_url(&vmh.mat_base_url, recon, "mat"))
    });
    let sbml_url = reconstruction
        .as_deref()
        .map(|recon| artifact_url(&vmh.sbml_base_url, recon, "xml"));

    ModelRecord {
        id: record_id(item).unwrap_or_else(|| Uuid::new_v4().to_string()),
        name,
        download_url,
        sbml_url,
        organism,
        strain: first_string(item, STRAIN_FIELDS),
        family: first_string(item, FAMILY_FIELDS),
        source_name: first_string(item, SOURCE_NAME_FIELDS),
    }
}

fn artifact_url(base: &str, reconstruction: &str, extension: &str) -> String {
    let encoded = utf8_percent_encode(reconstruction, URI_COMPONENT);
    format!("{base}{encoded}.{extension}")
}

/// First candidate field holding a non-empty string.
fn first_string(item: &Value, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .filter_map(|field| item.get(field))
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// Upstream ids arrive as strings or numbers; coerce either to a string.
fn record_id(item: &Value) -> Option<String> {
    match item.get("id")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vmh() -> VmhConfig {
        VmhConfig {
            mat_base_url: "https://files.test/mat/".to_string(),
            sbml_base_url: "https://files.test/sbml/".to_string(),
            ..VmhConfig::default()
        }
    }

    #[test]
    fn test_url_synthesis_from_reconstruction() {
        let items = [json!({
            "id": 12,
            "reconstruction": "Escherichia_coli_str_K_12_substr_MG1655",
            "organism": "Escherichia coli"
        })];
        let records = map_records("E. coli", &items, &vmh());

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.id, "12");
        assert_eq!(record.name, "Escherichia_coli_str_K_12_substr_MG1655");
        assert_eq!(
            record.download_url.as_deref(),
            Some("https://files.test/mat/Escherichia_coli_str_K_12_substr_MG1655.mat")
        );
        assert_eq!(
            record.sbml_url.as_deref(),
            Some("https://files.test/sbml/Escherichia_coli_str_K_12_substr_MG1655.xml")
        );
    }

    #[test]
    fn test_url_synthesis_percent_encodes_identifier() {
        let items = [json!({"reconstruction": "Strain sp. 7/3"})];
        let records = map_records("q", &items, &vmh());

        assert_eq!(
            records[0].download_url.as_deref(),
            Some("https://files.test/mat/Strain%20sp.%207%2F3.mat")
        );
    }

    #[test]
    fn test_explicit_download_field_wins_over_synthesis() {
        let items = [json!({
            "reconstruction": "iML1515",
            "download_url": "https://elsewhere.test/iML1515.mat"
        })];
        let records = map_records("q", &items, &vmh());

        assert_eq!(
            records[0].download_url.as_deref(),
            Some("https://elsewhere.test/iML1515.mat")
        );
        // SBML is synthesis-only
        assert_eq!(
            records[0].sbml_url.as_deref(),
            Some("https://files.test/sbml/iML1515.xml")
        );
    }

    #[test]
    fn test_no_reconstruction_means_no_synthesized_urls() {
        let items = [json!({"organism": "Escherichia coli"})];
        let records = map_records("q", &items, &vmh());

        assert_eq!(records[0].name, "Escherichia coli");
        assert!(records[0].download_url.is_none());
        assert!(records[0].sbml_url.is_none());
    }

    #[test]
    fn test_positional_name_fallback_and_generated_id() {
        let items = [json!({}), json!({"strain": "K-12"})];
        let records = map_records("E. coli", &items, &vmh());

        assert_eq!(records[0].name, "E. coli (1)");
        assert_eq!(records[1].name, "E. coli (2)");
        assert_eq!(records[1].strain.as_deref(), Some("K-12"));
        // Generated ids are present and unique
        assert!(!records[0].id.is_empty());
        assert_ne!(records[0].id, records[1].id);
    }

    #[test]
    fn test_id_coercion_from_string_and_number() {
        let items = [json!({"id": "abc-1"}), json!({"id": 99})];
        let records = map_records("q", &items, &vmh());

        assert_eq!(records[0].id, "abc-1");
        assert_eq!(records[1].id, "99");
    }

    #[test]
    fn test_alternate_field_names_are_recognized() {
        let items = [json!({
            "reconstruction_name": "iAB_RBC_283",
            "organism_name": "Homo sapiens",
            "source": "AGORA2"
        })];
        let records = map_records("q", &items, &vmh());

        assert_eq!(records[0].name, "iAB_RBC_283");
        assert_eq!(records[0].organism.as_deref(), Some("Homo sapiens"));
        assert_eq!(records[0].source_name.as_deref(), Some("AGORA2"));
    }

    #[test]
    fn test_passthrough_fields_default_to_none() {
        let items = [json!({"reconstruction": "iML1515"})];
        let records = map_records("q", &items, &vmh());

        assert!(records[0].organism.is_none());
        assert!(records[0].strain.is_none());
        assert!(records[0].family.is_none());
        assert!(records[0].source_name.is_none());
    }
}
