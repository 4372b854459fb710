//! End-to-end tests for the streaming passes.

use std::io::Write;

use osm_audit::AuditConfig;
use osm_cli::pipeline::{
    StreamOptions, Suggestion, audit_file, audit_stream, count_key_types, count_tags,
    default_output_path, find_users, shape_file, shape_stream, shape_with_mapping,
};
use osm_ingest::OsmReader;
use osm_model::{KeyType, SuffixMapping};
use osm_transform::{ElementShaper, RecordWriter};
use serde_json::{Value, json};
use tempfile::NamedTempFile;

const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<osm version="0.6">
  <bounds minlat="41.9" minlon="-87.7" maxlat="42.0" maxlon="-87.6"/>
  <node id="1" lat="41.9" lon="-87.65" version="3" changeset="11" timestamp="2015-01-01T00:00:00Z" user="alice" uid="100">
    <tag k="addr:street" v="West Lexington St."/>
    <tag k="amenity" v="cafe"/>
  </node>
  <node id="2" lat="41.91" lon="-87.66" user="bob" uid="200"/>
  <way id="3" user="alice" uid="100">
    <nd ref="1"/>
    <nd ref="2"/>
    <tag k="addr:street" v="main  Avenue"/>
    <tag k="highway" v="residential"/>
  </way>
  <relation id="4" uid="300">
    <member type="node" ref="1" role=""/>
    <tag k="type" v="multipolygon"/>
  </relation>
</osm>
"#;

fn quiet() -> StreamOptions {
    StreamOptions {
        progress_step: 0,
        spinner: false,
    }
}

fn street_mapping() -> SuffixMapping {
    [("St.", "Street"), ("St", "Street"), ("Ave", "Avenue")]
        .into_iter()
        .collect()
}

#[test]
fn counts_every_element_including_root() {
    let counts = count_tags(&mut OsmReader::from_xml(SAMPLE), &quiet()).expect("count tags");
    assert_eq!(counts.get("osm"), 1);
    assert_eq!(counts.get("bounds"), 1);
    assert_eq!(counts.get("node"), 2);
    assert_eq!(counts.get("way"), 1);
    assert_eq!(counts.get("relation"), 1);
    assert_eq!(counts.get("member"), 1);
    assert_eq!(counts.get("nd"), 2);
    assert_eq!(counts.get("tag"), 5);
    assert_eq!(counts.total(), 14);
}

#[test]
fn classifies_tag_keys() {
    let counts =
        count_key_types(&mut OsmReader::from_xml(SAMPLE), &quiet()).expect("count key types");
    assert_eq!(
        counts.most_common(),
        vec![(KeyType::Lower, 3), (KeyType::LowerColon, 2)]
    );
}

#[test]
fn finds_distinct_users() {
    let users = find_users(&mut OsmReader::from_xml(SAMPLE), &quiet()).expect("find users");
    assert_eq!(users.iter().collect::<Vec<_>>(), vec!["100", "200", "300"]);
}

#[test]
fn audits_street_names() {
    let audit = audit_stream(
        &mut OsmReader::from_xml(SAMPLE),
        AuditConfig::default(),
        &quiet(),
    )
    .expect("audit");
    assert_eq!(audit.unexpected.len(), 1);
    assert!(audit.unexpected["St."].contains(&"West Lexington St.".to_string()));
    assert_eq!(
        audit.unnormalized.iter().collect::<Vec<_>>(),
        vec!["main  Avenue"]
    );
}

#[test]
fn shapes_nodes_and_ways_in_document_order() {
    let shaper = ElementShaper::new(street_mapping());
    let mut writer = RecordWriter::new(Vec::new());
    let summary = shape_stream(
        &mut OsmReader::from_xml(SAMPLE),
        &shaper,
        &mut writer,
        &quiet(),
    )
    .expect("shape");
    assert_eq!(summary.elements, 5);
    assert_eq!(summary.nodes, 2);
    assert_eq!(summary.ways, 1);
    assert_eq!(summary.skipped(), 2);

    let output = String::from_utf8(writer.finish().expect("flush")).expect("utf-8");
    let records: Vec<Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).expect("json line"))
        .collect();
    assert_eq!(records.len(), 3);
    assert_eq!(
        records[0],
        json!({
            "type": "node",
            "id": "1",
            "pos": [41.9, -87.65],
            "created": {
                "version": "3",
                "changeset": "11",
                "timestamp": "2015-01-01T00:00:00Z",
                "user": "alice",
                "uid": "100"
            },
            "address": {"street": "West Lexington Street"},
            "amenity": "cafe"
        })
    );
    assert_eq!(records[1]["id"], "2");
    assert_eq!(records[2]["type"], "way");
    assert_eq!(records[2]["node_refs"], json!(["1", "2"]));
    assert_eq!(records[2]["address"]["street"], "Main Avenue");
    assert_eq!(records[2]["highway"], "residential");
}

#[test]
fn malformed_document_fails_the_pass() {
    let broken = r#"<osm><node id="1"><tag k="a" v="b"/></way></osm>"#;
    let result = count_tags(&mut OsmReader::from_xml(broken), &quiet());
    assert!(result.is_err());
}

#[test]
fn shape_file_writes_json_lines() {
    let mut input = NamedTempFile::new().expect("create input");
    input.write_all(SAMPLE.as_bytes()).expect("write input");
    let dir = tempfile::tempdir().expect("create temp dir");
    let output = dir.path().join("map.osm.json");

    let shaper = ElementShaper::new(street_mapping());
    let summary = shape_file(input.path(), &output, &shaper, false, &quiet()).expect("shape file");
    assert_eq!(summary.records(), 3);
    assert_eq!(summary.output.as_deref(), Some(output.as_path()));

    let written = std::fs::read_to_string(&output).expect("read output");
    assert_eq!(written.lines().count(), 3);
    assert!(written.ends_with('\n'));
}

#[test]
fn missing_input_creates_no_output() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = dir.path().join("missing.osm");
    let output = default_output_path(&input);
    let shaper = ElementShaper::new(street_mapping());
    assert!(shape_file(&input, &output, &shaper, false, &quiet()).is_err());
    assert!(!output.exists());
}

fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn literal_tab_in_street_name_is_not_reported() {
    let xml = "<osm><node id=\"1\"><tag k=\"addr:street\" v=\"Main\tStreet\"/></node></osm>";
    let audit = audit_stream(
        &mut OsmReader::from_xml(xml),
        AuditConfig::default(),
        &quiet(),
    )
    .expect("audit");
    assert!(audit.is_clean());
}

#[test]
fn audit_suggests_corrected_names() {
    let input = temp_file(SAMPLE);
    let mapping = temp_file(r#"{"St.": "Street"}"#);
    let report = audit_file(
        input.path(),
        AuditConfig::default(),
        Some(mapping.path()),
        &quiet(),
    )
    .expect("audit file");
    assert_eq!(
        report.suggestions,
        Some(vec![Suggestion {
            original: "West Lexington St.".to_string(),
            updated: "West Lexington Street".to_string(),
        }])
    );
}

#[test]
fn audit_without_mapping_has_no_suggestions() {
    let input = temp_file(SAMPLE);
    let report =
        audit_file(input.path(), AuditConfig::default(), None, &quiet()).expect("audit file");
    assert!(report.suggestions.is_none());
    assert_eq!(report.input, input.path());
}

#[test]
fn bad_mapping_fails_audit_before_reading() {
    let input = temp_file(SAMPLE);
    let mapping = temp_file("not json");
    let result = audit_file(
        input.path(),
        AuditConfig::default(),
        Some(mapping.path()),
        &quiet(),
    );
    assert!(result.is_err());
}

#[test]
fn bad_mapping_leaves_no_output_behind() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = dir.path().join("map.osm");
    std::fs::write(&input, SAMPLE).expect("write input");
    let mapping = dir.path().join("street_mapping.json");
    std::fs::write(&mapping, "[1, 2, 3]").expect("write mapping");

    let result = shape_with_mapping(&input, &mapping, None, false, &quiet());
    assert!(result.is_err());
    assert!(!default_output_path(&input).exists());
}

#[test]
fn shape_with_mapping_writes_default_output() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = dir.path().join("map.osm");
    std::fs::write(&input, SAMPLE).expect("write input");
    let mapping = dir.path().join("street_mapping.json");
    std::fs::write(&mapping, r#"{"St.": "Street"}"#).expect("write mapping");

    let summary =
        shape_with_mapping(&input, &mapping, None, false, &quiet()).expect("shape with mapping");
    let output = default_output_path(&input);
    assert_eq!(summary.output.as_deref(), Some(output.as_path()));
    let written = std::fs::read_to_string(&output).expect("read output");
    assert!(written.contains("West Lexington Street"));
}
