//! Integration tests for element shaping.

use osm_model::{ElementKind, Position, RawElement, SuffixMapping};
use osm_transform::{ElementShaper, RecordWriter};

fn street_mapping() -> SuffixMapping {
    [("St.", "Street"), ("St", "Street"), ("Ave", "Avenue"), ("Rd.", "Road")]
        .into_iter()
        .collect()
}

fn example_way() -> RawElement {
    RawElement::new("way")
        .with_attr("id", "1")
        .with_attr("lat", "41.9")
        .with_attr("lon", "-87.6")
        .with_attr("version", "2")
        .with_attr("uid", "99")
        .with_tag("addr:street", "West Lexington St.")
        .with_node_ref("10")
        .with_node_ref("20")
}

#[test]
fn way_structural_contract() {
    let shaper = ElementShaper::new(street_mapping());
    let record = shaper.shape(&example_way()).expect("way record");

    assert_eq!(record.kind, ElementKind::Way);
    assert_eq!(record.pos, Some(Position(41.9, -87.6)));
    assert_eq!(record.created.len(), 2);
    assert_eq!(record.created.get("version").map(String::as_str), Some("2"));
    assert_eq!(record.created.get("uid").map(String::as_str), Some("99"));
    assert_eq!(record.address.len(), 1);
    assert_eq!(record.street(), Some("West Lexington Street"));
    assert_eq!(
        record.node_refs,
        Some(vec!["10".to_string(), "20".to_string()])
    );
    for key in ["lat", "lon", "version", "uid"] {
        assert_eq!(record.field(key), None, "{key} leaked to the top level");
    }
    assert_eq!(record.field("id"), Some("1"));
}

#[test]
fn way_json_line() {
    let shaper = ElementShaper::new(street_mapping());
    let record = shaper.shape(&example_way()).expect("way record");
    let mut writer = RecordWriter::new(Vec::new());
    writer.write(&record).expect("write record");
    let line = String::from_utf8(writer.finish().expect("finish")).expect("utf8");

    insta::assert_snapshot!(
        line.trim_end(),
        @r#"{"type":"way","created":{"uid":"99","version":"2"},"pos":[41.9,-87.6],"address":{"street":"West Lexington Street"},"node_refs":["10","20"],"id":"1"}"#
    );
}

#[test]
fn address_keys_follow_namespace_rules() {
    let node = RawElement::new("node")
        .with_attr("id", "2406124091")
        .with_tag("addr:housenumber", "5158")
        .with_tag("addr:street", "North Lincoln Avenue")
        .with_tag("addr:street:name", "Lincoln")
        .with_tag("addr:street:prefix", "North")
        .with_tag("addr:street:type", "Avenue")
        .with_tag("amenity", "pharmacy")
        .with_tag("tiger:county", "Cook, IL")
        .with_tag("name_1", "Walgreens");
    let record = ElementShaper::new(street_mapping())
        .shape(&node)
        .expect("node record");

    assert_eq!(record.address.len(), 2);
    assert_eq!(
        record.address.get("housenumber").map(String::as_str),
        Some("5158")
    );
    assert_eq!(record.street(), Some("North Lincoln Avenue"));
    assert_eq!(record.field("addr:street:name"), Some("Lincoln"));
    assert_eq!(record.field("addr:street:prefix"), Some("North"));
    assert_eq!(record.field("addr:street:type"), Some("Avenue"));
    assert_eq!(record.field("amenity"), Some("pharmacy"));
    assert_eq!(record.field("tiger:county"), Some("Cook, IL"));
    assert_eq!(record.field("name_1"), Some("Walgreens"));
}

#[test]
fn problem_keys_are_discarded() {
    let node = RawElement::new("node")
        .with_tag("name.en", "Main")
        .with_tag("addr:street name", "Elm")
        .with_tag("fixme?", "yes")
        .with_tag("note", "kept");
    let record = ElementShaper::new(street_mapping())
        .shape(&node)
        .expect("node record");

    assert_eq!(record.fields.len(), 1);
    assert_eq!(record.field("note"), Some("kept"));
    assert!(record.address.is_empty());
}

#[test]
fn street_is_normalized_even_without_mapping_entry() {
    let node = RawElement::new("node").with_tag("addr:street", "  east   fourth  street ");
    let record = ElementShaper::new(street_mapping())
        .shape(&node)
        .expect("node record");
    assert_eq!(record.street(), Some("East Fourth Street"));
}

#[test]
fn tags_override_attributes_with_the_same_name() {
    let node = RawElement::new("node")
        .with_attr("visible", "true")
        .with_tag("visible", "false");
    let record = ElementShaper::new(SuffixMapping::new())
        .shape(&node)
        .expect("node record");
    assert_eq!(record.field("visible"), Some("false"));
}

#[test]
fn node_refs_keep_document_order() {
    let way = RawElement::new("way")
        .with_node_ref("305896090")
        .with_tag("highway", "primary")
        .with_node_ref("1719825889")
        .with_node_ref("305896090");
    let record = ElementShaper::new(SuffixMapping::new())
        .shape(&way)
        .expect("way record");
    assert_eq!(
        record.node_refs,
        Some(vec![
            "305896090".to_string(),
            "1719825889".to_string(),
            "305896090".to_string(),
        ])
    );
}
