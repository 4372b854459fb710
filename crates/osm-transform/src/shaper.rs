//! Element reshaping: one `node`/`way` element into one [`ShapedRecord`].

use osm_model::{
    ElementKind, ND_TAG, Position, RawElement, ShapedRecord, SuffixMapping, TAG_TAG,
    is_reserved_key,
};
use osm_normalization::{has_problem_chars, split_namespace, update_name};
use tracing::{debug, warn};

/// Attributes gathered under the nested `created` record.
pub const CREATED_ATTRIBUTES: &[&str] = &["version", "changeset", "timestamp", "user", "uid"];

/// Namespace of tags gathered under the nested `address` record.
pub const ADDRESS_NAMESPACE: &str = "addr";

const LAT: &str = "lat";
const LON: &str = "lon";

/// Shapes raw elements into records, correcting `address.street` with the
/// configured suffix mapping.
#[derive(Debug, Clone, Default)]
pub struct ElementShaper {
    mapping: SuffixMapping,
}

impl ElementShaper {
    pub fn new(mapping: SuffixMapping) -> Self {
        Self { mapping }
    }

    /// Shape one element. Elements other than `node` and `way` give `None`.
    ///
    /// Malformed pieces (unparsable coordinates, tags without `k`/`v`) are
    /// logged and left out; they never discard the whole record.
    pub fn shape(&self, element: &RawElement) -> Option<ShapedRecord> {
        let kind = element.kind()?;
        let id = element.attr("id").unwrap_or("?");
        let mut record = ShapedRecord::new(kind);

        let mut lat = None;
        let mut lon = None;
        for (name, value) in &element.attributes {
            match name.as_str() {
                LAT => lat = Some(value.as_str()),
                LON => lon = Some(value.as_str()),
                created if CREATED_ATTRIBUTES.contains(&created) => {
                    record.created.insert(name.clone(), value.clone());
                }
                reserved if is_reserved_key(reserved) => {
                    debug!(
                        id,
                        attribute = reserved,
                        "skipping attribute that shadows a record key"
                    );
                }
                _ => {
                    record.fields.insert(name.clone(), value.clone());
                }
            }
        }
        record.pos = parse_position(id, lat, lon);

        for tag in element.children_named(TAG_TAG) {
            apply_tag(&mut record, tag, id);
        }

        if kind == ElementKind::Way {
            for node_ref in element.children_named(ND_TAG).filter_map(|nd| nd.attr("ref")) {
                record.push_node_ref(node_ref);
            }
        }

        if let Some(street) = record.address.get_mut("street") {
            let updated = update_name(street, &self.mapping);
            if updated != *street {
                debug!(id, from = %street, to = %updated, "updated street name");
                *street = updated;
            }
        }

        Some(record)
    }
}

/// Both coordinates must be present and parse as finite floats.
fn parse_position(id: &str, lat: Option<&str>, lon: Option<&str>) -> Option<Position> {
    let (lat, lon) = (lat?, lon?);
    match (parse_coordinate(lat), parse_coordinate(lon)) {
        (Some(lat), Some(lon)) => Some(Position(lat, lon)),
        _ => {
            warn!(id, lat, lon, "invalid lat or lon, omitting pos");
            None
        }
    }
}

fn parse_coordinate(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

fn apply_tag(record: &mut ShapedRecord, tag: &RawElement, id: &str) {
    let (Some(key), Some(value)) = (tag.attr("k"), tag.attr("v")) else {
        warn!(id, attributes = ?tag.attributes, "tag without k and v, skipping");
        return;
    };
    if has_problem_chars(key) {
        debug!(id, key, "discarding tag key with problem characters");
        return;
    }
    if let Some((ADDRESS_NAMESPACE, field)) = split_namespace(key)
        && !field.is_empty()
        && !field.contains(':')
    {
        record.address.insert(field.to_string(), value.to_string());
        return;
    }
    if is_reserved_key(key) {
        debug!(id, key, "skipping tag that shadows a record key");
        return;
    }
    record.fields.insert(key.to_string(), value.to_string());
}
