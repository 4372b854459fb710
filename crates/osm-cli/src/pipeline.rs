//! Streaming passes over an OSM document.
//!
//! Every pass reads the document once, one top-level element at a time,
//! and feeds each element into an aggregate or into the record writer.
//! Elements are dropped as soon as they have been processed.

use std::ffi::OsString;
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use osm_audit::{AuditConfig, KeyTypeCounts, StreetAudit, StreetAuditor, TagCounts, UserSet};
use osm_ingest::{DEFAULT_PROGRESS_STEP, OsmReader, ProgressIter, load_suffix_mapping};
use osm_model::{ElementKind, RawElement, SuffixMapping};
use osm_normalization::update_name;
use osm_transform::{ElementShaper, RecordWriter};
use tracing::{debug, info, info_span};

/// Progress reporting for a single pass.
#[derive(Debug, Clone, Copy)]
pub struct StreamOptions {
    /// Log an `info` event every this many elements (0 disables).
    pub progress_step: u64,
    /// Draw a spinner on stderr while streaming.
    pub spinner: bool,
}

impl Default for StreamOptions {
    fn default() -> Self {
        Self {
            progress_step: DEFAULT_PROGRESS_STEP,
            spinner: false,
        }
    }
}

/// Outcome of a shaping pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShapeSummary {
    /// Top-level elements read.
    pub elements: u64,
    /// Node records written.
    pub nodes: usize,
    /// Way records written.
    pub ways: usize,
    /// Destination file, when writing to disk.
    pub output: Option<PathBuf>,
}

impl ShapeSummary {
    pub fn records(&self) -> usize {
        self.nodes + self.ways
    }

    /// Elements that produced no record (relations, bounds, ...).
    pub fn skipped(&self) -> u64 {
        self.elements.saturating_sub(self.records() as u64)
    }
}

/// Outcome of an audit pass.
#[derive(Debug)]
pub struct AuditReport {
    pub input: PathBuf,
    pub audit: StreetAudit,
    /// Sampled street names with their corrected form, when requested.
    pub suggestions: Option<Vec<Suggestion>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub original: String,
    pub updated: String,
}

/// `<INPUT>.json`, next to the input file.
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(".json");
    PathBuf::from(name)
}

/// Count every element name, the document root included.
pub fn count_tags<R: BufRead>(
    reader: &mut OsmReader<R>,
    options: &StreamOptions,
) -> Result<TagCounts> {
    let mut counts = TagCounts::new();
    for_each_element(reader, options, |element| {
        counts.observe(&element);
        Ok(())
    })?;
    if let Some(root) = reader.root() {
        counts.observe_name(&root.tag);
    }
    Ok(counts)
}

/// Classify every tag key in the document.
pub fn count_key_types<R: BufRead>(
    reader: &mut OsmReader<R>,
    options: &StreamOptions,
) -> Result<KeyTypeCounts> {
    let mut counts = KeyTypeCounts::new();
    for_each_element(reader, options, |element| {
        counts.observe(&element);
        Ok(())
    })?;
    Ok(counts)
}

/// Collect the distinct contributor ids in the document.
pub fn find_users<R: BufRead>(
    reader: &mut OsmReader<R>,
    options: &StreamOptions,
) -> Result<UserSet> {
    let mut users = UserSet::new();
    for_each_element(reader, options, |element| {
        users.observe(&element);
        Ok(())
    })?;
    if let Some(root) = reader.root() {
        users.observe(root);
    }
    Ok(users)
}

/// Audit the street names of every node and way.
pub fn audit_stream<R: BufRead>(
    reader: &mut OsmReader<R>,
    config: AuditConfig,
    options: &StreamOptions,
) -> Result<StreetAudit> {
    let mut auditor = StreetAuditor::new(config);
    for_each_element(reader, options, |element| {
        auditor.observe(&element);
        Ok(())
    })?;
    Ok(auditor.finish())
}

/// Audit the street names in `input`.
///
/// With `suggest_mapping`, the mapping is loaded before the document is
/// opened and every sampled name is paired with its corrected form.
pub fn audit_file(
    input: &Path,
    config: AuditConfig,
    suggest_mapping: Option<&Path>,
    options: &StreamOptions,
) -> Result<AuditReport> {
    let span = info_span!("audit", input = %input.display());
    let _guard = span.enter();

    let mapping = suggest_mapping
        .map(load_suffix_mapping)
        .transpose()
        .context("load suffix mapping")?;

    let mut reader = OsmReader::from_path(input)?;
    let audit = audit_stream(&mut reader, config, options)?;
    info!(
        unexpected_suffixes = audit.unexpected.len(),
        unnormalized = audit.unnormalized.len(),
        "audit complete"
    );

    let suggestions = mapping.map(|mapping| suggest(&audit, &mapping));
    Ok(AuditReport {
        input: input.to_path_buf(),
        audit,
        suggestions,
    })
}

/// Corrected form of every sampled name, grouped by suffix.
pub fn suggest(audit: &StreetAudit, mapping: &SuffixMapping) -> Vec<Suggestion> {
    audit
        .unexpected
        .values()
        .flatten()
        .map(|name| Suggestion {
            original: name.clone(),
            updated: update_name(name, mapping),
        })
        .collect()
}

/// Shape every node and way and write the records in document order.
pub fn shape_stream<R: BufRead, W: Write>(
    reader: &mut OsmReader<R>,
    shaper: &ElementShaper,
    writer: &mut RecordWriter<W>,
    options: &StreamOptions,
) -> Result<ShapeSummary> {
    let (mut nodes, mut ways) = (0, 0);
    let elements = for_each_element(reader, options, |element| {
        let Some(record) = shaper.shape(&element) else {
            return Ok(());
        };
        writer.write(&record).context("failed to write shaped record")?;
        match record.kind {
            ElementKind::Node => nodes += 1,
            ElementKind::Way => ways += 1,
        }
        Ok(())
    })?;
    Ok(ShapeSummary {
        elements,
        nodes,
        ways,
        output: None,
    })
}

/// Load the mapping at `mapping`, then shape `input` into `output`
/// (`<INPUT>.json` when absent).
///
/// A missing or invalid mapping fails before the output file is created.
pub fn shape_with_mapping(
    input: &Path,
    mapping: &Path,
    output: Option<&Path>,
    pretty: bool,
    options: &StreamOptions,
) -> Result<ShapeSummary> {
    let mapping = load_suffix_mapping(mapping).context("load suffix mapping")?;
    let shaper = ElementShaper::new(mapping);
    let output = output.map_or_else(|| default_output_path(input), Path::to_path_buf);
    shape_file(input, &output, &shaper, pretty, options)
}

/// Shape `input` into a JSON-lines file at `output`.
pub fn shape_file(
    input: &Path,
    output: &Path,
    shaper: &ElementShaper,
    pretty: bool,
    options: &StreamOptions,
) -> Result<ShapeSummary> {
    let span = info_span!("shape", input = %input.display(), output = %output.display());
    let _guard = span.enter();

    let mut reader = OsmReader::from_path(input)?;
    let file =
        File::create(output).with_context(|| format!("failed to create {}", output.display()))?;
    let mut writer = RecordWriter::new(BufWriter::new(file)).pretty(pretty);

    let mut summary = shape_stream(&mut reader, shaper, &mut writer, options)?;
    writer
        .finish()
        .with_context(|| format!("failed to flush {}", output.display()))?;
    summary.output = Some(output.to_path_buf());
    info!(
        records = summary.records(),
        skipped = summary.skipped(),
        "shaping complete"
    );
    Ok(summary)
}

/// Drive `reader` to the end, handing each element to `handle`.
///
/// Returns the number of top-level elements read. The first read error
/// aborts the pass.
fn for_each_element<R, F>(
    reader: &mut OsmReader<R>,
    options: &StreamOptions,
    mut handle: F,
) -> Result<u64>
where
    R: BufRead,
    F: FnMut(RawElement) -> Result<()>,
{
    let started = Instant::now();
    let spinner = options.spinner.then(new_spinner);
    let mut elements = ProgressIter::new(reader.by_ref(), options.progress_step);

    for element in elements.by_ref() {
        let element = match element {
            Ok(element) => element,
            Err(error) => {
                if let Some(spinner) = &spinner {
                    spinner.abandon();
                }
                return Err(error).context("failed to read OSM document");
            }
        };
        handle(element)?;
        if let Some(spinner) = &spinner {
            spinner.inc(1);
        }
    }

    let processed = elements.processed();
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    debug!(
        elements = processed,
        elapsed_ms = started.elapsed().as_millis(),
        "stream complete"
    );
    Ok(processed)
}

fn new_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner} {human_pos} elements ({per_sec})")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}
