use std::io::{self, IsTerminal};

use anyhow::Result;
use osm_audit::{AuditConfig, KeyTypeCounts, TagCounts, UserSet};
use osm_cli::pipeline::{
    AuditReport, ShapeSummary, StreamOptions, audit_file, count_key_types, count_tags,
    find_users, shape_with_mapping,
};
use osm_ingest::OsmReader;

use crate::cli::{AuditArgs, InputArgs, ShapeArgs};

pub fn run_audit(args: &AuditArgs) -> Result<AuditReport> {
    let mut config = AuditConfig::default();
    if !args.expected.is_empty() {
        config = config.with_expected_suffixes(args.expected.iter().cloned());
    }
    if let Some(limit) = args.sample_limit {
        config = config.with_sample_limit(limit);
    }
    let suggest_mapping = if args.suggest {
        args.mapping.as_deref()
    } else {
        None
    };
    audit_file(
        &args.input.input,
        config,
        suggest_mapping,
        &stream_options(&args.input),
    )
}

pub fn run_shape(args: &ShapeArgs) -> Result<ShapeSummary> {
    shape_with_mapping(
        &args.input.input,
        &args.mapping,
        args.output.as_deref(),
        args.pretty,
        &stream_options(&args.input),
    )
}

pub fn run_tags(args: &InputArgs) -> Result<TagCounts> {
    let mut reader = OsmReader::from_path(&args.input)?;
    count_tags(&mut reader, &stream_options(args))
}

pub fn run_keys(args: &InputArgs) -> Result<KeyTypeCounts> {
    let mut reader = OsmReader::from_path(&args.input)?;
    count_key_types(&mut reader, &stream_options(args))
}

pub fn run_users(args: &InputArgs) -> Result<UserSet> {
    let mut reader = OsmReader::from_path(&args.input)?;
    find_users(&mut reader, &stream_options(args))
}

fn stream_options(args: &InputArgs) -> StreamOptions {
    StreamOptions {
        progress_step: args.progress_every,
        spinner: !args.no_progress && io::stderr().is_terminal(),
    }
}
