//! Single-pass tracefile parser
//!
//! The parser is a two-state machine: either no file is open, or an `SF`
//! record opened one and its line, method and counter accumulators are being
//! filled. `end_of_record` flushes the accumulators into the class, its
//! package and the summary, then closes the file. Records that arrive while
//! no file is open are dropped.

use indexmap::IndexMap;
use std::collections::BTreeMap;
use tracing::{debug, trace};

use super::paths::{display_name, join_normalized, package_name};
use super::record::Record;
use crate::model::{Class, CoverageModel, LineRecord, MethodRecord, Totals};
use crate::options::ParseOptions;

/// Accumulators for the file between `SF` and `end_of_record`
#[derive(Debug)]
struct OpenFile {
    package: String,
    key: String,
    lines: BTreeMap<u32, LineRecord>,
    methods: IndexMap<String, MethodRecord>,
    totals: Totals,
}

impl OpenFile {
    fn new(package: String, key: String) -> Self {
        Self {
            package,
            key,
            lines: BTreeMap::new(),
            methods: IndexMap::new(),
            totals: Totals::default(),
        }
    }

    fn line_data(&mut self, line: Option<u32>, hits: Option<i64>) {
        self.totals.lines_total = self.totals.lines_total.saturating_add(1);
        let hits = hits.and_then(|n| u64::try_from(n).ok()).filter(|&n| n > 0);

        let record = line.map(|number| self.lines.entry(number).or_default());
        if let Some(hits) = hits {
            if let Some(record) = record {
                record.hits = hits;
            }
            self.totals.lines_covered = self.totals.lines_covered.saturating_add(1);
        }
    }

    fn branch_data(&mut self, line: Option<u32>, taken: bool) {
        self.totals.branches_total = self.totals.branches_total.saturating_add(1);
        if taken {
            self.totals.branches_covered = self.totals.branches_covered.saturating_add(1);
        }

        if let Some(number) = line {
            let record = self.lines.entry(number).or_default();
            record.is_branch = true;
            record.branches_total = record.branches_total.saturating_add(1);
            if taken {
                record.branches_covered = record.branches_covered.saturating_add(1);
            }
        }
    }

    fn function(&mut self, line: &str, name: &str) {
        let method = self.methods.entry(name.to_string()).or_default();
        if method.declared_at.is_none() {
            method.declared_at = Some(line.to_string());
        }
    }

    fn function_data(&mut self, hits: &str, name: &str) {
        self.methods.entry(name.to_string()).or_default().hits = hits.to_string();
    }
}

/// Builds a [`CoverageModel`] from tracefile text
#[derive(Debug)]
pub struct TracefileParser<'o> {
    options: &'o ParseOptions,
    model: CoverageModel,
    open: Option<OpenFile>,
    files: usize,
}

impl<'o> TracefileParser<'o> {
    /// Create a parser with an empty model
    #[must_use]
    pub fn new(options: &'o ParseOptions) -> Self {
        Self {
            options,
            model: CoverageModel::default(),
            open: None,
            files: 0,
        }
    }

    /// Feed one tracefile line
    pub fn feed(&mut self, raw: &str) {
        let record = Record::parse(raw);
        match record {
            Record::SourceFile(path) => self.open_file(path),
            Record::EndOfRecord => self.close_file(),
            Record::Other => {}
            _ => match self.open.as_mut() {
                Some(file) => Self::apply(file, record),
                None => trace!(line = raw.trim(), "record outside of a file ignored"),
            },
        }
    }

    fn apply(file: &mut OpenFile, record: Record<'_>) {
        match record {
            Record::LineData { line, hits } => file.line_data(line, hits),
            Record::BranchData { line, taken } => file.branch_data(line, taken),
            Record::BranchesFound(Some(n)) => file.totals.branches_total = n,
            Record::BranchesHit(Some(n)) => file.totals.branches_covered = n,
            Record::Function { line, name } => file.function(line, name),
            Record::FunctionData { hits, name } => file.function_data(hits, name),
            Record::BranchesFound(None) | Record::BranchesHit(None) => {
                trace!(file = %file.key, "unreadable branch summary ignored");
            }
            Record::SourceFile(_) | Record::EndOfRecord | Record::Other => {}
        }
    }

    fn open_file(&mut self, path: &str) {
        if let Some(previous) = self.open.take() {
            debug!(file = %previous.key, "file record never closed, counters dropped");
        }

        let key = join_normalized(self.options.base_dir(), path);
        let package = package_name(&key);
        let class = Class::new(display_name(&key));

        let _ = self
            .model
            .packages
            .entry(package.clone())
            .or_default()
            .classes
            .insert(key.clone(), class);

        self.open = Some(OpenFile::new(package, key));
    }

    fn close_file(&mut self) {
        let Some(file) = self.open.take() else {
            trace!("end_of_record without an open file ignored");
            return;
        };

        let Some(package) = self.model.packages.get_mut(&file.package) else {
            return;
        };
        package.totals.accumulate(&file.totals);
        if let Some(class) = package.classes.get_mut(&file.key) {
            class.lines = file.lines;
            class.methods = file.methods;
            class.totals = file.totals;
        }
        self.model.summary.accumulate(&file.totals);
        self.files += 1;
    }

    /// Apply exclusions, compute package rates and return the model
    #[must_use]
    pub fn finish(mut self) -> CoverageModel {
        if let Some(file) = self.open.take() {
            debug!(file = %file.key, "tracefile ended inside a file record");
        }

        let options = self.options;
        self.model.packages.retain(|name, _| {
            let excluded = options.is_excluded(name);
            if excluded {
                debug!(package = %name, "package excluded");
            }
            !excluded
        });

        for package in self.model.packages.values_mut() {
            package.compute_rates();
        }

        self.model.timestamp = options
            .timestamp()
            .map_or_else(|| chrono::Utc::now().timestamp().to_string(), String::from);

        debug!(
            files = self.files,
            packages = self.model.packages.len(),
            lines = self.model.summary.lines_total,
            branches = self.model.summary.branches_total,
            "tracefile parsed"
        );
        self.model
    }
}

/// Parse a whole tracefile.
#[must_use]
pub fn parse_lcov(text: &str, options: &ParseOptions) -> CoverageModel {
    let mut parser = TracefileParser::new(options);
    for line in text.split('\n') {
        parser.feed(line);
    }
    parser.finish()
}
