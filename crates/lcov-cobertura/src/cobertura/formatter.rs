//! Cobertura XML Coverage Report Formatter
//!
//! Projects a [`CoverageModel`] into a Cobertura document for CI servers.
//!
//! ## Cobertura XML Format
//!
//! ```xml
//! <?xml version="1.0" ?>
//! <!DOCTYPE coverage
//!   SYSTEM 'http://cobertura.sourceforge.net/xml/coverage-04.dtd'>
//! <coverage branch-rate="0.5" branches-covered="1" branches-valid="2" complexity="0" line-rate="0.5" lines-covered="1" lines-valid="2" timestamp="1670106073" version="2.0.3">
//!   <sources>
//!     <source>.</source>
//!   </sources>
//!   <packages>
//!     <package line-rate="0.5" branch-rate="0.5" name="foo" complexity="0">
//!       <classes>
//!         <class branch-rate="0.5" line-rate="0.5" complexity="0" filename="foo/file.ext" name="foo.file.ext">
//!           <methods/>
//!           <lines>
//!             <line branch="true" hits="1" number="1" condition-coverage="50% (1/2)"/>
//!             <line branch="false" hits="0" number="2"/>
//!           </lines>
//!         </class>
//!       </classes>
//!     </package>
//!   </packages>
//! </coverage>
//! ```
//!
//! Attribute order is fixed; consumers of this format compare it textually.

use std::path::Path;

use super::xml::XmlWriter;
use crate::error::ConvertResult;
use crate::model::{Class, CoverageModel, LineRecord, MethodRecord, Package};
use crate::options::{ReportOptions, DEFAULT_BASE_DIR};
use crate::rate::is_positive_count;

/// XML declaration and DTD reference preceding the `<coverage>` root
pub const PROLOG: &str = "<?xml version=\"1.0\" ?>\n<!DOCTYPE coverage\n  SYSTEM 'http://cobertura.sourceforge.net/xml/coverage-04.dtd'>\n";

/// Cobertura format version written on the root element
pub const COBERTURA_VERSION: &str = "2.0.3";

const COMPLEXITY: &str = "0";

/// Cobertura XML format report generator
#[derive(Debug)]
pub struct CoberturaFormatter<'a> {
    model: &'a CoverageModel,
    source: String,
}

impl<'a> CoberturaFormatter<'a> {
    /// Create a new Cobertura formatter
    #[must_use]
    pub fn new(model: &'a CoverageModel) -> Self {
        Self {
            model,
            source: DEFAULT_BASE_DIR.to_string(),
        }
    }

    /// Create a formatter from report options
    #[must_use]
    pub fn with_options(model: &'a CoverageModel, options: &ReportOptions) -> Self {
        Self::new(model).with_source(options.source.clone())
    }

    /// Set the `<source>` text
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Generate Cobertura XML report as a string
    #[must_use]
    pub fn generate(&self) -> String {
        let summary = &self.model.summary;
        let mut xml = XmlWriter::with_prolog(PROLOG);

        xml.open(
            "coverage",
            &[
                ("branch-rate", summary.branch_rate().as_str()),
                ("branches-covered", summary.branches_covered.to_string().as_str()),
                ("branches-valid", summary.branches_total.to_string().as_str()),
                ("complexity", COMPLEXITY),
                ("line-rate", summary.line_rate().as_str()),
                ("lines-covered", summary.lines_covered.to_string().as_str()),
                ("lines-valid", summary.lines_total.to_string().as_str()),
                ("timestamp", self.model.timestamp.as_str()),
                ("version", COBERTURA_VERSION),
            ],
        );

        xml.open("sources", &[]);
        xml.text("source", &[], &self.source);
        xml.close("sources");

        if self.model.packages.is_empty() {
            xml.empty("packages", &[]);
        } else {
            xml.open("packages", &[]);
            for (name, package) in &self.model.packages {
                Self::write_package(&mut xml, name, package);
            }
            xml.close("packages");
        }

        xml.close("coverage");
        xml.finish()
    }

    /// Save the Cobertura report to a file
    ///
    /// # Errors
    ///
    /// Returns error if file write fails
    pub fn save(&self, path: &Path) -> ConvertResult<()> {
        std::fs::write(path, self.generate())?;
        Ok(())
    }

    fn write_package(xml: &mut XmlWriter, name: &str, package: &Package) {
        xml.open(
            "package",
            &[
                ("line-rate", package.line_rate.as_str()),
                ("branch-rate", package.branch_rate.as_str()),
                ("name", name),
                ("complexity", COMPLEXITY),
            ],
        );

        if package.classes.is_empty() {
            xml.empty("classes", &[]);
        } else {
            xml.open("classes", &[]);
            for (filename, class) in &package.classes {
                Self::write_class(xml, filename, class);
            }
            xml.close("classes");
        }

        xml.close("package");
    }

    fn write_class(xml: &mut XmlWriter, filename: &str, class: &Class) {
        xml.open(
            "class",
            &[
                ("branch-rate", class.totals.branch_rate().as_str()),
                ("line-rate", class.totals.line_rate().as_str()),
                ("complexity", COMPLEXITY),
                ("filename", filename),
                ("name", class.name.as_str()),
            ],
        );

        if class.methods.is_empty() {
            xml.empty("methods", &[]);
        } else {
            xml.open("methods", &[]);
            for (name, method) in &class.methods {
                Self::write_method(xml, name, method);
            }
            xml.close("methods");
        }

        if class.lines.is_empty() {
            xml.empty("lines", &[]);
        } else {
            xml.open("lines", &[]);
            for (number, line) in &class.lines {
                Self::write_line(xml, *number, line);
            }
            xml.close("lines");
        }

        xml.close("class");
    }

    fn write_method(xml: &mut XmlWriter, name: &str, method: &MethodRecord) {
        let rate = if is_positive_count(&method.hits) {
            "1.0"
        } else {
            "0.0"
        };

        xml.open(
            "method",
            &[
                ("name", name),
                ("signature", ""),
                ("line-rate", rate),
                ("branch-rate", rate),
            ],
        );
        xml.open("lines", &[]);
        xml.empty(
            "line",
            &[
                ("hits", method.hits.as_str()),
                ("number", method.line()),
                ("branch", "false"),
            ],
        );
        xml.close("lines");
        xml.close("method");
    }

    fn write_line(xml: &mut XmlWriter, number: u32, line: &LineRecord) {
        let hits = line.hits.to_string();
        let number = number.to_string();
        let condition_coverage = line.condition_coverage();

        let mut attrs = vec![
            ("branch", if line.is_branch { "true" } else { "false" }),
            ("hits", hits.as_str()),
            ("number", number.as_str()),
        ];
        if let Some(condition) = condition_coverage.as_deref() {
            attrs.push(("condition-coverage", condition));
        }
        xml.empty("line", &attrs);
    }
}

/// Render a model as a Cobertura XML document.
#[must_use]
pub fn generate_cobertura_xml(model: &CoverageModel, options: &ReportOptions) -> String {
    CoberturaFormatter::with_options(model, options).generate()
}
