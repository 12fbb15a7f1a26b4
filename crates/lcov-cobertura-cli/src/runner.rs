//! Conversion driver: read, parse, render, write

use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

use lcov_cobertura::{generate_cobertura_xml, parse_lcov, ParseOptions, ReportOptions};

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Convert tracefile text according to `config`.
pub fn convert(text: &str, config: &CliConfig) -> CliResult<String> {
    let options = ParseOptions::new(config.base_dir.as_str()).with_excludes(&config.excludes)?;
    let model = parse_lcov(text, &options);
    info!(
        packages = model.packages.len(),
        lines_valid = model.summary.lines_total,
        lines_covered = model.summary.lines_covered,
        "coverage parsed"
    );
    Ok(generate_cobertura_xml(
        &model,
        &ReportOptions::new(config.base_dir.as_str()),
    ))
}

/// Run one conversion from `config.input` to `config.output` or stdout.
pub fn run(config: &CliConfig) -> CliResult<()> {
    let text = fs::read_to_string(&config.input)
        .map_err(|source| CliError::read_input(&config.input, source))?;
    info!(input = %config.input.display(), bytes = text.len(), "tracefile read");

    let xml = convert(&text, config)?;

    match &config.output {
        Some(path) => write_report(path, &xml),
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{xml}")?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn write_report(path: &Path, xml: &str) -> CliResult<()> {
    fs::write(path, xml).map_err(|source| CliError::write_output(path, source))?;
    info!(output = %path.display(), "report written");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::Verbosity;
    use std::path::PathBuf;

    const LCOV: &str = "SF:foo/file.ext\nDA:1,1\nDA:2,0\nend_of_record\nSF:bar/file.ext\nDA:1,1\nend_of_record\n";

    fn config(input: PathBuf, output: Option<PathBuf>) -> CliConfig {
        CliConfig {
            input,
            base_dir: ".".to_string(),
            excludes: Vec::new(),
            output,
            verbosity: Verbosity::Quiet,
        }
    }

    #[test]
    fn test_convert_applies_excludes() {
        let mut config = config(PathBuf::from("unused"), None);
        config.excludes = vec!["^foo$".to_string()];
        let xml = convert(LCOV, &config).unwrap();
        assert!(!xml.contains(r#"name="foo""#));
        assert!(xml.contains(r#"name="bar""#));
        assert!(xml.contains(r#"lines-valid="3""#));
    }

    #[test]
    fn test_convert_rejects_bad_pattern() {
        let mut config = config(PathBuf::from("unused"), None);
        config.excludes = vec!["[".to_string()];
        assert!(matches!(convert(LCOV, &config), Err(CliError::Convert(_))));
    }

    #[test]
    fn test_run_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("lcov.info");
        let output = dir.path().join("coverage.xml");
        fs::write(&input, LCOV).unwrap();

        run(&config(input, Some(output.clone()))).unwrap();

        let xml = fs::read_to_string(&output).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" ?>"));
        assert!(xml.ends_with("</coverage>"));
    }

    #[test]
    fn test_run_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&config(dir.path().join("absent.info"), None)).unwrap_err();
        assert!(matches!(err, CliError::ReadInput { .. }));
    }

    #[test]
    fn test_run_unwritable_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("lcov.info");
        fs::write(&input, LCOV).unwrap();
        let output = dir.path().join("missing-dir").join("coverage.xml");

        let err = run(&config(input, Some(output))).unwrap_err();
        assert!(matches!(err, CliError::WriteOutput { .. }));
    }
}
