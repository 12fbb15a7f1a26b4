//! Property tests for the counting invariants of the tracefile parser.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use lcov_cobertura::{generate_cobertura_xml, parse_lcov, ParseOptions, ReportOptions, Totals};
use proptest::prelude::*;
use std::fmt::Write;

fn hit_token() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..5).prop_map(|n| n.to_string()),
        Just("=====".to_string()),
        Just("#####".to_string()),
        Just("-".to_string()),
    ]
}

fn file_records() -> impl Strategy<Value = (Vec<(u32, String)>, Vec<(u32, String)>)> {
    (
        prop::collection::vec((1u32..60, hit_token()), 0..40),
        prop::collection::vec((1u32..60, hit_token()), 0..20),
    )
}

fn tracefile(path: &str, lines: &[(u32, String)], branches: &[(u32, String)]) -> String {
    let mut text = format!("TN:\nSF:{path}\n");
    for (line, hits) in lines {
        let _ = writeln!(text, "DA:{line},{hits}");
    }
    for (index, (line, hits)) in branches.iter().enumerate() {
        let _ = writeln!(text, "BRDA:{line},0,{index},{hits}");
    }
    text.push_str("end_of_record\n");
    text
}

fn options() -> ParseOptions {
    ParseOptions::default().with_timestamp("0")
}

proptest! {
    #[test]
    fn prop_line_total_counts_every_da_record((lines, branches) in file_records()) {
        let model = parse_lcov(&tracefile("pkg/file.c", &lines, &branches), &options());
        let class = model.class("pkg", "pkg/file.c").unwrap();

        prop_assert_eq!(class.totals.lines_total, lines.len() as u64);
        prop_assert!(class.totals.lines_covered <= class.totals.lines_total);

        let covered = lines
            .iter()
            .filter(|(_, hits)| hits.parse::<u64>().is_ok_and(|n| n > 0))
            .count() as u64;
        prop_assert_eq!(class.totals.lines_covered, covered);
    }

    #[test]
    fn prop_branch_total_counts_every_brda_record((lines, branches) in file_records()) {
        let model = parse_lcov(&tracefile("pkg/file.c", &lines, &branches), &options());
        let class = model.class("pkg", "pkg/file.c").unwrap();

        prop_assert_eq!(class.totals.branches_total, branches.len() as u64);
        prop_assert!(class.totals.branches_covered <= class.totals.branches_total);

        let per_line: u64 = class.lines.values().map(|line| line.branches_total).sum();
        prop_assert_eq!(per_line, branches.len() as u64);
    }

    #[test]
    fn prop_trailing_brf_overrides(
        (lines, branches) in file_records(),
        found in 0u64..1000,
        hit in 0u64..1000,
    ) {
        let mut text = tracefile("pkg/file.c", &lines, &branches);
        text = text.replace("end_of_record\n", &format!("BRF:{found}\nBRH:{hit}\nend_of_record\n"));
        let model = parse_lcov(&text, &options());
        let class = model.class("pkg", "pkg/file.c").unwrap();

        prop_assert_eq!(class.totals.branches_total, found);
        prop_assert_eq!(class.totals.branches_covered, hit);
    }

    #[test]
    fn prop_summary_is_sum_of_packages(
        files in prop::collection::vec(("[a-c]", "[x-z]", file_records()), 1..6)
    ) {
        let mut text = String::new();
        for (dir, name, (lines, branches)) in &files {
            text.push_str(&tracefile(&format!("{dir}/{name}.c"), lines, branches));
        }
        let model = parse_lcov(&text, &options());

        let mut sum = Totals::default();
        for package in model.packages.values() {
            sum.accumulate(&package.totals);
        }
        prop_assert_eq!(sum, model.summary);
    }

    #[test]
    fn prop_lines_render_in_ascending_order((lines, branches) in file_records()) {
        let model = parse_lcov(&tracefile("pkg/file.c", &lines, &branches), &options());
        let xml = generate_cobertura_xml(&model, &ReportOptions::default());

        let numbers: Vec<u32> = xml
            .lines()
            .filter(|line| line.trim_start().starts_with("<line branch="))
            .filter_map(|line| {
                let start = line.find("number=\"")? + "number=\"".len();
                let end = start + line[start..].find('"')?;
                line[start..end].parse().ok()
            })
            .collect();

        prop_assert!(numbers.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert_eq!(numbers.len(), model.class("pkg", "pkg/file.c").unwrap().lines.len());
    }
}
