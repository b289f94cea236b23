//! Plain-text rendering of analysis reports.

use std::fmt::Write;

use gr_results::AnalysisReport;

fn id_list(ids: &[String]) -> String {
    if ids.is_empty() {
        "-".to_string()
    } else {
        ids.join(", ")
    }
}

/// Human-readable summary: selected, surviving and failed edges,
/// components, and blackout zones.
pub fn render_summary(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Source: {}", report.source);
    let _ = writeln!(
        out,
        "Wind speed: {} | method: {} | k: {}",
        report.wind_speed, report.method, report.k
    );
    let _ = writeln!(
        out,
        "Selected ({}): {}",
        report.selected.len(),
        id_list(&report.selected)
    );
    let _ = writeln!(
        out,
        "Surviving ({}): {}",
        report.surviving.len(),
        id_list(&report.surviving)
    );
    let _ = writeln!(
        out,
        "Failed ({}): {}",
        report.failed.len(),
        id_list(&report.failed)
    );
    let _ = writeln!(out, "Components ({}):", report.components.len());
    for (i, component) in report.components.iter().enumerate() {
        let _ = writeln!(out, "  {}: {}", i + 1, component.join(", "));
    }
    if report.generators.is_empty() {
        let _ = writeln!(out, "Blackout zones: n/a (no generators)");
    } else {
        let _ = writeln!(
            out,
            "Blackout zones: {} ({} nodes)",
            report.blackout_zones.len(),
            report.blacked_out_node_count()
        );
        for zone in &report.blackout_zones {
            let _ = writeln!(out, "  {}", zone.join(", "));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnalysisOptions, load_sample, run_analysis};
    use gr_sim::SelectionMethod;

    #[test]
    fn summary_lists_everything() {
        let loaded = load_sample("ring-5").unwrap();
        let options = AnalysisOptions {
            wind_speed: 5.5,
            method: SelectionMethod::Mst,
            k: 2,
            generators: vec![],
        };
        let report = run_analysis(&loaded, &options, "sample:ring-5").unwrap();
        let text = render_summary(&report);

        assert!(text.contains("Selected (2): e2, e5"));
        assert!(text.contains("Failed (4): e1, e3, e4, e6"));
        assert!(text.contains("Components (3):"));
        assert!(text.contains("Blackout zones: 2 (3 nodes)"));
        assert!(text.contains("  B, C"));
    }

    #[test]
    fn summary_without_generators() {
        let mut loaded = load_sample("toy-4").unwrap();
        loaded.generators.clear();
        let report = run_analysis(&loaded, &AnalysisOptions::default(), "toy").unwrap();
        assert!(render_summary(&report).contains("n/a (no generators)"));
    }
}
