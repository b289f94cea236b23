//! Analysis execution and report persistence.

use std::collections::BTreeSet;
use std::path::Path;

use gr_core::{EdgeId, NodeId};
use gr_graph::Graph;
use gr_project::LoadedGraph;
use gr_results::{AnalysisReport, EdgeSummary, ReportFile, save_report};
use tracing::info;

use crate::error::AppResult;
use crate::options::AnalysisOptions;
use crate::project_service::{describe, edge_summary};

/// Generators declared by the source plus any the caller adds.
pub fn merged_generators(loaded: &LoadedGraph, options: &AnalysisOptions) -> BTreeSet<NodeId> {
    loaded
        .generators
        .iter()
        .cloned()
        .chain(options.generators.iter().map(NodeId::from))
        .collect()
}

/// Run one analysis and package the result as a report.
pub fn run_analysis(
    loaded: &LoadedGraph,
    options: &AnalysisOptions,
    source_label: &str,
) -> AppResult<AnalysisReport> {
    let generators = merged_generators(loaded, options);
    let result = gr_sim::analyze(
        &loaded.graph,
        options.wind_speed,
        options.method,
        options.k,
        Some(&generators),
    )?;

    let to_strings = |ids: Vec<EdgeId>| -> Vec<String> {
        ids.into_iter().map(|id| id.to_string()).collect()
    };
    let groups = |groups: Vec<Vec<NodeId>>| -> Vec<Vec<String>> {
        groups
            .into_iter()
            .map(|g| g.into_iter().map(|n| n.to_string()).collect())
            .collect()
    };
    let description = describe(&loaded.graph);

    Ok(AnalysisReport {
        source: source_label.to_string(),
        name: loaded.name.clone(),
        wind_speed: options.wind_speed,
        method: options.method.to_string(),
        k: options.k,
        selected: to_strings(result.selected),
        surviving: to_strings(result.surviving),
        failed: to_strings(result.failed),
        components: groups(result.components),
        generators: generators.iter().map(|g| g.to_string()).collect(),
        blackout_zones: groups(result.blackout_zones),
        nodes: description.nodes,
        edges: description.edges,
    })
}

/// Run an analysis and write it, with its digest, to `out`.
pub fn run_and_save(
    loaded: &LoadedGraph,
    options: &AnalysisOptions,
    source_label: &str,
    out: &Path,
) -> AppResult<ReportFile> {
    let report = run_analysis(loaded, options, source_label)?;
    let file = ReportFile::new(report)?;
    save_report(out, &file)?;
    info!(path = %out.display(), digest = %file.digest, "report saved");
    Ok(file)
}

/// The full Kruskal reinforcement plan with each edge's cost.
pub fn reinforcement_plan(graph: &Graph) -> Vec<EdgeSummary> {
    gr_sim::kruskal_reinforcement_plan(graph)
        .into_iter()
        .map(edge_summary)
        .collect()
}
