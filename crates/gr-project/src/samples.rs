//! Built-in sample grids constructed in-process.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use gr_core::NodeId;
use gr_graph::{Graph, GraphResult, NewEdge};

use crate::ProjectError;
use crate::source::LoadedGraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleGrid {
    /// Four nodes, five lines, generator at A.
    Toy4,
    /// Five-node ring with a B-D chord, generators at A and E.
    Ring5,
}

impl SampleGrid {
    pub const ALL: [SampleGrid; 2] = [SampleGrid::Toy4, SampleGrid::Ring5];

    pub fn name(self) -> &'static str {
        match self {
            SampleGrid::Toy4 => "toy-4",
            SampleGrid::Ring5 => "ring-5",
        }
    }

    /// `(u, v, strength, id)` for every line, in insertion order.
    fn lines(self) -> &'static [(&'static str, &'static str, f64, &'static str)] {
        match self {
            SampleGrid::Toy4 => &[
                ("A", "B", 5.0, "e1"),
                ("B", "C", 8.0, "e2"),
                ("C", "D", 3.0, "e3"),
                ("A", "D", 10.0, "e4"),
                ("B", "D", 6.0, "e5"),
            ],
            SampleGrid::Ring5 => &[
                ("A", "B", 4.0, "e1"),
                ("B", "C", 7.0, "e2"),
                ("C", "D", 2.0, "e3"),
                ("D", "E", 5.0, "e4"),
                ("E", "A", 6.0, "e5"),
                ("B", "D", 3.0, "e6"),
            ],
        }
    }

    fn generators(self) -> &'static [&'static str] {
        match self {
            SampleGrid::Toy4 => &["A"],
            SampleGrid::Ring5 => &["A", "E"],
        }
    }

    pub fn build(self) -> GraphResult<Graph> {
        let mut graph = Graph::new();
        for &(u, v, strength, id) in self.lines() {
            graph.add_edge(NewEdge::new(u, v, strength).with_id(id))?;
        }
        Ok(graph)
    }

    pub fn load(self) -> GraphResult<LoadedGraph> {
        Ok(LoadedGraph {
            name: Some(self.name().to_string()),
            graph: self.build()?,
            generators: self
                .generators()
                .iter()
                .copied()
                .map(NodeId::from)
                .collect::<BTreeSet<_>>(),
        })
    }
}

impl fmt::Display for SampleGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SampleGrid {
    type Err = ProjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ProjectError::UnknownSample {
                name: s.to_string(),
                available: Self::ALL.map(SampleGrid::name).join(", "),
            })
    }
}
