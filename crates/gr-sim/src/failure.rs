//! Wind failure simulation.

use std::borrow::Borrow;

use gr_core::Real;
use gr_graph::Edge;

/// Edges split by whether they withstand a wind speed.
///
/// Both lists keep the input order and together hold every input edge exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct FailurePartition<E> {
    pub surviving: Vec<E>,
    pub failed: Vec<E>,
}

impl<E: Borrow<Edge>> FailurePartition<E> {
    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    pub fn surviving_ids(&self) -> impl Iterator<Item = &gr_core::EdgeId> {
        self.surviving.iter().map(|e| &e.borrow().id)
    }

    pub fn failed_ids(&self) -> impl Iterator<Item = &gr_core::EdgeId> {
        self.failed.iter().map(|e| &e.borrow().id)
    }
}

/// Partition `edges` at `wind_speed`: an edge fails iff `strength < wind_speed`.
///
/// Works over borrowed graph edges (`&Edge`), owned edges, or the mixed
/// `Cow<Edge>` lists produced by reinforcement.
pub fn simulate_wind_failures<E, I>(edges: I, wind_speed: Real) -> FailurePartition<E>
where
    I: IntoIterator<Item = E>,
    E: Borrow<Edge>,
{
    let (failed, surviving): (Vec<E>, Vec<E>) = edges
        .into_iter()
        .partition(|e| e.borrow().fails_at(wind_speed));
    FailurePartition { surviving, failed }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(id: &str, strength: Real) -> Edge {
        Edge {
            id: id.into(),
            u: "A".into(),
            v: "B".into(),
            strength,
            capacity: None,
            reinforce_cost: None,
        }
    }

    #[test]
    fn strict_threshold() {
        let edges = vec![edge("lo", 6.9), edge("eq", 7.0), edge("hi", 7.1)];
        let part = simulate_wind_failures(&edges, 7.0);
        let failed: Vec<&str> = part.failed_ids().map(|id| id.as_str()).collect();
        let surviving: Vec<&str> = part.surviving_ids().map(|id| id.as_str()).collect();
        assert_eq!(failed, vec!["lo"]);
        assert_eq!(surviving, vec!["eq", "hi"]);
    }

    #[test]
    fn preserves_order_within_partitions() {
        let edges = vec![edge("a", 1.0), edge("b", 9.0), edge("c", 2.0), edge("d", 8.0)];
        let part = simulate_wind_failures(edges, 5.0);
        let failed: Vec<&str> = part.failed.iter().map(|e| e.id.as_str()).collect();
        let surviving: Vec<&str> = part.surviving.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(failed, vec!["a", "c"]);
        assert_eq!(surviving, vec!["b", "d"]);
        assert_eq!(part.failed_count(), 2);
    }

    #[test]
    fn empty_input() {
        let part = simulate_wind_failures(Vec::<Edge>::new(), 3.0);
        assert!(part.surviving.is_empty());
        assert!(part.failed.is_empty());
    }
}
