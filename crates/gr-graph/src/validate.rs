//! Edge validation logic.

use gr_core::{EdgeId, NodeId, Real};

use crate::error::GraphError;

/// Validate a candidate edge before it is appended: non-empty ids, finite numbers.
pub(crate) fn validate_edge(
    id: &EdgeId,
    u: &NodeId,
    v: &NodeId,
    strength: Real,
    capacity: Option<Real>,
    reinforce_cost: Option<Real>,
) -> Result<(), GraphError> {
    if id.as_str().is_empty() {
        return Err(GraphError::EmptyId { what: "edge id" });
    }
    if u.as_str().is_empty() || v.as_str().is_empty() {
        return Err(GraphError::EmptyId {
            what: "edge endpoint",
        });
    }

    let fields = [
        ("strength", Some(strength)),
        ("capacity", capacity),
        ("reinforce_cost", reinforce_cost),
    ];
    for (field, value) in fields {
        if let Some(value) = value
            && !value.is_finite()
        {
            return Err(GraphError::NonFinite {
                edge: id.to_string(),
                field,
                value,
            });
        }
    }

    Ok(())
}
