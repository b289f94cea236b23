//! Graph document validation logic.

use crate::schema::{EdgeDef, GraphDocument};
use std::collections::HashSet;
use tracing::warn;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Graph document has no nodes and no edges")]
    EmptyGraph,

    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Empty ID in {context}")]
    EmptyId { context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub fn validate_document(document: &GraphDocument) -> Result<(), ValidationError> {
    if document.edges.is_empty() && document.nodes.is_empty() {
        return Err(ValidationError::EmptyGraph);
    }

    for node in &document.nodes {
        if node.is_empty() {
            return Err(ValidationError::EmptyId {
                context: "nodes".to_string(),
            });
        }
    }

    let mut edge_ids = HashSet::new();
    for (index, edge) in document.edges.iter().enumerate() {
        if let Some(id) = &edge.id
            && !edge_ids.insert(id)
        {
            return Err(ValidationError::DuplicateId {
                id: id.clone(),
                context: "edges".to_string(),
            });
        }
        validate_edge(edge, index)?;
    }

    let mut known: HashSet<&str> = document.nodes.iter().map(String::as_str).collect();
    for edge in &document.edges {
        known.insert(&edge.u);
        known.insert(&edge.v);
    }
    let mut generator_ids = HashSet::new();
    for generator in &document.generators {
        if generator.is_empty() {
            return Err(ValidationError::EmptyId {
                context: "generators".to_string(),
            });
        }
        if !generator_ids.insert(generator) {
            return Err(ValidationError::DuplicateId {
                id: generator.clone(),
                context: "generators".to_string(),
            });
        }
        if !known.contains(generator.as_str()) {
            // Not fatal: a generator outside the grid simply powers nothing.
            warn!(generator = %generator, "generator is not a node of the graph");
        }
    }

    Ok(())
}

fn validate_edge(edge: &EdgeDef, index: usize) -> Result<(), ValidationError> {
    let label = edge
        .id
        .clone()
        .unwrap_or_else(|| format!("edges[{index}]"));

    if edge.id.as_deref() == Some("") {
        return Err(ValidationError::EmptyId {
            context: "edges".to_string(),
        });
    }
    if edge.u.is_empty() || edge.v.is_empty() {
        return Err(ValidationError::EmptyId {
            context: format!("{label} endpoints"),
        });
    }

    let numbers = [
        ("strength", Some(edge.strength)),
        ("reinforce_cost", edge.reinforce_cost),
        ("capacity", edge.capacity),
    ];
    for (field, value) in numbers {
        if let Some(value) = value
            && !value.is_finite()
        {
            return Err(ValidationError::InvalidValue {
                field: format!("{label}.{field}"),
                value: value.to_string(),
                reason: "must be finite".to_string(),
            });
        }
    }

    Ok(())
}
