use crate::GrError;

/// Floating point type used throughout system
pub type Real = f64;

/// Offset added to strength when deriving a reinforcement cost from it.
///
/// Derived cost is `1 / (strength + REINFORCE_COST_EPSILON)`: stronger edges are treated as
/// cheaper to upgrade, and a zero-strength edge still yields a finite cost.
pub const REINFORCE_COST_EPSILON: Real = 1e-6;

/// Margin above the wind speed given to a reinforced edge.
pub const REINFORCEMENT_MARGIN: Real = 1.0;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, GrError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(GrError::NonFinite { what, value: v })
    }
}
