pub mod capacity;
pub mod tree;

/// Flow values at or below this are treated as zero when reading solver output.
pub const FLOW_EPSILON: f64 = 1e-9;

/// Absolute tolerance for re-checking solver output, scaled by the total demand.
pub fn tolerance(total_demand: f64) -> f64 {
    1e-6 * total_demand.max(1.0)
}
