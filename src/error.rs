use displaydoc::Display;

use crate::edge::Edge;

#[derive(Clone, Debug, Display, PartialEq)]
pub enum Error {
    /// Invalid {matrix} matrix: row {row} has {len} entries, expected {expected}
    NotSquare {
        matrix: &'static str,
        row: usize,
        len: usize,
        expected: usize,
    },
    /// Demand matrix has {demand} sites but cost matrix has {cost}
    DimensionMismatch { cost: usize, demand: usize },
    /// At least two sites are required, got {0}
    TooFewSites(usize),
    /// Cost matrix is not symmetric at ({0}, {1})
    Asymmetric(usize, usize),
    /// Invalid {matrix} matrix: non-zero diagonal entry at site {site}
    NonZeroDiagonal { matrix: &'static str, site: usize },
    /// Invalid {matrix} matrix: negative entry at ({row}, {col})
    NegativeEntry {
        matrix: &'static str,
        row: usize,
        col: usize,
    },
    /// Invalid {matrix} matrix: non-finite entry at ({row}, {col})
    NonFinite {
        matrix: &'static str,
        row: usize,
        col: usize,
    },
    /// Invalid {bound}: {value}, expected a finite non-negative value
    InvalidBound { bound: &'static str, value: f64 },
    /// Expected {expected} site names, got {got}
    SiteNameCount { expected: usize, got: usize },
    /// Every candidate edge is selected and the capacity plan is still infeasible
    Exhausted,
    /// No design found within {0} iterations
    IterationLimit(usize),
    /// Tree selection problem is infeasible
    TreeInfeasible,
    /// Tree selection round {0} did not produce any new component cut
    StalledCuts(usize),
    /// Selected edges do not connect all sites
    Disconnected,
    /// Flow of commodity {source} -> {target} is not conserved at site {site}
    FlowImbalance {
        source: usize,
        target: usize,
        site: usize,
    },
    /// Flow on edge {0} exceeds its provisioned capacity
    CapacityExceeded(Edge),
    /// Expected {expected} selected edges, got {got}
    WrongEdgeCount { expected: usize, got: usize },
    /// Solver specific error: {0}
    AlgoSpecific(String),
}

impl std::error::Error for Error {}
