use core::fmt;

use serde::Serialize;

/// An index into the site list of a [`NetworkModel`](crate::NetworkModel).
pub type SiteId = usize;

/// An undirected candidate link between two distinct sites.
///
/// The endpoints are normalised so that `a < b`, which makes the derived ordering the
/// lexicographic `(i, j)` order used to break cost ties everywhere in the crate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Edge {
    a: SiteId,
    b: SiteId,
}

impl Edge {
    /// Returns `None` for a self-loop.
    pub fn new(i: SiteId, j: SiteId) -> Option<Self> {
        match i.cmp(&j) {
            core::cmp::Ordering::Less => Some(Self { a: i, b: j }),
            core::cmp::Ordering::Greater => Some(Self { a: j, b: i }),
            core::cmp::Ordering::Equal => None,
        }
    }

    pub fn a(&self) -> SiteId {
        self.a
    }

    pub fn b(&self) -> SiteId {
        self.b
    }

    pub fn endpoints(&self) -> (SiteId, SiteId) {
        (self.a, self.b)
    }

    pub fn touches(&self, site: SiteId) -> bool {
        self.a == site || self.b == site
    }

    /// The (tail, head) of a traversal of this edge in the given direction.
    pub fn oriented(&self, direction: Direction) -> (SiteId, SiteId) {
        match direction {
            Direction::Forward => (self.a, self.b),
            Direction::Backward => (self.b, self.a),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}

/// Direction of travel across an [`Edge`]: `Forward` goes from `a` to `b`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub const BOTH: [Direction; 2] = [Direction::Forward, Direction::Backward];
}

/// An ordered demand pair with strictly positive traffic.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Commodity {
    pub source: SiteId,
    pub target: SiteId,
    pub demand: f64,
}

impl Commodity {
    pub fn key(&self) -> (SiteId, SiteId) {
        (self.source, self.target)
    }
}

/// Key of a single flow variable: one commodity crossing one edge in one direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlowKey {
    pub commodity: (SiteId, SiteId),
    pub edge: Edge,
    pub direction: Direction,
}
