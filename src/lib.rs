#![deny(
    warnings,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

pub mod algo;
pub mod baseline;
pub mod connectivity;
pub mod dataset;
pub mod edge;
pub mod error;
pub mod impls;
pub mod model;
pub mod topology;

pub use crate::algo::capacity::{CapacityPlan, CapacityPlanner, MultiCommodityLp, SolveResult};
pub use crate::algo::tree::{ComponentCut, TreeMilp, TreeSelector};
pub use crate::edge::{Commodity, Direction, Edge, FlowKey, SiteId};
pub use crate::error::Error;
pub use crate::impls::search::{SearchState, SearchStep, TopologySearch};
pub use crate::impls::subtour::SubtourElimination;
pub use crate::model::NetworkModel;
pub use crate::topology::{LinkReport, Topology, TreeSelection};

/// A network design procedure over a fixed [`NetworkModel`].
pub trait NetworkDesigner {
    type Design;

    /// Run the procedure to completion. Exactly one of a design or an error comes back;
    /// there are no partial results.
    fn run(&mut self, model: &NetworkModel) -> Result<Self::Design, Error>;

    /// Re-verify a design produced by [`run`](Self::run) against the model.
    fn check(&self, model: &NetworkModel, design: &Self::Design) -> Result<(), Error>;
}
