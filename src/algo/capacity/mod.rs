mod multicommodity;

pub use multicommodity::MultiCommodityLp;

use core::fmt::Debug;
use std::collections::BTreeMap;

use crate::edge::{Commodity, Direction, Edge, FlowKey, SiteId};
use crate::model::NetworkModel;

/// Capacity planning over a fixed edge set.
pub trait CapacityPlanner {
    type Error: Debug;

    /// Provision capacity on `edges` so that every commodity of `model` can be routed, at
    /// minimum total `cost * capacity`. Infeasibility is a regular outcome, not an error.
    ///
    /// Implementations keep no state between calls and never touch edges outside `edges`.
    fn plan(&mut self, model: &NetworkModel, edges: &[Edge]) -> Result<SolveResult, Self::Error>;
}

impl<T: CapacityPlanner + ?Sized> CapacityPlanner for &mut T {
    type Error = T::Error;

    fn plan(&mut self, model: &NetworkModel, edges: &[Edge]) -> Result<SolveResult, Self::Error> {
        (**self).plan(model, edges)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SolveResult {
    Optimal(CapacityPlan),
    Infeasible,
}

/// The optimal capacity assignment and routing for one edge set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CapacityPlan {
    capacities: BTreeMap<Edge, f64>,
    flows: BTreeMap<FlowKey, f64>,
    cost: f64,
}

impl CapacityPlan {
    /// `flows` is sparse: absent keys carry no flow.
    pub fn new(capacities: BTreeMap<Edge, f64>, flows: BTreeMap<FlowKey, f64>, cost: f64) -> Self {
        Self {
            capacities,
            flows,
            cost,
        }
    }

    /// Objective value: the sum of `cost * capacity` over all planned edges.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn capacities(&self) -> &BTreeMap<Edge, f64> {
        &self.capacities
    }

    pub fn flows(&self) -> &BTreeMap<FlowKey, f64> {
        &self.flows
    }

    pub fn capacity(&self, edge: &Edge) -> f64 {
        self.capacities.get(edge).copied().unwrap_or_default()
    }

    pub fn flow(&self, key: &FlowKey) -> f64 {
        self.flows.get(key).copied().unwrap_or_default()
    }

    /// Aggregate flow of all commodities across `edge`, both directions.
    pub fn edge_flow(&self, edge: &Edge) -> f64 {
        self.flows
            .iter()
            .filter(|(key, _)| &key.edge == edge)
            .map(|(_, flow)| flow)
            .sum()
    }

    /// Outflow minus inflow of `commodity` at `site`.
    pub fn net_outflow(&self, commodity: &Commodity, site: SiteId) -> f64 {
        self.flows
            .iter()
            .filter(|(key, _)| key.commodity == commodity.key() && key.edge.touches(site))
            .map(|(key, flow)| {
                let (tail, _) = key.edge.oriented(key.direction);
                if tail == site {
                    *flow
                } else {
                    -*flow
                }
            })
            .sum()
    }

    /// Flow of `commodity` on `edge` in `direction`.
    pub fn commodity_flow(&self, commodity: &Commodity, edge: Edge, direction: Direction) -> f64 {
        self.flow(&FlowKey {
            commodity: commodity.key(),
            edge,
            direction,
        })
    }
}
