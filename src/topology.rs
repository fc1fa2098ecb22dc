use serde::Serialize;

use crate::algo::capacity::CapacityPlan;
use crate::algo::tree::ComponentCut;
use crate::edge::Edge;
use crate::model::NetworkModel;

/// Result of the topology search: the final edge set with its capacity plan.
#[derive(Clone, Debug, PartialEq)]
pub struct Topology {
    edges: Vec<Edge>,
    plan: CapacityPlan,
    iterations: usize,
    augmented: Vec<Edge>,
    connected: bool,
    structural_cost: f64,
}

impl Topology {
    pub(crate) fn new(
        model: &NetworkModel,
        edges: Vec<Edge>,
        plan: CapacityPlan,
        iterations: usize,
        augmented: Vec<Edge>,
    ) -> Self {
        let connected = crate::connectivity::is_connected(&edges, model.site_count());
        let structural_cost = model.structural_cost(&edges);
        Self {
            edges,
            plan,
            iterations,
            augmented,
            connected,
            structural_cost,
        }
    }

    /// Selected edges in lexicographic order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn plan(&self) -> &CapacityPlan {
        &self.plan
    }

    /// Number of capacity-planning solves, including the final feasible one.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Edges added on top of the spanning tree, in the order they were added.
    pub fn augmented(&self) -> &[Edge] {
        &self.augmented
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Sum of the link costs of the selected edges.
    pub fn structural_cost(&self) -> f64 {
        self.structural_cost
    }

    /// Total network cost: link cost times provisioned capacity, summed.
    pub fn total_cost(&self) -> f64 {
        self.plan.cost()
    }

    pub fn links(&self, model: &NetworkModel) -> Vec<LinkReport> {
        self.edges
            .iter()
            .map(|e| LinkReport {
                site_a: model.site_name(e.a()),
                site_b: model.site_name(e.b()),
                cost: model.edge_cost(e),
                capacity: Some(self.plan.capacity(e)),
                flow: Some(self.plan.edge_flow(e)),
            })
            .collect()
    }
}

/// Result of the tree-selection loop.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeSelection {
    edges: Vec<Edge>,
    cuts: Vec<ComponentCut>,
    rounds: usize,
    total_cost: f64,
}

impl TreeSelection {
    pub(crate) fn new(
        model: &NetworkModel,
        edges: Vec<Edge>,
        cuts: Vec<ComponentCut>,
        rounds: usize,
    ) -> Self {
        let total_cost = model.structural_cost(&edges);
        Self {
            edges,
            cuts,
            rounds,
            total_cost,
        }
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Component cuts accumulated before the selection became connected.
    pub fn cuts(&self) -> &[ComponentCut] {
        &self.cuts
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn links(&self, model: &NetworkModel) -> Vec<LinkReport> {
        self.edges
            .iter()
            .map(|e| LinkReport {
                site_a: model.site_name(e.a()),
                site_b: model.site_name(e.b()),
                cost: model.edge_cost(e),
                capacity: None,
                flow: None,
            })
            .collect()
    }
}

/// One row of the link table handed to reporting.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LinkReport {
    pub site_a: String,
    pub site_b: String,
    pub cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow: Option<f64>,
}
