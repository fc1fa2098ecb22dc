use std::collections::{BTreeSet, VecDeque};

use crate::algo::capacity::{CapacityPlan, CapacityPlanner, SolveResult};
use crate::algo::tolerance;
use crate::baseline::minimum_spanning_tree;
use crate::connectivity::is_connected;
use crate::edge::Edge;
use crate::error::Error;
use crate::model::NetworkModel;
use crate::topology::Topology;
use crate::NetworkDesigner;

/// State of one pass of the topology search.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchState {
    Searching,
    Feasible(CapacityPlan),
    Exhausted,
}

/// Record of a single capacity-planning attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchStep {
    pub iteration: usize,
    /// Size of the edge set that was planned.
    pub selected: usize,
    /// Candidates still queued when this step started.
    pub queued: usize,
    pub feasible: bool,
}

/// Grows a minimum spanning tree, cheapest candidate first, until the capacity planner
/// finds a feasible plan.
#[derive(Clone, Debug)]
pub struct TopologySearch<P> {
    planner: P,
    iteration_limit: Option<usize>,
    steps: Vec<SearchStep>,
}

impl<P> TopologySearch<P> {
    pub fn new(planner: P) -> Self {
        Self {
            planner,
            iteration_limit: None,
            steps: Vec::new(),
        }
    }

    pub fn with_iteration_limit(mut self, limit: usize) -> Self {
        self.iteration_limit = Some(limit);
        self
    }

    /// Steps of the most recent run.
    pub fn steps(&self) -> &[SearchStep] {
        &self.steps
    }
}

impl<P> TopologySearch<P>
where
    P: CapacityPlanner,
{
    fn step(
        &mut self,
        model: &NetworkModel,
        edges: &mut BTreeSet<Edge>,
        queue: &mut VecDeque<Edge>,
        augmented: &mut Vec<Edge>,
    ) -> Result<SearchState, Error> {
        let selected: Vec<_> = edges.iter().copied().collect();
        let queued = queue.len();
        let result = self
            .planner
            .plan(model, &selected)
            .map_err(|e| Error::AlgoSpecific(format!("{e:?}")))?;

        let feasible = matches!(result, SolveResult::Optimal(_));
        let state = match result {
            SolveResult::Optimal(plan) => SearchState::Feasible(plan),
            SolveResult::Infeasible => match queue.pop_front() {
                Some(edge) => {
                    log::debug!(
                        "infeasible on {} edges, adding {edge} at cost {}",
                        selected.len(),
                        model.edge_cost(&edge)
                    );
                    edges.insert(edge);
                    augmented.push(edge);
                    SearchState::Searching
                }
                None => SearchState::Exhausted,
            },
        };

        self.steps.push(SearchStep {
            iteration: self.steps.len() + 1,
            selected: selected.len(),
            queued,
            feasible,
        });

        Ok(state)
    }
}

impl<P> NetworkDesigner for TopologySearch<P>
where
    P: CapacityPlanner,
{
    type Design = Topology;

    fn run(&mut self, model: &NetworkModel) -> Result<Self::Design, Error> {
        self.steps.clear();

        let mut edges: BTreeSet<Edge> = minimum_spanning_tree(model).into_iter().collect();
        let mut queue: VecDeque<Edge> = model
            .candidate_edges()
            .iter()
            .filter(|e| !edges.contains(*e))
            .copied()
            .collect();
        let mut augmented = Vec::new();

        log::debug!(
            "spanning tree: {} edges, {} candidates queued",
            edges.len(),
            queue.len()
        );

        let plan = loop {
            if let Some(limit) = self.iteration_limit {
                if self.steps.len() >= limit {
                    return Err(Error::IterationLimit(limit));
                }
            }

            match self.step(model, &mut edges, &mut queue, &mut augmented)? {
                SearchState::Searching => continue,
                SearchState::Feasible(plan) => break plan,
                SearchState::Exhausted => {
                    log::error!(
                        "capacity plan infeasible with all {} candidate edges",
                        edges.len()
                    );
                    return Err(Error::Exhausted);
                }
            }
        };

        let topology = Topology::new(
            model,
            edges.into_iter().collect(),
            plan,
            self.steps.len(),
            augmented,
        );

        log::info!("----------------------------------");
        log::info!("     Iterations = {}", topology.iterations());
        log::info!("          Edges = {}", topology.edges().len());
        log::info!("Structural cost = {}", topology.structural_cost());
        log::info!("     Total cost = {}", topology.total_cost());

        Ok(topology)
    }

    fn check(&self, model: &NetworkModel, design: &Self::Design) -> Result<(), Error> {
        let n = model.site_count();
        if !is_connected(design.edges(), n) {
            return Err(Error::Disconnected);
        }

        let plan = design.plan();
        let tol = tolerance(model.total_demand());

        // flow only on selected edges, never above capacity
        if let Some(key) = plan
            .flows()
            .keys()
            .find(|key| design.edges().binary_search(&key.edge).is_err())
        {
            return Err(Error::CapacityExceeded(key.edge));
        }
        if let Some(edge) = design
            .edges()
            .iter()
            .find(|e| plan.edge_flow(e) > plan.capacity(e) + tol)
        {
            return Err(Error::CapacityExceeded(*edge));
        }

        for commodity in model.commodities() {
            for site in 0..n {
                let expected = if site == commodity.source {
                    commodity.demand
                } else if site == commodity.target {
                    -commodity.demand
                } else {
                    0.0
                };
                if (plan.net_outflow(&commodity, site) - expected).abs() > tol {
                    return Err(Error::FlowImbalance {
                        source: commodity.source,
                        target: commodity.target,
                        site,
                    });
                }
            }
        }

        Ok(())
    }
}
