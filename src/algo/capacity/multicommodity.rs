use std::collections::BTreeMap;

use good_lp::{
    default_solver, variable, Expression, ProblemVariables, ResolutionError, Solution,
    SolverModel, Variable,
};

use crate::algo::capacity::{CapacityPlan, CapacityPlanner, SolveResult};
use crate::algo::FLOW_EPSILON;
use crate::connectivity::connected_components;
use crate::edge::{Direction, Edge, FlowKey};
use crate::error::Error;
use crate::model::NetworkModel;

/// Multi-commodity flow LP: one commodity per positive demand entry, one capacity
/// variable per edge shared by both directions, minimising `sum(cost * capacity)`.
#[derive(Clone, Debug, Default)]
pub struct MultiCommodityLp {
    link_capacity: Option<f64>,
    capacity_budget: Option<f64>,
}

impl MultiCommodityLp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upper bound on the capacity of every single link.
    pub fn with_link_capacity(mut self, limit: f64) -> Result<Self, Error> {
        self.link_capacity = Some(validate_bound("link capacity", limit)?);
        Ok(self)
    }

    /// Upper bound on the capacity summed over all links.
    pub fn with_capacity_budget(mut self, budget: f64) -> Result<Self, Error> {
        self.capacity_budget = Some(validate_bound("capacity budget", budget)?);
        Ok(self)
    }
}

fn validate_bound(bound: &'static str, value: f64) -> Result<f64, Error> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidBound { bound, value })
    }
}

impl CapacityPlanner for MultiCommodityLp {
    type Error = ResolutionError;

    fn plan(&mut self, model: &NetworkModel, edges: &[Edge]) -> Result<SolveResult, Self::Error> {
        let n = model.site_count();
        let commodities = model.commodities();

        // A commodity whose endpoints sit in different components can never be routed;
        // skip the solver and report infeasibility straight away.
        let component_of = connected_components(edges, n).into_iter().enumerate().fold(
            vec![0; n],
            |mut acc, (idx, component)| {
                component.into_iter().for_each(|site| acc[site] = idx);
                acc
            },
        );
        if let Some(c) = commodities
            .iter()
            .find(|c| component_of[c.source] != component_of[c.target])
        {
            log::debug!(
                "commodity {} -> {} is structurally disconnected on {} edges",
                c.source,
                c.target,
                edges.len()
            );
            return Ok(SolveResult::Infeasible);
        }

        let mut vars = ProblemVariables::new();

        let capacity: Vec<Variable> = edges
            .iter()
            .map(|_| {
                let def = variable().min(0.0);
                vars.add(match self.link_capacity {
                    Some(limit) => def.max(limit),
                    None => def,
                })
            })
            .collect();

        // flow[k][e] = [forward, backward]
        let flow: Vec<Vec<[Variable; 2]>> = commodities
            .iter()
            .map(|_| {
                edges
                    .iter()
                    .map(|_| {
                        [
                            vars.add(variable().min(0.0)),
                            vars.add(variable().min(0.0)),
                        ]
                    })
                    .collect()
            })
            .collect();

        let objective = edges.iter().zip(&capacity).fold(
            Expression::with_capacity(edges.len()),
            |mut acc, (edge, &cap)| {
                acc.add_mul(model.edge_cost(edge), cap);
                acc
            },
        );

        let mut problem = vars.minimise(objective).using(default_solver);

        // shared capacity: sum over commodities and directions <= capacity
        for (e, &cap) in capacity.iter().enumerate() {
            let mut load = Expression::with_capacity(2 * commodities.len() + 1);
            flow.iter().for_each(|per_edge| {
                load.add_mul(1.0, per_edge[e][0]);
                load.add_mul(1.0, per_edge[e][1]);
            });
            load.add_mul(-1.0, cap);
            problem = problem.with(load.leq(0.0));
        }

        if let Some(budget) = self.capacity_budget {
            let total = capacity
                .iter()
                .fold(Expression::with_capacity(capacity.len()), |mut acc, &cap| {
                    acc.add_mul(1.0, cap);
                    acc
                });
            problem = problem.with(total.leq(budget));
        }

        // incidence[m] = (edge index, sign of a forward traversal for m's outflow)
        let incidence = edges.iter().enumerate().fold(
            vec![Vec::new(); n],
            |mut acc: Vec<Vec<(usize, f64)>>, (e, edge)| {
                acc[edge.a()].push((e, 1.0));
                acc[edge.b()].push((e, -1.0));
                acc
            },
        );

        // conservation: outflow - inflow = demand at source, -demand at target, 0 elsewhere
        for (k, commodity) in commodities.iter().enumerate() {
            for (site, incident) in incidence.iter().enumerate() {
                if incident.is_empty() {
                    continue;
                }
                let net = incident.iter().fold(
                    Expression::with_capacity(2 * incident.len()),
                    |mut acc, &(e, sign)| {
                        acc.add_mul(sign, flow[k][e][0]);
                        acc.add_mul(-sign, flow[k][e][1]);
                        acc
                    },
                );
                let rhs = if site == commodity.source {
                    commodity.demand
                } else if site == commodity.target {
                    -commodity.demand
                } else {
                    0.0
                };
                problem = problem.with(net.eq(rhs));
            }
        }

        log::trace!(
            "solving lp: {} edges, {} commodities",
            edges.len(),
            commodities.len()
        );

        let solution = match problem.solve() {
            Ok(solution) => solution,
            Err(ResolutionError::Infeasible) => return Ok(SolveResult::Infeasible),
            Err(e) => return Err(e),
        };

        let capacities: BTreeMap<_, _> = edges
            .iter()
            .zip(&capacity)
            .map(|(edge, &cap)| (*edge, solution.value(cap).max(0.0)))
            .collect();

        let flows = commodities
            .iter()
            .zip(&flow)
            .flat_map(|(commodity, per_edge)| {
                edges.iter().zip(per_edge).flat_map(move |(edge, pair)| {
                    Direction::BOTH
                        .into_iter()
                        .zip(pair.iter())
                        .map(move |(direction, &var)| {
                            (
                                FlowKey {
                                    commodity: commodity.key(),
                                    edge: *edge,
                                    direction,
                                },
                                var,
                            )
                        })
                })
            })
            .map(|(key, var)| (key, solution.value(var)))
            .filter(|(_, value)| *value > FLOW_EPSILON)
            .collect();

        let cost = capacities
            .iter()
            .map(|(edge, cap)| model.edge_cost(edge) * cap)
            .sum();

        Ok(SolveResult::Optimal(CapacityPlan::new(capacities, flows, cost)))
    }
}
