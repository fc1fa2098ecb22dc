use std::collections::BTreeSet;

use crate::algo::tree::{ComponentCut, TreeSelector};
use crate::connectivity::{connected_components, is_connected};
use crate::edge::SiteId;
use crate::error::Error;
use crate::model::NetworkModel;
use crate::topology::TreeSelection;
use crate::NetworkDesigner;

/// Cutting-plane loop over a tree-selection relaxation: every disconnected selection adds
/// one cut per component, then the selector is asked again.
#[derive(Clone, Debug)]
pub struct SubtourElimination<S> {
    selector: S,
    round_limit: Option<usize>,
}

impl<S> SubtourElimination<S> {
    pub fn new(selector: S) -> Self {
        Self {
            selector,
            round_limit: None,
        }
    }

    pub fn with_round_limit(mut self, limit: usize) -> Self {
        self.round_limit = Some(limit);
        self
    }
}

impl<S> NetworkDesigner for SubtourElimination<S>
where
    S: TreeSelector,
{
    type Design = TreeSelection;

    fn run(&mut self, model: &NetworkModel) -> Result<Self::Design, Error> {
        let n = model.site_count();
        let mut cuts: Vec<ComponentCut> = Vec::new();
        let mut known: BTreeSet<BTreeSet<SiteId>> = BTreeSet::new();
        let mut round = 0;

        loop {
            if let Some(limit) = self.round_limit {
                if round >= limit {
                    return Err(Error::IterationLimit(limit));
                }
            }
            round += 1;

            let edges = self
                .selector
                .select(model, &cuts)
                .map_err(|e| Error::AlgoSpecific(format!("{e:?}")))?
                .ok_or(Error::TreeInfeasible)?;

            let components = connected_components(&edges, n);
            if components.len() == 1 {
                let selection = TreeSelection::new(model, edges, cuts, round);
                log::info!("----------------------------------");
                log::info!("     Rounds = {}", selection.rounds());
                log::info!(" Cuts added = {}", selection.cuts().len());
                log::info!(" Total cost = {}", selection.total_cost());
                return Ok(selection);
            }

            let before = cuts.len();
            for component in components {
                if component.len() < n && known.insert(component.clone()) {
                    log::trace!("cutting off component {component:?}");
                    cuts.push(ComponentCut::new(model, component));
                }
            }
            if cuts.len() == before {
                return Err(Error::StalledCuts(round));
            }

            log::debug!(
                "round {round}: selection disconnected, {} cuts in total",
                cuts.len()
            );
        }
    }

    fn check(&self, model: &NetworkModel, design: &Self::Design) -> Result<(), Error> {
        let n = model.site_count();
        if design.edges().len() + 1 != n {
            return Err(Error::WrongEdgeCount {
                expected: n - 1,
                got: design.edges().len(),
            });
        }
        if !is_connected(design.edges(), n) {
            return Err(Error::Disconnected);
        }
        Ok(())
    }
}
