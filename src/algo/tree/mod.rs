mod milp;

pub use milp::TreeMilp;

use core::fmt::Debug;
use std::collections::BTreeSet;

use crate::edge::{Edge, SiteId};
use crate::model::NetworkModel;

/// Selection of exactly `N - 1` candidate edges, every site incident to at least one,
/// subject to a set of accumulated component cuts.
pub trait TreeSelector {
    type Error: Debug;

    /// Returns `None` if no selection satisfies the constraints.
    fn select(
        &mut self,
        model: &NetworkModel,
        cuts: &[ComponentCut],
    ) -> Result<Option<Vec<Edge>>, Self::Error>;
}

impl<T: TreeSelector + ?Sized> TreeSelector for &mut T {
    type Error = T::Error;

    fn select(
        &mut self,
        model: &NetworkModel,
        cuts: &[ComponentCut],
    ) -> Result<Option<Vec<Edge>>, Self::Error> {
        (**self).select(model, cuts)
    }
}

/// Requires at least one selected edge between `component` and the remaining sites.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentCut {
    component: BTreeSet<SiteId>,
    crossing: Vec<Edge>,
}

impl ComponentCut {
    pub fn new(model: &NetworkModel, component: BTreeSet<SiteId>) -> Self {
        let crossing = model
            .candidate_edges()
            .iter()
            .filter(|e| component.contains(&e.a()) != component.contains(&e.b()))
            .copied()
            .collect();
        Self {
            component,
            crossing,
        }
    }

    pub fn component(&self) -> &BTreeSet<SiteId> {
        &self.component
    }

    /// Candidate edges with exactly one endpoint inside the component.
    pub fn crossing(&self) -> &[Edge] {
        &self.crossing
    }

    pub fn is_satisfied_by(&self, edges: &[Edge]) -> bool {
        edges.iter().any(|e| self.crossing.contains(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crossing_edges_have_one_endpoint_inside() {
        let cost = (0..4)
            .map(|i| (0..4).map(|j| if i == j { 0.0 } else { 1.0 }).collect())
            .collect();
        let model = NetworkModel::new(cost, vec![vec![0.0; 4]; 4]).unwrap();
        let cut = ComponentCut::new(&model, [1, 2].into_iter().collect());

        let mut crossing: Vec<_> = cut.crossing().iter().map(Edge::endpoints).collect();
        crossing.sort();
        assert_eq!(crossing, vec![(0, 1), (0, 2), (1, 3), (2, 3)]);

        assert!(!cut.is_satisfied_by(&[Edge::new(1, 2).unwrap(), Edge::new(0, 3).unwrap()]));
        assert!(cut.is_satisfied_by(&[Edge::new(2, 3).unwrap()]));
    }
}
