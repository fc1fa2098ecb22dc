use good_lp::{
    default_solver, variable, Expression, ProblemVariables, ResolutionError, Solution,
    SolverModel, Variable,
};

use itertools::Itertools;

use crate::algo::tree::{ComponentCut, TreeSelector};
use crate::edge::Edge;
use crate::model::NetworkModel;

/// Binary edge-selection MILP over every candidate edge.
#[derive(Clone, Debug, Default)]
pub struct TreeMilp;

impl TreeSelector for TreeMilp {
    type Error = ResolutionError;

    fn select(
        &mut self,
        model: &NetworkModel,
        cuts: &[ComponentCut],
    ) -> Result<Option<Vec<Edge>>, Self::Error> {
        let n = model.site_count();
        let candidates = model.candidate_edges();

        let mut vars = ProblemVariables::new();
        let x: Vec<Variable> = candidates
            .iter()
            .map(|_| vars.add(variable().binary()))
            .collect();

        let objective = candidates.iter().zip(&x).fold(
            Expression::with_capacity(candidates.len()),
            |mut acc, (edge, &var)| {
                acc.add_mul(model.edge_cost(edge), var);
                acc
            },
        );

        let mut problem = vars.minimise(objective).using(default_solver);

        // exactly N - 1 edges
        problem = problem.with(sum_of(&x, 0..candidates.len()).eq((n - 1) as f64));

        // every site is an endpoint of some selected edge
        for site in 0..n {
            let incident = candidates.iter().positions(|e| e.touches(site));
            problem = problem.with(sum_of(&x, incident).geq(1.0));
        }

        for cut in cuts {
            let crossing = candidates.iter().positions(|e| cut.crossing().contains(e));
            problem = problem.with(sum_of(&x, crossing).geq(1.0));
        }

        let solution = match problem.solve() {
            Ok(solution) => solution,
            Err(ResolutionError::Infeasible) => return Ok(None),
            Err(e) => return Err(e),
        };

        let selected = candidates
            .iter()
            .zip(&x)
            .filter(|(_, &var)| solution.value(var) > 0.5)
            .map(|(edge, _)| *edge)
            .sorted()
            .collect();

        Ok(Some(selected))
    }
}

fn sum_of(x: &[Variable], indices: impl Iterator<Item = usize>) -> Expression {
    indices.fold(Expression::default(), |mut acc, idx| {
        acc.add_mul(1.0, x[idx]);
        acc
    })
}
