use itertools::Itertools;

use crate::edge::{Commodity, Edge, SiteId};
use crate::error::Error;

/// The immutable problem description shared by every component: sites, link costs and
/// traffic demands.
///
/// Construction validates both matrices; nothing is mutated afterwards. The candidate edge
/// list (every unordered pair of sites) is computed once, sorted ascending by cost with
/// ties broken by the lexicographic `(i, j)` order, so that every consumer sees the same
/// augmentation order.
#[derive(Clone, Debug)]
pub struct NetworkModel {
    cost: Vec<Vec<f64>>,
    demand: Vec<Vec<f64>>,
    names: Option<Vec<String>>,
    candidates: Vec<Edge>,
}

impl NetworkModel {
    pub fn new(cost: Vec<Vec<f64>>, demand: Vec<Vec<f64>>) -> Result<Self, Error> {
        let n = cost.len();
        if n < 2 {
            return Err(Error::TooFewSites(n));
        }
        validate_square("cost", &cost, n)?;
        if demand.len() != n {
            return Err(Error::DimensionMismatch {
                cost: n,
                demand: demand.len(),
            });
        }
        validate_square("demand", &demand, n)?;

        validate_entries("cost", &cost)?;
        validate_entries("demand", &demand)?;

        if let Some((i, j)) = (0..n)
            .tuple_combinations()
            .find(|&(i, j)| cost[i][j] != cost[j][i])
        {
            return Err(Error::Asymmetric(i, j));
        }

        let candidates = (0..n)
            .tuple_combinations()
            .filter_map(|(i, j)| Edge::new(i, j))
            .sorted_by(|e1, e2| {
                let (c1, c2) = (cost[e1.a()][e1.b()], cost[e2.a()][e2.b()]);
                c1.total_cmp(&c2).then_with(|| e1.cmp(e2))
            })
            .collect();

        Ok(Self {
            cost,
            demand,
            names: None,
            candidates,
        })
    }

    pub fn with_site_names(mut self, names: Vec<String>) -> Result<Self, Error> {
        if names.len() != self.site_count() {
            return Err(Error::SiteNameCount {
                expected: self.site_count(),
                got: names.len(),
            });
        }
        self.names = Some(names);
        Ok(self)
    }

    pub fn site_count(&self) -> usize {
        self.cost.len()
    }

    pub fn cost(&self, i: SiteId, j: SiteId) -> f64 {
        self.cost[i][j]
    }

    pub fn edge_cost(&self, edge: &Edge) -> f64 {
        self.cost[edge.a()][edge.b()]
    }

    pub fn demand(&self, i: SiteId, j: SiteId) -> f64 {
        self.demand[i][j]
    }

    /// Display name of a site, falling back to its index.
    pub fn site_name(&self, site: SiteId) -> String {
        self.names
            .as_ref()
            .and_then(|names| names.get(site).cloned())
            .unwrap_or_else(|| site.to_string())
    }

    /// All `N * (N - 1) / 2` candidate edges, cheapest first.
    pub fn candidate_edges(&self) -> &[Edge] {
        &self.candidates
    }

    /// One commodity per strictly positive demand entry, in row-major order.
    pub fn commodities(&self) -> Vec<Commodity> {
        let n = self.site_count();
        (0..n)
            .cartesian_product(0..n)
            .filter(|&(k, l)| k != l && self.demand[k][l] > 0.0)
            .map(|(source, target)| Commodity {
                source,
                target,
                demand: self.demand[source][target],
            })
            .collect()
    }

    pub fn total_demand(&self) -> f64 {
        self.demand.iter().flatten().sum()
    }

    /// Sum of the link costs of `edges`, ignoring provisioned capacity.
    pub fn structural_cost<'a>(&self, edges: impl IntoIterator<Item = &'a Edge>) -> f64 {
        edges.into_iter().map(|e| self.edge_cost(e)).sum()
    }
}

fn validate_square(matrix: &'static str, rows: &[Vec<f64>], n: usize) -> Result<(), Error> {
    match rows.iter().position(|row| row.len() != n) {
        Some(row) => Err(Error::NotSquare {
            matrix,
            row,
            len: rows[row].len(),
            expected: n,
        }),
        None => Ok(()),
    }
}

fn validate_entries(matrix: &'static str, rows: &[Vec<f64>]) -> Result<(), Error> {
    for (row, values) in rows.iter().enumerate() {
        for (col, value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(Error::NonFinite { matrix, row, col });
            }
            if *value < 0.0 {
                return Err(Error::NegativeEntry { matrix, row, col });
            }
        }
        if values[row] != 0.0 {
            return Err(Error::NonZeroDiagonal { matrix, site: row });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_demand(n: usize, value: f64) -> Vec<Vec<f64>> {
        (0..n)
            .map(|i| (0..n).map(|j| if i == j { 0.0 } else { value }).collect())
            .collect()
    }

    fn two_clusters() -> Vec<Vec<f64>> {
        vec![
            vec![0.0, 1.0, 4.0, 4.0],
            vec![1.0, 0.0, 4.0, 4.0],
            vec![4.0, 4.0, 0.0, 1.0],
            vec![4.0, 4.0, 1.0, 0.0],
        ]
    }

    #[test]
    fn candidates_sorted_by_cost_then_pair() {
        let model = NetworkModel::new(two_clusters(), uniform_demand(4, 1.0)).unwrap();
        let order: Vec<_> = model
            .candidate_edges()
            .iter()
            .map(Edge::endpoints)
            .collect();
        assert_eq!(
            order,
            vec![(0, 1), (2, 3), (0, 2), (0, 3), (1, 2), (1, 3)]
        );
    }

    #[test]
    fn commodities_skip_zero_demand() {
        let mut demand = uniform_demand(3, 0.0);
        demand[0][2] = 5.0;
        demand[2][1] = 1.5;
        let model = NetworkModel::new(uniform_demand(3, 1.0), demand).unwrap();
        let keys: Vec<_> = model.commodities().iter().map(Commodity::key).collect();
        assert_eq!(keys, vec![(0, 2), (2, 1)]);
        assert_eq!(model.total_demand(), 6.5);
    }

    #[test]
    fn rejects_malformed_matrices() {
        assert_eq!(
            NetworkModel::new(vec![vec![0.0]], vec![vec![0.0]]).unwrap_err(),
            Error::TooFewSites(1)
        );

        let mut cost = two_clusters();
        cost[1].pop();
        assert!(matches!(
            NetworkModel::new(cost, uniform_demand(4, 1.0)),
            Err(Error::NotSquare { row: 1, len: 3, .. })
        ));

        let mut cost = two_clusters();
        cost[0][3] = 5.0;
        assert_eq!(
            NetworkModel::new(cost, uniform_demand(4, 1.0)).unwrap_err(),
            Error::Asymmetric(0, 3)
        );

        let mut cost = two_clusters();
        cost[2][2] = 1.0;
        assert!(matches!(
            NetworkModel::new(cost, uniform_demand(4, 1.0)),
            Err(Error::NonZeroDiagonal { site: 2, .. })
        ));

        let mut demand = uniform_demand(4, 1.0);
        demand[3][0] = -1.0;
        assert!(matches!(
            NetworkModel::new(two_clusters(), demand),
            Err(Error::NegativeEntry {
                matrix: "demand",
                row: 3,
                col: 0
            })
        ));

        let mut cost = two_clusters();
        cost[0][1] = f64::NAN;
        assert_eq!(
            NetworkModel::new(cost, uniform_demand(4, 1.0)).unwrap_err(),
            Error::NonFinite {
                matrix: "cost",
                row: 0,
                col: 1
            }
        );

        let mut demand = uniform_demand(4, 1.0);
        demand[2][1] = f64::INFINITY;
        assert!(matches!(
            NetworkModel::new(two_clusters(), demand),
            Err(Error::NonFinite {
                matrix: "demand",
                row: 2,
                col: 1
            })
        ));

        assert_eq!(
            NetworkModel::new(two_clusters(), uniform_demand(3, 1.0)).unwrap_err(),
            Error::DimensionMismatch { cost: 4, demand: 3 }
        );
    }

    #[test]
    fn site_names_must_match_site_count() {
        let model = NetworkModel::new(two_clusters(), uniform_demand(4, 1.0)).unwrap();
        assert_eq!(model.site_name(2), "2");
        assert!(matches!(
            model.clone().with_site_names(vec!["x".into()]),
            Err(Error::SiteNameCount {
                expected: 4,
                got: 1
            })
        ));
        let named = model
            .with_site_names(["a", "b", "c", "d"].map(String::from).to_vec())
            .unwrap();
        assert_eq!(named.site_name(2), "c");
    }
}
