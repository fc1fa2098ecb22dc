use proptest::prelude::*;

use netdesign::baseline::minimum_spanning_tree;
use netdesign::connectivity::{connected_components, is_connected};
use netdesign::{Edge, NetworkModel};

/// Symmetric cost matrix with zero diagonal from the upper-triangle entries.
fn cost_matrix(n: usize, upper: &[u32]) -> Vec<Vec<f64>> {
    let mut cost = vec![vec![0.0; n]; n];
    let mut it = upper.iter();
    for i in 0..n {
        for j in i + 1..n {
            let c = f64::from(*it.next().unwrap());
            cost[i][j] = c;
            cost[j][i] = c;
        }
    }
    cost
}

fn costs() -> impl Strategy<Value = (usize, Vec<u32>)> {
    (2usize..8).prop_flat_map(|n| (Just(n), prop::collection::vec(0u32..20, n * (n - 1) / 2)))
}

proptest! {
    #[test]
    fn mst_spans_all_sites((n, upper) in costs()) {
        let model = NetworkModel::new(cost_matrix(n, &upper), vec![vec![0.0; n]; n]).unwrap();
        let tree = minimum_spanning_tree(&model);
        prop_assert_eq!(tree.len(), n - 1);
        prop_assert!(is_connected(&tree, n));
        prop_assert_eq!(&tree, &minimum_spanning_tree(&model));
    }

    #[test]
    fn mst_is_no_costlier_than_a_star((n, upper) in costs()) {
        let model = NetworkModel::new(cost_matrix(n, &upper), vec![vec![0.0; n]; n]).unwrap();
        let tree = minimum_spanning_tree(&model);
        let star: Vec<Edge> = (1..n).filter_map(|j| Edge::new(0, j)).collect();
        prop_assert!(model.structural_cost(&tree) <= model.structural_cost(&star));
    }

    #[test]
    fn candidates_are_sorted((n, upper) in costs()) {
        let model = NetworkModel::new(cost_matrix(n, &upper), vec![vec![0.0; n]; n]).unwrap();
        let candidates = model.candidate_edges();
        prop_assert_eq!(candidates.len(), n * (n - 1) / 2);
        for w in candidates.windows(2) {
            let (c0, c1) = (model.edge_cost(&w[0]), model.edge_cost(&w[1]));
            prop_assert!(c0 < c1 || (c0 == c1 && w[0] < w[1]));
        }
    }

    #[test]
    fn components_partition_sites(
        n in 2usize..10,
        raw in prop::collection::vec((0usize..10, 0usize..10), 0..12),
    ) {
        let edges: Vec<Edge> = raw
            .into_iter()
            .filter_map(|(i, j)| Edge::new(i % n, j % n))
            .collect();
        let components = connected_components(&edges, n);
        let total: usize = components.iter().map(|c| c.len()).sum();
        prop_assert_eq!(total, n);
        prop_assert_eq!(components.len() == 1, is_connected(&edges, n));
        for e in &edges {
            prop_assert!(components.iter().any(|c| c.contains(&e.a()) && c.contains(&e.b())));
        }
    }
}
