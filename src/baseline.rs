use petgraph::unionfind::UnionFind;

use crate::edge::Edge;
use crate::model::NetworkModel;

/// Computes a minimum spanning tree over the complete candidate graph (Kruskal).
///
/// Candidates are scanned in the model's cost order, so ties resolve by the lexicographic
/// `(i, j)` order and the result is reproducible. The returned `N - 1` edges are sorted.
pub fn minimum_spanning_tree(model: &NetworkModel) -> Vec<Edge> {
    let n = model.site_count();
    let mut forest = UnionFind::<usize>::new(n);
    let mut tree = Vec::with_capacity(n.saturating_sub(1));

    for edge in model.candidate_edges() {
        if tree.len() + 1 == n {
            break;
        }
        if forest.union(edge.a(), edge.b()) {
            log::trace!("mst takes {edge} at cost {}", model.edge_cost(edge));
            tree.push(*edge);
        }
    }

    tree.sort();
    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connectivity::is_connected;

    fn zero_demand(n: usize) -> Vec<Vec<f64>> {
        vec![vec![0.0; n]; n]
    }

    #[test]
    fn two_clusters_bridged_by_cheapest_cross_edge() {
        let cost = vec![
            vec![0.0, 1.0, 4.0, 4.0],
            vec![1.0, 0.0, 4.0, 4.0],
            vec![4.0, 4.0, 0.0, 1.0],
            vec![4.0, 4.0, 1.0, 0.0],
        ];
        let model = NetworkModel::new(cost, zero_demand(4)).unwrap();
        let tree = minimum_spanning_tree(&model);
        assert_eq!(
            tree.iter().map(Edge::endpoints).collect::<Vec<_>>(),
            vec![(0, 1), (0, 2), (2, 3)]
        );
        assert_eq!(model.structural_cost(&tree), 6.0);
    }

    #[test]
    fn two_sites_single_edge() {
        let cost = vec![vec![0.0, 7.0], vec![7.0, 0.0]];
        let model = NetworkModel::new(cost, zero_demand(2)).unwrap();
        assert_eq!(minimum_spanning_tree(&model), vec![Edge::new(0, 1).unwrap()]);
    }

    #[test]
    fn equal_costs_give_star_on_site_zero() {
        let cost = (0..5)
            .map(|i| (0..5).map(|j| if i == j { 0.0 } else { 2.0 }).collect())
            .collect();
        let model = NetworkModel::new(cost, zero_demand(5)).unwrap();
        let tree = minimum_spanning_tree(&model);
        assert!(tree.iter().all(|e| e.a() == 0));
        assert!(is_connected(&tree, 5));
    }
}
