use std::collections::BTreeSet;

use petgraph::graphmap::UnGraphMap;
use petgraph::visit::Bfs;

use crate::edge::{Edge, SiteId};

fn site_graph<'a>(edges: impl IntoIterator<Item = &'a Edge>, n: usize) -> UnGraphMap<SiteId, ()> {
    let mut graph = UnGraphMap::with_capacity(n, 0);
    (0..n).for_each(|site| {
        graph.add_node(site);
    });
    edges.into_iter().for_each(|e| {
        debug_assert!(e.b() < n, "edge {e} references a site outside 0..{n}");
        graph.add_edge(e.a(), e.b(), ());
    });
    graph
}

/// Returns whether `edges` reach every one of the `n` sites from site 0.
pub fn is_connected<'a>(edges: impl IntoIterator<Item = &'a Edge>, n: usize) -> bool {
    if n == 0 {
        return true;
    }
    let graph = site_graph(edges, n);
    let mut bfs = Bfs::new(&graph, 0);
    let mut visited = 0;
    while bfs.next(&graph).is_some() {
        visited += 1;
    }
    visited == n
}

/// Partitions the `n` sites into maximal connected groups under `edges`.
///
/// Components are listed in order of their smallest site, so the output is deterministic
/// regardless of edge order.
pub fn connected_components<'a>(
    edges: impl IntoIterator<Item = &'a Edge>,
    n: usize,
) -> Vec<BTreeSet<SiteId>> {
    let graph = site_graph(edges, n);
    let mut seen = BTreeSet::new();
    let mut components = Vec::new();

    for start in 0..n {
        if seen.contains(&start) {
            continue;
        }
        let mut bfs = Bfs::new(&graph, start);
        let mut component = BTreeSet::new();
        while let Some(site) = bfs.next(&graph) {
            component.insert(site);
        }
        seen.extend(component.iter().copied());
        components.push(component);
    }

    components
}
