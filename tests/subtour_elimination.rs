use netdesign::{NetworkDesigner, NetworkModel, SubtourElimination, TreeMilp};

fn zero_demand(n: usize) -> Vec<Vec<f64>> {
    vec![vec![0.0; n]; n]
}

/// Two triangles, cheap inside, expensive across.
fn twin_triangles() -> NetworkModel {
    let cost = (0..6)
        .map(|i| {
            (0..6)
                .map(|j| match (i == j, i / 3 == j / 3) {
                    (true, _) => 0.0,
                    (false, true) => 1.0,
                    (false, false) => 10.0,
                })
                .collect()
        })
        .collect();
    NetworkModel::new(cost, zero_demand(6)).unwrap()
}

#[test]
fn cuts_reconnect_twin_triangles() {
    let model = twin_triangles();
    let mut subtour = SubtourElimination::new(TreeMilp);
    let selection = subtour.run(&model).unwrap();

    assert_eq!(selection.edges().len(), 5);
    assert!((selection.total_cost() - 14.0).abs() < 1e-9);
    assert!(selection.rounds() >= 2);
    assert!(selection.cuts().len() >= 2);
    assert!(selection
        .cuts()
        .iter()
        .all(|cut| cut.is_satisfied_by(selection.edges())));
    subtour.check(&model, &selection).unwrap();
}

#[test]
fn already_connected_selection_needs_no_cuts() {
    let cost = vec![
        vec![0.0, 1.0, 4.0, 4.0],
        vec![1.0, 0.0, 4.0, 4.0],
        vec![4.0, 4.0, 0.0, 1.0],
        vec![4.0, 4.0, 1.0, 0.0],
    ];
    let model = NetworkModel::new(cost, zero_demand(4)).unwrap();
    let mut subtour = SubtourElimination::new(TreeMilp);
    let selection = subtour.run(&model).unwrap();

    assert_eq!(selection.rounds(), 1);
    assert!(selection.cuts().is_empty());
    assert!((selection.total_cost() - 6.0).abs() < 1e-9);
    subtour.check(&model, &selection).unwrap();
}

#[test]
fn link_table_has_no_capacity_columns() {
    let model = twin_triangles();
    let selection = SubtourElimination::new(TreeMilp).run(&model).unwrap();
    let links = selection.links(&model);
    assert_eq!(links.len(), 5);
    assert!(links.iter().all(|l| l.capacity.is_none() && l.flow.is_none()));
    assert_eq!(links.iter().filter(|l| l.cost == 10.0).count(), 1);
}
