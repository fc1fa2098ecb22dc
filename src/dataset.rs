//! Built-in data set: eleven university campuses, link distances in km and traffic
//! requirements in Gbps.

use crate::error::Error;
use crate::model::NetworkModel;

pub const CAMPUS_NAMES: [&str; 11] = [
    "CCJE",
    "CCMN",
    "CCS",
    "CFCH",
    "CLA",
    "CT",
    "CM UFRJ-Macaé",
    "Campus Duque de Caxias",
    "CFP",
    "CH",
    "FCC",
];

const DISTANCES: [[f64; 11]; 11] = [
    [0.0, 20.0, 20.0, 0.5, 20.0, 20.0, 190.0, 40.0, 20.0, 20.0, 0.5],
    [20.0, 0.0, 1.0, 20.0, 1.0, 0.5, 190.0, 40.0, 0.5, 0.5, 20.0],
    [20.0, 1.0, 0.0, 20.0, 1.0, 0.5, 190.0, 40.0, 0.5, 0.5, 20.0],
    [0.5, 20.0, 20.0, 0.0, 20.0, 20.0, 190.0, 40.0, 20.0, 20.0, 0.5],
    [20.0, 1.0, 1.0, 20.0, 0.0, 1.0, 190.0, 40.0, 1.0, 1.0, 20.0],
    [20.0, 0.5, 0.5, 20.0, 1.0, 0.0, 190.0, 40.0, 0.5, 0.5, 20.0],
    [190.0, 190.0, 190.0, 190.0, 190.0, 190.0, 0.0, 160.0, 190.0, 190.0, 190.0],
    [40.0, 40.0, 40.0, 40.0, 40.0, 40.0, 160.0, 0.0, 40.0, 40.0, 40.0],
    [20.0, 0.5, 0.5, 20.0, 1.0, 0.5, 190.0, 40.0, 0.0, 0.5, 20.0],
    [20.0, 0.5, 0.5, 20.0, 1.0, 0.5, 190.0, 40.0, 0.5, 0.0, 20.0],
    [0.5, 20.0, 20.0, 0.5, 20.0, 20.0, 190.0, 40.0, 20.0, 20.0, 0.0],
];

const TRAFFIC: [[f64; 11]; 11] = [
    [0.0, 10.0, 5.0, 2.0, 15.0, 8.0, 3.0, 4.0, 7.0, 10.0, 5.0],
    [10.0, 0.0, 20.0, 6.0, 10.0, 25.0, 8.0, 6.0, 12.0, 15.0, 10.0],
    [5.0, 20.0, 0.0, 8.0, 10.0, 15.0, 6.0, 7.0, 8.0, 20.0, 10.0],
    [2.0, 6.0, 8.0, 0.0, 10.0, 12.0, 5.0, 4.0, 6.0, 10.0, 8.0],
    [15.0, 10.0, 10.0, 10.0, 0.0, 18.0, 7.0, 5.0, 9.0, 14.0, 10.0],
    [8.0, 25.0, 15.0, 12.0, 18.0, 0.0, 20.0, 15.0, 18.0, 25.0, 20.0],
    [3.0, 8.0, 6.0, 5.0, 7.0, 20.0, 0.0, 10.0, 12.0, 18.0, 15.0],
    [4.0, 6.0, 7.0, 4.0, 5.0, 15.0, 10.0, 0.0, 10.0, 12.0, 10.0],
    [7.0, 12.0, 8.0, 6.0, 9.0, 18.0, 12.0, 10.0, 0.0, 15.0, 12.0],
    [10.0, 15.0, 20.0, 10.0, 14.0, 25.0, 18.0, 12.0, 15.0, 0.0, 18.0],
    [5.0, 10.0, 10.0, 8.0, 10.0, 20.0, 15.0, 10.0, 12.0, 18.0, 0.0],
];

pub fn campus() -> Result<NetworkModel, Error> {
    let to_rows = |table: &[[f64; 11]; 11]| -> Vec<Vec<f64>> {
        table.iter().map(|row| row.to_vec()).collect()
    };
    NetworkModel::new(to_rows(&DISTANCES), to_rows(&TRAFFIC))?
        .with_site_names(CAMPUS_NAMES.iter().map(|name| name.to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn campus_tables_are_valid() {
        let model = campus().unwrap();
        assert_eq!(model.site_count(), 11);
        assert_eq!(model.candidate_edges().len(), 55);
        assert_eq!(model.commodities().len(), 110);
        assert_eq!(model.site_name(6), "CM UFRJ-Macaé");
        assert_eq!(model.cost(7, 6), 160.0);
    }
}
