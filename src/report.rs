use serde::{Deserialize, Serialize};

use crate::core::coord::Coord;
use crate::detect::{complete_mills, DoubleMill, Occupancy, Side};
use crate::topology::{Mill, Topology};

pub const DOUBLE_MILL: &str = "double mill";
pub const NO_DOUBLE_MILL: &str = "no double mill";

/// The one-line answer printed by the CLI.
pub fn verdict(double_mill: bool) -> &'static str {
    if double_mill {
        DOUBLE_MILL
    } else {
        NO_DOUBLE_MILL
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WitnessReport {
    pub mill: [Coord; 3],
    pub from: Coord,
    pub to: Coord,
    pub second_mill: [Coord; 3],
}

/// Serializable summary of one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub side: Side,
    pub double_mill: bool,
    pub complete_mills: Vec<[Coord; 3]>,
    pub witness: Option<WitnessReport>,
}

impl Report {
    pub fn new(occ: &Occupancy, side: Side, topology: &Topology) -> Self {
        let witness = occ.double_mill_for(side, topology);

        Self {
            side,
            double_mill: witness.is_some(),
            complete_mills: complete_mills(occ.side(side), topology)
                .into_iter()
                .map(|m| mill_coords(m, topology))
                .collect(),
            witness: witness.map(|w| witness_report(w, topology)),
        }
    }

    pub fn verdict(&self) -> &'static str {
        verdict(self.double_mill)
    }
}

fn mill_coords(m: Mill, topology: &Topology) -> [Coord; 3] {
    topology.mill_points(m).map(|p| p.coord())
}

fn witness_report(w: DoubleMill, topology: &Topology) -> WitnessReport {
    WitnessReport {
        mill: mill_coords(w.mill, topology),
        from: w.from.coord(),
        to: w.to.coord(),
        second_mill: mill_coords(w.second, topology),
    }
}
