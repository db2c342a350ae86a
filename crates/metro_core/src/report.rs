//! Human readable rendering of a computed route.
use std::fmt::{self, Display};

use crate::{
    constants::StationId,
    graph::{Graph, StationRegistry},
    search::shortest_path::{Leg, ShortestPath},
};

/// Borrows everything needed to print a [`ShortestPath`] with station names
/// and the line used on each leg.
pub struct RouteReport<'a> {
    pub path: &'a ShortestPath,
    pub stations: &'a StationRegistry,
    pub legs: Vec<Leg>,
}

impl<'a> RouteReport<'a> {
    pub fn new(path: &'a ShortestPath, graph: &Graph, stations: &'a StationRegistry) -> Self {
        RouteReport {
            path,
            stations,
            legs: path.legs(graph).collect(),
        }
    }

    fn label(&self, id: StationId) -> String {
        match self.stations.get(&id) {
            Some(station) => format!("{} ({})", id, station.name),
            None => id.to_string(),
        }
    }

    fn name(&self, id: StationId) -> String {
        self.stations
            .get(&id)
            .map_or_else(|| id.to_string(), |s| s.name.clone())
    }
}

impl Display for RouteReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(start), Some(end)) = (self.path.start(), self.path.end()) {
            writeln!(
                f,
                "Shortest path between {} and {}:",
                self.name(start),
                self.name(end)
            )?;
        }

        let stops: Vec<String> = self.path.nodes.iter().map(|id| self.label(*id)).collect();
        writeln!(f, "{}", stops.join(", "))?;

        for leg in &self.legs {
            writeln!(
                f,
                "  {} -> {}: line {}, {:.2} km",
                self.name(leg.from),
                self.name(leg.to),
                leg.line,
                leg.weight
            )?;
        }

        write!(f, "Total distance: {:.2} km", self.path.weight)
    }
}
