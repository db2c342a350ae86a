use crate::constants::{LineId, StationId, Weight};
use crate::error::RouteError;
use crate::util::math::distance;
use log::{debug, info};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Stations keyed by their identifier. Owned by the caller, the graph only
/// borrows it during [`Graph::build`].
pub type StationRegistry = FxHashMap<StationId, Station>;

/// A stop of the network with its position in degrees.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Station {
    pub id: StationId,
    pub lat: f64,
    pub lon: f64,
    pub name: String,
}

impl Station {
    pub fn new(id: StationId, lat: f64, lon: f64, name: impl Into<String>) -> Self {
        Station {
            id,
            lat,
            lon,
            name: name.into(),
        }
    }
}

/// Undirected link between two stations served by `line`.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub a: StationId,
    pub b: StationId,
    pub line: LineId,
}

impl Connection {
    pub fn new(a: StationId, b: StationId, line: LineId) -> Self {
        Connection { a, b, line }
    }
}

/// Payload stored for every neighbor of a station.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub weight: Weight,
    pub line: LineId,
}

/// Undirected, weighted station graph.
///
/// Every station maps to its neighbors, and each neighbor entry holds the
/// great-circle distance and the line of the connection. Each unordered pair
/// keeps exactly one edge: when several connections join the same two
/// stations, the one inserted last wins.
///
/// There is no way to mutate the graph once built, so a `&Graph` can be shared
/// freely between threads running queries.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: FxHashMap<StationId, FxHashMap<StationId, Edge>>,
    num_replaced: usize,
}

impl Graph {
    /// Builds the graph from a station registry and a list of connections.
    ///
    /// Connections are processed in order. Stations without any connection do
    /// not become part of the graph.
    ///
    /// Fails with [`RouteError::UnknownReference`] on the first connection that
    /// references a station missing from `stations`.
    pub fn build(
        stations: &StationRegistry,
        connections: &[Connection],
    ) -> Result<Self, RouteError> {
        let mut g = Graph {
            adjacency: FxHashMap::with_capacity_and_hasher(stations.len(), Default::default()),
            num_replaced: 0,
        };

        for (i, conn) in connections.iter().enumerate() {
            let lookup = move |station: StationId| {
                stations.get(&station).ok_or(RouteError::UnknownReference {
                    station,
                    connection: i,
                })
            };
            let src = lookup(conn.a)?;
            let dst = lookup(conn.b)?;

            let edge = Edge {
                weight: distance(src, dst),
                line: conn.line,
            };
            g.add_edge(conn.a, conn.b, edge);
        }

        info!(
            "Graph has {} stations and {} edges ({} connections replaced)",
            g.num_stations(),
            g.num_edges(),
            g.num_replaced
        );
        Ok(g)
    }

    /// Inserts `edge` in both directions, replacing a previous edge of the pair.
    fn add_edge(&mut self, a: StationId, b: StationId, edge: Edge) {
        let old = self.adjacency.entry(a).or_default().insert(b, edge);
        self.adjacency.entry(b).or_default().insert(a, edge);

        if let Some(old) = old {
            self.num_replaced += 1;
            debug!(
                "Connection {} <=> {} on line {} replaced by line {}",
                a, b, old.line, edge.line
            );
        }
    }

    /// True if the station has at least one connection.
    pub fn contains(&self, station: StationId) -> bool {
        self.adjacency.contains_key(&station)
    }

    pub fn edge(&self, a: StationId, b: StationId) -> Option<&Edge> {
        self.adjacency.get(&a)?.get(&b)
    }

    /// Returns an iterator over the neighbors of `station`. Empty for stations
    /// outside the graph.
    pub fn neighbors(&self, station: StationId) -> impl Iterator<Item = (StationId, &Edge)> + '_ {
        self.adjacency
            .get(&station)
            .into_iter()
            .flat_map(|neighbors| neighbors.iter().map(|(id, edge)| (*id, edge)))
    }

    /// Returns an iterator over all station ids of the graph
    pub fn stations(&self) -> impl Iterator<Item = StationId> + '_ {
        self.adjacency.keys().copied()
    }

    pub fn num_stations(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges. A self-loop counts once.
    pub fn num_edges(&self) -> usize {
        let (loops, others) = self
            .adjacency
            .iter()
            .flat_map(|(a, neighbors)| neighbors.keys().map(move |b| a == b))
            .fold((0, 0), |(l, o), is_loop| if is_loop { (l + 1, o) } else { (l, o + 1) });
        loops + others / 2
    }

    /// Number of connections that overwrote an earlier connection of the same
    /// station pair during [`Graph::build`].
    pub fn num_replaced_connections(&self) -> usize {
        self.num_replaced
    }

    pub fn degree(&self, station: StationId) -> usize {
        self.adjacency.get(&station).map_or(0, |n| n.len())
    }
}

/// Macro to create a station with a given id, lat, lon and optional name
/// station!(0, 1.0, 1.0)
#[macro_export]
macro_rules! station {
    ($id:expr, $lat:expr, $lon:expr) => {
        $crate::graph::Station::new($id, $lat, $lon, format!("Station {}", $id))
    };
    ($id:expr, $lat:expr, $lon:expr, $name:expr) => {
        $crate::graph::Station::new($id, $lat, $lon, $name)
    };
}

/// Macro to create a connection between two stations on a line
///
/// connection!(0, 1; 3) connects station 0 and 1 on line 3
#[macro_export]
macro_rules! connection {
    ($a:expr, $b:expr; $line:expr) => {
        $crate::graph::Connection::new($a, $b, $line)
    };
}
