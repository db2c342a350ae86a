//! Re-exports of the most commonly used items in `metro_core`.
pub use crate::constants::{LineId, StationId, Weight};
pub use crate::error::RouteError;

pub use crate::search;
pub use crate::search::dijkstra::{shortest_path, Dijkstra};
pub use crate::search::shortest_path::ShortestPath;

pub use crate::graph::{Connection, Graph, Station, StationRegistry};
pub use crate::report::RouteReport;
pub use crate::util::math::haversine;
