//! Crate to find shortest routes in a metro network.
//!
//! Stations carry coordinates, connections join two stations on a line. The
//! graph weighs every connection with the great-circle distance between its
//! stations and a Dijkstra search answers route queries.
//!
//! # Basic usage
//! ```
//! use metro_core::prelude::*;
//! use metro_core::{connection, station};
//!
//! let stations: StationRegistry = [
//!     station!(1, 0.0, 0.0, "A"),
//!     station!(2, 0.0, 1.0, "B"),
//!     station!(3, 0.0, 2.0, "C"),
//! ]
//! .into_iter()
//! .map(|s| (s.id, s))
//! .collect();
//!
//! // Build the graph
//! let g = Graph::build(&stations, &[connection!(1, 2; 1), connection!(2, 3; 1)]).unwrap();
//!
//! // Search
//! let sp = shortest_path(&g, 1, 3).unwrap();
//! assert_eq!(sp.nodes, vec![1, 2, 3]);
//! assert_eq!(sp.weight, haversine(0.0, 0.0, 0.0, 1.0) + haversine(0.0, 1.0, 0.0, 2.0));
//!```
//! [`Graph`]: crate::graph::Graph
pub mod constants;
pub mod error;
pub mod graph;
pub mod loader;
pub mod prelude;
pub mod report;
pub mod search;
pub mod statistics;
pub mod util;
