use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::constants::{StationId, Weight};
use crate::error::RouteError;
use crate::graph::*;
use crate::search::shortest_path::ShortestPath;
use crate::statistics::SearchStats;
use log::{debug, info};
use rustc_hash::{FxHashMap, FxHashSet};

/// Heap entry. Ordered so that `BinaryHeap` pops the lowest weight first and,
/// among equal weights, the lowest station id.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    pub node: StationId,
    pub weight: Weight,
}

impl Candidate {
    pub fn new(node: StationId, weight: Weight) -> Self {
        Self { node, weight }
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

/// Label-setting shortest path search on a [`Graph`].
///
/// The next station to settle is taken from a binary heap instead of a linear
/// scan over all unsettled stations. Stale heap entries are skipped when
/// popped. The settle order is the same as the linear scan with ties broken by
/// ascending station id, so results are reproducible.
pub struct Dijkstra<'a> {
    pub stats: SearchStats,
    g: &'a Graph,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Dijkstra {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    /// Computes the shortest path from `start` to `end`.
    ///
    /// Fails with [`RouteError::UnknownStation`] if either station is not part
    /// of the graph and with [`RouteError::NoPath`] if `end` is unreachable.
    pub fn search(&mut self, start: StationId, end: StationId) -> Result<ShortestPath, RouteError> {
        for station in [start, end] {
            if !self.g.contains(station) {
                return Err(RouteError::UnknownStation(station));
            }
        }

        self.stats.init();

        if start == end {
            self.stats.nodes_settled += 1;
            self.stats.finish();
            return Ok(ShortestPath::new(vec![start], 0.0));
        }

        // tentative distance and predecessor per labelled station
        let mut node_data: FxHashMap<StationId, (Weight, Option<StationId>)> =
            FxHashMap::default();
        node_data.insert(start, (0.0, None));

        let mut settled = FxHashSet::default();
        let mut queue = BinaryHeap::new();
        queue.push(Candidate::new(start, 0.0));

        while let Some(Candidate { node, weight }) = queue.pop() {
            if !settled.insert(node) {
                continue;
            }
            self.stats.nodes_settled += 1;

            if node == end {
                break;
            }

            for (neighbor, edge) in self.g.neighbors(node) {
                if settled.contains(&neighbor) {
                    continue;
                }

                let new_distance = weight + edge.weight;
                let known = node_data
                    .get(&neighbor)
                    .map_or(Weight::INFINITY, |(d, _)| *d);
                if new_distance < known {
                    node_data.insert(neighbor, (new_distance, Some(node)));
                    queue.push(Candidate::new(neighbor, new_distance));
                }
            }
        }
        self.stats.finish();

        match super::reconstruct_path(end, start, &node_data) {
            Some(sp) => {
                debug!("Path found: {:?}", sp);
                info!("Path found: {}", self.stats);
                Ok(sp)
            }
            None => {
                info!("No path found: {}", self.stats);
                Err(RouteError::NoPath { start, end })
            }
        }
    }
}

/// Shortest path from `start` to `end` in `graph`.
///
/// Pure function of its arguments. See [`Dijkstra::search`] for the error
/// cases.
pub fn shortest_path(
    graph: &Graph,
    start: StationId,
    end: StationId,
) -> Result<ShortestPath, RouteError> {
    Dijkstra::new(graph).search(start, end)
}
