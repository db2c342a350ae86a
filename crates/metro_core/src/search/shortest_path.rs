use crate::{
    constants::{LineId, StationId, Weight},
    graph::Graph,
};

/// Route found by a search, from start to end inclusive.
#[derive(Debug, PartialEq, Clone)]
pub struct ShortestPath {
    pub nodes: Vec<StationId>,
    pub weight: Weight,
}

/// One hop of a [`ShortestPath`].
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Leg {
    pub from: StationId,
    pub to: StationId,
    pub line: LineId,
    pub weight: Weight,
}

impl ShortestPath {
    pub fn new(nodes: Vec<StationId>, weight: Weight) -> Self {
        ShortestPath { nodes, weight }
    }

    pub fn start(&self) -> Option<StationId> {
        self.nodes.first().copied()
    }

    pub fn end(&self) -> Option<StationId> {
        self.nodes.last().copied()
    }

    /// Hops of the path with the line and weight of the traversed edge.
    ///
    /// Hops whose edge is missing from `g` are skipped, which only happens if
    /// the path was computed on a different graph.
    pub fn legs<'a>(&'a self, g: &'a Graph) -> impl Iterator<Item = Leg> + 'a {
        self.nodes.windows(2).filter_map(move |pair| {
            let (from, to) = (pair[0], pair[1]);
            g.edge(from, to).map(|edge| Leg {
                from,
                to,
                line: edge.line,
                weight: edge.weight,
            })
        })
    }
}
