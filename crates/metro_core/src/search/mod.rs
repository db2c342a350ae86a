use rustc_hash::FxHashMap;

use crate::constants::{StationId, Weight};

use self::shortest_path::ShortestPath;

pub mod dijkstra;
pub mod shortest_path;

/// Walks the predecessor links from `target` back to `source`.
///
/// Returns `None` if `target` carries no label or the chain breaks before it
/// reaches `source`.
pub fn reconstruct_path(
    target: StationId,
    source: StationId,
    node_data: &FxHashMap<StationId, (Weight, Option<StationId>)>,
) -> Option<ShortestPath> {
    let weight = node_data.get(&target)?.0;
    let mut path = vec![target];

    let mut current = target;
    while current != source {
        current = node_data.get(&current)?.1?;
        path.push(current);
    }
    path.reverse();
    Some(ShortestPath::new(path, weight))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_predecessors() {
        let mut node_data = FxHashMap::default();
        node_data.insert(1, (0.0, None));
        node_data.insert(2, (1.5, Some(1)));
        node_data.insert(3, (4.0, Some(2)));

        assert_eq!(
            reconstruct_path(3, 1, &node_data),
            Some(ShortestPath::new(vec![1, 2, 3], 4.0))
        );
        assert_eq!(
            reconstruct_path(1, 1, &node_data),
            Some(ShortestPath::new(vec![1], 0.0))
        );
    }

    #[test]
    fn broken_chain() {
        let mut node_data = FxHashMap::default();
        node_data.insert(2, (1.5, None));
        node_data.insert(3, (4.0, Some(2)));

        assert_eq!(reconstruct_path(3, 1, &node_data), None);
        assert_eq!(reconstruct_path(9, 1, &node_data), None);
    }
}
