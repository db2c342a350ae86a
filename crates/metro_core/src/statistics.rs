use std::{
    fmt::Display,
    time::{Duration, Instant},
};

use crate::{constants::StationId, graph::Graph};

#[derive(Debug, Default)]
pub struct SearchStats {
    pub nodes_settled: usize,
    pub duration: Option<Duration>,
    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn init(&mut self) {
        self.nodes_settled = 0;
        self.duration = None;
        self.start_timer();
    }

    fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        if let Some(start_time) = self.start_time {
            self.duration = Some(start_time.elapsed());
        }
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} nodes settled in {:?}",
            self.nodes_settled,
            self.duration.unwrap_or_default()
        )
    }
}

/// Average number of neighbors per station. Zero for an empty graph.
pub fn average_degree(g: &Graph) -> f64 {
    if g.num_stations() == 0 {
        return 0.0;
    }
    let sum: usize = g.stations().map(|s| g.degree(s)).sum();
    sum as f64 / g.num_stations() as f64
}

/// Station with the most neighbors, lowest id first on ties.
pub fn busiest_station(g: &Graph) -> Option<(StationId, usize)> {
    g.stations()
        .map(|s| (s, g.degree(s)))
        .max_by(|(a, da), (b, db)| da.cmp(db).then_with(|| b.cmp(a)))
}
