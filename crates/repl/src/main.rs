//! Interactive shell to query a metro network
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context as _};
use metro_core::{
    loader,
    prelude::*,
    statistics::{average_degree, busiest_station},
};
use rand::seq::SliceRandom;
use reedline_repl_rs::clap::{value_parser, Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};

#[derive(Default)]
struct Context {
    stations: StationRegistry,
    graph: Graph,
}

impl Context {
    fn new(stations: StationRegistry, graph: Graph) -> Self {
        Self { stations, graph }
    }

    fn info(&self) -> String {
        let mut out = format!(
            "Network has {} stations ({} connected) and {} edges, average degree {:.2}",
            self.stations.len(),
            self.graph.num_stations(),
            self.graph.num_edges(),
            average_degree(&self.graph)
        );
        if let Some((id, degree)) = busiest_station(&self.graph) {
            out.push_str(&format!(
                "\nBusiest station: {} with {} neighbors",
                self.display_name(id),
                degree
            ));
        }
        out
    }

    fn display_name(&self, id: StationId) -> String {
        self.stations
            .get(&id)
            .map_or_else(|| id.to_string(), |s| format!("{} ({})", id, s.name))
    }

    fn route(&self, src: StationId, dst: StationId) -> String {
        for id in [src, dst] {
            if !self.stations.contains_key(&id) {
                return format!("Unknown station {id}. Use `info` to see the network size.");
            }
        }

        let mut dijkstra = Dijkstra::new(&self.graph);
        match dijkstra.search(src, dst) {
            Ok(sp) => format!(
                "{}\nTook: {:?}",
                RouteReport::new(&sp, &self.graph, &self.stations),
                dijkstra.stats.duration.unwrap_or_default()
            ),
            Err(e) => e.to_string(),
        }
    }

    fn distance(&self, a: StationId, b: StationId) -> String {
        match (self.stations.get(&a), self.stations.get(&b)) {
            (Some(sa), Some(sb)) => format!(
                "{} -> {}: {:.2} km",
                sa.name,
                sb.name,
                haversine(sa.lat, sa.lon, sb.lat, sb.lon)
            ),
            (None, _) => format!("Unknown station {a}"),
            (_, None) => format!("Unknown station {b}"),
        }
    }

    fn measure(&self, n: usize) -> String {
        let ids: Vec<StationId> = self.graph.stations().collect();
        if ids.is_empty() {
            return "Graph is empty".to_string();
        }

        let mut rng = rand::thread_rng();
        let mut res = String::new();
        for _ in 0..n {
            let (Some(&src), Some(&dst)) = (ids.choose(&mut rng), ids.choose(&mut rng)) else {
                continue;
            };
            let mut dijkstra = Dijkstra::new(&self.graph);
            match dijkstra.search(src, dst) {
                Ok(sp) => res.push_str(&format!(
                    "{} -> {}: {:.2} km, {}\n",
                    src, dst, sp.weight, dijkstra.stats
                )),
                Err(e) => res.push_str(&format!("{} -> {}: {}\n", src, dst, e)),
            }
        }
        res
    }
}

/// Print graph info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(context.info()))
}

fn run_dijkstra(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let src = *args.get_one::<StationId>("src").unwrap();
    let dst = *args.get_one::<StationId>("dst").unwrap();

    Ok(Some(context.route(src, dst)))
}

fn run_distance(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let a = *args.get_one::<StationId>("a").unwrap();
    let b = *args.get_one::<StationId>("b").unwrap();

    Ok(Some(context.distance(a, b)))
}

fn measure_dijkstra(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let n = *args.get_one::<usize>("n").unwrap_or(&10);

    Ok(Some(context.measure(n)))
}

fn load(stations: &Path, connections: &Path) -> anyhow::Result<Context> {
    let stations = loader::load_stations(stations)?;
    let connections = loader::load_connections(connections)?;
    let graph = Graph::build(&stations, &connections).context("Failed to build graph")?;
    Ok(Context::new(stations, graph))
}

fn station_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .value_parser(value_parser!(StationId))
        .required(true)
        .help(help)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (Some(stations), Some(connections)) = (args.next(), args.next()) else {
        return Err(anyhow!("Usage: repl <stations.csv> <connections.csv>"));
    };
    let context = load(Path::new(&stations), Path::new(&connections))?;

    let mut repl = Repl::new(context)
        .with_name("Metro")
        .with_version("v0.1.0")
        .with_description("Simple REPL to find routes in a metro network")
        .with_banner("Welcome to Metro")
        .with_history(PathBuf::from(r".\history"), 100)
        .with_command(Command::new("info").about("Print network info"), info)
        .with_command(
            Command::new("route")
                .arg(station_arg("src", "ID of start station"))
                .arg(station_arg("dst", "ID of destination station"))
                .about("Calculate shortest route using Dijkstra's algorithm"),
            run_dijkstra,
        )
        .with_command(
            Command::new("dist")
                .arg(station_arg("a", "ID of first station"))
                .arg(station_arg("b", "ID of second station"))
                .about("Great-circle distance between two stations"),
            run_distance,
        )
        .with_command(
            Command::new("routem")
                .arg(
                    Arg::new("n")
                        .value_parser(value_parser!(usize))
                        .required(false)
                        .help("Number of random routes to calculate"),
                )
                .about("Measure `n` random shortest route calculations"),
            measure_dijkstra,
        );

    repl.run().map_err(|e| anyhow!("{e:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> Context {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../metro_core/test_data");
        load(&dir.join("stations.csv"), &dir.join("connections.csv")).unwrap()
    }

    #[test]
    fn info_lists_sizes() {
        let out = context().info();
        assert!(out.starts_with("Network has 6 stations (5 connected) and 5 edges"), "{out}");
    }

    #[test]
    fn route_reports_path() {
        let out = context().route(1, 4);
        assert!(out.starts_with("Shortest path between Hauptbahnhof and Berg am Laim:"), "{out}");
        assert!(out.contains("Total distance:"), "{out}");
    }

    #[test]
    fn route_reports_errors() {
        let ctx = context();
        assert!(ctx.route(1, 42).starts_with("Unknown station 42"));
        assert_eq!(ctx.route(6, 1), "station 6 is not part of the network");
    }

    #[test]
    fn distance_between_stations() {
        let ctx = context();
        assert!(ctx.distance(1, 2).starts_with("Hauptbahnhof -> Marienplatz: "));
        assert_eq!(ctx.distance(1, 42), "Unknown station 42");
    }

    #[test]
    fn measure_runs_queries() {
        let out = context().measure(3);
        assert_eq!(out.lines().count(), 3);
    }
}
