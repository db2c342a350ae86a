use anyhow::Context;
use log::info;
use metro_core::{loader, prelude::*, util::cli};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = cli::parse();

    let stations = loader::load_stations(&cfg.stations)?;
    let connections = loader::load_connections(&cfg.connections)?;

    let g = Graph::build(&stations, &connections).context("Failed to build graph")?;

    let mut dijkstra = Dijkstra::new(&g);
    let sp = dijkstra
        .search(cfg.start, cfg.end)
        .with_context(|| format!("No route from {} to {}", cfg.start, cfg.end))?;
    info!("{}", dijkstra.stats);

    if cfg.quiet {
        println!("{:.2}", sp.weight);
    } else {
        println!("{}", RouteReport::new(&sp, &g, &stations));
    }

    Ok(())
}
