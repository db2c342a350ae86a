use std::path::PathBuf;

use clap::Parser;

use crate::constants::StationId;

#[derive(Parser)]
#[command(author = "Daniel Holzner", version, about, long_about = None)]
struct Cli {
    /// Path to the station .csv file (id,latitude,longitude,name,...)
    stations: PathBuf,

    /// Path to the line definition .csv file (station1,station2,line)
    connections: PathBuf,

    /// ID of the start station
    start: StationId,

    /// ID of the destination station
    end: StationId,

    /// Only print the total distance
    #[arg(short, long, default_value = "false")]
    quiet: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cfg {
    pub stations: PathBuf,
    pub connections: PathBuf,
    pub start: StationId,
    pub end: StationId,
    pub quiet: bool,
}

fn to_cfg(cli: Cli) -> Cfg {
    Cfg {
        stations: cli.stations,
        connections: cli.connections,
        start: cli.start,
        end: cli.end,
        quiet: cli.quiet,
    }
}

pub fn parse() -> Cfg {
    to_cfg(Cli::parse())
}

pub fn try_parse_from<I, T>(args: I) -> Result<Cfg, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args).map(to_cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_query() {
        let cfg = try_parse_from(["route", "s.csv", "c.csv", "3", "17"]).unwrap();
        assert_eq!(
            cfg,
            Cfg {
                stations: PathBuf::from("s.csv"),
                connections: PathBuf::from("c.csv"),
                start: 3,
                end: 17,
                quiet: false,
            }
        );

        let cfg = try_parse_from(["route", "s.csv", "c.csv", "3", "17", "-q"]).unwrap();
        assert!(cfg.quiet);
    }

    #[test]
    fn rejects_bad_ids() {
        assert!(try_parse_from(["route", "s.csv", "c.csv", "three", "17"]).is_err());
        assert!(try_parse_from(["route", "s.csv", "c.csv", "-1", "17"]).is_err());
        assert!(try_parse_from(["route", "s.csv", "c.csv", "3"]).is_err());
    }
}
