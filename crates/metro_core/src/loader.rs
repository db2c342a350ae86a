//! Reads station and line definition records from CSV.
//!
//! Both files start with a header row. Station rows are
//! `id,latitude,longitude,name[,...]` where any trailing columns are ignored.
//! Connection rows are `station1,station2,line`.
use std::{fs::File, io::Read, path::Path, str::FromStr};

use anyhow::{bail, ensure, Context};
use log::{debug, info};

use crate::{
    constants::{LineId, StationId},
    graph::{Connection, Station, StationRegistry},
};

fn reader<R: Read>(rdr: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(rdr)
}

fn field<T>(record: &csv::StringRecord, idx: usize, name: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = record
        .get(idx)
        .with_context(|| format!("Missing column `{name}`"))?;
    raw.parse()
        .with_context(|| format!("Invalid {name}: {raw:?}"))
}

/// Parses station records from any reader.
///
/// Fails on malformed rows, coordinates outside of the valid range and
/// duplicate station ids.
pub fn read_stations<R: Read>(rdr: R) -> anyhow::Result<StationRegistry> {
    let mut stations = StationRegistry::default();

    for (i, result) in reader(rdr).records().enumerate() {
        let record = result.context("Failed to read station record")?;
        let line = i + 2;

        let id: StationId = field(&record, 0, "id").with_context(|| format!("Line {line}"))?;
        let lat: f64 = field(&record, 1, "latitude").with_context(|| format!("Line {line}"))?;
        let lon: f64 = field(&record, 2, "longitude").with_context(|| format!("Line {line}"))?;
        let name: String = field(&record, 3, "name").with_context(|| format!("Line {line}"))?;

        ensure!(
            (-90.0..=90.0).contains(&lat),
            "Line {line}: latitude {lat} of station {id} out of range"
        );
        ensure!(
            (-180.0..=180.0).contains(&lon),
            "Line {line}: longitude {lon} of station {id} out of range"
        );

        if stations.insert(id, Station::new(id, lat, lon, name)).is_some() {
            bail!("Line {line}: duplicate station id {id}");
        }
    }

    debug!("Read {} stations", stations.len());
    Ok(stations)
}

/// Parses connection records from any reader, keeping their order.
pub fn read_connections<R: Read>(rdr: R) -> anyhow::Result<Vec<Connection>> {
    let mut connections = Vec::new();

    for (i, result) in reader(rdr).deserialize().enumerate() {
        let (a, b, line): (StationId, StationId, LineId) =
            result.with_context(|| format!("Failed to parse connection on line {}", i + 2))?;
        connections.push(Connection::new(a, b, line));
    }

    debug!("Read {} connections", connections.len());
    Ok(connections)
}

pub fn load_stations(path: &Path) -> anyhow::Result<StationRegistry> {
    info!("Loading stations from {:?}", path);
    let file = File::open(path).with_context(|| format!("Could not open {path:?}"))?;
    read_stations(file).with_context(|| format!("Could not load stations from {path:?}"))
}

pub fn load_connections(path: &Path) -> anyhow::Result<Vec<Connection>> {
    info!("Loading connections from {:?}", path);
    let file = File::open(path).with_context(|| format!("Could not open {path:?}"))?;
    read_connections(file).with_context(|| format!("Could not load connections from {path:?}"))
}

#[cfg(test)]
mod tests {
    use crate::{graph::Graph, search::dijkstra::shortest_path};

    use super::*;

    fn test_data(file: &str) -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data").join(file)
    }

    #[test]
    fn read_from_csv() {
        let stations = load_stations(&test_data("stations.csv")).unwrap();
        let connections = load_connections(&test_data("connections.csv")).unwrap();

        assert_eq!(stations.len(), 6);
        assert_eq!(stations[&1].name, "Hauptbahnhof");
        assert_eq!(stations[&6].name, "Flughafen, Terminal 2");
        assert_eq!(connections.len(), 6);
        assert_eq!(connections[0], Connection::new(1, 2, 1));

        let g = Graph::build(&stations, &connections).unwrap();
        assert_eq!(g.num_stations(), 5);
        assert_eq!(g.num_replaced_connections(), 1);

        let sp = shortest_path(&g, 1, 4).unwrap();
        assert_eq!(sp.start(), Some(1));
        assert_eq!(sp.end(), Some(4));
        assert_eq!(
            shortest_path(&g, 6, 1).unwrap_err().to_string(),
            "station 6 is not part of the network"
        );
    }

    #[test]
    fn extra_columns_are_ignored() {
        let data = "id,lat,lon,name,a,b,c,d\n1,48.1,11.5,Foo,x,y,z,w\n2, 48.2 ,11.6,Bar\n";
        let stations = read_stations(data.as_bytes()).unwrap();

        assert_eq!(stations[&1], Station::new(1, 48.1, 11.5, "Foo"));
        assert_eq!(stations[&2], Station::new(2, 48.2, 11.6, "Bar"));
    }

    #[test]
    fn rejects_invalid_stations() {
        let out_of_range = "id,lat,lon,name\n1,91.0,11.5,Foo\n";
        let err = read_stations(out_of_range.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("latitude"), "{err:#}");

        let out_of_range = "id,lat,lon,name\n1,48.0,-181.0,Foo\n";
        assert!(read_stations(out_of_range.as_bytes()).is_err());

        let duplicate = "id,lat,lon,name\n1,48.0,11.0,Foo\n1,48.1,11.1,Bar\n";
        let err = read_stations(duplicate.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("duplicate"), "{err:#}");

        let garbage = "id,lat,lon,name\nx,48.0,11.0,Foo\n";
        assert!(read_stations(garbage.as_bytes()).is_err());

        let missing_name = "id,lat,lon,name\n1,48.0,11.0\n";
        let err = read_stations(missing_name.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("name"), "{err:#}");
    }

    #[test]
    fn rejects_invalid_connections() {
        let data = "station1,station2,line\n1,2,1\n2,three,1\n";
        let err = read_connections(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 3"), "{err:#}");
    }

    #[test]
    fn missing_file() {
        assert!(load_stations(&test_data("does_not_exist.csv")).is_err());
    }
}
