use crate::{
    connection,
    graph::{Connection, Graph, Station, StationRegistry},
    station,
};

pub fn registry(stations: Vec<Station>) -> StationRegistry {
    stations.into_iter().map(|s| (s.id, s)).collect()
}

/// Three stations on the equator, one degree apart
///
/// A(1) - B(2) - C(3)
pub fn stations_abc() -> StationRegistry {
    registry(vec![
        station!(1, 0.0, 0.0, "A"),
        station!(2, 0.0, 1.0, "B"),
        station!(3, 0.0, 2.0, "C"),
    ])
}

/// Eleven stations spread over a few degrees, served by four lines
pub fn generate_complex_network() -> (StationRegistry, Vec<Connection>) {
    let stations = registry(vec![
        station!(0, 6.0, 2.0, "A"),
        station!(1, 3.0, 3.0, "B"),
        station!(2, 4.0, 6.0, "C"),
        station!(3, 2.0, 7.0, "D"),
        station!(4, 3.0, 10.0, "E"),
        station!(5, 2.0, 13.0, "F"),
        station!(6, 7.0, 15.0, "G"),
        station!(7, 5.0, 12.0, "H"),
        station!(8, 7.0, 11.0, "I"),
        station!(9, 5.0, 9.0, "J"),
        station!(10, 7.0, 7.0, "K"),
    ]);

    let connections = vec![
        connection!(0, 1; 1),  // A <=> B
        connection!(0, 2; 2),  // A <=> C
        connection!(0, 10; 3), // A <=> K
        connection!(1, 3; 1),  // B <=> D
        connection!(1, 2; 4),  // B <=> C
        connection!(2, 3; 2),  // C <=> D
        connection!(2, 9; 4),  // C <=> J
        connection!(3, 9; 3),  // D <=> J
        connection!(3, 4; 1),  // D <=> E
        connection!(4, 9; 2),  // E <=> J
        connection!(4, 5; 1),  // E <=> F
        connection!(5, 7; 2),  // F <=> H
        connection!(5, 6; 1),  // F <=> G
        connection!(6, 7; 4),  // G <=> H
        connection!(6, 8; 3),  // G <=> I
        connection!(7, 8; 4),  // H <=> I
        connection!(7, 9; 2),  // H <=> J
        connection!(8, 9; 3),  // I <=> J
        connection!(8, 10; 3), // I <=> K
        connection!(9, 10; 4), // J <=> K
    ];

    (stations, connections)
}

pub fn complex_graph() -> Graph {
    let (stations, connections) = generate_complex_network();
    Graph::build(&stations, &connections).unwrap()
}

/// Two lines without a transfer station
///
/// 1 - 2 - 3
/// 4 - 5 - 6
pub fn generate_disconnected_network() -> (StationRegistry, Vec<Connection>) {
    let stations = registry(vec![
        station!(1, 48.10, 11.50),
        station!(2, 48.11, 11.52),
        station!(3, 48.12, 11.55),
        station!(4, 48.20, 11.50),
        station!(5, 48.21, 11.52),
        station!(6, 48.22, 11.55),
    ]);
    let connections = vec![
        connection!(1, 2; 1),
        connection!(2, 3; 1),
        connection!(4, 5; 2),
        connection!(5, 6; 2),
    ];

    (stations, connections)
}
