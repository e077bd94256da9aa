//! Client data as it arrives from the registry.

use crate::point::Point;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// A location paired with the identifier of the client found there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientPoint<Id> {
    pub id: Id,
    pub point: Point,
}

impl<Id> ClientPoint<Id> {
    /// Create a new client point.
    pub fn new(id: Id, point: Point) -> Self {
        ClientPoint { id, point }
    }
}

/// A client record in the registry's JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// Location, if one has been recorded
    #[serde(default)]
    pub coordinates: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl ClientRecord {
    /// Create a record with only the fields routing cares about.
    pub fn new(id: impl Into<String>, name: impl Into<String>, coordinates: Option<Point>) -> Self {
        ClientRecord {
            id: id.into(),
            name: name.into(),
            email: String::new(),
            phone: String::new(),
            coordinates,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Pair every located record with its index in `records`.
///
/// Records without coordinates are skipped.
pub fn locate_records(records: &[ClientRecord]) -> Vec<ClientPoint<usize>> {
    records
        .iter()
        .enumerate()
        .filter_map(|(idx, record)| {
            record
                .coordinates
                .map(|point| ClientPoint::new(idx, point))
        })
        .collect()
}

/// Load client records from a JSON array file.
pub fn load_clients<P: AsRef<Path>>(path: P) -> io::Result<Vec<ClientRecord>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    parse_clients(reader)
}

/// Parse client records from any JSON reader.
pub fn parse_clients<R: io::Read>(reader: R) -> io::Result<Vec<ClientRecord>> {
    serde_json::from_reader(reader).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
