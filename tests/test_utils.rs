use serde::Deserialize;
use std::error::Error;

use greekbook::Side;

/// CSV row structure for position fixtures: symbol, quoted premium, side.
#[derive(Debug, Deserialize)]
pub struct PositionRow {
    pub symbol: String,
    pub price: f64,
    pub side: Side,
}

/// Load position fixtures from a CSV file.
#[allow(dead_code)] // each test binary compiles its own copy of this module
pub fn load_positions(file_path: &str) -> Result<Vec<PositionRow>, Box<dyn Error>> {
    let mut reader = csv::Reader::from_path(file_path)?;
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: PositionRow = result?;
        rows.push(row);
    }
    Ok(rows)
}
