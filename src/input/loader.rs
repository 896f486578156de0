//! Load wizard snapshots saved as JSON

use super::FinancialInput;
use crate::error::SimulatorError;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Load a single input snapshot from a JSON file
pub fn load_input<P: AsRef<Path>>(path: P) -> Result<FinancialInput, SimulatorError> {
    let file = File::open(path.as_ref())?;
    load_input_from_reader(BufReader::new(file))
}

/// Load a snapshot from any reader (e.g., stdin, network body)
pub fn load_input_from_reader<R: Read>(reader: R) -> Result<FinancialInput, SimulatorError> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn parse_input(json: &str) -> Result<FinancialInput, SimulatorError> {
    Ok(serde_json::from_str(json)?)
}

/// Load a JSON array of snapshots, one per business
pub fn load_inputs<P: AsRef<Path>>(path: P) -> Result<Vec<FinancialInput>, SimulatorError> {
    let file = File::open(path.as_ref())?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_object() {
        let input = parse_input("{}").expect("empty object is a valid snapshot");
        assert!(input.revenue_sources.is_empty());
        assert!(input.goals.is_empty());
    }

    #[test]
    fn test_reader_rejects_malformed_json() {
        let result = load_input_from_reader("{\"revenueSources\": [".as_bytes());
        assert!(matches!(result, Err(SimulatorError::Json(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_input("does/not/exist.json");
        assert!(matches!(result, Err(SimulatorError::Io(_))));
    }
}
