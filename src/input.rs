//! Data mapping input.

use std::io::Read;
use std::path::Path;

use logreport_core::{DataSet, EmitError};

/// Load the data mapping from a JSON file, or from standard input
/// when no path is given.
///
/// The mapping is a JSON object from series key to an array of rows,
/// each row an array of scalars, exactly as the upstream log-parsing
/// step emits it.
pub fn load_data(path: Option<&Path>) -> Result<DataSet, EmitError> {
    let text = match path {
        Some(path) => {
            std::fs::read_to_string(path).map_err(|source| EmitError::DataRead {
                path: path.to_path_buf(),
                source,
            })?
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    serde_json::from_str(&text).map_err(|e| EmitError::DataParse(e.to_string()))
}
