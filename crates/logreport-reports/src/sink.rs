//! Output sink.

use std::io::Write;
use std::path::Path;

use logreport_core::EmitError;

/// Write the rendered artifact to `destination`, or to standard
/// output when no destination is given.
///
/// The artifact arrives fully rendered. The file handle is closed
/// on every exit path.
pub fn write(text: &str, destination: Option<&Path>) -> Result<(), EmitError> {
    match destination {
        Some(path) => std::fs::write(path, text)?,
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(text.as_bytes())?;
            handle.flush()?;
        }
    }
    Ok(())
}
