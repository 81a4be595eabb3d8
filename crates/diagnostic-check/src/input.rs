use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

/// Reads the whole message from `path`, or from stdin when `path` is `-`.
pub fn read_message(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut message = String::new();
        io::stdin()
            .read_to_string(&mut message)
            .context("failed to read message from stdin")?;
        debug!("read {} bytes from stdin", message.len());
        return Ok(message);
    }

    let message = fs::read_to_string(path)
        .with_context(|| format!("failed to read message from {}", path.display()))?;
    debug!("read {} bytes from {}", message.len(), path.display());
    Ok(message)
}
