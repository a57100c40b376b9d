// crates/rwloc-core/src/loader/common_io.rs
use crate::error::{Result, RwLocError};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Opens a dataset file and returns a buffered reader over its JSON payload.
///
/// Files with a `gz` extension are wrapped in a gzip decoder, so callers
/// never care about compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => RwLocError::NotFound(format!("{}: {}", path.display(), e)),
        _ => RwLocError::Io(e),
    })?;

    let compressed = path.extension().is_some_and(|ext| ext == "gz");
    debug!(path = %path.display(), compressed, "Opening dataset");

    let reader = BufReader::new(file);

    if !compressed {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        Ok(Box::new(BufReader::new(GzDecoder::new(reader))))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(RwLocError::CompressionUnsupported(
            path.display().to_string(),
        ))
    }
}
