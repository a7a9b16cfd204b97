//! File-path entry point.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use enough::Unstoppable;

use crate::error::ScaleError;
use crate::factor::ScaleFactor;
use crate::io::{IoSink, IoSource};
use crate::scale::{ScaleOutput, ScaleRequest};

/// Scale the BMP at `input` into a new file at `output`.
///
/// `input` and `output` must be different files; the input is never opened
/// for writing. On any later error the output file is removed, so a failed
/// call never leaves something that looks like a valid image.
pub fn scale_file(
    factor: ScaleFactor,
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<ScaleOutput, ScaleError> {
    let (input, output) = (input.as_ref(), output.as_ref());

    let file = File::open(input)
        .map_err(|e| ScaleError::SourceUnreadable(format!("{}: {e}", input.display())))?;
    let mut source = IoSource::new(file);

    if same_file(input, output) {
        return Err(ScaleError::DestinationUnwritable(format!(
            "{} is the input file",
            output.display()
        )));
    }
    let file = File::create(output)
        .map_err(|e| ScaleError::DestinationUnwritable(format!("{}: {e}", output.display())))?;
    let mut sink = IoSink::new(BufWriter::new(file));

    let result = ScaleRequest::new(factor)
        .scale(&mut source, &mut sink, Unstoppable)
        .and_then(|out| sink.flush().map(|()| out));
    drop(sink);

    if let Err(e) = &result {
        log::warn!("removing incomplete {}: {e}", output.display());
        if let Err(rm) = std::fs::remove_file(output) {
            log::warn!("could not remove {}: {rm}", output.display());
        }
    }
    result
}

/// Whether both paths name the same existing file, through links included.
fn same_file(a: &Path, b: &Path) -> bool {
    if let (Ok(a), Ok(b)) = (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        if a == b {
            return true;
        }
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        if let (Ok(a), Ok(b)) = (std::fs::metadata(a), std::fs::metadata(b)) {
            return a.dev() == b.dev() && a.ino() == b.ino();
        }
    }
    false
}
