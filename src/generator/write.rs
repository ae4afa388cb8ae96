use std::fs;
use std::io;
use std::path::Path;

/// Write `contents` to `path` unless something already exists there.
///
/// Returns `Ok(true)` when the file was created and `Ok(false)` when a file
/// was already present — the existing file is left byte-for-byte untouched,
/// so regenerating never clobbers hand-edited output. Any create or write
/// failure is an error the pipeline treats as fatal.
pub fn write_if_absent(path: &Path, contents: &[u8]) -> io::Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    fs::write(path, contents)?;
    Ok(true)
}
