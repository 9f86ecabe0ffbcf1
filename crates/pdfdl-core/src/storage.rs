//! Output directory and file handling.

use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::DownloadError;

/// Permissions for created directories (owner rwx, group/other rx).
#[cfg(unix)]
const DIR_MODE: u32 = 0o755;

/// Creates `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_output_dir(dir: &Path) -> Result<(), DownloadError> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder.create(dir).map_err(|source| DownloadError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Creates (or truncates) `dir/filename` and copies `body` into it.
///
/// Returns the written path and byte count. On a copy failure the partially
/// written file is left in place.
pub fn write_output<R: Read>(
    dir: &Path,
    filename: &str,
    body: &mut R,
) -> Result<(PathBuf, u64), DownloadError> {
    let path = dir.join(filename);
    let file = File::create(&path).map_err(|source| DownloadError::CreateFile {
        path: path.clone(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    let written = io::copy(body, &mut writer)
        .and_then(|n| writer.flush().map(|()| n))
        .map_err(|source| DownloadError::Write {
            path: path.clone(),
            source,
        })?;

    Ok((path, written))
}
