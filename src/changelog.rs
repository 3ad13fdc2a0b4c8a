//! Changelog file output.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::core::{CommitSource, DisplayLine, TitleLookup, fetch_commits, resolve};
use crate::error::SanitizeError;

/// Compare `base` with `head`, resolve every commit and write the changelog to
/// `path`.
///
/// The file is only created once every line is resolved: an empty comparison
/// or a failed lookup leaves any existing file at `path` untouched.
pub fn generate_changelog<S, L>(
    source: &S,
    lookup: &L,
    base: &str,
    head: &str,
    path: &Path,
) -> Result<Vec<DisplayLine>, SanitizeError>
where
    S: CommitSource + ?Sized,
    L: TitleLookup + ?Sized,
{
    let commits = fetch_commits(source, base, head)?;
    let lines = resolve(&commits, lookup)?;
    write_changelog(&lines, path)?;
    Ok(lines)
}

/// Write every line to `writer`, each followed by a newline.
pub fn write_lines_to<W: Write>(lines: &[DisplayLine], writer: &mut W) -> io::Result<()> {
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()
}

/// Create (or truncate) the file at `path` and write the changelog into it.
///
/// Callers must only invoke this once every line is resolved, so a failed run
/// never leaves a truncated changelog behind.
pub fn write_changelog(lines: &[DisplayLine], path: &Path) -> Result<(), SanitizeError> {
    let to_write_error = |source| SanitizeError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_write_error)?;
    let mut writer = BufWriter::new(file);
    write_lines_to(lines, &mut writer).map_err(to_write_error)
}
