//! File boundary: read changelog and template, write the help page.
//!
//! Output is rendered entirely in memory and committed with a
//! tempfile + rename, so the destination is either fully replaced or left
//! untouched.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info, instrument};

use crate::error::{Error, Result};
use crate::options::Options;
use crate::parser::Report;

/// Where the generated page goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    /// `-` means stdout, anything else is a file path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdout
        } else {
            Self::File(PathBuf::from(arg))
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("<stdout>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// One generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub changelog: PathBuf,
    pub template: PathBuf,
    pub output: Destination,
}

/// Generate the changelog page described by `job`.
///
/// Nothing is written unless every input was read and the template is valid.
#[instrument(skip_all, fields(changelog = %job.changelog.display(), output = %job.output))]
pub fn generate(job: &Job, options: &Options) -> Result<Report> {
    let changelog = read_input(&job.changelog)?;
    let template = read_input(&job.template)?;

    let generated = crate::to_html_with_options(&changelog, &template, options)?;

    match &job.output {
        Destination::Stdout => write_stdout(&generated.html)?,
        Destination::File(path) => commit(path, &generated.html)?,
    }

    let report = generated.report;
    info!(
        versions = report.versions,
        items = report.list_items(),
        warnings = report.warnings,
        "changelog generated"
    );
    Ok(report)
}

fn read_input(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "reading");
    fs::read_to_string(path).map_err(|source| Error::io(path, source))
}

fn write_stdout(html: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(html.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|source| Error::io("<stdout>", source))
}

/// Replace `path` atomically with `html`.
fn commit(path: &Path, html: &str) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp_file =
        NamedTempFile::new_in(parent_dir).map_err(|source| Error::io(parent_dir, source))?;
    temp_file
        .write_all(html.as_bytes())
        .and_then(|()| temp_file.flush())
        .map_err(|source| Error::io(temp_file.path(), source))?;

    debug!(path = %path.display(), "persisting output atomically");
    temp_file.persist(path).map_err(|source| Error::Persist {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_from_arg() {
        assert_eq!(Destination::from_arg("-"), Destination::Stdout);
        assert_eq!(
            Destination::from_arg("out/changelog.html"),
            Destination::File(PathBuf::from("out/changelog.html"))
        );
    }

    #[test]
    fn test_destination_display() {
        assert_eq!(Destination::Stdout.to_string(), "<stdout>");
        assert_eq!(Destination::from_arg("a.html").to_string(), "a.html");
    }
}
