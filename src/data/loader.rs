use std::path::Path;

use anyhow::{bail, Context, Result};
use thiserror::Error;

use super::model::{Catalog, Star, TableLayout};

// ---------------------------------------------------------------------------
// Load options
// ---------------------------------------------------------------------------

/// Fixed relative path of the input catalog.
pub const CATALOG_PATH: &str = "data/hr_stars.txt";

/// What to do with a row whose field count does not match the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedRows {
    /// Drop the row and keep going.
    #[default]
    Skip,
    /// Abort the whole load with a row-numbered error.
    Fail,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    pub layout: TableLayout,
    pub malformed: MalformedRows,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a star catalog from a whitespace-delimited text file.
///
/// Expected layout:
/// * first line – header, skipped unconditionally
/// * each further non-blank line – exactly `layout.fields` whitespace-
///   separated tokens
///
/// A token that does not parse as a finite number becomes `None` in the
/// resulting [`Star`]; a row with the wrong token count is dropped (or, with
/// [`MalformedRows::Fail`], aborts the load). Only an unreadable file is a
/// hard error.
pub fn load_catalog(path: &Path, options: &LoadOptions) -> Result<Catalog> {
    options
        .layout
        .validate()
        .with_context(|| format!("invalid column layout {:?}", options.layout))?;

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading star catalog {}", path.display()))?;

    let mut stars = Vec::new();
    let mut skipped = 0usize;

    // Lines are numbered from 1; the header is line 1.
    for (line_no, line) in text.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        match parse_row(line, &options.layout) {
            Ok(star) => stars.push(star),
            Err(e) => match options.malformed {
                MalformedRows::Skip => {
                    log::debug!("line {}: {e}, row dropped", line_no + 1);
                    skipped += 1;
                }
                MalformedRows::Fail => {
                    return Err(e).with_context(|| format!("line {}", line_no + 1));
                }
            },
        }
    }

    if skipped > 0 {
        log::info!("{skipped} malformed rows dropped from {}", path.display());
    }

    Ok(Catalog::from_stars(stars))
}

// ---------------------------------------------------------------------------
// Row parsing
// ---------------------------------------------------------------------------

/// Parse one catalog line into a [`Star`] according to `layout`.
fn parse_row(line: &str, layout: &TableLayout) -> std::result::Result<Star, RowError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    if tokens.len() != layout.fields {
        return Err(RowError::FieldCount {
            expected: layout.fields,
            found: tokens.len(),
        });
    }

    Ok(Star {
        vmag: parse_field(tokens[layout.vmag]),
        plx: parse_field(tokens[layout.plx]),
        b_v: parse_field(tokens[layout.b_v]),
    })
}

/// A field is present only when it parses as a finite number; `nan`, `inf`
/// and non-numeric tokens all count as missing.
fn parse_field(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Convenience wrapper used by `main`: load from [`CATALOG_PATH`] with the
/// default layout and tolerance.
pub fn load_default_catalog() -> Result<Catalog> {
    let catalog = load_catalog(Path::new(CATALOG_PATH), &LoadOptions::default())?;
    if catalog.is_empty() {
        bail!("catalog {CATALOG_PATH} contains no readable rows");
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_catalog(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp catalog");
        file.write_all(contents.as_bytes()).expect("write catalog");
        file
    }

    #[test]
    fn header_is_skipped_and_rows_parsed() {
        let file = write_catalog("id Vmag RA Dec Plx B-V\n1 5.0 10.0 20.0 100.0 0.5\n");
        let catalog = load_catalog(file.path(), &LoadOptions::default()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.stars[0].vmag, Some(5.0));
        assert_eq!(catalog.stars[0].plx, Some(100.0));
        assert_eq!(catalog.stars[0].b_v, Some(0.5));
    }

    #[test]
    fn short_row_is_dropped_without_error() {
        let file = write_catalog(
            "id Vmag RA Dec Plx B-V\n\
             1 5.0 10.0 20.0 100.0 0.5\n\
             2 6.0 11.0\n\
             3 7.0 12.0 22.0 50.0 1.1\n",
        );
        let catalog = load_catalog(file.path(), &LoadOptions::default()).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn short_row_aborts_when_tolerance_is_fail() {
        let file = write_catalog("id Vmag RA Dec Plx B-V\n2 6.0 11.0\n");
        let options = LoadOptions {
            malformed: MalformedRows::Fail,
            ..LoadOptions::default()
        };
        let err = load_catalog(file.path(), &options).unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err:#}");
    }

    #[test]
    fn unparseable_field_becomes_none() {
        let file = write_catalog("id Vmag RA Dec Plx B-V\n1 5.0 10.0 20.0 nan x\n");
        let catalog = load_catalog(file.path(), &LoadOptions::default()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.stars[0].vmag, Some(5.0));
        assert_eq!(catalog.stars[0].plx, None);
        assert_eq!(catalog.stars[0].b_v, None);
    }

    #[test]
    fn blank_lines_are_ignored() {
        let file = write_catalog("id Vmag RA Dec Plx B-V\n\n1 5.0 10.0 20.0 100.0 0.5\n\n");
        let catalog = load_catalog(file.path(), &LoadOptions::default()).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn missing_file_is_a_hard_error() {
        let err = load_catalog(Path::new("no/such/catalog.txt"), &LoadOptions::default())
            .unwrap_err();
        assert!(err.to_string().contains("no/such/catalog.txt"));
    }

    #[test]
    fn invalid_layout_is_a_hard_error() {
        let file = write_catalog("id Vmag\n1 5.0\n");
        let options = LoadOptions {
            layout: TableLayout {
                fields: 2,
                vmag: 1,
                plx: 4,
                b_v: 1,
            },
            ..LoadOptions::default()
        };
        assert!(load_catalog(file.path(), &options).is_err());
    }
}
