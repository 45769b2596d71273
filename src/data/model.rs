use thiserror::Error;

// ---------------------------------------------------------------------------
// TableLayout – column schema of the input catalog
// ---------------------------------------------------------------------------

/// Column positions of the fields the pipeline consumes, plus the total
/// field count a valid row must have. Kept as data rather than hard-coded
/// offsets so a catalog with extra columns only needs a different layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    /// Number of whitespace-separated fields per row.
    pub fields: usize,
    /// Apparent visual magnitude (Vmag) column.
    pub vmag: usize,
    /// Parallax column, in milliarcseconds.
    pub plx: usize,
    /// B−V color index column.
    pub b_v: usize,
}

impl Default for TableLayout {
    /// Layout of the shipped catalog: `id Vmag RA Dec Plx B-V`.
    fn default() -> Self {
        TableLayout {
            fields: 6,
            vmag: 1,
            plx: 4,
            b_v: 5,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("column index {index} out of range for a {fields}-field layout")]
    ColumnOutOfRange { index: usize, fields: usize },
}

impl TableLayout {
    /// Check that every consumed column fits inside the field count.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for index in [self.vmag, self.plx, self.b_v] {
            if index >= self.fields {
                return Err(LayoutError::ColumnOutOfRange {
                    index,
                    fields: self.fields,
                });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Star – one catalog row
// ---------------------------------------------------------------------------

/// A single star (one row of the source catalog).
///
/// Fields the pipeline never reads are not carried. A field is `None` when
/// the input token held no numeric value (empty, `nan`, or otherwise
/// unparseable) – no NaN sentinel travels downstream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Apparent visual magnitude (Vmag).
    pub vmag: Option<f64>,
    /// Parallax in milliarcseconds (Plx).
    pub plx: Option<f64>,
    /// B−V color index.
    pub b_v: Option<f64>,
}

// ---------------------------------------------------------------------------
// Catalog – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed catalog, one `Star` per accepted input row.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub stars: Vec<Star>,
}

impl Catalog {
    pub fn from_stars(stars: Vec<Star>) -> Self {
        Catalog { stars }
    }

    /// Number of stars.
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}
