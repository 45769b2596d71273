use super::model::{Catalog, Star};

// ---------------------------------------------------------------------------
// Per-star quantities
// ---------------------------------------------------------------------------

/// B−V color index of a star: the stored catalog value, unchanged.
pub fn color_index(star: &Star) -> Option<f64> {
    star.b_v
}

/// Absolute magnitude from apparent magnitude and parallax:
///
/// ```text
/// M = Vmag + 5 · log10(Plx / 100)      (Plx in milliarcseconds)
/// ```
///
/// Undefined when either input is missing or the parallax is not positive;
/// such stars get no point in the diagram.
pub fn absolute_magnitude(star: &Star) -> Option<f64> {
    let vmag = star.vmag?;
    let plx = star.plx?;
    if plx <= 0.0 {
        return None;
    }
    Some(vmag + 5.0 * (plx / 100.0).log10())
}

// ---------------------------------------------------------------------------
// DiagramSeries – the two parallel plot arrays
// ---------------------------------------------------------------------------

/// The derived scatter data: `x[i]` and `y[i]` describe the same star.
/// Both vectors always have the catalog's length; `None` marks a value the
/// renderer skips.
#[derive(Debug, Clone, Default)]
pub struct DiagramSeries {
    /// Color index (B−V) per star.
    pub x: Vec<Option<f64>>,
    /// Absolute magnitude per star.
    pub y: Vec<Option<f64>>,
}

impl DiagramSeries {
    /// Number of stars (defined or not).
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the series holds no stars at all.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate over the `[color index, absolute magnitude]` pairs where both
    /// coordinates are defined.
    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.x
            .iter()
            .zip(self.y.iter())
            .filter_map(|(x, y)| Some([(*x)?, (*y)?]))
    }

    /// Number of stars that actually end up in the diagram.
    pub fn plottable(&self) -> usize {
        self.points().count()
    }
}

/// Apply both per-star functions to every catalog row.
pub fn diagram_series(catalog: &Catalog) -> DiagramSeries {
    DiagramSeries {
        x: catalog.stars.iter().map(color_index).collect(),
        y: catalog.stars.iter().map(absolute_magnitude).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star(vmag: f64, plx: f64, b_v: f64) -> Star {
        Star {
            vmag: Some(vmag),
            plx: Some(plx),
            b_v: Some(b_v),
        }
    }

    #[test]
    fn color_index_is_the_stored_value() {
        assert_eq!(color_index(&star(5.0, 100.0, 0.5)), Some(0.5));
        assert_eq!(color_index(&star(5.0, 100.0, -0.21)), Some(-0.21));
    }

    #[test]
    fn absolute_magnitude_matches_distance_modulus() {
        // Plx = 100 mas is the 10 pc reference distance: M = Vmag.
        assert_eq!(absolute_magnitude(&star(5.0, 100.0, 0.0)), Some(5.0));

        let m = absolute_magnitude(&star(0.0, 10.0, 0.0)).unwrap();
        assert!((m - -5.0).abs() < 1e-12, "got {m}");
    }

    #[test]
    fn non_positive_parallax_is_undefined() {
        assert_eq!(absolute_magnitude(&star(5.0, 0.0, 0.0)), None);
        assert_eq!(absolute_magnitude(&star(5.0, -2.5, 0.0)), None);
    }

    #[test]
    fn missing_inputs_are_undefined() {
        let no_vmag = Star {
            vmag: None,
            plx: Some(100.0),
            b_v: Some(0.5),
        };
        let no_plx = Star {
            vmag: Some(5.0),
            plx: None,
            b_v: Some(0.5),
        };
        assert_eq!(absolute_magnitude(&no_vmag), None);
        assert_eq!(absolute_magnitude(&no_plx), None);
        assert_eq!(color_index(&no_vmag), Some(0.5));
    }

    #[test]
    fn series_stays_parallel_to_the_catalog() {
        let catalog = Catalog::from_stars(vec![
            star(5.0, 100.0, 0.5),
            star(0.0, 10.0, 1.2),
            star(3.0, -1.0, 0.8), // undefined magnitude, still occupies a slot
        ]);
        let series = diagram_series(&catalog);

        assert_eq!(series.len(), catalog.len());
        assert_eq!(series.x.len(), series.y.len());
        assert_eq!(series.plottable(), 2);
        assert_eq!(series.x[2], Some(0.8));
        assert_eq!(series.y[2], None);
    }
}
