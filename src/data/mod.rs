/// Data layer: core types, loading, and feature extraction.
///
/// Architecture:
/// ```text
///  data/hr_stars.txt
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Catalog
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Catalog   │  Vec<Star>, fixed column layout
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ features  │  color index + absolute magnitude → DiagramSeries
///   └──────────┘
/// ```

pub mod features;
pub mod loader;
pub mod model;
