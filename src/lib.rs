pub mod app;
pub mod data;
pub mod theme;
pub mod ui;

pub use app::HrDiagramApp;
pub use data::features::DiagramSeries;
pub use data::model::{Catalog, Star, TableLayout};
