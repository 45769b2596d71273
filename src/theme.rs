use eframe::egui::Color32;

// ---------------------------------------------------------------------------
// Fixed presentation palette
// ---------------------------------------------------------------------------

/// Figure and plot background.
pub const BACKGROUND: Color32 = Color32::BLACK;

/// Title and axis-label text, a soft teal.
pub const ACCENT: Color32 = Color32::from_rgb(0x8a, 0xb9, 0xb5);

/// Axis tick labels, a warm grey.
pub const AXIS: Color32 = Color32::from_rgb(0xc8, 0xc2, 0xae);

/// Data points, bright cyan.
pub const MARKER: Color32 = Color32::from_rgb(0x34, 0xe4, 0xea);

/// Title font size in points.
pub const TITLE_SIZE: f32 = 30.0;

/// Axis label font size in points.
pub const LABEL_SIZE: f32 = 16.0;

/// Scatter marker radius.
pub const MARKER_RADIUS: f32 = 1.5;
