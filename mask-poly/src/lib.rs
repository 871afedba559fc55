//! Boundary polygon extraction from label masks.
//!
//! A label mask is a grayscale image whose pixel value identifies the
//! object instance a pixel belongs to, with 0 reserved for background.
//! This crate isolates single labels into binary masks and traces the
//! boundary polygons of their connected foreground regions.

mod extract;
mod polygon;

pub use extract::{extract_polygons, isolate_label, mask_labels, LabelImage};
pub use polygon::Polygon;
