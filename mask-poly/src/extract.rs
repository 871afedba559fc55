use crate::polygon::Polygon;
use image::{GrayImage, ImageBuffer, Luma};
use imageproc::{contours, geometry};
use std::collections::BTreeSet;

/// A 16-bit label mask. Pixel value 0 is background, any other value
/// identifies an object instance.
pub type LabelImage = ImageBuffer<Luma<u16>, Vec<u16>>;

/// Distinct non-zero label values present in `mask`, ascending.
pub fn mask_labels(mask: &LabelImage) -> Vec<u16> {
    let labels: BTreeSet<u16> = mask
        .pixels()
        .map(|pixel| pixel.0[0])
        .filter(|&value| value != 0)
        .collect();
    labels.into_iter().collect()
}

/// Binary mask selecting exactly the pixels carrying `label`.
pub fn isolate_label(mask: &LabelImage, label: u16) -> GrayImage {
    GrayImage::from_fn(mask.width(), mask.height(), |x, y| {
        if mask.get_pixel(x, y).0[0] == label {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

/// Boundary polygons of all connected foreground regions of a binary
/// mask, hole boundaries included. The full contour hierarchy is
/// traversed but only the shapes are kept.
///
/// Contours that cannot bound an area are dropped. A positive `epsilon`
/// enables Douglas-Peucker point reduction with that tolerance; 0 keeps
/// every traced boundary pixel.
pub fn extract_polygons(mask: &GrayImage, epsilon: f64) -> Vec<Polygon> {
    contours::find_contours::<i32>(mask)
        .into_iter()
        .filter_map(|contour| {
            let points = if epsilon > 0.0 {
                geometry::approximate_polygon_dp(&contour.points, epsilon, true)
            } else {
                contour.points
            };
            Polygon::new(points)
        })
        .collect()
}
