use imageproc::point::Point;

/// A closed region boundary in pixel coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    points: Vec<Point<i32>>,
}

impl Polygon {
    /// Returns `None` when `points` has too few vertices to bound an
    /// area, which filters out degenerate point and line contours.
    pub fn new(points: Vec<Point<i32>>) -> Option<Self> {
        (points.len() > 2).then(|| Self { points })
    }

    pub fn points(&self) -> &[Point<i32>] {
        &self.points
    }

    /// Flattens the vertices to `[x1, y1, x2, y2, ...]`.
    pub fn flatten(&self) -> Vec<f64> {
        self.points
            .iter()
            .flat_map(|point| [f64::from(point.x), f64::from(point.y)])
            .collect()
    }

    /// Enclosed area by the shoelace formula.
    pub fn area(&self) -> f64 {
        let twice: i64 = (0..self.points.len())
            .map(|index| {
                let p = self.points[index];
                let q = self.points[(index + 1) % self.points.len()];
                i64::from(p.x) * i64::from(q.y) - i64::from(q.x) * i64::from(p.y)
            })
            .sum();
        twice.abs() as f64 / 2.0
    }

    /// Minimal pixel-aligned `[x, y, width, height]` covering all
    /// vertices. Width and height count pixels, so a vertical edge at
    /// x = 3..=5 spans width 3.
    pub fn bounding_rect(&self) -> [i32; 4] {
        let mut x_min = i32::MAX;
        let mut y_min = i32::MAX;
        let mut x_max = i32::MIN;
        let mut y_max = i32::MIN;

        for point in &self.points {
            x_min = x_min.min(point.x);
            y_min = y_min.min(point.y);
            x_max = x_max.max(point.x);
            y_max = y_max.max(point.y);
        }

        [x_min, y_min, x_max - x_min + 1, y_max - y_min + 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn points(coords: &[(i32, i32)]) -> Vec<Point<i32>> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn rejects_degenerate_input() {
        assert!(Polygon::new(points(&[])).is_none());
        assert!(Polygon::new(points(&[(1, 1)])).is_none());
        assert!(Polygon::new(points(&[(1, 1), (4, 1)])).is_none());
        assert!(Polygon::new(points(&[(1, 1), (4, 1), (4, 4)])).is_some());
    }

    #[test]
    fn shoelace_area_of_square() {
        let polygon = Polygon::new(points(&[(0, 0), (4, 0), (4, 4), (0, 4)])).unwrap();
        assert_abs_diff_eq!(polygon.area(), 16.0);
    }

    #[test]
    fn area_is_orientation_independent() {
        let clockwise = Polygon::new(points(&[(0, 0), (0, 4), (4, 4), (4, 0)])).unwrap();
        let counter = Polygon::new(points(&[(0, 0), (4, 0), (4, 4), (0, 4)])).unwrap();
        assert_abs_diff_eq!(clockwise.area(), counter.area());
    }

    #[test]
    fn bounding_rect_covers_all_vertices() {
        let polygon = Polygon::new(points(&[(3, 2), (9, 2), (9, 6), (3, 6), (5, 4)])).unwrap();
        assert_eq!(polygon.bounding_rect(), [3, 2, 7, 5]);
    }

    #[test]
    fn flatten_interleaves_coordinates() {
        let polygon = Polygon::new(points(&[(1, 2), (3, 4), (5, 6)])).unwrap();
        assert_eq!(polygon.flatten(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
