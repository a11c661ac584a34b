//! Geometric primitives for layout analysis.
//!
//! This module provides the axis-aligned bounding box type and the pure
//! spatial predicates used throughout the classification, detection, and
//! merge heuristics. All operations degrade gracefully on degenerate or
//! malformed boxes instead of panicking.

use serde::{Deserialize, Serialize};

use crate::utils::safe_float_cmp;

/// An axis-aligned bounding box in page coordinate space.
///
/// Well-formed boxes satisfy `x0 <= x1` and `y0 <= y1`. Construction does
/// not enforce the invariant; the primitives below tolerate degenerate
/// boxes and report zero overlap for them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge x-coordinate
    pub x0: f32,
    /// Top edge y-coordinate
    pub y0: f32,
    /// Right edge x-coordinate
    pub x1: f32,
    /// Bottom edge y-coordinate
    pub y1: f32,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// use docstruct::geometry::BoundingBox;
    ///
    /// let bbox = BoundingBox::new(10.0, 20.0, 110.0, 70.0);
    /// assert_eq!(bbox.width(), 100.0);
    /// assert_eq!(bbox.height(), 50.0);
    /// ```
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Get the width of the box.
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    /// Get the height of the box.
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    /// Compute the area of the box.
    ///
    /// Degenerate boxes yield zero or negative area; callers treat
    /// non-positive areas as empty.
    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Get the horizontal center of the box.
    pub fn center_x(&self) -> f32 {
        (self.x0 + self.x1) / 2.0
    }

    /// Get the vertical center of the box.
    pub fn center_y(&self) -> f32 {
        (self.y0 + self.y1) / 2.0
    }

    /// Compute the union of this box with another.
    ///
    /// Returns the smallest box that contains both.
    ///
    /// # Examples
    ///
    /// ```
    /// use docstruct::geometry::BoundingBox;
    ///
    /// let a = BoundingBox::new(0.0, 0.0, 50.0, 50.0);
    /// let b = BoundingBox::new(25.0, 25.0, 75.0, 75.0);
    /// let u = a.union(&b);
    /// assert_eq!(u, BoundingBox::new(0.0, 0.0, 75.0, 75.0));
    /// ```
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    /// True when all four coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x0.is_finite() && self.y0.is_finite() && self.x1.is_finite() && self.y1.is_finite()
    }
}

/// Calculate the overlap ratio between two bounding boxes.
///
/// The ratio is intersection area over union area, in `[0, 1]`. Disjoint
/// boxes, degenerate zero-area intersections, and boxes with non-finite
/// coordinates all yield `0.0`.
///
/// # Examples
///
/// ```
/// use docstruct::geometry::{overlap_ratio, BoundingBox};
///
/// let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
/// assert_eq!(overlap_ratio(&a, &a), 1.0);
///
/// let b = BoundingBox::new(20.0, 20.0, 30.0, 30.0);
/// assert_eq!(overlap_ratio(&a, &b), 0.0);
/// ```
pub fn overlap_ratio(a: &BoundingBox, b: &BoundingBox) -> f32 {
    if !a.is_finite() || !b.is_finite() {
        return 0.0;
    }

    let inter_x0 = a.x0.max(b.x0);
    let inter_y0 = a.y0.max(b.y0);
    let inter_x1 = a.x1.min(b.x1);
    let inter_y1 = a.y1.min(b.y1);

    if inter_x0 >= inter_x1 || inter_y0 >= inter_y1 {
        return 0.0;
    }

    let inter_area = (inter_x1 - inter_x0) * (inter_y1 - inter_y0);
    let union_area = a.area() + b.area() - inter_area;

    if union_area > 0.0 {
        inter_area / union_area
    } else {
        0.0
    }
}

/// Calculate the distance between two bounding boxes.
///
/// Returns `0.0` when the boxes overlap or touch on both axes; otherwise
/// the Euclidean distance between the nearest edges (the gap on each axis
/// clamped at zero). Boxes with non-finite coordinates are infinitely far
/// apart.
///
/// # Examples
///
/// ```
/// use docstruct::geometry::{distance, BoundingBox};
///
/// let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
/// let b = BoundingBox::new(13.0, 14.0, 20.0, 20.0);
/// assert_eq!(distance(&a, &b), 5.0);
/// ```
pub fn distance(a: &BoundingBox, b: &BoundingBox) -> f32 {
    if !a.is_finite() || !b.is_finite() {
        return f32::INFINITY;
    }

    let x_gap = (a.x0.max(b.x0) - a.x1.min(b.x1)).max(0.0);
    let y_gap = (a.y0.max(b.y0) - a.y1.min(b.y1)).max(0.0);

    (x_gap * x_gap + y_gap * y_gap).sqrt()
}

/// Check whether two boxes sit on the same horizontal band.
///
/// True when the vertical positions of the two centerlines differ by at
/// most `tolerance`.
pub fn aligned_horizontally(a: &BoundingBox, b: &BoundingBox, tolerance: f32) -> bool {
    (a.center_y() - b.center_y()).abs() <= tolerance
}

/// Check whether two boxes sit on the same vertical band.
///
/// True when the horizontal positions of the two centerlines differ by at
/// most `tolerance`.
pub fn aligned_vertically(a: &BoundingBox, b: &BoundingBox, tolerance: f32) -> bool {
    (a.center_x() - b.center_x()).abs() <= tolerance
}

/// Identify column positions from the left edges of a set of boxes.
///
/// Left-edge x-coordinates are sorted and clustered greedily: a coordinate
/// joins the first existing cluster representative within `tolerance`,
/// otherwise it starts a new cluster. The representative is the first-seen
/// value of the cluster, not a centroid, so processing order affects the
/// output; callers must sort their input by reading order for determinism.
///
/// Returns the sorted list of cluster representatives.
pub fn cluster_column_positions(boxes: &[BoundingBox], tolerance: f32) -> Vec<f32> {
    if boxes.is_empty() {
        return Vec::new();
    }

    let mut x_coords: Vec<f32> = boxes.iter().map(|b| b.x0).collect();
    x_coords.sort_by(|a, b| safe_float_cmp(*a, *b));

    let mut columns: Vec<f32> = Vec::new();
    for coord in x_coords {
        let found = columns.iter().any(|col| (coord - col).abs() <= tolerance);
        if !found {
            columns.push(coord);
        }
    }

    columns.sort_by(|a, b| safe_float_cmp(*a, *b));
    columns
}
