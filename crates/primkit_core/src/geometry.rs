//! 2D integer geometry: points, rectangles, area and containment.
//!
//! # Responsibility
//! - Define the C-compatible `Point` and `Rectangle` layouts.
//! - Provide init/area/containment operations that accept absent references.
//!
//! # Invariants
//! - `Rectangle.origin` occupies the first 8 bytes of `Rectangle`.
//! - Width and height are not validated; zero or negative values are kept.
//! - Containment is half-open: left/top edges inside, right/bottom edges outside.

use serde::{Deserialize, Serialize};

/// Integer point. Layout matches `struct { int x; int y; }`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Axis-aligned rectangle anchored at `origin`.
///
/// Layout matches `struct { Point origin; int width; int height; }`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle {
    pub origin: Point,
    pub width: i32,
    pub height: i32,
}

const _: () = assert!(std::mem::size_of::<Point>() == 8);
const _: () = assert!(std::mem::size_of::<Rectangle>() == 16);
const _: () = assert!(std::mem::offset_of!(Rectangle, origin) == 0);

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Rectangle {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            origin: Point::new(x, y),
            width,
            height,
        }
    }

    /// `width * height`, wrapping. May be zero or negative.
    #[inline]
    pub fn area(&self) -> i32 {
        self.width.wrapping_mul(self.height)
    }

    /// Half-open containment test.
    ///
    /// Upper bounds use wrapping addition, so a rectangle whose far edge
    /// overflows `i32` contains nothing on that axis.
    pub fn contains(&self, p: &Point) -> bool {
        let right = self.origin.x.wrapping_add(self.width);
        let bottom = self.origin.y.wrapping_add(self.height);
        p.x >= self.origin.x && p.x < right && p.y >= self.origin.y && p.y < bottom
    }
}

/// Writes `x`, `y` into `p`. Absent `p` is a no-op.
pub fn point_init(p: Option<&mut Point>, x: i32, y: i32) {
    if let Some(p) = p {
        p.x = x;
        p.y = y;
    }
}

/// Initializes `r` with origin `(x, y)` and size `w` x `h`. Absent `r` is a no-op.
pub fn rect_init(r: Option<&mut Rectangle>, x: i32, y: i32, w: i32, h: i32) {
    if let Some(r) = r {
        point_init(Some(&mut r.origin), x, y);
        r.width = w;
        r.height = h;
    }
}

/// Returns the area of `r`, or 0 when absent.
pub fn rect_area(r: Option<&Rectangle>) -> i32 {
    r.map_or(0, Rectangle::area)
}

/// Returns whether `p` lies in `r`; false when either is absent.
pub fn rect_contains_point(r: Option<&Rectangle>, p: Option<&Point>) -> bool {
    match (r, p) {
        (Some(r), Some(p)) => r.contains(p),
        _ => false,
    }
}
