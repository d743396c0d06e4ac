//! Geometry - points, boxes and the axis a list is laid out along
//!
//! All coordinates are client pixels, the space DOM pointer events and
//! `getBoundingClientRect` report in.

/// Pointer or box position in client pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn distance(&self, other: &Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Coordinate along the given axis
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Vertical => self.y,
            Axis::Horizontal => self.x,
        }
    }
}

/// Direction a list stacks its items in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

/// Axis-aligned bounding box in client pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Leading edge along `axis`
    pub fn start(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Vertical => self.y,
            Axis::Horizontal => self.x,
        }
    }

    /// Size along `axis`
    pub fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Vertical => self.h,
            Axis::Horizontal => self.w,
        }
    }

    /// Midpoint along `axis`. A coordinate equal to this counts as the
    /// first half.
    pub fn midpoint(&self, axis: Axis) -> f32 {
        self.start(axis) + self.extent(axis) / 2.0
    }
}
