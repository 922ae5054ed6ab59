/// Collision detection for block-demo
///
/// This module provides the playfield's rectangle type and the AABB
/// (Axis-Aligned Bounding Box) overlap test used to keep the player out of
/// the map element.
///
/// # Architecture
///
/// - `Rectangle`: Integer box in screen-pixel space (player, map element, draw targets)
/// - `Collidable` trait: Anything that can act as a static obstacle
/// - `collides`: Pure function for rectangle overlap detection
use sdl2::rect::Rect;

/// An axis-aligned box in screen-pixel space.
///
/// Extents are signed so that movement arithmetic stays in one integer type.
/// Callers keep `w` and `h` non-negative; nothing here validates that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rectangle {
    /// Creates a new rectangle at the given position with the given size.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rectangle { x, y, w, h }
    }

    // Edges are widened to i64 so `x + w` cannot overflow near i32::MAX

    pub fn left(&self) -> i64 {
        i64::from(self.x)
    }

    pub fn right(&self) -> i64 {
        i64::from(self.x) + i64::from(self.w)
    }

    pub fn top(&self) -> i64 {
        i64::from(self.y)
    }

    pub fn bottom(&self) -> i64 {
        i64::from(self.y) + i64::from(self.h)
    }

    /// Converts to an SDL2 `Rect` for blitting and filling.
    ///
    /// SDL2 cannot represent an empty rectangle (`Rect::new` clamps zero
    /// extents up to 1), so a box with a non-positive extent yields `None`
    /// and is simply not drawn.
    pub fn to_sdl(&self) -> Option<Rect> {
        if self.w <= 0 || self.h <= 0 {
            return None;
        }
        Some(Rect::new(self.x, self.y, self.w as u32, self.h as u32))
    }
}

/// Trait for static (non-moving) objects the player collides with.
///
/// Only the moving side ever reacts to a collision; implementors just
/// report where they are.
///
/// # Example
///
/// ```rust
/// struct Wall {
///     x: i32,
///     y: i32,
/// }
///
/// impl Collidable for Wall {
///     fn bounds(&self) -> Rectangle {
///         Rectangle::new(self.x, self.y, 10, 720)
///     }
/// }
/// ```
pub trait Collidable {
    /// Returns the axis-aligned bounding box for this object.
    fn bounds(&self) -> Rectangle;
}

impl Collidable for Rectangle {
    fn bounds(&self) -> Rectangle {
        *self
    }
}

/// Checks if two axis-aligned bounding boxes overlap.
///
/// # Algorithm
///
/// Separating-axis test specialised to boxes. The rectangles do NOT overlap
/// if any of these hold:
/// - `a` ends at or above the top of `b`
/// - `a` starts at or below the bottom of `b`
/// - `a` ends at or left of the left edge of `b`
/// - `a` starts at or right of the right edge of `b`
///
/// Every check is inclusive, so boxes that only share an edge are not
/// colliding.
///
/// # Example
///
/// ```rust
/// let a = Rectangle::new(0, 0, 10, 10);
/// let b = Rectangle::new(10, 0, 10, 10);
///
/// assert!(!collides(&a, &b)); // shared edge at x = 10
/// ```
pub fn collides(a: &Rectangle, b: &Rectangle) -> bool {
    if a.bottom() <= b.top() {
        return false;
    }

    if a.top() >= b.bottom() {
        return false;
    }

    if a.right() <= b.left() {
        return false;
    }

    if a.left() >= b.right() {
        return false;
    }

    true
}
