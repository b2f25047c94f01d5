use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── constructors ──────────────────────────────────────────────────────

    #[test]
    fn from_origin_size_matches_component_constructor() {
        let a = Rect::from_origin_size(Vec2::new(1.0, 2.0), Vec2::new(10.0, 20.0));
        assert_eq!(a, r(1.0, 2.0, 10.0, 20.0));
    }

    // ── extents ───────────────────────────────────────────────────────────

    #[test]
    fn min_is_origin() {
        assert_eq!(r(1.0, 2.0, 10.0, 20.0).min(), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn max_is_origin_plus_size() {
        assert_eq!(r(1.0, 2.0, 10.0, 20.0).max(), Vec2::new(11.0, 22.0));
    }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(r(0.0, 0.0, 5.0, 0.0).is_empty());
    }

    #[test]
    fn is_empty_negative_size() {
        assert!(r(0.0, 0.0, -1.0, 5.0).is_empty());
    }

    #[test]
    fn is_empty_positive_size() {
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
