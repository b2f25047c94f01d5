use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Circle draw payload.
///
/// `center` and `radius` are in logical pixels; the renderer scales them to
/// framebuffer pixels. `fill` selects the rasterization mode:
/// - `true`: solid disc in `fg` (`bg` is ignored)
/// - `false`: one-pixel anti-aliased ring in `fg` around a `bg` interior
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub fill: bool,
    pub bg: Color,
    pub fg: Color,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, fill: bool, bg: Color, fg: Color) -> Self {
        Self { center, radius, fill, bg, fg }
    }

    /// Filled disc in `fg`.
    #[inline]
    pub fn disc(center: Vec2, radius: f32, fg: Color) -> Self {
        Self::new(center, radius, true, Color::transparent(), fg)
    }

    /// Outlined ring: `fg` stroke, `bg` interior.
    #[inline]
    pub fn ring(center: Vec2, radius: f32, bg: Color, fg: Color) -> Self {
        Self::new(center, radius, false, bg, fg)
    }

    /// Axis-aligned bounding box (`center ± radius`), in logical pixels.
    #[inline]
    pub fn bounds(&self) -> Rect {
        let half = Vec2::new(self.radius, self.radius);
        Rect::from_origin_size(self.center - half, half * 2.0)
    }

    /// Euclidean hit test in logical pixels.
    ///
    /// This is the plain `distance <= radius` test for picking. The rasterizer
    /// rounds per-pixel distances, so pixels on the rim may differ from this
    /// result by less than a pixel.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        self.radius > 0.0 && p.distance(self.center) <= self.radius
    }
}

impl DrawList {
    /// Records a circle draw command.
    #[inline]
    pub fn push_circle(&mut self, z: ZIndex, cmd: CircleCmd) {
        self.push(z, DrawCmd::Circle(cmd));
    }

    /// Records a filled disc.
    #[inline]
    pub fn push_disc(&mut self, z: ZIndex, center: Vec2, radius: f32, fg: Color) {
        self.push_circle(z, CircleCmd::disc(center, radius, fg));
    }

    /// Records an outlined ring with a filled interior.
    #[inline]
    pub fn push_ring(&mut self, z: ZIndex, center: Vec2, radius: f32, bg: Color, fg: Color) {
        self.push_circle(z, CircleCmd::ring(center, radius, bg, fg));
    }
}
