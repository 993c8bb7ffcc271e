use dialface_engine::coords::{Rect, Vec2};
use dialface_engine::paint::Color;
use dialface_engine::scene::{DrawList, Rotation, ShapeRef, ZIndex};
use dialface_engine::text::FontId;

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` with a high-level API. Every call lands on a
/// fresh z-layer, so commands paint in exactly the order they were issued.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    z: i32,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list, z: 0 }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Solid axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let z = self.next_z();
        self.draw_list.push_solid_rect(z, rect, color);
    }

    /// Solid rectangle rotated by `degrees` about `pivot`.
    pub fn fill_rotated_rect(&mut self, rect: Rect, color: Color, degrees: f32, pivot: Vec2) {
        let z = self.next_z();
        self.draw_list.push_rotated_rect(z, rect, color, Rotation::new(degrees, pivot));
    }

    /// Solid circle.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let z = self.next_z();
        self.draw_list.push_solid_circle(z, center, radius, color);
    }

    /// Text horizontally centered on `anchor.x`, baseline at `anchor.y`.
    pub fn centered_text(
        &mut self,
        text: impl Into<String>,
        font: Option<FontId>,
        size: f32,
        color: Color,
        anchor: Vec2,
    ) {
        let z = self.next_z();
        self.draw_list.push_centered_text(z, text, font, size, color, anchor);
    }

    /// Host asset stretched to `bounds`.
    pub fn asset(&mut self, asset: ShapeRef, bounds: Rect) {
        let z = self.next_z();
        self.draw_list.push_asset(z, asset, bounds);
    }

    /// Host asset tinted with `tint` and rotated by `degrees` about `pivot`.
    pub fn tinted_asset(
        &mut self,
        asset: ShapeRef,
        bounds: Rect,
        tint: Color,
        degrees: f32,
        pivot: Vec2,
    ) {
        let z = self.next_z();
        self.draw_list
            .push_tinted_asset(z, asset, bounds, tint, Rotation::new(degrees, pivot));
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
