//! Placement collection → Vello drawing commands.
//!
//! Walks the live collection in document order (so later placements
//! paint on top) and emits Vello operations for each component: surface,
//! illustrative parts from the visual table, and the resize handle.
//!
//! Call once per frame with a freshly-cleared `Scene`; the caller
//! presents the scene via its own surface.

use crate::visual::{ACCENT, OUTLINE, Visual, VisualPart, visual_for};
use kurbo::{Affine, Circle, Rect, Stroke as KurboStroke};
use pd_core::device::DeviceClass;
use pd_core::model::{Color, Placement, StyleValue};
use peniko::Fill;
use vello::Scene;

/// Background behind the page being built.
const CANVAS_FILL: Color = Color::rgb(0xF5, 0xF5, 0xF5);
/// Inner padding between a component's edge and its parts.
const PART_PAD: f64 = 8.0;
/// Vertical gap between stacked parts.
const PART_GAP: f64 = 6.0;

/// Paint the device frame and every placement.
pub fn paint_canvas(scene: &mut Scene, placements: &[Placement], device: DeviceClass) {
    let canvas = device.profile().canvas;
    let frame = Rect::new(0.0, 0.0, canvas.width as f64, canvas.height as f64);
    fill(scene, &frame, CANVAS_FILL);
    stroke(scene, &frame, OUTLINE, 1.0);

    for placement in placements {
        paint_placement(scene, placement);
    }
}

fn paint_placement(scene: &mut Scene, placement: &Placement) {
    let visual = visual_for(&placement.kind);

    let bounds = Rect::new(
        placement.position.x as f64,
        placement.position.y as f64,
        (placement.position.x + placement.size.width) as f64,
        (placement.position.y + placement.size.height) as f64,
    );
    let surface = bounds.to_rounded_rect(corner_radius(placement, &visual));

    fill(scene, &surface, surface_fill(placement, &visual));
    stroke(scene, &surface, OUTLINE, 1.0);

    paint_parts(scene, &visual, bounds, placement);
    paint_handle(scene, bounds);
}

/// Style-bag `fill` override (hex string or color value), else the
/// visual's own surface color.
fn surface_fill(placement: &Placement, visual: &Visual) -> Color {
    match placement.style.get("fill") {
        Some(StyleValue::Color(c)) => *c,
        Some(StyleValue::Str(hex)) => Color::from_hex(hex).unwrap_or(visual.fill),
        _ => visual.fill,
    }
}

/// Style-bag `corner` override, else the visual's radius.
fn corner_radius(placement: &Placement, visual: &Visual) -> f64 {
    match placement.style.get("corner") {
        Some(StyleValue::Number(r)) => *r as f64,
        _ => visual.corner_radius as f64,
    }
}

// ─── Parts ───────────────────────────────────────────────────────────────

/// Stack the visual's parts top to bottom in equal slots inside the
/// component bounds.
fn paint_parts(scene: &mut Scene, visual: &Visual, bounds: Rect, placement: &Placement) {
    if visual.parts.is_empty() {
        return;
    }

    let inner = bounds.inset(-PART_PAD);
    let count = visual.parts.len() as f64;
    let slot_h = (inner.height() - PART_GAP * (count - 1.0)) / count;
    if slot_h <= 0.0 || inner.width() <= 0.0 {
        // Component too small for illustrative content; surface only.
        return;
    }

    for (n, part) in visual.parts.iter().enumerate() {
        let y0 = inner.y0 + n as f64 * (slot_h + PART_GAP);
        let slot = Rect::new(inner.x0, y0, inner.x1, y0 + slot_h);

        match part {
            VisualPart::Bar { title } => {
                // App bars span the full component width.
                let strip = Rect::new(bounds.x0, y0, bounds.x1, y0 + slot_h);
                fill(scene, &strip, ACCENT);
                defer_text(placement, title, &strip);
            }
            VisualPart::Field { label } => {
                let shape = slot.to_rounded_rect(3.0);
                stroke(scene, &shape, OUTLINE, 1.0);
                defer_text(placement, label, &slot);
            }
            VisualPart::Button { label } => {
                let shape = slot.to_rounded_rect(3.0);
                fill(scene, &shape, ACCENT);
                defer_text(placement, label, &slot);
            }
            VisualPart::Title(text) | VisualPart::Body(text) => {
                defer_text(placement, text, &slot);
            }
            VisualPart::Block { tint } => {
                fill(scene, &slot, *tint);
            }
        }
    }
}

/// The bottom-right resize handle disc.
fn paint_handle(scene: &mut Scene, bounds: Rect) {
    let handle = Circle::new((bounds.x1, bounds.y1), crate::hit::HANDLE_RADIUS as f64);
    fill(scene, &handle, ACCENT);
}

// ─── Fill and stroke ─────────────────────────────────────────────────────

fn fill<S: kurbo::Shape>(scene: &mut Scene, shape: &S, color: Color) {
    scene.fill(
        Fill::NonZero,
        Affine::IDENTITY,
        to_peniko(color),
        None,
        shape,
    );
}

fn stroke<S: kurbo::Shape>(scene: &mut Scene, shape: &S, color: Color, width: f64) {
    let style = KurboStroke {
        width,
        ..Default::default()
    };
    scene.stroke(&style, Affine::IDENTITY, to_peniko(color), None, shape);
}

// ─── Helpers ─────────────────────────────────────────────────────────────

fn to_peniko(c: Color) -> peniko::Color {
    peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn defer_text(placement: &Placement, text: &str, slot: &Rect) {
    log::trace!(
        "TEXT {} {text:?} at ({}, {})",
        placement.id,
        slot.x0,
        slot.y0
    );
    // Full text shaping requires a font context; deferred to font milestone.
}
