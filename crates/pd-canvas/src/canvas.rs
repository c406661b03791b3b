//! The live canvas: collection authority for placements.
//!
//! `Canvas` owns the ordered placement collection and is its only
//! writer. Mutations arrive from exactly one place at a time — the
//! single-threaded pointer event stream during an interaction, or the
//! template/drop paths between interactions — so no locking is needed;
//! correctness rests on the host runtime's serialized dispatch.
//!
//! The selected template and the active device class are externally
//! owned: both are passed in per call and never stored here.

use crate::dnd;
use crate::input::PointerEvent;
use crate::interact::{InteractionState, PointerController};
use pd_core::device::DeviceClass;
use pd_core::hydrate::hydrate;
use pd_core::id::PlacementId;
use pd_core::model::{MIN_COMPONENT_HEIGHT, MIN_COMPONENT_WIDTH, Placement, Point};
use pd_core::template::Template;
use pd_render::hit::hit_test;

/// An in-place update to one placement, produced by the interaction
/// controller and applied by the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasMutation {
    /// Translate a placement. Unclamped — components may move off-canvas.
    MoveBy { id: PlacementId, dx: f32, dy: f32 },
    /// Grow or shrink a placement, floored at the interactive minimum.
    /// No ceiling: components may be resized arbitrarily large.
    ResizeBy { id: PlacementId, dx: f32, dy: f32 },
}

/// The live placement collection plus its interaction controller.
#[derive(Debug, Default)]
pub struct Canvas {
    placements: Vec<Placement>,
    controller: PointerController,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// The collection in document order — also paint order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn get(&self, id: PlacementId) -> Option<&Placement> {
        self.placements.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn interaction(&self) -> InteractionState {
        self.controller.state()
    }

    // ─── Template / device sync ──────────────────────────────────────────

    /// Replace the whole collection from a template, or clear it when no
    /// template is selected. Invoked on every template or device change;
    /// all interactive edits to the previous collection are discarded,
    /// and any in-flight interaction is dropped with them.
    pub fn sync_template(&mut self, template: Option<&Template>, device: DeviceClass) {
        self.controller = PointerController::new();
        match template {
            Some(t) => {
                self.placements = hydrate(t, device);
                log::info!(
                    "canvas: {} placements from template \"{}\" for {device}",
                    self.placements.len(),
                    t.id
                );
            }
            None => {
                self.placements.clear();
                log::info!("canvas: cleared (no template selected)");
            }
        }
    }

    // ─── Pointer path ────────────────────────────────────────────────────

    /// Feed one pointer event through hit testing and the interaction
    /// controller, applying whatever mutations result. This is the hot
    /// path during a drag — one O(n) pass at most.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        let hit = match event {
            PointerEvent::Down { x, y } => hit_test(&self.placements, x, y),
            _ => None,
        };
        for mutation in self.controller.handle(&event, hit) {
            self.apply(mutation);
        }
    }

    /// Apply one mutation to the collection. A stale id (target gone
    /// after a collection replace) is a logged no-op.
    pub fn apply(&mut self, mutation: CanvasMutation) {
        match mutation {
            CanvasMutation::MoveBy { id, dx, dy } => {
                let Some(p) = self.placements.iter_mut().find(|p| p.id == id) else {
                    log::debug!("move for unknown placement {id}, ignoring");
                    return;
                };
                p.position = p.position.offset(dx, dy);
            }
            CanvasMutation::ResizeBy { id, dx, dy } => {
                let Some(p) = self.placements.iter_mut().find(|p| p.id == id) else {
                    log::debug!("resize for unknown placement {id}, ignoring");
                    return;
                };
                p.size.width = (p.size.width + dx).max(MIN_COMPONENT_WIDTH);
                p.size.height = (p.size.height + dy).max(MIN_COMPONENT_HEIGHT);
            }
        }
    }

    // ─── Drop path ───────────────────────────────────────────────────────

    /// Append a placement from a palette drop. `drop_point` is in
    /// viewport coordinates and `origin` is the canvas's own viewport
    /// offset, so the stored position is canvas-local. A malformed
    /// payload is a silent no-op — drops can legitimately originate
    /// outside the palette.
    pub fn drop_component(
        &mut self,
        payload: &str,
        drop_point: Point,
        origin: Point,
        device: DeviceClass,
    ) -> Option<PlacementId> {
        let placement = dnd::deserialize_drop(payload, drop_point, origin, device)?;
        let id = placement.id;
        self.placements.push(placement);
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pd_core::model::{ComponentKind, Size};

    fn canvas_with(placements: Vec<Placement>) -> Canvas {
        let mut canvas = Canvas::new();
        canvas.placements = placements;
        canvas
    }

    fn card(x: f32, y: f32, w: f32, h: f32) -> Placement {
        Placement::new(ComponentKind::Card, Point::new(x, y), Size::new(w, h))
    }

    #[test]
    fn move_is_unclamped() {
        let p = card(10.0, 10.0, 150.0, 75.0);
        let id = p.id;
        let mut canvas = canvas_with(vec![p]);

        canvas.apply(CanvasMutation::MoveBy {
            id,
            dx: -50.0,
            dy: -50.0,
        });
        let moved = canvas.get(id).unwrap();
        assert_eq!(moved.position, Point::new(-40.0, -40.0));
    }

    #[test]
    fn resize_floors_at_the_minimum() {
        let p = card(0.0, 0.0, 150.0, 75.0);
        let id = p.id;
        let mut canvas = canvas_with(vec![p]);

        canvas.apply(CanvasMutation::ResizeBy {
            id,
            dx: -500.0,
            dy: -500.0,
        });
        let resized = canvas.get(id).unwrap();
        assert_eq!(resized.size, Size::new(100.0, 50.0));
    }

    #[test]
    fn resize_has_no_ceiling() {
        let p = card(0.0, 0.0, 150.0, 75.0);
        let id = p.id;
        let mut canvas = canvas_with(vec![p]);

        canvas.apply(CanvasMutation::ResizeBy {
            id,
            dx: 10_000.0,
            dy: 10_000.0,
        });
        let resized = canvas.get(id).unwrap();
        assert_eq!(resized.size, Size::new(10_150.0, 10_075.0));
    }

    #[test]
    fn stale_id_is_a_noop() {
        let mut canvas = canvas_with(vec![card(0.0, 0.0, 150.0, 75.0)]);
        let before = canvas.placements()[0].clone();

        canvas.apply(CanvasMutation::MoveBy {
            id: PlacementId::intern("gone"),
            dx: 10.0,
            dy: 10.0,
        });
        assert_eq!(canvas.placements()[0].position, before.position);
    }

    #[test]
    fn sync_with_none_clears() {
        let mut canvas = canvas_with(vec![card(0.0, 0.0, 150.0, 75.0)]);
        canvas.sync_template(None, DeviceClass::Web);
        assert!(canvas.is_empty());
    }
}
