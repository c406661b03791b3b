//! Hit testing: point → placement lookup.
//!
//! Walks the collection back to front (last in document order = topmost)
//! and reports which placement — and which trigger region of it — is
//! under a given canvas position. The two regions are disjoint: the
//! resize handle wins over the body, so a pointer-down can never start
//! a drag and a resize at once.

use pd_core::id::PlacementId;
use pd_core::model::Placement;

/// Radius of the resize-handle disc, centered on the bottom-right corner.
/// The disc overhangs the component bounds on both axes.
pub const HANDLE_RADIUS: f32 = 5.0;

/// Which part of a placement the pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    /// The component body — starts a drag.
    Body,
    /// The corner handle — starts a resize.
    ResizeHandle,
}

/// A resolved hit: the placement and the region within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitTarget {
    pub id: PlacementId,
    pub region: HitRegion,
}

/// Find the topmost placement at (px, py), if any.
pub fn hit_test(placements: &[Placement], px: f32, py: f32) -> Option<HitTarget> {
    // Check in reverse (last rendered = topmost)
    for p in placements.iter().rev() {
        if in_handle(p, px, py) {
            return Some(HitTarget {
                id: p.id,
                region: HitRegion::ResizeHandle,
            });
        }
        if in_body(p, px, py) {
            return Some(HitTarget {
                id: p.id,
                region: HitRegion::Body,
            });
        }
    }
    None
}

fn in_body(p: &Placement, px: f32, py: f32) -> bool {
    px >= p.position.x
        && px <= p.position.x + p.size.width
        && py >= p.position.y
        && py <= p.position.y + p.size.height
}

fn in_handle(p: &Placement, px: f32, py: f32) -> bool {
    let cx = p.position.x + p.size.width;
    let cy = p.position.y + p.size.height;
    let dx = px - cx;
    let dy = py - cy;
    dx * dx + dy * dy <= HANDLE_RADIUS * HANDLE_RADIUS
}
