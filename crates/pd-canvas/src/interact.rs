//! The pointer interaction state machine.
//!
//! Translates pointer events plus hit-test results into placement
//! mutations. Exactly one interaction can be active at a time:
//!
//! ```text
//! Idle -> Dragging(target)   (pointer down on a component body)
//! Idle -> Resizing(target)   (pointer down on a resize handle)
//! Any  -> Idle               (pointer up, or pointer leaving the canvas)
//! ```
//!
//! Drag and resize are mutually exclusive by construction — their trigger
//! regions are disjoint, so no event sequence can reach both at once.
//!
//! Movement is incremental: each move computes the delta from the last
//! recorded anchor and then resets the anchor to the new position. The
//! update is stable under any event sampling rate and needs no stored
//! original position.

use crate::canvas::CanvasMutation;
use crate::input::PointerEvent;
use pd_core::id::PlacementId;
use pd_core::model::Point;
use pd_render::hit::{HitRegion, HitTarget};

/// The controller's current interaction, with the pointer anchor used
/// for the next incremental delta.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    /// No active interaction.
    #[default]
    Idle,

    /// Moving one placement by its body.
    Dragging { target: PlacementId, anchor: Point },

    /// Resizing one placement by its corner handle.
    Resizing { target: PlacementId, anchor: Point },
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The placement being dragged, if any.
    pub fn dragging_target(&self) -> Option<PlacementId> {
        match self {
            Self::Dragging { target, .. } => Some(*target),
            _ => None,
        }
    }

    /// The placement being resized, if any.
    pub fn resizing_target(&self) -> Option<PlacementId> {
        match self {
            Self::Resizing { target, .. } => Some(*target),
            _ => None,
        }
    }

    /// The placement under interaction, drag or resize.
    pub fn active_target(&self) -> Option<PlacementId> {
        match self {
            Self::Dragging { target, .. } | Self::Resizing { target, .. } => Some(*target),
            Self::Idle => None,
        }
    }
}

/// Owns the interaction state and turns pointer events into mutations.
#[derive(Debug, Default)]
pub struct PointerController {
    state: InteractionState,
}

impl PointerController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Handle one pointer event, returning zero or more mutations for the
    /// canvas to apply. `hit` is the hit-test result at the event
    /// position (only meaningful for `Down`).
    pub fn handle(
        &mut self,
        event: &PointerEvent,
        hit: Option<HitTarget>,
    ) -> Vec<CanvasMutation> {
        match *event {
            PointerEvent::Down { x, y } => {
                if let Some(hit) = hit {
                    let anchor = Point::new(x, y);
                    self.state = match hit.region {
                        HitRegion::Body => InteractionState::Dragging {
                            target: hit.id,
                            anchor,
                        },
                        HitRegion::ResizeHandle => InteractionState::Resizing {
                            target: hit.id,
                            anchor,
                        },
                    };
                }
                // Down on empty canvas: nothing to interact with.
                vec![]
            }

            PointerEvent::Move { x, y } => match &mut self.state {
                InteractionState::Dragging { target, anchor } => {
                    let dx = x - anchor.x;
                    let dy = y - anchor.y;
                    *anchor = Point::new(x, y);
                    vec![CanvasMutation::MoveBy {
                        id: *target,
                        dx,
                        dy,
                    }]
                }
                InteractionState::Resizing { target, anchor } => {
                    let dx = x - anchor.x;
                    let dy = y - anchor.y;
                    *anchor = Point::new(x, y);
                    vec![CanvasMutation::ResizeBy {
                        id: *target,
                        dx,
                        dy,
                    }]
                }
                // Move with no active target is a no-op, not an error.
                InteractionState::Idle => vec![],
            },

            PointerEvent::Up { .. } => {
                self.state = InteractionState::Idle;
                vec![]
            }

            PointerEvent::Leave => {
                if let Some(target) = self.state.active_target() {
                    log::debug!("pointer left canvas mid-interaction on {target}, ending");
                }
                self.state = InteractionState::Idle;
                vec![]
            }
        }
    }
}
