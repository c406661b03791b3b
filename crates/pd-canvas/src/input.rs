//! Input abstraction layer.
//!
//! Normalizes mouse and touch events from the host UI runtime into a
//! unified `PointerEvent` enum consumed by the interaction controller.
//! Coordinates are canvas-local pixels, top-left origin.

/// A normalized pointer event from any pointing device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed (mouse down, touch start).
    Down { x: f32, y: f32 },

    /// Pointer moved while over the canvas.
    Move { x: f32, y: f32 },

    /// Pointer released.
    Up { x: f32, y: f32 },

    /// Pointer left the canvas bounds with the button still held.
    /// Treated like a release so a missed `Up` outside the canvas can
    /// never leave an interaction stuck.
    Leave,
}

impl PointerEvent {
    /// Extract the position, if this event carries one.
    pub fn position(&self) -> Option<(f32, f32)> {
        match self {
            Self::Down { x, y } | Self::Move { x, y } | Self::Up { x, y } => Some((*x, *y)),
            Self::Leave => None,
        }
    }
}
