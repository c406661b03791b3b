pub mod hit;
pub mod paint;
pub mod visual;

pub use hit::{HANDLE_RADIUS, HitRegion, HitTarget, hit_test};
pub use paint::paint_canvas;
pub use visual::{Visual, VisualPart, visual_for};
