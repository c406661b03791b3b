pub mod catalog;
pub mod device;
pub mod error;
pub mod feature;
pub mod flow;
pub mod hydrate;
pub mod id;
pub mod lint;
pub mod model;
pub mod template;

pub use catalog::PaletteItem;
pub use device::{CANONICAL_WIDTH, DeviceClass, DeviceProfile};
pub use error::ModelError;
pub use flow::UserFlow;
pub use hydrate::{hydrate, scale_factor};
pub use id::PlacementId;
pub use lint::{LintDiagnostic, LintSeverity, lint_canvas};
pub use model::*;
pub use template::{AdminFieldKind, AdminInput, Template, TemplateComponent};
