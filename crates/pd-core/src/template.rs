//! Business template descriptors.
//!
//! A template is a declarative page recipe: which components it places,
//! where, and at what size — authored at the canonical 900px web width.
//! Templates are read-only input to the builder; hydration turns them
//! into live placements.

use crate::flow::UserFlow;
use crate::model::{Point, Size};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The input widget an admin field is edited with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdminFieldKind {
    Text,
    Image,
    Number,
    RichText,
    List,
}

/// One field the page operator must fill in before the page can go live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminInput {
    /// Machine name, e.g. `paymentMethods`.
    pub field: String,
    pub kind: AdminFieldKind,
    /// Display label shown in the admin form.
    pub label: String,
}

/// One component entry in a template, positioned at canonical width.
/// The kind is a catalog label — labels outside the known component set
/// still hydrate and render as placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateComponent {
    pub kind: String,
    pub position: Point,
    pub size: Size,
}

/// A complete business template descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    /// Template kind label, e.g. `LANDING`, `CART`.
    pub kind: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    /// Whether the page needs an operator-facing admin form.
    #[serde(default)]
    pub requires_admin: bool,
    /// Fields for the admin form. Empty unless `requires_admin`.
    #[serde(default)]
    pub admin_inputs: SmallVec<[AdminInput; 4]>,
    /// Optional user-journey diagram for this template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_flow: Option<UserFlow>,
    pub components: Vec<TemplateComponent>,
}

impl Template {
    /// True if the template declares admin inputs it cannot collect.
    /// A `requires_admin` template with no inputs is legal (the form is
    /// defined elsewhere); inputs without the flag are not.
    pub fn admin_inputs_consistent(&self) -> bool {
        self.requires_admin || self.admin_inputs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_deserializes_from_catalog_json() {
        let json = r#"{
            "id": "login-template",
            "kind": "LOGIN",
            "label": "Login page",
            "components": [
                {
                    "kind": "LOGIN_FORM",
                    "position": { "x": 250.0, "y": 100.0 },
                    "size": { "width": 400.0, "height": 300.0 }
                }
            ]
        }"#;
        let t: Template = serde_json::from_str(json).unwrap();
        assert_eq!(t.id, "login-template");
        assert!(!t.requires_admin);
        assert!(t.admin_inputs.is_empty());
        assert!(t.user_flow.is_none());
        assert_eq!(t.components.len(), 1);
        assert_eq!(t.components[0].position, Point::new(250.0, 100.0));
    }

    #[test]
    fn admin_consistency() {
        let mut t: Template = serde_json::from_str(
            r#"{"id":"x","kind":"X","label":"x","components":[]}"#,
        )
        .unwrap();
        assert!(t.admin_inputs_consistent());

        t.admin_inputs.push(AdminInput {
            field: "price".into(),
            kind: AdminFieldKind::Number,
            label: "Price".into(),
        });
        assert!(!t.admin_inputs_consistent());

        t.requires_admin = true;
        assert!(t.admin_inputs_consistent());
    }
}
