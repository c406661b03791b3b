//! Built-in catalogs: business templates, the component palette, and the
//! feature-scenario menu.
//!
//! Catalogs are collaborator data — the builder consumes them read-only.
//! The built-ins below match the stock product offering; hosts with their
//! own catalogs load them through the JSON boundaries instead.

use crate::error::ModelError;
use crate::feature::{Complexity, FeatureCategory, TechFeature};
use crate::flow::{ArrowKind, CurveKind, FlowEdgeSpec, FlowLink, FlowNode, FlowSpec, FlowStepKind, UserFlow};
use crate::model::{Point, Size};
use crate::template::{AdminFieldKind, AdminInput, Template, TemplateComponent};
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

// ─── Component palette ───────────────────────────────────────────────────

/// One draggable entry in the component palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteItem {
    pub id: String,
    /// Component kind label, resolved by `ComponentKind::from_label`.
    pub kind: String,
    pub label: String,
}

/// The stock component palette.
pub fn palette_items() -> Vec<PaletteItem> {
    [
        ("nav", "NAVIGATION", "Navigation Bar"),
        ("button", "BUTTON", "Button"),
        ("input", "INPUT", "Input Field"),
        ("card", "CARD", "Card"),
    ]
    .into_iter()
    .map(|(id, kind, label)| PaletteItem {
        id: id.into(),
        kind: kind.into(),
        label: label.into(),
    })
    .collect()
}

// ─── Business templates ──────────────────────────────────────────────────

fn component(kind: &str, x: f32, y: f32, width: f32, height: f32) -> TemplateComponent {
    TemplateComponent {
        kind: kind.into(),
        position: Point::new(x, y),
        size: Size::new(width, height),
    }
}

fn admin_input(field: &str, kind: AdminFieldKind, label: &str) -> AdminInput {
    AdminInput {
        field: field.into(),
        kind,
        label: label.into(),
    }
}

/// The login template's user journey: login screen → credential submit →
/// either home or back to login with an error.
fn login_flow() -> Option<UserFlow> {
    let node = |id: &str, kind, label: &str, x, y| FlowNode {
        id: id.into(),
        kind,
        label: label.into(),
        position: Point::new(x, y),
    };
    let spec = FlowSpec {
        nodes: vec![
            node("login", FlowStepKind::Screen, "Login screen", 0.0, 0.0),
            node("submit", FlowStepKind::Action, "Submit credentials", 0.0, 120.0),
            node("valid", FlowStepKind::Decision, "Credentials valid?", 0.0, 240.0),
            node("home", FlowStepKind::Screen, "Home screen", -120.0, 360.0),
        ],
        edges: vec![
            FlowEdgeSpec {
                id: "e-login-submit".into(),
                source: "login".into(),
                target: "submit".into(),
                link: FlowLink::default(),
            },
            FlowEdgeSpec {
                id: "e-submit-valid".into(),
                source: "submit".into(),
                target: "valid".into(),
                link: FlowLink::default(),
            },
            FlowEdgeSpec {
                id: "e-valid-home".into(),
                source: "valid".into(),
                target: "home".into(),
                link: FlowLink {
                    label: Some("yes".into()),
                    curve: CurveKind::Smooth,
                    arrow: ArrowKind::End,
                    animated: true,
                },
            },
            FlowEdgeSpec {
                id: "e-valid-login".into(),
                source: "valid".into(),
                target: "login".into(),
                link: FlowLink {
                    label: Some("no — show error".into()),
                    curve: CurveKind::Step,
                    arrow: ArrowKind::End,
                    animated: false,
                },
            },
        ],
    };
    // Endpoints all declared above; cannot dangle.
    UserFlow::from_spec(spec).ok()
}

/// The stock business templates. Geometry is authored at the canonical
/// 900px web width.
pub fn business_templates() -> Vec<Template> {
    vec![
        Template {
            id: "landing-template".into(),
            kind: "LANDING".into(),
            label: "Landing page".into(),
            description: "The first screen visitors see: core value and key features."
                .into(),
            requires_admin: false,
            admin_inputs: smallvec![],
            user_flow: None,
            components: vec![
                component("HERO", 0.0, 0.0, 900.0, 400.0),
                component("FEATURES", 0.0, 420.0, 900.0, 300.0),
            ],
        },
        Template {
            id: "login-template".into(),
            kind: "LOGIN".into(),
            label: "Login page".into(),
            description: "Sign-in screen for returning members.".into(),
            requires_admin: false,
            admin_inputs: smallvec![],
            user_flow: login_flow(),
            components: vec![component("LOGIN_FORM", 250.0, 100.0, 400.0, 300.0)],
        },
        Template {
            id: "cart-template".into(),
            kind: "CART".into(),
            label: "Cart page".into(),
            description: "Review selected products and place an order.".into(),
            requires_admin: true,
            admin_inputs: smallvec![
                admin_input("paymentMethods", AdminFieldKind::List, "Payment methods"),
                admin_input("shippingOptions", AdminFieldKind::List, "Shipping options"),
            ],
            user_flow: None,
            components: vec![
                component("CART_LIST", 0.0, 0.0, 600.0, 400.0),
                component("PAYMENT_SUMMARY", 620.0, 0.0, 280.0, 300.0),
            ],
        },
        Template {
            id: "product-list-template".into(),
            kind: "PRODUCT_LIST".into(),
            label: "Product list page".into(),
            description: "Every product on sale, at a glance.".into(),
            requires_admin: true,
            admin_inputs: smallvec![
                admin_input("productName", AdminFieldKind::Text, "Product name"),
                admin_input("productImage", AdminFieldKind::Image, "Product image"),
                admin_input("price", AdminFieldKind::Number, "Price"),
                admin_input("description", AdminFieldKind::RichText, "Product description"),
                admin_input("options", AdminFieldKind::List, "Product options"),
            ],
            user_flow: None,
            components: vec![
                component("NAVIGATION", 0.0, 0.0, 900.0, 60.0),
                component("PRODUCT_LIST", 50.0, 80.0, 800.0, 400.0),
            ],
        },
        Template {
            id: "signup-template".into(),
            kind: "SIGNUP".into(),
            label: "Sign-up page".into(),
            description: "Registration screen for new users.".into(),
            requires_admin: true,
            admin_inputs: smallvec![
                admin_input("requiredFields", AdminFieldKind::List, "Required fields"),
                admin_input("termsAndConditions", AdminFieldKind::RichText, "Terms of service"),
                admin_input("privacyPolicy", AdminFieldKind::RichText, "Privacy policy"),
                admin_input("signupMethods", AdminFieldKind::List, "Sign-up methods"),
            ],
            user_flow: None,
            components: vec![component("FORM", 0.0, 0.0, 400.0, 500.0)],
        },
    ]
}

// ─── Feature scenarios ───────────────────────────────────────────────────

#[allow(clippy::too_many_arguments)]
fn feature(
    id: &str,
    name: &str,
    description: &str,
    scenario: &str,
    technical_name: &str,
    complexity: Complexity,
    requirements: &[&str],
    visual_example: &str,
) -> TechFeature {
    TechFeature {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        scenario: scenario.into(),
        technical_name: technical_name.into(),
        complexity,
        requirements: requirements.iter().map(|r| (*r).into()).collect(),
        visual_example: visual_example.into(),
    }
}

/// The stock feature-scenario menu, grouped by theme.
pub fn feature_scenarios() -> Vec<FeatureCategory> {
    vec![
        FeatureCategory {
            id: "user-interaction".into(),
            name: "User interaction".into(),
            features: vec![
                feature(
                    "push-notification",
                    "Send alerts while the app is closed",
                    "Reach users with messages even when they are not in the app",
                    "I want to announce events and updates to users who are not currently active",
                    "Push notifications",
                    Complexity::Medium,
                    &["Mobile device tokens", "Push certificate"],
                    "/assets/examples/push-notification.gif",
                ),
                feature(
                    "social-login",
                    "Social login",
                    "Sign in with an existing social account instead of a new password",
                    "I want users to skip the sign-up form and log in with an account they already have",
                    "Social login",
                    Complexity::Medium,
                    &["Social platform developer account", "Auth server"],
                    "/assets/examples/social-login.gif",
                ),
                feature(
                    "chat",
                    "Real-time chat",
                    "Users talk to each other live",
                    "I want my users to message each other in real time",
                    "Real-time chat",
                    Complexity::High,
                    &["Real-time database", "WebSocket server"],
                    "/assets/examples/chat.gif",
                ),
            ],
        },
        FeatureCategory {
            id: "technical".into(),
            name: "Technical".into(),
            features: vec![
                feature(
                    "deep-linking",
                    "Deep links",
                    "Links that open a specific page inside the app",
                    "I want a link to land directly on one screen of the app",
                    "Deep linking",
                    Complexity::Medium,
                    &[],
                    "/images/features/deep-link.png",
                ),
                feature(
                    "offline-mode",
                    "Offline mode",
                    "Core features keep working without a connection",
                    "I want the basics to work even with no internet",
                    "Offline support",
                    Complexity::High,
                    &[],
                    "/images/features/offline.png",
                ),
            ],
        },
    ]
}

// ─── JSON boundaries ─────────────────────────────────────────────────────

/// Parse a template catalog from JSON. The caller does I/O; this stays
/// pure and testable.
pub fn templates_from_json(json: &str) -> Result<Vec<Template>, ModelError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a feature catalog from JSON.
pub fn features_from_json(json: &str) -> Result<Vec<FeatureCategory>, ModelError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_templates_are_consistent() {
        let templates = business_templates();
        assert_eq!(templates.len(), 5);
        for t in &templates {
            assert!(!t.components.is_empty(), "template {} has no components", t.id);
            assert!(
                t.admin_inputs_consistent(),
                "template {} declares admin inputs without the flag",
                t.id
            );
        }
    }

    #[test]
    fn builtin_template_geometry_fits_canonical_width() {
        for t in business_templates() {
            for c in &t.components {
                assert!(
                    c.position.x + c.size.width <= 900.0,
                    "template {} component {} overflows canonical width",
                    t.id,
                    c.kind
                );
            }
        }
    }

    #[test]
    fn login_template_carries_a_flow() {
        let templates = business_templates();
        let login = templates.iter().find(|t| t.id == "login-template").unwrap();
        let flow = login.user_flow.as_ref().unwrap();
        assert_eq!(flow.step_count(), 4);
        assert_eq!(flow.steps_of_kind(FlowStepKind::Screen).len(), 2);
    }

    #[test]
    fn templates_roundtrip_through_json() {
        let json = serde_json::to_string(&business_templates()).unwrap();
        let back = templates_from_json(&json).unwrap();
        assert_eq!(back.len(), 5);
        let login = back.iter().find(|t| t.id == "login-template").unwrap();
        assert_eq!(login.user_flow.as_ref().unwrap().link_count(), 4);
    }

    #[test]
    fn malformed_catalog_json_is_an_error() {
        assert!(matches!(
            templates_from_json("not json"),
            Err(ModelError::Json(_))
        ));
    }

    #[test]
    fn palette_has_the_stock_components() {
        let items = palette_items();
        assert_eq!(items.len(), 4);
        assert!(items.iter().any(|i| i.kind == "NAVIGATION"));
    }

    #[test]
    fn feature_scenarios_group_by_category() {
        let categories = feature_scenarios();
        assert_eq!(categories.len(), 2);
        assert!(categories.iter().all(|c| !c.features.is_empty()));
    }
}
