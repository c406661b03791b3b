//! Component kind → visual descriptor lookup.
//!
//! Each kind maps to a fixed, illustrative visual — the builder is a
//! layout mock-up tool, not a live-data renderer, so a login form always
//! shows the same two fields and a button no matter what the model holds.
//! Kinds outside the known set get a labeled placeholder box instead of
//! failing.

use pd_core::model::{Color, ComponentKind};
use smallvec::{SmallVec, smallvec};

/// Primary accent used for bars, buttons, and the resize handle.
pub const ACCENT: Color = Color::rgb(0x19, 0x76, 0xD2);
/// Component surface color.
pub const SURFACE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
/// Hairline outline around components and field slots.
pub const OUTLINE: Color = Color::rgb(0xCC, 0xCC, 0xCC);
/// Tint for illustrative image/content blocks.
pub const BLOCK_TINT: Color = Color::rgb(0xE3, 0xF2, 0xFD);
/// Placeholder surface for unrecognized kinds.
pub const PLACEHOLDER: Color = Color::rgb(0xF5, 0xF5, 0xF5);

/// One illustrative element inside a component visual. Parts are stacked
/// top to bottom in the component's bounds by the painter.
#[derive(Debug, Clone, PartialEq)]
pub enum VisualPart {
    /// Full-width accent strip with a title (app bars).
    Bar { title: String },
    /// An outlined input slot with a label.
    Field { label: String },
    /// An accent-filled button.
    Button { label: String },
    /// Heading text.
    Title(String),
    /// Body copy.
    Body(String),
    /// A tinted content block standing in for imagery or lists.
    Block { tint: Color },
}

/// A pure description of how one component kind looks.
#[derive(Debug, Clone, PartialEq)]
pub struct Visual {
    /// Display name, shown in palettes and placeholder boxes.
    pub name: String,
    pub fill: Color,
    pub corner_radius: f32,
    pub parts: SmallVec<[VisualPart; 4]>,
}

impl Visual {
    fn surface(name: &str, parts: SmallVec<[VisualPart; 4]>) -> Self {
        Self {
            name: name.into(),
            fill: SURFACE,
            corner_radius: 2.0,
            parts,
        }
    }

    /// The generic labeled box used for any kind the table does not know.
    pub fn placeholder(label: &str) -> Self {
        Self {
            name: label.into(),
            fill: PLACEHOLDER,
            corner_radius: 2.0,
            parts: smallvec![VisualPart::Title(label.into())],
        }
    }

    /// True if this visual is the unknown-kind placeholder shape.
    pub fn is_placeholder(&self) -> bool {
        self.fill == PLACEHOLDER
    }
}

fn bar(title: &str) -> VisualPart {
    VisualPart::Bar { title: title.into() }
}

fn field(label: &str) -> VisualPart {
    VisualPart::Field { label: label.into() }
}

fn button(label: &str) -> VisualPart {
    VisualPart::Button { label: label.into() }
}

fn title(text: &str) -> VisualPart {
    VisualPart::Title(text.into())
}

fn body(text: &str) -> VisualPart {
    VisualPart::Body(text.into())
}

fn block() -> VisualPart {
    VisualPart::Block { tint: BLOCK_TINT }
}

/// Look up the visual for a component kind.
pub fn visual_for(kind: &ComponentKind) -> Visual {
    match kind {
        ComponentKind::Navigation => Visual::surface("Navigation", smallvec![bar("Navigation")]),
        ComponentKind::LoginForm => Visual::surface(
            "Login form",
            smallvec![field("Username"), field("Password"), button("Login")],
        ),
        ComponentKind::Button => Visual::surface("Button", smallvec![button("Button")]),
        ComponentKind::Input => Visual::surface("Input", smallvec![field("Input field")]),
        ComponentKind::Card => Visual::surface(
            "Card",
            smallvec![title("Card Title"), body("Card content goes here")],
        ),
        ComponentKind::Hero => Visual::surface("Hero", smallvec![block(), title("Hero headline")]),
        ComponentKind::Features => Visual::surface(
            "Features",
            smallvec![title("Features"), block()],
        ),
        ComponentKind::ProductList => Visual::surface(
            "Product list",
            smallvec![title("Products"), block(), block()],
        ),
        ComponentKind::ProductDetail => Visual::surface(
            "Product detail",
            smallvec![block(), title("Product"), body("Details"), button("Buy")],
        ),
        ComponentKind::Cart => Visual::surface(
            "Cart",
            smallvec![title("Cart"), block(), button("Order")],
        ),
        ComponentKind::CartList => Visual::surface(
            "Cart items",
            smallvec![title("Cart items"), block()],
        ),
        ComponentKind::PaymentSummary => Visual::surface(
            "Payment summary",
            smallvec![title("Payment summary"), body("Total"), button("Checkout")],
        ),
        ComponentKind::Form => Visual::surface(
            "Form",
            smallvec![field("Field"), field("Field"), button("Submit")],
        ),
        ComponentKind::Custom(label) => Visual::placeholder(label),
    }
}
