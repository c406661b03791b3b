//! Core data model for placed page components.
//!
//! A canvas holds an ordered collection of `Placement` values — one per
//! component the user has positioned. Placements are created in bulk by
//! template hydration or one at a time by a palette drop, and are mutated
//! in place (position or size only) by the pointer interaction controller.
//! Document order doubles as paint order: later placements render on top.

use crate::id::PlacementId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

// ─── Interactive size floor ──────────────────────────────────────────────

/// Minimum width a component can be resized to, in canvas pixels.
/// Enforced during interactive resize only — hydration and drops may
/// produce smaller components.
pub const MIN_COMPONENT_WIDTH: f32 = 100.0;
/// Minimum height a component can be resized to, in canvas pixels.
pub const MIN_COMPONENT_HEIGHT: f32 = 50.0;

// ─── Geometry ────────────────────────────────────────────────────────────

/// A point in canvas-local pixel coordinates, top-left origin.
/// Unclamped: positions may go negative or beyond the canvas bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translate by a delta.
    #[must_use]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Scale both axes by the same factor.
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

/// A width/height pair in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Scale both dimensions by the same factor.
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

// ─── Color ───────────────────────────────────────────────────────────────

/// RGBA color. Stored as 4 × u8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Helper to parse a single hex digit.
fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse a hex color string: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
    /// The string may optionally start with `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();

        match bytes.len() {
            3 => {
                let r = hex_val(bytes[0])?;
                let g = hex_val(bytes[1])?;
                let b = hex_val(bytes[2])?;
                Some(Self::rgba(r * 17, g * 17, b * 17, 255))
            }
            4 => {
                let r = hex_val(bytes[0])?;
                let g = hex_val(bytes[1])?;
                let b = hex_val(bytes[2])?;
                let a = hex_val(bytes[3])?;
                Some(Self::rgba(r * 17, g * 17, b * 17, a * 17))
            }
            6 => {
                let r = hex_val(bytes[0])? << 4 | hex_val(bytes[1])?;
                let g = hex_val(bytes[2])? << 4 | hex_val(bytes[3])?;
                let b = hex_val(bytes[4])? << 4 | hex_val(bytes[5])?;
                Some(Self::rgba(r, g, b, 255))
            }
            8 => {
                let r = hex_val(bytes[0])? << 4 | hex_val(bytes[1])?;
                let g = hex_val(bytes[2])? << 4 | hex_val(bytes[3])?;
                let b = hex_val(bytes[4])? << 4 | hex_val(bytes[5])?;
                let a = hex_val(bytes[6])? << 4 | hex_val(bytes[7])?;
                Some(Self::rgba(r, g, b, a))
            }
            _ => None,
        }
    }

    /// Emit as a hex string, omitting the alpha byte when fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

// ─── Style bag ───────────────────────────────────────────────────────────

/// A single style value. The set of value kinds is closed — hosts that
/// need richer styling attach more keys, not new kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Str(String),
    Number(f32),
    Color(Color),
}

/// Free-form per-placement styling, keyed by property name.
///
/// Written only between pointer interactions — the interaction controller
/// owns position/size writes, style writes belong to whoever edits the
/// inspector. Never both at once.
pub type StyleMap = HashMap<String, StyleValue>;

// ─── Component kinds ─────────────────────────────────────────────────────

/// The kinds of page components the builder knows how to render.
///
/// Template catalogs carry kind *labels* as strings; labels outside the
/// known set fold into `Custom` and render as a labeled placeholder box.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Navigation,
    LoginForm,
    Button,
    Input,
    Card,
    Hero,
    Features,
    ProductList,
    ProductDetail,
    Cart,
    CartList,
    PaymentSummary,
    Form,
    Custom(String),
}

impl ComponentKind {
    /// Resolve a catalog label to a kind. Unknown labels are preserved
    /// verbatim in `Custom` rather than rejected.
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_uppercase().as_str() {
            "NAVIGATION" => Self::Navigation,
            "LOGIN_FORM" => Self::LoginForm,
            "BUTTON" => Self::Button,
            "INPUT" => Self::Input,
            "CARD" => Self::Card,
            "HERO" => Self::Hero,
            "FEATURES" => Self::Features,
            "PRODUCT_LIST" => Self::ProductList,
            "PRODUCT_DETAIL" => Self::ProductDetail,
            "CART" => Self::Cart,
            "CART_LIST" => Self::CartList,
            "PAYMENT_SUMMARY" => Self::PaymentSummary,
            "FORM" => Self::Form,
            _ => Self::Custom(label.to_string()),
        }
    }

    /// The canonical catalog label for this kind.
    pub fn label(&self) -> &str {
        match self {
            Self::Navigation => "NAVIGATION",
            Self::LoginForm => "LOGIN_FORM",
            Self::Button => "BUTTON",
            Self::Input => "INPUT",
            Self::Card => "CARD",
            Self::Hero => "HERO",
            Self::Features => "FEATURES",
            Self::ProductList => "PRODUCT_LIST",
            Self::ProductDetail => "PRODUCT_DETAIL",
            Self::Cart => "CART",
            Self::CartList => "CART_LIST",
            Self::PaymentSummary => "PAYMENT_SUMMARY",
            Self::Form => "FORM",
            Self::Custom(label) => label,
        }
    }

    /// A lowercase identifier slug for generated placement IDs.
    pub fn id_prefix(&self) -> String {
        self.label().to_ascii_lowercase()
    }
}

impl Serialize for ComponentKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ComponentKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(ComponentKind::from_label(&s))
    }
}

// ─── Placement ───────────────────────────────────────────────────────────

/// One component placed on the canvas: identity, kind, geometry, styling.
///
/// A placement belongs to exactly one canvas collection. It is destroyed
/// only by wholesale collection replacement (template or device switch) —
/// there is no individual delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Placement {
    pub id: PlacementId,
    pub kind: ComponentKind,
    pub position: Point,
    pub size: Size,
    #[serde(default)]
    pub style: StyleMap,
}

impl Placement {
    /// Author a new placement with a freshly generated unique id and an
    /// empty style bag.
    pub fn new(kind: ComponentKind, position: Point, size: Size) -> Self {
        let id = PlacementId::generate(&kind.id_prefix());
        Self {
            id,
            kind,
            position,
            size,
            style: StyleMap::new(),
        }
    }

    /// True if any part of the placement lies outside the given canvas size.
    pub fn overflows(&self, canvas: Size) -> bool {
        self.position.x < 0.0
            || self.position.y < 0.0
            || self.position.x + self.size.width > canvas.width
            || self.position.y + self.size.height > canvas.height
    }
}
