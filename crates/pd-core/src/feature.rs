//! Tech-feature catalog types.
//!
//! Features are the "what else can my service do" menu shown beside the
//! canvas: push notifications, social login, payments. Pure display
//! data — selecting a feature never touches the placement collection.

use serde::{Deserialize, Serialize};

/// Rough implementation effort, shown as a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Complexity {
    Low,
    Medium,
    High,
}

/// One selectable capability, described for non-technical users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechFeature {
    pub id: String,
    /// User-facing name ("Send alerts while the app is closed").
    pub name: String,
    pub description: String,
    /// The user story that motivates the feature.
    pub scenario: String,
    /// Industry term ("Push notifications").
    pub technical_name: String,
    pub complexity: Complexity,
    /// Prerequisites surfaced to the operator, if any.
    #[serde(default)]
    pub requirements: Vec<String>,
    /// Path to an illustrative image or clip.
    pub visual_example: String,
}

/// A themed group of features.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureCategory {
    pub id: String,
    pub name: String,
    pub features: Vec<TechFeature>,
}
