//! Brand concept domain types.
//!
//! A brand concept pairs the user-supplied brief (`BrandInputs`) with the
//! AI-generated identity (`BrandOutput`). Wire names are camelCase to match
//! the frontend contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single core value of a brand, as entered in the brief form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandValue {
    pub id: String,
    pub value: String,
}

/// Visual direction requested for the identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignStyle {
    #[default]
    Modern,
    Classic,
    Minimalist,
    Bold,
}

impl DesignStyle {
    /// Convert style to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Classic => "classic",
            Self::Minimalist => "minimalist",
            Self::Bold => "bold",
        }
    }
}

impl std::fmt::Display for DesignStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The brief a user submits to generate a brand identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandInputs {
    pub brand_name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub values: Vec<BrandValue>,
    #[serde(default)]
    pub design_style: DesignStyle,
    #[serde(default)]
    pub color_preferences: Vec<String>,
}

impl BrandInputs {
    /// The plain value strings, in the order they were entered.
    pub fn value_strings(&self) -> Vec<String> {
        self.values.iter().map(|v| v.value.clone()).collect()
    }
}

/// Three renditions of the logo: full color, single color, and inverted.
///
/// Each field holds either inline SVG markup or an image URL returned by
/// the image model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoSet {
    pub primary: String,
    pub monochrome: String,
    pub reverse: String,
}

/// Role a color plays within the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorRole {
    Primary,
    Secondary,
    Accent,
    Base,
}

impl ColorRole {
    /// Parse a role from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "primary" => Some(Self::Primary),
            "secondary" => Some(Self::Secondary),
            "accent" => Some(Self::Accent),
            "base" => Some(Self::Base),
            _ => None,
        }
    }

    /// Convert role to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Base => "base",
        }
    }
}

/// A named palette entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandColor {
    pub name: String,
    pub hex: String,
    #[serde(rename = "type")]
    pub role: ColorRole,
}

/// Font pairing for the identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typography {
    pub headings: String,
    pub body: String,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            headings: "Arial".to_string(),
            body: "Helvetica".to_string(),
        }
    }
}

/// A rendered brand application (business card, billboard, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mockup {
    #[serde(rename = "type")]
    pub kind: String,
    pub image_url: String,
}

/// The generated identity attached to a concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandOutput {
    pub logo: LogoSet,
    pub colors: Vec<BrandColor>,
    pub typography: Typography,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mockups: Vec<Mockup>,
}

impl BrandOutput {
    /// First color with the given role, if the palette has one.
    pub fn color_for(&self, role: ColorRole) -> Option<&str> {
        self.colors
            .iter()
            .find(|c| c.role == role)
            .map(|c| c.hex.as_str())
    }

    /// Merge a partial output into this one.
    ///
    /// Only keys present in the patch are replaced; nested values are
    /// replaced whole rather than merged field by field.
    pub fn apply(&mut self, patch: BrandOutputPatch) {
        if let Some(logo) = patch.logo {
            self.logo = logo;
        }
        if let Some(colors) = patch.colors {
            self.colors = colors;
        }
        if let Some(typography) = patch.typography {
            self.typography = typography;
        }
        if let Some(desc) = patch.logo_description {
            self.logo_description = Some(desc);
        }
        if let Some(tagline) = patch.tagline {
            self.tagline = Some(tagline);
        }
        if let Some(name) = patch.contact_name {
            self.contact_name = Some(name);
        }
        if let Some(title) = patch.contact_title {
            self.contact_title = Some(title);
        }
        if let Some(phone) = patch.contact_phone {
            self.contact_phone = Some(phone);
        }
        if let Some(address) = patch.address {
            self.address = Some(address);
        }
        if let Some(mockups) = patch.mockups {
            self.mockups = mockups;
        }
    }
}

/// Partial `BrandOutput` used by updates and element regeneration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandOutputPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<LogoSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<BrandColor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography: Option<Typography>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mockups: Option<Vec<Mockup>>,
}

/// A persisted brand concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandConcept {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub brand_inputs: BrandInputs,
    pub brand_output: BrandOutput,
    pub is_active: bool,
}

/// Data for creating a new brand concept.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBrandConcept {
    /// Taken from the route, never trusted from the body.
    #[serde(skip)]
    pub project_id: i64,
    pub name: String,
    pub brand_inputs: BrandInputs,
    pub brand_output: BrandOutput,
    #[serde(default)]
    pub is_active: bool,
}

/// Partial update for a brand concept.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandConceptUpdate {
    pub name: Option<String>,
    /// Replaces the whole brief.
    pub brand_inputs: Option<BrandInputs>,
    /// Merged into the existing output (see [`BrandOutput::apply`]).
    pub brand_output: Option<BrandOutputPatch>,
    pub is_active: Option<bool>,
}

impl BrandConceptUpdate {
    /// Update that only patches the generated output.
    pub fn output(patch: BrandOutputPatch) -> Self {
        Self {
            brand_output: Some(patch),
            ..Self::default()
        }
    }

    /// Apply this update in place.
    ///
    /// Only deactivation is applied here. Activating touches sibling rows
    /// and goes through `ConceptRepository::set_active`.
    pub fn apply(&self, concept: &mut BrandConcept) {
        if self.is_active == Some(false) {
            concept.is_active = false;
        }
        if let Some(name) = &self.name {
            concept.name.clone_from(name);
        }
        if let Some(inputs) = &self.brand_inputs {
            concept.brand_inputs = inputs.clone();
        }
        if let Some(patch) = &self.brand_output {
            concept.brand_output.apply(patch.clone());
        }
    }
}
