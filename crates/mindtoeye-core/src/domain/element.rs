//! Individually regenerable parts of a brand identity.

use serde::{Deserialize, Serialize};

use super::concept::{BrandColor, BrandOutputPatch, LogoSet, Mockup, Typography};

/// Which part of a concept's output to regenerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Colors,
    Typography,
    Logo,
    Tagline,
    Applications,
}

impl ElementKind {
    /// Parse an element kind from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "colors" => Some(Self::Colors),
            "typography" => Some(Self::Typography),
            "logo" => Some(Self::Logo),
            "tagline" => Some(Self::Tagline),
            "applications" => Some(Self::Applications),
            _ => None,
        }
    }

    /// Convert kind to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Colors => "colors",
            Self::Typography => "typography",
            Self::Logo => "logo",
            Self::Tagline => "tagline",
            Self::Applications => "applications",
        }
    }

    /// Whether this element is produced by the image model.
    pub const fn uses_image_model(&self) -> bool {
        matches!(self, Self::Logo | Self::Applications)
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Brand applications rendered as mockups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockupKind {
    BusinessCard,
    Billboard,
    SocialPost,
}

impl MockupKind {
    pub const ALL: [Self; 3] = [Self::BusinessCard, Self::Billboard, Self::SocialPost];

    /// Value stored in `Mockup::kind`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BusinessCard => "business_card",
            Self::Billboard => "billboard",
            Self::SocialPost => "social_post",
        }
    }

    /// Human-readable label used inside image prompts.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::BusinessCard => "business card",
            Self::Billboard => "outdoor billboard",
            Self::SocialPost => "social media post",
        }
    }
}

/// Freshly generated value for a single element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegeneratedElement {
    Colors(Vec<BrandColor>),
    Typography(Typography),
    Logo(LogoSet),
    Tagline(String),
    Applications(Vec<Mockup>),
}

impl RegeneratedElement {
    pub const fn kind(&self) -> ElementKind {
        match self {
            Self::Colors(_) => ElementKind::Colors,
            Self::Typography(_) => ElementKind::Typography,
            Self::Logo(_) => ElementKind::Logo,
            Self::Tagline(_) => ElementKind::Tagline,
            Self::Applications(_) => ElementKind::Applications,
        }
    }

    /// Convert into a patch touching only this element.
    pub fn into_patch(self) -> BrandOutputPatch {
        let mut patch = BrandOutputPatch::default();
        match self {
            Self::Colors(colors) => patch.colors = Some(colors),
            Self::Typography(typography) => patch.typography = Some(typography),
            Self::Logo(logo) => patch.logo = Some(logo),
            Self::Tagline(tagline) => patch.tagline = Some(tagline),
            Self::Applications(mockups) => patch.mockups = Some(mockups),
        }
        patch
    }
}
