//! Prompt templates for the text and image models.

use crate::domain::{BrandColor, BrandInputs, DesignStyle, MockupKind};

pub const CONCEPT_MAX_TOKENS: u32 = 4000;
pub const COLORS_MAX_TOKENS: u32 = 2000;
pub const TYPOGRAPHY_MAX_TOKENS: u32 = 1000;
pub const TAGLINE_MAX_TOKENS: u32 = 1000;

const JSON_FOOTER: &str =
    "Make sure the response is valid JSON and the formatting exactly matches the example structure.";

/// Everything a prompt may reference about a brand.
#[derive(Debug, Clone, Default)]
pub struct BrandBrief {
    pub brand_name: String,
    pub industry: String,
    pub description: String,
    pub values: Vec<String>,
    pub style: DesignStyle,
    pub color_preferences: Vec<String>,
    /// Current palette, when regenerating parts of an existing concept.
    pub palette: Vec<BrandColor>,
}

impl BrandBrief {
    pub fn from_inputs(inputs: &BrandInputs) -> Self {
        Self {
            brand_name: inputs.brand_name.clone(),
            industry: inputs.industry.clone(),
            description: inputs.description.clone(),
            values: inputs.value_strings(),
            style: inputs.design_style,
            color_preferences: inputs.color_preferences.clone(),
            palette: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Vec<BrandColor>) -> Self {
        self.palette = palette;
        self
    }

    fn header(&self) -> String {
        format!(
            "Brand Name: {}\nIndustry: {}\nDescription: {}\nCore Values: {}\nDesign Style: {}",
            self.brand_name,
            self.industry,
            self.description,
            self.values.join(", "),
            self.style
        )
    }

    fn preferences(&self) -> String {
        if self.color_preferences.is_empty() {
            "No specific preferences".to_string()
        } else {
            self.color_preferences.join(", ")
        }
    }
}

pub fn concept_prompt(brief: &BrandBrief) -> String {
    format!(
        r##"Create a comprehensive brand identity concept for the following brand:

{header}
Color Preferences: {prefs}

Please provide a complete brand identity package that includes:

1. A detailed logo description that could be used to generate a visual logo
2. A color palette with 4-5 colors including primary, secondary, accent, and base colors (with names and hex codes)
3. Typography recommendations for headings and body text
4. A memorable tagline that captures the brand essence

Format your response as a JSON object with the following structure:
```json
{{
  "logoDescription": "Detailed description of the logo concept",
  "colors": [
    {{"name": "Color Name", "hex": "#HEXCODE", "type": "primary/secondary/accent/base"}}
  ],
  "typography": {{
    "headings": "Heading Font",
    "body": "Body Font"
  }},
  "tagline": "Brand Tagline"
}}
```

{JSON_FOOTER}"##,
        header = brief.header(),
        prefs = brief.preferences(),
    )
}

pub fn colors_prompt(brief: &BrandBrief) -> String {
    format!(
        r##"Create a professional color palette for the following brand:

{header}

Generate a unique and refreshed color palette with 4-5 colors including:
- A primary brand color
- A secondary color
- An accent color
- 1-2 base/neutral colors

For each color, provide:
- A creative name that relates to the brand
- The exact hex code
- The type (primary, secondary, accent, or base)

Format your response as a JSON array with this structure:
```json
[
    {{"name": "Color Name", "hex": "#HEXCODE", "type": "primary"}},
    {{"name": "Color Name", "hex": "#HEXCODE", "type": "secondary"}},
    {{"name": "Color Name", "hex": "#HEXCODE", "type": "accent"}},
    {{"name": "Color Name", "hex": "#HEXCODE", "type": "base"}}
]
```

Make sure the colors work well together and reflect the brand's personality and industry.
{JSON_FOOTER}"##,
        header = brief.header(),
    )
}

pub fn typography_prompt(brief: &BrandBrief) -> String {
    let colors = brief
        .palette
        .iter()
        .take(3)
        .map(|c| format!("{} ({})", c.name, c.hex))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        r##"Recommend typography for the following brand:

{header}
Brand Colors: {colors}

Please suggest a typography pairing that:
- Complements the brand personality and values
- Works well with the design style
- Has a heading font with the right character for the brand
- Has a body text font that is readable and professional

Format your response as a JSON object with this structure:
```json
{{
    "headings": "Heading Font Name",
    "body": "Body Font Name"
}}
```

Focus on widely available, professional fonts that enhance the brand identity.
{JSON_FOOTER}"##,
        header = brief.header(),
    )
}

pub fn tagline_prompt(brief: &BrandBrief) -> String {
    format!(
        r##"Create a compelling tagline for the following brand:

{header}

Generate a memorable, concise tagline that:
- Captures the essence of the brand
- Reflects the core values
- Is unique and not generic
- Is brief (ideally 3-7 words)

Format your response as a JSON object with this structure:
```json
{{
    "tagline": "Your Brand Tagline Here"
}}
```

{JSON_FOOTER}"##,
        header = brief.header(),
    )
}

/// Image prompt for the logo. `colors` are hex codes in priority order.
pub fn logo_prompt(brief: &BrandBrief, colors: &[String]) -> String {
    format!(
        "Create a logo for a brand with the following details:\n\n\
         Brand Name: {}\nIndustry: {}\nDescription: {}\nValues: {}\nStyle: {}\nColors: {}\n\n\
         The logo should be professional, memorable, and aligned with the brand's values and industry. \
         Flat vector style on a plain background, no mockup, no extra text besides the brand name.",
        brief.brand_name,
        brief.industry,
        brief.description,
        brief.values.join(", "),
        brief.style,
        colors.join(", "),
    )
}

/// Image prompt for a brand application mockup.
pub fn application_prompt(brief: &BrandBrief, kind: MockupKind, tagline: Option<&str>) -> String {
    let palette = brief
        .palette
        .iter()
        .map(|c| c.hex.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let mut prompt = format!(
        "Photorealistic {} mockup for the brand \"{}\" ({} industry). \
         {} design style using the brand colors {}.",
        kind.label(),
        brief.brand_name,
        brief.industry,
        brief.style,
        if palette.is_empty() { "of your choice" } else { palette.as_str() },
    );
    if let Some(tagline) = tagline.filter(|t| !t.is_empty()) {
        prompt.push_str(&format!(" Include the tagline \"{tagline}\"."));
    }
    prompt
}

/// Aspect ratio suited to each application.
pub const fn application_aspect_ratio(kind: MockupKind) -> &'static str {
    match kind {
        MockupKind::BusinessCard => "3:2",
        MockupKind::Billboard => "16:9",
        MockupKind::SocialPost => "1:1",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ColorRole;

    fn brief() -> BrandBrief {
        BrandBrief {
            brand_name: "Solystra".to_string(),
            industry: "Renewable Energy".to_string(),
            description: "Solar solutions".to_string(),
            values: vec!["Sustainability".to_string(), "Innovation".to_string()],
            style: DesignStyle::Modern,
            color_preferences: Vec::new(),
            palette: vec![
                BrandColor {
                    name: "Solar Blue".to_string(),
                    hex: "#2563EB".to_string(),
                    role: ColorRole::Primary,
                },
                BrandColor {
                    name: "Energy Orange".to_string(),
                    hex: "#F97316".to_string(),
                    role: ColorRole::Secondary,
                },
            ],
        }
    }

    #[test]
    fn test_concept_prompt_mentions_brief() {
        let prompt = concept_prompt(&brief());
        assert!(prompt.contains("Brand Name: Solystra"));
        assert!(prompt.contains("Core Values: Sustainability, Innovation"));
        assert!(prompt.contains("No specific preferences"));
        assert!(prompt.contains("\"logoDescription\""));
        assert!(prompt.contains(r##"{"name": "Color Name", "hex": "#HEXCODE", "type": "primary/secondary/accent/base"}"##));
        assert!(prompt.contains("\"tagline\": \"Brand Tagline\""));
        assert!(prompt.ends_with(JSON_FOOTER));
    }

    #[test]
    fn test_colors_prompt_asks_for_array() {
        let prompt = colors_prompt(&brief());
        assert!(prompt.starts_with("Create a professional color palette"));
        assert!(prompt.contains("Brand Name: Solystra\nIndustry: Renewable Energy"));
        assert!(prompt.contains("```json\n[\n"));
        assert_eq!(prompt.matches(r##""hex": "#HEXCODE""##).count(), 4);
        assert!(prompt.contains(r#""type": "base""#));
        assert!(prompt.ends_with(JSON_FOOTER));
    }

    #[test]
    fn test_typography_prompt_lists_palette() {
        let prompt = typography_prompt(&brief());
        assert!(prompt.contains("Brand Name: Solystra"));
        assert!(prompt.contains("Solar Blue (#2563EB), Energy Orange (#F97316)"));
        assert!(prompt.contains(r#""headings": "Heading Font Name""#));
        assert!(prompt.contains(r#""body": "Body Font Name""#));
        assert!(prompt.ends_with(JSON_FOOTER));
    }

    #[test]
    fn test_tagline_prompt_shape() {
        let prompt = tagline_prompt(&brief());
        assert!(prompt.contains("Brand Name: Solystra"));
        assert!(prompt.contains("Design Style: modern"));
        assert!(prompt.contains(r#""tagline": "Your Brand Tagline Here""#));
        assert!(prompt.ends_with(JSON_FOOTER));
    }

    #[test]
    fn test_application_prompt_includes_tagline() {
        let prompt = application_prompt(&brief(), MockupKind::Billboard, Some("Powering Tomorrow"));
        assert!(prompt.contains("outdoor billboard"));
        assert!(prompt.contains("#2563EB, #F97316"));
        assert!(prompt.contains("Powering Tomorrow"));
    }

    #[test]
    fn test_logo_prompt_colors() {
        let prompt = logo_prompt(&brief(), &["#000000".to_string(), "#FFFFFF".to_string()]);
        assert!(prompt.contains("Colors: #000000, #FFFFFF"));
        assert!(prompt.contains("Style: modern"));
    }
}
