//! Brand generator - turns briefs into brand identities using the AI ports.
//!
//! Text models produce the concept, palette, typography and tagline as JSON
//! (recovered with [`parse_llm_json`]); the image model renders logos and
//! application mockups. Logo rendering degrades to a placeholder mark when
//! the image model fails.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::{
    BrandColor, BrandConcept, BrandInputs, BrandOutput, BrandValue, ColorRole, DesignStyle,
    ElementKind, LogoSet, Mockup, MockupKind, RegeneratedElement, Typography,
};
use crate::generation::prompts::{
    self, BrandBrief, COLORS_MAX_TOKENS, CONCEPT_MAX_TOKENS, TAGLINE_MAX_TOKENS,
    TYPOGRAPHY_MAX_TOKENS,
};
use crate::generation::{parse_llm_json, placeholder_logo};
use crate::ports::{
    AiPortError, CoreError, ImageGeneratorPort, ImageRequest, TextGeneratorPort, TextRequest,
};
use crate::validation::{normalize_hex, validate_brand_inputs};

pub const TEXT_PROVIDER: &str = "Anthropic";
pub const IMAGE_PROVIDER: &str = "Replicate";

/// Fallbacks when a concept's palette lacks a role.
const LOGO_PRIMARY_FALLBACK: &str = "#000000";
const LOGO_SECONDARY_FALLBACK: &str = "#FFFFFF";
const LOGO_ACCENT_FALLBACK: &str = "#CCCCCC";

/// A stage of concept generation, reported to streaming clients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerationProgress {
    pub progress: f32,
    pub status: &'static str,
}

impl GenerationProgress {
    pub const STARTED: Self = Self {
        progress: 0.1,
        status: "Starting generation",
    };
    pub const ANALYZING: Self = Self {
        progress: 0.3,
        status: "Analyzing brand information",
    };
    pub const CREATING_LOGO: Self = Self {
        progress: 0.7,
        status: "Creating logo variations",
    };
    pub const COMPLETE: Self = Self {
        progress: 1.0,
        status: "Complete",
    };
}

/// Parameters for a standalone logo.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoRequest {
    #[serde(default = "default_brand_name")]
    pub brand_name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub values: Vec<BrandValue>,
    #[serde(default)]
    pub design_style: DesignStyle,
    /// Hex codes or color words.
    #[serde(default, alias = "colorPreferences")]
    pub colors: Vec<String>,
}

impl LogoRequest {
    fn brief(&self) -> BrandBrief {
        BrandBrief {
            brand_name: self.brand_name.clone(),
            industry: self.industry.clone(),
            description: self.description.clone(),
            values: self.values.iter().map(|v| v.value.clone()).collect(),
            style: self.design_style,
            color_preferences: self.colors.clone(),
            palette: Vec::new(),
        }
    }
}

fn default_brand_name() -> String {
    "Brand".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConceptDraft {
    #[serde(default)]
    logo_description: Option<String>,
    #[serde(default)]
    colors: Vec<ColorDraft>,
    #[serde(default)]
    typography: Option<Typography>,
    #[serde(default)]
    tagline: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ColorDraft {
    #[serde(default)]
    name: String,
    hex: String,
    #[serde(rename = "type", default)]
    role: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TaglineDraft {
    Object { tagline: String },
    Bare(String),
}

/// Map whatever the model wrote in `type` onto a role.
///
/// Models echo the template (`"primary/secondary/accent/base"`) or add words
/// (`"Primary color"`); the first recognised token wins.
fn loose_role(raw: &str) -> ColorRole {
    raw.to_ascii_lowercase()
        .split(|c: char| !c.is_ascii_alphabetic())
        .find_map(|token| match token {
            "neutral" | "background" => Some(ColorRole::Base),
            other => ColorRole::parse(other),
        })
        .unwrap_or(ColorRole::Base)
}

fn normalize_palette(drafts: Vec<ColorDraft>) -> Vec<BrandColor> {
    drafts
        .into_iter()
        .filter_map(|draft| {
            let Some(hex) = normalize_hex(&draft.hex) else {
                tracing::debug!(hex = %draft.hex, "Dropping color with invalid hex");
                return None;
            };
            let name = if draft.name.trim().is_empty() {
                hex.clone()
            } else {
                draft.name.trim().to_string()
            };
            Some(BrandColor {
                name,
                hex,
                role: loose_role(&draft.role),
            })
        })
        .collect()
}

fn palette_hexes(colors: &[BrandColor]) -> Vec<String> {
    colors.iter().map(|c| c.hex.clone()).collect()
}

/// Produces brand identities and individual elements.
pub struct BrandGenerator {
    text: Option<Arc<dyn TextGeneratorPort>>,
    image: Option<Arc<dyn ImageGeneratorPort>>,
}

impl BrandGenerator {
    pub fn new(
        text: Option<Arc<dyn TextGeneratorPort>>,
        image: Option<Arc<dyn ImageGeneratorPort>>,
    ) -> Self {
        Self { text, image }
    }

    pub const fn has_text(&self) -> bool {
        self.text.is_some()
    }

    pub const fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn text_model(&self) -> Option<String> {
        self.text.as_ref().map(|t| t.model_name())
    }

    pub fn image_model(&self) -> Option<String> {
        self.image.as_ref().map(|i| i.model_name())
    }

    fn text(&self) -> Result<&Arc<dyn TextGeneratorPort>, CoreError> {
        self.text
            .as_ref()
            .ok_or_else(|| AiPortError::not_configured(TEXT_PROVIDER).into())
    }

    fn image(&self) -> Result<&Arc<dyn ImageGeneratorPort>, CoreError> {
        self.image
            .as_ref()
            .ok_or_else(|| AiPortError::not_configured(IMAGE_PROVIDER).into())
    }

    /// Fails with `NotConfigured` unless the text model is present.
    pub fn ensure_text(&self) -> Result<(), CoreError> {
        self.text().map(|_| ())
    }

    pub fn ensure_image(&self) -> Result<(), CoreError> {
        self.image().map(|_| ())
    }

    /// Whether regenerating `kind` can work with the configured providers.
    pub fn ensure_available(&self, kind: ElementKind) -> Result<(), CoreError> {
        if kind.uses_image_model() {
            self.ensure_image()
        } else {
            self.ensure_text()
        }
    }

    async fn complete_raw(&self, prompt: String, max_tokens: u32) -> Result<String, CoreError> {
        let request = TextRequest::new(prompt, max_tokens);
        Ok(self.text()?.complete(&request).await?)
    }

    async fn complete_json<T: serde::de::DeserializeOwned>(
        &self,
        what: &str,
        prompt: String,
        max_tokens: u32,
    ) -> Result<T, CoreError> {
        let raw = self.complete_raw(prompt, max_tokens).await?;
        parse_llm_json(&raw).map_err(|e| {
            tracing::warn!(element = what, error = %e, "Model response was not usable JSON");
            CoreError::Generation(format!("{what}: {e}"))
        })
    }

    /// Generate a complete identity for a brief.
    pub async fn generate_concept(&self, inputs: &BrandInputs) -> Result<BrandOutput, CoreError> {
        self.generate_concept_with_progress(inputs, |_| {}).await
    }

    /// Same as [`generate_concept`](Self::generate_concept), reporting each stage.
    ///
    /// The final [`GenerationProgress::COMPLETE`] stage is left to the caller,
    /// which pairs it with the result.
    pub async fn generate_concept_with_progress<F>(
        &self,
        inputs: &BrandInputs,
        mut on_progress: F,
    ) -> Result<BrandOutput, CoreError>
    where
        F: FnMut(GenerationProgress) + Send,
    {
        validate_brand_inputs(inputs)?;
        self.text()?;
        on_progress(GenerationProgress::STARTED);

        let brief = BrandBrief::from_inputs(inputs);
        tracing::info!(brand = %brief.brand_name, "Generating brand concept");
        on_progress(GenerationProgress::ANALYZING);
        let draft: ConceptDraft = self
            .complete_json("concept", prompts::concept_prompt(&brief), CONCEPT_MAX_TOKENS)
            .await?;

        let colors = normalize_palette(draft.colors);
        if colors.is_empty() {
            tracing::warn!(brand = %brief.brand_name, "Model returned no usable colors");
        }

        on_progress(GenerationProgress::CREATING_LOGO);
        let brief = brief.with_palette(colors.clone());
        let logo = self.render_logo(&brief, &palette_hexes(&colors)).await;

        tracing::info!(brand = %brief.brand_name, colors = colors.len(), "Generated brand concept");
        Ok(BrandOutput {
            logo,
            colors,
            typography: draft.typography.unwrap_or_default(),
            logo_description: draft.logo_description.filter(|d| !d.trim().is_empty()),
            tagline: draft.tagline.filter(|t| !t.trim().is_empty()),
            contact_name: None,
            contact_title: None,
            contact_phone: None,
            address: None,
            mockups: Vec::new(),
        })
    }

    /// Generate a logo for an ad-hoc request. Requires the image model.
    pub async fn generate_logo(&self, request: &LogoRequest) -> Result<LogoSet, CoreError> {
        self.image()?;
        Ok(self.render_logo(&request.brief(), &request.colors).await)
    }

    /// Like [`generate_logo`](Self::generate_logo) but image model failures
    /// are returned instead of replaced by the placeholder.
    pub async fn probe_logo(&self, request: &LogoRequest) -> Result<LogoSet, CoreError> {
        let prompt = prompts::logo_prompt(&request.brief(), &request.colors);
        let asset = self
            .probe_image(&prompt)
            .await?
            .into_iter()
            .find(|a| !a.trim().is_empty())
            .ok_or_else(|| CoreError::Generation("logo: image model returned no output".to_string()))?;
        Ok(LogoSet::from_generated(asset))
    }

    /// Run a bare prompt through the image model and return its raw output.
    ///
    /// Used by the diagnostics endpoint; no placeholder fallback.
    pub async fn probe_image(&self, prompt: &str) -> Result<Vec<String>, CoreError> {
        let assets = self.image()?.generate(&ImageRequest::new(prompt)).await?;
        tracing::info!(outputs = assets.len(), "Image model probe finished");
        Ok(assets)
    }

    /// Image-model logo, or the placeholder when the model is absent or fails.
    async fn render_logo(&self, brief: &BrandBrief, colors: &[String]) -> LogoSet {
        let Some(image) = &self.image else {
            return placeholder_logo(&brief.brand_name, colors);
        };
        let request = ImageRequest::new(prompts::logo_prompt(brief, colors));
        match image.generate(&request).await {
            Ok(assets) => match assets.into_iter().find(|a| !a.trim().is_empty()) {
                Some(asset) => LogoSet::from_generated(asset),
                None => {
                    tracing::warn!(brand = %brief.brand_name, "Image model returned no logo, using placeholder");
                    placeholder_logo(&brief.brand_name, colors)
                }
            },
            Err(e) => {
                tracing::warn!(brand = %brief.brand_name, error = %e, "Logo generation failed, using placeholder");
                placeholder_logo(&brief.brand_name, colors)
            }
        }
    }

    /// Produce a fresh value for one element of an existing concept.
    pub async fn regenerate(
        &self,
        concept: &BrandConcept,
        kind: ElementKind,
    ) -> Result<RegeneratedElement, CoreError> {
        self.ensure_available(kind)?;
        let output = &concept.brand_output;
        let brief =
            BrandBrief::from_inputs(&concept.brand_inputs).with_palette(output.colors.clone());
        tracing::info!(concept_id = concept.id, element = %kind, "Regenerating element");

        match kind {
            ElementKind::Colors => {
                let drafts: Vec<ColorDraft> = self
                    .complete_json("colors", prompts::colors_prompt(&brief), COLORS_MAX_TOKENS)
                    .await?;
                let colors = normalize_palette(drafts);
                if colors.is_empty() {
                    return Err(CoreError::Generation(
                        "colors: model returned no usable colors".to_string(),
                    ));
                }
                Ok(RegeneratedElement::Colors(colors))
            }
            ElementKind::Typography => {
                let typography: Typography = self
                    .complete_json(
                        "typography",
                        prompts::typography_prompt(&brief),
                        TYPOGRAPHY_MAX_TOKENS,
                    )
                    .await?;
                Ok(RegeneratedElement::Typography(typography))
            }
            ElementKind::Tagline => {
                let raw = self
                    .complete_raw(prompts::tagline_prompt(&brief), TAGLINE_MAX_TOKENS)
                    .await?;
                Ok(RegeneratedElement::Tagline(extract_tagline(&raw)?))
            }
            ElementKind::Logo => {
                let colors = vec![
                    output
                        .color_for(ColorRole::Primary)
                        .unwrap_or(LOGO_PRIMARY_FALLBACK)
                        .to_string(),
                    output
                        .color_for(ColorRole::Secondary)
                        .unwrap_or(LOGO_SECONDARY_FALLBACK)
                        .to_string(),
                    output
                        .color_for(ColorRole::Accent)
                        .unwrap_or(LOGO_ACCENT_FALLBACK)
                        .to_string(),
                ];
                Ok(RegeneratedElement::Logo(
                    self.render_logo(&brief, &colors).await,
                ))
            }
            ElementKind::Applications => {
                let mockups = self
                    .render_applications(&brief, output.tagline.as_deref())
                    .await?;
                Ok(RegeneratedElement::Applications(mockups))
            }
        }
    }

    async fn render_applications(
        &self,
        brief: &BrandBrief,
        tagline: Option<&str>,
    ) -> Result<Vec<Mockup>, CoreError> {
        let image = self.image()?;
        let mut mockups = Vec::with_capacity(MockupKind::ALL.len());
        for kind in MockupKind::ALL {
            let request = ImageRequest::new(prompts::application_prompt(brief, kind, tagline))
                .with_aspect_ratio(prompts::application_aspect_ratio(kind));
            let asset = image
                .generate(&request)
                .await?
                .into_iter()
                .find(|a| !a.trim().is_empty())
                .ok_or_else(|| {
                    CoreError::Generation(format!("applications: no image for {}", kind.label()))
                })?;
            mockups.push(Mockup {
                kind: kind.as_str().to_string(),
                image_url: asset,
            });
        }
        Ok(mockups)
    }
}

/// Accepts `{"tagline": ...}`, a JSON string, or a single plain line.
fn extract_tagline(raw: &str) -> Result<String, CoreError> {
    let tagline = match parse_llm_json::<TaglineDraft>(raw) {
        Ok(TaglineDraft::Object { tagline } | TaglineDraft::Bare(tagline)) => tagline,
        Err(e) => {
            let line = raw.trim();
            if line.is_empty() || line.contains('\n') || line.contains('{') {
                return Err(CoreError::Generation(format!("tagline: {e}")));
            }
            line.trim_matches(|c| c == '"' || c == '\'').to_string()
        }
    };
    let tagline = tagline.trim().to_string();
    if tagline.is_empty() {
        return Err(CoreError::Generation("tagline: empty tagline".to_string()));
    }
    Ok(tagline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ai::{MockImageGeneratorPort, MockTextGeneratorPort};
    use crate::services::seed;
    use chrono::Utc;
    use std::sync::Mutex;

    const CONCEPT_REPLY: &str = r##"Here is your brand identity:
```json
{
  "logoDescription": "A rising sun over a roof line",
  "colors": [
    {"name": "Solar Blue", "hex": "#2563eb", "type": "primary"},
    {"name": "Energy Orange", "hex": "F97316", "type": "primary/secondary/accent/base"},
    {"name": "Broken", "hex": "not-a-color", "type": "accent"},
    {"name": "Eco Green", "hex": "#10B981", "type": "Accent color"}
  ],
  "typography": {"headings": "Montserrat", "body": "Open Sans"},
  "tagline": "Powering Tomorrow, Today"
}
```"##;

    fn text_replying(reply: &'static str) -> Arc<dyn TextGeneratorPort> {
        let mut mock = MockTextGeneratorPort::new();
        mock.expect_complete()
            .returning(move |_| Ok(reply.to_string()));
        Arc::new(mock)
    }

    fn image_replying(result: Result<Vec<String>, AiPortError>) -> Arc<dyn ImageGeneratorPort> {
        let mut mock = MockImageGeneratorPort::new();
        mock.expect_generate().returning(move |_| result.clone());
        Arc::new(mock)
    }

    fn concept() -> BrandConcept {
        BrandConcept {
            id: 1,
            project_id: 1,
            name: "Initial Concept".to_string(),
            created_at: Utc::now(),
            brand_inputs: seed::sample_inputs(),
            brand_output: seed::sample_output(),
            is_active: true,
        }
    }

    #[test]
    fn test_loose_role() {
        assert_eq!(loose_role("primary"), ColorRole::Primary);
        assert_eq!(loose_role("Secondary"), ColorRole::Secondary);
        assert_eq!(loose_role("primary/secondary/accent/base"), ColorRole::Primary);
        assert_eq!(loose_role("neutral"), ColorRole::Base);
        assert_eq!(loose_role(""), ColorRole::Base);
    }

    #[test]
    fn test_extract_tagline_forms() {
        assert_eq!(extract_tagline(r#"{"tagline": "Bright"}"#).unwrap(), "Bright");
        assert_eq!(extract_tagline(r#""Bright""#).unwrap(), "Bright");
        assert_eq!(extract_tagline("Bright ideas").unwrap(), "Bright ideas");
        assert!(extract_tagline("").is_err());
        assert!(extract_tagline("{\"other\": 1}").is_err());
    }

    #[tokio::test]
    async fn test_generate_concept_normalizes_palette() {
        let generator = BrandGenerator::new(Some(text_replying(CONCEPT_REPLY)), None);
        let output = generator
            .generate_concept(&seed::sample_inputs())
            .await
            .unwrap();

        let hexes: Vec<_> = output.colors.iter().map(|c| c.hex.as_str()).collect();
        assert_eq!(hexes, vec!["#2563EB", "#F97316", "#10B981"]);
        assert_eq!(output.colors[1].role, ColorRole::Primary);
        assert_eq!(output.colors[2].role, ColorRole::Accent);
        assert_eq!(output.typography.headings, "Montserrat");
        assert_eq!(output.tagline.as_deref(), Some("Powering Tomorrow, Today"));
        // No image model: placeholder drawn with the first color.
        assert!(output.logo.primary.contains("#2563EB"));
    }

    #[tokio::test]
    async fn test_generate_concept_reports_progress() {
        let generator = BrandGenerator::new(Some(text_replying(CONCEPT_REPLY)), None);
        let seen = Mutex::new(Vec::new());
        generator
            .generate_concept_with_progress(&seed::sample_inputs(), |p| {
                seen.lock().unwrap().push(p.progress);
            })
            .await
            .unwrap();
        assert_eq!(seen.into_inner().unwrap(), vec![0.1, 0.3, 0.7]);
    }

    #[tokio::test]
    async fn test_generate_concept_without_text_model() {
        let generator = BrandGenerator::new(None, None);
        let err = generator
            .generate_concept(&seed::sample_inputs())
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Ai(AiPortError::NotConfigured { .. })));
    }

    #[tokio::test]
    async fn test_generate_concept_rejects_prose() {
        let generator =
            BrandGenerator::new(Some(text_replying("Sorry, I can't do that.")), None);
        let err = generator
            .generate_concept(&seed::sample_inputs())
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Generation(_)));
    }

    #[tokio::test]
    async fn test_concept_prompt_uses_concept_budget() {
        let mut mock = MockTextGeneratorPort::new();
        mock.expect_complete()
            .withf(|req| req.max_tokens == CONCEPT_MAX_TOKENS && req.prompt.contains("Solystra"))
            .times(1)
            .returning(|_| Ok(CONCEPT_REPLY.to_string()));
        let generator = BrandGenerator::new(Some(Arc::new(mock)), None);
        generator
            .generate_concept(&seed::sample_inputs())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_logo_falls_back_to_placeholder() {
        let generator = BrandGenerator::new(
            None,
            Some(image_replying(Err(AiPortError::RateLimited))),
        );
        let request: LogoRequest =
            serde_json::from_str(r##"{"brandName": "Acme", "colors": ["#FF0000"]}"##).unwrap();
        let logo = generator.generate_logo(&request).await.unwrap();
        assert!(logo.primary.contains("#FF0000"));
        assert!(logo.primary.contains("Acme"));
    }

    #[tokio::test]
    async fn test_logo_uses_generated_url() {
        let url = "https://replicate.delivery/logo.png".to_string();
        let generator = BrandGenerator::new(None, Some(image_replying(Ok(vec![url.clone()]))));
        let request: LogoRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.brand_name, "Brand");
        let logo = generator.generate_logo(&request).await.unwrap();
        assert_eq!(logo.primary, url);
        assert_eq!(logo.reverse, url);
    }

    #[tokio::test]
    async fn test_probe_image_surfaces_errors() {
        let generator = BrandGenerator::new(
            None,
            Some(image_replying(Err(AiPortError::RateLimited))),
        );
        assert!(matches!(
            generator.probe_image("a photo of a cat").await,
            Err(CoreError::Ai(AiPortError::RateLimited))
        ));

        let generator =
            BrandGenerator::new(None, Some(image_replying(Ok(vec!["https://x/cat.png".into()]))));
        assert_eq!(
            generator.probe_image("a photo of a cat").await.unwrap(),
            vec!["https://x/cat.png"]
        );
    }

    #[tokio::test]
    async fn test_probe_logo_has_no_placeholder() {
        let request: LogoRequest = serde_json::from_str(r#"{"brandName": "Acme"}"#).unwrap();

        let generator = BrandGenerator::new(None, Some(image_replying(Ok(vec![" ".into()]))));
        assert!(matches!(
            generator.probe_logo(&request).await,
            Err(CoreError::Generation(_))
        ));

        let generator =
            BrandGenerator::new(None, Some(image_replying(Ok(vec!["https://x/logo.png".into()]))));
        let logo = generator.probe_logo(&request).await.unwrap();
        assert_eq!(logo.monochrome, "https://x/logo.png");
    }

    #[tokio::test]
    async fn test_logo_requires_image_model() {
        let generator = BrandGenerator::new(None, None);
        let request: LogoRequest = serde_json::from_str("{}").unwrap();
        assert!(generator.generate_logo(&request).await.is_err());
    }

    #[tokio::test]
    async fn test_regenerate_logo_uses_palette_roles() {
        let mut mock = MockImageGeneratorPort::new();
        mock.expect_generate()
            .withf(|req| req.prompt.contains("Colors: #2563EB, #F97316, #10B981"))
            .times(1)
            .returning(|_| Ok(vec!["https://img/logo.png".to_string()]));
        let generator = BrandGenerator::new(None, Some(Arc::new(mock)));

        let element = generator
            .regenerate(&concept(), ElementKind::Logo)
            .await
            .unwrap();
        assert_eq!(element.kind(), ElementKind::Logo);
    }

    #[tokio::test]
    async fn test_regenerate_logo_defaults_missing_roles() {
        let mut mock = MockImageGeneratorPort::new();
        mock.expect_generate()
            .withf(|req| req.prompt.contains("Colors: #000000, #FFFFFF, #CCCCCC"))
            .returning(|_| Ok(vec!["https://img/logo.png".to_string()]));
        let generator = BrandGenerator::new(None, Some(Arc::new(mock)));

        let mut concept = concept();
        concept.brand_output.colors.clear();
        generator
            .regenerate(&concept, ElementKind::Logo)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_regenerate_typography_and_tagline() {
        let generator = BrandGenerator::new(
            Some(text_replying(r#"{"headings": "Playfair Display", "body": "Lato"}"#)),
            None,
        );
        let element = generator
            .regenerate(&concept(), ElementKind::Typography)
            .await
            .unwrap();
        assert_eq!(
            element,
            RegeneratedElement::Typography(Typography {
                headings: "Playfair Display".to_string(),
                body: "Lato".to_string(),
            })
        );

        let generator = BrandGenerator::new(
            Some(text_replying("```json\n{\"tagline\": \"Sunlight, simplified\"}\n```")),
            None,
        );
        let element = generator
            .regenerate(&concept(), ElementKind::Tagline)
            .await
            .unwrap();
        assert_eq!(element, RegeneratedElement::Tagline("Sunlight, simplified".to_string()));
    }

    #[tokio::test]
    async fn test_regenerate_colors_requires_usable_palette() {
        let generator = BrandGenerator::new(
            Some(text_replying(r#"[{"name": "Bad", "hex": "nope", "type": "primary"}]"#)),
            None,
        );
        let err = generator
            .regenerate(&concept(), ElementKind::Colors)
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Generation(_)));
    }

    #[tokio::test]
    async fn test_regenerate_applications() {
        let generator = BrandGenerator::new(
            None,
            Some(image_replying(Ok(vec!["https://img/mockup.png".to_string()]))),
        );
        let RegeneratedElement::Applications(mockups) = generator
            .regenerate(&concept(), ElementKind::Applications)
            .await
            .unwrap()
        else {
            panic!("expected applications");
        };
        let kinds: Vec<_> = mockups.iter().map(|m| m.kind.as_str()).collect();
        assert_eq!(kinds, vec!["business_card", "billboard", "social_post"]);
    }

    #[tokio::test]
    async fn test_regenerate_checks_provider_first() {
        let generator = BrandGenerator::new(Some(text_replying("{}")), None);
        let err = generator
            .regenerate(&concept(), ElementKind::Applications)
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Ai(AiPortError::NotConfigured { .. })));
    }
}
