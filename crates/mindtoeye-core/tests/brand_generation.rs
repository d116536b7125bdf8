//! Concept generation through the public API with a scripted text model.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mindtoeye_core::ports::{AiPortResult, TextGeneratorPort, TextRequest};
use mindtoeye_core::services::seed::sample_inputs;
use mindtoeye_core::generation::logo::DEFAULT_PRIMARY;
use mindtoeye_core::{BrandGenerator, ColorRole, CoreError, GenerationProgress};

/// Replies in order; the last reply repeats.
struct ScriptedText {
    replies: Mutex<Vec<String>>,
}

impl ScriptedText {
    fn new(replies: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.iter().rev().map(ToString::to_string).collect()),
        })
    }
}

#[async_trait]
impl TextGeneratorPort for ScriptedText {
    async fn complete(&self, _request: &TextRequest) -> AiPortResult<String> {
        let mut replies = self.replies.lock().unwrap();
        let reply = if replies.len() > 1 {
            replies.pop().unwrap()
        } else {
            replies[0].clone()
        };
        Ok(reply)
    }

    fn model_name(&self) -> String {
        "scripted".to_string()
    }
}

const MESSY_REPLY: &str = "Sure! Here’s the identity you asked for:\n\
{\n\
  “logoDescription”: “A sun rising over a stylised roof”,\n\
  “colors”: [\n\
    {“name”: “Solar Blue”, “hex”: “#25e”, “type”: “Primary color”},\n\
    {“name”: “Ember”, “hex”: “F97316”, “type”: “secondary”},\n\
    {“name”: “Oops”, “hex”: “blue”, “type”: “accent”},\n\
    {“name”: “Paper”, “hex”: “#F8FAFC”, “type”: “neutral”},\n\
  ],\n\
  “tagline”: “Powering Tomorrow, Today”,\n\
}\n\
Let me know if you want changes.";

#[tokio::test]
async fn messy_reply_becomes_clean_output() {
    let generator = BrandGenerator::new(Some(ScriptedText::new(&[MESSY_REPLY])), None);
    let output = generator.generate_concept(&sample_inputs()).await.unwrap();

    let hexes: Vec<&str> = output.colors.iter().map(|c| c.hex.as_str()).collect();
    assert_eq!(hexes, ["#2255EE", "#F97316", "#F8FAFC"]);
    assert_eq!(output.colors[0].role, ColorRole::Primary);
    assert_eq!(output.colors[2].role, ColorRole::Base);

    // Missing typography gets the default pair.
    assert_eq!(output.typography.headings, "Arial");
    assert_eq!(output.tagline.as_deref(), Some("Powering Tomorrow, Today"));

    // No image model: placeholder mark in the primary color.
    assert!(output.logo.primary.starts_with("<svg"));
    assert!(output.logo.primary.contains("#2255EE"));
    assert!(output.logo.primary.contains("Solystra"));
}

#[tokio::test]
async fn progress_stages_arrive_in_order() {
    let generator = BrandGenerator::new(Some(ScriptedText::new(&[MESSY_REPLY])), None);
    let mut seen = Vec::new();
    generator
        .generate_concept_with_progress(&sample_inputs(), |stage| seen.push(stage))
        .await
        .unwrap();
    assert_eq!(
        seen,
        [
            GenerationProgress::STARTED,
            GenerationProgress::ANALYZING,
            GenerationProgress::CREATING_LOGO
        ]
    );
}

#[tokio::test]
async fn prose_only_reply_is_a_generation_error() {
    let generator = BrandGenerator::new(
        Some(ScriptedText::new(&["I'd love to help with Solystra!"])),
        None,
    );
    let err = generator.generate_concept(&sample_inputs()).await.unwrap_err();
    assert!(matches!(err, CoreError::Generation(_)));
}

#[tokio::test]
async fn empty_or_invalid_palette_keeps_output() {
    for reply in [
        r#"{"logoDescription": "A sun", "colors": [], "tagline": "Bright"}"#,
        r#"{"colors": [{"name": "Oops", "hex": "blue", "type": "primary"}], "tagline": "Bright"}"#,
    ] {
        let generator = BrandGenerator::new(Some(ScriptedText::new(&[reply])), None);
        let output = generator.generate_concept(&sample_inputs()).await.unwrap();

        assert!(output.colors.is_empty(), "{reply}");
        assert_eq!(output.tagline.as_deref(), Some("Bright"));
        assert!(output.logo.primary.contains(DEFAULT_PRIMARY));
    }
}
