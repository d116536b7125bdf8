//! Recovering JSON from LLM text responses.
//!
//! Models wrap JSON in markdown fences, add a sentence before or after it,
//! use typographic quotes, or leave trailing commas. `parse_llm_json` tries
//! progressively more invasive clean-ups until one deserializes.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use thiserror::Error;

const PREVIEW_CHARS: usize = 200;

static TRAILING_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*([}\]])").expect("static regex"));

/// Why no JSON value could be recovered.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum JsonRecoveryError {
    #[error("model returned an empty response")]
    Empty,

    #[error("no JSON found in model response: {preview}")]
    NoJson { preview: String },

    #[error("could not parse model response as JSON ({message}): {preview}")]
    Parse { message: String, preview: String },
}

/// Parse `text` into `T`, applying recovery stages in order:
///
/// 1. the trimmed text as-is
/// 2. the body of the first markdown code fence
/// 3. the outermost `{...}` or `[...]` span
/// 4. that span with curly quotes straightened and trailing commas removed
pub fn parse_llm_json<T: DeserializeOwned>(text: &str) -> Result<T, JsonRecoveryError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(JsonRecoveryError::Empty);
    }

    let candidates = candidates(trimmed);
    let mut last_error = None;
    for candidate in &candidates {
        match serde_json::from_str::<T>(candidate) {
            Ok(value) => return Ok(value),
            Err(e) => last_error = Some(e),
        }
    }

    let preview = preview(trimmed);
    let looks_like_json = candidates.len() > 1 || trimmed.starts_with(['{', '[', '"']);
    match last_error {
        Some(e) if looks_like_json => Err(JsonRecoveryError::Parse {
            message: e.to_string(),
            preview,
        }),
        _ => Err(JsonRecoveryError::NoJson { preview }),
    }
}

fn candidates(trimmed: &str) -> Vec<Cow<'_, str>> {
    let mut out: Vec<Cow<'_, str>> = vec![Cow::Borrowed(trimmed)];

    let body = fenced_body(trimmed).unwrap_or(trimmed);
    if body != trimmed {
        out.push(Cow::Borrowed(body));
    }

    if let Some(span) = outer_span(body) {
        if span != body {
            out.push(Cow::Borrowed(span));
        }
        let repaired = repair(span);
        if repaired != span {
            out.push(Cow::Owned(repaired));
        }
    }
    out
}

/// Body of the first ```` ```json ```` fence, else of the first fence of
/// any kind. A language tag on the opening line is skipped and an
/// unterminated fence runs to the end of the text.
fn fenced_body(text: &str) -> Option<&str> {
    let start = json_fence_start(text).or_else(|| text.find("```"))? + 3;
    let rest = &text[start..];
    let body_start = match rest.find('\n') {
        Some(nl) if rest[..nl].trim().chars().all(char::is_alphanumeric) => nl + 1,
        _ => 0,
    };
    let body = &rest[body_start..];
    let end = body.find("```").unwrap_or(body.len());
    Some(body[..end].trim())
}

fn json_fence_start(text: &str) -> Option<usize> {
    text.match_indices("```json").map(|(i, _)| i).find(|&i| {
        text[i + 7..]
            .chars()
            .next()
            .is_none_or(char::is_whitespace)
    })
}

/// From the first opening bracket to the last matching closing bracket.
fn outer_span(text: &str) -> Option<&str> {
    let open = text.find(['{', '['])?;
    let close_char = if text[open..].starts_with('{') { '}' } else { ']' };
    let close = text.rfind(close_char)?;
    (close > open).then(|| &text[open..=close])
}

fn repair(span: &str) -> String {
    let straightened: String = span
        .chars()
        .map(|c| match c {
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' => '"',
            '\u{2018}' | '\u{2019}' => '\'',
            other => other,
        })
        .collect();
    TRAILING_COMMA.replace_all(&straightened, "$1").into_owned()
}

fn preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(PREVIEW_CHARS).collect();
    format!("{cut}...")
}
