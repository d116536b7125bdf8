//! Newline-delimited JSON progress stream for concept generation.
//!
//! Each line is either a progress update `{"progress", "status", "data"?}`
//! or a terminal `{"error"}`. The final progress line (`1.0`) carries the
//! generated output in `data`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use mindtoeye_core::services::AppCore;
use mindtoeye_core::{BrandInputs, BrandOutput, GenerationProgress};
use serde::Serialize;
use tokio::sync::mpsc;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::ReceiverStream;

use crate::error::HttpError;

pub const NDJSON_CONTENT_TYPE: &str = "application/x-ndjson";

/// Buffered lines between the generator task and the response body.
const CHANNEL_CAPACITY: usize = 8;

/// One line of the stream.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum StreamLine {
    Progress {
        progress: f32,
        status: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        data: Option<Box<BrandOutput>>,
    },
    Error {
        error: String,
    },
}

impl StreamLine {
    pub const fn progress(stage: GenerationProgress) -> Self {
        Self::Progress {
            progress: stage.progress,
            status: stage.status,
            data: None,
        }
    }

    pub fn complete(output: BrandOutput) -> Self {
        Self::Progress {
            progress: GenerationProgress::COMPLETE.progress,
            status: GenerationProgress::COMPLETE.status,
            data: Some(Box::new(output)),
        }
    }

    pub fn error(err: HttpError) -> Self {
        Self::Error {
            error: err.into_message(),
        }
    }

    fn to_line(&self) -> Result<Vec<u8>, serde_json::Error> {
        let mut bytes = serde_json::to_vec(self)?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}

/// Run generation in a background task and stream its progress.
///
/// Callers check inputs and provider availability first so that those
/// failures still produce a regular JSON error response.
pub fn generation_response(core: Arc<AppCore>, inputs: BrandInputs) -> Response {
    let (tx, rx) = mpsc::channel::<StreamLine>(CHANNEL_CAPACITY);

    tokio::spawn(async move {
        let progress_tx = tx.clone();
        let result = core
            .generator()
            .generate_concept_with_progress(&inputs, move |stage| {
                if progress_tx.try_send(StreamLine::progress(stage)).is_err() {
                    tracing::debug!(status = stage.status, "Dropped progress line");
                }
            })
            .await;

        let last = match result {
            Ok(output) => StreamLine::complete(output),
            Err(e) => {
                tracing::warn!(error = %e, "Streamed generation failed");
                StreamLine::error(e.into())
            }
        };
        if tx.send(last).await.is_err() {
            tracing::debug!("Client went away before generation finished");
        }
    });

    let lines = ReceiverStream::new(rx).map(|line| line.to_line());

    (
        [
            (header::CONTENT_TYPE, NDJSON_CONTENT_TYPE),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        Body::from_stream(lines),
    )
        .into_response()
}
