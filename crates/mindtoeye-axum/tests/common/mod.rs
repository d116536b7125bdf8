//! Shared helpers for the router integration tests.

#![allow(dead_code)]

pub mod fakes;

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, header};
use http_body_util::BodyExt;
use mindtoeye_axum::bootstrap::{AxumContext, ServerConfig};
use mindtoeye_axum::routes::create_router;
use mindtoeye_core::ports::{ImageGeneratorPort, TextGeneratorPort};
use mindtoeye_core::services::{AppCore, seed_demo_data};
use mindtoeye_db::CoreFactory;
use serde_json::Value;

use fakes::{CONCEPT_REPLY, FakeImage, FakeText, LOGO_URL};

/// Memory-backed core with the demo data and the given providers.
pub async fn core_with(
    text: Option<Arc<dyn TextGeneratorPort>>,
    image: Option<Arc<dyn ImageGeneratorPort>>,
) -> AppCore {
    let core = AppCore::new(CoreFactory::build_memory_repos(), text, image);
    seed_demo_data(core.repos()).await.unwrap();
    core
}

/// Router over seeded memory storage and working fake providers.
pub async fn app() -> Router {
    app_with(
        Some(Arc::new(FakeText::replying(CONCEPT_REPLY))),
        Some(Arc::new(FakeImage::replying(LOGO_URL))),
    )
    .await
}

pub async fn app_with(
    text: Option<Arc<dyn TextGeneratorPort>>,
    image: Option<Arc<dyn ImageGeneratorPort>>,
) -> Router {
    let core = core_with(text, image).await;
    create_router(AxumContext::new(core), &ServerConfig::default())
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        panic!(
            "expected JSON body ({e}), got: {}",
            String::from_utf8_lossy(&bytes)
        )
    })
}
