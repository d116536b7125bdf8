//! AI provider port definitions.
//!
//! Text generation (Claude) and image generation (FLUX via Replicate) are
//! separate ports so either can be absent. Implementations live in
//! `mindtoeye-ai`.

mod error;
mod image;
mod text;

pub use error::{AiPortError, AiPortResult};
pub use image::{ImageGeneratorPort, ImageRequest};
pub use text::{TextGeneratorPort, TextRequest};

#[cfg(test)]
pub use image::MockImageGeneratorPort;
#[cfg(test)]
pub use text::MockTextGeneratorPort;
