//! Model-provider implementations of [`crate::generation::backend::GenerationBackend`].

pub mod gemini;

pub use gemini::GeminiBackend;
