//! Completion backends and type-safe model references.

mod backend;
mod gemini;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod model;

pub use backend::CompletionBackend;
pub use gemini::GeminiBackend;
#[cfg(any(test, feature = "mock"))]
#[cfg_attr(docsrs, doc(cfg(feature = "mock")))]
pub use mock::{MockBackend, MockOutcome};
pub use model::{DEFAULT_FALLBACK_CHAIN, GeminiCompletionModel};
