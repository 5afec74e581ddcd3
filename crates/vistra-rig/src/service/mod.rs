//! Tutor service facade and its configuration.

mod config;
mod tutor;

pub use config::RigConfig;
pub use tutor::TutorService;
