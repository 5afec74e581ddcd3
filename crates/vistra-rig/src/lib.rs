#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod error;
pub mod gateway;
pub mod payload;
pub mod prompt;
pub mod provider;
pub mod sanitize;
mod service;

pub use error::{Error, Result};
pub use service::{RigConfig, TutorService};

/// Tracing target for the main library.
pub const TRACING_TARGET: &str = "vistra_rig";
