//! Request payload types.

mod chat;
mod graphs;

pub use chat::ChatMessage;
pub use graphs::{GenerateGraph, RegenerateCode};
