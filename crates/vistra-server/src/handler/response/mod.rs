//! Response payload types.
//!
//! The structured payloads (`GraphPayload`, `CodeRewrite`) are defined in
//! `vistra-rig` since they double as the parse targets for model output;
//! they are re-exported here as the wire types.

mod chat;
mod errors;
mod monitors;

pub use chat::ChatReply;
pub use errors::ErrorResponse;
pub use monitors::HealthStatus;
pub use vistra_rig::payload::{CodeRewrite, Edge, GraphPayload, Node};
