//! Host/embedded-application message protocol
//!
//! Messages in both directions are `{ type, payload? }` envelopes whose type is
//! namespaced with [`MSG_PREFIX`]. Inbound messages are accepted only from the
//! widget's own iframe and from an allowed origin.

mod envelope;
mod origin;
mod verbs;

pub use envelope::{Envelope, InboundMessage};
pub use origin::{is_origin_allowed, resolve_allowed_origins, target_origin, AllowedOrigin};
pub use verbs::Verb;

/// Namespace token prepended to every message type
pub const MSG_PREFIX: &str = "@@__widget_provider__@@";

/// Prefixed topic for a bare message type
pub fn topic(kind: &str) -> String {
    format!("{MSG_PREFIX}{kind}")
}
