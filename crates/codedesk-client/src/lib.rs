#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(missing_docs, unreachable_pub, unused)]
#![allow(clippy::module_name_repetitions)]

//! Action handlers shared by every codedesk front-end.
//!
//! An action reads a fixed set of named form fields, checks the required ones
//! are present, posts them as JSON to one backend endpoint, and writes the
//! reply text into one output region. The page and the terminal only differ in
//! how they supply fields, show text, and raise blocking alerts.
//!
//! Layout:
//! - `field.rs`: named form controls and field sources
//! - `action.rs`: the six actions, their payloads and user-facing strings
//! - `config.rs`: injected backend address and transport limits
//! - `transport.rs`: HTTP seam plus the native `reqwest` implementation
//! - `outcome.rs`: reply classification into output-region text
//! - `generation.rs`: request generations for discarding stale replies
//! - `surface.rs`: output region and notifier seams
//! - `handler.rs`: the request/response cycle tying the above together

pub mod action;
pub mod config;
pub mod error;
pub mod field;
pub mod generation;
pub mod handler;
pub mod outcome;
pub mod surface;
pub mod transport;

pub use action::{Action, ActionRequest, MissingFields, OutputTarget};
pub use config::{ClientConfig, DEFAULT_BASE_URL, parse_base_url};
pub use error::ClientError;
pub use field::{Field, FieldSource, FieldValues};
pub use generation::{RequestGeneration, Ticket};
pub use handler::{ActionHandler, Invocation};
pub use outcome::{Outcome, UNKNOWN_ERROR_DETAIL, UNREACHABLE_TEXT};
pub use surface::{Notifier, OutputRegion};
#[cfg(not(target_arch = "wasm32"))]
pub use transport::ReqwestTransport;
pub use transport::{HttpReply, Transport, TransportError};

#[cfg(test)]
pub(crate) mod testing;
