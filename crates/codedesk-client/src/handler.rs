//! The request/response cycle shared by every action.
//!
//! # Design
//! - Presence check first; a blocked action raises one alert and sends nothing.
//! - Exactly one POST per unblocked invocation. No retries, no caching.
//! - The placeholder is written before the request goes out; the final text
//!   replaces it only if no newer invocation of the same action has started.

use tracing::{debug, warn};

use crate::action::{Action, MissingFields};
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::field::FieldSource;
use crate::generation::RequestGeneration;
use crate::outcome::Outcome;
use crate::surface::{Notifier, OutputRegion};
use crate::transport::Transport;

/// What happened to one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// A required field was empty; nothing was sent.
    Blocked(MissingFields),
    /// The request finished and its text was written to the output region.
    Completed(Outcome),
    /// The request finished after a newer one started; nothing was written.
    Superseded(Outcome),
}

/// Runs actions against one backend through one transport.
#[derive(Debug, Clone)]
pub struct ActionHandler<T> {
    config: ClientConfig,
    transport: T,
}

impl<T: Transport> ActionHandler<T> {
    /// Pair a backend configuration with a transport.
    #[must_use]
    pub const fn new(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Configuration this handler posts against.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Run `action` once.
    ///
    /// Reads `fields`, alerts through `notifier` when a required field is
    /// empty, otherwise shows the placeholder in `output`, posts the payload
    /// and writes the outcome text, unless `generation` has moved on.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] only when the request cannot be formed (bad
    /// endpoint URL or unencodable payload). Backend and network failures are
    /// reported through the returned [`Invocation`].
    pub async fn invoke(
        &self,
        action: Action,
        fields: &dyn FieldSource,
        output: &dyn OutputRegion,
        notifier: &dyn Notifier,
        generation: &RequestGeneration,
    ) -> Result<Invocation, ClientError> {
        let request = match action.collect(fields) {
            Ok(request) => request,
            Err(missing) => {
                debug!(action = action.name(), fields = ?missing.fields, "required fields empty");
                notifier.alert(missing.alert());
                return Ok(Invocation::Blocked(missing));
            }
        };

        let url = self.config.endpoint(action.endpoint())?;
        let body = request.to_json().map_err(ClientError::Encode)?;

        let ticket = generation.begin();
        output.show_pending(action.pending_text());
        debug!(
            action = action.name(),
            url = %url,
            generation = ticket.generation(),
            "dispatching action"
        );

        let outcome = match self.transport.post_json(&url, &body).await {
            Ok(reply) => Outcome::from_reply(action, &reply),
            Err(err) => {
                warn!(action = action.name(), error = %err, "backend unreachable");
                Outcome::Unreachable
            }
        };
        if let Outcome::Malformed { status, reason } = &outcome {
            warn!(action = action.name(), status, reason = %reason, "malformed reply");
        }

        if ticket.is_current() {
            output.set_text(&outcome.text());
            Ok(Invocation::Completed(outcome))
        } else {
            debug!(
                action = action.name(),
                generation = ticket.generation(),
                latest = generation.latest(),
                "discarding superseded reply"
            );
            Ok(Invocation::Superseded(outcome))
        }
    }
}
