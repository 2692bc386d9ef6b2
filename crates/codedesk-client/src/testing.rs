//! In-memory doubles for handler tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::oneshot;
use url::Url;

use crate::surface::{Notifier, OutputRegion};
use crate::transport::{HttpReply, Transport, TransportError};

type ScriptedReply = Result<HttpReply, TransportError>;

#[derive(Debug, Default)]
pub(crate) struct RecordingOutput {
    writes: RefCell<Vec<String>>,
}

impl RecordingOutput {
    pub(crate) fn history(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }

    pub(crate) fn current(&self) -> String {
        self.writes.borrow().last().cloned().unwrap_or_default()
    }
}

impl OutputRegion for RecordingOutput {
    fn set_text(&self, text: &str) {
        self.writes.borrow_mut().push(text.to_string());
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingNotifier {
    alerts: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub(crate) fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

enum Scripted {
    Ready(ScriptedReply),
    Gated(oneshot::Receiver<ScriptedReply>),
}

/// Hands out scripted replies in call order and records every request.
pub(crate) struct ScriptedTransport {
    replies: RefCell<VecDeque<Scripted>>,
    calls: RefCell<Vec<(String, Value)>>,
}

impl ScriptedTransport {
    pub(crate) fn replying(replies: Vec<ScriptedReply>) -> Self {
        Self {
            replies: RefCell::new(replies.into_iter().map(Scripted::Ready).collect()),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Two calls whose replies are released by the returned senders.
    pub(crate) fn gated_pair() -> (
        Self,
        oneshot::Sender<ScriptedReply>,
        oneshot::Sender<ScriptedReply>,
    ) {
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        let transport = Self {
            replies: RefCell::new(VecDeque::from([
                Scripted::Gated(first_rx),
                Scripted::Gated(second_rx),
            ])),
            calls: RefCell::new(Vec::new()),
        };
        (transport, first_tx, second_tx)
    }

    pub(crate) fn calls(&self) -> Vec<(String, Value)> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn post_json(&self, url: &Url, body: &Value) -> Result<HttpReply, TransportError> {
        self.calls
            .borrow_mut()
            .push((url.to_string(), body.clone()));
        let next = self.replies.borrow_mut().pop_front();
        match next {
            Some(Scripted::Ready(reply)) => reply,
            Some(Scripted::Gated(gate)) => gate
                .await
                .unwrap_or_else(|_| Err(TransportError::new("gate dropped"))),
            None => Err(TransportError::new("no scripted reply left")),
        }
    }
}
