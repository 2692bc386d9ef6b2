//! Output regions and notifications backed by yew state and browser dialogs.

use codedesk_client::{Notifier, OutputRegion};
use yew::prelude::UseStateHandle;

/// Output region whose text lives in a `use_state` handle.
pub(crate) struct StateRegion(pub(crate) UseStateHandle<String>);

impl OutputRegion for StateRegion {
    fn set_text(&self, text: &str) {
        self.0.set(text.to_string());
    }
}

/// Blocking `window.alert`.
pub(crate) struct DialogNotifier;

impl Notifier for DialogNotifier {
    fn alert(&self, message: &str) {
        gloo::dialogs::alert(message);
    }
}
