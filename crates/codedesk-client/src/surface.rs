//! Seams between the handler and whatever displays its results.

/// A text region the handler overwrites.
pub trait OutputRegion {
    /// Replace the region's text.
    fn set_text(&self, text: &str);

    /// Show the in-progress placeholder. Defaults to [`Self::set_text`].
    fn show_pending(&self, text: &str) {
        self.set_text(text);
    }
}

/// Blocking notification raised for input the handler refuses to send.
pub trait Notifier {
    /// Present `message` to the user.
    fn alert(&self, message: &str);
}
