//! Play/pause flag for the decorative video testimonial.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayToggle {
    pub is_playing: bool,
}

impl PlayToggle {
    pub fn toggle(&mut self) {
        self.is_playing = !self.is_playing;
    }

    /// Glyph for the control button: pause while playing, play otherwise.
    #[must_use]
    pub fn icon(self) -> &'static str {
        if self.is_playing { "❚❚" } else { "▶" }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        if self.is_playing { "Pause video" } else { "Play video" }
    }
}
