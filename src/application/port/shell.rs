// SPDX-License-Identifier: MPL-2.0
//! Shell-side ports: the transport widgets the renderer mirrors state into,
//! and the sink the renderer notifies about playback lifecycle events.
//!
//! The widget tree is owned by the hosting shell. The renderer never draws;
//! it only pushes values (slider text, duration, normalized position, button
//! mode and label) and reads the one flag it must respect, the slider's
//! "being dragged" state.

/// Visual/semantic mode of the combined play/pause button and menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayButtonMode {
    /// Playback is stopped or paused; the button offers "play".
    Play,
    /// Playback is active; the button offers "pause".
    Pause,
}

/// Port for the shell's transport widget tree.
///
/// Timeline values are pushed in control units: elapsed text and duration in
/// milliseconds (`-1` duration means "unknown", shown as a blank timeline),
/// slider position as a normalized fraction in `[0, 1]`.
pub trait TransportWidgets: Send {
    /// Whether the user is currently dragging the slider thumb.
    ///
    /// While true, the renderer must not push timeline updates; polled state
    /// would fight the user's input.
    fn slider_being_dragged(&self) -> bool;

    /// Sets the elapsed-time display next to the slider.
    fn set_slider_text(&mut self, elapsed_ms: i64);

    /// Sets the total duration the slider represents. `-1` clears it.
    fn set_duration(&mut self, length_ms: i64);

    /// Moves the slider thumb to a normalized position in `[0, 1]`.
    fn move_slider(&mut self, fraction: f64);

    /// Updates the play/pause button's mode (widget class) and the
    /// corresponding menu item's label.
    fn set_play_button(&mut self, mode: PlayButtonMode, label: &str);
}

/// Port for the external playback-lifecycle sink.
///
/// Owned elsewhere (typically the host application core); the renderer only
/// invokes it.
pub trait PlaybackSink: Send {
    /// Playback of the current item finished, naturally or because there was
    /// nothing to play. Fired at most once per session.
    fn movie_finished(&mut self);

    /// A movie-data extraction attempt completed. `duration_ms` is `-1` when
    /// the extraction failed.
    fn extract_finished(&mut self, duration_ms: i64, success: bool);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_widgets_object_safe(_: &dyn TransportWidgets) {}
    fn _assert_sink_object_safe(_: &dyn PlaybackSink) {}

    #[derive(Default)]
    struct MockWidgets {
        dragging: bool,
        slider_text: Option<i64>,
        duration: Option<i64>,
        fraction: Option<f64>,
        button: Option<(PlayButtonMode, String)>,
    }

    impl TransportWidgets for MockWidgets {
        fn slider_being_dragged(&self) -> bool {
            self.dragging
        }

        fn set_slider_text(&mut self, elapsed_ms: i64) {
            self.slider_text = Some(elapsed_ms);
        }

        fn set_duration(&mut self, length_ms: i64) {
            self.duration = Some(length_ms);
        }

        fn move_slider(&mut self, fraction: f64) {
            self.fraction = Some(fraction);
        }

        fn set_play_button(&mut self, mode: PlayButtonMode, label: &str) {
            self.button = Some((mode, label.to_string()));
        }
    }

    #[derive(Default)]
    struct MockSink {
        finished: usize,
        extracts: Vec<(i64, bool)>,
    }

    impl PlaybackSink for MockSink {
        fn movie_finished(&mut self) {
            self.finished += 1;
        }

        fn extract_finished(&mut self, duration_ms: i64, success: bool) {
            self.extracts.push((duration_ms, success));
        }
    }

    #[test]
    fn mock_widgets_record_updates() {
        let mut widgets = MockWidgets::default();
        widgets.set_slider_text(1_500);
        widgets.set_duration(60_000);
        widgets.move_slider(0.025);
        widgets.set_play_button(PlayButtonMode::Pause, "Pause");

        assert!(!widgets.slider_being_dragged());
        assert_eq!(widgets.slider_text, Some(1_500));
        assert_eq!(widgets.duration, Some(60_000));
        assert_eq!(widgets.fraction, Some(0.025));
        assert_eq!(
            widgets.button,
            Some((PlayButtonMode::Pause, "Pause".to_string()))
        );
    }

    #[test]
    fn mock_sink_counts_completions() {
        let mut sink = MockSink::default();
        sink.movie_finished();
        sink.extract_finished(-1, false);

        assert_eq!(sink.finished, 1);
        assert_eq!(sink.extracts, vec![(-1, false)]);
    }
}
