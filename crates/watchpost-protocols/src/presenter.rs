//! Presentation collaborator for the alert popup.
//!
//! The popup core never draws or plays audio itself. It hands a [`PopupView`]
//! to a [`Presenter`] after every state change and asks it to play the alert
//! sound when a new alert appears.

use std::path::Path;

use serde::Serialize;

use crate::error::PresentationError;
use crate::types::{Alert, AlertKind};

/// Lifecycle phase of the popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PopupPhase {
    #[default]
    Hidden,
    /// Visible, countdown running.
    Counting,
    /// Visible, pointer over the popup.
    Paused,
    /// Exit animation in progress.
    Closing,
}

impl PopupPhase {
    pub fn is_visible(&self) -> bool {
        matches!(self, PopupPhase::Counting | PopupPhase::Paused)
    }
}

/// Render snapshot of a displayed popup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopupView {
    pub alert: Alert,
    pub phase: PopupPhase,
    /// Remaining time units; `None` for manual-dismiss popups.
    pub remaining: Option<u32>,
    /// The countdown label is hidden while hovering.
    pub show_countdown: bool,
}

impl PopupView {
    /// Countdown label such as `"4s"`.
    pub fn countdown_label(&self) -> Option<String> {
        match (self.show_countdown, self.remaining) {
            (true, Some(remaining)) => Some(format!("{}s", remaining)),
            _ => None,
        }
    }
}

pub trait Presenter: Send + Sync {
    /// Play the sound file at `sound_path`. Errors are logged by the caller and
    /// otherwise ignored.
    fn play_sound(
        &self,
        kind: AlertKind,
        sound_path: &Path,
        volume: f32,
    ) -> Result<(), PresentationError>;

    /// Redraw the popup; `None` means nothing is displayed.
    fn render(&self, view: Option<&PopupView>) {
        let _ = view;
    }
}

/// Presenter that does nothing. Used by headless callers and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn play_sound(
        &self,
        _kind: AlertKind,
        _sound_path: &Path,
        _volume: f32,
    ) -> Result<(), PresentationError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(show_countdown: bool, remaining: Option<u32>) -> PopupView {
        PopupView {
            alert: Alert::info("Camera online", "Camera 2 reconnected"),
            phase: PopupPhase::Counting,
            remaining,
            show_countdown,
        }
    }

    #[test]
    fn test_countdown_label() {
        assert_eq!(view(true, Some(4)).countdown_label().as_deref(), Some("4s"));
        assert_eq!(view(false, Some(4)).countdown_label(), None);
        assert_eq!(view(true, None).countdown_label(), None);
    }

    #[test]
    fn test_phase_visibility() {
        assert!(PopupPhase::Counting.is_visible());
        assert!(PopupPhase::Paused.is_visible());
        assert!(!PopupPhase::Closing.is_visible());
        assert!(!PopupPhase::Hidden.is_visible());
    }

    #[test]
    fn test_null_presenter_never_fails() {
        assert!(NullPresenter
            .play_sound(AlertKind::Error, Path::new("missing.mp3"), 0.5)
            .is_ok());
    }
}
