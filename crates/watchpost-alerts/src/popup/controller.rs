//! Popup state machine.
//!
//! ```text
//! Hidden --show--> Counting --hover--> Paused --unhover--> Counting
//!                     |  \__ tick x N __                      |
//!                     |                 \                     |
//!                     +--close/click--> Closing <--close/click+
//!                                          |
//!                                   finish_close
//!                                          v
//!                                        Hidden
//! ```
//!
//! `show` is accepted in every phase and always replaces the current alert.
//! Every accepted transition bumps the timer epoch; timers armed under an
//! older epoch must not act.

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, trace};

use watchpost_config::{ConfigLoader, PopupConfig};
use watchpost_protocols::{Alert, PopupPhase, PopupView, Presenter, ValidationError};

#[derive(Debug, Clone)]
struct AlertSound {
    path: PathBuf,
    volume: f32,
}

/// Owns the single displayed alert and its countdown.
pub struct AlertPopupController {
    presenter: Arc<dyn Presenter>,
    /// Full countdown in ticks; `0` disables auto-dismiss.
    duration: u32,
    /// `None` when sounds are disabled.
    sound: Option<AlertSound>,
    alert: Option<Alert>,
    phase: PopupPhase,
    remaining: u32,
    epoch: u64,
}

impl AlertPopupController {
    /// Create a controller from popup configuration.
    pub fn new(config: &PopupConfig, presenter: Arc<dyn Presenter>) -> Self {
        Self {
            presenter,
            duration: config.duration_ticks,
            sound: config.sound_enabled.then(|| AlertSound {
                path: PathBuf::from(ConfigLoader::expand_path(&config.sound_path)),
                volume: config.volume,
            }),
            alert: None,
            phase: PopupPhase::Hidden,
            remaining: 0,
            epoch: 0,
        }
    }

    /// Create a silent controller with the given countdown.
    pub fn with_duration(duration: u32, presenter: Arc<dyn Presenter>) -> Self {
        Self {
            presenter,
            duration,
            sound: None,
            alert: None,
            phase: PopupPhase::Hidden,
            remaining: 0,
            epoch: 0,
        }
    }

    /// Display `alert`, replacing whatever is on screen.
    pub fn show(&mut self, mut alert: Alert) -> Result<(), ValidationError> {
        alert.validate()?;
        alert.closing = false;

        if let Some(ref sound) = self.sound {
            if let Err(e) = self
                .presenter
                .play_sound(alert.kind, &sound.path, sound.volume)
            {
                debug!(path = %sound.path.display(), "Alert sound playback failed: {}", e);
            }
        }

        debug!(kind = %alert.kind, title = %alert.title, "Showing alert popup");
        self.alert = Some(alert);
        self.remaining = self.duration;
        self.transition(PopupPhase::Counting);
        Ok(())
    }

    /// Pointer entered the popup. Restores the full countdown and suspends it.
    pub fn on_hover_enter(&mut self) -> bool {
        if !self.phase.is_visible() {
            trace!(phase = ?self.phase, "Ignoring hover enter");
            return false;
        }
        self.remaining = self.duration;
        self.transition(PopupPhase::Paused);
        true
    }

    /// Pointer left the popup. Resumes counting from the full duration.
    pub fn on_hover_leave(&mut self) -> bool {
        if self.phase != PopupPhase::Paused {
            trace!(phase = ?self.phase, "Ignoring hover leave");
            return false;
        }
        self.remaining = self.duration;
        self.transition(PopupPhase::Counting);
        true
    }

    /// Advance the countdown by one time unit.
    ///
    /// Returns `true` when this tick closed the popup.
    pub fn tick(&mut self) -> bool {
        if self.phase != PopupPhase::Counting || !self.is_auto_dismiss() {
            return false;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            return self.close();
        }
        self.render();
        false
    }

    /// Start the exit animation. Idempotent within one visible cycle.
    pub fn close(&mut self) -> bool {
        if !self.phase.is_visible() {
            return false;
        }
        if let Some(alert) = self.alert.as_mut() {
            alert.closing = true;
        }
        self.transition(PopupPhase::Closing);
        true
    }

    /// Click on the popup body.
    pub fn click(&mut self) -> bool {
        self.close()
    }

    /// Exit animation finished: remove the alert.
    pub fn finish_close(&mut self) -> bool {
        if self.phase != PopupPhase::Closing {
            return false;
        }
        self.alert = None;
        self.remaining = 0;
        self.transition(PopupPhase::Hidden);
        true
    }

    pub fn phase(&self) -> PopupPhase {
        self.phase
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Timer epoch; changes on every accepted transition.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Whether ticks can close the popup.
    pub fn is_auto_dismiss(&self) -> bool {
        self.duration > 0
    }

    /// Render snapshot, `None` while hidden.
    pub fn view(&self) -> Option<PopupView> {
        let alert = self.alert.as_ref()?;
        Some(PopupView {
            alert: alert.clone(),
            phase: self.phase,
            remaining: self.is_auto_dismiss().then_some(self.remaining),
            show_countdown: self.phase != PopupPhase::Paused,
        })
    }

    fn transition(&mut self, phase: PopupPhase) {
        trace!(from = ?self.phase, to = ?phase, "Popup transition");
        self.phase = phase;
        self.epoch = self.epoch.wrapping_add(1);
        self.render();
    }

    fn render(&self) {
        let view = self.view();
        self.presenter.render(view.as_ref());
    }
}

impl std::fmt::Debug for AlertPopupController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertPopupController")
            .field("phase", &self.phase)
            .field("alert", &self.alert)
            .field("remaining", &self.remaining)
            .field("duration", &self.duration)
            .field("epoch", &self.epoch)
            .finish()
    }
}
