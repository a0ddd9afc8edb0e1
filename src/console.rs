//! Console presenter: draws the popup as text lines and rings the terminal bell
//! in place of the configured sound file.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use watchpost_protocols::{AlertKind, PopupPhase, PopupView, PresentationError, Presenter};

pub(crate) struct ConsolePresenter;

impl Presenter for ConsolePresenter {
    fn play_sound(
        &self,
        _kind: AlertKind,
        sound_path: &Path,
        volume: f32,
    ) -> Result<(), PresentationError> {
        if volume <= 0.0 {
            return Ok(());
        }
        if !sound_path.is_file() {
            return Err(PresentationError::PlaybackBlocked(format!(
                "sound file not found: {}",
                sound_path.display()
            )));
        }
        let mut stderr = io::stderr();
        if !stderr.is_terminal() {
            return Err(PresentationError::Unavailable);
        }
        stderr.write_all(b"\x07")?;
        stderr.flush()?;
        Ok(())
    }

    fn render(&self, view: Option<&PopupView>) {
        match view {
            Some(view) => println!("{}", format_view(view)),
            None => println!("(popup hidden)"),
        }
    }
}

fn format_view(view: &PopupView) -> String {
    let alert = &view.alert;
    let mut line = format!(
        "{} [{}] {}",
        alert.kind.emoji(),
        alert.kind.as_str().to_uppercase(),
        alert.title
    );
    if !alert.message.is_empty() {
        line.push_str(": ");
        line.push_str(&alert.message.replace('\n', " "));
    }

    match view.phase {
        PopupPhase::Paused => line.push_str("  (paused)"),
        PopupPhase::Closing => line.push_str("  (closing)"),
        _ => {
            if let Some(label) = view.countdown_label() {
                line.push_str("  ");
                line.push_str(&label);
            }
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use watchpost_protocols::Alert;

    fn view(phase: PopupPhase, remaining: Option<u32>) -> PopupView {
        PopupView {
            alert: Alert::error("Fire Detected", "Smoke in\nserver room"),
            phase,
            remaining,
            show_countdown: phase != PopupPhase::Paused,
        }
    }

    #[test]
    fn test_format_counting_view() {
        let line = format_view(&view(PopupPhase::Counting, Some(4)));
        assert!(line.contains("[ERROR] Fire Detected: Smoke in server room"));
        assert!(line.ends_with("4s"));
    }

    #[test]
    fn test_format_paused_and_closing_views() {
        assert!(format_view(&view(PopupPhase::Paused, Some(5))).ends_with("(paused)"));
        assert!(format_view(&view(PopupPhase::Closing, Some(0))).ends_with("(closing)"));
    }

    #[test]
    fn test_format_manual_dismiss_view_has_no_countdown() {
        let line = format_view(&view(PopupPhase::Counting, None));
        assert!(line.ends_with("server room"));
    }

    #[test]
    fn test_muted_sound_is_a_no_op() {
        let missing = Path::new("/nonexistent/watchpost/alert.mp3");
        assert!(ConsolePresenter.play_sound(AlertKind::Info, missing, 0.0).is_ok());
    }

    #[test]
    fn test_missing_sound_file_is_reported() {
        let missing = Path::new("/nonexistent/watchpost/alert.mp3");
        let result = ConsolePresenter.play_sound(AlertKind::Error, missing, 0.5);
        match result {
            Err(PresentationError::PlaybackBlocked(reason)) => {
                assert!(reason.contains("/nonexistent/watchpost/alert.mp3"));
            }
            other => panic!("expected PlaybackBlocked, got {:?}", other),
        }
    }
}
