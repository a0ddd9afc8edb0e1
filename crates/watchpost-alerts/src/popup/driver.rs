//! Timer wiring for the popup state machine.
//!
//! The driver owns an [`AlertPopupController`] and two timers: a repeating
//! tick while the countdown runs, and a one-shot hide after `close`. Both are
//! re-armed after every accepted transition. A timer carries the controller
//! epoch it was armed under and does nothing once the epoch has moved on, so
//! an aborted timer that already woke up cannot act either.
//!
//! Must be used from within a tokio runtime.

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, trace};

use watchpost_config::PopupConfig;
use watchpost_protocols::{Alert, PopupPhase, PopupView, Presenter, ValidationError};

use super::controller::AlertPopupController;

#[derive(Default)]
struct Timers {
    tick: Option<JoinHandle<()>>,
    hide: Option<JoinHandle<()>>,
}

impl Timers {
    fn cancel(&mut self) {
        if let Some(handle) = self.tick.take() {
            handle.abort();
        }
        if let Some(handle) = self.hide.take() {
            handle.abort();
        }
    }
}

struct Shared {
    // Lock order: timers, then controller.
    timers: Mutex<Timers>,
    controller: Mutex<AlertPopupController>,
    tick_interval: Duration,
    closing_delay: Duration,
    phase_tx: watch::Sender<PopupPhase>,
}

/// Drives an [`AlertPopupController`] with tokio timers.
pub struct PopupDriver {
    shared: Arc<Shared>,
}

impl PopupDriver {
    /// Create a driver from popup configuration.
    pub fn new(config: &PopupConfig, presenter: Arc<dyn Presenter>) -> Self {
        let controller = AlertPopupController::new(config, presenter);
        Self::with_controller(
            controller,
            Duration::from_millis(config.tick_interval_ms.max(1)),
            Duration::from_millis(config.closing_delay_ms),
        )
    }

    /// Wrap an existing controller.
    pub fn with_controller(
        controller: AlertPopupController,
        tick_interval: Duration,
        closing_delay: Duration,
    ) -> Self {
        let (phase_tx, _) = watch::channel(controller.phase());
        Self {
            shared: Arc::new(Shared {
                timers: Mutex::new(Timers::default()),
                controller: Mutex::new(controller),
                tick_interval,
                closing_delay,
                phase_tx,
            }),
        }
    }

    /// Show `alert`, replacing the current one and cancelling any pending hide.
    pub fn show(&self, alert: Alert) -> Result<(), ValidationError> {
        let mut result = Ok(());
        apply(&self.shared, |ctl| match ctl.show(alert) {
            Ok(()) => true,
            Err(e) => {
                result = Err(e);
                false
            }
        });
        result
    }

    pub fn hover_enter(&self) -> bool {
        apply(&self.shared, AlertPopupController::on_hover_enter)
    }

    pub fn hover_leave(&self) -> bool {
        apply(&self.shared, AlertPopupController::on_hover_leave)
    }

    pub fn close(&self) -> bool {
        apply(&self.shared, AlertPopupController::close)
    }

    pub fn click(&self) -> bool {
        apply(&self.shared, AlertPopupController::click)
    }

    pub fn phase(&self) -> PopupPhase {
        self.shared.controller.lock().phase()
    }

    pub fn remaining(&self) -> u32 {
        self.shared.controller.lock().remaining()
    }

    pub fn view(&self) -> Option<PopupView> {
        self.shared.controller.lock().view()
    }

    /// Subscribe to phase changes.
    pub fn subscribe(&self) -> watch::Receiver<PopupPhase> {
        self.shared.phase_tx.subscribe()
    }

    /// Wait until no popup is displayed.
    pub async fn wait_hidden(&self) {
        let mut rx = self.subscribe();
        // The sender lives in `self.shared`, so the channel cannot close here.
        let _ = rx.wait_for(|phase| *phase == PopupPhase::Hidden).await;
    }
}

impl Drop for PopupDriver {
    fn drop(&mut self) {
        self.shared.timers.lock().cancel();
    }
}

/// Run one controller input and re-arm timers if it was accepted.
fn apply<F>(shared: &Arc<Shared>, op: F) -> bool
where
    F: FnOnce(&mut AlertPopupController) -> bool,
{
    let mut timers = shared.timers.lock();
    let (accepted, phase, epoch, auto_dismiss) = {
        let mut ctl = shared.controller.lock();
        let accepted = op(&mut ctl);
        (accepted, ctl.phase(), ctl.epoch(), ctl.is_auto_dismiss())
    };

    if accepted {
        arm(shared, &mut timers, phase, epoch, auto_dismiss);
    }
    accepted
}

fn arm(
    shared: &Arc<Shared>,
    timers: &mut Timers,
    phase: PopupPhase,
    epoch: u64,
    auto_dismiss: bool,
) {
    timers.cancel();
    match phase {
        PopupPhase::Counting if auto_dismiss => {
            timers.tick = Some(spawn_ticker(Arc::clone(shared), epoch));
        }
        PopupPhase::Closing => {
            timers.hide = Some(spawn_hide(Arc::clone(shared), epoch));
        }
        _ => {}
    }
    shared.phase_tx.send_replace(phase);
}

fn spawn_ticker(shared: Arc<Shared>, epoch: u64) -> JoinHandle<()> {
    tokio::spawn(async move {
        let period = shared.tick_interval;
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;

            let mut timers = shared.timers.lock();
            let mut ctl = shared.controller.lock();
            if ctl.epoch() != epoch {
                trace!(epoch, "Stale popup tick ignored");
                return;
            }
            if ctl.tick() {
                let closing_epoch = ctl.epoch();
                drop(ctl);
                debug!("Popup countdown elapsed");
                timers.tick = None;
                timers.hide = Some(spawn_hide(Arc::clone(&shared), closing_epoch));
                shared.phase_tx.send_replace(PopupPhase::Closing);
                return;
            }
        }
    })
}

fn spawn_hide(shared: Arc<Shared>, epoch: u64) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(shared.closing_delay).await;

        let mut timers = shared.timers.lock();
        let mut ctl = shared.controller.lock();
        if ctl.epoch() != epoch {
            trace!(epoch, "Stale popup hide ignored");
            return;
        }
        if ctl.finish_close() {
            drop(ctl);
            timers.hide = None;
            shared.phase_tx.send_replace(PopupPhase::Hidden);
        }
    })
}
