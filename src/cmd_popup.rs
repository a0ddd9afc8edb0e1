//! Popup subcommand handler for Watchpost.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use watchpost_alerts::PopupDriver;
use watchpost_config::PopupConfig;
use watchpost_protocols::Alert;

use crate::console::ConsolePresenter;

/// Show one alert on the console and wait until it is hidden.
///
/// With `hover_ticks > 0` the pointer is held over the popup for that many
/// ticks right after it appears, after which the countdown restarts in full.
/// Ctrl-C dismisses the popup as a click would.
pub(crate) async fn run_popup(
    config: &PopupConfig,
    kind: &str,
    title: String,
    message: String,
    hover_ticks: u32,
) -> anyhow::Result<()> {
    let alert = Alert::parse(kind, title, message)?;
    let driver = PopupDriver::new(config, Arc::new(ConsolePresenter));
    driver.show(alert)?;

    if config.duration_ticks == 0 {
        println!("Manual dismiss only, press Ctrl-C to close the popup.");
    }

    tokio::select! {
        _ = hover_then_wait(&driver, config, hover_ticks) => {}
        res = tokio::signal::ctrl_c() => {
            res?;
            debug!("Popup dismissed from the console");
            driver.click();
            driver.wait_hidden().await;
        }
    }
    Ok(())
}

async fn hover_then_wait(driver: &PopupDriver, config: &PopupConfig, hover_ticks: u32) {
    if hover_ticks > 0 && driver.hover_enter() {
        let tick = Duration::from_millis(config.tick_interval_ms.max(1));
        tokio::time::sleep(tick * hover_ticks).await;
        driver.hover_leave();
    }
    driver.wait_hidden().await;
}
