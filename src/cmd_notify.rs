//! Notification subcommand handlers for Watchpost.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::bail;
use tracing::info;

use watchpost_alerts::{DispatchReport, NotificationDispatcher};
use watchpost_config::Config;
use watchpost_protocols::{Alert, AlertKind, Incident, NotifyChannel};

/// Broadcast a typed message to the channels chosen on the command line.
pub(crate) async fn notify_send(
    config: &Config,
    message: &str,
    kind: AlertKind,
    channels: Vec<NotifyChannel>,
) -> anyhow::Result<()> {
    let dispatcher = NotificationDispatcher::simulated(config);
    let channels: BTreeSet<NotifyChannel> = channels.into_iter().collect();

    match dispatcher.send(message, kind, &channels).await {
        Ok(report) => {
            print_report(&report);
            Ok(())
        }
        Err(e) => {
            print_alert(&e.to_alert());
            Err(e.into())
        }
    }
}

/// Broadcast an incident to every enabled channel with recipients.
pub(crate) async fn notify_incident(config: &Config, incident: Incident) -> anyhow::Result<()> {
    let dispatcher = NotificationDispatcher::simulated(config);
    if dispatcher.dispatchable_channels().is_empty() {
        println!("No channel is enabled with recipients; nothing was sent.");
        println!("Configure the [channels] section to receive incident notifications.");
        return Ok(());
    }

    info!(kind = %incident.kind, camera = %incident.camera, "Broadcasting incident");
    let report = dispatcher.send_incident(incident).await;
    print_report(&report);
    Ok(())
}

/// Send the system test incident.
pub(crate) async fn notify_test(config: &Config) -> anyhow::Result<()> {
    let dispatcher = NotificationDispatcher::simulated(config);
    let report = dispatcher.test_channels().await;
    if report.is_empty() {
        println!("No channel is enabled with recipients; nothing to test.");
        return Ok(());
    }
    print_report(&report);
    Ok(())
}

/// Print enabled/configured/recipient status for every channel.
pub(crate) fn channel_status(config: &Config, format: &str) -> anyhow::Result<()> {
    let dispatcher = NotificationDispatcher::simulated(config);
    let status = dispatcher.channel_status();

    match format {
        "json" => {
            let by_name: BTreeMap<&str, _> = status
                .iter()
                .map(|(channel, status)| (channel.as_str(), status))
                .collect();
            println!("{}", serde_json::to_string_pretty(&by_name)?);
        }
        "table" => {
            println!("{:<10} {:<8} {:<11} {}", "CHANNEL", "ENABLED", "CONFIGURED", "RECIPIENTS");
            for (channel, status) in &status {
                println!(
                    "{:<10} {:<8} {:<11} {}",
                    channel.label(),
                    yes_no(status.enabled),
                    yes_no(status.configured),
                    status.recipient_count
                );
            }
        }
        other => bail!("Unknown output format '{}', expected table or json", other),
    }
    Ok(())
}

fn print_report(report: &DispatchReport) {
    println!("Dispatch {}", report.dispatch_id);
    for result in &report.results {
        let mark = if result.success { "ok" } else { "FAILED" };
        println!("  {:<10} {:<6} {}", result.channel.label(), mark, result.detail);
    }
    for alert in report.summary_alerts() {
        print_alert(&alert);
    }
}

fn print_alert(alert: &Alert) {
    println!("{} {}", alert.kind.emoji(), alert.title);
    for line in alert.message.lines() {
        println!("   {}", line);
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
