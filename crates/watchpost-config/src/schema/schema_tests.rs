use super::*;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.popup.duration_ticks, 5);
    assert_eq!(config.popup.tick_interval_ms, 1000);
    assert_eq!(config.popup.closing_delay_ms, 400);
    assert!(config.popup.sound_enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_popup_config_default_volume() {
    let popup = PopupConfig::default();
    assert!((popup.volume - 0.5).abs() < f32::EPSILON);
}

#[test]
fn test_latency_defaults() {
    let latency = LatencyConfig::default();
    assert_eq!(latency.email, LatencyRange::new(1000, 3000));
    assert_eq!(latency.whatsapp, LatencyRange::new(800, 2300));
    assert_eq!(latency.telegram, LatencyRange::new(600, 1800));
    assert_eq!(latency.sms, LatencyRange::new(700, 2500));
}

#[test]
fn test_channels_default_enablement() {
    let channels = ChannelsConfig::default();
    assert!(channels.email.enabled);
    assert!(channels.email.recipients.is_empty());
    assert!(!channels.whatsapp.enabled);
    assert!(!channels.telegram.enabled);
    assert!(!channels.sms.enabled);
    assert_eq!(channels.sms.provider, "twilio");
}

#[test]
fn test_smtp_default() {
    let smtp = SmtpConfig::default();
    assert_eq!(smtp.host, "smtp.gmail.com");
    assert_eq!(smtp.port, 587);
    assert!(!smtp.secure);
}

#[test]
fn test_config_serialization_roundtrip() {
    let mut config = Config::default();
    config.channels.sms.recipients.push("+15550100".to_string());

    let toml_str = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed.channels.sms.recipients, vec!["+15550100".to_string()]);
    assert_eq!(parsed.popup.duration_ticks, config.popup.duration_ticks);
}

#[test]
fn test_shipped_config_matches_defaults() {
    let shipped: Config = toml::from_str(include_str!("../../../../config/default.toml")).unwrap();
    let defaults = Config::default();

    assert_eq!(shipped.popup.duration_ticks, defaults.popup.duration_ticks);
    assert_eq!(shipped.popup.closing_delay_ms, defaults.popup.closing_delay_ms);
    assert_eq!(shipped.dispatch.latency.email, defaults.dispatch.latency.email);
    assert_eq!(shipped.dispatch.latency.sms, defaults.dispatch.latency.sms);
    assert_eq!(shipped.channels.sms.provider, "twilio");
    assert_eq!(shipped.channels.email.smtp.host, "smtp.gmail.com");
    assert_eq!(shipped.channels.email.smtp.port, defaults.channels.email.smtp.port);
    assert_eq!(shipped.channels.email.smtp.secure, defaults.channels.email.smtp.secure);
    assert_eq!(shipped.logging.directory, defaults.logging.directory);
}
