//! Config tests.

use crate::config::{BotConfig, PracticumConfig, TelegramConfig, DEFAULT_ENDPOINT};
use hwbot_core::HwbotError;
use serial_test::serial;
use std::env;

fn clear_env() {
    for name in [
        "PRACTICUM_TOKEN",
        "PRACTICUM_ENDPOINT",
        "TELEGRAM_TOKEN",
        "TELEGRAM_CHAT_ID",
        "TELEGRAM_API_URL",
        "TELOXIDE_API_URL",
        "LOG_FILE",
    ] {
        env::remove_var(name);
    }
}

fn set_required() {
    env::set_var("PRACTICUM_TOKEN", "practicum_token");
    env::set_var("TELEGRAM_TOKEN", "telegram_token");
    env::set_var("TELEGRAM_CHAT_ID", "123456");
}

#[test]
#[serial]
fn test_load_config_with_defaults() {
    clear_env();
    set_required();

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.practicum.token, "practicum_token");
    assert_eq!(config.practicum.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.telegram.bot_token, "telegram_token");
    assert_eq!(config.telegram.chat_id, 123456);
    assert!(config.telegram.api_url.is_none());
    assert_eq!(config.log_file(), "logs/homework-bot.log");
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_load_config_with_custom_values() {
    clear_env();
    set_required();
    env::set_var("TELEGRAM_CHAT_ID", "-1001234567890");
    env::set_var("PRACTICUM_ENDPOINT", "http://localhost:8080/statuses/");
    env::set_var("TELOXIDE_API_URL", "http://localhost:8081");
    env::set_var("LOG_FILE", "/tmp/hw.log");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.telegram.chat_id, -1001234567890);
    assert_eq!(config.telegram.chat().id, -1001234567890);
    assert_eq!(config.practicum.endpoint, "http://localhost:8080/statuses/");
    assert_eq!(config.telegram.api_url.as_deref(), Some("http://localhost:8081"));
    assert_eq!(config.log_file(), "/tmp/hw.log");

    clear_env();
}

#[test]
#[serial]
fn test_load_config_with_override_token() {
    clear_env();
    set_required();

    let config = BotConfig::load(Some("override_token".to_string())).unwrap();
    assert_eq!(config.telegram.bot_token, "override_token");

    env::remove_var("TELEGRAM_TOKEN");
    let config = BotConfig::load(Some("override_token".to_string())).unwrap();
    assert_eq!(config.telegram.bot_token, "override_token");
}

#[test]
#[serial]
fn test_missing_credentials_are_config_errors() {
    for missing in ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"] {
        clear_env();
        set_required();
        env::remove_var(missing);

        match BotConfig::load(None) {
            Err(HwbotError::Config(msg)) => assert!(msg.contains(missing)),
            other => panic!("expected config error for {}, got {:?}", missing, other),
        }
    }
}

#[test]
#[serial]
fn test_empty_credentials_count_as_missing() {
    clear_env();
    set_required();
    env::set_var("PRACTICUM_TOKEN", "");
    assert!(PracticumConfig::from_env().is_err());

    env::set_var("PRACTICUM_TOKEN", "   ");
    assert!(PracticumConfig::from_env().is_err());

    set_required();
    env::set_var("TELEGRAM_TOKEN", "");
    assert!(TelegramConfig::from_env(Some(String::new())).is_err());
}

#[test]
#[serial]
fn test_non_numeric_chat_id_rejected() {
    clear_env();
    set_required();
    env::set_var("TELEGRAM_CHAT_ID", "my-chat");

    assert!(matches!(
        TelegramConfig::from_env(None),
        Err(HwbotError::Config(_))
    ));
}

#[test]
#[serial]
fn test_validate_urls() {
    clear_env();
    set_required();
    env::set_var("TELEGRAM_API_URL", "not-a-valid-url");
    let config = BotConfig::load(None).unwrap();
    assert!(config.validate().is_err());

    clear_env();
    set_required();
    env::set_var("PRACTICUM_ENDPOINT", "::nope");
    let config = BotConfig::load(None).unwrap();
    assert!(config.validate().is_err());

    clear_env();
}
