use group_schedule_bot::config::Config;
use group_schedule_bot::schedule::ScheduleLocale;
use std::env;
use std::sync::Mutex;

// Mutex to ensure config tests run sequentially to avoid environment variable conflicts
static CONFIG_TEST_MUTEX: Mutex<()> = Mutex::new(());

const VARS: [&str; 5] = [
    "TELEGRAM_BOT_TOKEN",
    "DATABASE_URL",
    "HTTP_PORT",
    "SCHEDULE_LOCALE",
    "DEFAULT_GROUP",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_config_from_env_with_all_vars() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token_123");
    env::set_var("DATABASE_URL", "sqlite:test.db");
    env::set_var("HTTP_PORT", "8080");
    env::set_var("SCHEDULE_LOCALE", "en");
    env::set_var("DEFAULT_GROUP", " М8О-207БВ-24 ");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "test_token_123");
    assert_eq!(config.database_url, "sqlite:test.db");
    assert_eq!(config.http_port, 8080);
    assert_eq!(config.locale, ScheduleLocale::english());
    assert_eq!(config.default_group.as_deref(), Some("М8О-207БВ-24"));

    clear_env();
}

#[test]
fn test_config_from_env_with_defaults() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "required_token");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "required_token");
    assert_eq!(config.database_url, "sqlite:./data/schedule.db");
    assert_eq!(config.http_port, 3000);
    assert_eq!(config.locale, ScheduleLocale::russian());
    assert_eq!(config.default_group, None);

    clear_env();
}

#[test]
fn test_config_missing_required_token() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("TELEGRAM_BOT_TOKEN must be set"));
}

#[test]
fn test_config_invalid_port() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("HTTP_PORT", "invalid_port");

    let result = Config::from_env();
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Invalid HTTP_PORT"));

    env::set_var("HTTP_PORT", "-1");
    assert!(Config::from_env().is_err());

    env::set_var("HTTP_PORT", "  65535  ");
    assert_eq!(Config::from_env().unwrap().http_port, 65535);

    clear_env();
}

#[test]
fn test_config_invalid_locale() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("SCHEDULE_LOCALE", "fr");

    let result = Config::from_env();
    assert!(result.unwrap_err().to_string().contains("Invalid SCHEDULE_LOCALE"));

    env::set_var("SCHEDULE_LOCALE", "");
    assert_eq!(Config::from_env().unwrap().locale, ScheduleLocale::russian());

    clear_env();
}

#[test]
fn test_config_empty_values() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "   ");
    assert!(Config::from_env().is_err());

    env::set_var("TELEGRAM_BOT_TOKEN", "valid_token");
    env::set_var("DATABASE_URL", "");
    env::set_var("DEFAULT_GROUP", "   ");
    let config = Config::from_env().unwrap();
    assert_eq!(config.database_url, "sqlite:./data/schedule.db");
    assert_eq!(config.default_group, None);

    clear_env();
}

#[test]
fn test_database_url_without_token() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    assert_eq!(Config::database_url_from_env(), "sqlite:./data/schedule.db");

    env::set_var("DATABASE_URL", "sqlite:other.db");
    assert_eq!(Config::database_url_from_env(), "sqlite:other.db");

    clear_env();
}
