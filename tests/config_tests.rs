use birthday_bot::config::Config;
use std::env;
use std::sync::Mutex;

// Mutex to ensure config tests run sequentially to avoid environment variable conflicts
static CONFIG_TEST_MUTEX: Mutex<()> = Mutex::new(());

fn clear_env() {
    for key in ["TELEGRAM_BOT_TOKEN", "BIRTHDAY_CHAT_ID", "DATABASE_URL", "HTTP_PORT"] {
        env::remove_var(key);
    }
}

#[test]
fn test_config_from_env_with_all_vars() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token_123");
    env::set_var("BIRTHDAY_CHAT_ID", "-1001234567890");
    env::set_var("DATABASE_URL", "sqlite:test.db");
    env::set_var("HTTP_PORT", "8080");

    let config = Config::from_env().expect("config should load");

    assert_eq!(config.telegram_bot_token, "test_token_123");
    assert_eq!(config.birthday_chat_id, -1001234567890);
    assert_eq!(config.database_url, "sqlite:test.db");
    assert_eq!(config.http_port, 8080);

    clear_env();
}

#[test]
fn test_config_from_env_with_defaults() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "required_token");
    env::set_var("BIRTHDAY_CHAT_ID", "42");

    let config = Config::from_env().expect("config should load");

    assert_eq!(config.database_url, "sqlite:./data/birthday_bot.db");
    assert_eq!(config.http_port, 3000);

    clear_env();
}

#[test]
fn test_config_missing_required_token() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();
    env::set_var("BIRTHDAY_CHAT_ID", "42");

    let error_msg = Config::from_env().err().map(|e| e.to_string()).unwrap_or_default();
    assert!(error_msg.contains("TELEGRAM_BOT_TOKEN must be set"));

    env::set_var("TELEGRAM_BOT_TOKEN", "   ");
    assert!(Config::from_env().is_err());

    clear_env();
}

#[test]
fn test_config_chat_id_required_and_numeric() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();
    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");

    let error_msg = Config::from_env().err().map(|e| e.to_string()).unwrap_or_default();
    assert!(error_msg.contains("BIRTHDAY_CHAT_ID must be set"));

    env::set_var("BIRTHDAY_CHAT_ID", "ID_ВАШЕЙ_ГРУППЫ");
    let error_msg = Config::from_env().err().map(|e| e.to_string()).unwrap_or_default();
    assert!(error_msg.contains("Invalid BIRTHDAY_CHAT_ID"));

    env::set_var("BIRTHDAY_CHAT_ID", "  -987654321  ");
    let config = Config::from_env().expect("config should load");
    assert_eq!(config.birthday_chat_id, -987654321);

    clear_env();
}

#[test]
fn test_config_invalid_port() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("BIRTHDAY_CHAT_ID", "42");
    env::set_var("HTTP_PORT", "invalid_port");

    let error_msg = Config::from_env().err().map(|e| e.to_string()).unwrap_or_default();
    assert!(error_msg.contains("Invalid HTTP_PORT"));

    env::set_var("HTTP_PORT", "65536");
    assert!(Config::from_env().is_err());

    clear_env();
}

#[test]
fn test_config_empty_database_url_uses_default() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "valid_token");
    env::set_var("BIRTHDAY_CHAT_ID", "42");
    env::set_var("DATABASE_URL", "");

    let config = Config::from_env().expect("config should load");
    assert_eq!(config.database_url, "sqlite:./data/birthday_bot.db");
    assert_eq!(Config::database_url_from_env(), "sqlite:./data/birthday_bot.db");

    env::set_var("DATABASE_URL", "sqlite:other.db");
    assert_eq!(Config::database_url_from_env(), "sqlite:other.db");

    clear_env();
}
