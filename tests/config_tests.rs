use answer_raffle_bot::config::Config;
use std::env;
use std::sync::Mutex;

// Mutex to ensure config tests run sequentially to avoid environment variable conflicts
static CONFIG_TEST_MUTEX: Mutex<()> = Mutex::new(());

fn clear_env() {
    env::remove_var("TELEGRAM_BOT_TOKEN");
    env::remove_var("ADMIN_USER_ID");
    env::remove_var("DATA_DIR");
    env::remove_var("BROADCAST_CHAT_ID");
    env::remove_var("MAX_ANSWERS");
    env::remove_var("BROADCAST_TIMEOUT_SECS");
    env::remove_var("HTTP_PORT");
}

#[test]
fn test_config_from_env_with_all_vars() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token_123");
    env::set_var("ADMIN_USER_ID", "7780504410");
    env::set_var("DATA_DIR", "/tmp/raffle-data");
    env::set_var("BROADCAST_CHAT_ID", "-1001234567890");
    env::set_var("MAX_ANSWERS", "50");
    env::set_var("BROADCAST_TIMEOUT_SECS", "120");
    env::set_var("HTTP_PORT", "8080");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "test_token_123");
    assert_eq!(config.admin_user_id, 7780504410);
    assert_eq!(config.data_dir, "/tmp/raffle-data");
    assert_eq!(config.broadcast_chat_id, Some(-1001234567890));
    assert_eq!(config.max_answers, Some(50));
    assert_eq!(config.broadcast_timeout_secs, 120);
    assert_eq!(config.http_port, 8080);

    clear_env();
}

#[test]
fn test_config_from_env_with_defaults() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "required_token");
    env::set_var("ADMIN_USER_ID", "1");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "required_token");
    assert_eq!(config.data_dir, "./data");
    assert_eq!(config.broadcast_chat_id, None);
    assert_eq!(config.max_answers, Some(100));
    assert_eq!(config.broadcast_timeout_secs, 300);
    assert_eq!(config.http_port, 3000);

    clear_env();
}

#[test]
fn test_config_missing_required_token() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("ADMIN_USER_ID", "1");

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("TELEGRAM_BOT_TOKEN must be set"));

    clear_env();
}

#[test]
fn test_config_missing_admin_seed() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("ADMIN_USER_ID must be set"));

    clear_env();
}

#[test]
fn test_config_invalid_admin_seed() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("ADMIN_USER_ID", "not_a_number");

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("Invalid ADMIN_USER_ID"));

    clear_env();
}

#[test]
fn test_config_zero_cap_disables_the_limit() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("ADMIN_USER_ID", "1");
    env::set_var("MAX_ANSWERS", "0");

    let config = Config::from_env().unwrap();
    assert_eq!(config.max_answers, None);

    clear_env();
}

#[test]
fn test_config_invalid_broadcast_chat() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("ADMIN_USER_ID", "1");
    env::set_var("BROADCAST_CHAT_ID", "not_a_chat");

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("Invalid BROADCAST_CHAT_ID"));

    clear_env();
}

#[test]
fn test_config_invalid_port() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("ADMIN_USER_ID", "1");
    env::set_var("HTTP_PORT", "invalid_port");

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("Invalid HTTP_PORT"));

    clear_env();
}

#[test]
fn test_config_empty_values() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    // Empty token should fail like a missing one.
    env::set_var("TELEGRAM_BOT_TOKEN", "");
    env::set_var("ADMIN_USER_ID", "1");
    let result = Config::from_env();
    assert!(result.is_err());

    // Empty optional values fall back to their defaults.
    env::set_var("TELEGRAM_BOT_TOKEN", "valid_token");
    env::set_var("DATA_DIR", "");
    env::set_var("BROADCAST_CHAT_ID", "");
    env::set_var("MAX_ANSWERS", "");
    let config = Config::from_env().unwrap();
    assert_eq!(config.data_dir, "./data");
    assert_eq!(config.broadcast_chat_id, None);
    assert_eq!(config.max_answers, Some(100));

    clear_env();
}
