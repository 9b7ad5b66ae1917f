use questionnaire_bot::config::Config;
use std::env;
use std::sync::Mutex;

// Mutex to ensure config tests run sequentially to avoid environment variable conflicts
static CONFIG_TEST_MUTEX: Mutex<()> = Mutex::new(());

fn set_required_vars() {
    env::set_var("TELEGRAM_BOT_TOKEN", "test_token_123");
    env::set_var("SPREADSHEET_ID", "sheet_abc");
    env::set_var("SHEETS_API_TOKEN", "sheets_token_xyz");
}

fn clear_all_vars() {
    env::remove_var("TELEGRAM_BOT_TOKEN");
    env::remove_var("SPREADSHEET_ID");
    env::remove_var("SHEETS_API_TOKEN");
    env::remove_var("HTTP_PORT");
}

#[test]
fn test_config_from_env_with_all_vars() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    set_required_vars();
    env::set_var("HTTP_PORT", "8080");

    let config = Config::from_env().unwrap();

    assert_eq!(config.telegram_bot_token, "test_token_123");
    assert_eq!(config.spreadsheet_id, "sheet_abc");
    assert_eq!(config.sheets_api_token, "sheets_token_xyz");
    assert_eq!(config.http_port, 8080);

    clear_all_vars();
}

#[test]
fn test_config_port_default() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    set_required_vars();
    env::remove_var("HTTP_PORT");

    let config = Config::from_env().unwrap();
    assert_eq!(config.http_port, 3000);

    clear_all_vars();
}

#[test]
fn test_config_missing_bot_token() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    set_required_vars();
    env::remove_var("TELEGRAM_BOT_TOKEN");

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("TELEGRAM_BOT_TOKEN must be set"));

    clear_all_vars();
}

#[test]
fn test_config_missing_spreadsheet_id() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    set_required_vars();
    env::remove_var("SPREADSHEET_ID");

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("SPREADSHEET_ID must be set"));

    clear_all_vars();
}

#[test]
fn test_config_empty_values_rejected() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    set_required_vars();
    env::set_var("SHEETS_API_TOKEN", "   ");

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("SHEETS_API_TOKEN must be set"));

    clear_all_vars();
}

#[test]
fn test_config_invalid_port() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    set_required_vars();
    env::set_var("HTTP_PORT", "invalid_port");

    let result = Config::from_env();
    assert!(result.is_err());

    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("Invalid HTTP_PORT"));

    clear_all_vars();
}
