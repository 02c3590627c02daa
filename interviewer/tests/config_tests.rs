// tests/config_tests.rs
use mock_interviewer::{AppConfig, AppError};
use serial_test::serial;
use std::collections::HashMap;
use std::time::Duration;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
  let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
  move |name| vars.get(name).cloned()
}

#[test]
fn test_defaults_apply_when_only_the_key_is_set() {
  let config = AppConfig::from_lookup(lookup_from(&[("OPENAI_API_KEY", "sk-test")])).unwrap();

  assert_eq!(config.api_key, "sk-test");
  assert_eq!(config.model, "gpt-4o-mini");
  assert_eq!(config.base_url, "https://api.openai.com/v1");
  assert_eq!(config.temperature, 0.7);
  assert_eq!(config.max_tokens, None);
  assert_eq!(config.request_timeout, Duration::from_secs(120));
}

#[test]
fn test_missing_or_blank_key_is_reported_as_missing() {
  for pairs in [vec![], vec![("OPENAI_API_KEY", "   ")]] {
    let err = AppConfig::from_lookup(lookup_from(&pairs)).unwrap_err();
    assert!(
      matches!(err, AppError::MissingApiKey { var: "OPENAI_API_KEY" }),
      "got {:?}",
      err
    );
    let msg = err.to_string();
    assert!(msg.contains("OPENAI_API_KEY"));
    assert!(msg.contains(".env"));
  }
}

#[test]
fn test_overrides_are_parsed() {
  let config = AppConfig::from_lookup(lookup_from(&[
    ("OPENAI_API_KEY", "sk-test"),
    ("OPENAI_MODEL", "gpt-4o"),
    ("OPENAI_BASE_URL", "http://localhost:8080/v1/"),
    ("OPENAI_TEMPERATURE", "0.2"),
    ("OPENAI_MAX_TOKENS", "2048"),
    ("OPENAI_TIMEOUT_SECS", "30"),
  ]))
  .unwrap();

  assert_eq!(config.model, "gpt-4o");
  assert_eq!(config.base_url, "http://localhost:8080/v1");
  assert_eq!(config.temperature, 0.2);
  assert_eq!(config.max_tokens, Some(2048));
  assert_eq!(config.request_timeout, Duration::from_secs(30));
}

#[test]
fn test_invalid_values_are_rejected() {
  let cases = [
    ("OPENAI_TEMPERATURE", "3.5"),
    ("OPENAI_TEMPERATURE", "warm"),
    ("OPENAI_MAX_TOKENS", "-1"),
    ("OPENAI_TIMEOUT_SECS", "0"),
  ];
  for (name, value) in cases {
    let err = AppConfig::from_lookup(lookup_from(&[("OPENAI_API_KEY", "sk-test"), (name, value)])).unwrap_err();
    assert!(
      matches!(&err, AppError::Config(msg) if msg.contains(name)),
      "{}={} gave {:?}",
      name,
      value,
      err
    );
  }
}

#[test]
fn test_debug_output_hides_the_key() {
  let config = AppConfig::from_lookup(lookup_from(&[("OPENAI_API_KEY", "sk-very-secret")])).unwrap();
  let debug = format!("{:?}", config);
  assert!(!debug.contains("sk-very-secret"));
  assert!(debug.contains("[REDACTED]"));
}

#[test]
#[serial]
fn test_from_env_reads_process_environment() {
  std::env::set_var("OPENAI_API_KEY", "sk-from-env");
  std::env::set_var("OPENAI_MODEL", "gpt-test");
  let result = AppConfig::from_env();
  std::env::remove_var("OPENAI_API_KEY");
  std::env::remove_var("OPENAI_MODEL");

  let config = result.unwrap();
  assert_eq!(config.api_key, "sk-from-env");
  assert_eq!(config.model, "gpt-test");
}

#[test]
#[serial]
fn test_from_env_without_key_fails() {
  std::env::remove_var("OPENAI_API_KEY");
  let dir = tempfile::tempdir().unwrap();
  let previous = std::env::current_dir().unwrap();
  // Keep a developer's own .env out of the picture.
  std::env::set_current_dir(dir.path()).unwrap();
  let result = AppConfig::from_env();
  std::env::set_current_dir(previous).unwrap();

  assert!(matches!(result, Err(AppError::MissingApiKey { .. })));
}
