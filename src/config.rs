//! Configuration for the Telegram notifier
//!
//! Loads configuration from config.yml file; environment variables override.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Telegram message length limit, in characters per sendMessage call.
pub const TELEGRAM_MESSAGE_LIMIT: usize = 4096;

/// Placeholder bot token shipped in the default configuration.
pub const BOT_TOKEN_PLACEHOLDER: &str = "PASTE_BOT_TOKEN_HERE";

/// Placeholder chat id shipped in the default configuration.
pub const CHAT_ID_PLACEHOLDER: i64 = 123_456_789;

/// YAML config structures
#[derive(Debug, Deserialize)]
struct YamlConfig {
    telegram: Option<TelegramSection>,
}

#[derive(Debug, Deserialize)]
struct TelegramSection {
    bot_token: Option<String>,
    #[serde(default, deserialize_with = "deserialize_string_or_number")]
    chat_id: Option<String>,
}

/// Deserialize a value that can be either a string or a number
fn deserialize_string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    let value: Option<serde_yaml::Value> = Option::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(serde_yaml::Value::String(s)) => Ok(Some(s)),
        Some(serde_yaml::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected string or number, got {:?}",
            other
        ))),
    }
}

/// Main configuration struct
///
/// Immutable pair of bot credential and destination chat id, built once at
/// startup and passed into the notifier.
#[derive(Debug, Clone)]
pub struct NotifyConfig {
    pub bot_token: String,
    pub chat_id: i64,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl NotifyConfig {
    /// Load configuration from config.yml or use placeholder defaults.
    /// Environment variables take precedence over config.yml values.
    pub fn new() -> Self {
        Self::load_from_file("config.yml")
            .or_else(|_| Self::load_from_file("../config.yml"))
            .unwrap_or_else(|_| Self::defaults())
    }

    /// Resolve a value: prefer env var if config value looks like ${VAR}
    fn resolve_env_string(value: Option<String>, env_key: &str) -> String {
        if let Some(ref v) = value {
            if v.starts_with("${") && v.ends_with('}') {
                let var_name = &v[2..v.len() - 1];
                if let Ok(env_val) = std::env::var(var_name) {
                    return env_val;
                }
            }
        }
        // Also check explicit env_key as fallback
        if let Ok(env_val) = std::env::var(env_key) {
            return env_val;
        }
        value.unwrap_or_default()
    }

    /// Resolve an i64 value from string config or env var
    fn resolve_env_i64(value: Option<String>, env_key: &str) -> i64 {
        if let Some(ref v) = value {
            if v.starts_with("${") && v.ends_with('}') {
                let var_name = &v[2..v.len() - 1];
                if let Ok(env_val) = std::env::var(var_name) {
                    if let Ok(parsed) = env_val.parse::<i64>() {
                        return parsed;
                    }
                }
            }
            // Try parsing directly if it's a number
            if let Ok(parsed) = v.parse::<i64>() {
                return parsed;
            }
        }
        // Fallback: check explicit env_key
        if let Ok(env_val) = std::env::var(env_key) {
            if let Ok(parsed) = env_val.parse::<i64>() {
                return parsed;
            }
        }
        0
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> std::result::Result<Self, String> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        let yaml: YamlConfig = serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file: {}", e))?;

        let telegram = yaml.telegram.unwrap_or(TelegramSection {
            bot_token: None,
            chat_id: None,
        });

        // Resolve values with env var precedence
        Ok(Self::from_resolved(
            Self::resolve_env_string(telegram.bot_token, "TELEGRAM_BOT_TOKEN"),
            Self::resolve_env_i64(telegram.chat_id, "TELEGRAM_CHAT_ID"),
        ))
    }

    /// Create config from environment variables alone (fallback)
    /// User MUST provide config.yml or env vars with actual credentials
    fn defaults() -> Self {
        Self::from_resolved(
            Self::resolve_env_string(None, "TELEGRAM_BOT_TOKEN"),
            Self::resolve_env_i64(None, "TELEGRAM_CHAT_ID"),
        )
    }

    /// Unset values land on the placeholders so validation can name them.
    fn from_resolved(bot_token: String, chat_id: i64) -> Self {
        Self {
            bot_token: if bot_token.is_empty() {
                BOT_TOKEN_PLACEHOLDER.to_string()
            } else {
                bot_token
            },
            chat_id: if chat_id == 0 { CHAT_ID_PLACEHOLDER } else { chat_id },
        }
    }

    /// Check that real credentials are present before a network send.
    ///
    /// Only the real-send path calls this; dry-run never does.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.is_empty() || self.bot_token == BOT_TOKEN_PLACEHOLDER {
            return Err(Error::Config(
                "Set bot_token in config.yml or TELEGRAM_BOT_TOKEN (create a bot via @BotFather)"
                    .to_string(),
            ));
        }
        if self.chat_id == 0 || self.chat_id == CHAT_ID_PLACEHOLDER {
            return Err(Error::Config(
                "Set chat_id in config.yml or TELEGRAM_CHAT_ID (ask @raw_data_bot for the numeric id)"
                    .to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_placeholders() {
        let config = NotifyConfig::defaults();
        assert_eq!(config.bot_token, BOT_TOKEN_PLACEHOLDER);
        assert_eq!(config.chat_id, CHAT_ID_PLACEHOLDER);
    }

    #[test]
    fn test_validate_rejects_placeholder_token() {
        let config = NotifyConfig {
            bot_token: BOT_TOKEN_PLACEHOLDER.to_string(),
            chat_id: 42,
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("bot_token"));
    }

    #[test]
    fn test_validate_rejects_empty_token() {
        let config = NotifyConfig {
            bot_token: String::new(),
            chat_id: 42,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_placeholder_chat_id() {
        let config = NotifyConfig {
            bot_token: "123456:ABC-DEF".to_string(),
            chat_id: CHAT_ID_PLACEHOLDER,
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("chat_id"));
    }

    #[test]
    fn test_validate_rejects_zero_chat_id() {
        let config = NotifyConfig {
            bot_token: "123456:ABC-DEF".to_string(),
            chat_id: 0,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_real_credentials() {
        let config = NotifyConfig {
            bot_token: "123456:ABC-DEF".to_string(),
            chat_id: 42,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_yaml() {
        let yaml = r#"
telegram:
  bot_token: "123456:ABC-DEF"
  chat_id: 987654
"#;
        let temp_file = std::env::temp_dir().join("test_notify_config.yml");
        std::fs::write(&temp_file, yaml).unwrap();

        let config = NotifyConfig::load_from_file(&temp_file).unwrap();
        assert_eq!(config.bot_token, "123456:ABC-DEF");
        assert_eq!(config.chat_id, 987654);

        std::fs::remove_file(temp_file).ok();
    }

    #[test]
    fn test_load_from_yaml_string_chat_id() {
        let yaml = r#"
telegram:
  bot_token: "123456:ABC-DEF"
  chat_id: "987654"
"#;
        let temp_file = std::env::temp_dir().join("test_notify_config_str_id.yml");
        std::fs::write(&temp_file, yaml).unwrap();

        let config = NotifyConfig::load_from_file(&temp_file).unwrap();
        assert_eq!(config.chat_id, 987654);

        std::fs::remove_file(temp_file).ok();
    }

    #[test]
    fn test_load_from_yaml_missing_values_fall_back_to_placeholders() {
        let yaml = "telegram: {}\n";
        let temp_file = std::env::temp_dir().join("test_notify_config_empty.yml");
        std::fs::write(&temp_file, yaml).unwrap();

        let config = NotifyConfig::load_from_file(&temp_file).unwrap();
        assert_eq!(config.bot_token, BOT_TOKEN_PLACEHOLDER);
        assert_eq!(config.chat_id, CHAT_ID_PLACEHOLDER);
        assert!(config.validate().is_err());

        std::fs::remove_file(temp_file).ok();
    }

    #[test]
    fn test_load_from_missing_file_errors() {
        let result = NotifyConfig::load_from_file("/definitely/not/a/config.yml");
        assert!(result.is_err());
    }

    #[test]
    fn test_message_limit_constant() {
        assert_eq!(TELEGRAM_MESSAGE_LIMIT, 4096);
    }
}
