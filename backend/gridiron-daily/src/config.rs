use serde::Deserialize;
use std::env;

const DEFAULT_QUESTION_TIME_LIMIT_SECONDS: u32 = 30;
const DEFAULT_FEEDBACK_DELAY_SECONDS: u64 = 3;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Hard per-question answer budget. Non-extendable; expiry scores the
    /// question as wrong.
    pub question_time_limit_seconds: u32,
    /// Pause between scoring a question and advancing to the next.
    pub feedback_delay_seconds: u64,
    /// Whether the one-play-per-day gate is consulted before a session
    /// starts. Explicit configuration, not a module-level switch.
    pub daily_limit_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            question_time_limit_seconds: DEFAULT_QUESTION_TIME_LIMIT_SECONDS,
            feedback_delay_seconds: DEFAULT_FEEDBACK_DELAY_SECONDS,
            daily_limit_enabled: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        // Determine environment (defaults to dev)
        let env = env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());

        // Build configuration from config/*.toml + ENV overrides
        let config_builder = config::Config::builder()
            .add_source(
                config::File::with_name(&format!("config/{}", env)).required(false), // Allow missing config file, fallback to ENV
            )
            // Override with environment variables (prefix: APP_)
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            );

        let settings = config_builder.build()?;

        let question_time_limit_seconds = settings
            .get_int("game.question_time_limit_seconds")
            .ok()
            .and_then(|v| u32::try_from(v).ok())
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_QUESTION_TIME_LIMIT_SECONDS);

        let feedback_delay_seconds = settings
            .get_int("game.feedback_delay_seconds")
            .ok()
            .and_then(|v| u64::try_from(v).ok())
            .unwrap_or(DEFAULT_FEEDBACK_DELAY_SECONDS);

        let daily_limit_enabled = settings
            .get_bool("game.daily_limit_enabled")
            .unwrap_or(true);

        Ok(Config {
            question_time_limit_seconds,
            feedback_delay_seconds,
            daily_limit_enabled,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn load_uses_defaults_without_overrides() {
        env::remove_var("APP_GAME__QUESTION_TIME_LIMIT_SECONDS");
        env::remove_var("APP_GAME__FEEDBACK_DELAY_SECONDS");
        env::remove_var("APP_GAME__DAILY_LIMIT_ENABLED");
        let config = Config::load().expect("config loads");
        assert_eq!(config.question_time_limit_seconds, 30);
        assert_eq!(config.feedback_delay_seconds, 3);
        assert!(config.daily_limit_enabled);
    }

    #[test]
    #[serial]
    fn environment_overrides_apply() {
        env::set_var("APP_GAME__QUESTION_TIME_LIMIT_SECONDS", "10");
        env::set_var("APP_GAME__DAILY_LIMIT_ENABLED", "false");
        let config = Config::load().expect("config loads");
        assert_eq!(config.question_time_limit_seconds, 10);
        assert!(!config.daily_limit_enabled);
        env::remove_var("APP_GAME__QUESTION_TIME_LIMIT_SECONDS");
        env::remove_var("APP_GAME__DAILY_LIMIT_ENABLED");
    }

    #[test]
    #[serial]
    fn zero_time_limit_falls_back_to_default() {
        env::set_var("APP_GAME__QUESTION_TIME_LIMIT_SECONDS", "0");
        let config = Config::load().expect("config loads");
        assert_eq!(config.question_time_limit_seconds, 30);
        env::remove_var("APP_GAME__QUESTION_TIME_LIMIT_SECONDS");
    }
}
