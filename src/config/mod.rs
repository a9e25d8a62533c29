use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use std::env;

const DEFAULT_MAX_TOKEN_COUNT: i32 = 512;
const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_TOP_P: f32 = 0.9;

#[derive(Debug, Clone, Deserialize)]
pub struct BlogConfig {
    #[serde(flatten)]
    pub common: CommonConfig,
    pub aws: AwsConfig,
    pub generation: GenerationConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommonConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

#[derive(Debug, Clone, Deserialize)]
pub struct AwsConfig {
    pub region: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    /// Bedrock model for blog text (e.g., amazon.titan-text-lite-v1)
    pub model_id: String,
    pub max_token_count: i32,
    pub temperature: f32,
    pub top_p: f32,
    /// Outbound client limits, applied at the SDK layer
    pub connect_timeout_secs: u64,
    pub read_timeout_secs: u64,
    pub max_attempts: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub bucket: String,
    pub key_prefix: String,
}

impl CommonConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

impl BlogConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = CommonConfig::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(BlogConfig {
            common,
            aws: AwsConfig {
                region: get_env("AWS_REGION", Some("us-east-1"), is_prod)?,
            },
            generation: GenerationConfig {
                model_id: get_env(
                    "BLOG_MODEL_ID",
                    Some("amazon.titan-text-lite-v1"),
                    is_prod,
                )?,
                max_token_count: get_env(
                    "BLOG_MAX_TOKEN_COUNT",
                    Some(&DEFAULT_MAX_TOKEN_COUNT.to_string()),
                    is_prod,
                )?
                .parse()
                .unwrap_or(DEFAULT_MAX_TOKEN_COUNT),
                temperature: get_env(
                    "BLOG_TEMPERATURE",
                    Some(&DEFAULT_TEMPERATURE.to_string()),
                    is_prod,
                )?
                .parse()
                .unwrap_or(DEFAULT_TEMPERATURE),
                top_p: get_env("BLOG_TOP_P", Some(&DEFAULT_TOP_P.to_string()), is_prod)?
                    .parse()
                    .unwrap_or(DEFAULT_TOP_P),
                connect_timeout_secs: get_env("BLOG_CONNECT_TIMEOUT_SECS", Some("10"), is_prod)?
                    .parse()
                    .unwrap_or(10),
                read_timeout_secs: get_env("BLOG_READ_TIMEOUT_SECS", Some("30"), is_prod)?
                    .parse()
                    .unwrap_or(30),
                max_attempts: get_env("BLOG_MAX_ATTEMPTS", Some("3"), is_prod)?
                    .parse()
                    .unwrap_or(3),
            },
            storage: StorageConfig {
                bucket: get_env("BLOG_BUCKET", Some("awsbedrockhardik"), is_prod)?,
                key_prefix: get_env("BLOG_KEY_PREFIX", Some("blog-output"), is_prod)?,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_env_prefers_the_environment() {
        let key = "BLOG_CONFIG_TEST_SET_VARIABLE";
        env::set_var(key, "from-env");

        let value = get_env(key, Some("fallback"), false).expect("Failed to read variable");
        assert_eq!(value, "from-env");

        env::remove_var(key);
    }

    #[test]
    fn get_env_falls_back_to_the_dev_default() {
        let key = "BLOG_CONFIG_TEST_UNSET_VARIABLE";
        env::remove_var(key);

        let value = get_env(key, Some("fallback"), false).expect("Failed to read variable");
        assert_eq!(value, "fallback");
    }

    #[test]
    fn get_env_rejects_defaults_in_production() {
        let key = "BLOG_CONFIG_TEST_PROD_VARIABLE";
        env::remove_var(key);

        assert!(get_env(key, Some("fallback"), true).is_err());
        assert!(get_env(key, None, false).is_err());
    }
}
