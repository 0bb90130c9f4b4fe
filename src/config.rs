use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenFormat {
    Pretty,
    Json,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub env_name: String,
    pub prompt: String,
    pub format: TokenFormat,
}

impl Default for Config {
    fn default() -> Self {
        let env_name = env::var("LOXC_ENV").unwrap_or_else(|_| String::from("default"));
        let prompt = env::var("LOXC_PROMPT").unwrap_or_else(|_| String::from("> "));
        let format = match env::var("LOXC_FORMAT").as_deref() {
            Ok("json") => TokenFormat::Json,
            _ => TokenFormat::Pretty,
        };

        Config {
            env_name,
            prompt,
            format,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let config_path = Self::get_config_path();
        if !config_path.exists() {
            return Config::default();
        }

        let contents = fs::read_to_string(&config_path).unwrap_or_default();
        serde_json::from_str(&contents).unwrap_or_default()
    }

    pub fn save(&self) -> io::Result<()> {
        let config_path = Self::get_config_path();
        fs::create_dir_all(config_path.parent().unwrap())?;

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)
    }

    pub fn get_config_path() -> PathBuf {
        let env_name = env::var("LOXC_ENV").unwrap_or_else(|_| String::from("default"));
        let home = if cfg!(windows) {
            env::var("USERPROFILE").unwrap_or_else(|_| String::from("."))
        } else {
            env::var("HOME").unwrap_or_else(|_| String::from("."))
        };

        PathBuf::from(home)
            .join(".loxc")
            .join(&env_name)
            .join("config.json")
    }
}
