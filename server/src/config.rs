use std::env;
use std::sync::LazyLock;

pub static CONFIG: LazyLock<Config> = LazyLock::new(Config::from_env);

#[derive(Clone)]
pub struct Config {
    /// Identity the demo provider resolves on sign-in.
    pub operator_username: String,
    pub operator_display_name: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            operator_username: env_var("ATELIER_OPERATOR_USERNAME", "admin"),
            operator_display_name: env_var("ATELIER_OPERATOR_DISPLAY_NAME", "Store Operator"),
        }
    }
}

fn env_var(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}
