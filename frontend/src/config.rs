use once_cell::sync::Lazy;

use shared::constants::DEFAULT_AUTH_URL;

/// Build-time settings, taken from `AUTH_API_URL` and `AUTH_CLIENT_ID`.
#[derive(Debug, Clone)]
pub struct Config {
    pub auth_url: String,
    pub client_id: String,
}

impl Config {
    fn from_env() -> Self {
        Self::from_values(option_env!("AUTH_API_URL"), option_env!("AUTH_CLIENT_ID"))
    }

    fn from_values(auth_url: Option<&str>, client_id: Option<&str>) -> Self {
        Self {
            auth_url: auth_url.filter(|url| !url.is_empty()).unwrap_or(DEFAULT_AUTH_URL).to_string(),
            client_id: client_id.unwrap_or_default().trim().to_string(),
        }
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_values(None, None);
        assert_eq!(config.auth_url, DEFAULT_AUTH_URL);
        assert!(config.client_id.is_empty());
    }

    #[test]
    fn explicit_values_win() {
        let config = Config::from_values(Some("http://localhost:8080/register"), Some(" abc "));
        assert_eq!(config.auth_url, "http://localhost:8080/register");
        assert_eq!(config.client_id, "abc");

        let config = Config::from_values(Some(""), None);
        assert_eq!(config.auth_url, DEFAULT_AUTH_URL);
    }
}
