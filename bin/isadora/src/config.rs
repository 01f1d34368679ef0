use std::time::Duration;

use crate::{Error, Result};

const DEFAULT_GATEWAY_ID: &str = "gateway";
const DEFAULT_PUBLISHER_ID: &str = "isy99";
const DEFAULT_DOMAIN: &str = "local";
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub gateway_address: String,
    pub gateway_id: String,
    pub login: String,
    pub password: String,
    pub publisher_id: String,
    pub domain: String,
    pub poll_interval: Duration,
    pub mqtt_address: String,
    pub mqtt_username: String,
    pub mqtt_password: String,
}

impl Config {
    pub fn from_env() -> Result<Config> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config> {
        let required = |name: &'static str| lookup(name).ok_or(Error::MissingEnv(name));
        let optional = |name: &str, default: &str| lookup(name).unwrap_or(default.to_string());

        let poll_interval = match lookup("POLL_INTERVAL") {
            Some(value) => value
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .ok_or(Error::InvalidEnv("POLL_INTERVAL", value))?,
            None => DEFAULT_POLL_INTERVAL,
        };

        Ok(Config {
            gateway_address: required("ISY_ADDRESS")?,
            gateway_id: optional("ISY_GATEWAY_ID", DEFAULT_GATEWAY_ID),
            login: optional("ISY_LOGIN", ""),
            password: optional("ISY_PASSWORD", ""),
            publisher_id: optional("PUBLISHER_ID", DEFAULT_PUBLISHER_ID),
            domain: optional("DOMAIN", DEFAULT_DOMAIN),
            poll_interval,
            mqtt_address: required("MQTT_ADDRESS")?,
            mqtt_username: optional("MQTT_USER", ""),
            mqtt_password: optional("MQTT_PASS", ""),
        })
    }
}
