use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct AppConfig {
    pub server_port: u16,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_rate_limit_rps")]
    pub rate_limit_rps: u64,
    #[serde(default = "default_rate_limit_burst")]
    pub rate_limit_burst: u32,
}

fn default_request_timeout_secs() -> u64 {
    5
}

fn default_rate_limit_rps() -> u64 {
    200
}

fn default_rate_limit_burst() -> u32 {
    400
}

impl AppConfig {
    /// Creates a new `AppConfig` by reading from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required environment variables are missing or invalid.
    pub fn new_from_env() -> Result<Self, envy::Error> {
        envy::from_env::<Self>()?.validated()
    }

    /// Same as [`AppConfig::new_from_env`] but over an explicit set of variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required variables are missing or invalid.
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Self>(vars)?.validated()
    }

    fn validated(self) -> Result<Self, envy::Error> {
        if self.rate_limit_rps == 0 {
            return Err(envy::Error::Custom(
                "RATE_LIMIT_RPS must be greater than zero".to_string(),
            ));
        }
        Ok(self)
    }
}
