/// Which provider backs the API. Resolved once at startup and injected into
/// the router state; there is no ambient switch consulted per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Mock,
    Live,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_source: DataSource,
    pub rates_api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| "PORT must be a valid port number".to_string())?;

        let data_source = match std::env::var("DATA_SOURCE")
            .unwrap_or_else(|_| "mock".to_string())
            .to_lowercase()
            .as_str()
        {
            "mock" => DataSource::Mock,
            "live" => DataSource::Live,
            other => {
                return Err(format!(
                    "Invalid DATA_SOURCE: {other}. Must be 'mock' or 'live'"
                ))
            }
        };

        let rates_api_url = std::env::var("RATES_API_URL")
            .unwrap_or_else(|_| "https://api.exchangerate.host".to_string());

        Ok(Self {
            port,
            data_source,
            rates_api_url,
        })
    }
}
