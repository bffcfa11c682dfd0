pub struct NewsApiConfig {
    pub base_url: &'static str,
    pub timeout_ms: u64,
    pub language: &'static str,
    pub sort_by: &'static str,
}

impl Default for NewsApiConfig {
    fn default() -> Self {
        Self {
            base_url: NEWS.endpoint.base_url,
            timeout_ms: NEWS.client.timeout_ms,
            language: NEWS.endpoint.language,
            sort_by: NEWS.endpoint.sort_by,
        }
    }
}

pub struct EndpointConfig {
    pub base_url: &'static str,
    pub language: &'static str,
    pub sort_by: &'static str,
}

pub struct ClientDefaults {
    pub timeout_ms: u64,
    pub default_limit: usize,
    /// Environment variable read by the CLI for the API key.
    pub api_key_env: &'static str,
}

pub struct NewsConfig {
    pub endpoint: EndpointConfig,
    pub client: ClientDefaults,
}

pub const NEWS: NewsConfig = NewsConfig {
    endpoint: EndpointConfig {
        base_url: "https://newsapi.org/v2/everything",
        language: "en",
        sort_by: "publishedAt",
    },
    client: ClientDefaults {
        timeout_ms: 10_000,
        default_limit: 5,
        api_key_env: "NEWS_API_KEY",
    },
};
