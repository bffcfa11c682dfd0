use {
    crate::config::{DF, NewsApiConfig},
    anyhow::{Context, Result, bail},
    async_trait::async_trait,
    reqwest::Client,
    serde::{Deserialize, Serialize},
    std::time::Duration,
};

/// A headline as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub source_name: String,
    pub url: String,
}

#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Up to `limit` articles matching `query`, newest first.
    async fn fetch_articles(&self, query: &str, limit: usize) -> Result<Vec<Article>>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewsApiResponse {
    status: String,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Vec<NewsApiArticle>,
}

#[derive(Debug, Deserialize)]
struct NewsApiArticle {
    title: Option<String>,
    url: Option<String>,
    #[serde(default)]
    source: NewsApiSource,
}

#[derive(Debug, Default, Deserialize)]
struct NewsApiSource {
    name: Option<String>,
}

/// Client for a NewsAPI-style `/v2/everything` endpoint. One request per call, no retry.
pub struct NewsApiClient {
    client: Client,
    api_key: String,
    config: NewsApiConfig,
}

impl NewsApiClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, NewsApiConfig::default())
    }

    pub fn with_config(api_key: impl Into<String>, config: NewsApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            config,
        })
    }
}

#[async_trait]
impl NewsProvider for NewsApiClient {
    async fn fetch_articles(&self, query: &str, limit: usize) -> Result<Vec<Article>> {
        if DF.log_news {
            log::info!("GET {} q={} pageSize={}", self.config.base_url, query, limit);
        }

        let page_size = limit.to_string();
        let response = self
            .client
            .get(self.config.base_url)
            .query(&[
                ("q", query),
                ("pageSize", page_size.as_str()),
                ("sortBy", self.config.sort_by),
                ("language", self.config.language),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await
            .context("News request failed")?;

        let status = response.status();
        let body = response.text().await.context("Failed to read news response")?;
        if !status.is_success() {
            bail!("news endpoint answered {}: {}", status, error_detail(&body));
        }

        let articles = parse_articles(&body, limit)?;
        if DF.log_news {
            log::info!("{} articles for '{}'", articles.len(), query);
        }
        Ok(articles)
    }
}

/// Maps a NewsAPI body to articles. Entries without a title or url are dropped.
pub fn parse_articles(body: &str, limit: usize) -> Result<Vec<Article>> {
    let parsed: NewsApiResponse =
        serde_json::from_str(body).context("Malformed news response")?;

    if parsed.status != "ok" {
        bail!(
            "news endpoint status '{}' ({}): {}",
            parsed.status,
            parsed.code.unwrap_or_default(),
            parsed.message.unwrap_or_default()
        );
    }

    Ok(parsed
        .articles
        .into_iter()
        .filter_map(|a| {
            Some(Article {
                title: a.title?,
                url: a.url?,
                source_name: a.source.name.unwrap_or_else(|| "Unknown".to_string()),
            })
        })
        .take(limit)
        .collect())
}

fn error_detail(body: &str) -> String {
    serde_json::from_str::<NewsApiResponse>(body)
        .ok()
        .and_then(|r| r.message)
        .unwrap_or_else(|| body.chars().take(200).collect())
}
