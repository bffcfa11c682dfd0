use crate::{
    config::SentimentScore,
    data::{Article, NewsProvider},
    domain::Symbol,
    engine::{PipelineError, PipelineResult},
    sentiment::SentimentClassifier,
};

/// Headlines and free-text sentiment. Never feeds the numeric pipeline.
pub struct MarketInsights {
    news: Option<Box<dyn NewsProvider>>,
    classifier: Box<dyn SentimentClassifier>,
}

impl MarketInsights {
    pub fn new(classifier: Box<dyn SentimentClassifier>) -> Self {
        Self {
            news: None,
            classifier,
        }
    }

    pub fn with_news(mut self, provider: Box<dyn NewsProvider>) -> Self {
        self.news = Some(provider);
        self
    }

    pub async fn headlines(&self, symbol: Symbol, limit: usize) -> PipelineResult<Vec<Article>> {
        let provider = self
            .news
            .as_ref()
            .ok_or_else(|| PipelineError::InvalidInput("no news provider configured".into()))?;

        provider
            .fetch_articles(symbol.news_query(), limit)
            .await
            .map_err(|e| PipelineError::ExternalService(format!("{:#}", e)))
    }

    pub fn sentiment(&self, text: &str) -> PipelineResult<SentimentScore> {
        if text.trim().is_empty() {
            return Err(PipelineError::InvalidInput(
                "sentiment text is empty".into(),
            ));
        }
        self.classifier
            .classify(text)
            .map(SentimentScore::from)
            .map_err(|e| PipelineError::ExternalService(format!("{:#}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{data::test_server, sentiment::LexiconClassifier};
    use anyhow::{Result, bail};
    use async_trait::async_trait;

    struct CannedNews;

    #[async_trait]
    impl NewsProvider for CannedNews {
        async fn fetch_articles(&self, query: &str, limit: usize) -> Result<Vec<Article>> {
            Ok((0..limit)
                .map(|i| Article {
                    title: format!("{} headline {}", query, i),
                    source_name: "Wire".into(),
                    url: format!("https://example.com/{}", i),
                })
                .collect())
        }
    }

    struct DownNews;

    #[async_trait]
    impl NewsProvider for DownNews {
        async fn fetch_articles(&self, _: &str, _: usize) -> Result<Vec<Article>> {
            bail!("503 Service Unavailable")
        }
    }

    fn insights() -> MarketInsights {
        MarketInsights::new(Box::new(LexiconClassifier::default()))
    }

    #[tokio::test]
    async fn headlines_use_symbol_query() {
        let articles = insights()
            .with_news(Box::new(CannedNews))
            .headlines(Symbol::EthUsd, 2)
            .await
            .unwrap();
        assert_eq!(articles.len(), 2);
        assert!(articles[0].title.starts_with("Ethereum"));
    }

    #[tokio::test]
    async fn news_failure_is_external_service() {
        let err = insights()
            .with_news(Box::new(DownNews))
            .headlines(Symbol::BtcUsd, 5)
            .await
            .unwrap_err();
        assert!(matches!(err, PipelineError::ExternalService(_)));
    }

    #[tokio::test]
    async fn rate_limited_endpoint_is_external_service() {
        let client = test_server::answering(
            "429 Too Many Requests",
            r#"{"status":"error","code":"rateLimited","message":"slow down"}"#,
        );
        let err = insights()
            .with_news(Box::new(client))
            .headlines(Symbol::BtcUsd, 5)
            .await
            .unwrap_err();
        match err {
            PipelineError::ExternalService(msg) => assert!(msg.contains("slow down"), "{msg}"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_external_service() {
        let err = insights()
            .with_news(Box::new(test_server::unreachable()))
            .headlines(Symbol::SolUsd, 5)
            .await
            .unwrap_err();
        assert!(matches!(err, PipelineError::ExternalService(_)));
    }

    #[test]
    fn blank_sentiment_is_invalid_input() {
        assert!(matches!(
            insights().sentiment("  "),
            Err(PipelineError::InvalidInput(_))
        ));
    }

    #[test]
    fn sentiment_sign_matches_text() {
        assert!(insights().sentiment("bitcoin rally looks strong").unwrap().value() > 0.0);
        assert!(insights().sentiment("another exchange hacked").unwrap().value() < 0.0);
    }
}
