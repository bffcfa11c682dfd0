use {
    anyhow::{Context, Result},
    clap::Parser,
    crypto_forecast::{
        Cli, MarketInsights, PricePipeline,
        data::{CsvProvider, MarketDataProvider, NewsApiClient, SyntheticProvider},
        report::{InsightsSection, render_json, render_text},
        sentiment::LexiconClassifier,
    },
    std::panic,
};

fn main() -> Result<()> {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    let mut builder = env_logger::Builder::new();

    builder
        .filter(None, global_level)
        .filter(Some("crypto_forecast"), my_code_level)
        .init();

    let args = Cli::parse();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(run(args))
}

async fn run(args: Cli) -> Result<()> {
    // 1. Market data source
    let provider: Box<dyn MarketDataProvider> = match &args.data_dir {
        Some(dir) => Box::new(CsvProvider::new(dir)),
        None => Box::new(SyntheticProvider::default()),
    };

    // 2. Numeric pipeline
    let report = PricePipeline::new(provider)
        .run(args.symbol)
        .await
        .with_context(|| format!("Pipeline failed for {}", args.symbol))?;

    // 3. Optional insights
    let mut insights = MarketInsights::new(Box::new(LexiconClassifier::default()));
    let mut section = InsightsSection::default();

    if let Some(text) = &args.sentiment {
        section.sentiment = Some(insights.sentiment(text).context("Sentiment scoring failed")?);
    }

    if args.news {
        if let Some(key) = &args.news_api_key {
            insights = insights.with_news(Box::new(NewsApiClient::new(key.as_str())?));
            section.headlines = Some(
                insights
                    .headlines(args.symbol, args.news_limit)
                    .await
                    .context("Fetching headlines failed")?,
            );
        }
    }

    // 4. Output
    if args.json {
        println!("{}", render_json(&report, &section)?);
    } else {
        print!("{}", render_text(&report, &section));
    }
    Ok(())
}
