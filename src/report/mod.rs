//! Text and JSON rendering of a pipeline run.

use {
    crate::{
        config::{PriceLike, SentimentScore, constants::forecast::PREVIEW_DAYS},
        data::Article,
        engine::PipelineReport,
        models::{FeatureRow, Forecast, ForecastPoint, ModelSummary, SeriesSummary, SignalPair},
        utils::format_date,
    },
    serde::Serialize,
    std::fmt::Write,
    tabled::{Table, Tabled},
};

#[derive(Tabled)]
struct MetricRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled)]
struct PredictionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Predicted Close")]
    predicted_close: String,
}

impl From<&ForecastPoint> for PredictionRow {
    fn from(p: &ForecastPoint) -> Self {
        Self {
            date: format_date(p.date),
            predicted_close: format!("{:.2}", p.predicted_close),
        }
    }
}

#[derive(Tabled)]
struct HeadlineRow {
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "URL")]
    url: String,
}

/// Optional extras printed after the numeric report.
#[derive(Debug, Default, Serialize)]
pub struct InsightsSection {
    pub sentiment: Option<SentimentScore>,
    pub headlines: Option<Vec<Article>>,
}

pub fn render_text(report: &PipelineReport, insights: &InsightsSection) -> String {
    let mut out = String::new();
    let s = &report.summary;

    let _ = writeln!(out, "{} daily prices", report.symbol);
    let _ = writeln!(
        out,
        "{} .. {} ({} bars)\n",
        format_date(s.first_date),
        format_date(s.last_date),
        s.bar_count
    );
    let _ = writeln!(out, "{}\n", Table::new(summary_rows(s)));

    match (report.signals, report.features.last()) {
        (Some(pair), Some(latest)) => {
            let _ = writeln!(out, "{}\n", Table::new(signal_rows(pair, latest)));
        }
        _ => {
            let _ = writeln!(out, "Signals: insufficient history (need at least 30 bars)\n");
        }
    }

    let f = &report.forecast;
    let _ = writeln!(out, "{}", model_line(&f.model));
    let _ = writeln!(out, "Next {} days", PREVIEW_DAYS);
    let _ = writeln!(out, "{}\n", prediction_table(f.preview(PREVIEW_DAYS)));
    let _ = writeln!(out, "{}-day forecast", f.horizon());
    let _ = writeln!(out, "{}", prediction_table(&f.points));

    if let Some(score) = insights.sentiment {
        let _ = writeln!(out, "\nSentiment score: {}", score);
    }
    if let Some(headlines) = &insights.headlines {
        let _ = writeln!(out, "\nLatest {} news", report.symbol.base_asset());
        if headlines.is_empty() {
            let _ = writeln!(out, "No articles found.");
        } else {
            let rows = headlines.iter().map(|a| HeadlineRow {
                source: a.source_name.clone(),
                title: a.title.clone(),
                url: a.url.clone(),
            });
            let _ = writeln!(out, "{}", Table::new(rows));
        }
    }
    out
}

fn summary_rows(s: &SeriesSummary) -> Vec<MetricRow> {
    vec![
        MetricRow {
            metric: "Current Price",
            value: s.current_price.format_price(),
        },
        MetricRow {
            metric: "Highest Price",
            value: s.highest_price.format_price(),
        },
        MetricRow {
            metric: "Lowest Price",
            value: s.lowest_price.format_price(),
        },
    ]
}

fn signal_rows(pair: SignalPair, latest: &FeatureRow) -> Vec<MetricRow> {
    vec![
        MetricRow {
            metric: "Trend Signal",
            value: pair.trend.to_string(),
        },
        MetricRow {
            metric: "Risk Level",
            value: pair.risk.to_string(),
        },
        MetricRow {
            metric: "MA 7 / MA 30",
            value: format!(
                "{} / {}",
                latest.ma_short.format_price(),
                latest.ma_long.format_price()
            ),
        },
        MetricRow {
            metric: "Volatility (7d)",
            value: format!("{:.4}", latest.volatility.value()),
        },
    ]
}

fn model_line(m: &ModelSummary) -> String {
    let coeffs: Vec<String> = m.ar_coeffs.iter().map(|c| format!("{:+.4}", c)).collect();
    format!(
        "{} on {} closes | ar=[{}] sigma2={:.4} aic={:.1}",
        m.order,
        m.n_obs,
        coeffs.join(", "),
        m.sigma2,
        m.aic
    )
}

fn prediction_table(points: &[ForecastPoint]) -> Table {
    Table::new(points.iter().map(PredictionRow::from))
}

#[derive(Serialize)]
struct JsonReport<'a> {
    symbol: String,
    summary: &'a SeriesSummary,
    latest_features: Option<&'a FeatureRow>,
    signals: Option<SignalPair>,
    forecast: &'a Forecast,
    #[serde(flatten)]
    insights: &'a InsightsSection,
}

pub fn render_json(report: &PipelineReport, insights: &InsightsSection) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        symbol: report.symbol.to_string(),
        summary: &report.summary,
        latest_features: report.features.last(),
        signals: report.signals,
        forecast: &report.forecast,
        insights,
    })
}
