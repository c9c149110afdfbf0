//! Common fixtures for integration tests.
//!
//! Each test binary pulls this in with `mod common;` and uses a subset of it.

#![allow(dead_code)]

use ratatui::backend::TestBackend;
use ratatui::Terminal;

use reelscope::adapters::mock::{MockBrowser, MockClipboard};
use reelscope::app::App;
use reelscope::models::{Dataset, Record, Summary, SummaryStats};
use reelscope::startup::DashboardConfig;
use reelscope::state::Action;

/// A record with the fields the query engine looks at.
pub fn record(id: i64, name: &str, tier: &str, views: Option<f64>) -> Record {
    let mut r = Record::new(id);
    r.author_name = Some(name.to_string());
    r.account_id = Some(format!("acct{id}"));
    r.follower_tier = Some(tier.to_string());
    r.views_count = views;
    r
}

/// 45 records: ids 1-20 in tier "A", ids 21-45 in tier "B".
///
/// Views grow with the id except for records 30 and 40, which have none.
pub fn scenario_dataset() -> Dataset {
    let records = (1..=45)
        .map(|id| {
            let tier = if id <= 20 { "A" } else { "B" };
            let views = match id {
                30 | 40 => None,
                _ => Some((id * 100) as f64),
            };
            record(id, &format!("Creator {id}"), tier, views)
        })
        .collect();
    Dataset::new(summary_for(45), records)
}

/// `n` records named "Creator {id}", all in tier "Mid".
pub fn numbered_dataset(n: i64) -> Dataset {
    let records = (1..=n)
        .map(|id| record(id, &format!("Creator {id}"), "Mid", Some(id as f64)))
        .collect();
    Dataset::new(summary_for(n), records)
}

pub fn summary_for(n: i64) -> Summary {
    Summary::flat(SummaryStats {
        total_influencers: n as f64,
        total_views: 1_250_000.0,
        total_followers: 3_400_000.0,
        avg_engagement_rate: 0.0512,
        avg_cpm: 4.2,
        ..SummaryStats::default()
    })
}

pub fn ids<'a>(records: impl IntoIterator<Item = &'a Record>) -> Vec<i64> {
    records.into_iter().map(|r| r.id).collect()
}

/// An app with mock desktop integrations and `dataset` already loaded.
pub fn loaded_app(config: DashboardConfig, dataset: Dataset) -> App {
    let mut app = App::with_desktop(
        config,
        Box::new(MockClipboard::new()),
        Box::new(MockBrowser::new()),
    );
    app.dispatch(Action::DatasetLoaded(Box::new(dataset)));
    app
}

/// The whole test buffer as newline-separated rows.
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Sample dataset document in the converter's format.
pub const SAMPLE_DOCUMENT: &str = r#"{
  "summary": {
    "total_influencers": 3,
    "total_views": 1200000,
    "total_followers": 450000,
    "avg_engagement_rate": 0.061,
    "avg_cpm": 3.75
  },
  "data": [
    {"id": 1, "author_name": "Luna Park", "account_id": "lunapark", "follower_tier": "Micro",
     "views_count": 500000, "video_caption": "Morning ABC routine", "email": "luna@example.com",
     "video_url": "https://www.tiktok.com/@lunapark/video/7301234567890123456"},
    {"id": 2, "author_name": "Kai", "account_id": "kai.cooks", "follower_tier": "Mid",
     "views_count": 650000, "video_caption": "Ramen in ten minutes"},
    {"id": 3, "author_name": "Mo", "account_id": "mo_moves", "follower_tier": "Micro",
     "views_count": null, "video_caption": "Dance challenge"}
  ]
}"#;
