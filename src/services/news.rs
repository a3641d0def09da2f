use chrono::{Duration, Utc};

use crate::models::{NewsArticle, NewsCategory};

/// Fixed four-article feed. Publication times are computed relative to the
/// moment of the call so the feed always looks fresh.
pub fn headlines() -> Vec<NewsArticle> {
    let now = Utc::now();

    vec![
        NewsArticle {
            id: "1".to_string(),
            title: "Egyptian Stock Exchange Reaches New Heights".to_string(),
            summary: "The EGX30 index closed at record levels driven by strong banking sector performance...".to_string(),
            source: "Egypt Today".to_string(),
            category: NewsCategory::Egx,
            published_at: now - Duration::hours(2),
            url: Some("https://example.com/news/1".to_string()),
        },
        NewsArticle {
            id: "2".to_string(),
            title: "Gold Prices Surge Amid Global Uncertainty".to_string(),
            summary: "International gold prices continue their upward trajectory as investors seek safe haven assets...".to_string(),
            source: "Financial Times Egypt".to_string(),
            category: NewsCategory::GoldSilver,
            published_at: now - Duration::hours(4),
            url: Some("https://example.com/news/2".to_string()),
        },
        NewsArticle {
            id: "3".to_string(),
            title: "Egyptian Pound Strengthens Against Dollar".to_string(),
            summary: "The EGP showed resilience in recent trading sessions, gaining ground against major currencies...".to_string(),
            source: "Al Ahram Economics".to_string(),
            category: NewsCategory::Currencies,
            published_at: now - Duration::hours(6),
            url: Some("https://example.com/news/3".to_string()),
        },
        NewsArticle {
            id: "4".to_string(),
            title: "Central Bank Announces New Monetary Policy".to_string(),
            summary: "The Central Bank of Egypt unveiled new measures to support economic growth and stability...".to_string(),
            source: "Reuters Egypt".to_string(),
            category: NewsCategory::General,
            published_at: now - Duration::hours(8),
            url: Some("https://example.com/news/4".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_feed_shape() {
        let articles = headlines();
        assert_eq!(articles.len(), 4);

        let ids: HashSet<&str> = articles.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), 4, "article ids must be unique");

        let categories: Vec<NewsCategory> = articles.iter().map(|a| a.category).collect();
        assert_eq!(
            categories,
            vec![
                NewsCategory::Egx,
                NewsCategory::GoldSilver,
                NewsCategory::Currencies,
                NewsCategory::General,
            ]
        );
    }

    #[test]
    fn test_published_at_is_in_the_past() {
        let now = Utc::now();
        for article in headlines() {
            assert!(article.published_at < now);
        }
    }
}
