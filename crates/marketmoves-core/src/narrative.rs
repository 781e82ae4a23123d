//! Templated explanation of the day's move
//!
//! A fixed, ordered rule list; each rule contributes one sentence when its
//! precondition holds. Pure and total: always returns a string.

use crate::model::{Metrics, NewsItem, Quote};

const NO_QUOTE_PROMPT: &str = "Enter a ticker to see analysis.";
const ELEVATED_PE_THRESHOLD: f64 = 25.0;

/// Derive the explanation text for an analysis.
///
/// Without a quote there is nothing to explain and a fixed prompt is
/// returned instead of running the rules. Sentences are joined with `" \n"`.
pub fn explain(quote: Option<&Quote>, metrics: Option<&Metrics>, news: &[NewsItem]) -> String {
    let Some(quote) = quote else {
        return NO_QUOTE_PROMPT.to_string();
    };

    let mut parts = Vec::new();

    // Direction is taken from the sign of the absolute change; an exactly
    // flat day reads as "up 0.00%"
    let direction = if quote.change >= 0.0 { "up" } else { "down" };
    parts.push(format!(
        "`{}` is {} {:.2}% today.",
        quote.symbol,
        direction,
        quote.change_percent.abs()
    ));

    if let Some(pe) = metrics.and_then(|m| m.pe_ratio).filter(|&pe| pe != 0.0) {
        let qualifier = if pe > ELEVATED_PE_THRESHOLD {
            ", elevated versus market"
        } else {
            ""
        };
        parts.push(format!("P/E is {pe:.2}{qualifier}."));
    }

    let high = metrics
        .and_then(|m| m.fifty_two_week_high)
        .filter(|&v| v != 0.0);
    let low = metrics
        .and_then(|m| m.fifty_two_week_low)
        .filter(|&v| v != 0.0);
    if let (Some(high), Some(low)) = (high, low) {
        if quote.price != 0.0 {
            let range = high - low;
            let position = (quote.price - low) / if range == 0.0 { 1.0 } else { range };
            parts.push(format!(
                "Price is at {:.0}% of its 52-week range.",
                position * 100.0
            ));
        }
    }

    if !news.is_empty() {
        parts.push("Recent headlines may be influencing the move.".to_string());
    }

    parts.join(" \n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(symbol: &str, price: f64, change: f64, change_percent: f64) -> Quote {
        Quote {
            symbol: symbol.to_string(),
            price,
            change,
            change_percent,
            volume: None,
            previous_close: None,
        }
    }

    #[test]
    fn test_direction_sentence_only() {
        let q = quote("ABC", 100.0, 5.0, 5.0);
        assert_eq!(explain(Some(&q), None, &[]), "`ABC` is up 5.00% today.");
    }

    #[test]
    fn test_negative_change_reads_down() {
        let q = quote("ABC", 95.0, -5.0, -5.0);
        assert_eq!(explain(Some(&q), None, &[]), "`ABC` is down 5.00% today.");
    }

    #[test]
    fn test_flat_day_reads_up_zero() {
        let q = quote("ABC", 100.0, 0.0, 0.0);
        assert_eq!(explain(Some(&q), None, &[]), "`ABC` is up 0.00% today.");
    }

    #[test]
    fn test_pe_sentence_with_and_without_qualifier() {
        let q = quote("ABC", 100.0, 5.0, 5.0);

        let elevated = Metrics {
            pe_ratio: Some(30.0),
            ..Default::default()
        };
        assert_eq!(
            explain(Some(&q), Some(&elevated), &[]),
            "`ABC` is up 5.00% today. \nP/E is 30.00, elevated versus market."
        );

        let modest = Metrics {
            pe_ratio: Some(10.0),
            ..Default::default()
        };
        assert_eq!(
            explain(Some(&q), Some(&modest), &[]),
            "`ABC` is up 5.00% today. \nP/E is 10.00."
        );
    }

    #[test]
    fn test_zero_pe_is_skipped() {
        let q = quote("ABC", 100.0, 5.0, 5.0);
        let metrics = Metrics {
            pe_ratio: Some(0.0),
            ..Default::default()
        };
        assert_eq!(
            explain(Some(&q), Some(&metrics), &[]),
            "`ABC` is up 5.00% today."
        );
    }

    #[test]
    fn test_fifty_two_week_position() {
        let q = quote("ABC", 75.0, 5.0, 5.0);
        let metrics = Metrics {
            fifty_two_week_high: Some(100.0),
            fifty_two_week_low: Some(50.0),
            ..Default::default()
        };
        let text = explain(Some(&q), Some(&metrics), &[]);
        assert!(text.contains("Price is at 50% of its 52-week range."));
    }

    #[test]
    fn test_fifty_two_week_degenerate_range() {
        let q = quote("ABC", 50.0, 0.0, 0.0);
        let metrics = Metrics {
            fifty_two_week_high: Some(50.0),
            fifty_two_week_low: Some(50.0),
            ..Default::default()
        };
        // high == low substitutes 1 for the denominator
        let text = explain(Some(&q), Some(&metrics), &[]);
        assert!(text.contains("Price is at 0% of its 52-week range."));
    }

    #[test]
    fn test_news_sentence() {
        let q = quote("ABC", 100.0, 5.0, 5.0);
        let news = vec![NewsItem {
            title: "Headline".to_string(),
            url: "https://example.com".to_string(),
            source: None,
            published_at: None,
        }];
        assert_eq!(
            explain(Some(&q), None, &news),
            "`ABC` is up 5.00% today. \nRecent headlines may be influencing the move."
        );
    }

    #[test]
    fn test_no_quote_prompt() {
        assert_eq!(explain(None, None, &[]), "Enter a ticker to see analysis.");
    }
}
