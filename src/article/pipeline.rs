use crate::article::model::Article;
use crate::article::normalize::normalize;
use crate::csv::RawRow;

/// Normalize, filter, and order a batch of raw rows for display.
///
/// 1. Every row is normalized (see [`normalize`]).
/// 2. Articles with a blank headline are excluded.
/// 3. When `query` is non-empty, only articles matching it survive
///    (see [`matches_query`]).
/// 4. The rest are stable-sorted by published time, most recent first,
///    with unknown/invalid timestamps after every valid one.
///
/// Pure function of its inputs: no I/O, no hidden state, identical inputs
/// give identical output. The caller may treat the first element as the
/// lead story; the ordering contract that makes "first" meaningful lives
/// here.
#[must_use]
pub fn present(rows: &[RawRow], query: Option<&str>) -> Vec<Article> {
    let mut articles: Vec<Article> = rows
        .iter()
        .map(normalize)
        .filter(|a| !a.headline.trim().is_empty())
        .collect();

    if let Some(q) = query
        && !q.trim().is_empty()
    {
        articles.retain(|a| matches_query(a, q));
    }

    articles.sort_by(|a, b| a.published.display_cmp(&b.published));

    articles
}

/// Case-insensitive substring search over headline, summary, and tickers.
///
/// Absent summary/tickers compare as empty, so a query can only miss them,
/// never panic on them. Also used by the desk to re-filter its cached
/// collection without a fetch.
#[must_use]
pub fn matches_query(article: &Article, query: &str) -> bool {
    let q = query.to_lowercase();
    article.headline.to_lowercase().contains(&q)
        || article
            .summary
            .as_deref()
            .unwrap_or_default()
            .to_lowercase()
            .contains(&q)
        || article
            .tickers
            .as_deref()
            .unwrap_or_default()
            .to_lowercase()
            .contains(&q)
}
