use crate::core::{FeedClient, FeedError, net};
use crate::csv::RawRow;
use crate::feed::{FeedFormat, wire};

/// One fetch cycle: GET the published sheet and parse the body into rows.
///
/// A non-success status or transport failure aborts the whole cycle — no
/// partial data. There is no retry here; the next scheduled or
/// user-triggered refresh simply tries again.
pub(super) async fn fetch_rows(
    client: &FeedClient,
    format: FeedFormat,
) -> Result<Vec<RawRow>, FeedError> {
    let url = client.feed_url().clone();

    let resp = client.http().get(url).send().await?;
    if !resp.status().is_success() {
        return Err(FeedError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }

    let body = net::get_text(resp).await?;

    match format {
        FeedFormat::Csv => Ok(crate::csv::parse(&body)),
        FeedFormat::Json => wire::rows_from_json(&body),
    }
}
