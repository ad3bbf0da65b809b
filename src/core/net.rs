/// Read the response body as text.
pub(crate) async fn get_text(resp: reqwest::Response) -> Result<String, reqwest::Error> {
    resp.text().await
}
