//! Reading endpoints, scoped under a parent sensor.

use web_types::{Page, Reading, ReadingDraft, ReadingQuery};

use super::Result;

/// `GET /sensors/{id}/readings/` with an optional timestamp range.
///
/// The endpoint answers with a bare array today, but the envelope shape is
/// tolerated too; both flatten to the same item list.
pub async fn list(sensor_id: i64, query: &ReadingQuery) -> Result<Vec<Reading>> {
    let page: Page<Reading> =
        super::get_json(&format!("/sensors/{sensor_id}/readings/{}", query.query_string())).await?;
    Ok(page.into_items())
}

/// `POST /sensors/{id}/readings/` - readings are append-only from here.
pub async fn create(sensor_id: i64, draft: &ReadingDraft) -> Result<Reading> {
    super::post_json(&format!("/sensors/{sensor_id}/readings/"), draft).await
}
