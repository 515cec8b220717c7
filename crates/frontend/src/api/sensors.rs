//! Sensor CRUD endpoints.

use web_types::{Page, Sensor, SensorDraft, SensorQuery};

use super::Result;

/// `GET /sensors/` with search and pagination parameters.
pub async fn list(query: &SensorQuery) -> Result<Page<Sensor>> {
    super::get_json(&format!("/sensors/{}", query.query_string())).await
}

/// `POST /sensors/`
pub async fn create(draft: &SensorDraft) -> Result<Sensor> {
    super::post_json("/sensors/", draft).await
}

/// `GET /sensors/{id}/`
pub async fn get(id: i64) -> Result<Sensor> {
    super::get_json(&format!("/sensors/{id}/")).await
}

/// `PUT /sensors/{id}/` - full replace, never a partial update.
pub async fn update(id: i64, draft: &SensorDraft) -> Result<Sensor> {
    super::put_json(&format!("/sensors/{id}/"), draft).await
}

/// `DELETE /sensors/{id}/` - cascades to the sensor's readings server-side.
pub async fn delete(id: i64) -> Result<()> {
    super::delete(&format!("/sensors/{id}/")).await
}
