use crate::{error::ApiResult, store::StoreClient};
use actix_web::{HttpResponse, web};

/// Store connectivity probe
#[utoipa::path(
    get,
    path = "/api/_health",
    responses(
        (status = 200, description = "Probe result", body = Object, example = json!({
            "ok": true,
            "status_code": 200,
            "body": [{ "employee_id": "0b7e3c1e-8f0f-4d59-9d43-2f6f0f4c2a11" }]
        })),
        (status = 500, description = "Probe could not run", body = Object, example = json!({
            "detail": "error sending request"
        }))
    ),
    tag = "Health"
)]
pub async fn health_check(store: web::Data<StoreClient>) -> ApiResult<HttpResponse> {
    let probe = store.probe().await?;
    Ok(HttpResponse::Ok().json(probe))
}
