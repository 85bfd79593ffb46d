use crate::{
    error::ApiResult,
    model::attendance::AttendanceRecord,
    store::{Query, StoreClient, Table, query::Direction},
};
use actix_web::{HttpResponse, web};
use serde_json::Value;
use tracing::info;

/// Mark attendance
#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body = AttendanceRecord,
    responses(
        (status = 200, description = "Recorded attendance", body = AttendanceRecord)
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    store: web::Data<StoreClient>,
    payload: web::Json<AttendanceRecord>,
) -> ApiResult<HttpResponse> {
    let record = payload.into_inner();

    let created = store
        .insert::<_, Value>(Table::Attendance, &record)
        .await?
        .into_single();

    info!(employee_id = %record.employee_id, date = %record.date, status = %record.status, "Attendance marked");
    Ok(HttpResponse::Ok().json(created))
}

/// Attendance for one employee, newest date first
#[utoipa::path(
    get,
    path = "/api/attendance/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Attendance records", body = [AttendanceRecord])
    ),
    tag = "Attendance"
)]
pub async fn get_attendance(
    store: web::Data<StoreClient>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let employee_id = path.into_inner();
    let query = Query::new()
        .select(&["employee_id", "date", "status"])
        .eq("employee_id", &employee_id)
        .order("date", Direction::Desc);

    let records: Vec<AttendanceRecord> = store.select(Table::Attendance, &query).await?;
    Ok(HttpResponse::Ok().json(records))
}
