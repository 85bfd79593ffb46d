use crate::{
    error::ApiResult,
    model::employee::{Employee, NewEmployee},
    store::{Query, StoreClient, Table, query::Direction},
};
use actix_web::{HttpResponse, web};
use serde_json::{Value, json};
use tracing::info;

const EMPLOYEE_COLUMNS: &[&str] = &[
    "employee_id",
    "employee_code",
    "full_name",
    "email",
    "department",
];

/// List Employees, most recently created first
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees", body = [Employee]),
        (status = 502, description = "Store unreachable", body = Object, example = json!({
            "detail": "error sending request"
        }))
    ),
    tag = "Employee"
)]
pub async fn list_employees(store: web::Data<StoreClient>) -> ApiResult<HttpResponse> {
    let query = Query::new()
        .select(EMPLOYEE_COLUMNS)
        .order("created_at", Direction::Desc);

    let employees: Vec<Employee> = store.select(Table::Employees, &query).await?;
    Ok(HttpResponse::Ok().json(employees))
}

/// Create Employee
///
/// An absent or malformed `employee_id` is replaced with a fresh UUID.
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = NewEmployee,
    responses(
        (status = 200, description = "Created employee", body = Employee),
        (status = 409, description = "Rejected by the store", body = Object, example = json!({
            "detail": "duplicate key value violates unique constraint"
        }))
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    store: web::Data<StoreClient>,
    payload: web::Json<NewEmployee>,
) -> ApiResult<HttpResponse> {
    let row = payload.into_inner().into_row();

    let created = store
        .insert::<_, Value>(Table::Employees, &row)
        .await?
        .into_single();

    info!(employee_id = %row.employee_id, "Employee created");
    Ok(HttpResponse::Ok().json(created))
}

/// Delete Employee
///
/// Deleting an unknown identifier still succeeds.
#[utoipa::path(
    delete,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Deleted", body = Object, example = json!({ "deleted": true }))
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    store: web::Data<StoreClient>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let employee_id = path.into_inner();

    store
        .delete(Table::Employees, &Query::new().eq("employee_id", &employee_id))
        .await?;

    info!(%employee_id, "Employee deleted");
    Ok(HttpResponse::Ok().json(json!({ "deleted": true })))
}

/// Clear all attendance, then all employees
///
/// If the attendance delete fails the employees are left untouched.
#[utoipa::path(
    post,
    path = "/api/employees/clear",
    responses(
        (status = 200, description = "Everything deleted", body = Object, example = json!({ "cleared": true }))
    ),
    tag = "Employee"
)]
pub async fn clear_all(store: web::Data<StoreClient>) -> ApiResult<HttpResponse> {
    store
        .delete(Table::Attendance, &Query::new().not_null("id"))
        .await?;
    store
        .delete(Table::Employees, &Query::new().not_null("employee_id"))
        .await?;

    info!("All attendance and employee rows cleared");
    Ok(HttpResponse::Ok().json(json!({ "cleared": true })))
}
