use crate::model::{
    attendance::AttendanceRecord,
    employee::{Employee, NewEmployee},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRM Gateway API",
        version = "0.1.0",
        description = r#"
## HRM Gateway

A thin gateway in front of a hosted relational store. Every call is forwarded
to the store's REST interface; the gateway keeps no state of its own.

### Resources
- **Employees**: list, create, delete, clear everything
- **Attendance**: mark, list per employee
- **Health**: store connectivity probe

### Errors
Failures are returned as `{"detail": "..."}`. Store rejections keep the store's
status code, an unreachable store is reported as `502`.
"#,
    ),
    paths(
        crate::api::employee::list_employees,
        crate::api::employee::create_employee,
        crate::api::employee::delete_employee,
        crate::api::employee::clear_all,

        crate::api::attendance::mark_attendance,
        crate::api::attendance::get_attendance,

        crate::api::health::health_check
    ),
    components(
        schemas(
            Employee,
            NewEmployee,
            AttendanceRecord
        )
    ),
    tags(
        (name = "Employee", description = "Employee management APIs"),
        (name = "Attendance", description = "Attendance management APIs"),
        (name = "Health", description = "Store connectivity"),
    )
)]
pub struct ApiDoc;
