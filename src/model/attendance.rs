use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A row of the `attendance` table. The employee reference is not checked locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "employee_id": "0b7e3c1e-8f0f-4d59-9d43-2f6f0f4c2a11",
        "date": "2026-02-11",
        "status": "Present"
    })
)]
pub struct AttendanceRecord {
    #[schema(example = "0b7e3c1e-8f0f-4d59-9d43-2f6f0f4c2a11")]
    pub employee_id: String,

    #[schema(example = "2026-02-11", format = "date")]
    pub date: String,

    #[schema(example = "Present")]
    pub status: String,
}
