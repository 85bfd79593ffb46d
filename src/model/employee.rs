use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;
use uuid::Uuid;

/// A row of the `employees` table, as projected by the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "employee_id": "0b7e3c1e-8f0f-4d59-9d43-2f6f0f4c2a11",
        "employee_code": "EMP-001",
        "full_name": "Alice Doe",
        "email": "alice@company.com",
        "department": "Engineering"
    })
)]
pub struct Employee {
    #[schema(example = "0b7e3c1e-8f0f-4d59-9d43-2f6f0f4c2a11", format = "uuid")]
    pub employee_id: String,

    #[schema(example = "EMP-001", nullable = true)]
    pub employee_code: Option<String>,

    #[schema(example = "Alice Doe")]
    pub full_name: String,

    #[schema(example = "alice@company.com", format = "email")]
    pub email: String,

    #[schema(example = "Engineering")]
    pub department: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct NewEmployee {
    /// Kept when it is a valid UUID, otherwise replaced with a fresh one
    #[schema(example = "0b7e3c1e-8f0f-4d59-9d43-2f6f0f4c2a11", nullable = true)]
    #[serde(default)]
    pub employee_id: Option<String>,
    #[schema(example = "EMP-001", nullable = true)]
    #[serde(default)]
    pub employee_code: Option<String>,
    #[schema(example = "Alice Doe")]
    pub full_name: String,
    #[schema(example = "alice@company.com", format = "email")]
    pub email: String,
    #[schema(example = "Engineering")]
    pub department: String,
}

impl NewEmployee {
    /// The row to insert, with its identifier normalized.
    pub fn into_row(self) -> Employee {
        Employee {
            employee_id: normalize_employee_id(self.employee_id.as_deref()),
            employee_code: self.employee_code,
            full_name: self.full_name,
            email: self.email,
            department: self.department,
        }
    }
}

/// Returns `id` unchanged if it parses as a UUID (hyphenated, simple, braced
/// or urn form), else a new v4 UUID.
pub fn normalize_employee_id(id: Option<&str>) -> String {
    match id.filter(|s| !s.is_empty()) {
        Some(s) if Uuid::parse_str(s).is_ok() => s.to_string(),
        Some(s) => {
            let fresh = Uuid::new_v4().to_string();
            warn!(supplied = %s, generated = %fresh, "Invalid employee_id replaced");
            fresh
        }
        None => Uuid::new_v4().to_string(),
    }
}
