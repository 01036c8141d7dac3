use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Record;
use crate::enums::{EmployeeStatus, EntityType};
use crate::ids::PREFIX_EMPLOYEE;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub role: String,
    pub department: String,
    pub country: String,
    /// Annual gross salary in `currency`.
    pub salary: f64,
    pub currency: String,
    pub status: EmployeeStatus,
}

impl Record for Employee {
    const ENTITY: EntityType = EntityType::Employee;
    const PREFIX: &'static str = PREFIX_EMPLOYEE;

    fn id(&self) -> &str {
        &self.id
    }
}
