use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Driver, DriverStatus};
use crate::utils::validation::{
    validate_cnh_category, validate_cnh_number, validate_cpf, validate_name, validate_phone,
};

// Payload de POST /drivers y PUT /drivers/{id}
// En POST el id se ignora; en PUT tiene que coincidir con el del path
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DriverRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default)]
    #[validate(custom = "validate_name")]
    pub name: String,

    #[serde(default)]
    #[validate(custom = "validate_cpf")]
    pub cpf: String,

    #[serde(default)]
    #[validate(custom = "validate_cnh_number")]
    pub cnh_number: String,

    #[serde(default)]
    #[validate(custom = "validate_cnh_category")]
    pub cnh_category: String,

    #[serde(default)]
    #[validate(custom = "validate_phone")]
    pub phone: String,

    #[serde(default)]
    pub status: DriverStatus,
}

impl DriverRequest {
    /// Convertir en fila con el id indicado
    pub fn into_driver(self, id: i64) -> Driver {
        Driver {
            id,
            name: self.name,
            cpf: self.cpf,
            cnh_number: self.cnh_number,
            cnh_category: self.cnh_category,
            phone: self.phone,
            status: self.status,
        }
    }
}

impl From<Driver> for DriverRequest {
    fn from(driver: Driver) -> Self {
        Self {
            id: Some(driver.id),
            name: driver.name,
            cpf: driver.cpf,
            cnh_number: driver.cnh_number,
            cnh_category: driver.cnh_category,
            phone: driver.phone,
            status: driver.status,
        }
    }
}
