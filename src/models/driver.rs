//! Modelo de Driver
//!
//! Este módulo contiene el struct Driver y su estado. Mapea a la tabla
//! `drivers` de SQLite con primary key entera autoincremental.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, FromRow, Row};

/// Categorías de CNH aceptadas, en el orden en que se muestran
pub const CNH_CATEGORIES: [&str; 14] = [
    "ACC", "A", "A1", "B", "B1", "C", "C1", "D", "D1", "BE", "CE", "C1E", "DE", "D1E",
];

/// Estado del conductor
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum DriverStatus {
    #[default]
    Active,
    Inactive,
}

impl DriverStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriverStatus::Active => "Active",
            DriverStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown driver status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for DriverStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(DriverStatus::Active),
            "Inactive" => Ok(DriverStatus::Inactive),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Driver principal - una fila de la tabla drivers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: i64,
    pub name: String,
    pub cpf: String,
    pub cnh_number: String,
    pub cnh_category: String,
    pub phone: String,
    pub status: DriverStatus,
}

impl Driver {
    /// Categorías como lista ("B,C" -> ["B", "C"])
    pub fn categories(&self) -> Vec<String> {
        crate::utils::validation::split_categories(&self.cnh_category)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Driver {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let status: String = row.try_get("status")?;
        let status = status.parse().map_err(|e| sqlx::Error::ColumnDecode {
            index: "status".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            cpf: row.try_get("cpf")?,
            cnh_number: row.try_get("cnh_number")?,
            cnh_category: row.try_get("cnh_category")?,
            phone: row.try_get("phone")?,
            status,
        })
    }
}
