use crate::dto::driver_dto::DriverRequest;
use crate::models::Driver;
use crate::utils::errors::AppError;
use sqlx::SqlitePool;

const DRIVER_COLUMNS: &str = "id, name, cpf, cnh_number, cnh_category, phone, status";

pub struct DriverRepository {
    pool: SqlitePool,
}

impl DriverRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Driver>, AppError> {
        let drivers = sqlx::query_as::<_, Driver>(&format!(
            "SELECT {} FROM drivers ORDER BY id",
            DRIVER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(drivers)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Driver>, AppError> {
        let driver = sqlx::query_as::<_, Driver>(&format!(
            "SELECT {} FROM drivers WHERE id = ?1",
            DRIVER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(driver)
    }

    pub async fn exists(&self, id: i64) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM drivers WHERE id = ?1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }

    /// Insertar un conductor; el id lo asigna SQLite
    pub async fn create(&self, request: &DriverRequest) -> Result<Driver, AppError> {
        let driver = sqlx::query_as::<_, Driver>(&format!(
            r#"
            INSERT INTO drivers (name, cpf, cnh_number, cnh_category, phone, status)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING {}
            "#,
            DRIVER_COLUMNS
        ))
        .bind(&request.name)
        .bind(&request.cpf)
        .bind(&request.cnh_number)
        .bind(&request.cnh_category)
        .bind(&request.phone)
        .bind(request.status.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(driver)
    }

    /// Reemplazo completo de la fila. `None` si no existe.
    pub async fn update(&self, driver: &Driver) -> Result<Option<Driver>, AppError> {
        let updated = sqlx::query_as::<_, Driver>(&format!(
            r#"
            UPDATE drivers
            SET name = ?2, cpf = ?3, cnh_number = ?4, cnh_category = ?5, phone = ?6, status = ?7
            WHERE id = ?1
            RETURNING {}
            "#,
            DRIVER_COLUMNS
        ))
        .bind(driver.id)
        .bind(&driver.name)
        .bind(&driver.cpf)
        .bind(&driver.cnh_number)
        .bind(&driver.cnh_category)
        .bind(&driver.phone)
        .bind(driver.status.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Borrar un conductor. Devuelve si había fila.
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM drivers WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
