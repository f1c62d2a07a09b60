//! Conexión a SQLite
//!
//! Abre el pool y crea el schema si todavía no existe.

use sqlx::SqlitePool;
use tracing::info;

use crate::config::DatabaseConfig;

const SCHEMA: [&str; 2] = [
    r#"
    CREATE TABLE IF NOT EXISTS drivers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL DEFAULT '',
        cpf TEXT NOT NULL DEFAULT '',
        cnh_number TEXT NOT NULL DEFAULT '',
        cnh_category TEXT NOT NULL DEFAULT '',
        phone TEXT NOT NULL DEFAULT '',
        status TEXT NOT NULL DEFAULT 'Active'
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS driver_attachments (
        driver_id INTEGER NOT NULL REFERENCES drivers (id) ON DELETE CASCADE,
        kind TEXT NOT NULL,
        file_name TEXT NOT NULL,
        content_type TEXT NOT NULL,
        size_bytes INTEGER NOT NULL,
        data BLOB NOT NULL,
        uploaded_at TEXT NOT NULL,
        PRIMARY KEY (driver_id, kind)
    )
    "#,
];

/// Pool de conexiones con el schema ya creado
pub struct DatabaseConnection {
    pool: SqlitePool,
}

impl DatabaseConnection {
    pub async fn new(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = create_pool(config).await?;
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Crear un pool de conexiones a la base de datos
pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    info!("🗄️ Conectando a {}", config.url);
    config.create_pool().await
}

/// Crear las tablas si no existen
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
