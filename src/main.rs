use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use fleet_management::config::{DatabaseConfig, EnvironmentConfig};
use fleet_management::database::DatabaseConnection;
use fleet_management::{create_app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging: DEBUG en desarrollo, INFO en el resto
    let level = if config.is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("🚚 B.A.A Logística - Fleet Management API");
    info!("==========================================");

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new(&DatabaseConfig::new(&config.database_url)).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();
    let addr: SocketAddr = config.server_url().parse()?;
    let app = create_app(AppState::new(pool, config.clone()));

    info!("🌐 Servidor iniciando en http://{} ({})", addr, config.environment);
    info!("🔓 CORS permitido para: {}", config.cors_origins.join(", "));
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /health - Health check");
    info!("👤 Endpoints - Driver:");
    info!("   GET    /drivers - Listar conductores");
    info!("   GET    /drivers/:id - Obtener conductor");
    info!("   POST   /drivers - Crear conductor");
    info!("   PUT    /drivers/:id - Reemplazar conductor");
    info!("   DELETE /drivers/:id - Eliminar conductor");
    info!("📎 Endpoints - Adjuntos:");
    info!("   GET    /drivers/:id/attachments - Listar adjuntos");
    info!("   PUT    /drivers/:id/attachments/:kind - Subir foto o CNH (photo | cnh-pdf)");
    info!("   GET    /drivers/:id/attachments/:kind - Descargar adjunto");
    info!("   DELETE /drivers/:id/attachments/:kind - Eliminar adjunto");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
