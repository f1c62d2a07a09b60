use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use crate::controllers::driver_controller::DriverController;
use crate::dto::driver_dto::DriverRequest;
use crate::models::Driver;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::json::AppJson;

pub fn create_driver_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_drivers).post(create_driver))
        .route(
            "/:id",
            get(get_driver).put(update_driver).delete(delete_driver),
        )
}

async fn list_drivers(State(state): State<AppState>) -> Result<Json<Vec<Driver>>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let drivers = controller.list().await?;
    Ok(Json(drivers))
}

async fn get_driver(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Driver>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let driver = controller.get_by_id(id).await?;
    Ok(Json(driver))
}

async fn create_driver(
    State(state): State<AppState>,
    AppJson(request): AppJson<DriverRequest>,
) -> Result<impl IntoResponse, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let driver = controller.create(request).await?;
    let location = format!("/drivers/{}", driver.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(driver)))
}

async fn update_driver(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AppJson(request): AppJson<DriverRequest>,
) -> Result<StatusCode, AppError> {
    let controller = DriverController::new(state.pool.clone());
    controller.update(id, request).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_driver(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let controller = DriverController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
