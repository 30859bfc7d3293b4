use super::dto::{VehicleDto, VehicleResponse};
use crate::{
    database::error::DbError,
    modules::{
        common::{
            error_codes::PLATE_IN_USE,
            extractors::{DbConnection, ValidatedJson},
            responses::SimpleError,
        },
        vehicle::repository,
    },
    server::controller::AppState,
};
use axum::{
    extract::Path,
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use http::StatusCode;
use sea_orm::{ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder};
use shared::{entity::vehicle, VehicleKind};

pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/cars", variant_router(VehicleKind::Car))
        .nest("/motorcycles", variant_router(VehicleKind::Motorcycle))
        .nest("/utility", variant_router(VehicleKind::Utility))
}

/// All three vehicle kinds expose the same routes, scoped to
/// their kind by the `VehicleKind` extension
fn variant_router(kind: VehicleKind) -> Router<AppState> {
    Router::new()
        .route("/", post(register_vehicle))
        .route("/", get(list_vehicles))
        .route("/:vehicle_id", get(vehicle_by_id))
        .route("/:vehicle_id", put(update_vehicle))
        .route("/:vehicle_id", delete(delete_vehicle))
        .route("/by-plate/:plate", get(vehicle_by_plate))
        .layer(Extension(kind))
}

/// Register a vehicle
///
/// The `/vehicles/motorcycles` and `/vehicles/utility` routers expose
/// the same operations, accepting their respective `details` variant.
#[utoipa::path(
    post,
    tag = "vehicle",
    path = "/vehicles/cars",
    request_body(content = VehicleDto, content_type = "application/json"),
    responses(
        (status = CREATED, content_type = "application/json", body = VehicleResponse),
        (status = BAD_REQUEST, description = "invalid dto or details of another kind", body = SimpleError),
        (status = CONFLICT, description = "PLATE_IN_USE", body = SimpleError),
    ),
)]
pub async fn register_vehicle(
    Extension(kind): Extension<VehicleKind>,
    DbConnection(db): DbConnection,
    ValidatedJson(dto): ValidatedJson<VehicleDto>,
) -> Result<(StatusCode, Json<VehicleResponse>), (StatusCode, SimpleError)> {
    if dto.details.kind() != kind {
        return Err((
            StatusCode::BAD_REQUEST,
            SimpleError::from(format!(
                "vehicle details are for kind {}, expected {}",
                dto.details.kind(),
                kind
            )),
        ));
    }

    if vehicle::Entity::plate_in_use(&dto.plate, &db)
        .await
        .map_err(DbError::from)?
    {
        return Err((StatusCode::CONFLICT, SimpleError::from(PLATE_IN_USE)));
    }

    let created = repository::create_vehicle(&db, &dto).await?;

    Ok((StatusCode::CREATED, Json(VehicleResponse::from(created))))
}

/// List all vehicles of the kind
#[utoipa::path(
    get,
    tag = "vehicle",
    path = "/vehicles/cars",
    responses(
        (status = OK, content_type = "application/json", body = Vec<VehicleResponse>),
    ),
)]
pub async fn list_vehicles(
    Extension(kind): Extension<VehicleKind>,
    DbConnection(db): DbConnection,
) -> Result<Json<Vec<VehicleResponse>>, (StatusCode, SimpleError)> {
    let vehicles = vehicle::Entity::find()
        .filter(vehicle::Column::Kind.eq(kind))
        .order_by_asc(vehicle::Column::Id)
        .all(&db)
        .await
        .map_err(DbError::from)?;

    Ok(Json(vehicles.into_iter().map(VehicleResponse::from).collect()))
}

/// Get a vehicle of the kind by id
#[utoipa::path(
    get,
    tag = "vehicle",
    path = "/vehicles/cars/{vehicle_id}",
    params(
        ("vehicle_id" = i32, Path, description = "id of the vehicle to get"),
    ),
    responses(
        (status = OK, content_type = "application/json", body = VehicleResponse),
        (status = NOT_FOUND, body = SimpleError),
    ),
)]
pub async fn vehicle_by_id(
    Path(vehicle_id): Path<i32>,
    Extension(kind): Extension<VehicleKind>,
    DbConnection(db): DbConnection,
) -> Result<Json<VehicleResponse>, (StatusCode, SimpleError)> {
    let vehicle = vehicle::Entity::find_by_id_and_kind(vehicle_id, kind, &db)
        .await
        .map_err(DbError::from)?
        .ok_or((StatusCode::NOT_FOUND, SimpleError::from("vehicle not found")))?;

    Ok(Json(VehicleResponse::from(vehicle)))
}

/// Get a vehicle of the kind by its license plate
#[utoipa::path(
    get,
    tag = "vehicle",
    path = "/vehicles/cars/by-plate/{plate}",
    params(
        ("plate" = String, Path, description = "license plate to search"),
    ),
    responses(
        (status = OK, content_type = "application/json", body = VehicleResponse),
        (status = NOT_FOUND, body = SimpleError),
    ),
)]
pub async fn vehicle_by_plate(
    Path(plate): Path<String>,
    Extension(kind): Extension<VehicleKind>,
    DbConnection(db): DbConnection,
) -> Result<Json<VehicleResponse>, (StatusCode, SimpleError)> {
    let vehicle = vehicle::Entity::find_by_plate_and_kind(&plate, kind, &db)
        .await
        .map_err(DbError::from)?
        .ok_or((StatusCode::NOT_FOUND, SimpleError::from("vehicle not found")))?;

    Ok(Json(VehicleResponse::from(vehicle)))
}

/// Fully replace a vehicle of the kind
#[utoipa::path(
    put,
    tag = "vehicle",
    path = "/vehicles/cars/{vehicle_id}",
    params(
        ("vehicle_id" = i32, Path, description = "id of the vehicle to update"),
    ),
    request_body(content = VehicleDto, content_type = "application/json"),
    responses(
        (status = OK, content_type = "application/json", body = VehicleResponse),
        (status = BAD_REQUEST, description = "invalid dto or details of another kind", body = SimpleError),
        (status = NOT_FOUND, body = SimpleError),
        (status = CONFLICT, description = "PLATE_IN_USE", body = SimpleError),
    ),
)]
pub async fn update_vehicle(
    Path(vehicle_id): Path<i32>,
    Extension(kind): Extension<VehicleKind>,
    DbConnection(db): DbConnection,
    ValidatedJson(dto): ValidatedJson<VehicleDto>,
) -> Result<Json<VehicleResponse>, (StatusCode, SimpleError)> {
    if dto.details.kind() != kind {
        return Err((
            StatusCode::BAD_REQUEST,
            SimpleError::from(format!(
                "vehicle details are for kind {}, expected {}",
                dto.details.kind(),
                kind
            )),
        ));
    }

    let vehicle = vehicle::Entity::find_by_id_and_kind(vehicle_id, kind, &db)
        .await
        .map_err(DbError::from)?
        .ok_or((StatusCode::NOT_FOUND, SimpleError::from("vehicle not found")))?;

    if vehicle::Entity::plate_in_use_by_another(&dto.plate, vehicle.id, &db)
        .await
        .map_err(DbError::from)?
    {
        return Err((StatusCode::CONFLICT, SimpleError::from(PLATE_IN_USE)));
    }

    let updated = repository::update_vehicle(&db, vehicle, &dto).await?;

    Ok(Json(VehicleResponse::from(updated)))
}

/// Deletes a vehicle of the kind
///
/// fails with `HAS_LINKED_RESERVATIONS` if any reservation references it
#[utoipa::path(
    delete,
    tag = "vehicle",
    path = "/vehicles/cars/{vehicle_id}",
    params(
        ("vehicle_id" = i32, Path, description = "id of the vehicle to delete"),
    ),
    responses(
        (status = NO_CONTENT),
        (status = NOT_FOUND, body = SimpleError),
        (status = CONFLICT, description = "HAS_LINKED_RESERVATIONS", body = SimpleError),
    ),
)]
pub async fn delete_vehicle(
    Path(vehicle_id): Path<i32>,
    Extension(kind): Extension<VehicleKind>,
    DbConnection(db): DbConnection,
) -> Result<StatusCode, (StatusCode, SimpleError)> {
    let vehicle = vehicle::Entity::find_by_id_and_kind(vehicle_id, kind, &db)
        .await
        .map_err(DbError::from)?
        .ok_or((StatusCode::NOT_FOUND, SimpleError::from("vehicle not found")))?;

    vehicle.delete(&db).await.map_err(DbError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
