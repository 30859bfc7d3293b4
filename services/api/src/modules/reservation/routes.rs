use super::dto::{overlap_recheck_needed, PeriodFilterDto, ReservationDto, SetStatusDto};
use crate::{
    database::error::DbError,
    modules::{
        common::{
            error_codes::RESERVATION_PERIOD_CONFLICT,
            extractors::{DbConnection, ValidatedJson, ValidatedQuery},
            responses::SimpleError,
        },
        reservation::repository,
    },
    server::controller::AppState,
};
use axum::{
    extract::Path,
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use http::StatusCode;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, EntityTrait,
    IsolationLevel, ModelTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use shared::{
    entity,
    entity::{company_customer, individual_customer, reservation, vehicle},
    entity::reservation::CustomerRef,
    ReservationStatus,
};

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_reservation))
        .route("/", get(list_reservations))
        .route("/:reservation_id", get(reservation_by_id))
        .route("/:reservation_id", put(update_reservation))
        .route("/:reservation_id", delete(delete_reservation))
        .route("/:reservation_id/status", patch(set_reservation_status))
        .route("/by-vehicle/:vehicle_id", get(reservations_by_vehicle))
        .route("/by-individual/:customer_id", get(reservations_by_individual))
        .route("/by-company/:customer_id", get(reservations_by_company))
        .route("/by-status/:status", get(reservations_by_status))
        .route("/by-period", get(reservations_by_period))
}

async fn find_reservation(
    reservation_id: i32,
    db: &DatabaseConnection,
) -> Result<reservation::Model, (StatusCode, SimpleError)> {
    reservation::Entity::find_by_id(reservation_id)
        .one(db)
        .await
        .map_err(DbError::from)?
        .ok_or((
            StatusCode::NOT_FOUND,
            SimpleError::from("reservation not found"),
        ))
}

/// generic over the connection so the write flows can run the check
/// inside the same transaction as the insert
async fn assert_vehicle_exists<C: ConnectionTrait>(
    vehicle_id: i32,
    conn: &C,
) -> Result<(), (StatusCode, SimpleError)> {
    vehicle::Entity::find_by_id(vehicle_id)
        .one(conn)
        .await
        .map_err(DbError::from)?
        .ok_or((StatusCode::NOT_FOUND, SimpleError::from("vehicle not found")))?;

    Ok(())
}

async fn assert_customer_exists<C: ConnectionTrait>(
    customer: CustomerRef,
    conn: &C,
) -> Result<(), (StatusCode, SimpleError)> {
    let not_found = (
        StatusCode::NOT_FOUND,
        SimpleError::from("customer not found"),
    );

    match customer {
        CustomerRef::Individual(id) => {
            individual_customer::Entity::find_by_id(id)
                .one(conn)
                .await
                .map_err(DbError::from)?
                .ok_or(not_found)?;
        }
        CustomerRef::Company(id) => {
            company_customer::Entity::find_by_id(id)
                .one(conn)
                .await
                .map_err(DbError::from)?
                .ok_or(not_found)?;
        }
    }

    Ok(())
}

fn assert_period_is_ordered(dto: &ReservationDto) -> Result<(), (StatusCode, SimpleError)> {
    if dto.end_date < dto.start_date {
        return Err((
            StatusCode::BAD_REQUEST,
            SimpleError::from("end date cannot be before the start date"),
        ));
    }

    Ok(())
}

/// Create a reservation
///
/// the existence checks, the conflict check and the insert run in a
/// single serializable transaction so two overlapping reservations on
/// the same vehicle cannot both pass the check concurrently, and a
/// vehicle or customer deleted concurrently cannot slip between the
/// check and the insert
#[utoipa::path(
    post,
    tag = "reservation",
    path = "/reservations",
    request_body(content = ReservationDto, content_type = "application/json"),
    responses(
        (status = CREATED, content_type = "application/json", body = entity::reservation::Model),
        (status = BAD_REQUEST, description = "invalid dto or customer reference", body = SimpleError),
        (status = NOT_FOUND, description = "vehicle or customer not found", body = SimpleError),
        (status = CONFLICT, description = "RESERVATION_PERIOD_CONFLICT", body = SimpleError),
    ),
)]
pub async fn create_reservation(
    DbConnection(db): DbConnection,
    ValidatedJson(dto): ValidatedJson<ReservationDto>,
) -> Result<(StatusCode, Json<reservation::Model>), (StatusCode, SimpleError)> {
    let customer = dto
        .customer_ref()
        .map_err(|msg| (StatusCode::BAD_REQUEST, SimpleError::from(msg)))?;

    assert_period_is_ordered(&dto)?;

    let txn = db
        .begin_with_config(Some(IsolationLevel::Serializable), None)
        .await
        .map_err(DbError::from)?;

    assert_vehicle_exists(dto.vehicle_id, &txn).await?;
    assert_customer_exists(customer, &txn).await?;

    if repository::has_conflict(&txn, dto.vehicle_id, dto.start_date, dto.end_date, None)
        .await
        .map_err(DbError::from)?
    {
        return Err((
            StatusCode::CONFLICT,
            SimpleError::from(RESERVATION_PERIOD_CONFLICT),
        ));
    }

    let created = repository::create_reservation(&txn, &dto, customer)
        .await
        .map_err(DbError::from)?;

    txn.commit().await.map_err(DbError::from)?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// List all reservations
#[utoipa::path(
    get,
    tag = "reservation",
    path = "/reservations",
    responses(
        (status = OK, content_type = "application/json", body = Vec<entity::reservation::Model>),
    ),
)]
pub async fn list_reservations(
    DbConnection(db): DbConnection,
) -> Result<Json<Vec<reservation::Model>>, (StatusCode, SimpleError)> {
    let reservations = reservation::Entity::find()
        .order_by_asc(reservation::Column::Id)
        .all(&db)
        .await
        .map_err(DbError::from)?;

    Ok(Json(reservations))
}

/// Get a reservation by id
#[utoipa::path(
    get,
    tag = "reservation",
    path = "/reservations/{reservation_id}",
    params(
        ("reservation_id" = i32, Path, description = "id of the reservation to get"),
    ),
    responses(
        (status = OK, content_type = "application/json", body = entity::reservation::Model),
        (status = NOT_FOUND, body = SimpleError),
    ),
)]
pub async fn reservation_by_id(
    Path(reservation_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<Json<reservation::Model>, (StatusCode, SimpleError)> {
    let reservation = find_reservation(reservation_id, &db).await?;

    Ok(Json(reservation))
}

/// Fully replace a reservation
///
/// the overlap recheck is skipped only when the vehicle and the
/// reserved period are unchanged, and never considers the reservation
/// being replaced as a conflict of itself
#[utoipa::path(
    put,
    tag = "reservation",
    path = "/reservations/{reservation_id}",
    params(
        ("reservation_id" = i32, Path, description = "id of the reservation to update"),
    ),
    request_body(content = ReservationDto, content_type = "application/json"),
    responses(
        (status = OK, content_type = "application/json", body = entity::reservation::Model),
        (status = BAD_REQUEST, description = "invalid dto or customer reference", body = SimpleError),
        (status = NOT_FOUND, description = "reservation, vehicle or customer not found", body = SimpleError),
        (status = CONFLICT, description = "RESERVATION_PERIOD_CONFLICT", body = SimpleError),
    ),
)]
pub async fn update_reservation(
    Path(reservation_id): Path<i32>,
    DbConnection(db): DbConnection,
    ValidatedJson(dto): ValidatedJson<ReservationDto>,
) -> Result<Json<reservation::Model>, (StatusCode, SimpleError)> {
    let current = find_reservation(reservation_id, &db).await?;

    let customer = dto
        .customer_ref()
        .map_err(|msg| (StatusCode::BAD_REQUEST, SimpleError::from(msg)))?;

    assert_period_is_ordered(&dto)?;

    let txn = db
        .begin_with_config(Some(IsolationLevel::Serializable), None)
        .await
        .map_err(DbError::from)?;

    assert_vehicle_exists(dto.vehicle_id, &txn).await?;
    assert_customer_exists(customer, &txn).await?;

    if overlap_recheck_needed(&current, &dto)
        && repository::has_conflict(
            &txn,
            dto.vehicle_id,
            dto.start_date,
            dto.end_date,
            Some(current.id),
        )
        .await
        .map_err(DbError::from)?
    {
        return Err((
            StatusCode::CONFLICT,
            SimpleError::from(RESERVATION_PERIOD_CONFLICT),
        ));
    }

    let updated = repository::update_reservation(&txn, current, &dto, customer)
        .await
        .map_err(DbError::from)?;

    txn.commit().await.map_err(DbError::from)?;

    Ok(Json(updated))
}

/// Set the status of a reservation
#[utoipa::path(
    patch,
    tag = "reservation",
    path = "/reservations/{reservation_id}/status",
    params(
        ("reservation_id" = i32, Path, description = "id of the reservation to update"),
        SetStatusDto,
    ),
    responses(
        (status = OK, content_type = "application/json", body = entity::reservation::Model),
        (status = NOT_FOUND, body = SimpleError),
    ),
)]
pub async fn set_reservation_status(
    Path(reservation_id): Path<i32>,
    ValidatedQuery(query): ValidatedQuery<SetStatusDto>,
    DbConnection(db): DbConnection,
) -> Result<Json<reservation::Model>, (StatusCode, SimpleError)> {
    let reservation = find_reservation(reservation_id, &db).await?;

    let mut r: reservation::ActiveModel = reservation.into();
    r.status = Set(query.status);

    let updated = r.update(&db).await.map_err(DbError::from)?;

    Ok(Json(updated))
}

/// Deletes a reservation
#[utoipa::path(
    delete,
    tag = "reservation",
    path = "/reservations/{reservation_id}",
    params(
        ("reservation_id" = i32, Path, description = "id of the reservation to delete"),
    ),
    responses(
        (status = NO_CONTENT),
        (status = NOT_FOUND, body = SimpleError),
    ),
)]
pub async fn delete_reservation(
    Path(reservation_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<StatusCode, (StatusCode, SimpleError)> {
    let reservation = find_reservation(reservation_id, &db).await?;

    reservation.delete(&db).await.map_err(DbError::from)?;

    Ok(StatusCode::NO_CONTENT)
}

/// List reservations of a vehicle
#[utoipa::path(
    get,
    tag = "reservation",
    path = "/reservations/by-vehicle/{vehicle_id}",
    params(
        ("vehicle_id" = i32, Path, description = "id of the vehicle"),
    ),
    responses(
        (status = OK, content_type = "application/json", body = Vec<entity::reservation::Model>),
        (status = NOT_FOUND, description = "vehicle not found", body = SimpleError),
    ),
)]
pub async fn reservations_by_vehicle(
    Path(vehicle_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<Json<Vec<reservation::Model>>, (StatusCode, SimpleError)> {
    assert_vehicle_exists(vehicle_id, &db).await?;

    let reservations = reservation::Entity::find()
        .filter(reservation::Column::VehicleId.eq(vehicle_id))
        .order_by_asc(reservation::Column::StartDate)
        .all(&db)
        .await
        .map_err(DbError::from)?;

    Ok(Json(reservations))
}

/// List reservations of a individual customer
#[utoipa::path(
    get,
    tag = "reservation",
    path = "/reservations/by-individual/{customer_id}",
    params(
        ("customer_id" = i32, Path, description = "id of the individual customer"),
    ),
    responses(
        (status = OK, content_type = "application/json", body = Vec<entity::reservation::Model>),
        (status = NOT_FOUND, description = "customer not found", body = SimpleError),
    ),
)]
pub async fn reservations_by_individual(
    Path(customer_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<Json<Vec<reservation::Model>>, (StatusCode, SimpleError)> {
    assert_customer_exists(CustomerRef::Individual(customer_id), &db).await?;

    let reservations = reservation::Entity::find()
        .filter(reservation::Column::IndividualId.eq(customer_id))
        .order_by_asc(reservation::Column::StartDate)
        .all(&db)
        .await
        .map_err(DbError::from)?;

    Ok(Json(reservations))
}

/// List reservations of a company customer
#[utoipa::path(
    get,
    tag = "reservation",
    path = "/reservations/by-company/{customer_id}",
    params(
        ("customer_id" = i32, Path, description = "id of the company customer"),
    ),
    responses(
        (status = OK, content_type = "application/json", body = Vec<entity::reservation::Model>),
        (status = NOT_FOUND, description = "customer not found", body = SimpleError),
    ),
)]
pub async fn reservations_by_company(
    Path(customer_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<Json<Vec<reservation::Model>>, (StatusCode, SimpleError)> {
    assert_customer_exists(CustomerRef::Company(customer_id), &db).await?;

    let reservations = reservation::Entity::find()
        .filter(reservation::Column::CompanyId.eq(customer_id))
        .order_by_asc(reservation::Column::StartDate)
        .all(&db)
        .await
        .map_err(DbError::from)?;

    Ok(Json(reservations))
}

/// List reservations by status
#[utoipa::path(
    get,
    tag = "reservation",
    path = "/reservations/by-status/{status}",
    params(
        ("status" = ReservationStatus, Path, description = "status to filter by"),
    ),
    responses(
        (status = OK, content_type = "application/json", body = Vec<entity::reservation::Model>),
    ),
)]
pub async fn reservations_by_status(
    Path(status): Path<ReservationStatus>,
    DbConnection(db): DbConnection,
) -> Result<Json<Vec<reservation::Model>>, (StatusCode, SimpleError)> {
    let reservations = reservation::Entity::find()
        .filter(reservation::Column::Status.eq(status))
        .order_by_asc(reservation::Column::StartDate)
        .all(&db)
        .await
        .map_err(DbError::from)?;

    Ok(Json(reservations))
}

/// List reservations starting or ending within a period
#[utoipa::path(
    get,
    tag = "reservation",
    path = "/reservations/by-period",
    params(PeriodFilterDto),
    responses(
        (status = OK, content_type = "application/json", body = Vec<entity::reservation::Model>),
        (status = BAD_REQUEST, description = "invalid period", body = SimpleError),
    ),
)]
pub async fn reservations_by_period(
    ValidatedQuery(filter): ValidatedQuery<PeriodFilterDto>,
    DbConnection(db): DbConnection,
) -> Result<Json<Vec<reservation::Model>>, (StatusCode, SimpleError)> {
    if filter.end < filter.start {
        return Err((
            StatusCode::BAD_REQUEST,
            SimpleError::from("end date cannot be before the start date"),
        ));
    }

    let reservations = reservation::Entity::find()
        .filter(
            Condition::any()
                .add(reservation::Column::StartDate.between(filter.start, filter.end))
                .add(reservation::Column::EndDate.between(filter.start, filter.end)),
        )
        .order_by_asc(reservation::Column::StartDate)
        .all(&db)
        .await
        .map_err(DbError::from)?;

    Ok(Json(reservations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DatabaseTransaction;

    // the create and update flows run their vehicle and customer checks
    // against the serializable transaction the insert runs in, so the
    // guards must accept a transaction connection, if a signature change
    // pins them back to a pooled connection this stops compiling
    #[allow(dead_code)]
    fn existence_guards_run_on_the_write_transaction(txn: &DatabaseTransaction) {
        let _ = assert_vehicle_exists(1, txn);
        let _ = assert_customer_exists(CustomerRef::Individual(1), txn);
    }
}
