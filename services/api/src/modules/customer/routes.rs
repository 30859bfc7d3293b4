use super::dto::{
    CompanyCustomerDto, CompanyCustomerResponse, IndividualCustomerDto,
    IndividualCustomerResponse,
};
use crate::{
    database::error::DbError,
    modules::{
        common::{
            error_codes::{CNPJ_IN_USE, CPF_IN_USE},
            extractors::{DbConnection, ValidatedJson},
            responses::SimpleError,
        },
        customer::repository,
    },
    server::controller::AppState,
};
use axum::{
    extract::Path,
    routing::{delete, get, post, put},
    Json, Router,
};
use http::StatusCode;
use sea_orm::{EntityTrait, ModelTrait, QueryOrder};
use shared::entity::{company_customer, individual_customer, traits::TaxIdScoped};

pub fn create_individual_router() -> Router<AppState> {
    Router::new()
        .route("/", post(register_individual))
        .route("/", get(list_individuals))
        .route("/:customer_id", get(individual_by_id))
        .route("/:customer_id", put(update_individual))
        .route("/:customer_id", delete(delete_individual))
        .route("/by-cpf/:cpf", get(individual_by_cpf))
}

pub fn create_company_router() -> Router<AppState> {
    Router::new()
        .route("/", post(register_company))
        .route("/", get(list_companies))
        .route("/:customer_id", get(company_by_id))
        .route("/:customer_id", put(update_company))
        .route("/:customer_id", delete(delete_company))
        .route("/by-cnpj/:cnpj", get(company_by_cnpj))
}

/// Register a individual customer
#[utoipa::path(
    post,
    tag = "customer",
    path = "/customers/individuals",
    request_body(content = IndividualCustomerDto, content_type = "application/json"),
    responses(
        (status = CREATED, content_type = "application/json", body = IndividualCustomerResponse),
        (status = BAD_REQUEST, description = "invalid dto", body = SimpleError),
        (status = CONFLICT, description = "CPF_IN_USE", body = SimpleError),
    ),
)]
pub async fn register_individual(
    DbConnection(db): DbConnection,
    ValidatedJson(dto): ValidatedJson<IndividualCustomerDto>,
) -> Result<(StatusCode, Json<IndividualCustomerResponse>), (StatusCode, SimpleError)> {
    if individual_customer::Entity::tax_id_in_use(&dto.cpf, &db)
        .await
        .map_err(DbError::from)?
    {
        return Err((StatusCode::CONFLICT, SimpleError::from(CPF_IN_USE)));
    }

    let created = repository::create_individual_customer(&db, &dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(IndividualCustomerResponse::from(created)),
    ))
}

/// List all individual customers
#[utoipa::path(
    get,
    tag = "customer",
    path = "/customers/individuals",
    responses(
        (status = OK, content_type = "application/json", body = Vec<IndividualCustomerResponse>),
    ),
)]
pub async fn list_individuals(
    DbConnection(db): DbConnection,
) -> Result<Json<Vec<IndividualCustomerResponse>>, (StatusCode, SimpleError)> {
    let customers = individual_customer::Entity::find()
        .order_by_asc(individual_customer::Column::Id)
        .all(&db)
        .await
        .map_err(DbError::from)?;

    Ok(Json(
        customers
            .into_iter()
            .map(IndividualCustomerResponse::from)
            .collect(),
    ))
}

/// Get a individual customer by id
#[utoipa::path(
    get,
    tag = "customer",
    path = "/customers/individuals/{customer_id}",
    params(
        ("customer_id" = i32, Path, description = "id of the customer to get"),
    ),
    responses(
        (status = OK, content_type = "application/json", body = IndividualCustomerResponse),
        (status = NOT_FOUND, body = SimpleError),
    ),
)]
pub async fn individual_by_id(
    Path(customer_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<Json<IndividualCustomerResponse>, (StatusCode, SimpleError)> {
    let customer = individual_customer::Entity::find_by_id(customer_id)
        .one(&db)
        .await
        .map_err(DbError::from)?
        .ok_or((
            StatusCode::NOT_FOUND,
            SimpleError::from("customer not found"),
        ))?;

    Ok(Json(IndividualCustomerResponse::from(customer)))
}

/// Get a individual customer by CPF
#[utoipa::path(
    get,
    tag = "customer",
    path = "/customers/individuals/by-cpf/{cpf}",
    params(
        ("cpf" = String, Path, description = "CPF to search"),
    ),
    responses(
        (status = OK, content_type = "application/json", body = IndividualCustomerResponse),
        (status = NOT_FOUND, body = SimpleError),
    ),
)]
pub async fn individual_by_cpf(
    Path(cpf): Path<String>,
    DbConnection(db): DbConnection,
) -> Result<Json<IndividualCustomerResponse>, (StatusCode, SimpleError)> {
    let customer = individual_customer::Entity::find_by_tax_id(&cpf, &db)
        .await
        .map_err(DbError::from)?
        .ok_or((
            StatusCode::NOT_FOUND,
            SimpleError::from("customer not found"),
        ))?;

    Ok(Json(IndividualCustomerResponse::from(customer)))
}

/// Fully replace a individual customer
#[utoipa::path(
    put,
    tag = "customer",
    path = "/customers/individuals/{customer_id}",
    params(
        ("customer_id" = i32, Path, description = "id of the customer to update"),
    ),
    request_body(content = IndividualCustomerDto, content_type = "application/json"),
    responses(
        (status = OK, content_type = "application/json", body = IndividualCustomerResponse),
        (status = BAD_REQUEST, description = "invalid dto", body = SimpleError),
        (status = NOT_FOUND, body = SimpleError),
        (status = CONFLICT, description = "CPF_IN_USE", body = SimpleError),
    ),
)]
pub async fn update_individual(
    Path(customer_id): Path<i32>,
    DbConnection(db): DbConnection,
    ValidatedJson(dto): ValidatedJson<IndividualCustomerDto>,
) -> Result<Json<IndividualCustomerResponse>, (StatusCode, SimpleError)> {
    let customer = individual_customer::Entity::find_by_id(customer_id)
        .one(&db)
        .await
        .map_err(DbError::from)?
        .ok_or((
            StatusCode::NOT_FOUND,
            SimpleError::from("customer not found"),
        ))?;

    if individual_customer::Entity::tax_id_in_use_by_another(&dto.cpf, customer.id, &db)
        .await
        .map_err(DbError::from)?
    {
        return Err((StatusCode::CONFLICT, SimpleError::from(CPF_IN_USE)));
    }

    let updated = repository::update_individual_customer(&db, customer, &dto).await?;

    Ok(Json(IndividualCustomerResponse::from(updated)))
}

/// Deletes a individual customer
///
/// fails with `HAS_LINKED_RESERVATIONS` if any reservation references it
#[utoipa::path(
    delete,
    tag = "customer",
    path = "/customers/individuals/{customer_id}",
    params(
        ("customer_id" = i32, Path, description = "id of the customer to delete"),
    ),
    responses(
        (status = NO_CONTENT),
        (status = NOT_FOUND, body = SimpleError),
        (status = CONFLICT, description = "HAS_LINKED_RESERVATIONS", body = SimpleError),
    ),
)]
pub async fn delete_individual(
    Path(customer_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<StatusCode, (StatusCode, SimpleError)> {
    let customer = individual_customer::Entity::find_by_id(customer_id)
        .one(&db)
        .await
        .map_err(DbError::from)?
        .ok_or((
            StatusCode::NOT_FOUND,
            SimpleError::from("customer not found"),
        ))?;

    customer.delete(&db).await.map_err(DbError::from)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Register a company customer
#[utoipa::path(
    post,
    tag = "customer",
    path = "/customers/companies",
    request_body(content = CompanyCustomerDto, content_type = "application/json"),
    responses(
        (status = CREATED, content_type = "application/json", body = CompanyCustomerResponse),
        (status = BAD_REQUEST, description = "invalid dto", body = SimpleError),
        (status = CONFLICT, description = "CNPJ_IN_USE", body = SimpleError),
    ),
)]
pub async fn register_company(
    DbConnection(db): DbConnection,
    ValidatedJson(dto): ValidatedJson<CompanyCustomerDto>,
) -> Result<(StatusCode, Json<CompanyCustomerResponse>), (StatusCode, SimpleError)> {
    if company_customer::Entity::tax_id_in_use(&dto.cnpj, &db)
        .await
        .map_err(DbError::from)?
    {
        return Err((StatusCode::CONFLICT, SimpleError::from(CNPJ_IN_USE)));
    }

    let created = repository::create_company_customer(&db, &dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(CompanyCustomerResponse::from(created)),
    ))
}

/// List all company customers
#[utoipa::path(
    get,
    tag = "customer",
    path = "/customers/companies",
    responses(
        (status = OK, content_type = "application/json", body = Vec<CompanyCustomerResponse>),
    ),
)]
pub async fn list_companies(
    DbConnection(db): DbConnection,
) -> Result<Json<Vec<CompanyCustomerResponse>>, (StatusCode, SimpleError)> {
    let customers = company_customer::Entity::find()
        .order_by_asc(company_customer::Column::Id)
        .all(&db)
        .await
        .map_err(DbError::from)?;

    Ok(Json(
        customers
            .into_iter()
            .map(CompanyCustomerResponse::from)
            .collect(),
    ))
}

/// Get a company customer by id
#[utoipa::path(
    get,
    tag = "customer",
    path = "/customers/companies/{customer_id}",
    params(
        ("customer_id" = i32, Path, description = "id of the customer to get"),
    ),
    responses(
        (status = OK, content_type = "application/json", body = CompanyCustomerResponse),
        (status = NOT_FOUND, body = SimpleError),
    ),
)]
pub async fn company_by_id(
    Path(customer_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<Json<CompanyCustomerResponse>, (StatusCode, SimpleError)> {
    let customer = company_customer::Entity::find_by_id(customer_id)
        .one(&db)
        .await
        .map_err(DbError::from)?
        .ok_or((
            StatusCode::NOT_FOUND,
            SimpleError::from("customer not found"),
        ))?;

    Ok(Json(CompanyCustomerResponse::from(customer)))
}

/// Get a company customer by CNPJ
#[utoipa::path(
    get,
    tag = "customer",
    path = "/customers/companies/by-cnpj/{cnpj}",
    params(
        ("cnpj" = String, Path, description = "CNPJ to search"),
    ),
    responses(
        (status = OK, content_type = "application/json", body = CompanyCustomerResponse),
        (status = NOT_FOUND, body = SimpleError),
    ),
)]
pub async fn company_by_cnpj(
    Path(cnpj): Path<String>,
    DbConnection(db): DbConnection,
) -> Result<Json<CompanyCustomerResponse>, (StatusCode, SimpleError)> {
    let customer = company_customer::Entity::find_by_tax_id(&cnpj, &db)
        .await
        .map_err(DbError::from)?
        .ok_or((
            StatusCode::NOT_FOUND,
            SimpleError::from("customer not found"),
        ))?;

    Ok(Json(CompanyCustomerResponse::from(customer)))
}

/// Fully replace a company customer
#[utoipa::path(
    put,
    tag = "customer",
    path = "/customers/companies/{customer_id}",
    params(
        ("customer_id" = i32, Path, description = "id of the customer to update"),
    ),
    request_body(content = CompanyCustomerDto, content_type = "application/json"),
    responses(
        (status = OK, content_type = "application/json", body = CompanyCustomerResponse),
        (status = BAD_REQUEST, description = "invalid dto", body = SimpleError),
        (status = NOT_FOUND, body = SimpleError),
        (status = CONFLICT, description = "CNPJ_IN_USE", body = SimpleError),
    ),
)]
pub async fn update_company(
    Path(customer_id): Path<i32>,
    DbConnection(db): DbConnection,
    ValidatedJson(dto): ValidatedJson<CompanyCustomerDto>,
) -> Result<Json<CompanyCustomerResponse>, (StatusCode, SimpleError)> {
    let customer = company_customer::Entity::find_by_id(customer_id)
        .one(&db)
        .await
        .map_err(DbError::from)?
        .ok_or((
            StatusCode::NOT_FOUND,
            SimpleError::from("customer not found"),
        ))?;

    if company_customer::Entity::tax_id_in_use_by_another(&dto.cnpj, customer.id, &db)
        .await
        .map_err(DbError::from)?
    {
        return Err((StatusCode::CONFLICT, SimpleError::from(CNPJ_IN_USE)));
    }

    let updated = repository::update_company_customer(&db, customer, &dto).await?;

    Ok(Json(CompanyCustomerResponse::from(updated)))
}

/// Deletes a company customer
///
/// fails with `HAS_LINKED_RESERVATIONS` if any reservation references it
#[utoipa::path(
    delete,
    tag = "customer",
    path = "/customers/companies/{customer_id}",
    params(
        ("customer_id" = i32, Path, description = "id of the customer to delete"),
    ),
    responses(
        (status = NO_CONTENT),
        (status = NOT_FOUND, body = SimpleError),
        (status = CONFLICT, description = "HAS_LINKED_RESERVATIONS", body = SimpleError),
    ),
)]
pub async fn delete_company(
    Path(customer_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<StatusCode, (StatusCode, SimpleError)> {
    let customer = company_customer::Entity::find_by_id(customer_id)
        .one(&db)
        .await
        .map_err(DbError::from)?
        .ok_or((
            StatusCode::NOT_FOUND,
            SimpleError::from("customer not found"),
        ))?;

    customer.delete(&db).await.map_err(DbError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
