use crate::modules::{common, customer, reservation, vehicle};
use crate::server::controller;
use axum::Router;
use shared::entity;
use utoipa::openapi::{InfoBuilder, OpenApiBuilder};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    components(schemas(
        entity::reservation::Model,

        common::responses::SimpleError,

        vehicle::dto::VehicleDto,
        vehicle::dto::VehicleDetails,
        vehicle::dto::CarDetailsDto,
        vehicle::dto::MotorcycleDetailsDto,
        vehicle::dto::UtilityDetailsDto,
        vehicle::dto::VehicleResponse,

        customer::dto::AddressDto,
        customer::dto::IndividualCustomerDto,
        customer::dto::IndividualCustomerResponse,
        customer::dto::CompanyCustomerDto,
        customer::dto::CompanyCustomerResponse,

        reservation::dto::ReservationDto,

        shared::VehicleKind,
        shared::VehicleStatus,
        shared::ReservationStatus,
    )),
    paths(
        controller::healthcheck,

        vehicle::routes::register_vehicle,
        vehicle::routes::list_vehicles,
        vehicle::routes::vehicle_by_id,
        vehicle::routes::vehicle_by_plate,
        vehicle::routes::update_vehicle,
        vehicle::routes::delete_vehicle,

        customer::routes::register_individual,
        customer::routes::list_individuals,
        customer::routes::individual_by_id,
        customer::routes::individual_by_cpf,
        customer::routes::update_individual,
        customer::routes::delete_individual,

        customer::routes::register_company,
        customer::routes::list_companies,
        customer::routes::company_by_id,
        customer::routes::company_by_cnpj,
        customer::routes::update_company,
        customer::routes::delete_company,

        reservation::routes::create_reservation,
        reservation::routes::list_reservations,
        reservation::routes::reservation_by_id,
        reservation::routes::update_reservation,
        reservation::routes::set_reservation_status,
        reservation::routes::delete_reservation,
        reservation::routes::reservations_by_vehicle,
        reservation::routes::reservations_by_individual,
        reservation::routes::reservations_by_company,
        reservation::routes::reservations_by_status,
        reservation::routes::reservations_by_period,
    ),
)]
struct ApiDoc;

pub fn create_openapi_router() -> Router<controller::AppState> {
    let builder: OpenApiBuilder = ApiDoc::openapi().into();

    let info = InfoBuilder::new()
        .title("Rental API")
        .description(Some("Vehicle rental back office api."))
        .version("0.0.1")
        .build();

    let api_doc = builder.info(info).build();

    Router::new()
        .merge(SwaggerUi::new("/swagger").url("/docs/openapi.json", api_doc))
        .merge(RapiDoc::new("/docs/openapi.json").path("/rapidoc"))
}
