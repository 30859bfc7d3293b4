use super::dto::{VehicleDetails, VehicleDto};
use crate::database::error::DbError;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use shared::{entity::vehicle, VehicleKind, VehicleStatus};

/// Sets the kind discriminator and the kind specific columns,
/// clearing the columns belonging to the other kinds
fn apply_details(v: &mut vehicle::ActiveModel, details: &VehicleDetails) {
    v.kind = Set(details.kind());

    v.door_count = Set(None);
    v.fuel_type = Set(None);
    v.passenger_capacity = Set(None);
    v.has_air_conditioning = Set(None);
    v.has_power_steering = Set(None);

    v.engine_displacement = Set(None);
    v.motorcycle_style = Set(None);
    v.has_electric_start = Set(None);
    v.brake_system = Set(None);

    v.cargo_capacity_kg = Set(None);
    v.cargo_volume_m3 = Set(None);
    v.body_type = Set(None);
    v.axle_count = Set(None);

    match details {
        VehicleDetails::Car(d) => {
            v.door_count = Set(Some(d.door_count));
            v.fuel_type = Set(Some(d.fuel_type.clone()));
            v.passenger_capacity = Set(Some(d.passenger_capacity));
            v.has_air_conditioning = Set(Some(d.has_air_conditioning));
            v.has_power_steering = Set(Some(d.has_power_steering));
        }
        VehicleDetails::Motorcycle(d) => {
            v.engine_displacement = Set(Some(d.engine_displacement));
            v.motorcycle_style = Set(Some(d.style.clone()));
            v.has_electric_start = Set(Some(d.has_electric_start));
            v.brake_system = Set(Some(d.brake_system.clone()));
        }
        VehicleDetails::Utility(d) => {
            v.cargo_capacity_kg = Set(Some(d.cargo_capacity_kg));
            v.cargo_volume_m3 = Set(Some(d.cargo_volume_m3));
            v.body_type = Set(Some(d.body_type.clone()));
            v.axle_count = Set(Some(d.axle_count));
        }
    }
}

fn apply_base_fields(v: &mut vehicle::ActiveModel, dto: &VehicleDto) {
    v.plate = Set(dto.plate.clone());
    v.brand = Set(dto.brand.clone());
    v.model = Set(dto.model.clone());
    v.fabrication_year = Set(dto.fabrication_year);
    v.model_year = Set(dto.model_year);
    v.color = Set(dto.color.clone());
    v.acquired_at = Set(dto.acquired_at);
    v.status = Set(dto.status.unwrap_or(VehicleStatus::Available));
    v.price = Set(dto.price);
}

pub async fn create_vehicle(
    conn: &DatabaseConnection,
    dto: &VehicleDto,
) -> Result<vehicle::Model, DbError> {
    let mut v = vehicle::ActiveModel {
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    apply_base_fields(&mut v, dto);
    apply_details(&mut v, &dto.details);

    Ok(v.insert(conn).await?)
}

/// Fully replaces a vehicle with the dto contents, keeping id and creation timestamp
pub async fn update_vehicle(
    conn: &DatabaseConnection,
    vehicle: vehicle::Model,
    dto: &VehicleDto,
) -> Result<vehicle::Model, DbError> {
    let mut v: vehicle::ActiveModel = vehicle.into();

    apply_base_fields(&mut v, dto);
    apply_details(&mut v, &dto.details);

    Ok(v.update(conn).await?)
}
