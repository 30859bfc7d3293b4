use crate::modules::common::validators::REGEX_IS_MERCOSUL_OR_BR_VEHICLE_PLATE;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use shared::{entity::vehicle, VehicleKind, VehicleStatus};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

/// Fields specific to cars
#[derive(Serialize, Deserialize, ToSchema, Validate, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CarDetailsDto {
    #[validate(range(min = 2, max = 6))]
    pub door_count: i16,

    #[validate(length(min = 1))]
    pub fuel_type: String,

    #[validate(range(min = 1, max = 9))]
    pub passenger_capacity: i16,

    pub has_air_conditioning: bool,

    pub has_power_steering: bool,
}

/// Fields specific to motorcycles
#[derive(Serialize, Deserialize, ToSchema, Validate, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MotorcycleDetailsDto {
    /// engine displacement in cubic centimeters
    #[validate(range(min = 50))]
    pub engine_displacement: i32,

    #[validate(length(min = 1))]
    pub style: String,

    pub has_electric_start: bool,

    #[validate(length(min = 1))]
    pub brake_system: String,
}

/// Fields specific to utility vehicles
#[derive(Serialize, Deserialize, ToSchema, Validate, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UtilityDetailsDto {
    #[validate(range(min = 1.0))]
    pub cargo_capacity_kg: f64,

    #[validate(range(min = 0.1))]
    pub cargo_volume_m3: f64,

    #[validate(length(min = 1))]
    pub body_type: String,

    #[validate(range(min = 2, max = 9))]
    pub axle_count: i16,
}

/// Kind specific portion of a vehicle, tagged by the `kind` json field
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(tag = "kind")]
pub enum VehicleDetails {
    #[serde(rename = "CAR")]
    Car(CarDetailsDto),

    #[serde(rename = "MOTORCYCLE")]
    Motorcycle(MotorcycleDetailsDto),

    #[serde(rename = "UTILITY")]
    Utility(UtilityDetailsDto),
}

impl VehicleDetails {
    pub fn kind(&self) -> VehicleKind {
        match self {
            VehicleDetails::Car(_) => VehicleKind::Car,
            VehicleDetails::Motorcycle(_) => VehicleKind::Motorcycle,
            VehicleDetails::Utility(_) => VehicleKind::Utility,
        }
    }
}

impl Validate for VehicleDetails {
    fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            VehicleDetails::Car(d) => d.validate(),
            VehicleDetails::Motorcycle(d) => d.validate(),
            VehicleDetails::Utility(d) => d.validate(),
        }
    }
}

/// Request body for creating or fully replacing a vehicle
#[derive(Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDto {
    #[validate(regex(
        path = "REGEX_IS_MERCOSUL_OR_BR_VEHICLE_PLATE",
        message = "vehicle plate must be in format AAA#A## or AAA-#### (A: a-z, #: 0-9)"
    ))]
    pub plate: String,

    #[validate(length(min = 1))]
    pub brand: String,

    #[validate(length(min = 1))]
    pub model: String,

    #[validate(range(min = 1900, max = 2100))]
    pub fabrication_year: i16,

    #[validate(range(min = 1900, max = 2100))]
    pub model_year: i16,

    #[validate(length(min = 1))]
    pub color: String,

    #[serde(with = "shared::serde_formats::br_date")]
    #[schema(value_type = String, example = "15/03/2024")]
    pub acquired_at: NaiveDate,

    /// defaults to `AVAILABLE` when omitted
    pub status: Option<VehicleStatus>,

    /// daily rental price
    #[validate(range(min = 0.0))]
    pub price: f64,

    #[validate]
    pub details: VehicleDetails,
}

/// A vehicle with its kind specific fields nested under `details`
#[derive(Serialize, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    pub id: i32,

    #[serde(with = "shared::serde_formats::br_datetime")]
    #[schema(value_type = String, example = "01/06/2025 10:00")]
    pub created_at: NaiveDateTime,

    pub plate: String,
    pub brand: String,
    pub model: String,
    pub fabrication_year: i16,
    pub model_year: i16,
    pub color: String,

    #[serde(with = "shared::serde_formats::br_date")]
    #[schema(value_type = String, example = "15/03/2024")]
    pub acquired_at: NaiveDate,

    pub status: VehicleStatus,
    pub price: f64,

    pub details: VehicleDetails,
}

impl From<vehicle::Model> for VehicleResponse {
    fn from(m: vehicle::Model) -> Self {
        let details = match m.kind {
            VehicleKind::Car => VehicleDetails::Car(CarDetailsDto {
                door_count: m.door_count.unwrap_or_default(),
                fuel_type: m.fuel_type.unwrap_or_default(),
                passenger_capacity: m.passenger_capacity.unwrap_or_default(),
                has_air_conditioning: m.has_air_conditioning.unwrap_or_default(),
                has_power_steering: m.has_power_steering.unwrap_or_default(),
            }),
            VehicleKind::Motorcycle => VehicleDetails::Motorcycle(MotorcycleDetailsDto {
                engine_displacement: m.engine_displacement.unwrap_or_default(),
                style: m.motorcycle_style.unwrap_or_default(),
                has_electric_start: m.has_electric_start.unwrap_or_default(),
                brake_system: m.brake_system.unwrap_or_default(),
            }),
            VehicleKind::Utility => VehicleDetails::Utility(UtilityDetailsDto {
                cargo_capacity_kg: m.cargo_capacity_kg.unwrap_or_default(),
                cargo_volume_m3: m.cargo_volume_m3.unwrap_or_default(),
                body_type: m.body_type.unwrap_or_default(),
                axle_count: m.axle_count.unwrap_or_default(),
            }),
        };

        VehicleResponse {
            id: m.id,
            created_at: m.created_at,
            plate: m.plate,
            brand: m.brand,
            model: m.model,
            fabrication_year: m.fabrication_year,
            model_year: m.model_year,
            color: m.color,
            acquired_at: m.acquired_at,
            status: m.status,
            price: m.price,
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_deserialize_by_kind_tag() {
        let json = r#"{
            "kind": "MOTORCYCLE",
            "engineDisplacement": 500,
            "style": "naked",
            "hasElectricStart": true,
            "brakeSystem": "ABS"
        }"#;

        let details: VehicleDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.kind(), VehicleKind::Motorcycle);
    }

    #[test]
    fn details_reject_unknown_kind_tag() {
        let json = r#"{"kind": "BOAT", "doorCount": 4}"#;
        assert!(serde_json::from_str::<VehicleDetails>(json).is_err());
    }

    #[test]
    fn details_validation_delegates_to_variant() {
        let details = VehicleDetails::Car(CarDetailsDto {
            door_count: 9,
            fuel_type: String::from("flex"),
            passenger_capacity: 5,
            has_air_conditioning: true,
            has_power_steering: true,
        });

        assert!(details.validate().is_err());
    }
}
