use crate::{VehicleKind, VehicleStatus};
use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{entity::prelude::*, QuerySelect};
use serde::Serialize;
use utoipa::ToSchema;

/// a rentable vehicle, all three kinds (car / motorcycle / utility) share
/// this table, `kind` discriminates and the kind specific columns of the
/// other kinds are left null
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[schema(as = entity::vehicle::Model)]
#[sea_orm(table_name = "vehicle")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[serde(with = "crate::serde_formats::br_datetime")]
    #[schema(value_type = String, example = "01/06/2025 10:00")]
    pub created_at: NaiveDateTime,

    pub kind: VehicleKind,

    #[sea_orm(unique)]
    pub plate: String,

    pub brand: String,

    pub model: String,

    pub fabrication_year: i16,

    pub model_year: i16,

    pub color: String,

    #[serde(with = "crate::serde_formats::br_date")]
    #[schema(value_type = String, example = "15/03/2024")]
    pub acquired_at: NaiveDate,

    pub status: VehicleStatus,

    pub price: f64,

    // car only
    pub door_count: Option<i16>,
    pub fuel_type: Option<String>,
    pub passenger_capacity: Option<i16>,
    pub has_air_conditioning: Option<bool>,
    pub has_power_steering: Option<bool>,

    // motorcycle only
    pub engine_displacement: Option<i32>,
    pub motorcycle_style: Option<String>,
    pub has_electric_start: Option<bool>,
    pub brake_system: Option<String>,

    // utility only
    pub cargo_capacity_kg: Option<f64>,
    pub cargo_volume_m3: Option<f64>,
    pub body_type: Option<String>,
    pub axle_count: Option<i16>,
}

impl Entity {
    pub async fn find_by_id_and_kind(
        id: i32,
        kind: VehicleKind,
        db: &DatabaseConnection,
    ) -> Result<Option<Model>, DbErr> {
        Self::find()
            .filter(Column::Id.eq(id))
            .filter(Column::Kind.eq(kind))
            .one(db)
            .await
    }

    pub async fn find_by_plate_and_kind(
        plate: &str,
        kind: VehicleKind,
        db: &DatabaseConnection,
    ) -> Result<Option<Model>, DbErr> {
        Self::find()
            .filter(Column::Plate.eq(plate))
            .filter(Column::Kind.eq(kind))
            .one(db)
            .await
    }

    /// `true` if any vehicle, regardless of kind, uses the plate
    pub async fn plate_in_use(plate: &str, db: &DatabaseConnection) -> Result<bool, DbErr> {
        let cnt: i64 = Self::find()
            .select_only()
            .column_as(Column::Id.count(), "count")
            .filter(Column::Plate.eq(plate))
            .into_tuple()
            .one(db)
            .await?
            .unwrap_or(0);

        Ok(cnt > 0)
    }

    /// `true` if the plate is used by a vehicle other than `id`,
    /// for uniqueness checks on update
    pub async fn plate_in_use_by_another(
        plate: &str,
        id: i32,
        db: &DatabaseConnection,
    ) -> Result<bool, DbErr> {
        let cnt: i64 = Self::find()
            .select_only()
            .column_as(Column::Id.count(), "count")
            .filter(Column::Plate.eq(plate))
            .filter(Column::Id.ne(id))
            .into_tuple()
            .one(db)
            .await?
            .unwrap_or(0);

        Ok(cnt > 0)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservation,
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
