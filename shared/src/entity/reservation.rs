use crate::ReservationStatus;
use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// a time bounded rental reservation linking one vehicle to exactly one
/// customer, either an individual or a company, never both
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[schema(as = entity::reservation::Model)]
#[sea_orm(table_name = "reservation")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// server assigned on creation, immutable afterwards
    #[serde(with = "crate::serde_formats::br_date")]
    #[schema(value_type = String, example = "01/06/2025")]
    pub created_at: NaiveDate,

    #[serde(with = "crate::serde_formats::br_datetime")]
    #[schema(value_type = String, example = "01/06/2025 10:00")]
    pub start_date: NaiveDateTime,

    #[serde(with = "crate::serde_formats::br_datetime")]
    #[schema(value_type = String, example = "03/06/2025 10:00")]
    pub end_date: NaiveDateTime,

    pub vehicle_id: i32,

    /// exactly one of `individual_id` / `company_id` is set,
    /// enforced by a CHECK constraint on the table
    pub individual_id: Option<i32>,

    pub company_id: Option<i32>,

    pub status: ReservationStatus,

    pub total_price: f64,

    #[sea_orm(column_type = "Text", nullable)]
    pub note: Option<String>,
}

/// the customer side of a reservation as a sum type, instead of the two
/// nullable foreign keys the table needs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CustomerRef {
    Individual(i32),
    Company(i32),
}

impl Model {
    pub fn customer_ref(&self) -> Option<CustomerRef> {
        match (self.individual_id, self.company_id) {
            (Some(id), None) => Some(CustomerRef::Individual(id)),
            (None, Some(id)) => Some(CustomerRef::Company(id)),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vehicle::Entity",
        from = "Column::VehicleId",
        to = "super::vehicle::Column::Id",
        on_update = "Cascade",
        on_delete = "NoAction"
    )]
    Vehicle,
    #[sea_orm(
        belongs_to = "super::individual_customer::Entity",
        from = "Column::IndividualId",
        to = "super::individual_customer::Column::Id",
        on_update = "Cascade",
        on_delete = "NoAction"
    )]
    IndividualCustomer,
    #[sea_orm(
        belongs_to = "super::company_customer::Entity",
        from = "Column::CompanyId",
        to = "super::company_customer::Column::Id",
        on_update = "Cascade",
        on_delete = "NoAction"
    )]
    CompanyCustomer,
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehicle.def()
    }
}

impl Related<super::individual_customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IndividualCustomer.def()
    }
}

impl Related<super::company_customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CompanyCustomer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_with_customer(
        individual_id: Option<i32>,
        company_id: Option<i32>,
    ) -> Model {
        Model {
            id: 1,
            created_at: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            start_date: NaiveDate::from_ymd_opt(2025, 6, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 6, 3)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            vehicle_id: 7,
            individual_id,
            company_id,
            status: ReservationStatus::Pending,
            total_price: 500.0,
            note: None,
        }
    }

    #[test]
    fn customer_ref_requires_exactly_one_side() {
        assert_eq!(
            model_with_customer(Some(3), None).customer_ref(),
            Some(CustomerRef::Individual(3))
        );
        assert_eq!(
            model_with_customer(None, Some(9)).customer_ref(),
            Some(CustomerRef::Company(9))
        );
        assert_eq!(model_with_customer(None, None).customer_ref(), None);
        assert_eq!(model_with_customer(Some(3), Some(9)).customer_ref(), None);
    }
}
