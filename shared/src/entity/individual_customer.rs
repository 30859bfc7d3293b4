use super::traits::TaxIdScoped;
use chrono::NaiveDateTime;
use sea_orm::{entity::prelude::*, QuerySelect};
use serde::Serialize;
use utoipa::ToSchema;

/// an individual (pessoa física) customer, identified by a unique CPF
///
/// the 1:1 owned address is flattened into the `address_*` columns, the
/// JSON surface exposes it as a nested object through the customer DTOs
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, ToSchema)]
#[schema(as = entity::individual_customer::Model)]
#[sea_orm(table_name = "individual_customer")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[serde(with = "crate::serde_formats::br_datetime")]
    #[schema(value_type = String, example = "01/06/2025 10:00")]
    pub created_at: NaiveDateTime,

    pub name: String,

    /// `999.999.999-99` or 11 digits
    #[sea_orm(unique)]
    pub cpf: String,

    /// RG, the brazilian national identity document number
    pub national_id: Option<String>,

    pub email: String,

    pub phone: String,

    pub address_street: String,
    pub address_number: String,
    pub address_complement: Option<String>,
    pub address_district: String,
    pub address_city: String,
    pub address_state: String,
    pub address_zip_code: String,
}

impl TaxIdScoped for Entity {
    type Model = Model;

    async fn find_by_tax_id(
        tax_id: &str,
        db: &DatabaseConnection,
    ) -> Result<Option<Model>, DbErr> {
        Self::find().filter(Column::Cpf.eq(tax_id)).one(db).await
    }

    async fn tax_id_in_use(tax_id: &str, db: &DatabaseConnection) -> Result<bool, DbErr> {
        let cnt: i64 = Self::find()
            .select_only()
            .column_as(Column::Id.count(), "count")
            .filter(Column::Cpf.eq(tax_id))
            .into_tuple()
            .one(db)
            .await?
            .unwrap_or(0);

        Ok(cnt > 0)
    }

    async fn tax_id_in_use_by_another(
        tax_id: &str,
        id: i32,
        db: &DatabaseConnection,
    ) -> Result<bool, DbErr> {
        let cnt: i64 = Self::find()
            .select_only()
            .column_as(Column::Id.count(), "count")
            .filter(Column::Cpf.eq(tax_id))
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
