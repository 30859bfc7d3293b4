use chrono::{NaiveDate, Utc};
use sea_orm_migration::{
    prelude::*,
    sea_orm::{ActiveModelTrait, ConnectionTrait, Set, TransactionTrait},
};
use shared::entity::{company_customer, individual_customer, reservation, vehicle};
use shared::{ReservationStatus, VehicleKind, VehicleStatus};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        let transaction = db.begin().await?;

        let car = seed_car(&transaction).await?;
        seed_motorcycle(&transaction).await?;

        let customer = seed_individual(&transaction).await?;
        seed_company(&transaction).await?;

        reservation::ActiveModel {
            created_at: Set(Utc::now().date_naive()),
            start_date: Set(date(2025, 9, 1).and_hms_opt(10, 0, 0).unwrap()),
            end_date: Set(date(2025, 9, 3).and_hms_opt(10, 0, 0).unwrap()),
            vehicle_id: Set(car.id),
            individual_id: Set(Some(customer.id)),
            company_id: Set(None),
            status: Set(ReservationStatus::Pending),
            total_price: Set(420.0),
            note: Set(Some(String::from("demo reservation"))),
            ..Default::default()
        }
        .insert(&transaction)
        .await?;

        transaction.commit().await?;

        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        Err(DbErr::Custom(String::from("cannot be reverted")))
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn seed_car<C: ConnectionTrait>(db: &C) -> Result<vehicle::Model, DbErr> {
    vehicle::ActiveModel {
        created_at: Set(Utc::now().naive_utc()),
        kind: Set(VehicleKind::Car),
        plate: Set(String::from("BRA2E19")),
        brand: Set(String::from("Fiat")),
        model: Set(String::from("Argo")),
        fabrication_year: Set(2023),
        model_year: Set(2024),
        color: Set(String::from("prata")),
        acquired_at: Set(date(2024, 3, 15)),
        status: Set(VehicleStatus::Available),
        price: Set(92_000.0),
        door_count: Set(Some(4)),
        fuel_type: Set(Some(String::from("flex"))),
        passenger_capacity: Set(Some(5)),
        has_air_conditioning: Set(Some(true)),
        has_power_steering: Set(Some(true)),
        ..Default::default()
    }
    .insert(db)
    .await
}

async fn seed_motorcycle<C: ConnectionTrait>(db: &C) -> Result<vehicle::Model, DbErr> {
    vehicle::ActiveModel {
        created_at: Set(Utc::now().naive_utc()),
        kind: Set(VehicleKind::Motorcycle),
        plate: Set(String::from("FRD1C23")),
        brand: Set(String::from("Honda")),
        model: Set(String::from("CB 500F")),
        fabrication_year: Set(2022),
        model_year: Set(2023),
        color: Set(String::from("vermelha")),
        acquired_at: Set(date(2023, 7, 1)),
        status: Set(VehicleStatus::Available),
        price: Set(41_000.0),
        engine_displacement: Set(Some(471)),
        motorcycle_style: Set(Some(String::from("street"))),
        has_electric_start: Set(Some(true)),
        brake_system: Set(Some(String::from("ABS"))),
        ..Default::default()
    }
    .insert(db)
    .await
}

async fn seed_individual<C: ConnectionTrait>(
    db: &C,
) -> Result<individual_customer::Model, DbErr> {
    individual_customer::ActiveModel {
        created_at: Set(Utc::now().naive_utc()),
        name: Set(String::from("Maria da Silva")),
        cpf: Set(String::from("123.456.789-09")),
        national_id: Set(Some(String::from("1234567"))),
        email: Set(String::from("maria.silva@example.com")),
        phone: Set(String::from("(61) 99999-0001")),
        address_street: Set(String::from("Rua das Acácias")),
        address_number: Set(String::from("120")),
        address_complement: Set(Some(String::from("apto 301"))),
        address_district: Set(String::from("Asa Norte")),
        address_city: Set(String::from("Brasília")),
        address_state: Set(String::from("DF")),
        address_zip_code: Set(String::from("70000-000")),
        ..Default::default()
    }
    .insert(db)
    .await
}

async fn seed_company<C: ConnectionTrait>(db: &C) -> Result<company_customer::Model, DbErr> {
    company_customer::ActiveModel {
        created_at: Set(Utc::now().naive_utc()),
        legal_name: Set(String::from("Transportes Cerrado LTDA")),
        trade_name: Set(String::from("Cerrado Log")),
        cnpj: Set(String::from("12.345.678/0001-95")),
        email: Set(String::from("contato@cerradolog.example.com")),
        phone: Set(String::from("(61) 3333-0002")),
        address_street: Set(String::from("SIA Trecho 3")),
        address_number: Set(String::from("55")),
        address_complement: Set(None),
        address_district: Set(String::from("SIA")),
        address_city: Set(String::from("Brasília")),
        address_state: Set(String::from("DF")),
        address_zip_code: Set(String::from("71200-000")),
        ..Default::default()
    }
    .insert(db)
    .await
}
