use sea_orm_migration::{prelude::*, sea_query::extension::postgres::Type};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("vehicle_kind"))
                    .values([
                        Alias::new("CAR"),
                        Alias::new("MOTORCYCLE"),
                        Alias::new("UTILITY"),
                    ])
                    .to_owned(),
            )
            .await?;

        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("vehicle_status"))
                    .values([
                        Alias::new("AVAILABLE"),
                        Alias::new("RENTED"),
                        Alias::new("MAINTENANCE"),
                        Alias::new("SOLD"),
                    ])
                    .to_owned(),
            )
            .await?;

        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("reservation_status"))
                    .values([
                        Alias::new("PENDING"),
                        Alias::new("CONFIRMED"),
                        Alias::new("CANCELLED"),
                        Alias::new("COMPLETED"),
                    ])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .col(
                        ColumnDef::new(Vehicle::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Vehicle::CreatedAt).date_time().not_null())
                    .col(
                        ColumnDef::new(Vehicle::Kind)
                            .custom(Alias::new("vehicle_kind"))
                            .not_null(),
                    )
                    .col(ColumnDef::new(Vehicle::Plate).string_len(8).not_null())
                    .col(ColumnDef::new(Vehicle::Brand).string().not_null())
                    .col(ColumnDef::new(Vehicle::Model).string().not_null())
                    .col(
                        ColumnDef::new(Vehicle::FabricationYear)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Vehicle::ModelYear)
                            .small_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Vehicle::Color).string().not_null())
                    .col(ColumnDef::new(Vehicle::AcquiredAt).date().not_null())
                    .col(
                        ColumnDef::new(Vehicle::Status)
                            .custom(Alias::new("vehicle_status"))
                            .not_null(),
                    )
                    .col(ColumnDef::new(Vehicle::Price).double().not_null())
                    .col(ColumnDef::new(Vehicle::DoorCount).small_integer())
                    .col(ColumnDef::new(Vehicle::FuelType).string())
                    .col(ColumnDef::new(Vehicle::PassengerCapacity).small_integer())
                    .col(ColumnDef::new(Vehicle::HasAirConditioning).boolean())
                    .col(ColumnDef::new(Vehicle::HasPowerSteering).boolean())
                    .col(ColumnDef::new(Vehicle::EngineDisplacement).integer())
                    .col(ColumnDef::new(Vehicle::MotorcycleStyle).string())
                    .col(ColumnDef::new(Vehicle::HasElectricStart).boolean())
                    .col(ColumnDef::new(Vehicle::BrakeSystem).string())
                    .col(ColumnDef::new(Vehicle::CargoCapacityKg).double())
                    .col(ColumnDef::new(Vehicle::CargoVolumeM3).double())
                    .col(ColumnDef::new(Vehicle::BodyType).string())
                    .col(ColumnDef::new(Vehicle::AxleCount).small_integer())
                    .to_owned(),
            )
            .await?;

        // plate uniqueness spans every vehicle kind, the single table makes
        // this a plain unique index
        manager
            .create_index(
                Index::create()
                    .name("vehicle_plate_unique")
                    .table(Vehicle::Table)
                    .col(Vehicle::Plate)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(IndividualCustomer::Table)
                    .col(
                        ColumnDef::new(IndividualCustomer::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(IndividualCustomer::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(ColumnDef::new(IndividualCustomer::Name).string().not_null())
                    .col(
                        ColumnDef::new(IndividualCustomer::Cpf)
                            .string_len(14)
                            .not_null(),
                    )
                    .col(ColumnDef::new(IndividualCustomer::NationalId).string())
                    .col(
                        ColumnDef::new(IndividualCustomer::Email)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(IndividualCustomer::Phone)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(IndividualCustomer::AddressStreet)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(IndividualCustomer::AddressNumber)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(IndividualCustomer::AddressComplement).string())
                    .col(
                        ColumnDef::new(IndividualCustomer::AddressDistrict)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(IndividualCustomer::AddressCity)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(IndividualCustomer::AddressState)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(IndividualCustomer::AddressZipCode)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("individual_customer_cpf_unique")
                    .table(IndividualCustomer::Table)
                    .col(IndividualCustomer::Cpf)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CompanyCustomer::Table)
                    .col(
                        ColumnDef::new(CompanyCustomer::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CompanyCustomer::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CompanyCustomer::LegalName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CompanyCustomer::TradeName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CompanyCustomer::Cnpj)
                            .string_len(18)
                            .not_null(),
                    )
                    .col(ColumnDef::new(CompanyCustomer::Email).string().not_null())
                    .col(ColumnDef::new(CompanyCustomer::Phone).string().not_null())
                    .col(
                        ColumnDef::new(CompanyCustomer::AddressStreet)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CompanyCustomer::AddressNumber)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CompanyCustomer::AddressComplement).string())
                    .col(
                        ColumnDef::new(CompanyCustomer::AddressDistrict)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CompanyCustomer::AddressCity)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CompanyCustomer::AddressState)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CompanyCustomer::AddressZipCode)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("company_customer_cnpj_unique")
                    .table(CompanyCustomer::Table)
                    .col(CompanyCustomer::Cnpj)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .col(
                        ColumnDef::new(Reservation::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reservation::CreatedAt).date().not_null())
                    .col(
                        ColumnDef::new(Reservation::StartDate)
                            .date_time()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Reservation::EndDate).date_time().not_null())
                    .col(ColumnDef::new(Reservation::VehicleId).integer().not_null())
                    .col(ColumnDef::new(Reservation::IndividualId).integer())
                    .col(ColumnDef::new(Reservation::CompanyId).integer())
                    .col(
                        ColumnDef::new(Reservation::Status)
                            .custom(Alias::new("reservation_status"))
                            .not_null(),
                    )
                    .col(ColumnDef::new(Reservation::TotalPrice).double().not_null())
                    .col(ColumnDef::new(Reservation::Note).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_vehicle")
                            .from(Reservation::Table, Reservation::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_individual_customer")
                            .from(Reservation::Table, Reservation::IndividualId)
                            .to(IndividualCustomer::Table, IndividualCustomer::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_company_customer")
                            .from(Reservation::Table, Reservation::CompanyId)
                            .to(CompanyCustomer::Table, CompanyCustomer::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // a reservation belongs to exactly one customer, individual or company
        manager
            .get_connection()
            .execute_unprepared(
                "ALTER TABLE reservation
                 ADD CONSTRAINT reservation_customer_exclusive
                 CHECK (num_nonnulls(individual_id, company_id) = 1)",
            )
            .await?;

        // the overlap-conflict query always filters by vehicle first
        manager
            .create_index(
                Index::create()
                    .name("ix_reservation_vehicle_id")
                    .table(Reservation::Table)
                    .col(Reservation::VehicleId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CompanyCustomer::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(IndividualCustomer::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(Alias::new("reservation_status")).to_owned())
            .await?;
        manager
            .drop_type(Type::drop().name(Alias::new("vehicle_status")).to_owned())
            .await?;
        manager
            .drop_type(Type::drop().name(Alias::new("vehicle_kind")).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Vehicle {
    Table,
    Id,
    CreatedAt,
    Kind,
    Plate,
    Brand,
    Model,
    FabricationYear,
    ModelYear,
    Color,
    AcquiredAt,
    Status,
    Price,
    DoorCount,
    FuelType,
    PassengerCapacity,
    HasAirConditioning,
    HasPowerSteering,
    EngineDisplacement,
    MotorcycleStyle,
    HasElectricStart,
    BrakeSystem,
    CargoCapacityKg,
    CargoVolumeM3,
    BodyType,
    AxleCount,
}

#[derive(DeriveIden)]
enum IndividualCustomer {
    Table,
    Id,
    CreatedAt,
    Name,
    Cpf,
    NationalId,
    Email,
    Phone,
    AddressStreet,
    AddressNumber,
    AddressComplement,
    AddressDistrict,
    AddressCity,
    AddressState,
    AddressZipCode,
}

#[derive(DeriveIden)]
enum CompanyCustomer {
    Table,
    Id,
    CreatedAt,
    LegalName,
    TradeName,
    Cnpj,
    Email,
    Phone,
    AddressStreet,
    AddressNumber,
    AddressComplement,
    AddressDistrict,
    AddressCity,
    AddressState,
    AddressZipCode,
}

#[derive(DeriveIden)]
enum Reservation {
    Table,
    Id,
    CreatedAt,
    StartDate,
    EndDate,
    VehicleId,
    IndividualId,
    CompanyId,
    Status,
    TotalPrice,
    Note,
}
