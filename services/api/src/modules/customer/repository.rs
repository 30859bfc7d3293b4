use super::dto::{CompanyCustomerDto, IndividualCustomerDto};
use crate::database::error::DbError;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use shared::entity::{company_customer, individual_customer};

fn apply_individual_fields(
    c: &mut individual_customer::ActiveModel,
    dto: &IndividualCustomerDto,
) {
    c.name = Set(dto.name.clone());
    c.cpf = Set(dto.cpf.clone());
    c.national_id = Set(dto.national_id.clone());
    c.email = Set(dto.email.clone());
    c.phone = Set(dto.phone.clone());
    c.address_street = Set(dto.address.street.clone());
    c.address_number = Set(dto.address.number.clone());
    c.address_complement = Set(dto.address.complement.clone());
    c.address_district = Set(dto.address.district.clone());
    c.address_city = Set(dto.address.city.clone());
    c.address_state = Set(dto.address.state.clone());
    c.address_zip_code = Set(dto.address.zip_code.clone());
}

fn apply_company_fields(c: &mut company_customer::ActiveModel, dto: &CompanyCustomerDto) {
    c.legal_name = Set(dto.legal_name.clone());
    c.trade_name = Set(dto.trade_name.clone());
    c.cnpj = Set(dto.cnpj.clone());
    c.email = Set(dto.email.clone());
    c.phone = Set(dto.phone.clone());
    c.address_street = Set(dto.address.street.clone());
    c.address_number = Set(dto.address.number.clone());
    c.address_complement = Set(dto.address.complement.clone());
    c.address_district = Set(dto.address.district.clone());
    c.address_city = Set(dto.address.city.clone());
    c.address_state = Set(dto.address.state.clone());
    c.address_zip_code = Set(dto.address.zip_code.clone());
}

pub async fn create_individual_customer(
    conn: &DatabaseConnection,
    dto: &IndividualCustomerDto,
) -> Result<individual_customer::Model, DbError> {
    let mut c = individual_customer::ActiveModel {
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    apply_individual_fields(&mut c, dto);

    Ok(c.insert(conn).await?)
}

/// Fully replaces a individual customer with the dto contents,
/// keeping id and creation timestamp
pub async fn update_individual_customer(
    conn: &DatabaseConnection,
    customer: individual_customer::Model,
    dto: &IndividualCustomerDto,
) -> Result<individual_customer::Model, DbError> {
    let mut c: individual_customer::ActiveModel = customer.into();

    apply_individual_fields(&mut c, dto);

    Ok(c.update(conn).await?)
}

pub async fn create_company_customer(
    conn: &DatabaseConnection,
    dto: &CompanyCustomerDto,
) -> Result<company_customer::Model, DbError> {
    let mut c = company_customer::ActiveModel {
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    apply_company_fields(&mut c, dto);

    Ok(c.insert(conn).await?)
}

/// Fully replaces a company customer with the dto contents,
/// keeping id and creation timestamp
pub async fn update_company_customer(
    conn: &DatabaseConnection,
    customer: company_customer::Model,
    dto: &CompanyCustomerDto,
) -> Result<company_customer::Model, DbError> {
    let mut c: company_customer::ActiveModel = customer.into();

    apply_company_fields(&mut c, dto);

    Ok(c.update(conn).await?)
}
