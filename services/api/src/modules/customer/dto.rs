use crate::modules::common::validators::{REGEX_IS_CNPJ, REGEX_IS_CPF};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use shared::entity::{company_customer, individual_customer};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, ToSchema, Validate, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AddressDto {
    #[validate(length(min = 1))]
    pub street: String,

    #[validate(length(min = 1))]
    pub number: String,

    pub complement: Option<String>,

    #[validate(length(min = 1))]
    pub district: String,

    #[validate(length(min = 1))]
    pub city: String,

    /// two letter state code, eg: SP
    #[validate(length(min = 2, max = 2))]
    pub state: String,

    #[validate(length(min = 8, max = 9))]
    pub zip_code: String,
}

/// Request body for creating or fully replacing a individual customer
#[derive(Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct IndividualCustomerDto {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(regex(
        path = "REGEX_IS_CPF",
        message = "CPF must be in format 999.999.999-99 or 11 digits"
    ))]
    pub cpf: String,

    /// RG or equivalent national identity document
    pub national_id: Option<String>,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 8))]
    pub phone: String,

    #[validate]
    pub address: AddressDto,
}

/// Request body for creating or fully replacing a company customer
#[derive(Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompanyCustomerDto {
    #[validate(length(min = 1))]
    pub legal_name: String,

    #[validate(length(min = 1))]
    pub trade_name: String,

    #[validate(regex(
        path = "REGEX_IS_CNPJ",
        message = "CNPJ must be in format 99.999.999/9999-99 or 14 digits"
    ))]
    pub cnpj: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 8))]
    pub phone: String,

    #[validate]
    pub address: AddressDto,
}

#[derive(Serialize, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct IndividualCustomerResponse {
    pub id: i32,

    #[serde(with = "shared::serde_formats::br_datetime")]
    #[schema(value_type = String, example = "01/06/2025 10:00")]
    pub created_at: NaiveDateTime,

    pub name: String,
    pub cpf: String,
    pub national_id: Option<String>,
    pub email: String,
    pub phone: String,
    pub address: AddressDto,
}

impl From<individual_customer::Model> for IndividualCustomerResponse {
    fn from(m: individual_customer::Model) -> Self {
        IndividualCustomerResponse {
            id: m.id,
            created_at: m.created_at,
            name: m.name,
            cpf: m.cpf,
            national_id: m.national_id,
            email: m.email,
            phone: m.phone,
            address: AddressDto {
                street: m.address_street,
                number: m.address_number,
                complement: m.address_complement,
                district: m.address_district,
                city: m.address_city,
                state: m.address_state,
                zip_code: m.address_zip_code,
            },
        }
    }
}

#[derive(Serialize, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CompanyCustomerResponse {
    pub id: i32,

    #[serde(with = "shared::serde_formats::br_datetime")]
    #[schema(value_type = String, example = "01/06/2025 10:00")]
    pub created_at: NaiveDateTime,

    pub legal_name: String,
    pub trade_name: String,
    pub cnpj: String,
    pub email: String,
    pub phone: String,
    pub address: AddressDto,
}

impl From<company_customer::Model> for CompanyCustomerResponse {
    fn from(m: company_customer::Model) -> Self {
        CompanyCustomerResponse {
            id: m.id,
            created_at: m.created_at,
            legal_name: m.legal_name,
            trade_name: m.trade_name,
            cnpj: m.cnpj,
            email: m.email,
            phone: m.phone,
            address: AddressDto {
                street: m.address_street,
                number: m.address_number,
                complement: m.address_complement,
                district: m.address_district,
                city: m.address_city,
                state: m.address_state,
                zip_code: m.address_zip_code,
            },
        }
    }
}
