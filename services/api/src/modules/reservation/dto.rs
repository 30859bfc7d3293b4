use chrono::NaiveDateTime;
use serde::Deserialize;
use shared::{
    entity::reservation::{CustomerRef, Model},
    ReservationStatus,
};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Request body for creating or fully replacing a reservation
#[derive(Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDto {
    #[serde(with = "shared::serde_formats::br_datetime")]
    #[schema(value_type = String, example = "01/06/2025 10:00")]
    pub start_date: NaiveDateTime,

    #[serde(with = "shared::serde_formats::br_datetime")]
    #[schema(value_type = String, example = "03/06/2025 10:00")]
    pub end_date: NaiveDateTime,

    #[validate(range(min = 1))]
    pub vehicle_id: i32,

    /// exactly one of `individualId` / `companyId` must be set
    #[validate(range(min = 1))]
    pub individual_id: Option<i32>,

    #[validate(range(min = 1))]
    pub company_id: Option<i32>,

    /// defaults to `PENDING` when omitted
    pub status: Option<ReservationStatus>,

    #[validate(range(min = 0.0))]
    pub total_price: f64,

    #[validate(length(max = 500))]
    pub note: Option<String>,
}

impl ReservationDto {
    /// the customer side of the dto, failing when neither or both
    /// customer ids are present
    pub fn customer_ref(&self) -> Result<CustomerRef, &'static str> {
        match (self.individual_id, self.company_id) {
            (Some(id), None) => Ok(CustomerRef::Individual(id)),
            (None, Some(id)) => Ok(CustomerRef::Company(id)),
            (None, None) => Err("reservation must reference a individual or company customer"),
            (Some(_), Some(_)) => {
                Err("reservation cannot reference both a individual and a company customer")
            }
        }
    }
}

/// Query params for listing reservations overlapping a period
#[derive(Deserialize, IntoParams, Validate)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PeriodFilterDto {
    #[serde(with = "shared::serde_formats::br_datetime")]
    #[param(value_type = String, example = "01/06/2025 00:00")]
    pub start: NaiveDateTime,

    #[serde(with = "shared::serde_formats::br_datetime")]
    #[param(value_type = String, example = "30/06/2025 23:59")]
    pub end: NaiveDateTime,
}

#[derive(Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct SetStatusDto {
    pub status: ReservationStatus,
}

/// An overlap recheck on update can be skipped only when the vehicle
/// and the reserved period are unchanged
pub fn overlap_recheck_needed(current: &Model, dto: &ReservationDto) -> bool {
    current.vehicle_id != dto.vehicle_id
        || current.start_date != dto.start_date
        || current.end_date != dto.end_date
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date_time(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn dto(vehicle_id: i32, individual_id: Option<i32>, company_id: Option<i32>) -> ReservationDto {
        ReservationDto {
            start_date: date_time(1, 10),
            end_date: date_time(3, 10),
            vehicle_id,
            individual_id,
            company_id,
            status: None,
            total_price: 450.0,
            note: None,
        }
    }

    fn persisted(vehicle_id: i32) -> Model {
        Model {
            id: 1,
            created_at: NaiveDate::from_ymd_opt(2025, 5, 30).unwrap(),
            start_date: date_time(1, 10),
            end_date: date_time(3, 10),
            vehicle_id,
            individual_id: Some(3),
            company_id: None,
            status: ReservationStatus::Pending,
            total_price: 450.0,
            note: None,
        }
    }

    #[test]
    fn customer_ref_rejects_neither_and_both() {
        assert!(dto(1, Some(3), None).customer_ref().is_ok());
        assert!(dto(1, None, Some(9)).customer_ref().is_ok());
        assert!(dto(1, None, None).customer_ref().is_err());
        assert!(dto(1, Some(3), Some(9)).customer_ref().is_err());
    }

    #[test]
    fn recheck_skipped_when_vehicle_and_period_unchanged() {
        assert!(!overlap_recheck_needed(&persisted(1), &dto(1, Some(3), None)));
    }

    #[test]
    fn recheck_needed_when_vehicle_changes() {
        assert!(overlap_recheck_needed(&persisted(2), &dto(1, Some(3), None)));
    }

    #[test]
    fn recheck_needed_when_period_changes() {
        let mut d = dto(1, Some(3), None);
        d.end_date = date_time(4, 10);
        assert!(overlap_recheck_needed(&persisted(1), &d));
    }

    #[test]
    fn json_dates_use_day_month_year_format() {
        let json = r#"{
            "startDate": "01/06/2025 10:00",
            "endDate": "03/06/2025 10:00",
            "vehicleId": 1,
            "individualId": 3,
            "totalPrice": 450.0
        }"#;

        let parsed: ReservationDto = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.start_date, date_time(1, 10));
        assert_eq!(parsed.status, None);
    }
}
