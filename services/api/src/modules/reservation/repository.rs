use super::dto::ReservationDto;
use chrono::{Local, NaiveDateTime};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Select, Set,
};
use shared::{
    entity::reservation::{self, CustomerRef},
    ReservationStatus,
};

/// Selects the reservations on the vehicle whose period overlaps the
/// candidate period, two periods overlap when
/// `existing.start <= candidate.end AND existing.end >= candidate.start`,
/// bounds inclusive on both ends so periods that merely touch at a
/// boundary instant still overlap
///
/// `exclude_reservation` removes a reservation from consideration,
/// so a reservation being replaced never conflicts with itself
fn conflict_query(
    vehicle_id: i32,
    start: NaiveDateTime,
    end: NaiveDateTime,
    exclude_reservation: Option<i32>,
) -> Select<reservation::Entity> {
    let mut query = reservation::Entity::find()
        .filter(reservation::Column::VehicleId.eq(vehicle_id))
        .filter(reservation::Column::StartDate.lte(end))
        .filter(reservation::Column::EndDate.gte(start));

    if let Some(id) = exclude_reservation {
        query = query.filter(reservation::Column::Id.ne(id));
    }

    query
}

/// `true` if any reservation on the vehicle overlaps the candidate
/// period
pub async fn has_conflict<C: ConnectionTrait>(
    conn: &C,
    vehicle_id: i32,
    start: NaiveDateTime,
    end: NaiveDateTime,
    exclude_reservation: Option<i32>,
) -> Result<bool, DbErr> {
    let cnt = conflict_query(vehicle_id, start, end, exclude_reservation)
        .count(conn)
        .await?;

    Ok(cnt > 0)
}

fn apply_fields(r: &mut reservation::ActiveModel, dto: &ReservationDto, customer: CustomerRef) {
    r.start_date = Set(dto.start_date);
    r.end_date = Set(dto.end_date);
    r.vehicle_id = Set(dto.vehicle_id);
    r.status = Set(dto.status.unwrap_or(ReservationStatus::Pending));
    r.total_price = Set(dto.total_price);
    r.note = Set(dto.note.clone());

    match customer {
        CustomerRef::Individual(id) => {
            r.individual_id = Set(Some(id));
            r.company_id = Set(None);
        }
        CustomerRef::Company(id) => {
            r.individual_id = Set(None);
            r.company_id = Set(Some(id));
        }
    }
}

/// Inserts a reservation, `created_at` is always the current date
/// regardless of the request body
pub async fn create_reservation<C: ConnectionTrait>(
    conn: &C,
    dto: &ReservationDto,
    customer: CustomerRef,
) -> Result<reservation::Model, DbErr> {
    let mut r = reservation::ActiveModel {
        created_at: Set(Local::now().date_naive()),
        ..Default::default()
    };

    apply_fields(&mut r, dto, customer);

    r.insert(conn).await
}

/// Fully replaces a reservation with the dto contents, keeping id
/// and creation date
pub async fn update_reservation<C: ConnectionTrait>(
    conn: &C,
    current: reservation::Model,
    dto: &ReservationDto,
    customer: CustomerRef,
) -> Result<reservation::Model, DbErr> {
    let mut r: reservation::ActiveModel = current.into();

    apply_fields(&mut r, dto, customer);

    r.update(conn).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sea_orm::{DbBackend, QueryTrait};

    fn june(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn conflict_sql(
        vehicle_id: i32,
        start: NaiveDateTime,
        end: NaiveDateTime,
        exclude_reservation: Option<i32>,
    ) -> String {
        conflict_query(vehicle_id, start, end, exclude_reservation)
            .build(DbBackend::Postgres)
            .to_string()
    }

    #[test]
    fn overlap_bounds_are_inclusive() {
        // candidate 03/06 10:00 -> 05/06 10:00 against a booking that ends
        // exactly at 03/06 10:00, the shared instant must still match, so
        // the generated predicate has to use <= and >= rather than strict
        // comparisons
        let sql = conflict_sql(1, june(3, 10), june(5, 10), None);

        assert!(sql.contains(r#""vehicle_id" = 1"#));
        assert!(sql.contains(r#""start_date" <= '2025-06-05 10:00:00'"#));
        assert!(sql.contains(r#""end_date" >= '2025-06-03 10:00:00'"#));
        assert!(!sql.contains("< '"));
        assert!(!sql.contains("> '"));
    }

    #[test]
    fn containment_uses_the_same_predicate() {
        // a booking fully containing the candidate satisfies
        // start <= candidate.end and end >= candidate.start too, no extra
        // clauses are generated for that case
        let sql = conflict_sql(2, june(2, 0), june(3, 0), None);

        assert!(sql.contains(r#""start_date" <= '2025-06-03 00:00:00'"#));
        assert!(sql.contains(r#""end_date" >= '2025-06-02 00:00:00'"#));
        assert_eq!(sql.matches(r#""start_date" <="#).count(), 1);
        assert_eq!(sql.matches(r#""end_date" >="#).count(), 1);
    }

    #[test]
    fn excluded_reservation_is_filtered_out() {
        let sql = conflict_sql(1, june(1, 10), june(3, 10), Some(5));

        assert!(sql.contains(r#""id" <> 5"#));
    }

    #[test]
    fn no_exclusion_filter_without_an_excluded_id() {
        let sql = conflict_sql(1, june(1, 10), june(3, 10), None);

        assert!(!sql.contains("<>"));
    }
}
