pub use super::company_customer::Entity as CompanyCustomer;
pub use super::individual_customer::Entity as IndividualCustomer;
pub use super::reservation::Entity as Reservation;
pub use super::vehicle::Entity as Vehicle;
