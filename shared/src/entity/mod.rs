pub mod prelude;
pub mod traits;

pub mod company_customer;
pub mod individual_customer;
pub mod reservation;
pub mod vehicle;
