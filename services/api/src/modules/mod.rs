pub mod common;
pub mod customer;
pub mod reservation;
pub mod vehicle;
