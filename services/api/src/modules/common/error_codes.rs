use core::str;

/// a vehicle could not be created or updated with a given
/// license plate because its already in use by another vehicle
pub static PLATE_IN_USE: &str = "PLATE_IN_USE";

/// a individual customer could not be created or updated with
/// a given CPF because its already in use by another customer
pub static CPF_IN_USE: &str = "CPF_IN_USE";

/// a company customer could not be created or updated with
/// a given CNPJ because its already in use by another customer
pub static CNPJ_IN_USE: &str = "CNPJ_IN_USE";

/// a reservation could not be created or updated because its period
/// overlaps another reservation on the same vehicle
pub static RESERVATION_PERIOD_CONFLICT: &str = "RESERVATION_PERIOD_CONFLICT";

/// a vehicle or customer could not be deleted because
/// one or more reservations still reference it
pub static HAS_LINKED_RESERVATIONS: &str = "HAS_LINKED_RESERVATIONS";
