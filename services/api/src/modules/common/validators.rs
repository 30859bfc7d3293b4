use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches:
    /// - mercosul vehicle plates (format: AAA9A99)
    /// - brazilian vehicle plates (format: AAA-9999 or AAA9999)
    pub static ref REGEX_IS_MERCOSUL_OR_BR_VEHICLE_PLATE: Regex =
        Regex::new(r"^[A-Za-z]{3}-?[0-9][A-Za-z0-9][0-9]{2}$").unwrap();
    /// Matches a CPF, either formatted (999.999.999-99) or as 11 plain digits
    pub static ref REGEX_IS_CPF: Regex =
        Regex::new(r"^(\d{3}\.\d{3}\.\d{3}-\d{2}|\d{11})$").unwrap();
    /// Matches a CNPJ, either formatted (99.999.999/9999-99) or as 14 plain digits
    pub static ref REGEX_IS_CNPJ: Regex =
        Regex::new(r"^(\d{2}\.\d{3}\.\d{3}/\d{4}-\d{2}|\d{14})$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plate_regex_accepts_both_formats() {
        assert!(REGEX_IS_MERCOSUL_OR_BR_VEHICLE_PLATE.is_match("BRA2E19"));
        assert!(REGEX_IS_MERCOSUL_OR_BR_VEHICLE_PLATE.is_match("ABC-1234"));
        assert!(REGEX_IS_MERCOSUL_OR_BR_VEHICLE_PLATE.is_match("ABC1234"));
        assert!(!REGEX_IS_MERCOSUL_OR_BR_VEHICLE_PLATE.is_match("1234ABC"));
        assert!(!REGEX_IS_MERCOSUL_OR_BR_VEHICLE_PLATE.is_match("AB12345"));
    }

    #[test]
    fn cpf_regex_accepts_formatted_and_plain() {
        assert!(REGEX_IS_CPF.is_match("123.456.789-09"));
        assert!(REGEX_IS_CPF.is_match("12345678909"));
        assert!(!REGEX_IS_CPF.is_match("123.456.789"));
        assert!(!REGEX_IS_CPF.is_match("123456789090"));
    }

    #[test]
    fn cnpj_regex_accepts_formatted_and_plain() {
        assert!(REGEX_IS_CNPJ.is_match("12.345.678/0001-95"));
        assert!(REGEX_IS_CNPJ.is_match("12345678000195"));
        assert!(!REGEX_IS_CNPJ.is_match("12.345.678/0001"));
    }
}
