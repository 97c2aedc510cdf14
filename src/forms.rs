//! Draft forms for the three entity types.
//!
//! A draft holds exactly what the user typed. Each keystroke or selection
//! updates one named field through `set`; nothing is validated there. The
//! typed payload is produced at submit time by an explicit coercion step:
//!
//! | field          | rule                                                   |
//! |----------------|--------------------------------------------------------|
//! | `year`         | trimmed text parsed as a base-10 `i32`                 |
//! | `pricePerDay`  | trimmed text parsed as a finite `f64`                  |
//! | `available`    | literal `true`, or the exact text `"true"`; else false |
//! | `carId` etc.   | trimmed text parsed as an `i64` id                     |
//! | dates          | `YYYY-MM-DD`; the raw text is what gets posted         |

use crate::models::{Car, IdRef, NewBooking, NewCar, NewCustomer};
use chrono::NaiveDate;
use std::fmt;

/// Errors raised while turning a draft into a payload.
#[derive(Debug, Clone, PartialEq)]
pub enum FormError {
    /// `set` was called with a name the form does not have.
    UnknownField(String),
    /// Field expected an integer.
    InvalidInteger { field: &'static str, value: String },
    /// Field expected a decimal number.
    InvalidDecimal { field: &'static str, value: String },
    /// Field expected a `YYYY-MM-DD` date.
    InvalidDate { field: &'static str, value: String },
    /// The selected car id is not in the loaded car list.
    CarNotFound(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::UnknownField(name) => write!(f, "unknown form field: {}", name),
            FormError::InvalidInteger { field, value } => {
                write!(f, "{} is not an integer: {:?}", field, value)
            }
            FormError::InvalidDecimal { field, value } => {
                write!(f, "{} is not a number: {:?}", field, value)
            }
            FormError::InvalidDate { field, value } => {
                write!(f, "{} is not a date: {:?}", field, value)
            }
            FormError::CarNotFound(id) => write!(f, "no loaded car matches id {:?}", id),
        }
    }
}

impl std::error::Error for FormError {}

/// The `available` selector can hold either a literal flag or the text the
/// widget produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Flag {
    Bool(bool),
    Text(String),
}

impl Flag {
    pub fn coerce(&self) -> bool {
        match self {
            Flag::Bool(b) => *b,
            Flag::Text(t) => t == "true",
        }
    }
}

impl Default for Flag {
    fn default() -> Self {
        Flag::Bool(true)
    }
}

pub fn parse_int<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T, FormError> {
    value.trim().parse().map_err(|_| FormError::InvalidInteger {
        field,
        value: value.to_string(),
    })
}

/// Finite decimals only: `NaN` and the infinities parse as `f64` but
/// have no JSON representation.
pub fn parse_decimal(field: &'static str, value: &str) -> Result<f64, FormError> {
    match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(FormError::InvalidDecimal {
            field,
            value: value.to_string(),
        }),
    }
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, FormError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| FormError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Inclusive day count between two calendar dates. Not guarded: an end
/// before the start yields zero or a negative count.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CarForm {
    pub make: String,
    pub model: String,
    pub year: String,
    pub price_per_day: String,
    pub available: Flag,
    pub image_path: String,
}

impl CarForm {
    /// Update one field by its wire name.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> Result<(), FormError> {
        let value = value.into();
        match field {
            "make" => self.make = value,
            "model" => self.model = value,
            "year" => self.year = value,
            "pricePerDay" => self.price_per_day = value,
            "available" => self.available = Flag::Text(value),
            "imagePath" => self.image_path = value,
            other => return Err(FormError::UnknownField(other.to_string())),
        }
        Ok(())
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = Flag::Bool(available);
    }

    pub fn to_payload(&self) -> Result<NewCar, FormError> {
        Ok(NewCar {
            make: self.make.clone(),
            model: self.model.clone(),
            year: parse_int("year", &self.year)?,
            price_per_day: parse_decimal("pricePerDay", &self.price_per_day)?,
            available: self.available.coerce(),
            image_path: self.image_path.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomerForm {
    pub name: String,
    pub license_number: String,
    pub phone: String,
    pub email: String,
}

impl CustomerForm {
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> Result<(), FormError> {
        let value = value.into();
        match field {
            "name" => self.name = value,
            "licenseNumber" => self.license_number = value,
            "phone" => self.phone = value,
            "email" => self.email = value,
            other => return Err(FormError::UnknownField(other.to_string())),
        }
        Ok(())
    }

    /// Customers need no coercion: the draft is posted as typed.
    pub fn to_payload(&self) -> NewCustomer {
        NewCustomer {
            name: self.name.clone(),
            license_number: self.license_number.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookingForm {
    pub car_id: String,
    pub customer_id: String,
    pub start_date: String,
    pub end_date: String,
}

impl BookingForm {
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> Result<(), FormError> {
        let value = value.into();
        match field {
            "carId" => self.car_id = value,
            "customerId" => self.customer_id = value,
            "startDate" => self.start_date = value,
            "endDate" => self.end_date = value,
            other => return Err(FormError::UnknownField(other.to_string())),
        }
        Ok(())
    }

    /// Price the draft against the already-loaded cars and build the
    /// payload. The car must be present in `cars`; the customer id is
    /// passed through without a lookup.
    pub fn to_payload(&self, cars: &[Car]) -> Result<NewBooking, FormError> {
        let car = self
            .car_id
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|id| cars.iter().find(|c| c.id == id))
            .ok_or_else(|| FormError::CarNotFound(self.car_id.clone()))?;
        let start = parse_date("startDate", &self.start_date)?;
        let end = parse_date("endDate", &self.end_date)?;
        let days = days_inclusive(start, end);

        Ok(NewBooking {
            car: IdRef { id: car.id },
            customer: IdRef {
                id: parse_int("customerId", &self.customer_id)?,
            },
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            total_price: car.price_per_day * days as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(id: i64, price: f64) -> Car {
        Car {
            id,
            make: "Hyundai".into(),
            model: "Creta".into(),
            year: 2021,
            price_per_day: price,
            available: true,
            image_path: None,
        }
    }

    fn booking(car_id: &str, start: &str, end: &str) -> BookingForm {
        BookingForm {
            car_id: car_id.into(),
            customer_id: "4".into(),
            start_date: start.into(),
            end_date: end.into(),
        }
    }

    #[test]
    fn car_draft_defaults_to_available() {
        let form = CarForm::default();
        assert_eq!(form.available, Flag::Bool(true));
        assert!(form.year.is_empty());
    }

    #[test]
    fn car_payload_coerces_numbers_and_flag() {
        let mut form = CarForm::default();
        form.set("make", "Mahindra").unwrap();
        form.set("model", "Thar").unwrap();
        form.set("year", " 2023 ").unwrap();
        form.set("pricePerDay", "72.25").unwrap();
        form.set("available", "false").unwrap();

        let payload = form.to_payload().unwrap();
        assert_eq!(payload.year, 2023);
        assert_eq!(payload.price_per_day, 72.25);
        assert!(!payload.available);
        assert_eq!(payload.image_path, "");
    }

    #[test]
    fn available_accepts_literal_or_text_true() {
        assert!(Flag::Bool(true).coerce());
        assert!(Flag::Text("true".into()).coerce());
        assert!(!Flag::Text("TRUE".into()).coerce());
        assert!(!Flag::Text(String::new()).coerce());
    }

    #[test]
    fn bad_year_is_rejected() {
        let mut form = CarForm::default();
        form.set("year", "twenty").unwrap();
        form.set("pricePerDay", "10").unwrap();
        assert!(matches!(
            form.to_payload(),
            Err(FormError::InvalidInteger { field: "year", .. })
        ));
    }

    #[test]
    fn non_finite_price_is_rejected() {
        for text in ["NaN", "inf", "-infinity", "Infinity"] {
            let mut form = CarForm::default();
            form.set("year", "2020").unwrap();
            form.set("pricePerDay", text).unwrap();
            assert_eq!(
                form.to_payload(),
                Err(FormError::InvalidDecimal {
                    field: "pricePerDay",
                    value: text.to_string(),
                })
            );
        }
        assert_eq!(parse_decimal("pricePerDay", " 19.99 "), Ok(19.99));
    }

    #[test]
    fn literal_unavailable_flag_reaches_payload() {
        let mut form = CarForm::default();
        form.set("year", "2018").unwrap();
        form.set("pricePerDay", "30").unwrap();
        form.set_available(false);
        assert!(!form.to_payload().unwrap().available);
    }

    #[test]
    fn unknown_field_leaves_draft_untouched() {
        let mut form = CustomerForm::default();
        assert_eq!(
            form.set("age", "30"),
            Err(FormError::UnknownField("age".into()))
        );
        assert_eq!(form, CustomerForm::default());
    }

    #[test]
    fn same_day_booking_costs_one_day() {
        let payload = booking("1", "2024-03-10", "2024-03-10")
            .to_payload(&[car(1, 42.0)])
            .unwrap();
        assert_eq!(payload.total_price, 42.0);
    }

    #[test]
    fn three_day_booking_total() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        assert_eq!(days_inclusive(start, end), 3);

        let payload = booking("1", "2024-01-01", "2024-01-03")
            .to_payload(&[car(1, 50.0)])
            .unwrap();
        assert_eq!(payload.total_price, 150.0);
        assert_eq!(payload.car.id, 1);
        assert_eq!(payload.customer.id, 4);
        assert_eq!(payload.start_date, "2024-01-01");
    }

    #[test]
    fn reversed_dates_are_not_guarded() {
        let payload = booking("1", "2024-01-05", "2024-01-03")
            .to_payload(&[car(1, 10.0)])
            .unwrap();
        assert_eq!(payload.total_price, -10.0);
    }

    #[test]
    fn missing_car_is_an_error() {
        let err = booking("99", "2024-01-01", "2024-01-02")
            .to_payload(&[car(1, 10.0)])
            .unwrap_err();
        assert_eq!(err, FormError::CarNotFound("99".into()));

        let err = booking("", "2024-01-01", "2024-01-02")
            .to_payload(&[])
            .unwrap_err();
        assert_eq!(err, FormError::CarNotFound(String::new()));
    }
}
