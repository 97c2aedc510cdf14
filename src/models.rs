// Wire records exchanged with the rental API. Field names follow the
// backend's camelCase JSON; ids are server-assigned.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A car as returned by `GET /cars` and `POST /cars`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price_per_day: f64,
    pub available: bool,
    #[serde(default)]
    pub image_path: Option<String>,
}

/// Body of `POST /cars`: a car without its id, already coerced.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewCar {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price_per_day: f64,
    pub available: bool,
    pub image_path: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub license_number: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Body of `POST /customers`. The draft is posted verbatim, so optional
/// fields travel as empty strings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub name: String,
    pub license_number: String,
    pub phone: String,
    pub email: String,
}

/// Nested car inside a booking. Only the display fields are relied on.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct BookedCar {
    pub id: Option<i64>,
    pub make: String,
    pub model: String,
}

/// Nested customer inside a booking.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct BookedCustomer {
    pub id: Option<i64>,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    #[serde(default)]
    pub car: Option<BookedCar>,
    #[serde(default)]
    pub customer: Option<BookedCustomer>,
    pub start_date: String,
    pub end_date: String,
    pub total_price: f64,
}

/// `{ "id": n }` reference used when posting a booking.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct IdRef {
    pub id: i64,
}

/// Body of `POST /bookings`. Dates are the raw `YYYY-MM-DD` strings from
/// the draft; `total_price` is computed client-side.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub car: IdRef,
    pub customer: IdRef,
    pub start_date: String,
    pub end_date: String,
    pub total_price: f64,
}

impl Car {
    /// Short label used when picking a car for a booking.
    pub fn label(&self) -> String {
        format!("{} {} ({})", self.make, self.model, self.year)
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.available { "Available" } else { "Not Available" };
        write!(f, "{} - ${}/day - {}", self.label(), self.price_per_day, status)
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - License: {}", self.name, self.license_number)
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let customer = self.customer.as_ref().map(|c| c.name.as_str()).unwrap_or("");
        let (make, model) = self
            .car
            .as_ref()
            .map(|c| (c.make.as_str(), c.model.as_str()))
            .unwrap_or(("", ""));
        write!(
            f,
            "Booking #{}: {} booked {} {} from {} to {} - Total: ${:.2}",
            self.id, customer, make, model, self.start_date, self.end_date, self.total_price
        )
    }
}
