// API client module: a small blocking HTTP client for the rental API.
// Six calls in total, list and create for each of cars, customers and
// bookings, all against `{base_url}/{resource}`. No retries and no
// timeouts; any transport or status error goes straight to the caller.

use crate::config::Config;
use crate::models::{Booking, Car, Customer, NewBooking, NewCar, NewCustomer};
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// The operations the portal needs from the backend. `ApiClient` is the
/// HTTP implementation; tests substitute an in-memory one.
pub trait RentalApi {
    fn list_cars(&self) -> Result<Vec<Car>>;
    fn create_car(&self, car: &NewCar) -> Result<Car>;
    fn list_customers(&self) -> Result<Vec<Customer>>;
    fn create_customer(&self, customer: &NewCustomer) -> Result<Customer>;
    fn list_bookings(&self) -> Result<Vec<Booking>>;
    fn create_booking(&self, booking: &NewBooking) -> Result<Booking>;
}

/// Holds a reqwest blocking client and the base URL of the rental API.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of a resource collection, e.g. `{base}/cars`.
    pub fn url(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url, resource)
    }

    /// GET the collection and parse the JSON array.
    fn list<T: DeserializeOwned>(&self, resource: &str) -> Result<Vec<T>> {
        let url = self.url(resource);
        let res = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("Failed to send GET {}", url))?
            .error_for_status()
            .with_context(|| format!("GET {} failed", url))?;
        let items: Vec<T> = res
            .json()
            .with_context(|| format!("Parsing {} response json", resource))?;
        log::debug!("GET {} returned {} records", url, items.len());
        Ok(items)
    }

    /// POST the payload as JSON and parse the created record.
    fn create<B: Serialize, T: DeserializeOwned>(&self, resource: &str, body: &B) -> Result<T> {
        let url = self.url(resource);
        let res = self
            .client
            .post(&url)
            .json(body)
            .send()
            .with_context(|| format!("Failed to send POST {}", url))?
            .error_for_status()
            .with_context(|| format!("POST {} failed", url))?;
        let created: T = res
            .json()
            .with_context(|| format!("Parsing created {} json", resource))?;
        log::info!("POST {} succeeded", url);
        Ok(created)
    }
}

impl RentalApi for ApiClient {
    fn list_cars(&self) -> Result<Vec<Car>> {
        self.list("cars")
    }

    fn create_car(&self, car: &NewCar) -> Result<Car> {
        self.create("cars", car)
    }

    fn list_customers(&self) -> Result<Vec<Customer>> {
        self.list("customers")
    }

    fn create_customer(&self, customer: &NewCustomer) -> Result<Customer> {
        self.create("customers", customer)
    }

    fn list_bookings(&self) -> Result<Vec<Booking>> {
        self.list("bookings")
    }

    fn create_booking(&self, booking: &NewBooking) -> Result<Booking> {
        self.create("bookings", booking)
    }
}
