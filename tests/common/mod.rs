//! In-memory `RentalApi` shared by the integration tests. Records every
//! call and the JSON it was sent.
#![allow(dead_code)]

use anyhow::{bail, Result};
use gvk_rental_cli::api::RentalApi;
use gvk_rental_cli::models::{
    BookedCar, BookedCustomer, Booking, Car, Customer, NewBooking, NewCar, NewCustomer,
};
use serde_json::Value;
use std::sync::Mutex;

#[derive(Default)]
pub struct Store {
    cars: Vec<Car>,
    customers: Vec<Customer>,
    bookings: Vec<Booking>,
    calls: Vec<String>,
    posted: Vec<Value>,
    lists_fail: bool,
}

#[derive(Default)]
pub struct FakeApi {
    store: Mutex<Store>,
}

impl FakeApi {
    pub fn calls(&self) -> Vec<String> {
        self.store.lock().unwrap().calls.clone()
    }

    pub fn posted(&self) -> Vec<Value> {
        self.store.lock().unwrap().posted.clone()
    }

    pub fn set_lists_fail(&self, fail: bool) {
        self.store.lock().unwrap().lists_fail = fail;
    }

    fn list<T: Clone>(&self, name: &str, pick: impl Fn(&Store) -> &Vec<T>) -> Result<Vec<T>> {
        let mut store = self.store.lock().unwrap();
        store.calls.push(format!("GET /{}", name));
        if store.lists_fail {
            bail!("connection refused");
        }
        Ok(pick(&*store).clone())
    }

    fn record_post(&self, store: &mut Store, name: &str, body: Value) -> i64 {
        store.calls.push(format!("POST /{}", name));
        store.posted.push(body);
        store.posted.len() as i64
    }
}

impl RentalApi for FakeApi {
    fn list_cars(&self) -> Result<Vec<Car>> {
        self.list("cars", |s| &s.cars)
    }

    fn create_car(&self, car: &NewCar) -> Result<Car> {
        let mut store = self.store.lock().unwrap();
        let id = self.record_post(&mut store, "cars", serde_json::to_value(car)?);
        let created = Car {
            id,
            make: car.make.clone(),
            model: car.model.clone(),
            year: car.year,
            price_per_day: car.price_per_day,
            available: car.available,
            image_path: Some(car.image_path.clone()),
        };
        store.cars.push(created.clone());
        Ok(created)
    }

    fn list_customers(&self) -> Result<Vec<Customer>> {
        self.list("customers", |s| &s.customers)
    }

    fn create_customer(&self, customer: &NewCustomer) -> Result<Customer> {
        let mut store = self.store.lock().unwrap();
        let id = self.record_post(&mut store, "customers", serde_json::to_value(customer)?);
        let created = Customer {
            id,
            name: customer.name.clone(),
            license_number: customer.license_number.clone(),
            phone: Some(customer.phone.clone()),
            email: Some(customer.email.clone()),
        };
        store.customers.push(created.clone());
        Ok(created)
    }

    fn list_bookings(&self) -> Result<Vec<Booking>> {
        self.list("bookings", |s| &s.bookings)
    }

    fn create_booking(&self, booking: &NewBooking) -> Result<Booking> {
        let mut store = self.store.lock().unwrap();
        let id = self.record_post(&mut store, "bookings", serde_json::to_value(booking)?);
        let created = Booking {
            id,
            car: Some(BookedCar {
                id: Some(booking.car.id),
                ..BookedCar::default()
            }),
            customer: Some(BookedCustomer {
                id: Some(booking.customer.id),
                ..BookedCustomer::default()
            }),
            start_date: booking.start_date.clone(),
            end_date: booking.end_date.clone(),
            total_price: booking.total_price,
        };
        store.bookings.push(created.clone());
        Ok(created)
    }
}
