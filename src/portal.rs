// View/controller state for the portal. Three independent slices, one
// per entity type, each a loaded list plus a draft form. The UI reads the
// slices to render and calls the submit operations; errors never become
// state, they come back as a transient `Alert`.

use crate::api::RentalApi;
use crate::forms::{BookingForm, CarForm, CustomerForm};
use crate::models::{Booking, Car, Customer};
use anyhow::Result;
use std::thread;

pub const CAR_FAILED: &str = "Error adding car";
pub const CUSTOMER_FAILED: &str = "Error adding customer";
pub const BOOKING_FAILED: &str = "Failed to add booking";
pub const BOOKING_SUCCEEDED: &str = "Booking successful!";

/// A blocking message the UI must show and have acknowledged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert {
    Success(&'static str),
    Failure(&'static str),
}

impl Alert {
    pub fn message(&self) -> &'static str {
        match self {
            Alert::Success(m) | Alert::Failure(m) => m,
        }
    }
}

/// One entity's list and draft.
#[derive(Debug, Clone)]
pub struct Slice<E, F> {
    pub items: Vec<E>,
    pub draft: F,
}

impl<E, F: Default> Default for Slice<E, F> {
    fn default() -> Self {
        Slice {
            items: Vec::new(),
            draft: F::default(),
        }
    }
}

pub struct Portal<A> {
    api: A,
    pub cars: Slice<Car, CarForm>,
    pub customers: Slice<Customer, CustomerForm>,
    pub bookings: Slice<Booking, BookingForm>,
}

/// Replace the list on success; on failure log and keep what was there.
fn apply<T>(what: &str, items: &mut Vec<T>, result: Result<Vec<T>>) {
    match result {
        Ok(loaded) => {
            log::debug!("loaded {} {}", loaded.len(), what);
            *items = loaded;
        }
        Err(e) => log::error!("failed to load {}: {:#}", what, e),
    }
}

impl<A: RentalApi> Portal<A> {
    /// Fresh portal with empty lists and default drafts. Nothing is
    /// fetched until `load_all`.
    pub fn new(api: A) -> Self {
        Portal {
            api,
            cars: Slice::default(),
            customers: Slice::default(),
            bookings: Slice::default(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn load_cars(&mut self) {
        apply("cars", &mut self.cars.items, self.api.list_cars());
    }

    pub fn load_customers(&mut self) {
        apply("customers", &mut self.customers.items, self.api.list_customers());
    }

    pub fn load_bookings(&mut self) {
        apply("bookings", &mut self.bookings.items, self.api.list_bookings());
    }

    /// Coerce the car draft, post it, then reset the draft and reload the
    /// list. The draft is kept when anything fails.
    pub fn submit_car(&mut self) -> Option<Alert> {
        let result = self
            .cars
            .draft
            .to_payload()
            .map_err(anyhow::Error::from)
            .and_then(|car| self.api.create_car(&car));
        match result {
            Ok(car) => {
                log::info!("created car #{} {}", car.id, car.label());
                self.cars.draft = CarForm::default();
                self.load_cars();
                None
            }
            Err(e) => {
                log::error!("adding car failed: {:#}", e);
                Some(Alert::Failure(CAR_FAILED))
            }
        }
    }

    pub fn submit_customer(&mut self) -> Option<Alert> {
        match self.api.create_customer(&self.customers.draft.to_payload()) {
            Ok(customer) => {
                log::info!("created customer #{} {}", customer.id, customer.name);
                self.customers.draft = CustomerForm::default();
                self.load_customers();
                None
            }
            Err(e) => {
                log::error!("adding customer failed: {:#}", e);
                Some(Alert::Failure(CUSTOMER_FAILED))
            }
        }
    }

    /// Price the booking from the loaded car list and post it. A car id
    /// with no loaded match ends in the failure alert like any other error.
    pub fn submit_booking(&mut self) -> Alert {
        let result = self
            .bookings
            .draft
            .to_payload(&self.cars.items)
            .map_err(anyhow::Error::from)
            .and_then(|booking| self.api.create_booking(&booking));
        match result {
            Ok(booking) => {
                log::info!("created booking #{} total {:.2}", booking.id, booking.total_price);
                self.bookings.draft = BookingForm::default();
                self.load_bookings();
                Alert::Success(BOOKING_SUCCEEDED)
            }
            Err(e) => {
                log::error!("adding booking failed: {:#}", e);
                Alert::Failure(BOOKING_FAILED)
            }
        }
    }
}

impl<A: RentalApi + Sync> Portal<A> {
    /// Issue the three list-loads at once. Each thread writes only its own
    /// slice, so the borrows are disjoint and no lock is involved; the
    /// completion order is unspecified.
    pub fn load_all(&mut self) {
        let api = &self.api;
        let cars = &mut self.cars.items;
        let customers = &mut self.customers.items;
        let bookings = &mut self.bookings.items;
        thread::scope(|s| {
            s.spawn(move || apply("cars", cars, api.list_cars()));
            s.spawn(move || apply("customers", customers, api.list_customers()));
            s.spawn(move || apply("bookings", bookings, api.list_bookings()));
        });
    }
}
