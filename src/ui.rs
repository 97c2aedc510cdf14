// UI layer: renders the three sections and their forms in the terminal
// using `dialoguer`. Every prompt writes one named field of a draft; the
// submit itself is delegated to `Portal`.

use crate::api::RentalApi;
use crate::forms;
use crate::portal::{Alert, Portal};
use anyhow::Result;
use chrono::NaiveDate;
use crossterm::style::Stylize;
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt::Display;
use std::time::Duration;

pub const BANNER: &str = "GVK Car Rental Booking services portal,India";

/// Run `work` behind a spinner with the given message.
fn with_spinner<T>(msg: &'static str, work: impl FnOnce() -> T) -> T {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(msg);
    spinner.enable_steady_tick(Duration::from_millis(100));
    let out = work();
    spinner.finish_and_clear();
    out
}

/// Main interactive menu. Loads all three lists once, then loops until
/// the user chooses "Exit".
pub fn main_menu<A: RentalApi + Sync>(portal: &mut Portal<A>) -> Result<()> {
    println!("{}", BANNER.bold());
    with_spinner("Loading...", || portal.load_all());

    let items = [
        "Cars",
        "Add car",
        "Customers",
        "Add customer",
        "Bookings",
        "Add booking",
        "Reload all",
        "Exit",
    ];
    loop {
        let selection = Select::new().items(&items).default(0).interact()?;
        match selection {
            0 => print_list("Cars", &portal.cars.items),
            1 => {
                car_form(portal)?;
                let alert = with_spinner("Adding car...", || portal.submit_car());
                if let Some(alert) = alert {
                    show_alert(alert)?;
                }
            }
            2 => print_list("Customers", &portal.customers.items),
            3 => {
                customer_form(portal)?;
                let alert = with_spinner("Adding customer...", || portal.submit_customer());
                if let Some(alert) = alert {
                    show_alert(alert)?;
                }
            }
            4 => print_list("Bookings", &portal.bookings.items),
            5 => {
                booking_form(portal)?;
                let alert = with_spinner("Adding booking...", || portal.submit_booking());
                show_alert(alert)?;
            }
            6 => with_spinner("Loading...", || portal.load_all()),
            7 => break,
            _ => {}
        }
    }
    Ok(())
}

fn print_list<T: Display>(title: &str, items: &[T]) {
    println!("{}", title.bold());
    for item in items {
        println!("  - {}", item);
    }
}

/// Show the alert and block until it is acknowledged.
fn show_alert(alert: Alert) -> Result<()> {
    let styled = match alert {
        Alert::Success(_) => alert.message().green(),
        Alert::Failure(_) => alert.message().red(),
    };
    Select::new()
        .with_prompt(styled.to_string())
        .items(&["OK"])
        .default(0)
        .interact()?;
    Ok(())
}

/// Free text, pre-filled with the current draft value.
fn text(prompt: &str, initial: &str, required: bool) -> Result<String> {
    let value = Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(!required)
        .interact_text()?;
    Ok(value)
}

/// Text that must pass `check`, the analogue of a numeric input widget.
/// The raw text is returned; coercion happens at submit.
fn numeric(prompt: &str, initial: &str, check: impl Fn(&str) -> bool) -> Result<String> {
    let value = Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .validate_with(|input: &String| -> Result<(), &str> {
            if check(input.as_str()) {
                Ok(())
            } else {
                Err("Please enter a number")
            }
        })
        .interact_text()?;
    Ok(value)
}

fn date(prompt: &str, initial: &str) -> Result<String> {
    let value = Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .validate_with(|input: &String| -> Result<(), &str> {
            NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
                .map(|_| ())
                .map_err(|_| "Please enter a date as YYYY-MM-DD")
        })
        .interact_text()?;
    Ok(value)
}

fn car_form<A: RentalApi>(portal: &mut Portal<A>) -> Result<()> {
    let draft = &mut portal.cars.draft;
    let make = text("Make", &draft.make, true)?;
    draft.set("make", make)?;
    let model = text("Model", &draft.model, true)?;
    draft.set("model", model)?;
    let year = numeric("Year", &draft.year, |v| {
        forms::parse_int::<i32>("year", v).is_ok()
    })?;
    draft.set("year", year)?;
    let price = numeric("Price Per Day", &draft.price_per_day, |v| {
        forms::parse_decimal("pricePerDay", v).is_ok()
    })?;
    draft.set("pricePerDay", price)?;

    let choices = ["Available", "Not Available"];
    let current = if draft.available.coerce() { 0 } else { 1 };
    let picked = Select::new().items(&choices).default(current).interact()?;
    draft.set_available(picked == 0);

    let image = text("Image Path", &draft.image_path, false)?;
    draft.set("imagePath", image)?;
    Ok(())
}

fn customer_form<A: RentalApi>(portal: &mut Portal<A>) -> Result<()> {
    let draft = &mut portal.customers.draft;
    let name = text("Name", &draft.name, true)?;
    draft.set("name", name)?;
    let license = text("License Number", &draft.license_number, true)?;
    draft.set("licenseNumber", license)?;
    let phone = text("Phone", &draft.phone, false)?;
    draft.set("phone", phone)?;
    let email = text("Email", &draft.email, false)?;
    draft.set("email", email)?;
    Ok(())
}

/// Pick an id from a loaded list. With nothing loaded the selection stays
/// empty and the submit fails.
fn pick_id(prompt: &str, labels: &[String], ids: &[i64], current: &str) -> Result<String> {
    if ids.is_empty() {
        println!("{}", format!("{}: nothing loaded", prompt).yellow());
        return Ok(String::new());
    }
    let default = ids
        .iter()
        .position(|id| id.to_string() == current.trim())
        .unwrap_or(0);
    let picked = Select::new()
        .with_prompt(prompt)
        .items(labels)
        .default(default)
        .interact()?;
    Ok(ids[picked].to_string())
}

fn booking_form<A: RentalApi>(portal: &mut Portal<A>) -> Result<()> {
    let car_labels: Vec<String> = portal.cars.items.iter().map(|c| c.label()).collect();
    let car_ids: Vec<i64> = portal.cars.items.iter().map(|c| c.id).collect();
    let customer_labels: Vec<String> =
        portal.customers.items.iter().map(|c| c.name.clone()).collect();
    let customer_ids: Vec<i64> = portal.customers.items.iter().map(|c| c.id).collect();

    let draft = &mut portal.bookings.draft;
    let car_id = pick_id("Select Car", &car_labels, &car_ids, &draft.car_id)?;
    draft.set("carId", car_id)?;
    let customer_id = pick_id("Select Customer", &customer_labels, &customer_ids, &draft.customer_id)?;
    draft.set("customerId", customer_id)?;
    let start = date("Start date", &draft.start_date)?;
    draft.set("startDate", start)?;
    let end = date("End date", &draft.end_date)?;
    draft.set("endDate", end)?;
    Ok(())
}
