// Library root
// -----------
// This crate exposes a small library surface for the rental portal. The
// binary (`main.rs`) wires these modules into the interactive CLI.
//
// Module responsibilities:
// - `config`: resolves the API base URL once at startup.
// - `models`: car, customer and booking records as they travel as JSON.
// - `forms`: draft forms and the coercion from typed text to payloads.
// - `api`: HTTP calls to the rental backend behind the `RentalApi` trait.
// - `portal`: the three (list, draft) slices and the submit operations.
// - `ui`: terminal rendering and prompts; delegates to `portal`.
//
// The trait seam in `api` lets `portal` be driven without a server, which
// is how the tests exercise it.
pub mod api;
pub mod config;
pub mod forms;
pub mod models;
pub mod portal;
pub mod ui;
