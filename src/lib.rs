#![doc = "The `tasknest` library crate."]
#![doc = ""]
#![doc = "This crate contains the core business logic, domain models, authentication"]
#![doc = "mechanisms, persistence contracts, routing configuration, and error handling"]
#![doc = "for the TaskNest application. It is used by the main binary (`main.rs`) to"]
#![doc = "construct and run the application."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;

// lib.rs primarily declares modules for the library crate. The application
// bootstrap (server construction, store selection) lives in main.rs so the
// library stays usable from integration tests with any store implementation.
