//! HTTP/JSON API server for the address book.
//!
//! Stores city names with coordinates and answers "which addresses are within
//! N km of this point" by asking an external distance matrix API. This crate
//! contains the server framework, API schema types, error handling, the
//! distance client and route definitions.

pub mod config;
pub mod distance;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
