//! HTTP handler modules for the address book API.
//!
//! Handlers parse requests, open a storage session, delegate to
//! [`AddressService`](crate::service::AddressService), and return JSON
//! responses. No business logic lives in handlers.

pub mod addresses;
