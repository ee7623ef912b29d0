//! # API crate: REST client for the academy backend
//!
//! Every page of the console talks to the backend through [`ApiClient`]. The
//! backend owns all state; this crate only issues requests and decodes the
//! JSON into the record types from the `store` crate.
//!
//! ## Endpoints
//!
//! | Method | Path | Client call |
//! |--------|------|-------------|
//! | `GET` | `/students/` | [`ApiClient::list_people`] |
//! | `GET` | `/students/{id}` | [`ApiClient::get_person`], [`ApiClient::find_person`] |
//! | `POST` | `/user` | [`ApiClient::create_person`] |
//! | `PUT` | `/students/{id}` | [`ApiClient::update_person`] |
//! | `DELETE` | `/students/{id}` | [`ApiClient::delete_person`] |
//! | `GET` | `/students/{id}/payments` | [`ApiClient::list_student_payments`] |
//! | `GET` | `/payments` | [`ApiClient::list_payments`] |
//! | `POST` | `/payments` | [`ApiClient::create_payment`] |
//! | `GET` | `/dashboard/stats` | [`ApiClient::dashboard_stats`] |
//!
//! Collection endpoints answer `{ "data": [...] }`; a bare array is accepted
//! too. Failures come back as [`ApiError`], which carries the backend's
//! `detail` message when there is one.

mod client;
mod error;

pub use client::ApiClient;
pub use error::ApiError;

pub use store::{DashboardStats, NewPayment, NewPerson, Payment, Person};
