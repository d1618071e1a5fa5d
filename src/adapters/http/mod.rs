//! HTTP adapter exposing the mortgage service as a JSON API.

pub mod mortgage_http;

pub use mortgage_http::{ErrorResponse, LoanResponse, MortgageHttpServer};
