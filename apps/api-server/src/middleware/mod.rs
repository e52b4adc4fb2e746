//! Request middleware: authentication extraction and error translation.

pub mod auth;
pub mod error;
