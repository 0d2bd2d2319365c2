//! tests/api/main.rs

mod health_check;
mod submit_contact;
