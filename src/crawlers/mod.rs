pub mod web;

pub use web::{build_client, fetch};
