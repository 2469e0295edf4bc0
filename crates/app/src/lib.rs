#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod log;
mod ongoing_workout;
mod service;
mod settings;

pub use ongoing_workout::*;
pub use service::*;
pub use settings::*;
