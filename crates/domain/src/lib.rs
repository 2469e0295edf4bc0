#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod catalog;
mod energy;
mod error;
mod exercise;
mod generator;
mod muscle_group;
mod runner;
mod service;
mod units;
mod user;
mod workout;

pub use catalog::*;
pub use energy::*;
pub use error::*;
pub use exercise::*;
pub use generator::*;
pub use muscle_group::*;
pub use runner::*;
pub use service::*;
pub use units::*;
pub use user::*;
pub use workout::*;
