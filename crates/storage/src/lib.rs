#![warn(clippy::pedantic)]

pub mod json_store;

pub use json_store::JsonStore;
