#![deny(clippy::all, clippy::pedantic)]

pub mod publicize;
pub mod settings;
pub mod site;
