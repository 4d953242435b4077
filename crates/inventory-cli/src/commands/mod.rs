pub mod demo;
pub mod misc;
pub mod reports;
pub mod stock;
