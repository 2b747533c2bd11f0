pub mod pages;
pub mod telemetry;
