pub mod conf;
pub mod display;
pub mod fetch;
pub mod models;
