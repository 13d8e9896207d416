pub mod types;
pub mod wigle_service;
