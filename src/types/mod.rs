pub mod app_config;
pub mod search_request;
pub mod venue;
