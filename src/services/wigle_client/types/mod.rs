pub mod wigle_search_response;
pub mod wigle_service_error;
