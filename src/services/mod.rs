pub mod wigle_client;
