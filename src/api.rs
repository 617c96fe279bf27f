pub mod time_srv;
