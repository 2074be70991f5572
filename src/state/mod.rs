pub mod app_state;
pub mod data_series;
pub mod settings;
