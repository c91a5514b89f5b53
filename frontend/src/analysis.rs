pub mod analysis_options;
pub mod api;
pub mod components;
pub mod controller;
