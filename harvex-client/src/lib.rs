pub mod config;
pub mod controller;
pub mod debounce;
pub mod fragment;
pub mod transport;

pub use controller::DataSourceListController;
