pub mod api;
pub mod intl;
pub mod ui;
