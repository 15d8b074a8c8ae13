pub mod app;
pub mod config;
pub mod demo;
pub mod export;
pub mod record;
pub mod schema;
pub mod state;
pub mod store;
pub mod view;
