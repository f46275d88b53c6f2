pub mod anim;
pub mod app;
pub mod components;
pub mod config;
pub mod layout;
pub mod metrics;
pub mod store;
pub mod surface;
pub mod theme;
