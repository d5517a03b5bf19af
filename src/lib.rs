//! `v9sh`: a browser console for the Vector Nine site.
//!
//! The [`core`] module holds the console logic and has no browser
//! dependencies; [`services`], [`components`] and [`app`] wire it to the
//! DOM, localStorage and the completion proxy.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod services;
pub mod utils;
