//! # phobo-client
//!
//! Leptos + WASM client-side shell for the Pho Bo social network.
//!
//! This crate routes between the welcome, login, and home views and
//! composes each view from shared presentational components. All content
//! shown is static/mock: there is no server, no persisted state, and no
//! data layer behind the UI.

pub mod app;
pub mod components;
pub mod feed;
pub mod pages;
pub mod routes;
