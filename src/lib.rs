//! Ontario home-buyer lead capture: hero page, resource catalog, lead form,
//! simulated email verification and a resource library, run as a four-step
//! client-side wizard (Rust + Yew + WASM).

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod lead;
pub mod resources;
pub mod services;
pub mod verification;
pub mod wizard;

pub use app::App;
