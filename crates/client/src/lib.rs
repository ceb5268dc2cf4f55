//! Marquee browsing client.
//!
//! The single-page catalog browser, re-architected from ambient globals into
//! an explicit state container: every mutation flows through
//! [`app::ClientApp::dispatch`] as a named [`app::Action`], and rendering is a
//! deterministic mapping from the current state to HTML fragments. Timers
//! (search debounce, hero auto-advance) are explicit cancellable resources
//! that feed actions back through the same dispatch path.

pub mod app;
pub mod config;
pub mod fetch;
pub mod hero;
pub mod overlay;
pub mod runtime;
pub mod store;
pub mod timer;
pub mod view;
