//! Client-side behavior for the Smart Automotive POS marketing site: tab
//! navigation with deep links, persisted locale switching with
//! latest-wins translation loading, call-to-action buttons, a logo
//! fallback, scroll reveal and the contact form.

pub mod actions;
pub mod components;
pub mod config;
pub mod error;
pub mod i18n;
pub mod nav;
pub mod page;
pub mod storage;
pub mod web;

pub use web::start;
