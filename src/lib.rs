#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Terminal credit card payment form with inline validation.

pub mod config;
pub mod form;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod tui;
