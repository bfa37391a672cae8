//! Page-object end-to-end tests for the Practice Software Testing toolshop.
//!
//! Scenarios drive page objects, page objects drive a [`browser::driver::Driver`],
//! and the shipped driver is a W3C WebDriver client ([`browser::session::BrowserSession`]).

pub mod browser;
pub mod cli;
pub mod data;
pub mod error;
pub mod pages;
pub mod report;
pub mod suite;
