#![allow(dead_code)]

pub mod fake_driver;
pub mod stub_server;
pub mod toolshop;
