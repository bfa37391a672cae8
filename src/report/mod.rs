pub mod console;
pub mod junit;
pub mod report_model;
