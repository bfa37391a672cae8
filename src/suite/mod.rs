pub mod fixture;
pub mod result;
pub mod runner;
pub mod scenario;
