//! jobledger - company and job record service
//!
//! Library half of the binary; every module is public so integration tests
//! can drive storage and the router directly.

pub mod entities;
pub mod errors;
pub mod settings;
pub mod storage;
pub mod web;
