//! Library crate for the club backend, exposing modules for binaries and integration tests.

pub mod dao;
pub mod dto;
pub mod error;
pub mod routes;
pub mod services;
pub mod state;
