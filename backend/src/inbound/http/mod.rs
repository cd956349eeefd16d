//! HTTP inbound adapter exposing REST endpoints.

pub mod crud;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod users;
