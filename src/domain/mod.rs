//! Domain layer for the household-finance model.

pub mod models;
