//! HTTP handlers

pub mod animal;
pub mod comparison;
pub mod facts;
pub mod health;
