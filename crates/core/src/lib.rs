//! Core business logic for Saku.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `auth` - Password hashing and credential rules
//! - `ledger` - Entry kinds and input validation
//! - `summary` - Monthly aggregation and derived financial metrics
//! - `budget` - Budget-vs-actual comparison

pub mod auth;
pub mod budget;
pub mod ledger;
pub mod summary;
