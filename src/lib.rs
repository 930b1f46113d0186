//! Social Insurance Premium Engine for the Kanagawa Kyokai Kenpo schedule.
//!
//! This crate computes the employee share of monthly health, long-term-care
//! and employees' pension premiums, plus the resulting take-home pay, from a
//! gross monthly salary and a birth date, against the March 2025 Kanagawa
//! premium schedule (standard-remuneration grade bands).

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod models;
pub mod table;
