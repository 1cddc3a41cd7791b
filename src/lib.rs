//! Overhead Allocation Engine
//!
//! This crate redistributes a day's shared travel or break minutes across that
//! day's work records in proportion to hours worked, recomputes billable hours
//! to the billing increment, and summarises the effect per client, for a
//! single day or a date range. Storage is reached through
//! [`repository::RecordRepository`].

#![warn(missing_docs)]

pub mod allocation;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
