//! Ledger library
//!
//! Personal bookkeeping on a local SQLite file: users, income/expense
//! records, monthly statistics, budgets, reminders and CSV transfer.
//! The `ledger` binary is a thin wrapper around [`commands::run`].

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod database;
pub mod error;
pub mod services;
pub mod storage;
