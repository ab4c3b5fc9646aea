pub mod api;
pub mod charts;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod models;
pub mod notify;
pub mod pagination;
pub mod panels;
pub mod preferences;
pub mod repository;
pub mod schedule;
pub mod seeds;
pub mod state;
pub mod store;
pub mod views;
