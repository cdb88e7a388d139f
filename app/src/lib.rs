// app/src/lib.rs

//! Panha Mall web application: public storefront and admin panel over a
//! [`panha_core::ProductStore`].

pub mod config;
pub mod db;
pub mod errors;
pub mod state;
pub mod web;
