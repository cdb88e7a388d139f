// app/src/web/handlers/mod.rs

// Declare handler modules
pub mod admin_handlers;
pub mod public_handlers;
