pub mod commands;
mod database;
mod email;
pub mod environment;
