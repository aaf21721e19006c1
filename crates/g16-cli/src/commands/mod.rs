pub mod config;
pub mod demo;
pub mod key;
pub mod verify;
