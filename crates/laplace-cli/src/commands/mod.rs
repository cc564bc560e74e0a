mod args;
pub mod config;
pub mod encode;
pub mod info;
