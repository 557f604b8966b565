pub mod args;
pub mod config;
pub mod dir;
pub mod gui;
pub mod home;
pub mod logger;
pub mod login;

pub use signin::VERSION;
