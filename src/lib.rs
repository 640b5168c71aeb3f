pub mod command;
pub mod identity;
pub mod logging;
pub mod paths;
pub mod prompt;
pub mod roles;
pub mod store;
pub mod ui;
