pub mod config;
pub mod diagnostics;
pub mod directory;
pub mod fetch;
pub mod lookup;
pub mod process;
pub mod session;
