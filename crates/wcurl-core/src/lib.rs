pub mod config;
pub mod logging;

pub mod capability;
pub mod command;
pub mod invocation;
pub mod url_model;

pub use capability::{Capabilities, CurlVersion};
pub use command::{hand_off, CurlCommand};
pub use invocation::{ArgsError, Invocation};
