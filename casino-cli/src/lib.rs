pub mod args;
pub mod frame;
pub mod logging;
