pub mod common;
pub mod render;
pub mod report;
pub mod resolve;
pub mod state;
pub mod storage;

pub mod server;
