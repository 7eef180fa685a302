//! Command and Response models for the driver
//!
//! Parsed input lines and the JSON lines written back.

pub mod commands;
pub mod responses;

// Re-export commonly used types
pub use commands::{Command, CommandError};
pub use responses::{
    CountResponse, DeleteResponse, DumpResponse, ErrorResponse, GetResponse, PutResponse,
    Response, StatsResponse,
};
