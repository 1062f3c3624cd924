// Request handlers for the web boundary.

pub mod upload;
