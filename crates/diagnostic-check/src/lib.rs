//! Inspector for pull diagnostics messages: decodes a captured JSON message as
//! one of the protocol shapes, checks it and reports what it contains.

pub mod config;
pub mod inspect;
pub mod input;
