//! Data Access Layer: implementations of [dal_api::Quake3ServerEvents], feeding Quake 3 server events
//! out of any line-oriented source -- files, the standard input or in-memory buffers.

pub mod factory;
pub mod sync_reader;
pub mod sync_file_reader;
pub mod stdin_reader;
