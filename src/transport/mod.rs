//! Transports feed inbound messages to the [`Bot`](crate::core::bot::Bot)
//! and deliver its replies. Only a console transport ships with the crate.

pub mod console;

pub use console::ConsoleTransport;
