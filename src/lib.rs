//! NetClip - receive clipboard data from remote machines
//!
//! This crate provides a small background service that accepts a raw byte
//! stream over TCP and deposits it into the local clipboard, so one machine
//! can push clipboard content to another. One instance owns the listen role
//! per machine; later invocations detect it through a PID record and defer.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects (service instance, configuration) and errors
//! - **Application**: The receive use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (arboard clipboard,
//!   process probes, XDG config store)
//! - **CLI**: Argument parsing, record files, the TCP server, and the
//!   application runner

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
