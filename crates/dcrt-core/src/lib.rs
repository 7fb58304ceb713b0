//! dcrt Core - Domain types and ports
//!
//! This crate contains everything the resolver needs that is independent of
//! how conflicts are matched or how the filesystem is reached:
//! - **Domain types** - `Language`, `ReportLine`
//! - **Run configuration** - `Mode`, `RunConfiguration`, validation
//! - **Port definitions** - `ILocalFileSystem`, `ReportSink`
//!
//! # Architecture
//!
//! The domain module holds plain values with no I/O. Ports are the traits
//! the conflict crate drives; the real filesystem adapter lives next to the
//! resolver, while tests supply their own implementations.

pub mod config;
pub mod domain;
pub mod ports;
