//! hub: a markdown learning hub for the terminal.
//!
//! Topic markdown lives in a content directory and is listed, in order, in `.hub.toml`. The
//! `hub` binary browses topics with syntax highlighting, renders them to standalone HTML pages
//! and searches their sections with a small in-memory index.

#![warn(missing_docs)]

pub mod cli;
