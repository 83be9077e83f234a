//! Webfonts fetch CLI library.

pub mod cli;
