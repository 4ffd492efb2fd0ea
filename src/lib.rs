//! Form client for the coverage JSON validator.
//!
//! Keeps two independent input panels (file upload and pasted JSON), runs
//! the local pre-submit checks, posts accepted panels to the validator
//! service as multipart forms, and renders the returned errors and warnings
//! as truncated, expandable lists. The page is driven by newline-delimited
//! JSON events on stdin and answered with view frames on stdout.

pub mod app;
pub mod catalog;
pub mod config;
pub mod handlers;
pub mod logging;
pub mod panel;
pub mod protocol;
pub mod render;
pub mod shell;
pub mod submission;
pub mod transport;
pub mod validator;
