//! HTTP handlers for the page routes.

mod pages;

pub use pages::*;
