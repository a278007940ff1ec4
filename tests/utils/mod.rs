#![allow(dead_code)]

pub mod actions;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use actions::{assert_redirect_to, body_text, get, post_form};
#[allow(unused_imports)]
pub use setup::{TestSetup, TestSetupBuilder};
