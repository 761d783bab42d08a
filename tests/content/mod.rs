//! Content tree tests.

mod decode_tests;
mod mentions_tests;
mod render_tests;
