//! Integration test crate for the Meritus workspace. All tests live in
//! `tests/`.
