//! Property-based tests

mod event_proptest;
mod presence_proptest;
