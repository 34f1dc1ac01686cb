//! Real-time integration tests

mod delivery_test;
mod socket_test;
