#![allow(dead_code)]

mod assertions;
mod fixtures;
mod mocks;
mod test_app;

pub use assertions::{assert_body_valid, assert_flight_state_valid, assert_vector_eq};
pub use fixtures::*;
pub use mocks::{BodyCall, FixedProbe, RecordingBody};
pub use test_app::{TestApp, TestAppBuilder};
