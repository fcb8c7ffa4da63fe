//! Simulated encoder board for unit tests.

pub(crate) mod mock;

pub(crate) use mock::{BusOp, MockDelay, MockDevice};
