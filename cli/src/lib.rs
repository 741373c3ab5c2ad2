//! snaptex CLI internals.
//!
//! Split out of the binary so the pipeline can be driven end-to-end from
//! integration tests with mock clipboards and a mock API server.

pub mod output;
pub mod pipeline;
pub mod timing;
