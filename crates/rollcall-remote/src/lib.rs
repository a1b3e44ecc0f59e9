//! # rollcall-remote
//!
//! Simulated remote-call boundary for the Rollcall workflow: a `RemoteCall`
//! implementation whose latency and failure behavior is governed by a
//! single configurable `FaultPolicy`. Tests and deterministic builds use
//! `FaultPolicy::none()`; the reference simulation profile mimics the
//! original mock API (400–1100 ms latency, 10% failures).

pub mod fault;
pub mod stub;

pub use fault::FaultPolicy;
pub use stub::StubRemoteCall;
