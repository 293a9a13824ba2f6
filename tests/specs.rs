//! Behavioral specifications for the gitspace lifecycle.
//!
//! These tests drive the orchestrator end to end through traced adapters and
//! a channel-backed event timeline, the way a host process wires it.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

// lifecycle/
#[path = "specs/lifecycle/concurrency.rs"]
mod lifecycle_concurrency;
#[path = "specs/lifecycle/start.rs"]
mod lifecycle_start;
#[path = "specs/lifecycle/teardown.rs"]
mod lifecycle_teardown;
#[path = "specs/lifecycle/timeline.rs"]
mod lifecycle_timeline;
