//! Review session engine
//!
//! Layered from the inside out:
//! - `session`: pure stack-and-countdown state machine
//! - `lifecycle`: scene gate deciding whether the clock may run
//! - `controller`: composes the two and produces snapshots
//! - `runner`: async task serializing commands and ticks

pub mod controller;
pub mod lifecycle;
pub mod runner;
pub mod session;

pub use controller::{SessionController, SessionSnapshot};
pub use lifecycle::{GateState, LifecycleGate, ScenePhase};
pub use runner::{spawn_session, SessionCommand, SessionHandle};
pub use session::ReviewSession;
