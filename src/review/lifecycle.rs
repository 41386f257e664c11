//! Foreground/background gating for the session countdown.
//!
//! The timer source keeps firing regardless of application lifecycle;
//! this gate decides whether those ticks may reach the engine at all.
//! It suspends when the app backgrounds or the stack empties, and
//! reactivates only on foreground with cards left to review.

use serde::{Deserialize, Serialize};

/// Application scene phase as reported by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenePhase {
  Foreground,
  Background,
}

impl ScenePhase {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Foreground => "foreground",
      Self::Background => "background",
    }
  }

  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "foreground" => Some(Self::Foreground),
      "background" => Some(Self::Background),
      _ => None,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
  Active,
  Suspended,
}

/// Two-state machine deciding whether timer ticks reach the engine
#[derive(Debug, Clone)]
pub struct LifecycleGate {
  state: GateState,
}

impl LifecycleGate {
  /// Initial state: active only when the session begins with cards
  pub fn new(has_cards: bool) -> Self {
    Self {
      state: if has_cards {
        GateState::Active
      } else {
        GateState::Suspended
      },
    }
  }

  /// Feed a platform scene transition. Foreground reactivates only
  /// while cards remain; background always suspends.
  pub fn scene_changed(&mut self, phase: ScenePhase, has_cards: bool) {
    let next = match phase {
      ScenePhase::Foreground if has_cards => GateState::Active,
      _ => GateState::Suspended,
    };
    if next != self.state {
      tracing::debug!("lifecycle gate {:?} to {:?}", self.state, next);
      self.state = next;
    }
  }

  /// The stack ran out mid-session
  pub fn stack_emptied(&mut self) {
    self.state = GateState::Suspended;
  }

  pub fn is_active(&self) -> bool {
    self.state == GateState::Active
  }

  pub fn state(&self) -> GateState {
    self.state
  }
}
