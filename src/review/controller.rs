//! Composition of the review engine and the lifecycle gate.
//!
//! Callers funnel every session event through one controller: ticks
//! from the timer source, classifications from the UI, and scene
//! transitions from the platform. The gate decides whether ticks are
//! forwarded at all; the engine keeps its own running flag as a second
//! guard underneath.

use serde::{Deserialize, Serialize};

use crate::domain::{Card, Outcome};

use super::lifecycle::{LifecycleGate, ScenePhase};
use super::session::ReviewSession;

#[derive(Debug)]
pub struct SessionController {
  session: ReviewSession,
  gate: LifecycleGate,
}

impl SessionController {
  pub fn start(source: Vec<Card>) -> Self {
    let session = ReviewSession::start(source);
    let gate = LifecycleGate::new(!session.is_empty());
    Self { session, gate }
  }

  /// The "start again" action
  pub fn restart(&mut self, source: Vec<Card>) {
    self.session.restart(source);
    self.gate = LifecycleGate::new(!self.session.is_empty());
  }

  /// Platform scene transition. Suspension pauses the countdown,
  /// reactivation resumes it while cards remain.
  pub fn scene_changed(&mut self, phase: ScenePhase) {
    self.gate.scene_changed(phase, !self.session.is_empty());
    if self.gate.is_active() {
      self.session.resume();
    } else {
      self.session.pause();
    }
  }

  /// Timer pulse, forwarded to the engine only while the gate is active
  pub fn tick(&mut self) {
    if self.gate.is_active() {
      self.session.tick();
    }
  }

  pub fn classify(&mut self, position: usize, outcome: Outcome) -> bool {
    let classified = self.session.classify(position, outcome);
    if classified && self.session.is_empty() {
      self.gate.stack_emptied();
    }
    classified
  }

  pub fn classify_top(&mut self, outcome: Outcome) -> bool {
    if self.session.is_empty() {
      return false;
    }
    self.classify(self.session.len() - 1, outcome)
  }

  pub fn session(&self) -> &ReviewSession {
    &self.session
  }

  pub fn is_suspended(&self) -> bool {
    !self.gate.is_active()
  }

  /// Copy of the observable state for the presentation layer
  pub fn snapshot(&self) -> SessionSnapshot {
    SessionSnapshot {
      cards: self.session.cards().to_vec(),
      time_remaining: self.session.time_remaining(),
      is_running: self.session.is_running(),
      is_finished: self.session.is_finished(),
    }
  }
}

/// Immutable view of session state, published after every mutation.
/// The visible top card is the last element of `cards`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
  pub cards: Vec<Card>,
  pub time_remaining: u32,
  pub is_running: bool,
  pub is_finished: bool,
}

impl SessionSnapshot {
  pub fn top(&self) -> Option<&Card> {
    self.cards.last()
  }
}
