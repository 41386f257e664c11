//! One timed review pass over a fixed set of cards.
//!
//! The session owns a shuffled stack of cards and a countdown:
//! - The visible, interactive top card is the *last* element.
//! - Correct answers leave the stack for good.
//! - Wrong answers are reinserted at index 0 and resurface once the
//!   cards above them are cleared.
//! - The countdown stops at zero; remaining cards stay in place and
//!   the consuming UI disables interaction.

use rand::seq::SliceRandom;

use crate::config::SESSION_LENGTH_SECS;
use crate::domain::{Card, Outcome};

#[derive(Debug, Clone)]
pub struct ReviewSession {
  active: Vec<Card>,
  time_remaining: u32,
  running: bool,
}

impl ReviewSession {
  /// Start a session over `source`, shuffled uniformly. An empty source
  /// yields an immediately finished session.
  pub fn start(source: Vec<Card>) -> Self {
    let mut session = Self {
      active: Vec::new(),
      time_remaining: 0,
      running: false,
    };
    session.restart(source);
    session
  }

  /// Begin a fresh pass over `source`, the "start again" action.
  pub fn restart(&mut self, source: Vec<Card>) {
    self.active = source;
    self.active.shuffle(&mut rand::rng());
    self.time_remaining = SESSION_LENGTH_SECS;
    self.running = !self.active.is_empty();
    tracing::info!("review session started with {} cards", self.active.len());
  }

  /// Classify the card at `position`. Out-of-range positions are ignored.
  /// Returns true if a card was classified.
  pub fn classify(&mut self, position: usize, outcome: Outcome) -> bool {
    if position >= self.active.len() {
      return false;
    }

    let card = self.active.remove(position);
    if outcome == Outcome::Wrong {
      tracing::debug!("card {} requeued at the bottom of the pile", card.id);
      self.active.insert(0, card);
    }

    if self.active.is_empty() {
      self.running = false;
      tracing::info!("review session complete, stack cleared");
    }
    true
  }

  /// Classify the visible top card
  pub fn classify_top(&mut self, outcome: Outcome) -> bool {
    if self.active.is_empty() {
      return false;
    }
    self.classify(self.active.len() - 1, outcome)
  }

  /// Advance the countdown by one second. Callers invoke this once per
  /// elapsed second; it never drops below zero.
  pub fn tick(&mut self) {
    if !self.running {
      return;
    }
    if self.time_remaining > 0 {
      self.time_remaining -= 1;
      if self.time_remaining == 0 {
        tracing::info!("review session time expired, {} cards left", self.active.len());
      }
    }
  }

  /// Stop the countdown without touching the stack
  pub fn pause(&mut self) {
    self.running = false;
  }

  /// Restart the countdown, a no-op while the stack is empty
  pub fn resume(&mut self) {
    if !self.active.is_empty() {
      self.running = true;
    }
  }

  /// The card currently on top of the pile
  pub fn top(&self) -> Option<&Card> {
    self.active.last()
  }

  /// Cards still to be reviewed, bottom first
  pub fn cards(&self) -> &[Card] {
    &self.active
  }

  pub fn len(&self) -> usize {
    self.active.len()
  }

  pub fn is_empty(&self) -> bool {
    self.active.is_empty()
  }

  pub fn time_remaining(&self) -> u32 {
    self.time_remaining
  }

  pub fn is_running(&self) -> bool {
    self.running
  }

  /// Finished when the stack is empty or time has run out
  pub fn is_finished(&self) -> bool {
    self.active.is_empty() || self.time_remaining == 0
  }
}
