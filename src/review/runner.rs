//! Single-owner task driving a session.
//!
//! The task owns a [`SessionController`] and is the only place that
//! touches it: UI commands arrive on an mpsc channel, a one second
//! interval supplies the countdown pulse, and a `select!` loop
//! serializes the two. After every mutation the observable state is
//! published on a watch channel for the presentation layer.

use tokio::sync::{mpsc, watch};
use tokio::time::{self, MissedTickBehavior};

use crate::config::TICK_INTERVAL;
use crate::domain::{Card, Outcome};

use super::controller::{SessionController, SessionSnapshot};
use super::lifecycle::ScenePhase;

/// Message types for the session task
#[derive(Debug)]
pub enum SessionCommand {
  /// Begin a fresh pass over a new card snapshot
  Restart(Vec<Card>),
  /// Classify the card at a stack position
  Classify { position: usize, outcome: Outcome },
  /// Classify the visible top card
  ClassifyTop(Outcome),
  /// Application scene transition
  Scene(ScenePhase),
  /// Stop the task
  Shutdown,
}

/// Caller-side handle to a running session task. Cloneable; dropping
/// every handle also stops the task.
#[derive(Debug, Clone)]
pub struct SessionHandle {
  commands: mpsc::UnboundedSender<SessionCommand>,
  snapshots: watch::Receiver<SessionSnapshot>,
}

impl SessionHandle {
  pub fn restart(&self, cards: Vec<Card>) {
    let _ = self.commands.send(SessionCommand::Restart(cards));
  }

  pub fn classify(&self, position: usize, outcome: Outcome) {
    let _ = self.commands.send(SessionCommand::Classify { position, outcome });
  }

  pub fn classify_top(&self, outcome: Outcome) {
    let _ = self.commands.send(SessionCommand::ClassifyTop(outcome));
  }

  pub fn scene(&self, phase: ScenePhase) {
    let _ = self.commands.send(SessionCommand::Scene(phase));
  }

  pub fn shutdown(&self) {
    let _ = self.commands.send(SessionCommand::Shutdown);
  }

  /// Most recently published state
  pub fn snapshot(&self) -> SessionSnapshot {
    self.snapshots.borrow().clone()
  }

  /// Watch receiver for change notifications
  pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
    self.snapshots.clone()
  }
}

/// Start a session task over `source`. Must be called from within a
/// tokio runtime.
pub fn spawn_session(source: Vec<Card>) -> SessionHandle {
  let controller = SessionController::start(source);
  let (command_tx, command_rx) = mpsc::unbounded_channel();
  let (snapshot_tx, snapshot_rx) = watch::channel(controller.snapshot());

  tokio::spawn(session_loop(controller, command_rx, snapshot_tx));

  SessionHandle {
    commands: command_tx,
    snapshots: snapshot_rx,
  }
}

/// Main session loop
async fn session_loop(
  mut controller: SessionController,
  mut commands: mpsc::UnboundedReceiver<SessionCommand>,
  snapshots: watch::Sender<SessionSnapshot>,
) {
  let mut ticker = time::interval(TICK_INTERVAL);
  // A delayed wakeup must not burst-deliver the ticks it missed
  ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
  // The first interval tick resolves immediately, swallow it so the
  // countdown starts a full second after spawn
  ticker.tick().await;

  loop {
    tokio::select! {
      _ = ticker.tick() => {
        controller.tick();
        publish(&snapshots, &controller);
      }

      cmd = commands.recv() => {
        match cmd {
          Some(SessionCommand::Restart(cards)) => {
            controller.restart(cards);
          }
          Some(SessionCommand::Classify { position, outcome }) => {
            controller.classify(position, outcome);
          }
          Some(SessionCommand::ClassifyTop(outcome)) => {
            controller.classify_top(outcome);
          }
          Some(SessionCommand::Scene(phase)) => {
            controller.scene_changed(phase);
          }
          Some(SessionCommand::Shutdown) | None => {
            tracing::debug!("session runner shutting down");
            break;
          }
        }
        publish(&snapshots, &controller);
      }
    }
  }
}

/// Publish the current state, skipping no-op updates
fn publish(snapshots: &watch::Sender<SessionSnapshot>, controller: &SessionController) {
  let next = controller.snapshot();
  snapshots.send_if_modified(|current| {
    if *current == next {
      false
    } else {
      *current = next;
      true
    }
  });
}
