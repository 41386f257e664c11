//! Drafting and editing workflows for cards and groups.
//!
//! Mirrors the interactive editing surfaces:
//! - single-card drafting for the unsorted pool
//! - a group form holding a name and a working card list, persisted
//!   only on save
//!
//! All text fields are trimmed first. Blank fields are rejected before
//! anything touches the database.

use rusqlite::Connection;

use crate::db::{insert_card, insert_group, update_group};
use crate::domain::{Card, Group};

// ============================================================================
// Errors
// ============================================================================

/// Validation failure on a draft field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
  EmptyPrompt,
  EmptyAnswer,
  EmptyName,
}

impl std::fmt::Display for DraftError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let message = match self {
      Self::EmptyPrompt => "Card prompt cannot be empty",
      Self::EmptyAnswer => "Card answer cannot be empty",
      Self::EmptyName => "Group name cannot be empty",
    };
    write!(f, "{}", message)
  }
}

impl std::error::Error for DraftError {}

/// Editing failure: either an invalid draft or a storage error
#[derive(Debug)]
pub enum EditorError {
  Draft(DraftError),
  Db(rusqlite::Error),
}

impl std::fmt::Display for EditorError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Draft(e) => write!(f, "{}", e),
      Self::Db(e) => write!(f, "Database error: {}", e),
    }
  }
}

impl std::error::Error for EditorError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Draft(e) => Some(e),
      Self::Db(e) => Some(e),
    }
  }
}

impl From<DraftError> for EditorError {
  fn from(e: DraftError) -> Self {
    Self::Draft(e)
  }
}

impl From<rusqlite::Error> for EditorError {
  fn from(e: rusqlite::Error) -> Self {
    Self::Db(e)
  }
}

// ============================================================================
// Card drafting
// ============================================================================

/// Build a card from raw form input. Both fields are trimmed, blank
/// fields fail validation.
pub fn draft_card(prompt: &str, answer: &str) -> Result<Card, DraftError> {
  let prompt = prompt.trim();
  let answer = answer.trim();

  if prompt.is_empty() {
    return Err(DraftError::EmptyPrompt);
  }
  if answer.is_empty() {
    return Err(DraftError::EmptyAnswer);
  }

  Ok(Card::new(prompt.to_string(), answer.to_string()))
}

/// Draft a card and persist it straight into the unsorted pool
pub fn add_pool_card(conn: &Connection, prompt: &str, answer: &str) -> Result<i64, EditorError> {
  let card = draft_card(prompt, answer)?;
  let id = insert_card(conn, &card)?;
  tracing::debug!("added pool card {}", id);
  Ok(id)
}

// ============================================================================
// Group editing
// ============================================================================

/// Working state for the group editing form.
///
/// Accumulates a name and a card list in memory. Nothing is written
/// until [`GroupEditor::save`], which inserts a new group or replaces
/// the card set of the one being edited.
#[derive(Debug, Default)]
pub struct GroupEditor {
  name: String,
  cards: Vec<Card>,
  editing: Option<i64>,
}

impl GroupEditor {
  /// Empty form for creating a new group
  pub fn new() -> Self {
    Self::default()
  }

  /// Form prefilled from an existing group, saves become updates
  pub fn edit(group: &Group) -> Self {
    Self {
      name: group.name.clone(),
      cards: group.cards.clone(),
      editing: Some(group.id),
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn cards(&self) -> &[Card] {
    &self.cards
  }

  pub fn set_name(&mut self, name: &str) {
    self.name = name.to_string();
  }

  /// Validate and append a card draft to the working list
  pub fn add_card(&mut self, prompt: &str, answer: &str) -> Result<(), DraftError> {
    let card = draft_card(prompt, answer)?;
    self.cards.push(card);
    Ok(())
  }

  /// Remove the card at `position`. Out-of-range positions are
  /// ignored and return `false`.
  pub fn remove_card(&mut self, position: usize) -> bool {
    if position >= self.cards.len() {
      return false;
    }
    self.cards.remove(position);
    true
  }

  /// Whether the form is currently saveable
  pub fn can_save(&self) -> bool {
    !self.name.trim().is_empty()
  }

  /// Persist the form. Creates a new group on first save, replaces
  /// the stored name and card set on later saves.
  pub fn save(&mut self, conn: &mut Connection) -> Result<i64, EditorError> {
    let name = self.name.trim();
    if name.is_empty() {
      return Err(DraftError::EmptyName.into());
    }

    match self.editing {
      Some(id) => {
        update_group(conn, id, name, &self.cards)?;
        tracing::debug!("updated group {} with {} cards", id, self.cards.len());
        Ok(id)
      }
      None => {
        let mut group = Group::new(name.to_string());
        group.cards = self.cards.clone();
        let id = insert_group(conn, &group)?;
        self.editing = Some(id);
        tracing::debug!("created group {} with {} cards", id, self.cards.len());
        Ok(id)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::db::{get_group_by_id, list_pool_cards};
  use crate::testing::TestEnv;

  // Card drafting tests

  #[test]
  fn test_draft_card_trims_fields() {
    let card = draft_card("  What is 2 + 2?  ", "\t4\n").unwrap();
    assert_eq!(card.prompt, "What is 2 + 2?");
    assert_eq!(card.answer, "4");
  }

  #[test]
  fn test_draft_card_rejects_empty_prompt() {
    assert_eq!(draft_card("", "4").unwrap_err(), DraftError::EmptyPrompt);
    assert_eq!(draft_card("   ", "4").unwrap_err(), DraftError::EmptyPrompt);
  }

  #[test]
  fn test_draft_card_rejects_empty_answer() {
    assert_eq!(draft_card("2 + 2?", "").unwrap_err(), DraftError::EmptyAnswer);
    assert_eq!(draft_card("2 + 2?", " \n ").unwrap_err(), DraftError::EmptyAnswer);
  }

  #[test]
  fn test_add_pool_card_persists() {
    let env = TestEnv::new().unwrap();

    let id = add_pool_card(&env.conn, " capital of France ", " Paris ").unwrap();
    assert!(id > 0);

    let pool = list_pool_cards(&env.conn).unwrap();
    assert_eq!(pool.len(), 1);
    assert_eq!(pool[0].prompt, "capital of France");
    assert_eq!(pool[0].answer, "Paris");
    assert_eq!(pool[0].group_id, None);
  }

  #[test]
  fn test_add_pool_card_rejects_blank_draft() {
    let env = TestEnv::new().unwrap();

    let err = add_pool_card(&env.conn, "  ", "Paris").unwrap_err();
    assert!(matches!(err, EditorError::Draft(DraftError::EmptyPrompt)));

    // Nothing was persisted
    let count: i64 = env
      .conn
      .query_row("SELECT COUNT(*) FROM cards", [], |row| row.get(0))
      .unwrap();
    assert_eq!(count, 0);
  }

  // Group editor tests

  #[test]
  fn test_editor_accumulates_cards() {
    let mut editor = GroupEditor::new();
    editor.add_card("q1", "a1").unwrap();
    editor.add_card("q2", "a2").unwrap();

    assert_eq!(editor.cards().len(), 2);
    assert_eq!(editor.cards()[0].prompt, "q1");
    assert_eq!(editor.cards()[1].prompt, "q2");
  }

  #[test]
  fn test_editor_rejects_blank_card_draft() {
    let mut editor = GroupEditor::new();
    assert_eq!(editor.add_card("q1", "  ").unwrap_err(), DraftError::EmptyAnswer);
    assert!(editor.cards().is_empty());
  }

  #[test]
  fn test_editor_remove_card() {
    let mut editor = GroupEditor::new();
    editor.add_card("q1", "a1").unwrap();
    editor.add_card("q2", "a2").unwrap();

    assert!(editor.remove_card(0));
    assert_eq!(editor.cards().len(), 1);
    assert_eq!(editor.cards()[0].prompt, "q2");

    // Out of range is a no-op
    assert!(!editor.remove_card(5));
    assert_eq!(editor.cards().len(), 1);
  }

  #[test]
  fn test_editor_can_save_requires_name() {
    let mut editor = GroupEditor::new();
    assert!(!editor.can_save());

    editor.set_name("   ");
    assert!(!editor.can_save());

    editor.set_name("Biology");
    assert!(editor.can_save());
  }

  #[test]
  fn test_editor_save_creates_group() {
    let mut env = TestEnv::new().unwrap();

    let mut editor = GroupEditor::new();
    editor.set_name("  Biology  ");
    editor.add_card("q1", "a1").unwrap();
    editor.add_card("q2", "a2").unwrap();

    let id = editor.save(&mut env.conn).unwrap();

    let group = get_group_by_id(&env.conn, id).unwrap().unwrap();
    assert_eq!(group.name, "Biology");
    assert_eq!(group.cards.len(), 2);
    assert_eq!(group.cards[0].position, 0);
    assert_eq!(group.cards[1].position, 1);
  }

  #[test]
  fn test_editor_save_without_name_persists_nothing() {
    let mut env = TestEnv::new().unwrap();

    let mut editor = GroupEditor::new();
    editor.add_card("q1", "a1").unwrap();

    let err = editor.save(&mut env.conn).unwrap_err();
    assert!(matches!(err, EditorError::Draft(DraftError::EmptyName)));

    let groups: i64 = env
      .conn
      .query_row("SELECT COUNT(*) FROM groups", [], |row| row.get(0))
      .unwrap();
    let cards: i64 = env
      .conn
      .query_row("SELECT COUNT(*) FROM cards", [], |row| row.get(0))
      .unwrap();
    assert_eq!(groups, 0);
    assert_eq!(cards, 0);
  }

  #[test]
  fn test_editor_save_twice_updates_in_place() {
    let mut env = TestEnv::new().unwrap();

    let mut editor = GroupEditor::new();
    editor.set_name("Biology");
    editor.add_card("q1", "a1").unwrap();

    let first = editor.save(&mut env.conn).unwrap();
    editor.add_card("q2", "a2").unwrap();
    let second = editor.save(&mut env.conn).unwrap();

    assert_eq!(first, second);
    let count: i64 = env
      .conn
      .query_row("SELECT COUNT(*) FROM groups", [], |row| row.get(0))
      .unwrap();
    assert_eq!(count, 1);

    let group = get_group_by_id(&env.conn, first).unwrap().unwrap();
    assert_eq!(group.cards.len(), 2);
  }

  #[test]
  fn test_editor_edit_prefills_and_replaces() {
    let mut env = TestEnv::new().unwrap();

    let mut editor = GroupEditor::new();
    editor.set_name("Chemistry");
    editor.add_card("old question", "old answer").unwrap();
    let id = editor.save(&mut env.conn).unwrap();

    let stored = get_group_by_id(&env.conn, id).unwrap().unwrap();
    let mut editor = GroupEditor::edit(&stored);
    assert_eq!(editor.name(), "Chemistry");
    assert_eq!(editor.cards().len(), 1);

    editor.set_name("Organic Chemistry");
    editor.remove_card(0);
    editor.add_card("new question", "new answer").unwrap();
    let saved = editor.save(&mut env.conn).unwrap();
    assert_eq!(saved, id);

    let updated = get_group_by_id(&env.conn, id).unwrap().unwrap();
    assert_eq!(updated.name, "Organic Chemistry");
    assert_eq!(updated.cards.len(), 1);
    assert_eq!(updated.cards[0].prompt, "new question");
  }
}
