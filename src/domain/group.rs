use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// A named, ordered collection of cards. Deleting a group deletes the
/// cards it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
  pub id: i64,
  pub name: String,
  pub cards: Vec<Card>,
  pub created_at: DateTime<Utc>,
}

impl Group {
  pub fn new(name: String) -> Self {
    Self {
      id: 0,
      name,
      cards: Vec::new(),
      created_at: Utc::now(),
    }
  }
}
