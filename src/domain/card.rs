use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a card was answered during review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
  Correct,
  Wrong,
}

impl Outcome {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Correct => "correct",
      Self::Wrong => "wrong",
    }
  }

  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "correct" => Some(Self::Correct),
      "wrong" => Some(Self::Wrong),
      _ => None,
    }
  }

  pub fn is_correct(&self) -> bool {
    matches!(self, Self::Correct)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
  pub id: i64,
  pub prompt: String,
  pub answer: String,
  /// Owning group, None for cards in the ungrouped pool
  pub group_id: Option<i64>,
  /// Display order within the owning group
  pub position: i64,
  pub created_at: DateTime<Utc>,
}

impl Card {
  pub fn new(prompt: String, answer: String) -> Self {
    Self {
      id: 0,
      prompt,
      answer,
      group_id: None,
      position: 0,
      created_at: Utc::now(),
    }
  }

  /// Sample card for previews and tests
  pub fn example() -> Self {
    Self::new(
      "Who played the 13th Doctor in Doctor Who?".to_string(),
      "Jodie Whittaker".to_string(),
    )
  }
}
