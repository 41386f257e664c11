use rusqlite::{Connection, Result};

pub fn run_migrations(conn: &Connection) -> Result<()> {
  // Create tables with COMPLETE schema for new databases
  // Migrations below handle upgrades for existing databases
  conn.execute_batch(
    r#"
    CREATE TABLE IF NOT EXISTS groups (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      name TEXT NOT NULL,
      created_at TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS cards (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      prompt TEXT NOT NULL,
      answer TEXT NOT NULL,
      group_id INTEGER REFERENCES groups(id),
      position INTEGER NOT NULL DEFAULT 0,
      created_at TEXT NOT NULL
    );

    -- Indexes
    CREATE INDEX IF NOT EXISTS idx_cards_group_id ON cards(group_id);
    CREATE INDEX IF NOT EXISTS idx_groups_name ON groups(name);
    "#,
  )?;

  // ============================================================
  // MIGRATIONS FOR EXISTING DATABASES
  // These are no-ops for new databases (columns already exist)
  // ============================================================

  // Migration: cards predate groups, early databases lack the ownership columns
  add_column_if_missing(conn, "cards", "group_id", "INTEGER REFERENCES groups(id)")?;
  add_column_if_missing(conn, "cards", "position", "INTEGER NOT NULL DEFAULT 0")?;

  Ok(())
}

/// Check if a column exists in a table
fn column_exists(conn: &Connection, table: &str, column: &str) -> bool {
  conn
    .prepare(&format!("SELECT {} FROM {} LIMIT 1", column, table))
    .is_ok()
}

/// Add a column if it doesn't already exist
fn add_column_if_missing(conn: &Connection, table: &str, column: &str, column_def: &str) -> Result<()> {
  if !column_exists(conn, table, column) {
    conn.execute(
      &format!("ALTER TABLE {} ADD COLUMN {} {}", table, column, column_def),
      [],
    )?;
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_migrations_are_idempotent() {
    let conn = Connection::open_in_memory().unwrap();
    run_migrations(&conn).unwrap();
    run_migrations(&conn).unwrap();

    let count: i64 = conn
      .query_row("SELECT COUNT(*) FROM cards", [], |row| row.get(0))
      .unwrap();
    assert_eq!(count, 0);
  }

  #[test]
  fn test_migrations_upgrade_legacy_cards_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn
      .execute_batch(
        r#"
        CREATE TABLE cards (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          prompt TEXT NOT NULL,
          answer TEXT NOT NULL,
          created_at TEXT NOT NULL
        );
        INSERT INTO cards (prompt, answer, created_at)
        VALUES ('7x8', '56', '2024-01-01T00:00:00+00:00');
        "#,
      )
      .unwrap();

    run_migrations(&conn).unwrap();

    let (group_id, position): (Option<i64>, i64) = conn
      .query_row("SELECT group_id, position FROM cards", [], |row| {
        Ok((row.get(0)?, row.get(1)?))
      })
      .unwrap();
    assert!(group_id.is_none());
    assert_eq!(position, 0);
  }
}
