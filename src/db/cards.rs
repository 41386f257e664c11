//! Card CRUD and query operations

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Result};

use crate::domain::Card;

pub fn insert_card(conn: &Connection, card: &Card) -> Result<i64> {
    conn.execute(
        r#"
    INSERT INTO cards (prompt, answer, group_id, position, created_at)
    VALUES (?1, ?2, ?3, ?4, ?5)
    "#,
        params![
            card.prompt,
            card.answer,
            card.group_id,
            card.position,
            card.created_at.to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_card_by_id(conn: &Connection, id: i64) -> Result<Option<Card>> {
    let mut stmt = conn.prepare(
        r#"
    SELECT id, prompt, answer, group_id, position, created_at
    FROM cards WHERE id = ?1
    "#,
    )?;

    let mut rows = stmt.query(params![id])?;
    if let Some(row) = rows.next()? {
        Ok(Some(row_to_card(row)?))
    } else {
        Ok(None)
    }
}

/// All cards when no group is given, else the group's cards in stored order
pub fn list_cards(conn: &Connection, group: Option<i64>) -> Result<Vec<Card>> {
    match group {
        Some(group_id) => {
            let mut stmt = conn.prepare(
                r#"
        SELECT id, prompt, answer, group_id, position, created_at
        FROM cards
        WHERE group_id = ?1
        ORDER BY position ASC, id ASC
        "#,
            )?;
            let cards = stmt
                .query_map(params![group_id], |row| row_to_card(row))?
                .collect::<Result<Vec<_>>>()?;
            Ok(cards)
        }
        None => {
            let mut stmt = conn.prepare(
                r#"
        SELECT id, prompt, answer, group_id, position, created_at
        FROM cards
        ORDER BY position ASC, id ASC
        "#,
            )?;
            let cards = stmt
                .query_map([], |row| row_to_card(row))?
                .collect::<Result<Vec<_>>>()?;
            Ok(cards)
        }
    }
}

/// Cards with no owning group
pub fn list_pool_cards(conn: &Connection) -> Result<Vec<Card>> {
    let mut stmt = conn.prepare(
        r#"
    SELECT id, prompt, answer, group_id, position, created_at
    FROM cards
    WHERE group_id IS NULL
    ORDER BY id ASC
    "#,
    )?;
    let cards = stmt
        .query_map([], |row| row_to_card(row))?
        .collect::<Result<Vec<_>>>()?;
    Ok(cards)
}

pub fn delete_card(conn: &Connection, id: i64) -> Result<()> {
    conn.execute("DELETE FROM cards WHERE id = ?1", params![id])?;
    Ok(())
}

/// Convert a database row to a Card struct
pub(crate) fn row_to_card(row: &rusqlite::Row) -> Result<Card> {
    let created_at_str: String = row.get(5)?;

    Ok(Card {
        id: row.get(0)?,
        prompt: row.get(1)?,
        answer: row.get(2)?,
        group_id: row.get(3)?,
        position: row.get(4)?,
        created_at: DateTime::parse_from_rfc3339(&created_at_str)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now()),
    })
}
