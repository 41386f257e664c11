//! Group CRUD, listing, search, and cascading delete

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Result};

use crate::domain::{Card, Group};

use super::cards::{insert_card, list_cards};

/// Insert a group and the cards it carries. Card positions are assigned
/// from their order in `group.cards`. Returns the new group id.
pub fn insert_group(conn: &mut Connection, group: &Group) -> Result<i64> {
    let tx = conn.transaction()?;
    tx.execute(
        "INSERT INTO groups (name, created_at) VALUES (?1, ?2)",
        params![group.name, group.created_at.to_rfc3339()],
    )?;
    let group_id = tx.last_insert_rowid();

    for (i, card) in group.cards.iter().enumerate() {
        let mut owned = card.clone();
        owned.group_id = Some(group_id);
        owned.position = i as i64;
        insert_card(&tx, &owned)?;
    }

    tx.commit()?;
    Ok(group_id)
}

pub fn get_group_by_id(conn: &Connection, id: i64) -> Result<Option<Group>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, created_at FROM groups WHERE id = ?1",
    )?;

    let mut rows = stmt.query(params![id])?;
    let Some(row) = rows.next()? else {
        return Ok(None);
    };
    let mut group = row_to_group(row)?;
    group.cards = list_cards(conn, Some(group.id))?;
    Ok(Some(group))
}

/// Replace a group's name and entire owned card set in one transaction.
/// A missing group id is a no-op so stale edits cannot create orphans.
pub fn update_group(conn: &mut Connection, id: i64, name: &str, cards: &[Card]) -> Result<()> {
    let tx = conn.transaction()?;
    let updated = tx.execute(
        "UPDATE groups SET name = ?1 WHERE id = ?2",
        params![name, id],
    )?;
    if updated == 0 {
        return Ok(());
    }

    tx.execute("DELETE FROM cards WHERE group_id = ?1", params![id])?;
    for (i, card) in cards.iter().enumerate() {
        let mut owned = card.clone();
        owned.group_id = Some(id);
        owned.position = i as i64;
        insert_card(&tx, &owned)?;
    }

    tx.commit()?;
    Ok(())
}

/// Delete a group and every card it owns. The cascade commits atomically,
/// readers never observe a group without its cards or vice versa.
pub fn delete_group(conn: &mut Connection, id: i64) -> Result<()> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM cards WHERE group_id = ?1", params![id])?;
    tx.execute("DELETE FROM groups WHERE id = ?1", params![id])?;
    tx.commit()?;
    Ok(())
}

/// All groups with their cards, sorted by name
pub fn list_groups(conn: &Connection) -> Result<Vec<Group>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, created_at FROM groups ORDER BY name COLLATE NOCASE ASC",
    )?;
    let mut groups = stmt
        .query_map([], |row| row_to_group(row))?
        .collect::<Result<Vec<_>>>()?;

    for group in &mut groups {
        group.cards = list_cards(conn, Some(group.id))?;
    }
    Ok(groups)
}

/// Groups whose name contains `query`, case-insensitively. An empty query
/// matches every group.
pub fn search_groups(conn: &Connection, query: &str) -> Result<Vec<Group>> {
    let mut stmt = conn.prepare(
        r#"
    SELECT id, name, created_at FROM groups
    WHERE name LIKE '%' || ?1 || '%'
    ORDER BY name COLLATE NOCASE ASC
    "#,
    )?;
    let mut groups = stmt
        .query_map(params![query], |row| row_to_group(row))?
        .collect::<Result<Vec<_>>>()?;

    for group in &mut groups {
        group.cards = list_cards(conn, Some(group.id))?;
    }
    Ok(groups)
}

fn row_to_group(row: &rusqlite::Row) -> Result<Group> {
    let created_at_str: String = row.get(2)?;

    Ok(Group {
        id: row.get(0)?,
        name: row.get(1)?,
        cards: Vec::new(),
        created_at: DateTime::parse_from_rfc3339(&created_at_str)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now()),
    })
}
