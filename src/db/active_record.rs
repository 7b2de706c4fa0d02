// src/db/active_record.rs

//! Thin Active-Record layer.
//!
//! A [`Record`] knows its table, its non-key columns and how to bind its own
//! values; the free functions here turn that into parameterized
//! `SELECT` / `INSERT` / `UPDATE` / `DELETE` statements. Every function takes
//! an executor, so the same call works on the pool or inside a transaction
//! (`&mut *tx`).
//!
//! Table and column names come from `const`s in code, never from user input.

use sqlx::{
    postgres::{PgArguments, PgRow},
    query::Query,
    Executor, FromRow, Postgres, Row,
};

pub const PRIMARY_KEY: &str = "id";

pub type PgQuery<'q> = Query<'q, Postgres, PgArguments>;

pub trait Record: for<'r> FromRow<'r, PgRow> + Send + Sync + Unpin {
    const TABLE: &'static str;

    /// Every persisted column except the primary key, in bind order.
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> i32;

    fn set_id(&mut self, id: i32);

    /// Binds one value per entry of `COLUMNS`, same order.
    fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q>;
}

/// Read-only rows backed by a SQL view.
pub trait View: for<'r> FromRow<'r, PgRow> + Send + Sync + Unpin {
    const VIEW: &'static str;
    const ORDER_BY: &'static str;
}

// =============================================================================
//  SQL TEXT
// =============================================================================

pub fn select_all_sql<T: Record>() -> String {
    format!("SELECT * FROM {} ORDER BY {}", T::TABLE, PRIMARY_KEY)
}

pub fn select_by_id_sql<T: Record>() -> String {
    format!("SELECT * FROM {} WHERE {} = $1", T::TABLE, PRIMARY_KEY)
}

pub fn select_where_sql<T: Record>(column: &str) -> String {
    format!(
        "SELECT * FROM {} WHERE {} = $1 ORDER BY {}",
        T::TABLE,
        column,
        PRIMARY_KEY
    )
}

pub fn insert_sql<T: Record>() -> String {
    let placeholders = (1..=T::COLUMNS.len())
        .map(|i| format!("${i}"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        T::TABLE,
        T::COLUMNS.join(", "),
        placeholders,
        PRIMARY_KEY
    )
}

pub fn update_sql<T: Record>() -> String {
    let sets = T::COLUMNS
        .iter()
        .enumerate()
        .map(|(i, column)| format!("{} = ${}", column, i + 1))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "UPDATE {} SET {} WHERE {} = ${}",
        T::TABLE,
        sets,
        PRIMARY_KEY,
        T::COLUMNS.len() + 1
    )
}

pub fn delete_sql<T: Record>() -> String {
    format!("DELETE FROM {} WHERE {} = $1", T::TABLE, PRIMARY_KEY)
}

// =============================================================================
//  OPERATIONS
// =============================================================================

pub async fn find<'e, T, E>(executor: E, id: i32) -> Result<Option<T>, sqlx::Error>
where
    T: Record,
    E: Executor<'e, Database = Postgres>,
{
    let sql = select_by_id_sql::<T>();
    sqlx::query_as::<_, T>(&sql)
        .bind(id)
        .fetch_optional(executor)
        .await
}

pub async fn all<'e, T, E>(executor: E) -> Result<Vec<T>, sqlx::Error>
where
    T: Record,
    E: Executor<'e, Database = Postgres>,
{
    let sql = select_all_sql::<T>();
    sqlx::query_as::<_, T>(&sql).fetch_all(executor).await
}

/// `SELECT * FROM <table> WHERE <column> = $1`.
pub async fn find_where<'e, T, E, V>(
    executor: E,
    column: &'static str,
    value: V,
) -> Result<Vec<T>, sqlx::Error>
where
    T: Record,
    E: Executor<'e, Database = Postgres>,
    V: for<'q> sqlx::Encode<'q, Postgres> + sqlx::Type<Postgres> + Send + 'static,
{
    let sql = select_where_sql::<T>(column);
    sqlx::query_as::<_, T>(&sql)
        .bind(value)
        .fetch_all(executor)
        .await
}

/// Inserts when the record has no id yet, updates otherwise.
pub async fn save<'e, T, E>(executor: E, record: &mut T) -> Result<(), sqlx::Error>
where
    T: Record,
    E: Executor<'e, Database = Postgres>,
{
    if record.id() == 0 {
        insert(executor, record).await
    } else {
        update(executor, record).await
    }
}

pub async fn insert<'e, T, E>(executor: E, record: &mut T) -> Result<(), sqlx::Error>
where
    T: Record,
    E: Executor<'e, Database = Postgres>,
{
    let sql = insert_sql::<T>();
    let row = record
        .bind_columns(sqlx::query(&sql))
        .fetch_one(executor)
        .await?;

    let id: i32 = row.try_get(PRIMARY_KEY)?;
    record.set_id(id);
    Ok(())
}

pub async fn update<'e, T, E>(executor: E, record: &T) -> Result<(), sqlx::Error>
where
    T: Record,
    E: Executor<'e, Database = Postgres>,
{
    let sql = update_sql::<T>();
    let result = record
        .bind_columns(sqlx::query(&sql))
        .bind(record.id())
        .execute(executor)
        .await?;

    if result.rows_affected() == 0 {
        return Err(sqlx::Error::RowNotFound);
    }
    Ok(())
}

/// Hard delete. Returns how many rows went away (0 or 1).
pub async fn delete<'e, T, E>(executor: E, id: i32) -> Result<u64, sqlx::Error>
where
    T: Record,
    E: Executor<'e, Database = Postgres>,
{
    let sql = delete_sql::<T>();
    let result = sqlx::query(&sql).bind(id).execute(executor).await?;
    Ok(result.rows_affected())
}

pub async fn all_rows<'e, T, E>(executor: E) -> Result<Vec<T>, sqlx::Error>
where
    T: View,
    E: Executor<'e, Database = Postgres>,
{
    let sql = format!("SELECT * FROM {} ORDER BY {}", T::VIEW, T::ORDER_BY);
    sqlx::query_as::<_, T>(&sql).fetch_all(executor).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(sqlx::FromRow)]
    struct Widget {
        id: i32,
        name: String,
        weight: i32,
    }

    impl Record for Widget {
        const TABLE: &'static str = "widgets";
        const COLUMNS: &'static [&'static str] = &["name", "weight"];

        fn id(&self) -> i32 {
            self.id
        }

        fn set_id(&mut self, id: i32) {
            self.id = id;
        }

        fn bind_columns<'q>(&'q self, query: PgQuery<'q>) -> PgQuery<'q> {
            query.bind(&self.name).bind(self.weight)
        }
    }

    #[test]
    fn insert_returns_the_generated_key() {
        assert_eq!(
            insert_sql::<Widget>(),
            "INSERT INTO widgets (name, weight) VALUES ($1, $2) RETURNING id"
        );
    }

    #[test]
    fn update_binds_the_key_last() {
        assert_eq!(
            update_sql::<Widget>(),
            "UPDATE widgets SET name = $1, weight = $2 WHERE id = $3"
        );
    }

    #[test]
    fn lookups_are_parameterized() {
        assert_eq!(select_by_id_sql::<Widget>(), "SELECT * FROM widgets WHERE id = $1");
        assert_eq!(
            select_where_sql::<Widget>("name"),
            "SELECT * FROM widgets WHERE name = $1 ORDER BY id"
        );
        assert_eq!(delete_sql::<Widget>(), "DELETE FROM widgets WHERE id = $1");
        assert_eq!(select_all_sql::<Widget>(), "SELECT * FROM widgets ORDER BY id");
    }
}
