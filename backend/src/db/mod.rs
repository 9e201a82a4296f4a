//! # Catalog Database
//!
//! In-memory SQLite store backing the catalog API. A single connection is
//! shared by all workers behind a `tokio::sync::Mutex`; every operation takes
//! the lock for its whole duration, so the slug-uniqueness check and the write
//! that follows it are atomic.
//!
//! The database is created empty by `open_in_memory` (used by tests) or
//! populated with the mock authors and courses from `seed` by `seeded`.

mod seed;

use common::model::author::Author;
use common::model::course::Course;
use rusqlite::{params, Connection, OptionalExtension, Row};
use tokio::sync::Mutex;

use crate::error::{CatalogError, CatalogResult};

const SCHEMA: &str = "
    CREATE TABLE authors (
        id   INTEGER PRIMARY KEY,
        name TEXT NOT NULL
    );
    CREATE TABLE courses (
        id        INTEGER PRIMARY KEY AUTOINCREMENT,
        title     TEXT NOT NULL,
        slug      TEXT NOT NULL UNIQUE,
        author_id INTEGER,
        category  TEXT NOT NULL DEFAULT '',
        length    TEXT NOT NULL DEFAULT ''
    );
";

pub struct CatalogDb {
    conn: Mutex<Connection>,
}

impl CatalogDb {
    /// Opens an empty catalog with the schema applied.
    pub fn open_in_memory() -> CatalogResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Opens a catalog pre-populated with the mock authors and courses.
    pub fn seeded() -> CatalogResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;

        for (id, name) in seed::AUTHORS {
            conn.execute(
                "INSERT INTO authors (id, name) VALUES (?1, ?2)",
                params![id, name],
            )?;
        }
        for (title, slug, author_id, category) in seed::COURSES {
            conn.execute(
                "INSERT INTO courses (title, slug, author_id, category) VALUES (?1, ?2, ?3, ?4)",
                params![title, slug, author_id, category],
            )?;
        }

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub async fn courses(&self) -> CatalogResult<Vec<Course>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(
            "SELECT id, title, slug, author_id, category, length FROM courses ORDER BY id",
        )?;
        let courses = stmt
            .query_map([], course_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(courses)
    }

    pub async fn authors(&self) -> CatalogResult<Vec<Author>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare("SELECT id, name FROM authors ORDER BY id")?;
        let authors = stmt
            .query_map([], |row| {
                Ok(Author {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(authors)
    }

    /// Inserts `course` when it has no id, otherwise updates the row with
    /// that id. The slug must already be set and must not belong to another
    /// course. Returns the stored course with its id filled in.
    pub async fn upsert_course(&self, mut course: Course) -> CatalogResult<Course> {
        let mut conn = self.conn.lock().await;

        let owner: Option<u32> = conn
            .query_row(
                "SELECT id FROM courses WHERE slug = ?1",
                params![course.slug],
                |row| row.get(0),
            )
            .optional()?;
        if matches!(owner, Some(owner) if Some(owner) != course.id) {
            return Err(CatalogError::Conflict { slug: course.slug });
        }

        match course.id {
            Some(id) => {
                let changed = conn.execute(
                    "UPDATE courses SET title = ?1, slug = ?2, author_id = ?3, category = ?4, length = ?5 WHERE id = ?6",
                    params![
                        course.title,
                        course.slug,
                        course.author_id,
                        course.category,
                        course.length,
                        id
                    ],
                )?;
                if changed == 0 {
                    return Err(CatalogError::NotFound { id });
                }
            }
            None => {
                // Rolled back on drop if the new rowid does not fit a course id.
                let tx = conn.transaction()?;
                tx.execute(
                    "INSERT INTO courses (title, slug, author_id, category, length) VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![
                        course.title,
                        course.slug,
                        course.author_id,
                        course.category,
                        course.length
                    ],
                )?;
                course.id = Some(course_id(tx.last_insert_rowid())?);
                tx.commit()?;
            }
        }

        Ok(course)
    }
}

fn course_id(rowid: i64) -> CatalogResult<u32> {
    u32::try_from(rowid).map_err(|_| CatalogError::IdOutOfRange { rowid })
}

fn course_from_row(row: &Row<'_>) -> rusqlite::Result<Course> {
    Ok(Course {
        id: row.get(0)?,
        title: row.get(1)?,
        slug: row.get(2)?,
        author_id: row.get(3)?,
        category: row.get(4)?,
        length: row.get(5)?,
    })
}
