//! Internal Diesel row structs for database operations.
//!
//! These types never leave the persistence layer; repositories convert them
//! into domain entities before returning.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{BaseEntity, User};

use super::schema::users;

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub user_name: String,
    pub email: Option<String>,
    pub document_id: Option<String>,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            base: BaseEntity {
                id: row.id,
                created_date: row.created_date,
                updated_date: row.updated_date,
            },
            name: row.name,
            surname: row.surname,
            user_name: row.user_name,
            email: row.email,
            document_id: row.document_id,
        }
    }
}

/// Insertable struct for creating user records; `id` comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub surname: &'a str,
    pub user_name: &'a str,
    pub email: Option<&'a str>,
    pub document_id: Option<&'a str>,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

impl<'a> NewUserRow<'a> {
    pub(crate) fn from_user(user: &'a User, now: DateTime<Utc>) -> Self {
        Self {
            name: &user.name,
            surname: &user.surname,
            user_name: &user.user_name,
            email: user.email.as_deref(),
            document_id: user.document_id.as_deref(),
            created_date: now,
            updated_date: now,
        }
    }
}

/// Changeset replacing every mutable column; `None` writes `NULL`.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct UserChangeset<'a> {
    pub name: &'a str,
    pub surname: &'a str,
    pub user_name: &'a str,
    pub email: Option<&'a str>,
    pub document_id: Option<&'a str>,
    pub updated_date: DateTime<Utc>,
}

impl<'a> UserChangeset<'a> {
    pub(crate) fn from_user(user: &'a User, now: DateTime<Utc>) -> Self {
        Self {
            name: &user.name,
            surname: &user.surname,
            user_name: &user.user_name,
            email: user.email.as_deref(),
            document_id: user.document_id.as_deref(),
            updated_date: now,
        }
    }
}
