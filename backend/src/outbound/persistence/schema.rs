//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after adding a migration.

diesel::table! {
    /// Application users.
    users (id) {
        /// Storage-generated key (`SERIAL`).
        id -> Int4,
        name -> Varchar,
        surname -> Varchar,
        /// Login handle; renamed from `"userName"` by the second migration.
        user_name -> Varchar,
        email -> Nullable<Varchar>,
        document_id -> Nullable<Varchar>,
        created_date -> Timestamptz,
        /// Renamed from `"ModifiedDate"` by the second migration.
        updated_date -> Timestamptz,
    }
}
