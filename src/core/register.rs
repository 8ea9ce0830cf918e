//! Visitor and newcomer registration.

use crate::cache::{KeyValueStore, USER_DATA_KEY, get_json, set_json};
use crate::db::log::oplog_or_warn;
use crate::db::pool::DbPool;
use crate::db::records::put_document;
use crate::errors::{AppError, AppResult};
use crate::models::user::{DEPARTMENTS, NewcomerDoc, OFFICES, UserDoc, VisitorDoc, YEAR_LEVELS};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

#[derive(Debug, Clone, Default)]
pub struct VisitorForm {
    pub name: String,
    pub purpose: Option<String>,
    pub office: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewcomerForm {
    pub name: String,
    pub department: String,
    pub year_level: String,
}

/// Trimmed value, or an error when it is not one of `allowed`.
fn pick(value: &str, allowed: &[&str], what: &str) -> AppResult<String> {
    let v = value.trim();
    allowed
        .iter()
        .find(|a| a.eq_ignore_ascii_case(v))
        .map(|a| a.to_string())
        .ok_or_else(|| {
            AppError::Registration(format!(
                "Unknown {what}: '{v}' (expected one of: {})",
                allowed.join(", ")
            ))
        })
}

fn registered_at(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub struct RegisterLogic;

impl RegisterLogic {
    pub fn register_visitor(
        pool: &mut DbPool,
        cache: &mut dyn KeyValueStore,
        form: &VisitorForm,
        now: DateTime<Utc>,
    ) -> AppResult<VisitorDoc> {
        let name = form.name.trim();
        if name.is_empty() {
            return Err(AppError::Registration("Please enter your name".into()));
        }

        let office = match form.office.as_deref().map(str::trim) {
            None | Some("") => String::new(),
            Some(o) => pick(o, &OFFICES, "office")?,
        };

        let doc = VisitorDoc {
            id: format!("visitor_{}", now.timestamp_millis()),
            name: name.to_string(),
            purpose: form.purpose.as_deref().unwrap_or("").trim().to_string(),
            office,
            kind: "visitor".to_string(),
            registered_at: registered_at(now),
        };

        Self::persist(pool, cache, &doc.id, &doc.kind, &UserDoc::Visitor(doc.clone()))?;
        Ok(doc)
    }

    pub fn register_newcomer(
        pool: &mut DbPool,
        cache: &mut dyn KeyValueStore,
        form: &NewcomerForm,
        now: DateTime<Utc>,
    ) -> AppResult<NewcomerDoc> {
        if let Some(name) = Self::cached_newcomer(cache) {
            return Err(AppError::AlreadyRegistered(name));
        }

        if form.name.trim().is_empty()
            || form.department.trim().is_empty()
            || form.year_level.trim().is_empty()
        {
            return Err(AppError::Registration(
                "Please fill in all required fields".into(),
            ));
        }

        let doc = NewcomerDoc {
            id: format!("newcomer_{}", now.timestamp_millis()),
            name: form.name.trim().to_string(),
            department: pick(&form.department, &DEPARTMENTS, "department")?,
            year_level: pick(&form.year_level, &YEAR_LEVELS, "year level")?,
            kind: "newcomer".to_string(),
            registered_at: registered_at(now),
        };

        Self::persist(pool, cache, &doc.id, &doc.kind, &UserDoc::Newcomer(doc.clone()))?;
        Ok(doc)
    }

    /// Document store first, cache second: a failed store write leaves the
    /// cache untouched.
    fn persist(
        pool: &mut DbPool,
        cache: &mut dyn KeyValueStore,
        id: &str,
        kind: &str,
        user: &UserDoc,
    ) -> AppResult<()> {
        put_document(pool, id, kind, user)
            .map_err(|e| AppError::Registration(format!("Failed to register. Please try again. ({e})")))?;

        set_json(cache, USER_DATA_KEY, user)?;

        oplog_or_warn(
            &pool.conn,
            &format!("register_{kind}"),
            id,
            &format!("Registered {kind} '{}'", user.name()),
        );
        Ok(())
    }

    /// The user cached by the last registration, if any (malformed data is ignored).
    pub fn current_user(cache: &dyn KeyValueStore) -> Option<UserDoc> {
        get_json(cache, USER_DATA_KEY)
    }

    /// Name of the cached user when its `type` is `newcomer`, whatever the
    /// other fields hold.
    fn cached_newcomer(cache: &dyn KeyValueStore) -> Option<String> {
        let user: Value = get_json(cache, USER_DATA_KEY)?;
        if user.get("type").and_then(Value::as_str) != Some("newcomer") {
            return None;
        }
        let name = user.get("name").and_then(Value::as_str).unwrap_or_default();
        Some(name.to_string())
    }

    /// Forget the cached user; returns who was logged out.
    pub fn logout(cache: &mut dyn KeyValueStore) -> AppResult<Option<UserDoc>> {
        let user = Self::current_user(cache);
        cache.remove(USER_DATA_KEY)?;
        Ok(user)
    }
}
