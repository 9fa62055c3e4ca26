use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::logs::repo::LogEntry;

#[derive(Debug, Deserialize)]
pub struct LogsQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_page() -> i64 {
    1
}
fn default_limit() -> i64 {
    50
}

#[derive(Debug, Serialize)]
pub struct LogActor {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct LogListItem {
    pub id: i64,
    pub user_id: Option<Uuid>,
    pub action: String,
    pub result: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub user: Option<LogActor>,
}

impl From<LogEntry> for LogListItem {
    fn from(entry: LogEntry) -> Self {
        let user = match (entry.user_id, entry.user_name, entry.user_email) {
            (Some(id), Some(name), Some(email)) => Some(LogActor { id, name, email }),
            _ => None,
        };
        Self {
            id: entry.id,
            user_id: entry.user_id,
            action: entry.action,
            result: entry.result,
            timestamp: entry.timestamp,
            user,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

#[derive(Debug, Serialize)]
pub struct LogsData {
    pub logs: Vec<LogListItem>,
    pub pagination: PaginationMeta,
}

/// Ceiling division; `limit` is always >= 1 by the time this runs.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    (total + limit - 1) / limit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 50), 0);
        assert_eq!(total_pages(1, 50), 1);
        assert_eq!(total_pages(50, 50), 1);
        assert_eq!(total_pages(51, 50), 2);
        assert_eq!(total_pages(101, 50), 3);
    }

    #[test]
    fn entries_without_an_actor_have_no_user() {
        let entry = LogEntry {
            id: 7,
            user_id: None,
            action: "user_login".into(),
            result: Some("failure".into()),
            timestamp: OffsetDateTime::now_utc(),
            user_name: None,
            user_email: None,
        };
        let item = LogListItem::from(entry);
        assert!(item.user.is_none());
        assert_eq!(item.action, "user_login");
    }
}
