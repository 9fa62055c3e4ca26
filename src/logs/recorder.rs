use std::sync::Arc;

use axum::async_trait;
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crate::state::AppState;

/// A single audit write: who did what, and how it came out. The actor is
/// optional because some recorded failures happen before authentication.
#[derive(Debug, Clone, Copy)]
pub struct AuditEvent {
    pub user_id: Option<Uuid>,
    pub action: &'static str,
    pub result: &'static str,
}

/// Destination for audit events. Production writes to the logs table; tests
/// substitute failing or no-op sinks.
#[async_trait]
pub trait AuditSink: Send + Sync {
    async fn write(&self, event: AuditEvent) -> anyhow::Result<()>;
}

pub struct PgAuditSink {
    db: PgPool,
}

impl PgAuditSink {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuditSink for PgAuditSink {
    async fn write(&self, event: AuditEvent) -> anyhow::Result<()> {
        // Timestamp is assigned by the store.
        sqlx::query(
            r#"
            INSERT INTO logs (user_id, action, result)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(event.user_id)
        .bind(event.action)
        .bind(event.result)
        .execute(&self.db)
        .await?;
        Ok(())
    }
}

/// Record an audit event without touching the caller's outcome. The write
/// runs on a detached task; the response never waits on it, and a failed
/// write is logged and dropped.
pub fn record(state: &AppState, user_id: Option<Uuid>, action: &'static str, result: &'static str) {
    let sink = state.audit.clone();
    tokio::spawn(write_detached(
        sink,
        AuditEvent {
            user_id,
            action,
            result,
        },
    ));
}

async fn write_detached(sink: Arc<dyn AuditSink>, event: AuditEvent) {
    if let Err(e) = sink.write(event).await {
        warn!(error = %e, action = event.action, "audit write failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use std::sync::Mutex;

    struct FailingSink;

    #[async_trait]
    impl AuditSink for FailingSink {
        async fn write(&self, _event: AuditEvent) -> anyhow::Result<()> {
            bail!("log store unavailable")
        }
    }

    #[derive(Default)]
    struct CollectingSink {
        events: Mutex<Vec<AuditEvent>>,
    }

    #[async_trait]
    impl AuditSink for CollectingSink {
        async fn write(&self, event: AuditEvent) -> anyhow::Result<()> {
            self.events.lock().unwrap().push(event);
            Ok(())
        }
    }

    #[tokio::test]
    async fn failed_write_is_swallowed() {
        let sink: Arc<dyn AuditSink> = Arc::new(FailingSink);
        // Must complete without propagating the sink error.
        write_detached(
            sink,
            AuditEvent {
                user_id: None,
                action: "user_login",
                result: "success",
            },
        )
        .await;
    }

    #[tokio::test]
    async fn events_reach_the_sink_unchanged() {
        let sink = Arc::new(CollectingSink::default());
        let actor = Uuid::new_v4();
        write_detached(
            sink.clone(),
            AuditEvent {
                user_id: Some(actor),
                action: "course_created",
                result: "success",
            },
        )
        .await;

        let events = sink.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].user_id, Some(actor));
        assert_eq!(events[0].action, "course_created");
        assert_eq!(events[0].result, "success");
    }
}
