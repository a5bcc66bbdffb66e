use crate::shared::data::store;
use chrono::Utc;
use contracts::shared::logger::LogEntry;

/// Append a log record. `source` is "client" or "server".
pub async fn log_event(source: &str, category: &str, message: &str) -> anyhow::Result<()> {
    let mut store = store::write()?;
    let id = store.next_log_id;
    store.next_log_id += 1;
    store.logs.push(LogEntry {
        id,
        timestamp: Utc::now().to_rfc3339(),
        source: source.to_string(),
        category: category.to_string(),
        message: message.to_string(),
    });
    Ok(())
}

/// All log records, newest first
pub async fn get_all_logs() -> anyhow::Result<Vec<LogEntry>> {
    let store = store::read()?;
    let mut logs = store.logs.clone();
    logs.reverse();
    Ok(logs)
}

pub async fn clear_all_logs() -> anyhow::Result<()> {
    let mut store = store::write()?;
    store.logs.clear();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn logs_accumulate_newest_first() {
        log_event("client", "test-lifecycle", "first").await.unwrap();
        log_event("server", "test-lifecycle", "second").await.unwrap();

        let logs = get_all_logs().await.unwrap();
        let ours: Vec<_> = logs
            .iter()
            .filter(|l| l.category == "test-lifecycle")
            .collect();
        assert_eq!(ours.len(), 2);
        assert_eq!(ours[0].message, "second");
        assert!(ours[0].id > ours[1].id);
    }
}
