//! stderr へ 1 行要約を出す Log 実装（--verbose 用）と、複数 Log への分配

use crate::error::Error;
use crate::ports::outbound::{Log, LogLevel, LogRecord};
use std::io::Write;
use std::sync::Arc;

/// レコードを `[level] layer/kind: message {fields}` の形で stderr に出す
#[derive(Debug, Clone)]
pub struct StderrLog {
    min_level: LogLevel,
}

impl StderrLog {
    /// `min_level` より詳細なレコードは捨てる（Debug を渡すと全件）
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }
}

pub(crate) fn format_line(record: &LogRecord) -> String {
    let mut line = format!(
        "[{}] {}/{}: {}",
        record.level.as_str(),
        record.layer.as_deref().unwrap_or("-"),
        record.kind.as_deref().unwrap_or("-"),
        record.message
    );
    if let Some(fields) = &record.fields {
        if let Ok(s) = serde_json::to_string(fields) {
            line.push(' ');
            line.push_str(&s);
        }
    }
    line
}

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if record.level > self.min_level {
            return Ok(());
        }
        let mut err = std::io::stderr().lock();
        writeln!(err, "{}", format_line(record)).map_err(|e| Error::io_msg(e.to_string()))
    }
}

/// 複数の Log に同じレコードを流す。1 つが失敗しても残りには書く。
pub struct TeeLog {
    sinks: Vec<Arc<dyn Log>>,
}

impl TeeLog {
    pub fn new(sinks: Vec<Arc<dyn Log>>) -> Self {
        Self { sinks }
    }
}

impl Log for TeeLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        let mut first_err = None;
        for sink in &self.sinks {
            if let Err(e) = sink.log(record) {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct CollectLog(Mutex<Vec<String>>);
    impl Log for CollectLog {
        fn log(&self, record: &LogRecord) -> Result<(), Error> {
            self.0.lock().unwrap().push(record.message.clone());
            Ok(())
        }
    }

    struct FailLog;
    impl Log for FailLog {
        fn log(&self, _record: &LogRecord) -> Result<(), Error> {
            Err(Error::io_msg("disk full"))
        }
    }

    #[test]
    fn test_format_line() {
        let rec = LogRecord::new(LogLevel::Info, "usecase", "cache", "hit").field("category", "card");
        assert_eq!(format_line(&rec), "[info] usecase/cache: hit {\"category\":\"card\"}");
    }

    #[test]
    fn test_tee_log_writes_all_and_reports_failure() {
        let collect = Arc::new(CollectLog(Mutex::new(Vec::new())));
        let tee = TeeLog::new(vec![Arc::new(FailLog), collect.clone()]);
        let result = tee.log(&LogRecord::new(LogLevel::Info, "cli", "lifecycle", "started"));
        assert!(result.is_err());
        assert_eq!(collect.0.lock().unwrap().as_slice(), ["started".to_string()]);
    }
}
