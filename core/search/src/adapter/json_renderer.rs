//! 機械向けの JSON 表示（--json）

use serde_json::{json, Value};

use crate::adapter::output::Output;
use crate::domain::{Category, NormalizedRecord, SearchError, StateSummary};
use crate::ports::outbound::{RenderError, ResultRenderer};

/// 1 件を JSON 化する。カードには表示番号と文字色を足す。
pub fn record_json(record: &NormalizedRecord) -> Value {
    let mut v = serde_json::to_value(record).unwrap_or(Value::Null);
    if let (NormalizedRecord::Card(card), Value::Object(map)) = (record, &mut v) {
        map.insert("display_number".to_string(), json!(card.display_number()));
        map.insert("foreground".to_string(), json!(card.foreground()));
    }
    v
}

pub fn results_json(category: Category, records: &[NormalizedRecord]) -> Value {
    json!({
        "category": category,
        "count": records.len(),
        "records": records.iter().map(record_json).collect::<Vec<_>>(),
    })
}

/// JSON 表示の ResultRenderer（1 描画 = 1 行の JSON）
pub struct JsonRenderer {
    output: Output,
}

impl JsonRenderer {
    pub fn new(output: Output) -> Self {
        Self { output }
    }

    fn write(&self, v: &Value) -> Result<(), RenderError> {
        self.output.write_all(&format!("{}\n", v))
    }
}

impl ResultRenderer for JsonRenderer {
    fn render(&mut self, category: Category, records: &[NormalizedRecord]) -> Result<(), RenderError> {
        self.write(&results_json(category, records))
    }

    fn render_error(&mut self, error: &SearchError) -> Result<(), RenderError> {
        eprintln!("{}", json!({ "error": error.to_string() }));
        Ok(())
    }

    fn render_state(&mut self, summary: &StateSummary) -> Result<(), RenderError> {
        self.write(&json!({ "state": summary }))
    }

    fn render_notice(&mut self, message: &str) -> Result<(), RenderError> {
        eprintln!("{}", message);
        Ok(())
    }
}
