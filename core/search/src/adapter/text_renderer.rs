//! 人間向けのテキスト表示

use crate::adapter::output::Output;
use crate::domain::{CardRecord, Category, CreatureRecord, Foreground, NormalizedRecord, SearchError, StateSummary};
use crate::ports::outbound::{RenderError, ResultRenderer};

pub const NO_IMAGE: &str = "No image available";
pub const NO_RESULTS: &str = "No results found.";

/// カード色 → ANSI 背景色コード
fn ansi_background(color: &str) -> Option<u8> {
    match color {
        "Black" => Some(40),
        "Red" => Some(41),
        "Green" => Some(42),
        "Yellow" => Some(43),
        "Blue" => Some(44),
        "Purple" => Some(45),
        "White" => Some(47),
        _ => None,
    }
}

/// 色名を背景色つきで返す。文字色は Foreground の規則に従う。
pub fn color_label(color: &str, ansi: bool) -> String {
    match ansi_background(color) {
        Some(bg) if ansi => {
            let fg = match Foreground::for_color(Some(color)) {
                Foreground::Light => 97,
                Foreground::Default => 30,
            };
            format!("\x1b[{};{}m {} \x1b[0m", bg, fg, color)
        }
        _ => color.to_string(),
    }
}

fn format_creature(out: &mut String, r: &CreatureRecord) {
    if r.level.is_empty() {
        out.push_str(&format!("{}\n", r.name));
    } else {
        out.push_str(&format!("{}  [{}]\n", r.name, r.level));
    }
    if !r.image_url.is_empty() {
        out.push_str(&format!("  {}\n", r.image_url));
    }
}

fn format_card(out: &mut String, r: &CardRecord, ansi: bool) {
    out.push_str(&format!("{} ({})\n", r.name, r.display_number()));
    let mut traits = Vec::new();
    if let Some(stage) = &r.stage {
        traits.push(format!("Stage: {}", stage));
    }
    if let Some(color) = &r.color {
        traits.push(format!("Color: {}", color_label(color, ansi)));
    }
    if !traits.is_empty() {
        out.push_str(&format!("  {}\n", traits.join("  ")));
    }
    if let Some(effect) = &r.main_effect {
        out.push_str(&format!("  Effect: {}\n", effect));
    }
    if let Some(effect) = &r.source_effect {
        out.push_str(&format!("  Inherited: {}\n", effect));
    }
    out.push_str(&format!("  Image: {}\n", r.image_url.as_deref().unwrap_or(NO_IMAGE)));
}

/// 結果一覧をテキストにする
pub fn format_records(category: Category, records: &[NormalizedRecord], ansi: bool) -> String {
    if records.is_empty() {
        return format!("{}\n", NO_RESULTS);
    }
    let noun = if records.len() == 1 { "result" } else { "results" };
    let mut out = format!("{} {} ({})\n", records.len(), noun, category);
    for record in records {
        out.push('\n');
        match record {
            NormalizedRecord::Creature(r) => format_creature(&mut out, r),
            NormalizedRecord::Card(r) => format_card(&mut out, r, ansi),
        }
    }
    out
}

pub fn format_state(summary: &StateSummary) -> String {
    let cached = if summary.cached.is_empty() {
        "none".to_string()
    } else {
        summary
            .cached
            .iter()
            .map(|c| format!("{} ({})", c.category, c.count))
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "category: {}\nterm: {}\nlevel: {}\ncard type: {}\ncached: {}\n",
        summary.active_category,
        summary.search_term,
        summary.level.as_deref().unwrap_or("(any)"),
        summary.card_type,
        cached
    )
}

/// テキスト表示の ResultRenderer
pub struct TextRenderer {
    output: Output,
    ansi: bool,
}

impl TextRenderer {
    pub fn new(output: Output, ansi: bool) -> Self {
        Self { output, ansi }
    }
}

impl ResultRenderer for TextRenderer {
    fn render(&mut self, category: Category, records: &[NormalizedRecord]) -> Result<(), RenderError> {
        self.output.write_all(&format_records(category, records, self.ansi))
    }

    fn render_error(&mut self, error: &SearchError) -> Result<(), RenderError> {
        eprintln!("digisearch: {}", error);
        Ok(())
    }

    fn render_state(&mut self, summary: &StateSummary) -> Result<(), RenderError> {
        self.output.write_all(&format_state(summary))
    }

    fn render_notice(&mut self, message: &str) -> Result<(), RenderError> {
        println!("{}", message);
        Ok(())
    }
}
