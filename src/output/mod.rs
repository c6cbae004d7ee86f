//! Writing paper records to CSV files or the console.

use comfy_table::{Attribute, Cell, Table};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use unicode_width::UnicodeWidthChar;

use crate::models::{PaperRecord, CSV_HEADERS};

/// Widest title shown in table output before truncation
const TABLE_TITLE_WIDTH: usize = 60;

/// Errors raised while writing results
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Console rendering style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleFormat {
    Table,
    Json,
    Plain,
}

/// Write `papers` to `path` as CSV, replacing any existing file.
///
/// The header row is always written, so an empty result set still yields a
/// valid file.
pub fn write_csv(path: &Path, papers: &[PaperRecord]) -> Result<(), OutputError> {
    let file = File::create(path)?;
    write_csv_to(file, papers)?;
    tracing::trace!("Wrote {} rows to {}", papers.len(), path.display());
    Ok(())
}

/// Write `papers` as CSV to any writer.
pub fn write_csv_to<W: Write>(writer: W, papers: &[PaperRecord]) -> Result<(), OutputError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADERS)?;
    for paper in papers {
        csv_writer.write_record(paper.fields())?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Render `papers` for the console in the requested format.
pub fn render(papers: &[PaperRecord], format: ConsoleFormat) -> Result<String, OutputError> {
    let rendered = match format {
        ConsoleFormat::Json => serde_json::to_string_pretty(papers)?,
        ConsoleFormat::Plain => render_plain(papers),
        ConsoleFormat::Table => render_table(papers),
    };
    Ok(rendered)
}

/// Print `papers` to stdout in the requested format.
pub fn print_papers(papers: &[PaperRecord], format: ConsoleFormat) -> Result<(), OutputError> {
    let rendered = render(papers, format)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", rendered)?;
    Ok(())
}

fn render_table(papers: &[PaperRecord]) -> String {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(CSV_HEADERS.to_vec());

    for paper in papers {
        let [id, title, date, authors, companies, email] = paper.fields();
        table.add_row(vec![
            Cell::new(id),
            Cell::new(truncate_with_ellipsis(title, TABLE_TITLE_WIDTH)).add_attribute(Attribute::Bold),
            Cell::new(date),
            Cell::new(authors),
            Cell::new(companies),
            Cell::new(email),
        ]);
    }

    table.to_string()
}

fn render_plain(papers: &[PaperRecord]) -> String {
    if papers.is_empty() {
        return "No papers found.".to_string();
    }

    let mut out = String::new();
    for paper in papers {
        out.push_str(&format!("{} ({})\n", paper.title, paper.publication_date));
        out.push_str(&format!("  PMID: {}\n", paper.pubmed_id));
        out.push_str(&format!("  URL: {}\n", paper.url()));
        out.push('\n');
    }
    out.trim_end().to_string()
}

/// Truncate `text` to at most `max_width` display columns, appending "..." when cut.
fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(1)).sum();
    if total <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut width = 0;
    let mut truncated = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(1);
        if width + w > budget {
            break;
        }
        width += w;
        truncated.push(c);
    }
    format!("{}...", truncated)
}
