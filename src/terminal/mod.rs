//! Human-readable rendering of pipeline results
//!
//! Everything is written to an injected sink so the views can be tested
//! without touching the process stdout.

pub mod table;

use crate::constants::{MARKET_TIMEZONE_LABEL, RECENT_NEWS_LIMIT};
use crate::error::AppError;
use crate::models::{FilingRecord, NewsRecord, ResultSet, Vertical};
use crate::services::date_normalizer::format_news_time;
use crate::services::NewsDigest;
use crossterm::tty::IsTty;
use ratatui::style::Color;
use std::io::{self, Write};
use table::{Column, DataTable, Painter, Panel};

pub struct TerminalPresenter<W: Write> {
    out: W,
    painter: Painter,
}

impl TerminalPresenter<io::Stdout> {
    /// Presenter on stdout, colored when stdout is a terminal
    pub fn stdout() -> Self {
        let out = io::stdout();
        let colored = out.is_tty();
        Self::new(out, Painter::new(colored))
    }
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, painter: Painter) -> Self {
        Self { out, painter }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn welcome(&mut self) -> io::Result<()> {
        let panel = Panel::new("Stock Scanner", Color::Blue, Color::White)
            .line("Welcome to Stock Scanner CLI!")
            .line("")
            .line("Available commands:")
            .line("  /news TICKER - Get latest news for a stock")
            .line("  /sec TICKER  - Get SEC filings for a stock")
            .line("  /exit        - Exit the application")
            .line("  /help        - Show this help message");
        writeln!(self.out, "{}", panel.render(&self.painter))
    }

    /// Single colored line, used for prompts and inline errors
    pub fn message(&mut self, text: &str, color: Color) -> io::Result<()> {
        writeln!(self.out, "{}", self.painter.paint(text, color))
    }

    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "\n{}: ", self.painter.bold(text, Color::Green))?;
        self.out.flush()
    }

    fn info_line(&mut self, label: &str, value: &str) -> io::Result<()> {
        writeln!(self.out, "{} {}", self.painter.paint(&format!("• {}:", label), Color::Cyan), value)
    }

    /// Error panel for a failed pipeline run
    pub fn error(&mut self, vertical: Vertical, ticker: &str, err: &AppError) -> io::Result<()> {
        let panel = Panel::new("Error Details", Color::Red, Color::Yellow)
            .line(format!("Error fetching {} for {}", vertical.label(), ticker))
            .line("")
            .line(err.to_string());
        writeln!(self.out)?;
        writeln!(self.out, "{}", panel.render(&self.painter))
    }

    /// Filings summary and table, oldest first
    pub fn filings(&mut self, result: &ResultSet<FilingRecord>) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", self.painter.bold("SEC Filings Information:", Color::Blue))?;
        self.info_line("Total Filings", &result.len().to_string())?;

        let (Some(oldest), Some(latest)) = (result.records.first(), result.records.last()) else {
            let panel = Panel::new("SEC Filings", Color::Yellow, Color::Yellow)
                .line(format!("No SEC filings found for {}", result.ticker));
            return writeln!(self.out, "{}", panel.render(&self.painter));
        };
        self.info_line("Oldest", &oldest.filing_date)?;
        self.info_line("Most Recent", &latest.filing_date)?;

        let mut table = DataTable::new(
            format!("📄 SEC Filings for {} (Oldest → Latest)", result.ticker),
            vec![
                Column::new("Filing Date", Color::Cyan, 12),
                Column::new("Form", Color::Yellow, 12),
                Column::new("Description", Color::Green, 48),
                Column::new("URL", Color::Blue, 60),
            ],
        );
        for filing in &result.records {
            table.add_row(vec![
                filing.filing_date.clone(),
                filing.form.clone(),
                filing.description.clone(),
                filing.filing_url.clone(),
            ]);
        }

        writeln!(self.out)?;
        writeln!(self.out, "{}", table.render(&self.painter))
    }

    fn news_table(title: String, items: &[NewsRecord]) -> DataTable {
        let mut table = DataTable::new(
            title,
            vec![
                Column::new("Time", Color::Cyan, 19).right(),
                Column::new("Title", Color::Green, 48),
                Column::new("Source", Color::Yellow, 16),
                Column::new("URL", Color::Blue, 40),
                Column::new("Category", Color::Magenta, 10),
            ],
        );
        for item in items {
            table.add_row(vec![
                format_news_time(&item.date),
                item.title.clone(),
                item.source.clone(),
                item.url.clone(),
                item.category.clone(),
            ]);
        }
        table
    }

    /// News summary, today's items and the most recent items
    pub fn news(&mut self, digest: &NewsDigest) -> io::Result<()> {
        let today = digest.today.format("%Y-%m-%d").to_string();

        writeln!(self.out)?;
        writeln!(self.out, "{}", self.painter.bold("News Information:", Color::Blue))?;
        self.info_line("Ticker", &digest.ticker)?;
        self.info_line(&format!("Current Date ({})", MARKET_TIMEZONE_LABEL), &today)?;
        self.info_line("Today's News Items", &digest.todays.len().to_string())?;
        self.info_line("Total News Items", &digest.total.to_string())?;

        writeln!(self.out)?;
        if digest.todays.is_empty() {
            let panel = Panel::new("Today's News", Color::Yellow, Color::Yellow).line(format!(
                "No news found for {} on {} ({})",
                digest.ticker, today, MARKET_TIMEZONE_LABEL
            ));
            writeln!(self.out, "{}", panel.render(&self.painter))?;
        } else {
            let table = Self::news_table(
                format!("📰 Today's News for {} ({} {})", digest.ticker, today, MARKET_TIMEZONE_LABEL),
                &digest.todays,
            );
            writeln!(self.out, "{}", table.render(&self.painter))?;
        }

        writeln!(self.out)?;
        if digest.recent.is_empty() {
            let panel = Panel::new("Recent News", Color::Yellow, Color::Yellow)
                .line(format!("No news found for {}", digest.ticker));
            writeln!(self.out, "{}", panel.render(&self.painter))
        } else {
            let table = Self::news_table(
                format!("📰 {} Most Recent News Items for {}", RECENT_NEWS_LIMIT, digest.ticker),
                &digest.recent,
            );
            writeln!(self.out, "{}", table.render(&self.painter))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn presenter() -> TerminalPresenter<Vec<u8>> {
        TerminalPresenter::new(Vec::new(), Painter::plain())
    }

    fn output(presenter: TerminalPresenter<Vec<u8>>) -> String {
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    fn filing(date: &str, form: &str) -> FilingRecord {
        FilingRecord {
            filing_date: date.to_string(),
            report_date: String::new(),
            form: form.to_string(),
            description: "Report".to_string(),
            filing_url: "https://sec.example/f".to_string(),
            document_url: String::new(),
        }
    }

    fn news_item(date: &str, title: &str) -> NewsRecord {
        NewsRecord {
            date: date.to_string(),
            title: title.to_string(),
            url: "https://n.example".to_string(),
            source: "Wire".to_string(),
            category: "Stock".to_string(),
        }
    }

    #[test]
    fn test_filings_view() {
        let mut p = presenter();
        let result = ResultSet::new("AAPL", vec![filing("01/02/2022", "8-K"), filing("03/04/2024", "10-K")]);

        p.filings(&result).unwrap();
        let text = output(p);

        assert!(text.contains("• Total Filings: 2"));
        assert!(text.contains("• Oldest: 01/02/2022"));
        assert!(text.contains("• Most Recent: 03/04/2024"));
        assert!(text.contains("SEC Filings for AAPL (Oldest → Latest)"));
        assert!(text.find("8-K").unwrap() < text.find("10-K").unwrap());
    }

    #[test]
    fn test_empty_filings_show_panel() {
        let mut p = presenter();
        p.filings(&ResultSet::new("ZZZZ", Vec::new())).unwrap();
        let text = output(p);

        assert!(text.contains("No SEC filings found for ZZZZ"));
        assert!(!text.contains("Filing Date"));
    }

    #[test]
    fn test_news_view_with_today_items() {
        let mut p = presenter();
        let digest = NewsDigest {
            ticker: "AAPL".to_string(),
            today: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            todays: vec![news_item("2024-03-10 15:45:00", "Fresh")],
            recent: vec![news_item("2024-03-10 15:45:00", "Fresh"), news_item("2024-03-09 10:00:00", "Older")],
            total: 2,
        };

        p.news(&digest).unwrap();
        let text = output(p);

        assert!(text.contains("• Current Date (EST): 2024-03-10"));
        assert!(text.contains("• Today's News Items: 1"));
        assert!(text.contains("Today's News for AAPL (2024-03-10 EST)"));
        assert!(text.contains("10 Most Recent News Items for AAPL"));
        assert!(text.contains("03/10/2024 03:45 PM"));
        assert!(text.contains("Older"));
    }

    #[test]
    fn test_news_view_without_today_items() {
        let mut p = presenter();
        let digest = NewsDigest {
            ticker: "MSFT".to_string(),
            today: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            todays: Vec::new(),
            recent: Vec::new(),
            total: 0,
        };

        p.news(&digest).unwrap();
        let text = output(p);

        assert!(text.contains("No news found for MSFT on 2024-03-10 (EST)"));
        assert!(text.contains("No news found for MSFT"));
        assert!(!text.contains("Most Recent News Items"));
    }

    #[test]
    fn test_error_panel() {
        let mut p = presenter();
        let err = AppError::Config("FINVIZ_API_TOKEN not configured".to_string());

        p.error(Vertical::News, "AAPL", &err).unwrap();
        let text = output(p);

        assert!(text.contains("Error fetching news for AAPL"));
        assert!(text.contains("FINVIZ_API_TOKEN not configured"));
    }

    #[test]
    fn test_welcome_lists_commands() {
        let mut p = presenter();
        p.welcome().unwrap();
        let text = output(p);
        for command in ["/news TICKER", "/sec TICKER", "/exit", "/help"] {
            assert!(text.contains(command));
        }
    }
}
