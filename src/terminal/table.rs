//! Bordered tables and panels drawn with ratatui widgets
//!
//! Each view is rendered into an off-screen [`Buffer`] sized to fit its
//! content, then flattened to text for the output sink. Widths are display
//! columns, so wide glyphs (CJK, emoji) keep every line the same width.

use crossterm::style::{style, Stylize};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, BorderType, Cell, Padding, Paragraph, Row, Table, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const COLUMN_SPACING: u16 = 2;

/// Applies ANSI colors when enabled, passes text through otherwise
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        self.styled(text, Style::default().fg(color))
    }

    pub fn bold(&self, text: &str, color: Color) -> String {
        self.styled(text, Style::default().fg(color).add_modifier(Modifier::BOLD))
    }

    fn styled(&self, text: &str, cell_style: Style) -> String {
        if !self.enabled || text.is_empty() {
            return text.to_string();
        }

        let mut content = style(text);
        if let Some(fg) = cell_style.fg.and_then(to_crossterm) {
            content = content.with(fg);
        }
        if cell_style.add_modifier.contains(Modifier::BOLD) {
            content = content.bold();
        }
        content.to_string()
    }

    /// Flatten a rendered buffer into lines of text.
    ///
    /// Cells hidden behind a wide glyph are skipped, the same way terminal
    /// backends do, so each line is exactly `area.width` columns wide.
    pub fn flatten(&self, buf: &Buffer) -> String {
        let width = buf.area.width as usize;
        if width == 0 {
            return String::new();
        }

        let mut lines = Vec::with_capacity(buf.area.height as usize);
        for row in buf.content.chunks(width) {
            let mut line = String::new();
            let mut run = String::new();
            let mut run_style = Style::default();
            let mut hidden = 0usize;

            for cell in row {
                if hidden > 0 {
                    hidden -= 1;
                    continue;
                }
                let symbol = cell.symbol();
                hidden = symbol.width().saturating_sub(1);

                let cell_style = Style::default().fg(cell.fg).add_modifier(cell.modifier);
                if cell_style != run_style && !run.is_empty() {
                    line.push_str(&self.styled(&run, run_style));
                    run.clear();
                }
                run_style = cell_style;
                run.push_str(symbol);
            }
            line.push_str(&self.styled(&run, run_style));
            lines.push(line);
        }
        lines.join("\n")
    }
}

/// ratatui colors as understood by crossterm; `Reset` means "leave as is"
fn to_crossterm(color: Color) -> Option<crossterm::style::Color> {
    use crossterm::style::Color as C;
    let mapped = match color {
        Color::Reset => return None,
        Color::Black => C::Black,
        Color::Red => C::DarkRed,
        Color::Green => C::DarkGreen,
        Color::Yellow => C::DarkYellow,
        Color::Blue => C::DarkBlue,
        Color::Magenta => C::DarkMagenta,
        Color::Cyan => C::DarkCyan,
        Color::Gray => C::Grey,
        Color::DarkGray => C::DarkGrey,
        Color::LightRed => C::Red,
        Color::LightGreen => C::Green,
        Color::LightYellow => C::Yellow,
        Color::LightBlue => C::Blue,
        Color::LightMagenta => C::Magenta,
        Color::LightCyan => C::Cyan,
        Color::White => C::White,
        Color::Rgb(r, g, b) => C::Rgb { r, g, b },
        Color::Indexed(i) => C::AnsiValue(i),
    };
    Some(mapped)
}

fn render_to_buffer<W: Widget>(widget: W, width: usize, height: usize) -> Buffer {
    let area = Rect::new(0, 0, clamp_u16(width), clamp_u16(height));
    let mut buf = Buffer::empty(area);
    widget.render(area, &mut buf);
    buf
}

fn clamp_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// Split `text` into lines no wider than `max` display columns, folding long words
fn fold(text: &str, max: usize) -> Vec<String> {
    if max == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed <= max {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        for ch in word.chars() {
            if current.width() + ch.width().unwrap_or(0) > max && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current.push(ch);
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[derive(Debug, Clone)]
pub struct Column {
    pub header: &'static str,
    pub color: Color,
    pub max_width: usize,
    pub right_align: bool,
}

impl Column {
    pub fn new(header: &'static str, color: Color, max_width: usize) -> Self {
        Self {
            header,
            color,
            max_width,
            right_align: false,
        }
    }

    pub fn right(mut self) -> Self {
        self.right_align = true;
        self
    }
}

/// Titled table; long cells wrap within their column
#[derive(Debug, Clone)]
pub struct DataTable {
    pub title: String,
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl DataTable {
    pub fn new(title: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            title: title.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Add a row; missing cells render empty and extra cells are ignored
    pub fn add_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                let longest = self
                    .rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.width())
                    .max()
                    .unwrap_or(0);
                longest.min(column.max_width).max(column.header.width())
            })
            .collect()
    }

    pub fn render(&self, painter: &Painter) -> String {
        let widths = self.widths();

        let header = Row::new(self.columns.iter().map(|column| {
            Cell::from(column.header).style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        }))
        .bottom_margin(1);

        let mut body_height = 0;
        let rows: Vec<Row> = self
            .rows
            .iter()
            .enumerate()
            .map(|(row_index, row)| {
                let folded: Vec<Vec<String>> = widths
                    .iter()
                    .enumerate()
                    .map(|(i, w)| fold(row.get(i).map(String::as_str).unwrap_or(""), *w))
                    .collect();
                let height = folded.iter().map(Vec::len).max().unwrap_or(1);
                let margin = usize::from(row_index + 1 < self.rows.len());
                body_height += height + margin;

                let cells = self.columns.iter().zip(folded).map(|(column, lines)| {
                    let text = Text::from(lines.into_iter().map(Line::from).collect::<Vec<_>>());
                    let text = if column.right_align { text.alignment(Alignment::Right) } else { text };
                    Cell::from(text).style(Style::default().fg(column.color))
                });
                Row::new(cells).height(clamp_u16(height)).bottom_margin(clamp_u16(margin))
            })
            .collect();

        let title = format!(" {} ", self.title);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(Line::from(title.clone()).centered())
            .title_style(Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD));

        let spacing = COLUMN_SPACING as usize * widths.len().saturating_sub(1);
        let inner = (widths.iter().sum::<usize>() + spacing).max(title.width() + 2);
        let constraints = widths.iter().map(|w| Constraint::Length(clamp_u16(*w)));

        let table = Table::new(rows, constraints)
            .header(header)
            .block(block)
            .column_spacing(COLUMN_SPACING);

        let buf = render_to_buffer(table, inner + 2, body_height + 4);
        painter.flatten(&buf)
    }
}

/// Boxed message with a title in the top border
#[derive(Debug, Clone)]
pub struct Panel {
    pub title: String,
    pub lines: Vec<String>,
    pub border: Color,
    pub text: Color,
}

impl Panel {
    pub fn new(title: impl Into<String>, border: Color, text: Color) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
            border,
            text,
        }
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn render(&self, painter: &Painter) -> String {
        let title = format!(" {} ", self.title);
        let inner = self
            .lines
            .iter()
            .map(|l| l.width())
            .max()
            .unwrap_or(0)
            .max(title.width());

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.border))
            .padding(Padding::horizontal(1))
            .title(title);
        let paragraph = Paragraph::new(self.lines.iter().map(|l| Line::from(l.as_str())).collect::<Vec<_>>())
            .style(Style::default().fg(self.text))
            .block(block);

        let buf = render_to_buffer(paragraph, inner + 4, self.lines.len() + 2);
        painter.flatten(&buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display_widths(rendered: &str) -> Vec<usize> {
        rendered.lines().map(UnicodeWidthStr::width).collect()
    }

    #[test]
    fn test_fold_wraps_words_and_long_tokens() {
        assert_eq!(fold("short", 10), vec!["short"]);
        assert_eq!(fold("one two three", 7), vec!["one two", "three"]);
        assert_eq!(fold("https://example.com/abc", 10), vec!["https://ex", "ample.com/", "abc"]);
        assert_eq!(fold("", 5), vec![""]);
    }

    #[test]
    fn test_fold_counts_display_columns() {
        // Each kana is two columns wide
        assert_eq!(fold("トヨタ自動車", 4), vec!["トヨ", "タ自", "動車"]);
        assert!(fold("トヨタ自動車 決算発表", 12).iter().all(|l| l.width() <= 12));
    }

    #[test]
    fn test_table_lines_have_equal_width() {
        let mut table = DataTable::new(
            "Filings",
            vec![
                Column::new("Date", Color::Cyan, 12),
                Column::new("Description", Color::Green, 10),
            ],
        );
        table.add_row(vec!["01/02/2023".to_string(), "A fairly long text".to_string()]);
        table.add_row(vec!["03/04/2024".to_string()]);

        let rendered = table.render(&Painter::plain());
        let widths = display_widths(&rendered);
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{:?}", widths);
        assert!(rendered.contains("A fairly"));
        assert!(rendered.contains("long text"));
        assert!(rendered.contains("Filings"));
    }

    #[test]
    fn test_wide_glyphs_keep_alignment() {
        let mut table = DataTable::new(
            "📰 Today's News for 7203.T",
            vec![
                Column::new("Time", Color::Cyan, 19).right(),
                Column::new("Title", Color::Green, 16),
            ],
        );
        table.add_row(vec!["03/10/2024 09:00 AM".to_string(), "トヨタ自動車 決算発表".to_string()]);
        table.add_row(vec!["03/09/2024 04:30 PM".to_string(), "Plain title".to_string()]);

        let rendered = table.render(&Painter::plain());
        let widths = display_widths(&rendered);

        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{:?}", widths);
        assert!(rendered.contains("📰 Today's News for 7203.T"));
        assert!(rendered.contains("トヨタ自動車"));
        assert!(rendered.contains("決算発表"));
    }

    #[test]
    fn test_panel_with_wide_glyphs_has_equal_width() {
        let rendered = Panel::new("決算 📄", Color::Yellow, Color::Yellow)
            .line("No news found for 7203.T")
            .line("トヨタ")
            .render(&Painter::plain());
        let widths = display_widths(&rendered);
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{:?}", widths);
    }

    #[test]
    fn test_plain_painter_emits_no_escape_codes() {
        let panel = Panel::new("Info", Color::Yellow, Color::Yellow).line("nothing here");
        let rendered = panel.render(&Painter::plain());
        assert!(!rendered.contains('\u{1b}'));
        assert!(rendered.contains("Info"));
        assert!(rendered.contains("nothing here"));
    }

    #[test]
    fn test_colored_painter_emits_escape_codes() {
        let painted = Painter::new(true).paint("x", Color::Red);
        assert!(painted.contains('\u{1b}'));

        let rendered = Panel::new("Info", Color::Yellow, Color::Yellow)
            .line("styled")
            .render(&Painter::new(true));
        assert!(rendered.contains('\u{1b}'));
        assert!(rendered.contains("styled"));
    }

    #[test]
    fn test_panel_lines_have_equal_width() {
        let rendered = Panel::new("A much longer title", Color::Blue, Color::White)
            .line("x")
            .render(&Painter::plain());
        let widths = display_widths(&rendered);
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
        assert!(rendered.contains("A much longer title"));
    }
}
