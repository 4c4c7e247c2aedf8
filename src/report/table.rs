use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
}

// ============================================================================
// Bordered text table
// ============================================================================

/// A plain-text table with `+---+` borders.
///
/// ```text
/// +-----------------------------------+
/// |            Test Summary           |
/// +-------------+---------------------+
/// | Total tests | 12                  |
/// +-------------+---------------------+
/// ```
///
/// Cells may span several lines; cells wider than a column's maximum width
/// are wrapped.
#[derive(Debug, Clone)]
pub struct Table {
    title: Option<String>,
    header: Vec<String>,
    show_header: bool,
    rows: Vec<Vec<String>>,
    align: Vec<Align>,
    min_width: Vec<usize>,
    max_width: Vec<Option<usize>>,
}

impl Table {
    pub fn new(columns: &[&str]) -> Self {
        let n = columns.len();
        Self {
            title: None,
            header: columns.iter().map(|c| c.to_string()).collect(),
            show_header: true,
            rows: Vec::new(),
            align: vec![Align::Center; n],
            min_width: vec![0; n],
            max_width: vec![None; n],
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn without_header(mut self) -> Self {
        self.show_header = false;
        self
    }

    pub fn align(mut self, column: usize, align: Align) -> Self {
        self.align[column] = align;
        self
    }

    pub fn align_all(mut self, align: Align) -> Self {
        self.align.iter_mut().for_each(|a| *a = align);
        self
    }

    pub fn min_width(mut self, column: usize, width: usize) -> Self {
        self.min_width[column] = width;
        self
    }

    pub fn min_width_all(mut self, width: usize) -> Self {
        self.min_width.iter_mut().for_each(|w| *w = width);
        self
    }

    pub fn max_width(mut self, column: usize, width: usize) -> Self {
        self.max_width[column] = Some(width);
        self
    }

    /// Append a row; missing cells are left empty, extra cells dropped.
    pub fn add_row<S: Into<String>>(&mut self, row: impl IntoIterator<Item = S>) {
        let mut cells: Vec<String> = row.into_iter().map(Into::into).collect();
        cells.resize(self.header.len(), String::new());
        self.rows.push(cells);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell content split into display lines, wrapped at the column maximum.
    fn cell_lines(&self, column: usize, text: &str) -> Vec<String> {
        let mut lines = Vec::new();
        for line in text.split('\n') {
            match self.max_width[column] {
                Some(max) if max > 0 && line.chars().count() > max => {
                    let chars: Vec<char> = line.chars().collect();
                    for chunk in chars.chunks(max) {
                        lines.push(chunk.iter().collect());
                    }
                }
                _ => lines.push(line.to_string()),
            }
        }
        lines
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.min_width.clone();

        let mut visible: Vec<&Vec<String>> = self.rows.iter().collect();
        if self.show_header {
            visible.push(&self.header);
        }
        for row in visible {
            for (col, cell) in row.iter().enumerate() {
                let widest = self
                    .cell_lines(col, cell)
                    .iter()
                    .map(|l| l.chars().count())
                    .max()
                    .unwrap_or(0);
                widths[col] = widths[col].max(widest);
            }
        }

        for (col, width) in widths.iter_mut().enumerate() {
            if let Some(max) = self.max_width[col] {
                *width = (*width).min(max.max(self.min_width[col]));
            }
        }

        // Widen the last column when the title does not fit.
        if let Some(title) = &self.title {
            let inner = inner_width(&widths);
            let needed = title.chars().count() + 2;
            if needed > inner {
                if let Some(last) = widths.last_mut() {
                    *last += needed - inner;
                }
            }
        }

        widths
    }

    fn push_rule(out: &mut String, widths: &[usize]) {
        out.push('+');
        for w in widths {
            out.push_str(&"-".repeat(w + 2));
            out.push('+');
        }
        out.push('\n');
    }

    fn push_row(&self, out: &mut String, widths: &[usize], row: &[String], header: bool) {
        let cells: Vec<Vec<String>> = row
            .iter()
            .enumerate()
            .map(|(col, cell)| self.cell_lines(col, cell))
            .collect();
        let height = cells.iter().map(Vec::len).max().unwrap_or(1);

        for line in 0..height {
            out.push('|');
            for (col, width) in widths.iter().enumerate() {
                let text = cells[col].get(line).map(String::as_str).unwrap_or("");
                let align = if header { Align::Center } else { self.align[col] };
                out.push(' ');
                out.push_str(&pad(text, *width, align));
                out.push_str(" |");
            }
            out.push('\n');
        }
    }

    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        if let Some(title) = &self.title {
            let inner = inner_width(&widths);
            out.push('+');
            out.push_str(&"-".repeat(inner));
            out.push_str("+\n|");
            out.push_str(&pad(title, inner, Align::Center));
            out.push_str("|\n");
        }

        Self::push_rule(&mut out, &widths);
        if self.show_header {
            self.push_row(&mut out, &widths, &self.header, true);
            Self::push_rule(&mut out, &widths);
        }
        for row in &self.rows {
            self.push_row(&mut out, &widths, row, false);
        }
        if !self.rows.is_empty() {
            Self::push_rule(&mut out, &widths);
        }

        out
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render().trim_end_matches('\n'))
    }
}

/// Width between the outer borders.
fn inner_width(widths: &[usize]) -> usize {
    widths.iter().map(|w| w + 2).sum::<usize>() + widths.len().saturating_sub(1)
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let fill = width - len;
    match align {
        Align::Left => format!("{}{}", text, " ".repeat(fill)),
        Align::Right => format!("{}{}", " ".repeat(fill), text),
        Align::Center => {
            let left = fill / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(fill - left))
        }
    }
}
