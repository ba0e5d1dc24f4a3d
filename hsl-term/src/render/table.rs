//! Text tables for departure boards.

use askama::Template;

use crate::board::{Board, BoardError, CycleOutcome};

use super::color::Style;

/// Message shown when the search term matched no stops.
pub const ZERO_RESULTS: &str = "Zero results found";

/// Column headings, in display order.
const HEADER: [&str; 4] = ["Route", "Departure Time", "Headsign", "ETA"];

/// ASCII table with a header row. Cells are pre-padded to column width.
#[derive(Template)]
#[template(
    source = "{{ border }}\n|{% for cell in header %} {{ cell }} |{% endfor %}\n{{ border }}\n{% for row in rows %}|{% for cell in row %} {{ cell }} |{% endfor %}\n{% endfor %}{{ border }}",
    ext = "txt"
)]
pub struct TableTemplate {
    pub border: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableTemplate {
    /// Lay out `header` and `rows`, padding every cell to its column width.
    ///
    /// Widths are counted in characters, so stop names with diacritics line
    /// up.
    pub fn new(header: &[&str], rows: &[Vec<String>]) -> Self {
        let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let border = widths.iter().fold(String::from("+"), |mut acc, &width| {
            acc.push_str(&"-".repeat(width + 2));
            acc.push('+');
            acc
        });

        Self {
            header: pad(header.iter().copied(), &widths),
            rows: rows
                .iter()
                .map(|row| pad(row.iter().map(String::as_str), &widths))
                .collect(),
            border,
        }
    }
}

fn pad<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> Vec<String> {
    cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect()
}

/// Renders cycle outcomes as colored text.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardRenderer {
    style: Style,
}

impl BoardRenderer {
    pub fn new(style: Style) -> Self {
        Self { style }
    }

    /// Render a cycle outcome: one titled table per board, or the
    /// zero-results message.
    pub fn render(&self, outcome: &CycleOutcome) -> Result<String, askama::Error> {
        match outcome {
            CycleOutcome::NoResults => Ok(ZERO_RESULTS.to_string()),
            CycleOutcome::Boards(boards) => {
                let tables = boards
                    .iter()
                    .map(|board| self.render_board(board))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(tables.join("\n\n"))
            }
        }
    }

    /// Render a single board with its title bar.
    pub fn render_board(&self, board: &Board) -> Result<String, askama::Error> {
        let title = format!("+------- {} -------+", board.title);

        let rows: Vec<Vec<String>> = board
            .rows
            .iter()
            .map(|row| {
                vec![
                    row.route.clone(),
                    row.departure_time.clone(),
                    row.headsign.clone(),
                    row.eta.clone(),
                ]
            })
            .collect();
        let table = TableTemplate::new(&HEADER, &rows).render()?;

        Ok(format!(
            "{}\n{}",
            self.style.paint(&title),
            self.style.paint(&table)
        ))
    }

    /// Plain-text description of a failed cycle.
    pub fn render_error(&self, error: &BoardError) -> String {
        format!("Error: {error}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardRow;

    fn row(route: &str, time: &str, headsign: &str, eta: &str) -> BoardRow {
        BoardRow {
            route: route.into(),
            departure_time: time.into(),
            headsign: headsign.into(),
            eta: eta.into(),
        }
    }

    fn kamppi() -> Board {
        Board {
            title: "Kamppi (H1236)".into(),
            rows: vec![
                row("M1", "14:02", "Vuosaari", "~ 4 min"),
                row("55", "14:10", "Koskela", "~ 12 min"),
            ],
        }
    }

    #[test]
    fn table_layout() {
        let rows = vec![vec!["a".to_string(), "long cell".to_string()]];
        let table = TableTemplate::new(&["Head", "X"], &rows).render().unwrap();
        assert_eq!(
            table,
            "+------+-----------+\n\
             | Head | X         |\n\
             +------+-----------+\n\
             | a    | long cell |\n\
             +------+-----------+"
        );
    }

    #[test]
    fn table_without_rows() {
        let table = TableTemplate::new(&["Route"], &[]).render().unwrap();
        assert_eq!(table, "+-------+\n| Route |\n+-------+\n+-------+");
    }

    #[test]
    fn width_counts_characters() {
        let rows = vec![vec!["Mellunmäki".to_string()]];
        let template = TableTemplate::new(&["Headsign"], &rows);
        assert_eq!(template.border, "+------------+");
        assert_eq!(template.header, ["Headsign  "]);
    }

    #[test]
    fn render_plain_board() {
        let text = BoardRenderer::default().render_board(&kamppi()).unwrap();
        assert_eq!(
            text,
            "+------- Kamppi (H1236) -------+\n\
             +-------+----------------+----------+----------+\n\
             | Route | Departure Time | Headsign | ETA      |\n\
             +-------+----------------+----------+----------+\n\
             | M1    | 14:02          | Vuosaari | ~ 4 min  |\n\
             | 55    | 14:10          | Koskela  | ~ 12 min |\n\
             +-------+----------------+----------+----------+"
        );
    }

    #[test]
    fn render_colored_board() {
        let style = Style::parse(Some("green"), None).unwrap();
        let text = BoardRenderer::new(style).render_board(&kamppi()).unwrap();
        assert!(text.starts_with("\x1b[32m+------- Kamppi (H1236) -------+\x1b[0m\n\x1b[32m+---"));
        assert!(text.ends_with("+\x1b[0m"));
    }

    #[test]
    fn render_multiple_boards() {
        let mut other = kamppi();
        other.title = "Kamppi (H1237)".into();
        let outcome = CycleOutcome::Boards(vec![kamppi(), other]);

        let text = BoardRenderer::default().render(&outcome).unwrap();

        let first = text.find("Kamppi (H1236)").unwrap();
        let second = text.find("Kamppi (H1237)").unwrap();
        assert!(first < second);
        assert!(text.contains("+\n\n+------- Kamppi (H1237)"));
    }

    #[test]
    fn render_no_results() {
        let text = BoardRenderer::default()
            .render(&CycleOutcome::NoResults)
            .unwrap();
        assert_eq!(text, "Zero results found");
    }

    #[test]
    fn render_error_is_plain_text() {
        let style = Style::parse(Some("red"), None).unwrap();
        let text = BoardRenderer::new(style).render_error(&BoardError::Transport("timed out".into()));
        assert_eq!(text, "Error: transport error: timed out");
    }
}
