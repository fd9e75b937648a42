use super::width::display_width;
use super::width::pad_to_width;
use super::width::truncate_to_width;
use crate::column::ColumnDescriptor;

const GAP: &str = "  ";

/// Renders a column set as an aligned plain-text table.
///
/// Output is a header line, a rule and one line per row. Column widths
/// follow the widest cell, capped by the column's `max_width`; longer
/// cells end in `…`.
///
/// # Example
///
/// ```
/// use dealflow_lib::columns::investor_columns;
/// use dealflow_lib::model::Investor;
/// use dealflow_lib::render::TextTable;
///
/// let columns = investor_columns();
/// let rows = vec![Investor { name: Some("Northwind".into()), ..Default::default() }];
/// let text = TextTable::new(&columns).render(&rows);
/// assert!(text.starts_with("Name"));
/// assert_eq!(text.lines().count(), 3);
/// ```
pub struct TextTable<'a, R> {
    columns: &'a [ColumnDescriptor<R>],
}

impl<'a, R> TextTable<'a, R> {
    pub fn new(columns: &'a [ColumnDescriptor<R>]) -> Self {
        Self { columns }
    }

    /// Renders the header and the given rows.
    pub fn render(&self, rows: &[R]) -> String {
        let header: Vec<String> = self.columns.iter().map(|c| c.header().label()).collect();
        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .map(|c| single_line(&c.render(row).plain_text()))
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                let widest = cells
                    .iter()
                    .map(|line| display_width(&line[i]))
                    .chain(std::iter::once(display_width(&header[i])))
                    .max()
                    .unwrap_or(0);
                match column.meta().max_width {
                    Some(max) => widest.min(max as usize),
                    None => widest,
                }
            })
            .collect();

        let mut out = String::new();
        push_line(&mut out, &header, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_line(&mut out, &rule, &widths);
        for line in &cells {
            push_line(&mut out, line, &widths);
        }
        out
    }
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad_to_width(&truncate_to_width(cell, *width), *width))
        .collect::<Vec<_>>()
        .join(GAP);
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawValue;

    struct Item {
        name: &'static str,
        note: &'static str,
    }

    fn columns() -> Vec<ColumnDescriptor<Item>> {
        vec![
            ColumnDescriptor::new("name", "Name", |r: &Item| RawValue::from(r.name)),
            ColumnDescriptor::new("note", "Note", |r: &Item| RawValue::from(r.note)).max_width(6),
        ]
    }

    #[test]
    fn test_layout() {
        let columns = columns();
        let rows = vec![
            Item {
                name: "Alder",
                note: "ok",
            },
            Item {
                name: "Northwind Capital",
                note: "follow up\nnext week",
            },
        ];
        let text = TextTable::new(&columns).render(&rows);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Name               Note",
                "-----------------  ------",
                "Alder              ok",
                "Northwind Capital  follo…",
            ]
        );
    }

    #[test]
    fn test_empty_rows_still_print_header() {
        let columns = columns();
        let text = TextTable::new(&columns).render(&[]);
        assert_eq!(text, "Name  Note\n----  ----\n");
    }
}
