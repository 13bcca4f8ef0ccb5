use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::consts::REPORT_HEADER;
use crate::error::ReportError;

use super::writer::Report;

fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

fn right_cell(text: &str, bold: bool) -> Cell {
    let mut cell = Cell::new(text).set_alignment(CellAlignment::Right);
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
    table
}

/// Average of the numeric counts; rows with an unreadable count are ignored.
pub(crate) fn average_count(rows: &[(String, String)]) -> Option<f64> {
    let counts: Vec<u64> = rows.iter().filter_map(|(_, c)| c.trim().parse().ok()).collect();
    if counts.is_empty() {
        return None;
    }
    Some(counts.iter().sum::<u64>() as f64 / counts.len() as f64)
}

pub(crate) fn render_report_table(rows: &[(String, String)], use_color: bool) -> String {
    let mut table = create_styled_table();
    table.set_header(REPORT_HEADER.iter().map(|h| header_cell(h, use_color)));

    for (date, count) in rows {
        table.add_row(vec![Cell::new(date), right_cell(count, false)]);
    }

    if let Some(avg) = average_count(rows) {
        table.add_row(vec![
            Cell::new("Average").add_attribute(Attribute::Bold),
            right_cell(&format!("{avg:.1}"), true),
        ]);
    }

    table.to_string()
}

pub(crate) fn print_report_table(report: &Report, use_color: bool) -> Result<(), ReportError> {
    let rows = report.read_rows()?;
    if rows.is_empty() {
        println!("{} has no rows yet.", report.path().display());
        return Ok(());
    }
    println!("\n  {}\n", report.path().display());
    println!("{}", render_report_table(&rows, use_color));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(d, c)| (d.to_string(), c.to_string()))
            .collect()
    }

    #[test]
    fn average_skips_unparseable_counts() {
        let r = rows(&[("06-14", "42"), ("06-15", "17"), ("06-16", "n/a")]);
        assert_eq!(average_count(&r), Some(29.5));
    }

    #[test]
    fn average_of_nothing_is_none() {
        assert_eq!(average_count(&[]), None);
    }

    #[test]
    fn table_lists_rows_and_average() {
        let out = render_report_table(&rows(&[("06-14", "42"), ("06-15", "17")]), false);
        assert!(out.contains("Device Count"));
        assert!(out.contains("06-14"));
        assert!(out.contains("06-15"));
        assert!(out.contains("Average"));
        assert!(out.contains("29.5"));
    }
}
