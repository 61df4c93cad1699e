use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::CheckResult;

pub fn print_check_summary(result: &CheckResult) {
    let CheckResult { draft, report } = result;

    if !report.meta_issues.is_empty() {
        println!("Assignment metadata:");
        for issue in &report.meta_issues {
            println!("  - {issue}");
        }
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Order"),
        header_cell("Kind"),
        header_cell("Question"),
        header_cell("Issues"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Left);

    for (index, question) in draft.questions().iter().enumerate() {
        let issues: Vec<String> = report
            .findings
            .iter()
            .filter(|finding| finding.index == index)
            .flat_map(|finding| finding.issues.iter().map(ToString::to_string))
            .collect();
        let issue_cell = if issues.is_empty() {
            Cell::new("ok").fg(Color::Green)
        } else {
            Cell::new(issues.join("; ")).fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(question.order),
            Cell::new(question.kind.as_str()),
            Cell::new(truncate(&question.text, 48)),
            issue_cell,
        ]);
    }
    println!("{table}");

    let errors = report.error_count();
    if errors == 0 {
        println!("Valid: the draft would pass submission gating.");
    } else {
        println!(
            "{errors} error(s) across {} question(s); first invalid: {}",
            report.findings.len(),
            report
                .first_invalid
                .map(|index| (index + 1).to_string())
                .unwrap_or_else(|| "-".to_string())
        );
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let prefix: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{prefix}\u{2026}")
    }
}
