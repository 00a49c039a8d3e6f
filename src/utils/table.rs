//! 命令行表格输出

use crate::models::reports::responses::ReportOutput;
use comfy_table::presets::ASCII_MARKDOWN;
use comfy_table::{CellAlignment, Table};

/// 渲染带标题的表格
pub fn render_report(title: &str, output: &ReportOutput) -> String {
    let rule = "=".repeat(title.chars().count().max(40));
    let mut out = format!("{rule}\n{title}\n{rule}\n");

    if output.is_empty() {
        out.push_str("No results found\n");
        return out;
    }

    let (headers, rows) = output.to_table();
    out.push_str(&render_table(&headers, &rows));
    out.push('\n');
    out
}

/// 数字列右对齐
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut table = Table::new();
    table.load_preset(ASCII_MARKDOWN).set_header(headers.to_vec());

    for row in rows {
        table.add_row(row.clone());
    }

    for idx in 0..headers.len() {
        let numeric = rows
            .iter()
            .all(|row| row.get(idx).is_some_and(|cell| cell.parse::<f64>().is_ok()));
        if let (true, Some(column)) = (numeric, table.column_mut(idx)) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::reports::responses::{AverageScore, SubjectItem};

    #[test]
    fn test_render_table_alignment() {
        let rows = vec![
            vec!["1".to_string(), "Math".to_string()],
            vec!["12".to_string(), "Physics".to_string()],
        ];
        let table = render_table(&["subject_id", "subject_name"], &rows);
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[0].contains("subject_id | subject_name"));
        assert!(lines.iter().any(|l| l.contains("         1 | Math")));
        assert!(lines.iter().any(|l| l.contains("        12 | Physics")));
    }

    #[test]
    fn test_render_report_average() {
        let output = ReportOutput::Average(AverageScore { avg_score: 80.0 });
        let rendered = render_report("Overall average grade", &output);
        assert!(rendered.contains("80.00"));
        assert!(!rendered.contains("No results found"));
    }

    #[test]
    fn test_render_report_empty() {
        let output = ReportOutput::Subjects(Vec::<SubjectItem>::new());
        assert!(output.is_empty());
        let rendered = render_report("Subjects", &output);
        assert!(rendered.contains("No results found"));
    }
}
