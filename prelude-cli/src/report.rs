//! Plain-text rendering of the account activity report.

use prelude_core::models::AccountActivity;

const HEADERS: [&str; 6] = [
    "test",
    "endpoints (#)",
    "ok (%)",
    "defended (%)",
    "failed (%)",
    "error (%)",
];

/// One row per test, columns padded to the widest cell.
pub fn render_activity(activity: &AccountActivity) -> String {
    let rows: Vec<[String; 6]> = activity
        .iter()
        .map(|(test, counts)| {
            let pct = counts.percentages();
            [
                test.to_string(),
                counts.volume().to_string(),
                pct.ok.to_string(),
                pct.detected.to_string(),
                pct.failed.to_string(),
                pct.error.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    push_line(&mut out, HEADERS.iter().copied(), &widths);
    for row in &rows {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize; 6]) {
    let line: Vec<String> = cells
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}
