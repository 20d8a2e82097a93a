use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use juara_core::SessionSummary;

/// One simulated session
pub struct SessionRow {
    pub seed: u64,
    pub summary: SessionSummary,
}

pub fn sessions(rows: &[SessionRow]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Mode").add_attribute(Attribute::Bold),
        Cell::new("Seed"),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Kicks"),
        Cell::new("Hits").fg(Color::Green),
        Cell::new("Acc %"),
        Cell::new("Best"),
        Cell::new("Avg"),
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Match"),
    ]);

    for i in 1..=7 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for row in rows {
        let s = &row.summary;
        let result = s.match_result.map_or_else(
            || "-".to_string(),
            |m| format!("{} {}-{}", m.label(), m.player_goals, m.computer_goals),
        );
        table.add_row(vec![
            Cell::new(s.mode.title()).add_attribute(Attribute::Bold),
            Cell::new(row.seed),
            Cell::new(s.score).fg(Color::Cyan),
            Cell::new(s.attempts),
            Cell::new(s.successes).fg(Color::Green),
            Cell::new(s.accuracy),
            Cell::new(s.best),
            Cell::new(s.average),
            Cell::new(s.rank.label),
            Cell::new(result),
        ]);
    }

    table
}
