//! Help table: every move against every other, from the user's side.

use fair_game_core::OutcomeMatrix;
use tabled::builder::Builder;
use tabled::settings::Style;

/// Corner cell; rows are the user's move, columns the computer's
const CORNER: &str = "User \\ PC";

/// Render the outcome matrix as an ASCII table
pub fn render(matrix: &OutcomeMatrix) -> String {
    let mut builder = Builder::default();

    let mut header = vec![CORNER.to_string()];
    header.extend(matrix.labels().iter().cloned());
    builder.push_record(header);

    for (label, row) in matrix.rows() {
        let mut record = vec![label.to_string()];
        record.extend(row.iter().map(|outcome| outcome.to_string()));
        builder.push_record(record);
    }

    let mut table = builder.build();
    table.with(Style::ascii());
    table.to_string()
}
