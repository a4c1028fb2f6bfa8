//! Delimited-text reader shared by all simulator formats.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};

use super::columns::{ColumnMap, FIELDS};
use super::error::{SourceError, SourceResult};
use super::kind::SimulatorKind;
use super::row::Row;

/// Read every row of an export.
///
/// `time_offset` (seconds since the Unix epoch) is added to each row's
/// relative timestamp. Cells are trimmed, so X-Plane's padded columns parse
/// the same as FlightGear's compact ones.
pub fn read_rows<R: Read>(
    reader: R,
    kind: SimulatorKind,
    columns: &ColumnMap,
    time_offset: f64,
) -> SourceResult<Vec<Row>> {
    let mut csv = ReaderBuilder::new()
        .delimiter(kind.delimiter())
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let header = csv.headers()?.clone();
    let indices = columns.resolve(&header)?;
    let raw_names = columns.headers();

    let mut rows = Vec::new();
    for record in csv.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let mut values = [0.0f64; 15];
        for (slot, (&index, name)) in values.iter_mut().zip(indices.iter().zip(raw_names)) {
            *slot = parse_cell(&record, index, line, name)?;
        }

        let mut row = row_from_values(&values);
        row.time += time_offset;
        kind.adjust(&mut row);
        rows.push(row);
    }

    tracing::debug!(
        simulator = %kind,
        rows = rows.len(),
        fields = FIELDS.len(),
        "Parsed flight log"
    );

    Ok(rows)
}

fn parse_cell(record: &StringRecord, index: usize, line: u64, column: &str) -> SourceResult<f64> {
    let raw = record.get(index).unwrap_or("");
    raw.parse::<f64>().map_err(|_| SourceError::InvalidValue {
        line,
        column: column.to_string(),
        value: raw.to_string(),
    })
}

fn row_from_values(v: &[f64; 15]) -> Row {
    Row {
        time: v[0],
        lon: v[1],
        lat: v[2],
        alt: v[3],
        hgt: v[4],
        hdg: v[5],
        ias: v[6],
        gs: v[7],
        tas: v[8],
        vs: v[9],
        flaps: v[10],
        stall: v[11],
        outer_marker: v[12] > 0.0,
        middle_marker: v[13] > 0.0,
        inner_marker: v[14] > 0.0,
    }
}
