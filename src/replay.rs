//! Edit-script replay engine.
//!
//! Plays a CSV edit script against a [`CurrencyField`], acting as the field
//! adapter: it applies each operation to the current text, hands the raw
//! edit to the engine, and records the resulting field state. Invalid
//! records are logged at warn level and skipped.

use crate::config::FormatConfig;
use crate::error::Result;
use crate::field::CurrencyField;
use crate::notify::ValidationState;
use crate::script::{ScriptOp, ScriptRecord};
use crate::value::MoneyValue;
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use std::io::{Read, Write};

/// Field state recorded after one script operation.
#[derive(Debug, Clone)]
pub struct FieldSnapshot {
    /// Display text after the operation.
    pub display: String,

    /// Cursor offset, in characters.
    pub cursor: usize,

    /// Canonical value of the display text.
    pub value: MoneyValue,

    /// Validation state after the operation.
    pub state: ValidationState,
}

/// Streams script records through a field and collects snapshots.
pub struct ReplayEngine {
    field: CurrencyField,
    snapshots: Vec<FieldSnapshot>,
}

impl ReplayEngine {
    /// Creates an engine around a fresh field with the given configuration.
    pub fn new(config: FormatConfig) -> Self {
        ReplayEngine {
            field: CurrencyField::new(config),
            snapshots: Vec::new(),
        }
    }

    /// Processes script records from a CSV reader in streaming fashion.
    ///
    /// Records are read one at a time; invalid records are logged at warn
    /// level and skipped so a malformed row never aborts the replay.
    pub fn process_csv<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        for (row_idx, result) in csv_reader.deserialize::<ScriptRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            match result {
                Ok(record) => match record.parse() {
                    Some(op) => self.apply(op, row_num),
                    None => warn!("Row {}: Failed to parse script record", row_num),
                },
                Err(e) => {
                    warn!("Row {}: CSV parse error: {}", row_num, e);
                }
            }
        }

        Ok(())
    }

    /// Applies one operation and records the resulting field state.
    fn apply(&mut self, op: ScriptOp, row: usize) {
        match op {
            ScriptOp::Insert { text, at } => {
                let old: Vec<char> = self.field.text().chars().collect();
                let at = at.unwrap_or(old.len()).min(old.len());
                let mut new = old.clone();
                let fragment: Vec<char> = text.chars().collect();
                for (offset, &ch) in fragment.iter().enumerate() {
                    new.insert(at + offset, ch);
                }
                let edit_position = at + fragment.len();
                let old: String = old.into_iter().collect();
                let new: String = new.into_iter().collect();
                let outcome = self.field.on_edit(&old, &new, &text, edit_position);
                debug!(
                    "Row {}: Inserted {:?} at {}, display {:?}",
                    row, text, at, outcome.text
                );
            }
            ScriptOp::Delete { at, len } => {
                let old: Vec<char> = self.field.text().chars().collect();
                let at = at.min(old.len());
                let end = (at + len).min(old.len());
                let mut new = old.clone();
                new.drain(at..end);
                let old: String = old.into_iter().collect();
                let new: String = new.into_iter().collect();
                let outcome = self.field.on_edit(&old, &new, "", at);
                debug!(
                    "Row {}: Deleted {}..{}, display {:?}",
                    row, at, end, outcome.text
                );
            }
            ScriptOp::Set { value } => {
                let display = self.field.set_value(value);
                debug!("Row {}: Set value {}, display {:?}", row, value, display);
            }
        }

        self.snapshots.push(FieldSnapshot {
            display: self.field.text().to_string(),
            cursor: self.field.cursor(),
            value: self.field.value(),
            state: self.field.validation_state().clone(),
        });
    }

    /// Snapshots recorded so far, one per applied operation.
    pub fn snapshots(&self) -> &[FieldSnapshot] {
        &self.snapshots
    }

    /// Writes recorded snapshots as CSV, one row per operation.
    pub fn write_output<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["display", "cursor", "value", "state"])?;

        for snapshot in &self.snapshots {
            csv_writer.write_record([
                snapshot.display.clone(),
                snapshot.cursor.to_string(),
                snapshot.value.to_string(),
                snapshot.state.to_string(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Returns the field (for testing).
    #[cfg(test)]
    pub fn field(&self) -> &CurrencyField {
        &self.field
    }
}

impl Default for ReplayEngine {
    fn default() -> Self {
        ReplayEngine::new(FormatConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn dollars() -> FormatConfig {
        FormatConfig::default().with_currency_symbol("$")
    }

    fn process_csv_str(csv: &str) -> ReplayEngine {
        let mut engine = ReplayEngine::new(dollars());
        engine.process_csv(Cursor::new(csv)).unwrap();
        engine
    }

    #[test]
    fn test_insert_sequence_groups_digits() {
        let csv = "op,text,at,len
insert,1,,
insert,0,,
insert,0,,
insert,0,,";

        let engine = process_csv_str(csv);
        assert_eq!(engine.field().text(), "$ 1,000");

        let displays: Vec<&str> = engine
            .snapshots()
            .iter()
            .map(|s| s.display.as_str())
            .collect();
        assert_eq!(displays, vec!["$ 1", "$ 10", "$ 100", "$ 1,000"]);
    }

    #[test]
    fn test_delete_reformats() {
        let csv = "op,text,at,len
set,1000,,
delete,,3,1";

        let engine = process_csv_str(csv);
        // "$ 1,000" with the ',' deleted leaves the digits untouched.
        assert_eq!(engine.field().text(), "$ 1,000");
    }

    #[test]
    fn test_delete_digit() {
        let csv = "op,text,at,len
set,1000,,
delete,,2,1";

        let engine = process_csv_str(csv);
        assert_eq!(engine.field().text(), "$ 000");
    }

    #[test]
    fn test_set_value_snapshot() {
        let csv = "op,text,at,len
set,1320.5,,";

        let engine = process_csv_str(csv);
        let snapshot = &engine.snapshots()[0];
        assert_eq!(snapshot.display, "$ 1,320.5");
        assert_eq!(snapshot.cursor, 9);
        assert_eq!(snapshot.value.to_string(), "1320.5");
        assert!(snapshot.state.is_ok());
    }

    #[test]
    fn test_invalid_rows_are_skipped() {
        let csv = "op,text,at,len
jump,5,,
insert,5,,";

        let engine = process_csv_str(csv);
        assert_eq!(engine.snapshots().len(), 1);
        assert_eq!(engine.field().text(), "$ 5");
    }

    #[test]
    fn test_output_format() {
        let csv = "op,text,at,len
insert,5,,
insert,.,,
insert,2,,";

        let engine = process_csv_str(csv);
        let mut output = Vec::new();
        engine.write_output(&mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert!(output_str.starts_with("display,cursor,value,state"));
        assert!(output_str.contains("$ 5,3,5,ok"));
        assert!(output_str.contains("$ 5.2,5,5.2,ok"));
    }
}
