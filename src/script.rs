//! Edit script records for the replay tool.
//!
//! A script is a CSV file describing keystroke-level operations against a
//! field, used to exercise the engine from the command line.

use crate::value::MoneyValue;
use serde::Deserialize;
use std::str::FromStr;

/// Raw script record as read from CSV.
///
/// Column meanings depend on the operation: `insert` uses `text` and `at`
/// (blank `at` appends at the end of the field), `delete` uses `at` and
/// `len` (blank `len` deletes one character), `set` uses `text` as a decimal
/// value.
#[derive(Debug, Deserialize)]
pub struct ScriptRecord {
    /// Operation: insert, delete, set
    pub op: String,

    /// Inserted fragment or decimal value, depending on the operation
    #[serde(default)]
    pub text: Option<String>,

    /// Character position the operation applies at
    #[serde(default)]
    pub at: Option<usize>,

    /// Number of characters a delete removes
    #[serde(default)]
    pub len: Option<usize>,
}

impl ScriptRecord {
    /// Parses the raw CSV record into a typed operation.
    ///
    /// Returns `None` if the record is invalid (unknown op, missing fields,
    /// unparseable value).
    pub fn parse(&self) -> Option<ScriptOp> {
        let op = self.op.trim().to_lowercase();

        match op.as_str() {
            "insert" => {
                let text = self.text.clone()?;
                if text.is_empty() {
                    return None;
                }
                Some(ScriptOp::Insert { text, at: self.at })
            }
            "delete" => Some(ScriptOp::Delete {
                at: self.at?,
                len: self.len.unwrap_or(1).max(1),
            }),
            "set" => {
                let text = self.text.as_ref()?;
                let value = MoneyValue::from_str(text.trim()).ok()?;
                Some(ScriptOp::Set { value })
            }
            _ => None,
        }
    }
}

/// A parsed and validated script operation ready for replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptOp {
    /// Type `text` at character position `at` (end of field when `None`).
    Insert { text: String, at: Option<usize> },

    /// Delete `len` characters starting at character position `at`.
    Delete { at: usize, len: usize },

    /// Commit a canonical value, replacing the field content.
    Set { value: MoneyValue },
}
