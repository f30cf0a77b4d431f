//! X resource file handling for menu entries.
//!
//! Menu items are described by resource lines of the form
//!
//! ```text
//! XFile*toolsMenu.<identifier>.labelString:    <label>
//! XFile*toolsMenu.<identifier>.positionIndex:  <n>
//! ```
//!
//! The order of the `labelString` lines is the desired (canonical) order.
//! The `positionIndex` values are what the toolkit sorts by, and what gets
//! rewritten once positions are known. Everything else in the file is
//! carried through untouched.

pub mod store;

pub use store::ResourceStore;

use std::collections::BTreeSet;
use std::ops::Range;

use crate::menu::PositionAssignment;

const LABEL_SUFFIX: &str = ".labelString:";
const POSITION_SUFFIX: &str = ".positionIndex";

/// Names that select the menu's resource lines.
#[derive(Debug, Clone, Copy)]
pub struct MenuResources<'a> {
    /// Application class that starts each relevant line (e.g. `XFile`).
    pub app_class: &'a str,
    /// Menu widget name before each identifier (e.g. `toolsMenu`).
    pub menu: &'a str,
}

impl MenuResources<'_> {
    /// Ordered `(identifier, label)` pairs from the file's `labelString` lines.
    ///
    /// The label is everything after the colon minus leading blanks; trailing
    /// blanks are part of the label. Lines that do not name an item of this
    /// menu are skipped.
    #[must_use]
    pub fn labels(&self, contents: &str) -> Vec<(String, String)> {
        contents
            .lines()
            .filter(|line| line.starts_with(self.app_class))
            .filter_map(|line| {
                let idx = line.rfind(LABEL_SUFFIX)?;
                let identifier = self.identifier(&line[..idx])?;
                let label =
                    line[idx + LABEL_SUFFIX.len()..].trim_start_matches([' ', '\t']);
                Some((identifier.to_string(), label.to_string()))
            })
            .collect()
    }

    /// Rewrites the `positionIndex` value of every assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns an error naming the identifiers that have no numeric
    /// `positionIndex` line (a symbolic value such as `XmLAST_POSITION` does
    /// not count); in that case nothing is rewritten.
    pub fn apply_positions(
        &self,
        contents: &str,
        positions: &PositionAssignment,
    ) -> Result<String, String> {
        let mut touched = BTreeSet::new();
        let rewritten = self.rewrite_positions(contents, |identifier, _| {
            let position = positions.get(identifier)?;
            touched.insert(identifier.to_string());
            Some(position)
        });

        let missing: Vec<&str> =
            positions.iter().map(|(id, _)| id).filter(|id| !touched.contains(*id)).collect();
        if !missing.is_empty() {
            return Err(format!("no numeric positionIndex resource for: {}", missing.join(", ")));
        }
        Ok(rewritten)
    }

    /// Sets every numeric `positionIndex` of this menu to zero.
    ///
    /// Returns the new contents and the number of values that were not
    /// already zero.
    #[must_use]
    pub fn reset_positions(&self, contents: &str) -> (String, usize) {
        let mut count = 0;
        let rewritten = self.rewrite_positions(contents, |_, current| {
            if current.bytes().all(|b| b == b'0') {
                return None;
            }
            count += 1;
            Some(0)
        });
        (rewritten, count)
    }

    /// Replaces numeric `positionIndex` values for which `new_value` returns
    /// `Some`. The callback gets the identifier and the current digits.
    fn rewrite_positions(
        &self,
        contents: &str,
        mut new_value: impl FnMut(&str, &str) -> Option<usize>,
    ) -> String {
        let mut out = String::with_capacity(contents.len());
        for raw in contents.split_inclusive('\n') {
            let body = raw.trim_end_matches(['\n', '\r']);
            let replacement = self
                .position_value(body)
                .and_then(|(id, digits)| Some((new_value(id, &body[digits.clone()])?, digits)));
            match replacement {
                Some((value, digits)) => {
                    out.push_str(&body[..digits.start]);
                    out.push_str(&value.to_string());
                    out.push_str(&raw[digits.end..]);
                }
                None => out.push_str(raw),
            }
        }
        out
    }

    /// For a `positionIndex` line of this menu, the identifier and the byte
    /// range of its numeric value. Lines whose value is not a number are
    /// left to the toolkit.
    fn position_value<'l>(&self, line: &'l str) -> Option<(&'l str, Range<usize>)> {
        if !line.starts_with(self.app_class) {
            return None;
        }
        let colon = line.find(':')?;
        let key = line[..colon].trim_end().strip_suffix(POSITION_SUFFIX)?;
        let identifier = self.identifier(key)?;

        let value = &line[colon + 1..];
        let start = colon + 1 + (value.len() - value.trim_start_matches([' ', '\t']).len());
        let digits = line[start..].bytes().take_while(u8::is_ascii_digit).count();
        (digits > 0).then_some((identifier, start..start + digits))
    }

    /// The identifier following `<menu>.` in a resource key.
    fn identifier<'k>(&self, key: &'k str) -> Option<&'k str> {
        let marker = format!("{}.", self.menu);
        let start = key.rfind(&marker)? + marker.len();
        let identifier = &key[start..];
        (!identifier.is_empty()).then_some(identifier)
    }
}
