//! Per-page row schemas
//!
//! Each page family declares how its rows are shaped once, as a constant
//! [`RowSchema`], instead of coercing values ad hoc while rendering.

use crate::row::Row;
use crate::value::CellValue;

/// What an empty cell turns into before rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyFill {
    /// Empty cells render as the empty string
    Blank,
    /// Empty cells are replaced with a fixed marker
    Placeholder(&'static str),
}

/// Column aliases, numeric columns and empty-cell policy for one page family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSchema {
    /// `(source column, alias)` pairs; the source key is replaced by the alias
    pub aliases: &'static [(&'static str, &'static str)],
    /// Columns parsed into numbers (whole numbers then print as integers)
    pub numeric: &'static [&'static str],
    /// Policy for cells that are still empty after coercion
    pub fill: EmptyFill,
}

impl RowSchema {
    /// Schema that leaves rows untouched and renders empties as `""`
    pub const PLAIN: RowSchema = RowSchema {
        aliases: &[],
        numeric: &[],
        fill: EmptyFill::Blank,
    };

    /// Schema with only an empty-cell policy
    pub const fn filled(fill: EmptyFill) -> Self {
        RowSchema {
            aliases: &[],
            numeric: &[],
            fill,
        }
    }

    /// Apply the schema to one row
    pub fn apply(&self, mut row: Row) -> Row {
        for column in self.numeric {
            if let Some(cell) = row.get_mut(column) {
                *cell = std::mem::take(cell).into_number();
            }
        }
        for (from, to) in self.aliases {
            row.rename(from, to);
        }
        if let EmptyFill::Placeholder(marker) = self.fill {
            for cell in row.values_mut() {
                if cell.is_empty() {
                    *cell = CellValue::text(marker);
                }
            }
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BROMIDE_LIKE: RowSchema = RowSchema {
        aliases: &[("ステータス(最大)", "最大ステータス")],
        numeric: &["ステータス(最大)"],
        fill: EmptyFill::Blank,
    };

    #[test]
    fn test_numeric_then_alias() {
        let row = Row::new().with("名前", "笑顔").with("ステータス(最大)", "1200.0");
        let row = BROMIDE_LIKE.apply(row);
        assert_eq!(row.get("最大ステータス"), Some(&CellValue::Number(1200.0)));
        assert_eq!(row.text("最大ステータス"), "1200");
        assert!(row.get("ステータス(最大)").is_none());
    }

    #[test]
    fn test_placeholder_fill() {
        let schema = RowSchema::filled(EmptyFill::Placeholder("-"));
        let row = schema.apply(Row::new().with("a", CellValue::Empty).with("b", "x"));
        assert_eq!(row.text("a"), "-");
        assert_eq!(row.text("b"), "x");
    }

    #[test]
    fn test_plain_keeps_empty() {
        let row = RowSchema::PLAIN.apply(Row::new().with("a", CellValue::Empty));
        assert_eq!(row.get("a"), Some(&CellValue::Empty));
        assert_eq!(row.text("a"), "");
    }
}
