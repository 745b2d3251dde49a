//! Cell value types

use std::fmt;

/// Represents the value stored in a cell after it has been read from a sheet
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Empty cell (missing from the export, or an empty field)
    #[default]
    Empty,

    /// Numeric value, only produced by an explicit schema coercion
    Number(f64),

    /// Raw text as exported
    Text(String),
}

impl CellValue {
    /// Create a new text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        CellValue::Text(s.into())
    }

    /// Build a cell from a raw CSV field; empty fields become [`CellValue::Empty`]
    pub fn from_field(field: &str) -> Self {
        if field.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(field.to_string())
        }
    }

    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Try to get the value as a string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Convert a text cell that parses as a number into [`CellValue::Number`]
    pub fn into_number(self) -> Self {
        match self {
            CellValue::Text(ref s) => match s.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => CellValue::Number(n),
                _ => self,
            },
            other => other,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            // Whole numbers print without a fractional part
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::text(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_field() {
        assert_eq!(CellValue::from_field(""), CellValue::Empty);
        assert_eq!(CellValue::from_field("SR"), CellValue::text("SR"));
        // Whitespace is data, not emptiness
        assert_eq!(CellValue::from_field(" "), CellValue::text(" "));
    }

    #[test]
    fn test_whole_numbers_display_as_integers() {
        assert_eq!(CellValue::Number(1200.0).to_string(), "1200");
        assert_eq!(CellValue::Number(-3.0).to_string(), "-3");
        assert_eq!(CellValue::Number(2.5).to_string(), "2.5");
        assert_eq!(CellValue::Empty.to_string(), "");
    }

    #[test]
    fn test_into_number() {
        assert_eq!(CellValue::text("1200.0").into_number(), CellValue::Number(1200.0));
        assert_eq!(CellValue::text(" 7 ").into_number(), CellValue::Number(7.0));
        assert_eq!(CellValue::text("SSR").into_number(), CellValue::text("SSR"));
        assert_eq!(CellValue::text("NaN").into_number(), CellValue::text("NaN"));
        assert_eq!(CellValue::Empty.into_number(), CellValue::Empty);
    }
}
