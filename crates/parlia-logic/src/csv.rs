//! Party list import/export as comma-separated text.
//!
//! ```text
//! id,color,name,seats
//! 1,#e41a1c,Reds,50
//! 2,#377eb8,Blues,50
//! ```
//!
//! The header must name exactly the four fields (case and spaces are
//! ignored, order is free). Fields are split on bare commas; there is no
//! quoting.

use crate::party::Party;

/// Canonical header written by [`to_csv`].
pub const CSV_HEADER: &str = "id,color,name,seats";

const FIELDS: [&str; 4] = ["id", "color", "name", "seats"];

/// Errors from [`parse_csv`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvError {
    /// No header line.
    Empty,
    /// Header is not exactly `id, color, name, seats`.
    InvalidHeader(String),
    /// A row without four fields, or with a non-integer id/seats.
    InvalidRow { line: usize, content: String },
}

impl std::fmt::Display for CsvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CsvError::Empty => write!(f, "Invalid CSV file: no header"),
            CsvError::InvalidHeader(h) => write!(f, "Invalid CSV file header: {:?}", h),
            CsvError::InvalidRow { line, content } => {
                write!(f, "Invalid CSV content on line {}: {:?}", line, content)
            }
        }
    }
}

impl std::error::Error for CsvError {}

/// Column index of each of [`FIELDS`] in the header.
fn header_columns(header: &str) -> Option<[usize; 4]> {
    let names: Vec<String> = header
        .to_lowercase()
        .replace(' ', "")
        .split(',')
        .map(|s| s.trim().to_string())
        .collect();
    if names.len() != FIELDS.len() {
        return None;
    }
    let mut columns = [0usize; 4];
    for (slot, field) in columns.iter_mut().zip(FIELDS) {
        let mut hits = names.iter().enumerate().filter(|(_, n)| *n == field);
        let (index, _) = hits.next()?;
        if hits.next().is_some() {
            return None;
        }
        *slot = index;
    }
    Some(columns)
}

/// Parse a party list. Blank lines are skipped.
pub fn parse_csv(text: &str) -> Result<Vec<Party>, CsvError> {
    let mut lines = text.lines().enumerate();
    let header = loop {
        match lines.next() {
            Some((_, line)) if line.trim().is_empty() => continue,
            Some((_, line)) => break line,
            None => return Err(CsvError::Empty),
        }
    };
    let Some(columns) = header_columns(header) else {
        return Err(CsvError::InvalidHeader(header.trim().to_string()));
    };
    let [id_col, color_col, name_col, seats_col] = columns;

    let mut parties = Vec::new();
    for (index, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let invalid = || CsvError::InvalidRow {
            line: index + 1,
            content: line.to_string(),
        };
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != FIELDS.len() {
            return Err(invalid());
        }
        let id = fields[id_col]
            .trim()
            .parse::<i64>()
            .map_err(|_| invalid())?;
        let seats = fields[seats_col]
            .trim()
            .parse::<u32>()
            .map_err(|_| invalid())?;
        parties.push(Party {
            id,
            color: fields[color_col].trim().to_string(),
            name: fields[name_col].trim().to_string(),
            seats,
        });
    }

    log::debug!("Parsed {} parties from CSV", parties.len());
    Ok(parties)
}

/// Serialize parties with the canonical header, one party per line.
pub fn to_csv(parties: &[Party]) -> String {
    let mut text = String::from(CSV_HEADER);
    for p in parties {
        text.push_str(&format!("\n{},{},{},{}", p.id, p.color, p.name, p.seats));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_basic_file() {
        let text = "id,color,name,seats\n1,#e41a1c,Reds,50\n2,#377eb8,Blues,30\n";
        let parties = parse_csv(text).unwrap();
        assert_eq!(
            parties,
            vec![
                Party::new(1, "#e41a1c", "Reds", 50),
                Party::new(2, "#377eb8", "Blues", 30),
            ]
        );
    }

    #[test]
    fn header_ignores_case_spaces_and_order() {
        let text = "Name, SEATS , Id,Color\r\nReds,12,7,red\r\n";
        let parties = parse_csv(text).unwrap();
        assert_eq!(parties, vec![Party::new(7, "red", "Reds", 12)]);
    }

    #[test]
    fn rejects_wrong_header() {
        assert!(matches!(
            parse_csv("id,colour,name,seats\n1,a,b,2"),
            Err(CsvError::InvalidHeader(_))
        ));
        assert!(matches!(
            parse_csv("id,color,name\n1,a,b"),
            Err(CsvError::InvalidHeader(_))
        ));
        assert!(matches!(
            parse_csv("id,id,name,seats\n1,1,b,2"),
            Err(CsvError::InvalidHeader(_))
        ));
    }

    #[test]
    fn rejects_non_integer_fields() {
        let err = parse_csv("id,color,name,seats\n1,a,A,5\nx,b,B,5").unwrap_err();
        assert_eq!(
            err,
            CsvError::InvalidRow {
                line: 3,
                content: "x,b,B,5".to_string()
            }
        );
        assert!(parse_csv("id,color,name,seats\n1,a,A,-5").is_err());
        assert!(parse_csv("id,color,name,seats\n1,a,A,5.5").is_err());
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert!(matches!(
            parse_csv("id,color,name,seats\n1,a,A,B,5"),
            Err(CsvError::InvalidRow { line: 2, .. })
        ));
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse_csv(""), Err(CsvError::Empty));
        assert_eq!(parse_csv("\n\n"), Err(CsvError::Empty));
    }

    #[test]
    fn header_only_is_empty_list() {
        assert_eq!(parse_csv("id,color,name,seats\n").unwrap(), vec![]);
    }

    #[test]
    fn export_uses_canonical_header() {
        let parties = vec![
            Party::new(1, "#fff", "White", 3),
            Party::new(2, "#000", "Black", 4),
        ];
        let text = to_csv(&parties);
        assert_eq!(text, "id,color,name,seats\n1,#fff,White,3\n2,#000,Black,4");
        assert_eq!(parse_csv(&text).unwrap(), parties);
    }
}
