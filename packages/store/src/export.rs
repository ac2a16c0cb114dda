use chrono::NaiveDate;
use thiserror::Error;

use crate::models::Visitor;

pub const EXPORT_HEADERS: [&str; 9] = [
    "ID", "İsim", "Soyisim", "Şirket", "Plaka", "Tür", "Giriş", "Çıkış", "Kaydeden",
];

/// Spreadsheet programs need the BOM to detect UTF-8.
const BOM: &str = "\u{feff}";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no records to export")]
    Empty,
    #[error("csv write failed: {0}")]
    Write(#[from] csv::Error),
    #[error("csv flush failed: {0}")]
    Flush(String),
}

/// A generated file, ready to be handed to the browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub contents: String,
}

impl CsvExport {
    pub const MIME_TYPE: &'static str = "text/csv;charset=utf-8;";
}

pub fn export_filename(today: NaiveDate) -> String {
    format!("ziyaretci_listesi_{}.csv", today.format("%Y-%m-%d"))
}

/// Serialise every visitor (never a filtered view) into a CSV document.
/// Fields are quoted whenever they contain a delimiter, quote or newline.
pub fn export_visitors(visitors: &[Visitor], today: NaiveDate) -> Result<CsvExport, ExportError> {
    if visitors.is_empty() {
        return Err(ExportError::Empty);
    }

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(BOM.as_bytes().to_vec());
    writer.write_record(EXPORT_HEADERS)?;
    for visitor in visitors {
        writer.write_record([
            visitor.id.to_string().as_str(),
            visitor.first_name.as_str(),
            visitor.last_name.as_str(),
            visitor.company.as_deref().unwrap_or_default(),
            visitor.plate.as_deref().unwrap_or_default(),
            visitor.visitor_type.label(),
            visitor.entry_datetime.as_str(),
            visitor.exit_datetime.as_deref().unwrap_or_default(),
            visitor.creator_name.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.to_string()))?;
    let contents = String::from_utf8(bytes).map_err(|e| ExportError::Flush(e.to_string()))?;

    Ok(CsvExport {
        filename: export_filename(today),
        contents,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VisitorType;

    fn visitor(id: u64, company: Option<&str>) -> Visitor {
        Visitor {
            id,
            first_name: "ALI".to_string(),
            last_name: "VELI".to_string(),
            company: company.map(str::to_string),
            plate: None,
            visitor_type: VisitorType::Guest,
            entry_datetime: "2024-01-01 09:00".to_string(),
            exit_datetime: None,
            creator_id: Some(1),
            creator_name: "ERHAN YAMAN".to_string(),
            visit_date: None,
            created_at: None,
            entry_date: None,
            entry_time: None,
            exit_time: None,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
    }

    #[test]
    fn test_empty_export_is_refused() {
        assert!(matches!(export_visitors(&[], today()), Err(ExportError::Empty)));
    }

    #[test]
    fn test_export_layout() {
        let export = export_visitors(&[visitor(1, None)], today()).unwrap();
        assert_eq!(export.filename, "ziyaretci_listesi_2024-01-31.csv");
        assert!(export.contents.starts_with('\u{feff}'));

        let lines: Vec<&str> = export.contents.trim_start_matches('\u{feff}').lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "ID,İsim,Soyisim,Şirket,Plaka,Tür,Giriş,Çıkış,Kaydeden");
        assert_eq!(lines[1], "1,ALI,VELI,,,Misafir,2024-01-01 09:00,,ERHAN YAMAN");
    }

    #[test]
    fn test_export_quotes_delimiters() {
        let export = export_visitors(&[visitor(2, Some("ACME, \"Ltd\""))], today()).unwrap();
        let row = export.contents.lines().nth(1).unwrap();
        assert_eq!(row, "2,ALI,VELI,\"ACME, \"\"Ltd\"\"\",,Misafir,2024-01-01 09:00,,ERHAN YAMAN");
    }
}
