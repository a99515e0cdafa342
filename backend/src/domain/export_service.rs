//! CSV export of the expense table.

use crate::config::DashboardConfig;
use crate::domain::date_math::{format_iso_for_display, CalendarDate};
use crate::error::Result;
use log::info;
use shared::{ExpenseExport, ExpenseRow, Locale};
use std::fs;
use std::path::{Path, PathBuf};

const CSV_HEADER: [&str; 6] = ["id", "date", "description", "value", "type", "virtual"];

#[derive(Debug, Clone)]
pub struct ExportService {
    locale: Locale,
    filename_prefix: String,
}

impl ExportService {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            locale: config.locale,
            filename_prefix: config.export_filename_prefix.clone(),
        }
    }

    /// Render expense rows as CSV, oldest first.
    ///
    /// Dates are written in the configured locale and the file name carries
    /// the reference date, e.g. `despesas_20240331.csv`.
    pub fn export_expenses_csv(&self, rows: &[ExpenseRow], reference: CalendarDate) -> Result<ExpenseExport> {
        info!("📄 EXPORT: Exporting {} expense rows as CSV", rows.len());

        let mut ordered: Vec<&ExpenseRow> = rows.iter().collect();
        ordered.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(CSV_HEADER)?;
        for row in ordered {
            writer.write_record([
                row.id.clone(),
                format_iso_for_display(&row.date, self.locale),
                row.description.clone(),
                format!("{:.2}", row.value),
                row.entry_type.label().to_string(),
                row.is_virtual.to_string(),
            ])?;
        }
        let bytes = writer.into_inner().map_err(|e| e.into_error())?;

        let export = ExpenseExport {
            csv_content: String::from_utf8_lossy(&bytes).into_owned(),
            filename: format!("{}_{}.csv", self.filename_prefix, reference.as_naive().format("%Y%m%d")),
            row_count: rows.len(),
        };

        info!(
            "✅ EXPORT: Generated {} ({} bytes, {} rows)",
            export.filename,
            export.csv_content.len(),
            export.row_count
        );
        Ok(export)
    }

    /// Write an export into `dir`, creating the directory if needed
    pub fn save_to_dir(&self, export: &ExpenseExport, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&export.filename);
        fs::write(&path, &export.csv_content)?;
        info!("📁 EXPORT: Wrote {}", path.display());
        Ok(path)
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new(&DashboardConfig::default())
    }
}

/// Format an amount with a currency symbol in the locale's number style.
///
/// pt-BR: `R$ 1.234,56`; en-US: `R$ 1,234.56`. Negative amounts get a leading `-`.
pub fn format_money(value: f64, symbol: &str, locale: Locale) -> String {
    let (thousands, decimal) = match locale {
        Locale::PtBr => ('.', ','),
        Locale::EnUs => (',', '.'),
    };

    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::new();
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(thousands);
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}{} {}{}{:02}", sign, symbol, grouped, decimal, cents % 100)
}
