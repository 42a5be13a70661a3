//! Guest list as an `.xlsx` workbook for the admin download.

use crate::error::AppError;
use crate::model::Guest;
use rust_xlsxwriter::{Format, FormatBorder, Workbook};

pub const XLSX_CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const EXPORT_FILENAME: &str = "gaeste.xlsx";
const SHEET_NAME: &str = "Gäste";

pub const HEADERS: [&str; 10] = [
    "ID",
    "Name",
    "Essenswunsch",
    "Dabei",
    "Email",
    "Anreise",
    "Essen Fr",
    "Essen Sa",
    "Essen So",
    "Unterkunft",
];

/// Attendance has three states; undecided gets its own label.
pub fn attendance_label(dabei: Option<bool>) -> &'static str {
    match dabei {
        Some(true) => "Ja",
        Some(false) => "Nein",
        None => "Ausstehend",
    }
}

/// Meal days are yes/no only: no answer counts as no.
pub fn meal_label(value: Option<bool>) -> &'static str {
    if value == Some(true) {
        "Ja"
    } else {
        "Nein"
    }
}

/// Text cells after the ID column, in header order.
fn text_cells(guest: &Guest) -> [&str; 9] {
    [
        guest.name.as_str(),
        guest.essenswunsch.as_deref().unwrap_or(""),
        attendance_label(guest.dabei),
        guest.email.as_deref().unwrap_or(""),
        guest.anreise.as_deref().unwrap_or(""),
        meal_label(guest.essen_fr),
        meal_label(guest.essen_sa),
        meal_label(guest.essen_so),
        guest.unterkunft.as_deref().unwrap_or(""),
    ]
}

/// Render all guests, in the given order, into workbook bytes.
pub fn guests_to_xlsx(guests: &[Guest]) -> Result<Vec<u8>, AppError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new().set_bold().set_border(FormatBorder::Thin);
    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *header, &header_format)?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();

    for (index, guest) in guests.iter().enumerate() {
        let row = (index + 1) as u32;
        worksheet.write(row, 0, f64::from(guest.id))?;
        widths[0] = widths[0].max(guest.id.to_string().len());

        for (offset, value) in text_cells(guest).iter().enumerate() {
            let col = offset + 1;
            if !value.is_empty() {
                worksheet.write(row, col as u16, *value)?;
            }
            widths[col] = widths[col].max(value.chars().count());
        }
    }

    for (col, width) in widths.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width as f64 + 2.0)?;
    }

    let bytes = workbook.save_to_buffer()?;
    tracing::debug!(rows = guests.len(), bytes = bytes.len(), "guest export rendered");
    Ok(bytes)
}
