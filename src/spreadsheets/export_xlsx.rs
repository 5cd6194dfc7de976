use crate::domain::listing::Listing;
use crate::errors::{ResultResp, ServerError};
use crate::responses::xlsx_response;
use rust_xlsxwriter::{Workbook, Worksheet};

/// Download of the current filtered result, one sheet, original column set.
/// Missing optional fields become empty cells rather than zeros.
pub fn export_filtered_xlsx(listings: &[&Listing]) -> ResultResp {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let headers = [
        "자치구명",
        "법정동명",
        "건물명",
        "건물용도",
        "건축년도구분",
        "건축년도",
        "건물면적구분",
        "건물면적",
        "층",
        "물건금액",
    ];

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write header '{header}': {e}")))?;
    }

    for (i, listing) in listings.iter().enumerate() {
        let r = (i + 1) as u32;

        write_text(worksheet, r, 0, &listing.district)?;
        write_text(worksheet, r, 1, &listing.subdivision)?;
        write_text(worksheet, r, 2, listing.building_name.as_deref().unwrap_or(""))?;
        write_text(worksheet, r, 3, &listing.building_type)?;
        write_text(worksheet, r, 4, &listing.year_bracket)?;
        if let Some(year) = listing.built_year {
            write_num(worksheet, r, 5, year as f64)?;
        }
        write_text(worksheet, r, 6, &listing.area_bracket)?;
        if let Some(area) = listing.area {
            write_num(worksheet, r, 7, area)?;
        }
        if let Some(floor) = listing.floor {
            write_num(worksheet, r, 8, floor as f64)?;
        }
        write_num(worksheet, r, 9, listing.price)?;
    }

    let buffer = workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))?;

    xlsx_response(buffer, "filtered_listings.xlsx")
}

fn write_text(worksheet: &mut Worksheet, row: u32, col: u16, value: &str) -> Result<(), ServerError> {
    worksheet
        .write_string(row, col, value)
        .map_err(|e| ServerError::XlsxError(format!("Failed to write cell ({row},{col}): {e}")))?;
    Ok(())
}

fn write_num(worksheet: &mut Worksheet, row: u32, col: u16, value: f64) -> Result<(), ServerError> {
    worksheet
        .write_number(row, col, value)
        .map_err(|e| ServerError::XlsxError(format!("Failed to write cell ({row},{col}): {e}")))?;
    Ok(())
}
