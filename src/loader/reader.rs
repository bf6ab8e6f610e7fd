use std::fs::File;
use std::io::{self, ErrorKind};
use std::path::Path;

use csv::StringRecord;
use tracing::{debug, info, trace, warn};

use crate::error::Result;
use crate::loader::columns::ColumnBindings;
use crate::loader::parse::{parse_id, parse_number, split_size, NumericError};
use crate::models::MenuItem;

/// Brand assigned to rows when the source has no restaurant column.
pub const DEFAULT_RESTAURANT: &str = "Chick-fil-A";

/// Inputs to row normalization that do not come from the CSV itself.
#[derive(Debug, Clone, PartialEq)]
pub struct LoaderSettings {
    /// Brand for rows with no restaurant column or a blank restaurant cell.
    pub default_restaurant: String,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            default_restaurant: DEFAULT_RESTAURANT.to_string(),
        }
    }
}

/// Load menu items from a CSV file.
///
/// A missing file is not an error: it yields an empty list so callers can
/// show a "no data" state. Malformed rows fail the whole load.
pub fn load_menu<P: AsRef<Path>>(path: P, settings: &LoaderSettings) -> Result<Vec<MenuItem>> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "menu source not found, catalog is empty");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let items = load_menu_from_reader(file, settings)?;
    info!(path = %path.display(), items = items.len(), "loaded menu");
    Ok(items)
}

/// Load menu items from any CSV byte stream with a header row.
pub fn load_menu_from_reader<R: io::Read>(
    reader: R,
    settings: &LoaderSettings,
) -> Result<Vec<MenuItem>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let bindings = ColumnBindings::discover(rdr.headers()?.iter());

    let mut items = Vec::new();
    for (row, result) in rdr.records().enumerate() {
        let record = result?;
        if let Some(item) = parse_row(&record, &bindings, &settings.default_restaurant, row) {
            items.push(item);
        }
    }

    Ok(items)
}

fn cell<'r>(record: &'r StringRecord, column: Option<usize>) -> &'r str {
    column.and_then(|idx| record.get(idx)).unwrap_or("").trim()
}

/// Turn one source row into a record, or `None` if it names no item.
fn parse_row(
    record: &StringRecord,
    bindings: &ColumnBindings,
    default_restaurant: &str,
    row: usize,
) -> Option<MenuItem> {
    let raw_item = cell(record, bindings.item);
    if raw_item.is_empty() {
        trace!(row, "skipping row without an item name");
        return None;
    }

    let restaurant = match cell(record, bindings.restaurant) {
        "" => default_restaurant,
        name => name,
    };

    let (name, parsed_size) = split_size(raw_item);
    let size = match cell(record, bindings.size) {
        "" => parsed_size,
        explicit => Some(explicit.to_string()),
    };

    let mut item = MenuItem {
        size,
        item_id: bindings.item_id.and_then(|idx| parse_id(cell(record, Some(idx)))),
        ..MenuItem::new(restaurant, cell(record, bindings.category), &name)
    };

    for &(nutrient, column) in &bindings.nutrients {
        *item.nutrient_mut(nutrient) = match parse_number(cell(record, Some(column))) {
            Ok(value) => Some(value),
            Err(NumericError::Blank) => None,
            Err(e) => {
                debug!(row, field = nutrient.key(), error = %e, "unreadable nutrient value");
                None
            }
        };
    }

    Some(item)
}
