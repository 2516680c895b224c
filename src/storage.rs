use crate::models::{ColorTable, ShadeRow};
use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Column names of the exported table, in file order.
pub const TABLE_HEADER: [&str; 2] = ["Green Channel Value", "Country Name"];

/// Save the color table as CSV with header, one row per entry in table order.
pub fn save_table_csv<P: AsRef<Path>>(table: &ColorTable, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    wtr.write_record(TABLE_HEADER)?;
    for (name, shade) in table.iter() {
        wtr.serialize((shade.green(), name))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save the color table as a pretty JSON array of rows.
pub fn save_table_json<P: AsRef<Path>>(table: &ColorTable, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut f = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let s = serde_json::to_string_pretty(&table.rows())?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

/// Read a table previously written by [`save_table_csv`].
pub fn load_table_csv<P: AsRef<Path>>(path: P) -> Result<Vec<ShadeRow>> {
    let path = path.as_ref();
    let mut rdr = csv::Reader::from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let mut rows = Vec::new();
    for row in rdr.deserialize::<ShadeRow>() {
        let row = row.with_context(|| format!("parsing {}", path.display()))?;
        rows.push(row);
    }
    Ok(rows)
}
