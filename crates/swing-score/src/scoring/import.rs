use super::measurements::MeasurementSet;
use serde::{Deserialize, Deserializer};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Loads a vendor result from disk. Files ending in `.csv` are read as flat
/// `phase,item,value` exports, anything else as the vendor JSON document.
pub fn load_measurements(
    path: impl AsRef<Path>,
) -> Result<MeasurementSet, MeasurementImportError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| MeasurementImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        measurements_from_csv(file)
    } else {
        let set = serde_json::from_reader(file)?;
        Ok(set)
    }
}

/// Reads a flat export with `phase`, `item` and `value` columns. Blank or
/// non-numeric values are kept as missing measurements.
pub fn measurements_from_csv<R: Read>(
    reader: R,
) -> Result<MeasurementSet, MeasurementImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut set = MeasurementSet::new();

    for record in csv_reader.deserialize::<MeasurementRow>() {
        let row = record?;
        let value = row
            .value
            .as_deref()
            .and_then(|raw| raw.parse::<f64>().ok());
        set.insert(&row.phase, row.item, value);
    }

    Ok(set)
}

#[derive(Debug, Deserialize)]
struct MeasurementRow {
    phase: String,
    item: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    value: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[derive(Debug, thiserror::Error)]
pub enum MeasurementImportError {
    #[error("failed to open measurement file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed measurement export: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed vendor result: {0}")]
    Json(#[from] serde_json::Error),
}
