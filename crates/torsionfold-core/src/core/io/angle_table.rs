use crate::core::models::bonds::BackboneAtomKind;
use crate::core::models::chain::BackboneChain;
use crate::core::models::encoding::{AngleEncoding, EncodingError};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AngleTableError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("Invalid angle row {row} in '{path}': {source}")]
    Row {
        path: String,
        row: usize,
        source: EncodingError,
    },
}

/// Reads a per-residue angle-encoding table from a headerless CSV file.
///
/// Each row must hold exactly twelve numeric values in the documented layout:
/// three bond-angle (sine, cosine) pairs followed by three torsion-angle
/// pairs. Rows map to chain positions in file order.
///
/// # Errors
///
/// Returns [`AngleTableError::Csv`] for unreadable files or non-numeric
/// fields, and [`AngleTableError::Row`] (with the 1-based row number) for
/// rows of the wrong width.
pub fn read_angle_table(path: &Path) -> Result<Vec<AngleEncoding>, AngleTableError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| AngleTableError::Csv {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;

    let mut encodings = Vec::new();
    for (row, result) in reader.deserialize::<Vec<f64>>().enumerate() {
        let values = result.map_err(|e| AngleTableError::Csv {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let encoding =
            AngleEncoding::from_slice(&values).map_err(|e| AngleTableError::Row {
                path: path.to_string_lossy().to_string(),
                row: row + 1,
                source: e,
            })?;
        encodings.push(encoding);
    }
    Ok(encodings)
}

/// Writes a reconstructed chain as a CSV table with columns
/// `index, atom, x, y, z`.
///
/// # Errors
///
/// Returns [`AngleTableError::Csv`] if a record cannot be written and
/// [`AngleTableError::Io`] if the final flush fails.
pub fn write_chain(path: &Path, chain: &BackboneChain) -> Result<(), AngleTableError> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| AngleTableError::Csv {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;

    writer
        .write_record(["index", "atom", "x", "y", "z"])
        .map_err(|e| AngleTableError::Csv {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
    for (index, position) in chain.positions().iter().enumerate() {
        let kind = BackboneAtomKind::from_index(index);
        let record = [
            index.to_string(),
            kind.as_str().to_string(),
            position.x.to_string(),
            position.y.to_string(),
            position.z.to_string(),
        ];
        writer
            .write_record(&record)
            .map_err(|e| AngleTableError::Csv {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;
    }

    writer.flush().map_err(|e| AngleTableError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })
}
