//! Pair tables: one row per `(a, b)` rectangle pair, 14 float columns.
//!
//! Files ending in `.parquet` use Parquet; everything else is CSV with a
//! header row. Reading accepts any numeric column type and casts to f32.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use rotrect::{OrientedRect, Vec2};
use std::fs::{self, File};
use std::path::Path;

pub type Pair = (OrientedRect, OrientedRect);

const FIELDS: [&str; 7] = ["x", "y", "w", "h", "angle", "ox", "oy"];

/// Column names in file order: `a_x .. a_oy, b_x .. b_oy`.
pub fn column_names() -> Vec<String> {
    ["a", "b"]
        .iter()
        .flat_map(|side| FIELDS.iter().map(move |f| format!("{side}_{f}")))
        .collect()
}

fn is_parquet(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("parquet"))
}

/// `[x, y, w, h, angle, ox, oy]`, the per-side column order.
pub fn fields_of(r: &OrientedRect) -> [f32; 7] {
    [
        r.position.x,
        r.position.y,
        r.size.x,
        r.size.y,
        r.angle,
        r.origin.x,
        r.origin.y,
    ]
}

fn rect_from(v: &[f32]) -> OrientedRect {
    OrientedRect::new(
        Vec2::new(v[0], v[1]),
        Vec2::new(v[2], v[3]),
        v[4],
        Vec2::new(v[5], v[6]),
    )
}

pub fn to_frame(pairs: &[Pair]) -> Result<DataFrame> {
    let names = column_names();
    let columns = names
        .iter()
        .enumerate()
        .map(|(c, name)| {
            let values: Vec<f32> = pairs
                .iter()
                .map(|(a, b)| {
                    let rect = if c < FIELDS.len() { a } else { b };
                    fields_of(rect)[c % FIELDS.len()]
                })
                .collect();
            Series::new(name.as_str().into(), values)
        })
        .collect::<Vec<_>>();
    Ok(DataFrame::new(columns)?)
}

pub fn from_frame(df: &DataFrame) -> Result<Vec<Pair>> {
    let mut columns = Vec::with_capacity(2 * FIELDS.len());
    for name in column_names() {
        let series = df
            .column(&name)
            .with_context(|| format!("pair table is missing column {name}"))?
            .cast(&DataType::Float32)
            .with_context(|| format!("column {name} is not numeric"))?;
        let values = series
            .f32()?
            .into_iter()
            .enumerate()
            .map(|(row, v)| v.with_context(|| format!("null in column {name} at row {row}")))
            .collect::<Result<Vec<f32>>>()?;
        columns.push(values);
    }

    let mut row = [0.0f32; 14];
    let pairs = (0..df.height())
        .map(|i| {
            for (slot, col) in row.iter_mut().zip(&columns) {
                *slot = col[i];
            }
            (rect_from(&row[..7]), rect_from(&row[7..]))
        })
        .collect();
    Ok(pairs)
}

pub fn write_pairs(path: &Path, pairs: &[Pair]) -> Result<()> {
    let mut df = to_frame(pairs)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    if is_parquet(path) {
        ParquetWriter::new(&mut file)
            .finish(&mut df)
            .with_context(|| format!("writing parquet {}", path.display()))?;
    } else {
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut df)
            .with_context(|| format!("writing csv {}", path.display()))?;
    }
    Ok(())
}

pub fn read_pairs(path: &Path) -> Result<Vec<Pair>> {
    if !path.exists() {
        bail!("input {} does not exist", path.display());
    }
    let lf = if is_parquet(path) {
        LazyFrame::scan_parquet(path, ScanArgsParquet::default())?
    } else {
        LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()?
    };
    let df = lf
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::debug!(rows = df.height(), cols = df.width(), "pair_table_shape");
    from_frame(&df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn fixture() -> Vec<Pair> {
        vec![
            (
                OrientedRect::from_xywh(0.0, 0.0, 10.0, 10.0),
                OrientedRect::from_xywh(5.0, 5.0, 10.0, 10.0),
            ),
            (
                OrientedRect::new(
                    Vec2::new(-2.5, 4.25),
                    Vec2::new(8.0, 2.0),
                    0.5,
                    Vec2::new(4.0, 1.0),
                ),
                OrientedRect::from_xywh(100.0, -100.0, 1.5, 0.75),
            ),
        ]
    }

    #[test]
    fn column_order_matches_fields() {
        let names = column_names();
        assert_eq!(names.len(), 14);
        assert_eq!(names[0], "a_x");
        assert_eq!(names[6], "a_oy");
        assert_eq!(names[7], "b_x");
        assert_eq!(names[13], "b_oy");
    }

    #[test]
    fn frame_round_trip() {
        let pairs = fixture();
        let df = to_frame(&pairs).unwrap();
        assert_eq!(df.shape(), (2, 14));
        assert_eq!(from_frame(&df).unwrap(), pairs);
    }

    #[test]
    fn csv_and_parquet_round_trip() {
        let dir = tempdir().unwrap();
        let pairs = fixture();
        for name in ["pairs.csv", "nested/pairs.parquet"] {
            let path = dir.path().join(name);
            write_pairs(&path, &pairs).unwrap();
            assert_eq!(read_pairs(&path).unwrap(), pairs);
        }
    }

    #[test]
    fn missing_column_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "a_x,a_y\n1,2\n").unwrap();
        let err = read_pairs(&path).unwrap_err();
        assert!(format!("{err:#}").contains("missing column a_w"));
    }

    #[test]
    fn missing_input_is_reported() {
        let dir = tempdir().unwrap();
        assert!(read_pairs(&dir.path().join("nope.csv")).is_err());
    }
}
