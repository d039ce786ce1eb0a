//! JSON output shared by the subcommands.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use petcr_numeric::Field;
use serde::Serialize;
use tracing::info;

/// A field flattened in row-major order together with its shape.
///
/// Non-finite values (masked cells) serialize as `null`.
#[derive(Debug, Serialize)]
pub struct FieldJson {
    pub shape: Vec<usize>,
    pub values: Vec<f64>,
}

impl From<&Field> for FieldJson {
    fn from(field: &Field) -> Self {
        Self {
            shape: field.shape().to_vec(),
            values: field.iter().copied().collect(),
        }
    }
}

/// Writes `value` as pretty JSON to `path`, or to stdout when `path` is `None`.
pub fn write_json<T: Serialize>(value: &T, path: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    match path {
        Some(p) => {
            std::fs::write(p, json)
                .with_context(|| format!("failed to write output: {}", p.display()))?;
            info!(path = %p.display(), "output written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("failed to write to stdout")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use petcr_numeric::field_from_vec;

    #[test]
    fn field_json_keeps_shape_and_order() {
        let f = field_from_vec(&[2, 2], vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let j = FieldJson::from(&f);
        assert_eq!(j.shape, vec![2, 2]);
        assert_eq!(j.values, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn masked_values_serialize_as_null() {
        let f = field_from_vec(&[2], vec![1.5, f64::NAN]).unwrap();
        let s = serde_json::to_string(&FieldJson::from(&f)).unwrap();
        assert_eq!(s, r#"{"shape":[2],"values":[1.5,null]}"#);
    }
}
