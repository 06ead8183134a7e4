use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use ndarray::{ArrayD, IxDyn};
use serde_json::Value;
use tracing::debug;

use crate::error::{RenderpeekError, Result};

/// Load a JSON-encoded image file into an n-dimensional array.
///
/// The file must contain a single JSON document whose value is a (possibly
/// nested) array of numbers. The array shape mirrors the JSON nesting; a
/// bare number yields a 0-dimensional array. All leaves are converted to
/// f64.
pub fn load_image(path: &Path) -> Result<ArrayD<f64>> {
    let file = File::open(path)?;
    let image = read_image(BufReader::new(file))?;
    debug!(path = %path.display(), shape = ?image.shape(), "Loaded JSON image");
    Ok(image)
}

/// Read a JSON-encoded image from any reader.
pub fn read_image(reader: impl Read) -> Result<ArrayD<f64>> {
    let value: Value = serde_json::from_reader(reader)?;
    decode_array(&value)
}

/// Convert a parsed JSON value tree into a homogeneous f64 array.
///
/// The shape is inferred by descending the first element of each nesting
/// level; every sibling must then match it exactly, so ragged nesting and
/// mixed types at the same level are rejected.
fn decode_array(value: &Value) -> Result<ArrayD<f64>> {
    let shape = infer_shape(value, 0)?;
    let mut flat = Vec::with_capacity(shape.iter().product());
    flatten(value, &shape, 0, &mut flat)?;
    Ok(ArrayD::from_shape_vec(IxDyn(&shape), flat)
        .expect("flattened length matches inferred shape"))
}

fn infer_shape(value: &Value, depth: usize) -> Result<Vec<usize>> {
    match value {
        Value::Number(_) => Ok(Vec::new()),
        Value::Array(items) => {
            let mut shape = vec![items.len()];
            if let Some(first) = items.first() {
                shape.extend(infer_shape(first, depth + 1)?);
            }
            Ok(shape)
        }
        other => Err(RenderpeekError::UnexpectedValue {
            found: value_kind(other),
            depth,
        }),
    }
}

fn flatten(value: &Value, shape: &[usize], depth: usize, out: &mut Vec<f64>) -> Result<()> {
    if depth == shape.len() {
        return match value {
            Value::Number(n) => {
                let v = n.as_f64().ok_or(RenderpeekError::UnexpectedValue {
                    found: "number out of f64 range",
                    depth,
                })?;
                out.push(v);
                Ok(())
            }
            other => Err(RenderpeekError::UnexpectedValue {
                found: value_kind(other),
                depth,
            }),
        };
    }

    match value {
        Value::Array(items) => {
            if items.len() != shape[depth] {
                return Err(RenderpeekError::Ragged {
                    depth,
                    expected: shape[depth],
                    found: items.len(),
                });
            }
            for item in items {
                flatten(item, shape, depth + 1, out)?;
            }
            Ok(())
        }
        other => Err(RenderpeekError::UnexpectedValue {
            found: value_kind(other),
            depth,
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
