//! Coercion of [`SqlParam`]s to the parameter types of a prepared statement.

use std::fmt::Display;
use std::str::FromStr;

use postgres_types::{ToSql, Type};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{BackendError, StorageError, StorageResult};
use crate::sql::SqlParam;

pub(crate) type BoxedParam = Box<dyn ToSql + Sync + Send>;

/// Checks that a statement supplies one value per placeholder.
pub(crate) fn check_arity(supplied: usize, expected: usize) -> StorageResult<()> {
    if supplied == expected {
        return Ok(());
    }
    Err(StorageError::Backend(BackendError::ParameterCount {
        expected,
        supplied,
    }))
}

/// Converts `param` into a value the driver will accept for `ty`.
///
/// `index` is the 1-based placeholder position, used only for errors.
/// Values with no conversion to `ty` fail here rather than in the driver.
pub(crate) fn coerce(param: &SqlParam, ty: &Type, index: usize) -> StorageResult<BoxedParam> {
    match param {
        SqlParam::Null => null_for(ty, index),
        SqlParam::Text(s) => text_as(s, ty, index),
        SqlParam::Integer(n) => integer_as(*n, ty, index),
        SqlParam::Float(f) => float_as(*f, ty, index),
        SqlParam::Decimal(d) => decimal_as(*d, ty, index),
        SqlParam::Bool(b) => match *ty {
            Type::BOOL => Ok(Box::new(*b) as BoxedParam),
            _ => textual(b.to_string(), ty, index, "boolean"),
        },
        SqlParam::Json(v) => match *ty {
            Type::JSON | Type::JSONB => Ok(Box::new(v.clone()) as BoxedParam),
            _ => textual(v.to_string(), ty, index, "json"),
        },
    }
}

fn mismatch(index: usize, ty: &Type, err: impl Display) -> StorageError {
    StorageError::Backend(BackendError::ParameterType {
        index,
        expected: ty.name().to_string(),
        message: err.to_string(),
    })
}

/// Binds the text form of a value, if the column takes text at all.
fn textual(text: String, ty: &Type, index: usize, kind: &str) -> StorageResult<BoxedParam> {
    if <String as ToSql>::accepts(ty) {
        Ok(Box::new(text))
    } else {
        Err(mismatch(index, ty, format!("no conversion from {} value", kind)))
    }
}

fn null_for(ty: &Type, index: usize) -> StorageResult<BoxedParam> {
    let boxed: BoxedParam = match *ty {
        Type::BOOL => Box::new(None::<bool>),
        Type::INT2 => Box::new(None::<i16>),
        Type::INT4 => Box::new(None::<i32>),
        Type::INT8 => Box::new(None::<i64>),
        Type::FLOAT4 => Box::new(None::<f32>),
        Type::FLOAT8 => Box::new(None::<f64>),
        Type::NUMERIC => Box::new(None::<Decimal>),
        Type::JSON | Type::JSONB => Box::new(None::<serde_json::Value>),
        _ if <String as ToSql>::accepts(ty) => Box::new(None::<String>),
        _ => return Err(mismatch(index, ty, "no conversion for null")),
    };
    Ok(boxed)
}

fn text_as(s: &str, ty: &Type, index: usize) -> StorageResult<BoxedParam> {
    let trimmed = s.trim();
    let err = |e: &dyn Display| mismatch(index, ty, e);
    let boxed: BoxedParam = match *ty {
        Type::BOOL => Box::new(trimmed.parse::<bool>().map_err(|e| err(&e))?),
        Type::INT2 => Box::new(trimmed.parse::<i16>().map_err(|e| err(&e))?),
        Type::INT4 => Box::new(trimmed.parse::<i32>().map_err(|e| err(&e))?),
        Type::INT8 => Box::new(trimmed.parse::<i64>().map_err(|e| err(&e))?),
        Type::FLOAT4 => Box::new(trimmed.parse::<f32>().map_err(|e| err(&e))?),
        Type::FLOAT8 => Box::new(trimmed.parse::<f64>().map_err(|e| err(&e))?),
        Type::NUMERIC => Box::new(Decimal::from_str(trimmed).map_err(|e| err(&e))?),
        Type::JSON | Type::JSONB => Box::new(serde_json::Value::String(s.to_string())),
        _ => return textual(s.to_string(), ty, index, "text"),
    };
    Ok(boxed)
}

fn integer_as(n: i64, ty: &Type, index: usize) -> StorageResult<BoxedParam> {
    let err = |e: &dyn Display| mismatch(index, ty, e);
    let boxed: BoxedParam = match *ty {
        Type::INT2 => Box::new(i16::try_from(n).map_err(|e| err(&e))?),
        Type::INT4 => Box::new(i32::try_from(n).map_err(|e| err(&e))?),
        Type::INT8 => Box::new(n),
        Type::FLOAT4 => Box::new(n as f32),
        Type::FLOAT8 => Box::new(n as f64),
        Type::NUMERIC => Box::new(Decimal::from(n)),
        Type::JSON | Type::JSONB => Box::new(serde_json::Value::from(n)),
        _ => return textual(n.to_string(), ty, index, "integer"),
    };
    Ok(boxed)
}

fn float_as(f: f64, ty: &Type, index: usize) -> StorageResult<BoxedParam> {
    let err = |e: &dyn Display| mismatch(index, ty, e);
    let boxed: BoxedParam = match *ty {
        Type::FLOAT4 => Box::new(f as f32),
        Type::FLOAT8 => Box::new(f),
        Type::NUMERIC => Box::new(Decimal::try_from(f).map_err(|e| err(&e))?),
        Type::INT2 | Type::INT4 | Type::INT8 => {
            return Err(err(&format!("fractional value {} for integer column", f)));
        }
        _ => return textual(f.to_string(), ty, index, "float"),
    };
    Ok(boxed)
}

fn decimal_as(d: Decimal, ty: &Type, index: usize) -> StorageResult<BoxedParam> {
    let err = |e: &dyn Display| mismatch(index, ty, e);
    let boxed: BoxedParam = match *ty {
        Type::NUMERIC => Box::new(d),
        Type::FLOAT8 => Box::new(d.to_f64().ok_or_else(|| err(&"decimal out of float range"))?),
        Type::FLOAT4 => Box::new(d.to_f32().ok_or_else(|| err(&"decimal out of float range"))?),
        Type::INT2 | Type::INT4 | Type::INT8 => {
            return Err(err(&format!("decimal value {} for integer column", d)));
        }
        _ => return textual(d.to_string(), ty, index, "decimal"),
    };
    Ok(boxed)
}
