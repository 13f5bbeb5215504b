// booknest-core/src/naming.rs

//! The naming bridge between application models (lower camelCase keys) and
//! the backend wire format (lower snake_case keys).
//!
//! Conversion is a typed walk over `serde_json::Value`: objects get every key
//! rewritten, arrays are walked element by element, scalars pass through
//! untouched. Key order is preserved.
//!
//! The key rules work per character, with no acronym grouping:
//!
//! - snake to camel: `_` followed by an ASCII lowercase letter becomes that
//!   letter uppercased. Everything else is copied.
//! - camel to snake: an ASCII uppercase letter becomes `_` plus its lowercase
//!   form. Everything else is copied.
//!
//! So `URLId` maps to `_u_r_l_id` and back to `URLId`, `item2Id` maps to
//! `item2_id`, and `item_2` stays `item_2` in both directions.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

pub fn snake_to_camel_key(key: &str) -> String {
  let mut out = String::with_capacity(key.len());
  let mut chars = key.chars().peekable();
  while let Some(c) = chars.next() {
    match (c, chars.peek()) {
      ('_', Some(next)) if next.is_ascii_lowercase() => {
        out.push(next.to_ascii_uppercase());
        chars.next();
      }
      _ => out.push(c),
    }
  }
  out
}

pub fn camel_to_snake_key(key: &str) -> String {
  let mut out = String::with_capacity(key.len() + 4);
  for c in key.chars() {
    if c.is_ascii_uppercase() {
      out.push('_');
      out.push(c.to_ascii_lowercase());
    } else {
      out.push(c);
    }
  }
  out
}

pub fn snake_to_camel(value: Value) -> Value {
  rewrite_keys(value, &snake_to_camel_key)
}

pub fn camel_to_snake(value: Value) -> Value {
  rewrite_keys(value, &camel_to_snake_key)
}

fn rewrite_keys(value: Value, rename: &dyn Fn(&str) -> String) -> Value {
  match value {
    Value::Object(map) => {
      let rewritten: Map<String, Value> = map
        .into_iter()
        .map(|(key, inner)| (rename(&key), rewrite_keys(inner, rename)))
        .collect();
      Value::Object(rewritten)
    }
    Value::Array(items) => Value::Array(items.into_iter().map(|item| rewrite_keys(item, rename)).collect()),
    scalar @ (Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)) => scalar,
  }
}

/// Serialises an application model and converts it to the wire format.
pub fn to_wire<T: Serialize + ?Sized>(model: &T) -> Result<Value, serde_json::Error> {
  Ok(camel_to_snake(serde_json::to_value(model)?))
}

/// Converts a wire payload to application naming and deserialises it.
pub fn from_wire<T: DeserializeOwned>(payload: Value) -> Result<T, serde_json::Error> {
  serde_json::from_value(snake_to_camel(payload))
}
