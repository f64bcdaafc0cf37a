use im::HashMap;
use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Field map of a live subject object.
pub type Fields = HashMap<String, Value>;

/// A live subject object: the concrete type it was constructed as, plus its
/// field map. Fields a type never set read as `Nil`, so probing a broken
/// subject stays total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    type_name: String,
    fields: Fields,
}

impl Instance {
    pub fn new(type_name: impl Into<String>, fields: Fields) -> Self {
        Self {
            type_name: type_name.into(),
            fields,
        }
    }

    /// The concrete type this instance was constructed as. Dispatch starts
    /// here, not at the declared parent.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Reads a field, yielding `Nil` when the field was never set.
    pub fn field(&self, name: &str) -> Value {
        self.fields.get(name).cloned().unwrap_or(Value::Nil)
    }

    pub fn set_field(&mut self, name: impl Into<String>, value: Value) {
        self.fields.insert(name.into(), value);
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }
}
