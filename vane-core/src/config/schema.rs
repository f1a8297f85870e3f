//! Schema descriptions
//!
//! Components describe their accepted configuration as static field
//! tables. The tables are inert data; the validation engine that walks
//! them lives in `vane-config`.

use alloc::vec::Vec;

use super::tree::Value;
use crate::codegen::ClassPath;

pub const CONF_ID: &str = "id";
pub const CONF_NAME: &str = "name";
pub const CONF_PLATFORM: &str = "platform";
pub const CONF_ICON: &str = "icon";
pub const CONF_DISABLED_BY_DEFAULT: &str = "disabled_by_default";
pub const CONF_UPDATE_INTERVAL: &str = "update_interval";

/// Value type accepted by a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Bool,
    Str,
    /// Integer milliseconds or a string with a unit suffix
    Duration,
    /// Declares a new object of the given class
    DeclareId(ClassPath),
    /// References an object declared elsewhere
    UseId,
    /// Nested table validated against another schema
    Nested(&'static Schema),
}

/// Default applied when a field is omitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    Bool(bool),
    Duration(u32),
}

impl DefaultValue {
    pub fn to_value(self) -> Value {
        match self {
            DefaultValue::Bool(b) => Value::Bool(b),
            DefaultValue::Duration(ms) => Value::Duration(ms),
        }
    }
}

/// Whether a field must be present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
    Default(DefaultValue),
    /// Omitted ids are generated by the validator
    Generated,
}

/// A single schema field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub key: &'static str,
    pub kind: FieldKind,
    pub presence: Presence,
}

impl Field {
    pub const fn required(key: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            kind,
            presence: Presence::Required,
        }
    }

    pub const fn optional(key: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            kind,
            presence: Presence::Optional,
        }
    }

    pub const fn with_default(key: &'static str, kind: FieldKind, default: DefaultValue) -> Self {
        Self {
            key,
            kind,
            presence: Presence::Default(default),
        }
    }

    /// The `id` field of a component declaring objects of `class`
    pub const fn generated_id(class: ClassPath) -> Self {
        Self {
            key: CONF_ID,
            kind: FieldKind::DeclareId(class),
            presence: Presence::Generated,
        }
    }
}

/// A component schema, optionally extending a base schema
///
/// Fields declared here override base fields with the same key.
#[derive(Debug, PartialEq, Eq)]
pub struct Schema {
    pub base: Option<&'static Schema>,
    pub fields: &'static [Field],
}

impl Schema {
    pub const fn new(fields: &'static [Field]) -> Self {
        Self { base: None, fields }
    }

    pub const fn extend(base: &'static Schema, fields: &'static [Field]) -> Self {
        Self {
            base: Some(base),
            fields,
        }
    }

    /// Look up a field by key
    pub fn field(&self, key: &str) -> Option<&'static Field> {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .or_else(|| self.base.and_then(|b| b.field(key)))
    }

    /// All fields in declaration order, base fields first
    ///
    /// An overridden base field keeps the base position.
    pub fn fields(&self) -> Vec<&'static Field> {
        let mut out: Vec<&'static Field> = match self.base {
            Some(base) => base.fields(),
            None => Vec::new(),
        };
        for field in self.fields {
            match out.iter_mut().find(|f| f.key == field.key) {
                Some(existing) => *existing = field,
                None => out.push(field),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE_CLASS: ClassPath = ClassPath::new("demo", "Base");
    const DERIVED_CLASS: ClassPath = ClassPath::new("demo", "Derived");

    static BASE: Schema = Schema::new(&[
        Field::generated_id(BASE_CLASS),
        Field::required(CONF_NAME, FieldKind::Str),
    ]);

    static DERIVED: Schema = Schema::extend(
        &BASE,
        &[
            Field::generated_id(DERIVED_CLASS),
            Field::with_default("flag", FieldKind::Bool, DefaultValue::Bool(true)),
        ],
    );

    #[test]
    fn test_extend_overrides_in_place() {
        let keys: Vec<&str> = DERIVED.fields().iter().map(|f| f.key).collect();
        assert_eq!(keys, [CONF_ID, CONF_NAME, "flag"]);

        let id = DERIVED.field(CONF_ID).unwrap();
        assert_eq!(id.kind, FieldKind::DeclareId(DERIVED_CLASS));
    }

    #[test]
    fn test_lookup_falls_back_to_base() {
        assert_eq!(DERIVED.field(CONF_NAME).unwrap().presence, Presence::Required);
        assert!(DERIVED.field("missing").is_none());
    }

    #[test]
    fn test_default_to_value() {
        assert_eq!(DefaultValue::Duration(60_000).to_value(), Value::Duration(60_000));
        assert_eq!(DefaultValue::Bool(false).to_value(), Value::Bool(false));
    }
}
