//! Select entity schema
//!
//! A select exposes one label out of a fixed option list. Component
//! specific selects extend [`POLLING_SELECT_SCHEMA`] with their own class.

use crate::codegen::ClassPath;
use crate::config::{
    DefaultValue, Field, FieldKind, Schema, CONF_DISABLED_BY_DEFAULT, CONF_ICON, CONF_NAME,
    CONF_UPDATE_INTERVAL,
};

pub const SELECT_CLASS: ClassPath = ClassPath::new("select", "Select");

/// Default polling interval (60 s)
pub const DEFAULT_UPDATE_INTERVAL_MS: u32 = 60_000;

pub static SELECT_SCHEMA: Schema = Schema::new(&[
    Field::generated_id(SELECT_CLASS),
    Field::required(CONF_NAME, FieldKind::Str),
    Field::optional(CONF_ICON, FieldKind::Str),
    Field::with_default(
        CONF_DISABLED_BY_DEFAULT,
        FieldKind::Bool,
        DefaultValue::Bool(false),
    ),
]);

/// Select that is also a polling component
pub static POLLING_SELECT_SCHEMA: Schema = Schema::extend(
    &SELECT_SCHEMA,
    &[Field::with_default(
        CONF_UPDATE_INTERVAL,
        FieldKind::Duration,
        DefaultValue::Duration(DEFAULT_UPDATE_INTERVAL_MS),
    )],
);
