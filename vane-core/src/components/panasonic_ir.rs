//! Panasonic IR climate controller
//!
//! An IR climate with optional vane position selects. Each select slot is
//! created only when its key appears in the configuration and is wired
//! back into the climate through a dedicated setter.

use alloc::vec::Vec;

use super::climate_ir::{register_climate_ir, CLIMATE_IR_SCHEMA};
use super::select::POLLING_SELECT_SCHEMA;
use crate::codegen::{ClassPath, Method, ObjectRef, Program};
use crate::compose::{compose, CompositeDef, FlagDef, SlotDef};
use crate::config::{
    join_id, ConfigTree, DefaultValue, Field, FieldKind, Schema, CONF_ID,
};

pub const NAMESPACE: &str = "panasonic_ir";

pub const CONF_SUPPORTS_VERTICAL_SWING: &str = "supports_vertical_swing";
pub const CONF_HORIZONTAL_SWING_SELECT: &str = "horizontal_swing_select";
pub const CONF_VERTICAL_SWING_SELECT: &str = "vertical_swing_select";

pub const PANASONIC_CLIMATE: ClassPath = ClassPath::new(NAMESPACE, "PanasonicClimate");
pub const PANASONIC_AC_SELECT: ClassPath = ClassPath::new(NAMESPACE, "PanasonicACSelect");

pub const HORIZONTAL_SWING_OPTIONS: &[&str] = &[
    "left",
    "center_left",
    "center",
    "center_right",
    "right",
    "auto",
];

pub const VERTICAL_SWING_OPTIONS: &[&str] = &[
    "top",
    "middle_top",
    "middle",
    "middle_bottom",
    "bottom",
    "auto",
];

pub const SET_SUPPORTED_SWING_MODES: Method = Method::new("set_supported_swing_modes");
pub const SET_HORIZONTAL_VANE_SELECT: Method = Method::new("set_horizontal_vane_select");
pub const SET_VERTICAL_VANE_SELECT: Method = Method::new("set_vertical_vane_select");

pub static SELECT_SCHEMA: Schema =
    Schema::extend(&POLLING_SELECT_SCHEMA, &[Field::generated_id(PANASONIC_AC_SELECT)]);

pub static CONFIG_SCHEMA: Schema = Schema::extend(
    &CLIMATE_IR_SCHEMA,
    &[
        Field::generated_id(PANASONIC_CLIMATE),
        Field::with_default(
            CONF_SUPPORTS_VERTICAL_SWING,
            FieldKind::Bool,
            DefaultValue::Bool(true),
        ),
        Field::optional(CONF_HORIZONTAL_SWING_SELECT, FieldKind::Nested(&SELECT_SCHEMA)),
        Field::optional(CONF_VERTICAL_SWING_SELECT, FieldKind::Nested(&SELECT_SCHEMA)),
    ],
);

/// Capability flags, in `set_supported_swing_modes` argument order
pub const FLAGS: &[FlagDef] = &[FlagDef::new(CONF_SUPPORTS_VERTICAL_SWING)];

/// Active vane select slots, in emission order
pub const SLOTS: &[SlotDef] = &[
    SlotDef {
        key: CONF_HORIZONTAL_SWING_SELECT,
        class: PANASONIC_AC_SELECT,
        options: HORIZONTAL_SWING_OPTIONS,
        wire: SET_HORIZONTAL_VANE_SELECT,
    },
    SlotDef {
        key: CONF_VERTICAL_SWING_SELECT,
        class: PANASONIC_AC_SELECT,
        options: VERTICAL_SWING_OPTIONS,
        wire: SET_VERTICAL_VANE_SELECT,
    },
];

pub const COMPOSITE: CompositeDef = CompositeDef {
    modes_method: SET_SUPPORTED_SWING_MODES,
    flags: FLAGS,
    slots: SLOTS,
};

/// Generate the climate and its vane selects
pub fn to_code(program: &mut Program, config: &ConfigTree) -> ObjectRef {
    let id = match config.get_id(CONF_ID) {
        Some(id) => id.clone(),
        None => join_id(&[NAMESPACE, "climate"]),
    };
    let var = program.declare(ObjectRef::new(id), PANASONIC_CLIMATE, Vec::new());
    register_climate_ir(program, &var, config);
    program.extend(compose(&var, config, &COMPOSITE));
    var
}
