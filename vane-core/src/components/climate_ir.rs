//! Infrared climate base component
//!
//! Shared schema and registration for climate controllers driven over an
//! IR transmitter, optionally listening on an IR receiver.

use alloc::vec;

use crate::codegen::{ClassPath, Instruction, Method, ObjectRef, Program};
use crate::config::{
    ConfigTree, DefaultValue, Field, FieldKind, Schema, CONF_NAME,
};

pub const CONF_SUPPORTS_COOL: &str = "supports_cool";
pub const CONF_SUPPORTS_HEAT: &str = "supports_heat";
pub const CONF_SENSOR: &str = "sensor";
pub const CONF_RECEIVER_ID: &str = "receiver_id";
pub const CONF_TRANSMITTER_ID: &str = "transmitter_id";

pub const CLIMATE_IR_CLASS: ClassPath = ClassPath::new("climate_ir", "ClimateIR");

pub const SET_SUPPORTS_COOL: Method = Method::new("set_supports_cool");
pub const SET_SUPPORTS_HEAT: Method = Method::new("set_supports_heat");
pub const SET_SENSOR: Method = Method::new("set_sensor");
pub const SET_TRANSMITTER: Method = Method::new("set_transmitter");
/// Called on the receiver, with the climate as argument
pub const REGISTER_LISTENER: Method = Method::new("register_listener");

pub static CLIMATE_IR_SCHEMA: Schema = Schema::new(&[
    Field::generated_id(CLIMATE_IR_CLASS),
    Field::required(CONF_NAME, FieldKind::Str),
    Field::with_default(CONF_SUPPORTS_COOL, FieldKind::Bool, DefaultValue::Bool(true)),
    Field::with_default(CONF_SUPPORTS_HEAT, FieldKind::Bool, DefaultValue::Bool(true)),
    Field::optional(CONF_SENSOR, FieldKind::UseId),
    Field::optional(CONF_RECEIVER_ID, FieldKind::UseId),
    Field::optional(CONF_TRANSMITTER_ID, FieldKind::UseId),
]);

/// Register a declared IR climate and apply the base fields
pub fn register_climate_ir(program: &mut Program, var: &ObjectRef, config: &ConfigTree) {
    program.push(Instruction::RegisterManaged {
        target: var.clone(),
        config: config.clone(),
    });

    for (key, method) in [
        (CONF_SUPPORTS_COOL, SET_SUPPORTS_COOL),
        (CONF_SUPPORTS_HEAT, SET_SUPPORTS_HEAT),
    ] {
        if let Some(value) = config.validated(key) {
            program.push(Instruction::SetFields {
                target: var.clone(),
                method,
                values: vec![value.clone()],
            });
        }
    }

    if let Some(sensor) = config.get_id(CONF_SENSOR) {
        program.push(Instruction::Wire {
            parent: var.clone(),
            method: SET_SENSOR,
            child: ObjectRef::new(sensor.clone()),
        });
    }
    if let Some(transmitter) = config.get_id(CONF_TRANSMITTER_ID) {
        program.push(Instruction::Wire {
            parent: var.clone(),
            method: SET_TRANSMITTER,
            child: ObjectRef::new(transmitter.clone()),
        });
    }
    if let Some(receiver) = config.get_id(CONF_RECEIVER_ID) {
        program.push(Instruction::Wire {
            parent: ObjectRef::new(receiver.clone()),
            method: REGISTER_LISTENER,
            child: var.clone(),
        });
    }
}
