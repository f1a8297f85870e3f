//! Composer
//!
//! Emission order is fixed:
//! 1. one `SetFields` call carrying every capability flag
//! 2. for each slot definition, in definition order, if its key is present:
//!    `Declare`, `RegisterManaged`, `Wire`
//!
//! The configuration must come out of the validator: every flag key and
//! every slot id is present. Nothing here fills in defaults.

use alloc::vec;
use alloc::vec::Vec;

use super::slot::CompositeDef;
use crate::codegen::{Instruction, ObjectRef};
use crate::config::{ConfigTree, Value, CONF_ID};

/// Emit the composition instructions for `parent`
pub fn compose(parent: &ObjectRef, config: &ConfigTree, def: &CompositeDef) -> Vec<Instruction> {
    let mut out = Vec::with_capacity(1 + 3 * def.slots.len());

    let flags = def
        .flags
        .iter()
        .filter_map(|flag| config.validated(flag.key).cloned())
        .collect();
    out.push(Instruction::SetFields {
        target: parent.clone(),
        method: def.modes_method,
        values: flags,
    });

    for slot in def.slots {
        let Some(sub) = config.get_tree(slot.key) else {
            continue;
        };
        let Some(child) = sub_ref(sub) else {
            continue;
        };

        out.push(Instruction::Declare {
            target: child.clone(),
            class: slot.class,
            args: vec![Value::str_list(slot.options)],
        });
        out.push(Instruction::RegisterManaged {
            target: child.clone(),
            config: sub.clone(),
        });
        out.push(Instruction::Wire {
            parent: parent.clone(),
            method: slot.wire,
            child,
        });
    }

    out
}

/// Reference for a slot's sub-component, from its validated id
fn sub_ref(sub: &ConfigTree) -> Option<ObjectRef> {
    match sub.validated(CONF_ID)? {
        Value::Id(id) => Some(ObjectRef::new(id.clone())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::InstructionKind;
    use crate::components::panasonic_ir::{
        COMPOSITE, CONF_HORIZONTAL_SWING_SELECT, CONF_SUPPORTS_VERTICAL_SWING,
        CONF_VERTICAL_SWING_SELECT, SET_HORIZONTAL_VANE_SELECT, SET_SUPPORTED_SWING_MODES,
        SET_VERTICAL_VANE_SELECT, VERTICAL_SWING_OPTIONS,
    };
    use crate::config::parse_id;
    use alloc::string::String;

    fn parent() -> ObjectRef {
        ObjectRef::new(parse_id("ac").unwrap())
    }

    fn select_conf(id: &str) -> Value {
        Value::Tree(
            ConfigTree::new()
                .with(CONF_ID, Value::Id(parse_id(id).unwrap()))
                .with("name", Value::Str(String::from(id)))
                .with("update_interval", Value::Duration(60_000)),
        )
    }

    fn kinds(instructions: &[Instruction]) -> Vec<InstructionKind> {
        instructions.iter().map(Instruction::kind).collect()
    }

    #[test]
    fn test_no_slots_emits_only_scalar_call() {
        for flag in [true, false] {
            let config =
                ConfigTree::new().with(CONF_SUPPORTS_VERTICAL_SWING, Value::Bool(flag));
            let out = compose(&parent(), &config, &COMPOSITE);

            assert_eq!(out.len(), 1);
            assert_eq!(
                out[0],
                Instruction::SetFields {
                    target: parent(),
                    method: SET_SUPPORTED_SWING_MODES,
                    values: vec![Value::Bool(flag)],
                }
            );
        }
    }

    #[test]
    fn test_vertical_slot_only() {
        let config = ConfigTree::new()
            .with(CONF_SUPPORTS_VERTICAL_SWING, Value::Bool(true))
            .with(CONF_VERTICAL_SWING_SELECT, select_conf("vane_v"));
        let out = compose(&parent(), &config, &COMPOSITE);

        assert_eq!(
            kinds(&out),
            [
                InstructionKind::SetFields,
                InstructionKind::Declare,
                InstructionKind::RegisterManaged,
                InstructionKind::Wire,
            ]
        );

        match &out[1] {
            Instruction::Declare { target, args, .. } => {
                assert_eq!(target.as_str(), "vane_v");
                assert_eq!(
                    args[0],
                    Value::str_list(&["top", "middle_top", "middle", "middle_bottom", "bottom", "auto"])
                );
                assert_eq!(args[0], Value::str_list(VERTICAL_SWING_OPTIONS));
            }
            other => panic!("expected declare, got {:?}", other),
        }

        match &out[2] {
            Instruction::RegisterManaged { target, config } => {
                assert_eq!(target.as_str(), "vane_v");
                assert_eq!(config.get_duration_ms("update_interval"), Some(60_000));
            }
            other => panic!("expected register, got {:?}", other),
        }

        assert_eq!(
            out[3],
            Instruction::Wire {
                parent: parent(),
                method: SET_VERTICAL_VANE_SELECT,
                child: ObjectRef::new(parse_id("vane_v").unwrap()),
            }
        );
    }

    #[test]
    fn test_slot_order_follows_definitions() {
        // Vertical listed first in the tree, horizontal must still come first
        let config = ConfigTree::new()
            .with(CONF_VERTICAL_SWING_SELECT, select_conf("vane_v"))
            .with(CONF_HORIZONTAL_SWING_SELECT, select_conf("vane_h"))
            .with(CONF_SUPPORTS_VERTICAL_SWING, Value::Bool(false));
        let out = compose(&parent(), &config, &COMPOSITE);

        assert_eq!(out.len(), 7);
        let targets: Vec<&str> = out[1..].iter().map(|i| match i {
            Instruction::Wire { child, .. } => child.as_str(),
            other => other.target().map(|t| t.as_str()).unwrap_or(""),
        }).collect();
        assert_eq!(targets, ["vane_h", "vane_h", "vane_h", "vane_v", "vane_v", "vane_v"]);

        match &out[3] {
            Instruction::Wire { method, .. } => assert_eq!(*method, SET_HORIZONTAL_VANE_SELECT),
            other => panic!("expected wire, got {:?}", other),
        }
    }

    #[test]
    fn test_flag_value_is_copied_from_tree() {
        let config = ConfigTree::new().with(CONF_SUPPORTS_VERTICAL_SWING, Value::Bool(false));
        let out = compose(&parent(), &config, &COMPOSITE);
        match &out[0] {
            Instruction::SetFields { values, .. } => assert_eq!(values, &[Value::Bool(false)]),
            other => panic!("expected set fields, got {:?}", other),
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "supports_vertical_swing")]
    fn test_missing_flag_is_not_defaulted() {
        compose(&parent(), &ConfigTree::new(), &COMPOSITE);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "validated key `id` is missing")]
    fn test_slot_without_id_is_not_invented() {
        let config = ConfigTree::new()
            .with(CONF_SUPPORTS_VERTICAL_SWING, Value::Bool(true))
            .with(CONF_HORIZONTAL_SWING_SELECT, Value::Tree(ConfigTree::new()));
        compose(&parent(), &config, &COMPOSITE);
    }
}
