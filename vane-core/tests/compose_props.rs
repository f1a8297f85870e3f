//! Property tests for composition and dependency selection

use proptest::prelude::*;

use vane_core::codegen::{Instruction, InstructionKind, ObjectRef};
use vane_core::components::async_tcp;
use vane_core::components::panasonic_ir::{
    COMPOSITE, CONF_HORIZONTAL_SWING_SELECT, CONF_SUPPORTS_VERTICAL_SWING,
    CONF_VERTICAL_SWING_SELECT, SLOTS,
};
use vane_core::compose::compose;
use vane_core::config::{parse_id, ConfigTree, Value, CONF_ID, CONF_NAME};
use vane_core::platform::Platform;

fn select_tree(id: &str) -> Value {
    Value::Tree(
        ConfigTree::new()
            .with(CONF_ID, Value::Id(parse_id(id).unwrap()))
            .with(CONF_NAME, Value::Str(id.to_string())),
    )
}

/// Build a climate config; `vertical_first` flips the key order in the tree
fn climate_tree(flag: bool, horizontal: bool, vertical: bool, vertical_first: bool) -> ConfigTree {
    let mut entries: Vec<(&str, Value)> = Vec::new();
    if horizontal {
        entries.push((CONF_HORIZONTAL_SWING_SELECT, select_tree("vane_h")));
    }
    if vertical {
        entries.push((CONF_VERTICAL_SWING_SELECT, select_tree("vane_v")));
    }
    if vertical_first {
        entries.reverse();
    }
    entries.push((CONF_SUPPORTS_VERTICAL_SWING, Value::Bool(flag)));
    entries.into_iter().collect()
}

fn parent() -> ObjectRef {
    ObjectRef::new(parse_id("ac").unwrap())
}

fn platform() -> impl Strategy<Value = Platform> {
    prop::sample::select(Platform::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_instruction_count(flag in any::<bool>(), h in any::<bool>(), v in any::<bool>(), rev in any::<bool>()) {
        let config = climate_tree(flag, h, v, rev);
        let out = compose(&parent(), &config, &COMPOSITE);
        let present = usize::from(h) + usize::from(v);

        prop_assert_eq!(out.len(), 1 + 3 * present);
        prop_assert_eq!(out[0].kind(), InstructionKind::SetFields);
        prop_assert_eq!(
            out.iter().filter(|i| i.kind() == InstructionKind::SetFields).count(),
            1
        );
    }

    #[test]
    fn prop_compose_is_deterministic(flag in any::<bool>(), h in any::<bool>(), v in any::<bool>(), rev in any::<bool>()) {
        let config = climate_tree(flag, h, v, rev);
        prop_assert_eq!(
            compose(&parent(), &config, &COMPOSITE),
            compose(&parent(), &config, &COMPOSITE)
        );
    }

    #[test]
    fn prop_tree_order_is_irrelevant(flag in any::<bool>(), h in any::<bool>(), v in any::<bool>()) {
        prop_assert_eq!(
            compose(&parent(), &climate_tree(flag, h, v, false), &COMPOSITE),
            compose(&parent(), &climate_tree(flag, h, v, true), &COMPOSITE)
        );
    }

    #[test]
    fn prop_slot_independence(flag in any::<bool>(), rev in any::<bool>(), drop_index in 0usize..2) {
        let full = climate_tree(flag, true, true, rev);
        let mut reduced = full.clone();
        let dropped = SLOTS[drop_index];
        reduced.remove(dropped.key);

        let full_out = compose(&parent(), &full, &COMPOSITE);
        let reduced_out = compose(&parent(), &reduced, &COMPOSITE);
        prop_assert_eq!(full_out.len(), reduced_out.len() + 3);

        // Removing the dropped slot's triple from the full output gives the reduced output
        let start = 1 + 3 * drop_index;
        let mut expected = full_out.clone();
        expected.drain(start..start + 3);
        prop_assert_eq!(expected, reduced_out);
    }

    #[test]
    fn prop_declare_register_wire_per_child(flag in any::<bool>(), h in any::<bool>(), v in any::<bool>(), rev in any::<bool>()) {
        let out = compose(&parent(), &climate_tree(flag, h, v, rev), &COMPOSITE);
        for triple in out[1..].chunks(3) {
            let (declared, registered, wired) = match triple {
                [Instruction::Declare { target: d, .. },
                 Instruction::RegisterManaged { target: r, .. },
                 Instruction::Wire { parent: p, child: c, .. }] => {
                    prop_assert_eq!(p, &parent());
                    (d, r, c)
                }
                other => return Err(TestCaseError::fail(format!("bad triple {:?}", other))),
            };
            prop_assert_eq!(declared, registered);
            prop_assert_eq!(registered, wired);
        }
    }

    #[test]
    fn prop_selector_yields_at_most_one(p in platform()) {
        let matches = async_tcp::LIBRARIES.iter().filter(|r| (r.matches)(p)).count();
        prop_assert!(matches <= 1);

        let selected = async_tcp::select_library(p);
        prop_assert_eq!(selected.is_some(), matches == 1);
    }
}
