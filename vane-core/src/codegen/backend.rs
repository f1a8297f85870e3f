//! Emission backends
//!
//! A backend lowers instructions one at a time into some output. Two are
//! provided:
//!
//! - [`CppBackend`] - C++ statements for the device `setup()` body
//! - [`LibraryManifest`] - PlatformIO `lib_deps` entries

use alloc::string::String;
use core::fmt::{self, Write};

use super::instruction::Instruction;
use super::program::Program;
use crate::config::{
    ConfigTree, Value, CONF_DISABLED_BY_DEFAULT, CONF_ICON, CONF_NAME, CONF_UPDATE_INTERVAL,
};

/// Lowers instructions into an output
pub trait Backend {
    /// Lower a single instruction
    fn emit(&mut self, instruction: &Instruction) -> fmt::Result;

    /// Lower a whole program in emission order
    fn lower(&mut self, program: &Program) -> fmt::Result {
        for instruction in program.iter() {
            self.emit(instruction)?;
        }
        Ok(())
    }
}

/// C++ statement backend
pub struct CppBackend<W> {
    out: W,
}

impl<W: Write> CppBackend<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn register(&mut self, target: &str, config: &ConfigTree) -> fmt::Result {
        writeln!(self.out, "App.register_component({});", target)?;
        for (key, method) in [(CONF_NAME, "set_name"), (CONF_ICON, "set_icon")] {
            if let Some(text) = config.get_str(key) {
                write!(self.out, "{}->{}(", target, method)?;
                write_value(&mut self.out, &Value::Str(String::from(text)))?;
                writeln!(self.out, ");")?;
            }
        }
        if config.get_bool(CONF_DISABLED_BY_DEFAULT) == Some(true) {
            writeln!(self.out, "{}->set_disabled_by_default(true);", target)?;
        }
        if let Some(ms) = config.get_duration_ms(CONF_UPDATE_INTERVAL) {
            writeln!(self.out, "{}->set_update_interval({});", target, ms)?;
        }
        Ok(())
    }
}

impl<W: Write> Backend for CppBackend<W> {
    fn emit(&mut self, instruction: &Instruction) -> fmt::Result {
        match instruction {
            Instruction::Declare {
                target,
                class,
                args,
            } => {
                write!(self.out, "auto *{} = new {}(", target, class)?;
                write_args(&mut self.out, args)?;
                writeln!(self.out, ");")
            }
            Instruction::SetFields {
                target,
                method,
                values,
            } => {
                write!(self.out, "{}->{}(", target, method.name())?;
                write_args(&mut self.out, values)?;
                writeln!(self.out, ");")
            }
            Instruction::RegisterManaged { target, config } => {
                self.register(target.as_str(), config)
            }
            Instruction::Wire {
                parent,
                method,
                child,
            } => writeln!(self.out, "{}->{}({});", parent, method.name(), child),
            // Libraries are not statements
            Instruction::AddDependency(_) => Ok(()),
        }
    }
}

/// PlatformIO `lib_deps` backend
pub struct LibraryManifest<W> {
    out: W,
    header_written: bool,
}

impl<W: Write> LibraryManifest<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            header_written: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Backend for LibraryManifest<W> {
    fn emit(&mut self, instruction: &Instruction) -> fmt::Result {
        let Instruction::AddDependency(dep) = instruction else {
            return Ok(());
        };
        if !self.header_written {
            writeln!(self.out, "lib_deps =")?;
            self.header_written = true;
        }
        writeln!(self.out, "    {}", dep)
    }
}

/// Render a program as C++ statements
pub fn render_cpp(program: &Program) -> Result<String, fmt::Error> {
    let mut backend = CppBackend::new(String::new());
    backend.lower(program)?;
    Ok(backend.into_inner())
}

/// Render a program's libraries as a `lib_deps` block
pub fn render_lib_deps(program: &Program) -> Result<String, fmt::Error> {
    let mut backend = LibraryManifest::new(String::new());
    backend.lower(program)?;
    Ok(backend.into_inner())
}

fn write_args<W: Write>(out: &mut W, args: &[Value]) -> fmt::Result {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write_value(out, arg)?;
    }
    Ok(())
}

fn write_value<W: Write>(out: &mut W, value: &Value) -> fmt::Result {
    match value {
        Value::Bool(b) => out.write_str(if *b { "true" } else { "false" }),
        Value::Duration(ms) => write!(out, "{}", ms),
        Value::Id(id) => out.write_str(id),
        Value::Str(s) => {
            out.write_char('"')?;
            for c in s.chars() {
                match c {
                    '"' => out.write_str("\\\"")?,
                    '\\' => out.write_str("\\\\")?,
                    '\n' => out.write_str("\\n")?,
                    c => out.write_char(c)?,
                }
            }
            out.write_char('"')
        }
        Value::List(items) => {
            out.write_char('{')?;
            write_args(out, items)?;
            out.write_char('}')
        }
        // Nested trees never reach a constructor or setter
        Value::Tree(_) => out.write_str("{}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::{ClassPath, Method, ObjectRef};
    use crate::config::parse_id;
    use crate::deps::DependencyDescriptor;
    use alloc::vec;

    fn obj(id: &str) -> ObjectRef {
        ObjectRef::new(parse_id(id).unwrap())
    }

    fn sample_program() -> Program {
        let mut program = Program::new();
        program.push(Instruction::AddDependency(DependencyDescriptor::versioned(
            "esphome/ESPAsyncTCP-esphome",
            "1.2.3",
        )));
        program.declare(
            obj("vane"),
            ClassPath::new("panasonic_ir", "PanasonicACSelect"),
            vec![Value::str_list(&["top", "auto"])],
        );
        program.push(Instruction::RegisterManaged {
            target: obj("vane"),
            config: ConfigTree::new()
                .with(CONF_NAME, Value::Str(String::from("Vane \"V\"")))
                .with(CONF_UPDATE_INTERVAL, Value::Duration(60_000)),
        });
        program.push(Instruction::SetFields {
            target: obj("ac"),
            method: Method::new("set_supported_swing_modes"),
            values: vec![Value::Bool(true)],
        });
        program.push(Instruction::Wire {
            parent: obj("ac"),
            method: Method::new("set_vertical_vane_select"),
            child: obj("vane"),
        });
        program
    }

    #[test]
    fn test_cpp_lowering() {
        let cpp = render_cpp(&sample_program()).unwrap();
        let lines: vec::Vec<&str> = cpp.lines().collect();

        assert_eq!(
            lines,
            [
                "auto *vane = new panasonic_ir::PanasonicACSelect({\"top\", \"auto\"});",
                "App.register_component(vane);",
                "vane->set_name(\"Vane \\\"V\\\"\");",
                "vane->set_update_interval(60000);",
                "ac->set_supported_swing_modes(true);",
                "ac->set_vertical_vane_select(vane);",
            ]
        );
    }

    #[test]
    fn test_entity_fields_lowering() {
        let mut program = Program::new();
        program.push(Instruction::RegisterManaged {
            target: obj("vane"),
            config: ConfigTree::new()
                .with(CONF_NAME, Value::Str(String::from("Vane")))
                .with(CONF_ICON, Value::Str(String::from("mdi:arrow-up-down")))
                .with(CONF_DISABLED_BY_DEFAULT, Value::Bool(true)),
        });
        program.push(Instruction::RegisterManaged {
            target: obj("shown"),
            config: ConfigTree::new().with(CONF_DISABLED_BY_DEFAULT, Value::Bool(false)),
        });

        let cpp = render_cpp(&program).unwrap();
        let lines: vec::Vec<&str> = cpp.lines().collect();
        assert_eq!(
            lines,
            [
                "App.register_component(vane);",
                "vane->set_name(\"Vane\");",
                "vane->set_icon(\"mdi:arrow-up-down\");",
                "vane->set_disabled_by_default(true);",
                "App.register_component(shown);",
            ]
        );
    }

    #[test]
    fn test_lib_deps_lowering() {
        let manifest = render_lib_deps(&sample_program()).unwrap();
        assert_eq!(manifest, "lib_deps =\n    esphome/ESPAsyncTCP-esphome@1.2.3\n");
    }

    #[test]
    fn test_lib_deps_empty_without_dependencies() {
        let manifest = render_lib_deps(&Program::new()).unwrap();
        assert!(manifest.is_empty());
    }
}
