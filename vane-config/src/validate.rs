//! Schema validation
//!
//! Walks a parsed TOML document against the component schemas. Every error
//! is collected with its dotted path instead of stopping at the first one.
//! Validated trees keep schema field order, with defaults filled in and
//! missing ids generated.

use std::collections::BTreeSet;

use toml::{Table, Value as TomlValue};
use tracing::debug;

use vane_core::components::{ComponentConfig, ComponentKind};
use vane_core::config::{
    join_id, parse_id, snake_case, ConfigTree, Field, FieldKind, Id, Presence, Schema, Value,
    CONF_ID, CONF_NAME, CONF_PLATFORM,
};
use vane_core::platform::{Framework, Platform, Target};

use crate::document::{DeviceConfig, Document};
use crate::duration::parse_duration_ms;
use crate::error::{FieldError, FieldErrorKind, ValidationErrors};
use crate::loader::LoadOptions;

/// Top level section describing the device itself
pub const DEVICE_SECTION: &str = "device";

const CONF_FRAMEWORK: &str = "framework";

/// Validate a parsed document
pub fn validate_document(root: &Table, options: &LoadOptions) -> Result<Document, ValidationErrors> {
    let mut validator = Validator::new(root);

    let device = validator.device(root.get(DEVICE_SECTION), options);
    let target = device.as_ref().map(|d| d.target);

    let mut components = Vec::new();
    for (domain, value) in root {
        if domain == DEVICE_SECTION {
            continue;
        }
        validator.domain(domain, value, target, &mut components);
    }

    match device {
        Some(device) if validator.errors.is_empty() => Ok(Document { device, components }),
        _ => Err(ValidationErrors(validator.errors)),
    }
}

struct Validator {
    errors: Vec<FieldError>,
    /// Ids written explicitly anywhere in the document
    reserved: BTreeSet<String>,
    /// Ids declared so far, explicit or generated
    declared: BTreeSet<String>,
}

impl Validator {
    fn new(root: &Table) -> Self {
        let mut reserved = BTreeSet::new();
        collect_ids(root, &mut reserved);
        Self {
            errors: Vec::new(),
            reserved,
            declared: BTreeSet::new(),
        }
    }

    fn error(&mut self, path: impl Into<String>, kind: FieldErrorKind) {
        self.errors.push(FieldError::new(path, kind));
    }

    fn device(&mut self, value: Option<&TomlValue>, options: &LoadOptions) -> Option<DeviceConfig> {
        let Some(value) = value else {
            self.error(DEVICE_SECTION, FieldErrorKind::Missing);
            return None;
        };
        let table = self.expect_table(DEVICE_SECTION, value)?;

        for key in table.keys() {
            if !matches!(key.as_str(), CONF_NAME | CONF_PLATFORM | CONF_FRAMEWORK) {
                self.error(child_path(DEVICE_SECTION, key), FieldErrorKind::UnknownKey);
            }
        }

        let name = self.required_str(DEVICE_SECTION, table, CONF_NAME);

        // An override replaces the file's platform token, valid or not
        let platform_path = child_path(DEVICE_SECTION, CONF_PLATFORM);
        let platform = match (options.platform, table.get(CONF_PLATFORM)) {
            (Some(platform), _) => Some(platform),
            (None, Some(raw)) => self.expect_str(&platform_path, raw).and_then(|s| {
                let parsed = s.parse::<Platform>().ok();
                if parsed.is_none() {
                    self.error(&platform_path, FieldErrorKind::UnknownPlatform(s.to_owned()));
                }
                parsed
            }),
            (None, None) => {
                self.error(&platform_path, FieldErrorKind::Missing);
                None
            }
        };

        let framework_path = child_path(DEVICE_SECTION, CONF_FRAMEWORK);
        let framework = match table.get(CONF_FRAMEWORK) {
            Some(raw) => self.expect_str(&framework_path, raw).and_then(|s| {
                let parsed = s.parse::<Framework>().ok();
                if parsed.is_none() {
                    self.error(&framework_path, FieldErrorKind::UnknownFramework(s.to_owned()));
                }
                parsed
            }),
            None => Some(Framework::default()),
        };

        Some(DeviceConfig {
            name: name?,
            target: Target::new(platform?, framework?),
        })
    }

    fn domain(
        &mut self,
        domain: &str,
        value: &TomlValue,
        target: Option<Target>,
        out: &mut Vec<ComponentConfig>,
    ) {
        if !ComponentKind::is_platform_domain(domain) {
            let Some(kind) = ComponentKind::lookup(domain, None) else {
                self.error(domain, FieldErrorKind::UnknownComponent);
                return;
            };
            if let Some(table) = self.expect_table(domain, value) {
                self.component(kind, domain, table, target, out);
            }
            return;
        }

        let mut entries: Vec<(String, &Table)> = Vec::new();
        match value {
            TomlValue::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    let path = format!("{}[{}]", domain, i);
                    if let Some(table) = self.expect_table(&path, item) {
                        entries.push((path, table));
                    }
                }
            }
            TomlValue::Table(table) => entries.push((domain.to_owned(), table)),
            other => self.error(
                domain,
                FieldErrorKind::TypeMismatch {
                    expected: "array of tables",
                    found: other.type_str(),
                },
            ),
        }

        for (path, table) in entries {
            let Some(platform) = self.required_str(&path, table, CONF_PLATFORM) else {
                continue;
            };
            match ComponentKind::lookup(domain, Some(platform.as_str())) {
                Some(kind) => self.component(kind, &path, table, target, out),
                None => self.error(child_path(&path, CONF_PLATFORM), FieldErrorKind::UnknownComponent),
            }
        }
    }

    fn component(
        &mut self,
        kind: ComponentKind,
        path: &str,
        table: &Table,
        target: Option<Target>,
        out: &mut Vec<ComponentConfig>,
    ) {
        if let Some(target) = target {
            if let Some(platforms) = kind.supported_platforms() {
                if !platforms.contains(&target.platform) {
                    self.error(path, FieldErrorKind::UnsupportedPlatform(target.platform));
                }
            }
            if let Some(framework) = kind.required_framework() {
                if framework != target.framework {
                    self.error(path, FieldErrorKind::RequiresFramework(framework));
                }
            }
        }

        let config = self.tree(kind.schema(), path, table, kind.platform_key().is_some());
        debug!(component = kind.domain(), path, fields = config.len(), "validated component");
        out.push(ComponentConfig::new(kind, config));
    }

    fn tree(&mut self, schema: &Schema, path: &str, table: &Table, has_platform_key: bool) -> ConfigTree {
        for key in table.keys() {
            if has_platform_key && key == CONF_PLATFORM {
                continue;
            }
            if schema.field(key).is_none() {
                self.error(child_path(path, key), FieldErrorKind::UnknownKey);
            }
        }

        let mut tree = ConfigTree::new();
        for field in schema.fields() {
            let field_path = child_path(path, field.key);
            match table.get(field.key) {
                Some(raw) => {
                    if let Some(value) = self.value(field, &field_path, raw) {
                        tree.insert(field.key, value);
                    }
                }
                None => match field.presence {
                    Presence::Required => self.error(field_path, FieldErrorKind::Missing),
                    Presence::Optional => {}
                    Presence::Default(default) => tree.insert(field.key, default.to_value()),
                    Presence::Generated => {
                        if let FieldKind::DeclareId(class) = field.kind {
                            let id = self.generate_id(class.name);
                            tree.insert(field.key, Value::Id(id));
                        }
                    }
                },
            }
        }
        tree
    }

    fn value(&mut self, field: &Field, path: &str, raw: &TomlValue) -> Option<Value> {
        match (field.kind, raw) {
            (FieldKind::Bool, TomlValue::Boolean(b)) => Some(Value::Bool(*b)),
            (FieldKind::Str, TomlValue::String(s)) => Some(Value::Str(s.clone())),
            (FieldKind::Duration, TomlValue::Integer(i)) => match u32::try_from(*i) {
                Ok(ms) => Some(Value::Duration(ms)),
                Err(_) => {
                    self.error(path, FieldErrorKind::InvalidDuration(i.to_string()));
                    None
                }
            },
            (FieldKind::Duration, TomlValue::String(s)) => match parse_duration_ms(s) {
                Some(ms) => Some(Value::Duration(ms)),
                None => {
                    self.error(path, FieldErrorKind::InvalidDuration(s.clone()));
                    None
                }
            },
            (FieldKind::DeclareId(_), TomlValue::String(s)) => {
                let id = self.id(path, s)?;
                if !self.declared.insert(s.clone()) {
                    self.error(path, FieldErrorKind::DuplicateId(s.clone()));
                    return None;
                }
                Some(Value::Id(id))
            }
            (FieldKind::UseId, TomlValue::String(s)) => self.id(path, s).map(Value::Id),
            (FieldKind::Nested(schema), TomlValue::Table(t)) => {
                Some(Value::Tree(self.tree(schema, path, t, false)))
            }
            (kind, other) => {
                self.error(
                    path,
                    FieldErrorKind::TypeMismatch {
                        expected: expected_name(kind),
                        found: other.type_str(),
                    },
                );
                None
            }
        }
    }

    fn id(&mut self, path: &str, s: &str) -> Option<Id> {
        let id = parse_id(s);
        if id.is_none() {
            self.error(path, FieldErrorKind::InvalidId(s.to_owned()));
        }
        id
    }

    /// Next free `<class>_id`, `<class>_id_2`, ...
    fn generate_id(&mut self, class_name: &str) -> Id {
        let base = format!("{}_id", snake_case(class_name));
        let mut n = 1;
        loop {
            let candidate = if n == 1 {
                base.clone()
            } else {
                format!("{}_{}", base, n)
            };
            if !self.reserved.contains(&candidate) && self.declared.insert(candidate.clone()) {
                debug!(id = %candidate, "generated id");
                return join_id(&[&candidate]);
            }
            n += 1;
        }
    }

    fn required_str(&mut self, path: &str, table: &Table, key: &str) -> Option<String> {
        let field_path = child_path(path, key);
        match table.get(key) {
            Some(raw) => self.expect_str(&field_path, raw).map(str::to_owned),
            None => {
                self.error(field_path, FieldErrorKind::Missing);
                None
            }
        }
    }

    fn expect_table<'a>(&mut self, path: &str, value: &'a TomlValue) -> Option<&'a Table> {
        match value {
            TomlValue::Table(t) => Some(t),
            other => {
                self.error(
                    path,
                    FieldErrorKind::TypeMismatch {
                        expected: "table",
                        found: other.type_str(),
                    },
                );
                None
            }
        }
    }

    fn expect_str<'a>(&mut self, path: &str, value: &'a TomlValue) -> Option<&'a str> {
        match value {
            TomlValue::String(s) => Some(s),
            other => {
                self.error(
                    path,
                    FieldErrorKind::TypeMismatch {
                        expected: "string",
                        found: other.type_str(),
                    },
                );
                None
            }
        }
    }
}

fn expected_name(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Bool => "boolean",
        FieldKind::Str => "string",
        FieldKind::Duration => "duration",
        FieldKind::DeclareId(_) | FieldKind::UseId => "id",
        FieldKind::Nested(_) => "table",
    }
}

fn child_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_owned()
    } else {
        format!("{}.{}", path, key)
    }
}

/// Collect every explicit `id = "..."` in the document
fn collect_ids(table: &Table, out: &mut BTreeSet<String>) {
    for (key, value) in table {
        match value {
            TomlValue::String(s) if key == CONF_ID => {
                out.insert(s.clone());
            }
            TomlValue::Table(t) => collect_ids(t, out),
            TomlValue::Array(items) => {
                for item in items {
                    if let TomlValue::Table(t) = item {
                        collect_ids(t, out);
                    }
                }
            }
            _ => {}
        }
    }
}
