//! Catalog-aware option registration.
//!
//! An option's default comes from the catalog entry named by the first
//! command-line argument when that entry has the field, and from the
//! option's own definition otherwise.

use crate::catalog::{Catalog, FieldValue, Number};
use crate::error::{Error, Result};
use clap::{Arg, ArgAction, Command, value_parser};
use tracing::debug;

/// Value type of an option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValueKind {
    /// Free text, including file paths.
    #[default]
    Text,
    /// Real number.
    Float,
    /// Integer.
    Int,
}

/// What the parser does when it sees the option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Action {
    /// Store the given value(s).
    #[default]
    Store,
    /// Boolean flag, set to true when present.
    StoreTrue,
}

/// Number of values an option takes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Arity {
    /// Exactly one value.
    #[default]
    Single,
    /// One or more values.
    OneOrMore,
}

/// Default value of an option.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    /// Real number.
    Real(f64),
    /// Integer.
    Int(i64),
    /// Text.
    Str(String),
    /// Boolean.
    Bool(bool),
    /// List of numbers.
    List(Vec<Number>),
}

impl DefaultValue {
    /// Render as the strings clap parses default values from.
    #[must_use]
    pub fn to_arg_values(&self) -> Vec<String> {
        match self {
            Self::Real(r) => vec![r.to_string()],
            Self::Int(i) => vec![i.to_string()],
            Self::Str(s) => vec![s.clone()],
            Self::Bool(b) => vec![b.to_string()],
            Self::List(items) => items.iter().map(ToString::to_string).collect(),
        }
    }
}

impl From<FieldValue> for DefaultValue {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Real(r) => Self::Real(r),
            FieldValue::Int(i) => Self::Int(i),
            FieldValue::Str(s) => Self::Str(s),
            FieldValue::Seq(items) => Self::List(items),
        }
    }
}

/// Definition of one catalog-backed option.
#[derive(Debug, Clone)]
pub struct OptionSpec {
    /// Long option name, without the leading dashes.
    pub name: &'static str,
    /// Help text.
    pub help: &'static str,
    /// Whether the option must be given when no catalog value exists.
    pub required: bool,
    /// Fallback default.
    pub default: Option<DefaultValue>,
    /// Value type.
    pub kind: ValueKind,
    /// Parser action.
    pub action: Action,
    /// Value count.
    pub arity: Arity,
}

impl OptionSpec {
    /// A single-valued text option with no default.
    #[must_use]
    pub fn new(name: &'static str, help: &'static str) -> Self {
        Self {
            name,
            help,
            required: false,
            default: None,
            kind: ValueKind::Text,
            action: Action::Store,
            arity: Arity::Single,
        }
    }

    /// Mark the option as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the fallback default.
    #[must_use]
    pub fn default_value(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    /// Set the value type.
    #[must_use]
    pub fn kind(mut self, kind: ValueKind) -> Self {
        self.kind = kind;
        self
    }

    /// Make this a boolean flag.
    #[must_use]
    pub fn store_true(mut self) -> Self {
        self.action = Action::StoreTrue;
        self
    }

    /// Accept one or more values.
    #[must_use]
    pub fn one_or_more(mut self) -> Self {
        self.arity = Arity::OneOrMore;
        self
    }

    /// The option with no default and nothing required, for lenient parsing.
    #[must_use]
    pub fn to_lenient_arg(&self) -> Arg {
        self.shape(Arg::new(self.name).long(self.name).help(self.help))
    }

    /// Apply the action and value count to `arg`.
    fn shape(&self, arg: Arg) -> Arg {
        let arg = match (self.action, self.arity) {
            (Action::StoreTrue, _) => arg.action(ArgAction::SetTrue),
            (Action::Store, Arity::OneOrMore) => arg.action(ArgAction::Set).num_args(1..),
            (Action::Store, Arity::Single) => arg.action(ArgAction::Set),
        };
        // `-104` is a value of a numeric option, not a short flag.
        arg.allow_negative_numbers(self.action == Action::Store && self.kind != ValueKind::Text)
    }
}

/// Effective default of an option after consulting the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    /// Default to register, if any.
    pub default: Option<DefaultValue>,
    /// Whether the option is still required.
    pub required: bool,
}

/// Resolve the default of `spec` for the model named `alias`.
///
/// A catalog value replaces the option's default and lifts its
/// requirement.
pub fn resolve_default(
    catalog: Option<&Catalog>,
    alias: &str,
    spec: &OptionSpec,
) -> Result<Resolved> {
    let mut resolved = Resolved {
        default: spec.default.clone(),
        required: spec.required,
    };

    if let Some(catalog) = catalog
        && let Some(value) = catalog.field(alias, spec.name)?
    {
        debug!("Default for --{} taken from catalog entry '{alias}'", spec.name);
        resolved.default = Some(value.into());
        resolved.required = false;
    }

    if spec.action == Action::StoreTrue {
        let flag = flag_default(spec.name, resolved.default.as_ref())?;
        resolved.default = Some(DefaultValue::Bool(flag));
    }

    Ok(resolved)
}

/// Normalise the default of a boolean flag.
fn flag_default(name: &str, default: Option<&DefaultValue>) -> Result<bool> {
    match default {
        None => Ok(false),
        Some(DefaultValue::Bool(b)) => Ok(*b),
        Some(DefaultValue::Str(s)) if s == "true" => Ok(true),
        Some(DefaultValue::Str(s)) if s == "false" => Ok(false),
        Some(DefaultValue::Int(0)) => Ok(false),
        Some(DefaultValue::Int(1)) => Ok(true),
        Some(DefaultValue::Real(r)) if *r == 0.0 => Ok(false),
        Some(DefaultValue::Real(r)) if *r == 1.0 => Ok(true),
        Some(other) => Err(Error::InvalidFlagDefault {
            name: name.to_string(),
            value: other.to_arg_values().join(" "),
        }),
    }
}

/// Register `spec` on `cmd` with its catalog-resolved default.
///
/// `argv` is the full command line including the program name; its first
/// argument names the catalog entry. With no arguments at all, `cmd` is
/// returned unchanged.
pub fn add_argument(
    cmd: Command,
    argv: &[String],
    catalog: Option<&Catalog>,
    spec: &OptionSpec,
) -> Result<Command> {
    let Some(alias) = argv.get(1) else {
        return Ok(cmd);
    };

    let resolved = resolve_default(catalog, alias, spec)?;
    let mut arg = Arg::new(spec.name)
        .long(spec.name)
        .help(spec.help)
        .required(resolved.required);

    arg = match (spec.action, spec.kind) {
        (Action::StoreTrue, _) => arg,
        (Action::Store, ValueKind::Text) => arg.value_parser(value_parser!(String)),
        (Action::Store, ValueKind::Float) => arg.value_parser(value_parser!(f64)),
        (Action::Store, ValueKind::Int) => arg.value_parser(value_parser!(i64)),
    };
    arg = spec.shape(arg);

    // A required option never falls back to its default.
    if !resolved.required
        && let Some(default) = &resolved.default
    {
        arg = arg.default_values(default.to_arg_values());
    }

    Ok(cmd.arg(arg))
}
