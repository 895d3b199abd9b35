//! Command-line glue: `--field=value` parsing and output rendering.

use formtpl_core::{FieldSet, Template};

/// Printed when `get_tpl` receives no usable field pairs.
pub const GET_TPL_USAGE: &str = "usage: formtpl get_tpl --<field>=<value> [--<field>=<value> ...]";

/// Collect `--name=value` arguments into a [`FieldSet`].
///
/// The value is everything after the first `=`, so it may itself contain
/// `=`. Arguments without the `--` prefix or without any `=` are skipped.
pub fn parse_field_args<I, S>(args: I) -> FieldSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut fields = FieldSet::new();
    for arg in args {
        let arg = arg.as_ref();
        let Some((name, value)) = arg.strip_prefix("--").and_then(|rest| rest.split_once('='))
        else {
            tracing::debug!(arg, "ignoring malformed field argument");
            continue;
        };
        fields.insert(name, value);
    }
    fields
}

/// One `list_tpl` line: `name: field=type, field=type`.
pub fn render_template(template: &Template) -> String {
    let fields: Vec<String> = template
        .fields
        .iter()
        .map(|(name, ty)| format!("{name}={ty}"))
        .collect();
    format!("{}: {}", template.name, fields.join(", "))
}
