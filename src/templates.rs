use std::collections::HashMap;

use tera::Tera;

use crate::error::AppError;
use crate::tasks::{Priority, TaskStatus};

/// Templates compiled into the binary, so the image needs no template directory.
const TEMPLATES: [(&str, &str); 2] = [
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
];

/// Initialize the Tera template engine
pub fn init_templates() -> Result<Tera, AppError> {
    let mut tera = Tera::default();
    tera.add_raw_templates(TEMPLATES)?;

    tera.register_filter("status_label", status_label_filter);
    tera.register_filter("priority_label", priority_label_filter);

    Ok(tera)
}

/// Turn a serialized status ("in-progress") into its display label.
/// Unknown values pass through unchanged.
fn status_label_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("status_label filter expects a string"))?;

    let label = s
        .parse::<TaskStatus>()
        .map(|status| status.label().to_string())
        .unwrap_or_else(|_| s.to_string());
    Ok(tera::Value::String(label))
}

fn priority_label_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("priority_label filter expects a string"))?;

    let label = s
        .parse::<Priority>()
        .map(|priority| priority.label().to_string())
        .unwrap_or_else(|_| s.to_string());
    Ok(tera::Value::String(label))
}
