use std::collections::HashSet;
use std::fmt;

use crate::scene::model::{ASSEMBLY_VERSION_STR, AssemblyDef, ComponentDef};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SchemaPathElem {
    Field(&'static str),
    Index(usize),
}

#[derive(Debug, Clone)]
pub(crate) struct SchemaError {
    pub(crate) path: Vec<SchemaPathElem>,
    pub(crate) message: String,
}

impl SchemaError {
    fn at(path: &[SchemaPathElem], message: impl Into<String>) -> Self {
        Self {
            path: path.to_vec(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return write!(f, "{}", self.message);
        }
        write!(f, "{}: {}", format_path(&self.path), self.message)
    }
}

fn format_path(path: &[SchemaPathElem]) -> String {
    let mut s = String::from("$");
    for p in path {
        match *p {
            SchemaPathElem::Field(name) => {
                s.push('.');
                s.push_str(name);
            }
            SchemaPathElem::Index(i) => {
                s.push('[');
                s.push_str(&i.to_string());
                s.push(']');
            }
        }
    }
    s
}

#[derive(Debug, Clone)]
pub(crate) struct SchemaErrors {
    pub(crate) errors: Vec<SchemaError>,
}

impl fmt::Display for SchemaErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaErrors {}

/// Validate the assembly model. Collects every violation before failing.
///
/// Unknown easing names are deliberately not an error; they fall back to the
/// documented default at resolution time.
pub(crate) fn validate_assembly(def: &AssemblyDef) -> Result<(), SchemaErrors> {
    let mut errors = Vec::new();

    if def.version != ASSEMBLY_VERSION_STR {
        errors.push(SchemaError::at(
            &[SchemaPathElem::Field("version")],
            format!(
                "unsupported version \"{}\" (expected \"{ASSEMBLY_VERSION_STR}\")",
                def.version
            ),
        ));
    }

    check_finite_positive(
        &mut errors,
        &[SchemaPathElem::Field("timing"), SchemaPathElem::Field("duration_ms")],
        def.timing.duration_ms,
    );
    check_finite_non_negative(
        &mut errors,
        &[SchemaPathElem::Field("timing"), SchemaPathElem::Field("delay_ms")],
        def.timing.delay_ms,
    );
    check_finite_non_negative(
        &mut errors,
        &[SchemaPathElem::Field("explode_distance")],
        def.explode_distance,
    );

    if def.components.is_empty() {
        errors.push(SchemaError::at(
            &[SchemaPathElem::Field("components")],
            "components must not be empty",
        ));
    }

    let mut seen = HashSet::new();
    for (i, component) in def.components.iter().enumerate() {
        let base = [SchemaPathElem::Field("components"), SchemaPathElem::Index(i)];
        validate_component(&mut errors, &base, component);
        if !component.filename.is_empty() && !seen.insert(component.filename.as_str()) {
            errors.push(SchemaError::at(
                &with_field(&base, "filename"),
                format!("duplicate filename \"{}\"", component.filename),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SchemaErrors { errors })
    }
}

fn validate_component(errors: &mut Vec<SchemaError>, base: &[SchemaPathElem], def: &ComponentDef) {
    if def.filename.is_empty() {
        errors.push(SchemaError::at(
            &with_field(base, "filename"),
            "filename must not be empty",
        ));
    }

    let (x, y, z) = def.direction.xyz();
    if !(x.is_finite() && y.is_finite() && z.is_finite()) {
        errors.push(SchemaError::at(
            &with_field(base, "direction"),
            "direction axes must be finite",
        ));
    } else if x == 0.0 && y == 0.0 && z == 0.0 {
        errors.push(SchemaError::at(
            &with_field(base, "direction"),
            "direction must have a non-zero axis",
        ));
    }

    if let Some(distance) = def.explode_distance {
        check_finite_non_negative(errors, &with_field(base, "explode_distance"), distance);
    }

    if !def.scale.is_finite() || def.scale <= 0.0 {
        errors.push(SchemaError::at(
            &with_field(base, "scale"),
            "scale must be finite and > 0",
        ));
    }
    if !def.rotation_deg.is_finite() {
        errors.push(SchemaError::at(
            &with_field(base, "rotation_deg"),
            "rotation_deg must be finite",
        ));
    }
    if !def.opacity.is_finite() || !(0.0..=1.0).contains(&def.opacity) {
        errors.push(SchemaError::at(
            &with_field(base, "opacity"),
            "opacity must be within [0, 1]",
        ));
    }
}

fn with_field(base: &[SchemaPathElem], field: &'static str) -> Vec<SchemaPathElem> {
    let mut path = base.to_vec();
    path.push(SchemaPathElem::Field(field));
    path
}

fn check_finite_positive(errors: &mut Vec<SchemaError>, path: &[SchemaPathElem], value: f64) {
    if !value.is_finite() || value <= 0.0 {
        errors.push(SchemaError::at(path, "must be finite and > 0"));
    }
}

fn check_finite_non_negative(errors: &mut Vec<SchemaError>, path: &[SchemaPathElem], value: f64) {
    if !value.is_finite() || value < 0.0 {
        errors.push(SchemaError::at(path, "must be finite and >= 0"));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/validate.rs"]
mod tests;
