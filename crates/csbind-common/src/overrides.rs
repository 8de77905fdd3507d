//! Override Tables
//!
//! Static configuration a maintainer edits when onboarding a new native API:
//!
//! - `names`: exact identifier -> replacement identifier, applied before case
//!   conversion (reserved-word collisions, irregular names).
//! - `types`: (owner, member) -> C type string, for members whose C type is
//!   too weak to express intent. Function results use the member name
//!   [`RESULT_MEMBER`].
//! - `ignores`: identifiers skipped entirely (e.g. variadic functions).
//!
//! Every lookup treats a missing key as "no override": overrides are
//! strictly additive.

use indexmap::{IndexMap, IndexSet};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Member name addressing a function's result in the type override table.
pub const RESULT_MEMBER: &str = "RESULT";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Overrides {
    pub names: IndexMap<String, String>,
    /// Keyed by owner (struct or function C name), then member C name.
    pub types: IndexMap<String, IndexMap<String, String>>,
    pub ignores: IndexSet<String>,
}

static BUILTIN: Lazy<Overrides> = Lazy::new(|| {
    let mut overrides = Overrides::default();

    for (from, to) in [
        ("sgl_error", "sgl_get_error"),
        ("sgl_deg", "sgl_as_degrees"),
        ("sgl_rad", "sgl_as_radians"),
        ("sapp_isvalid", "sapp_is_valid"),
        ("lock", "dolock"),
        ("params", "parameters"),
        ("sshape_element_range", "sshape_make_element_range"),
        ("sshape_mat4", "sshape_make_mat4"),
    ] {
        overrides.names.insert(from.to_string(), to.to_string());
    }

    for (owner, member, ty) in [
        ("sg_context_desc", "color_format", "int"),
        ("sg_context_desc", "depth_format", "int"),
        ("sg_apply_uniforms", "ub_index", "uint32_t"),
        ("sg_draw", "base_element", "uint32_t"),
        ("sg_draw", "num_elements", "uint32_t"),
        ("sg_draw", "num_instances", "uint32_t"),
        ("sshape_element_range_t", "base_element", "uint32_t"),
        ("sshape_element_range_t", "num_elements", "uint32_t"),
        ("sdtx_font", "font_index", "uint32_t"),
    ] {
        overrides.set_member_type(owner, member, ty);
    }

    for name in [
        "sdtx_printf",
        "sdtx_vprintf",
        "sg_install_trace_hooks",
        "sg_trace_hooks",
    ] {
        overrides.ignores.insert(name.to_string());
    }

    overrides
});

impl Overrides {
    /// The tables shipped with csbind for the sokol headers.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Replacement for `ident`, or `ident` itself when there is none.
    pub fn rename<'a>(&'a self, ident: &'a str) -> &'a str {
        self.names.get(ident).map(String::as_str).unwrap_or(ident)
    }

    /// Overriding C type for `owner.member`, if any.
    pub fn member_type(&self, owner: &str, member: &str) -> Option<&str> {
        self.types
            .get(owner)
            .and_then(|members| members.get(member))
            .map(String::as_str)
    }

    pub fn set_member_type(&mut self, owner: &str, member: &str, ty: &str) {
        self.types
            .entry(owner.to_string())
            .or_default()
            .insert(member.to_string(), ty.to_string());
    }

    pub fn is_ignored(&self, ident: &str) -> bool {
        self.ignores.contains(ident)
    }

    /// Layer `other` over `self`; entries from `other` win per key.
    pub fn merge(&mut self, other: Overrides) {
        self.names.extend(other.names);
        for (owner, members) in other.types {
            self.types.entry(owner).or_default().extend(members);
        }
        self.ignores.extend(other.ignores);
    }
}

#[cfg(test)]
#[path = "tests/overrides_tests.rs"]
mod overrides_tests;
