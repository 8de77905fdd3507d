//! Identifier Case Conversion
//!
//! C APIs name things in snake case behind a library prefix
//! (`sg_buffer_desc`, `SG_PIXELFORMAT_R8`, `sg_make_buffer`). The generated
//! C# surface uses PascalCase without the prefix, since the owning module
//! class already scopes every name:
//!
//! ```text
//! sg_buffer_desc          => BufferDesc
//! sshape_element_range_t  => ElementRange
//! sg_range  (from sshape) => sg.Range
//! SG_PIXELFORMAT_R8       => R8
//! sg_make_buffer          => MakeBuffer
//! ```
//!
//! All functions here are total: names that carry no known prefix still go
//! through case conversion unchanged otherwise.

/// Segment dropped by case conversion (the `_t` typedef suffix). A name made
/// of nothing else keeps it, so `t` still converts to `T`.
pub const TYPE_SUFFIX: &str = "t";

/// Escape character for names whose first output character is a digit.
pub const DIGIT_ESCAPE: char = '_';

/// Derived enum item name of the "force 32-bit width" sentinel.
pub const FORCE_WIDTH_SENTINEL: &str = "ForceU32";

/// `prefix_bla_blub(_t)` => `BlaBlub`
///
/// The prefix is stripped case-insensitively when present, so the same
/// prefix works for `sg_setup` and `SG_INVALID_ID`.
pub fn to_pascal_case(ident: &str, prefix: &str) -> String {
    let rest = strip_prefix_ignore_case(ident, prefix).unwrap_or(ident);
    join_segments(rest)
}

/// `prefix_bla_blub(_t)` => `(dep.)BlaBlub`
///
/// Names owned by the module being generated are used bare. Names owned by
/// one of `dep_prefixes` are qualified with that dependency's import alias.
/// Anything else is qualified by its own first segment.
pub fn to_type_name(ident: &str, own_prefix: &str, dep_prefixes: &[String]) -> String {
    if let Some(rest) = strip_prefix_ignore_case(ident, own_prefix) {
        return join_segments(rest);
    }

    if let Some(dep) = dep_prefixes
        .iter()
        .find(|dep| strip_prefix_ignore_case(ident, dep).is_some())
    {
        let rest = &ident[dep.len()..];
        return format!("{}.{}", import_alias(dep), join_segments(rest));
    }

    match ident.split_once('_') {
        Some((head, rest)) => format!(
            "{}.{}",
            head.to_ascii_lowercase(),
            join_segments(rest)
        ),
        None => join_segments(ident),
    }
}

/// `PREFIX_ENUM_BLA` => `Bla`, `_PREFIX_ENUM_BLA` => `Bla`
///
/// When the item repeats the enum's own name (`FOO_BAR_BAZ_QUX` inside
/// `FOO_BAR_BAZ`) that whole name is stripped. Otherwise the fixed two
/// leading segments are stripped, which covers items that spell the enum
/// name without its inner underscores (`SG_PIXELFORMAT_R8` inside
/// `sg_pixel_format`).
pub fn to_enum_item_name(item: &str, enum_name: &str) -> String {
    let name = item.strip_prefix('_').unwrap_or(item);

    let rest = match strip_prefix_ignore_case(name, enum_name).and_then(|r| r.strip_prefix('_')) {
        Some(rest) => rest,
        None => name.splitn(3, '_').nth(2).unwrap_or(""),
    };

    let converted = join_segments(rest);
    if converted.is_empty() {
        join_segments(name)
    } else {
        converted
    }
}

/// Whether a derived enum item name is the width-forcing sentinel that
/// C APIs append to pin an enum to 32 bits.
pub fn is_force_width_sentinel(item_name: &str) -> bool {
    item_name == FORCE_WIDTH_SENTINEL
}

/// Import alias of a dependency prefix: `sg_` => `sg`.
pub fn import_alias(prefix: &str) -> &str {
    prefix.trim_end_matches('_')
}

/// Strip `prefix` from the front of `ident`, ignoring ASCII case.
pub fn strip_prefix_ignore_case<'a>(ident: &'a str, prefix: &str) -> Option<&'a str> {
    let head = ident.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&ident[prefix.len()..])
    } else {
        None
    }
}

fn join_segments(text: &str) -> String {
    let segments: Vec<&str> = text.split('_').filter(|s| !s.is_empty()).collect();
    let keep_suffix = segments
        .iter()
        .all(|segment| segment.eq_ignore_ascii_case(TYPE_SUFFIX));

    let mut out = String::with_capacity(text.len() + 1);
    for segment in segments {
        if !keep_suffix && segment.eq_ignore_ascii_case(TYPE_SUFFIX) {
            continue;
        }
        push_capitalized(&mut out, segment);
    }

    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, DIGIT_ESCAPE);
    }
    out
}

fn push_capitalized(out: &mut String, segment: &str) {
    let mut chars = segment.chars();
    if let Some(first) = chars.next() {
        out.push(first.to_ascii_uppercase());
        for ch in chars {
            out.push(ch.to_ascii_lowercase());
        }
    }
}

#[cfg(test)]
#[path = "tests/names_tests.rs"]
mod names_tests;
