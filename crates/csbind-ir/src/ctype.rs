//! C Type Descriptors
//!
//! Raw C type strings arrive from the IR in clang's spelling:
//!
//! ```text
//! int                      const char *
//! sg_buffer_desc           const sg_buffer_desc *
//! float [4]                sg_color [4]
//! float [4][4]             const void * [8]
//! void (*)(void)           void (*)(const sapp_event *, void *)
//! ```
//!
//! Each string is parsed once into a [`CType`]; classification and mapping
//! work on the structured form. Text outside the supported grammar becomes
//! [`CType::Unparsed`] so it is carried through to an explicit placeholder.

use smallvec::SmallVec;
use std::fmt;

/// Token marking a function pointer type.
pub const FUNC_PTR_TOKEN: &str = "(*)";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CType {
    /// A bare identifier (primitive, struct, enum, `void`), optionally const.
    Named { name: String, is_const: bool },
    Pointer { pointee: Box<CType> },
    /// Fixed-size inline array; `dims` is outermost first.
    Array {
        element: Box<CType>,
        dims: SmallVec<[usize; 2]>,
    },
    FuncPtr {
        result: Box<CType>,
        params: Vec<CType>,
    },
    Unparsed(String),
}

impl CType {
    pub fn parse(text: &str) -> CType {
        let text = text.trim();
        let parsed = if let Some(idx) = text.find(FUNC_PTR_TOKEN) {
            parse_func_ptr(text, idx)
        } else if let Some(idx) = text.find('[') {
            parse_array(text, idx)
        } else {
            parse_declarator(text)
        };
        parsed.unwrap_or_else(|| CType::Unparsed(text.to_string()))
    }

    pub fn is_void(&self) -> bool {
        matches!(self, CType::Named { name, is_const: false } if name == "void")
    }
}

fn parse_func_ptr(text: &str, idx: usize) -> Option<CType> {
    let result = parse_declarator(text[..idx].trim())?;
    let args = text[idx + FUNC_PTR_TOKEN.len()..].trim();
    let inner = args.strip_prefix('(')?.strip_suffix(')')?;
    if inner.contains(['(', ')']) {
        return None;
    }

    let inner = inner.trim();
    let params = if inner.is_empty() || inner == "void" {
        Vec::new()
    } else {
        inner
            .split(',')
            .map(|param| parse_declarator(param.trim()))
            .collect::<Option<Vec<_>>>()?
    };

    Some(CType::FuncPtr {
        result: Box::new(result),
        params,
    })
}

fn parse_array(text: &str, idx: usize) -> Option<CType> {
    let element = parse_declarator(text[..idx].trim())?;

    let mut dims = SmallVec::new();
    let mut rest = text[idx..].trim();
    while !rest.is_empty() {
        let (dim, tail) = rest.strip_prefix('[')?.split_once(']')?;
        let dim = dim.trim();
        if dim.is_empty() || !dim.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        dims.push(dim.parse().ok()?);
        rest = tail.trim_start();
    }

    Some(CType::Array {
        element: Box::new(element),
        dims,
    })
}

/// `[const] ident *...`
fn parse_declarator(text: &str) -> Option<CType> {
    let mut tokens = tokenize(text).into_iter().peekable();
    let is_const = tokens.next_if_eq(&"const").is_some();

    let name = tokens.next()?;
    if name == "*" || name == "const" || !is_identifier(name) {
        return None;
    }

    let mut ty = CType::Named {
        name: name.to_string(),
        is_const,
    };
    for token in tokens {
        if token != "*" {
            return None;
        }
        ty = CType::Pointer {
            pointee: Box::new(ty),
        };
    }
    Some(ty)
}

fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    for chunk in text.split_whitespace() {
        let mut rest = chunk;
        while let Some(idx) = rest.find('*') {
            if idx > 0 {
                tokens.push(&rest[..idx]);
            }
            tokens.push("*");
            rest = &rest[idx + 1..];
        }
        if !rest.is_empty() {
            tokens.push(rest);
        }
    }
    tokens
}

fn is_identifier(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

impl fmt::Display for CType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CType::Named { name, is_const } => {
                if *is_const {
                    write!(f, "const ")?;
                }
                write!(f, "{name}")
            }
            CType::Pointer { pointee } => match pointee.as_ref() {
                CType::Pointer { .. } => write!(f, "{pointee}*"),
                _ => write!(f, "{pointee} *"),
            },
            CType::Array { element, dims } => {
                write!(f, "{element} ")?;
                for dim in dims {
                    write!(f, "[{dim}]")?;
                }
                Ok(())
            }
            CType::FuncPtr { result, params } => {
                write!(f, "{result} (*)(")?;
                if params.is_empty() {
                    write!(f, "void")?;
                }
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{param}")?;
                }
                write!(f, ")")
            }
            CType::Unparsed(text) => write!(f, "{text}"),
        }
    }
}

#[cfg(test)]
#[path = "tests/ctype_tests.rs"]
mod ctype_tests;
