//! Canonical type annotations.

use std::fmt;

/// A canonical type annotation inferred from documentation prose.
///
/// Composite variants own their parameter annotations by value. Rendering
/// via [`Display`](fmt::Display) produces the output grammar: bare kind
/// names, dotted reference paths, `Seq[T]`, `Tuple[T1, T2]`,
/// `Tuple[T, ...]`, `Map[K, V]`, and `Union[A, B]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    /// Unknown or unspecified element type.
    Any,
    /// A text value.
    Str,
    /// A truth value.
    Bool,
    /// An integer value.
    Int,
    /// A floating-point value.
    Float,
    /// A type or class object.
    Type,
    /// A function or other callable object.
    Callable,
    /// A dotted reference path, e.g. `bge.types.KX_GameObject`.
    Ref(String),
    /// A sequence with a single element type.
    Seq(Box<Annotation>),
    /// A tuple; `open` renders a trailing `...` for one-or-more shapes.
    Tuple {
        items: Vec<Annotation>,
        open: bool,
    },
    /// A keyed mapping.
    Map {
        key: Box<Annotation>,
        value: Box<Annotation>,
    },
    /// An untagged union of alternatives.
    Union(Vec<Annotation>),
}

impl Annotation {
    /// A reference annotation from a dotted path.
    pub fn reference(path: impl Into<String>) -> Self {
        Annotation::Ref(path.into())
    }

    /// A sequence of the given element type.
    pub fn seq(element: Annotation) -> Self {
        Annotation::Seq(Box::new(element))
    }

    /// A mapping from `key` to `value`.
    pub fn map(key: Annotation, value: Annotation) -> Self {
        Annotation::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// An open-ended tuple (`Tuple[T, ...]`) of the given element type.
    pub fn open_tuple(element: Annotation) -> Self {
        Annotation::Tuple {
            items: vec![element],
            open: true,
        }
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Annotation::Any => f.write_str("Any"),
            Annotation::Str => f.write_str("str"),
            Annotation::Bool => f.write_str("bool"),
            Annotation::Int => f.write_str("int"),
            Annotation::Float => f.write_str("float"),
            Annotation::Type => f.write_str("Type"),
            Annotation::Callable => f.write_str("Callable"),
            Annotation::Ref(path) => f.write_str(path),
            Annotation::Seq(element) => write!(f, "Seq[{}]", element),
            Annotation::Tuple { items, open } => {
                f.write_str("Tuple[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                if *open {
                    f.write_str(", ...")?;
                }
                f.write_str("]")
            }
            Annotation::Map { key, value } => write!(f, "Map[{}, {}]", key, value),
            Annotation::Union(alternatives) => {
                f.write_str("Union[")?;
                for (index, alternative) in alternatives.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", alternative)?;
                }
                f.write_str("]")
            }
        }
    }
}
