use std::collections::HashMap;

/// A typed attribute value.
///
/// `Vector` is a growable sequence, `Array` a fixed-size one.
/// The two compare unequal even with the same contents.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    String(String),
    Number(f64),
    Vector(Vec<AttributeValue>),
    Array(Box<[AttributeValue]>),
    Hash(HashMap<String, AttributeValue>),
}

/// The variant of an [`AttributeValue`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    String,
    Number,
    Vector,
    Array,
    Hash,
}

impl AttributeValue {
    pub fn kind(&self) -> AttributeKind {
        match self {
            AttributeValue::String(_) => AttributeKind::String,
            AttributeValue::Number(_) => AttributeKind::Number,
            AttributeValue::Vector(_) => AttributeKind::Vector,
            AttributeValue::Array(_) => AttributeKind::Array,
            AttributeValue::Hash(_) => AttributeKind::Hash,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttributeValue::Number(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&[AttributeValue]> {
        match self {
            AttributeValue::Vector(xs) => Some(xs.as_slice()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[AttributeValue]> {
        match self {
            AttributeValue::Array(xs) => Some(xs),
            _ => None,
        }
    }

    pub fn as_hash(&self) -> Option<&HashMap<String, AttributeValue>> {
        match self {
            AttributeValue::Hash(m) => Some(m),
            _ => None,
        }
    }

    /// Entries of a hash value sorted by key, for stable output.
    pub(crate) fn sorted_entries(map: &HashMap<String, AttributeValue>) -> Vec<(&String, &AttributeValue)> {
        let mut entries: Vec<_> = map.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl std::fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn seq(f: &mut std::fmt::Formatter<'_>, xs: &[AttributeValue]) -> std::fmt::Result {
            for (i, x) in xs.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", x)?;
            }
            Ok(())
        }

        match self {
            AttributeValue::String(s) => write!(f, "{:?}", s),
            AttributeValue::Number(x) => write!(f, "{}", x),
            AttributeValue::Vector(xs) => {
                write!(f, "[")?;
                seq(f, xs)?;
                write!(f, "]")
            }
            AttributeValue::Array(xs) => {
                write!(f, "(")?;
                seq(f, xs)?;
                write!(f, ")")
            }
            AttributeValue::Hash(m) => {
                write!(f, "{{")?;
                for (i, (k, v)) in Self::sorted_entries(m).into_iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}: {}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::String(s.to_owned())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::String(s)
    }
}

impl From<&String> for AttributeValue {
    fn from(s: &String) -> Self {
        AttributeValue::String(s.clone())
    }
}

macro_rules! number_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for AttributeValue {
                fn from(x: $t) -> Self {
                    AttributeValue::Number(x as f64)
                }
            }
        )*
    };
}

number_from!(f64, f32, i32, i64, u32, u64, usize);

impl<T> From<Vec<T>> for AttributeValue
where
    T: Into<AttributeValue>,
{
    fn from(xs: Vec<T>) -> Self {
        AttributeValue::Vector(xs.into_iter().map(Into::into).collect())
    }
}

impl<T, const N: usize> From<[T; N]> for AttributeValue
where
    T: Into<AttributeValue>,
{
    fn from(xs: [T; N]) -> Self {
        AttributeValue::Array(xs.into_iter().map(Into::into).collect())
    }
}

impl<K, T, S> From<HashMap<K, T, S>> for AttributeValue
where
    K: Into<String>,
    T: Into<AttributeValue>,
{
    fn from(m: HashMap<K, T, S>) -> Self {
        AttributeValue::Hash(m.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
