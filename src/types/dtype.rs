//! Element type descriptors for dense arrays

use std::fmt;

/// Element category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Int,
    Uint,
    Float,
    /// Fixed-width byte strings (`|S5` style)
    Chars,
}

impl Kind {
    fn code(self) -> char {
        match self {
            Kind::Int => 'i',
            Kind::Uint => 'u',
            Kind::Float => 'f',
            Kind::Chars => 'S',
        }
    }
}

/// Element byte order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Little,
    Big,
}

impl Order {
    /// Byte order of the host
    pub fn native() -> Self {
        if cfg!(target_endian = "big") {
            Order::Big
        } else {
            Order::Little
        }
    }
}

/// Element type descriptor for dense arrays
///
/// Serialized as a short textual descriptor: `<i4`, `>f8` for multibyte
/// numerics with explicit byte order, `|i1`/`|u1` for single-byte numerics,
/// `|S5` for fixed-width byte strings. The parser also accepts `=` or a
/// missing order prefix (native order) and the spelled-out names
/// `int8`..`int64`, `uint8`..`uint64`, `float32`, `float64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DType {
    pub kind: Kind,
    pub size: u32,
    pub order: Order,
}

impl DType {
    /// Byte order is meaningless for single-byte and chars elements, so it is
    /// normalized to native there to keep descriptor equality well-defined.
    pub fn new(kind: Kind, size: u32, order: Order) -> Self {
        let order = if size <= 1 || kind == Kind::Chars {
            Order::native()
        } else {
            order
        };
        DType { kind, size, order }
    }

    /// Size in bytes of a single element (the string width for chars)
    pub fn itemsize(&self) -> usize {
        self.size as usize
    }

    /// Try to parse a textual descriptor
    pub fn parse(s: &str) -> Option<Self> {
        if let Some((kind, size)) = alias(s) {
            return Some(DType::new(kind, size, Order::native()));
        }

        let (order, rest) = match s.as_bytes().first()? {
            b'<' => (Some(Order::Little), &s[1..]),
            b'>' => (Some(Order::Big), &s[1..]),
            b'=' | b'|' => (None, &s[1..]),
            _ => (None, s),
        };
        let kind = match rest.as_bytes().first()? {
            b'i' => Kind::Int,
            b'u' => Kind::Uint,
            b'f' => Kind::Float,
            b'S' => Kind::Chars,
            _ => return None,
        };
        let digits = &rest[1..];
        if digits.is_empty() {
            return None;
        }
        let size: u32 = digits.parse().ok()?;
        let valid = match kind {
            Kind::Int | Kind::Uint => matches!(size, 1 | 2 | 4 | 8),
            Kind::Float => matches!(size, 4 | 8),
            Kind::Chars => true,
        };
        if !valid {
            return None;
        }
        Some(DType::new(kind, size, order.unwrap_or_else(Order::native)))
    }
}

fn alias(s: &str) -> Option<(Kind, u32)> {
    match s {
        "int8" => Some((Kind::Int, 1)),
        "int16" => Some((Kind::Int, 2)),
        "int32" => Some((Kind::Int, 4)),
        "int64" => Some((Kind::Int, 8)),
        "uint8" => Some((Kind::Uint, 1)),
        "uint16" => Some((Kind::Uint, 2)),
        "uint32" => Some((Kind::Uint, 4)),
        "uint64" => Some((Kind::Uint, 8)),
        "float32" => Some((Kind::Float, 4)),
        "float64" => Some((Kind::Float, 8)),
        _ => None,
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Kind::Chars => write!(f, "|S{}", self.size),
            _ if self.size <= 1 => write!(f, "|{}{}", self.kind.code(), self.size),
            _ => {
                let order = match self.order {
                    Order::Little => '<',
                    Order::Big => '>',
                };
                write!(f, "{}{}{}", order, self.kind.code(), self.size)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_canonical() {
        let d = DType::parse("<f8").unwrap();
        assert_eq!(d.kind, Kind::Float);
        assert_eq!(d.size, 8);
        assert_eq!(d.order, Order::Little);

        let d = DType::parse(">i4").unwrap();
        assert_eq!(d.kind, Kind::Int);
        assert_eq!(d.order, Order::Big);

        let d = DType::parse("|u1").unwrap();
        assert_eq!(d.kind, Kind::Uint);
        assert_eq!(d.itemsize(), 1);

        let d = DType::parse("|S5").unwrap();
        assert_eq!(d.kind, Kind::Chars);
        assert_eq!(d.itemsize(), 5);
    }

    #[test]
    fn parse_native_prefixes() {
        assert_eq!(DType::parse("=f4"), DType::parse("f4"));
        assert_eq!(
            DType::parse("f4").unwrap().order,
            Order::native()
        );
    }

    #[test]
    fn parse_aliases() {
        let d = DType::parse("int32").unwrap();
        assert_eq!(d.kind, Kind::Int);
        assert_eq!(d.size, 4);
        assert_eq!(d.order, Order::native());
        assert_eq!(DType::parse("float64").unwrap().itemsize(), 8);
        assert_eq!(DType::parse("uint16").unwrap().kind, Kind::Uint);
    }

    #[test]
    fn display_roundtrip() {
        for s in ["<f8", "<f4", "<i2", ">i8", "|u1", "|i1", "|S12"] {
            let d = DType::parse(s).unwrap();
            let printed = d.to_string();
            assert_eq!(DType::parse(&printed), Some(d));
        }
    }

    #[test]
    fn rejects_junk() {
        assert_eq!(DType::parse(""), None);
        assert_eq!(DType::parse("<"), None);
        assert_eq!(DType::parse("<x4"), None);
        assert_eq!(DType::parse("<i3"), None);
        assert_eq!(DType::parse("<f2"), None);
        assert_eq!(DType::parse("<i"), None);
        assert_eq!(DType::parse("complex128"), None);
    }
}
