//! Variable values and their type tags.

use bytes::Bytes;

use crate::oid::Oid;

/// AgentX variable type tag (RFC 2741 Section 5.4).
///
/// The numeric codes match the BER tags SNMP uses for the same types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum VariableType {
    Integer,
    OctetString,
    Null,
    ObjectIdentifier,
    IpAddress,
    Counter32,
    Gauge32,
    TimeTicks,
    Opaque,
    Counter64,
    NoSuchObject,
    NoSuchInstance,
    EndOfMibView,
}

impl VariableType {
    /// Get the AgentX type code.
    pub const fn as_u16(self) -> u16 {
        match self {
            Self::Integer => 2,
            Self::OctetString => 4,
            Self::Null => 5,
            Self::ObjectIdentifier => 6,
            Self::IpAddress => 64,
            Self::Counter32 => 65,
            Self::Gauge32 => 66,
            Self::TimeTicks => 67,
            Self::Opaque => 68,
            Self::Counter64 => 70,
            Self::NoSuchObject => 128,
            Self::NoSuchInstance => 129,
            Self::EndOfMibView => 130,
        }
    }

    /// Create from an AgentX type code.
    pub const fn from_u16(value: u16) -> Option<Self> {
        match value {
            2 => Some(Self::Integer),
            4 => Some(Self::OctetString),
            5 => Some(Self::Null),
            6 => Some(Self::ObjectIdentifier),
            64 => Some(Self::IpAddress),
            65 => Some(Self::Counter32),
            66 => Some(Self::Gauge32),
            67 => Some(Self::TimeTicks),
            68 => Some(Self::Opaque),
            70 => Some(Self::Counter64),
            128 => Some(Self::NoSuchObject),
            129 => Some(Self::NoSuchInstance),
            130 => Some(Self::EndOfMibView),
            _ => None,
        }
    }

    /// Returns `true` for the exception types that carry no value.
    pub const fn is_exception(self) -> bool {
        matches!(
            self,
            Self::NoSuchObject | Self::NoSuchInstance | Self::EndOfMibView
        )
    }
}

impl std::fmt::Display for VariableType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Integer => "INTEGER",
            Self::OctetString => "STRING",
            Self::Null => "NULL",
            Self::ObjectIdentifier => "OID",
            Self::IpAddress => "IpAddress",
            Self::Counter32 => "Counter32",
            Self::Gauge32 => "Gauge32",
            Self::TimeTicks => "TimeTicks",
            Self::Opaque => "Opaque",
            Self::Counter64 => "Counter64",
            Self::NoSuchObject => "NoSuchObject",
            Self::NoSuchInstance => "NoSuchInstance",
            Self::EndOfMibView => "EndOfMibView",
        };
        f.write_str(name)
    }
}

/// A typed variable value.
///
/// The variant determines the [`VariableType`]; the exception variants carry
/// no payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Value {
    /// INTEGER (signed 32-bit)
    Integer(i32),
    /// OCTET STRING
    OctetString(Bytes),
    /// NULL
    #[default]
    Null,
    /// OBJECT IDENTIFIER
    ObjectIdentifier(Oid),
    /// IpAddress (IPv4, network order)
    IpAddress([u8; 4]),
    /// Counter32
    Counter32(u32),
    /// Gauge32 / Unsigned32
    Gauge32(u32),
    /// TimeTicks (hundredths of a second)
    TimeTicks(u32),
    /// Opaque (arbitrary bytes)
    Opaque(Bytes),
    /// Counter64
    Counter64(u64),
    /// noSuchObject exception
    NoSuchObject,
    /// noSuchInstance exception
    NoSuchInstance,
    /// endOfMibView exception
    EndOfMibView,
}

impl Value {
    /// The type tag of this value.
    pub fn variable_type(&self) -> VariableType {
        match self {
            Value::Integer(_) => VariableType::Integer,
            Value::OctetString(_) => VariableType::OctetString,
            Value::Null => VariableType::Null,
            Value::ObjectIdentifier(_) => VariableType::ObjectIdentifier,
            Value::IpAddress(_) => VariableType::IpAddress,
            Value::Counter32(_) => VariableType::Counter32,
            Value::Gauge32(_) => VariableType::Gauge32,
            Value::TimeTicks(_) => VariableType::TimeTicks,
            Value::Opaque(_) => VariableType::Opaque,
            Value::Counter64(_) => VariableType::Counter64,
            Value::NoSuchObject => VariableType::NoSuchObject,
            Value::NoSuchInstance => VariableType::NoSuchInstance,
            Value::EndOfMibView => VariableType::EndOfMibView,
        }
    }

    /// Check if this is an exception value (noSuchObject, noSuchInstance, endOfMibView).
    pub fn is_exception(&self) -> bool {
        self.variable_type().is_exception()
    }

    /// Get the value as an `i32`, if it is an INTEGER.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the value as a `&str`, if it is a UTF-8 OCTET STRING.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::OctetString(bytes) => std::str::from_utf8(bytes).ok(),
            _ => None,
        }
    }

    /// Get the value as a `u64` for any of the unsigned counter types.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Counter32(v) | Value::Gauge32(v) | Value::TimeTicks(v) => Some(u64::from(*v)),
            Value::Counter64(v) => Some(*v),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{}", v),
            Value::OctetString(bytes) | Value::Opaque(bytes) => match std::str::from_utf8(bytes) {
                Ok(s) => write!(f, "{}", s),
                Err(_) => {
                    for (i, b) in bytes.iter().enumerate() {
                        if i > 0 {
                            f.write_str(" ")?;
                        }
                        write!(f, "{:02X}", b)?;
                    }
                    Ok(())
                }
            },
            Value::Null => write!(f, "NULL"),
            Value::ObjectIdentifier(oid) => write!(f, "{}", oid),
            Value::IpAddress([a, b, c, d]) => write!(f, "{}.{}.{}.{}", a, b, c, d),
            Value::Counter32(v) | Value::Gauge32(v) | Value::TimeTicks(v) => write!(f, "{}", v),
            Value::Counter64(v) => write!(f, "{}", v),
            Value::NoSuchObject => write!(f, "noSuchObject"),
            Value::NoSuchInstance => write!(f, "noSuchInstance"),
            Value::EndOfMibView => write!(f, "endOfMibView"),
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::OctetString(Bytes::copy_from_slice(s.as_bytes()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::OctetString(Bytes::from(s))
    }
}

impl From<Oid> for Value {
    fn from(oid: Oid) -> Self {
        Value::ObjectIdentifier(oid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oid;

    #[test]
    fn test_type_codes_roundtrip() {
        let all = [
            VariableType::Integer,
            VariableType::OctetString,
            VariableType::Null,
            VariableType::ObjectIdentifier,
            VariableType::IpAddress,
            VariableType::Counter32,
            VariableType::Gauge32,
            VariableType::TimeTicks,
            VariableType::Opaque,
            VariableType::Counter64,
            VariableType::NoSuchObject,
            VariableType::NoSuchInstance,
            VariableType::EndOfMibView,
        ];
        for ty in all {
            assert_eq!(VariableType::from_u16(ty.as_u16()), Some(ty));
        }
        assert_eq!(VariableType::from_u16(0), None);
        assert_eq!(VariableType::from_u16(69), None);
    }

    #[test]
    fn test_variable_type_of_value() {
        assert_eq!(Value::Integer(5).variable_type(), VariableType::Integer);
        assert_eq!(Value::from("x").variable_type(), VariableType::OctetString);
        assert_eq!(
            Value::from(oid!(1, 3)).variable_type(),
            VariableType::ObjectIdentifier
        );
        assert_eq!(
            Value::NoSuchObject.variable_type(),
            VariableType::NoSuchObject
        );
        assert_eq!(VariableType::NoSuchObject.as_u16(), 128);
    }

    #[test]
    fn test_is_exception() {
        assert!(Value::NoSuchObject.is_exception());
        assert!(Value::NoSuchInstance.is_exception());
        assert!(Value::EndOfMibView.is_exception());
        assert!(!Value::Null.is_exception());
        assert!(!Value::Integer(0).is_exception());
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Integer(-3).as_i32(), Some(-3));
        assert_eq!(Value::Counter32(1).as_i32(), None);
        assert_eq!(Value::from("eth0").as_str(), Some("eth0"));
        assert_eq!(Value::Gauge32(7).as_u64(), Some(7));
        assert_eq!(Value::Counter64(u64::MAX).as_u64(), Some(u64::MAX));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Integer(42).to_string(), "42");
        assert_eq!(Value::from("router").to_string(), "router");
        assert_eq!(
            Value::OctetString(Bytes::from_static(&[0xFF, 0x00])).to_string(),
            "FF 00"
        );
        assert_eq!(Value::IpAddress([10, 0, 0, 1]).to_string(), "10.0.0.1");
        assert_eq!(Value::NoSuchObject.to_string(), "noSuchObject");
    }
}
