//! JSON table files for the CLI.
//!
//! A table file is a JSON array of entries:
//!
//! ```json
//! [
//!   { "oid": "1.3.6.1.2.1.1.1.0", "type": "string", "value": "lab router" },
//!   { "oid": "1.3.6.1.2.1.1.3.0", "type": "timeticks", "value": 4200 },
//!   { "oid": "1.3.6.1.2.1.1.4.0", "type": "null" }
//! ]
//! ```
//!
//! Entries are registered in file order, so a repeated OID keeps the last
//! entry's value.

use std::path::Path;

use bytes::Bytes;
use serde::Deserialize;

use crate::{ListHandler, Oid, Value};

/// Entry type names accepted in table files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Integer,
    String,
    Hex,
    Null,
    Oid,
    IpAddress,
    Counter32,
    Gauge32,
    TimeTicks,
    Opaque,
    Counter64,
}

/// One entry of a table file.
#[derive(Debug, Deserialize)]
pub struct TableEntry {
    pub oid: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    #[serde(default)]
    pub value: serde_json::Value,
}

impl TableEntry {
    /// Convert the JSON value to a typed [`Value`].
    pub fn to_value(&self) -> Result<Value, String> {
        let bad = |expected: &str| {
            format!(
                "entry {}: expected {} for type {:?}, got {}",
                self.oid, expected, self.entry_type, self.value
            )
        };

        let value = match self.entry_type {
            EntryType::Integer => self
                .value
                .as_i64()
                .and_then(|v| i32::try_from(v).ok())
                .map(Value::Integer)
                .ok_or_else(|| bad("a 32-bit signed integer"))?,
            EntryType::String => self
                .value
                .as_str()
                .map(Value::from)
                .ok_or_else(|| bad("a string"))?,
            EntryType::Hex | EntryType::Opaque => {
                let hex = self.value.as_str().ok_or_else(|| bad("a hex string"))?;
                let bytes = decode_hex(hex).ok_or_else(|| bad("a hex string"))?;
                if self.entry_type == EntryType::Opaque {
                    Value::Opaque(bytes)
                } else {
                    Value::OctetString(bytes)
                }
            }
            EntryType::Null => Value::Null,
            EntryType::Oid => {
                let s = self.value.as_str().ok_or_else(|| bad("an OID string"))?;
                Value::ObjectIdentifier(Oid::parse(s).map_err(|e| e.to_string())?)
            }
            EntryType::IpAddress => {
                let s = self.value.as_str().ok_or_else(|| bad("an IPv4 address"))?;
                let addr: std::net::Ipv4Addr = s.parse().map_err(|_| bad("an IPv4 address"))?;
                Value::IpAddress(addr.octets())
            }
            EntryType::Counter32 => Value::Counter32(self.unsigned32().ok_or_else(|| bad("u32"))?),
            EntryType::Gauge32 => Value::Gauge32(self.unsigned32().ok_or_else(|| bad("u32"))?),
            EntryType::TimeTicks => Value::TimeTicks(self.unsigned32().ok_or_else(|| bad("u32"))?),
            EntryType::Counter64 => {
                Value::Counter64(self.value.as_u64().ok_or_else(|| bad("u64"))?)
            }
        };
        Ok(value)
    }

    fn unsigned32(&self) -> Option<u32> {
        self.value.as_u64().and_then(|v| u32::try_from(v).ok())
    }
}

/// Build a [`ListHandler`] from table file contents.
pub fn parse_table(json: &str) -> Result<ListHandler, String> {
    let entries: Vec<TableEntry> =
        serde_json::from_str(json).map_err(|e| format!("invalid table JSON: {}", e))?;

    let mut list = ListHandler::new();
    for entry in &entries {
        let value = entry.to_value()?;
        list.add(&entry.oid).map_err(|e| e.to_string())?.set(value);
    }
    tracing::debug!(snmp.entries = list.len(), "loaded table");
    Ok(list)
}

/// Read and parse a table file.
pub fn load_table(path: &Path) -> Result<ListHandler, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    parse_table(&json)
}

fn decode_hex(s: &str) -> Option<Bytes> {
    let digits: Vec<u8> = s
        .bytes()
        .filter(|b| !matches!(b, b' ' | b':'))
        .collect();
    if !digits.len().is_multiple_of(2) {
        return None;
    }
    digits
        .chunks(2)
        .map(|pair| {
            let hi = (pair[0] as char).to_digit(16)?;
            let lo = (pair[1] as char).to_digit(16)?;
            Some((hi * 16 + lo) as u8)
        })
        .collect::<Option<Vec<u8>>>()
        .map(Bytes::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oid;

    #[test]
    fn test_parse_table() {
        let list = parse_table(
            r#"[
                { "oid": "1.3.6.1.2.1.1.3.0", "type": "timeticks", "value": 4200 },
                { "oid": "1.3.6.1.2.1.1.1.0", "type": "string", "value": "lab router" },
                { "oid": "1.3.6.1.2.1.1.2.0", "type": "oid", "value": "1.3.6.1.4.1.8072" },
                { "oid": "1.3.6.1.2.1.4.20.1.1.10.0.0.1", "type": "ipaddress", "value": "10.0.0.1" },
                { "oid": "1.3.6.1.2.1.1.4.0", "type": "null" }
            ]"#,
        )
        .unwrap();

        assert_eq!(list.len(), 5);
        let first = list.oids().next().unwrap();
        assert_eq!(first, &oid!(1, 3, 6, 1, 2, 1, 1, 1, 0));
        assert_eq!(
            list.item(&oid!(1, 3, 6, 1, 2, 1, 1, 2, 0)).unwrap().value(),
            &Value::ObjectIdentifier(oid!(1, 3, 6, 1, 4, 1, 8072))
        );
        assert_eq!(
            list.item(&oid!(1, 3, 6, 1, 2, 1, 4, 20, 1, 1, 10, 0, 0, 1))
                .unwrap()
                .value(),
            &Value::IpAddress([10, 0, 0, 1])
        );
    }

    #[test]
    fn test_repeated_oid_keeps_last() {
        let list = parse_table(
            r#"[
                { "oid": "1.3.1", "type": "integer", "value": 1 },
                { "oid": "1.3.1", "type": "integer", "value": 2 }
            ]"#,
        )
        .unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.item(&oid!(1, 3, 1)).unwrap().value(), &Value::Integer(2));
    }

    #[test]
    fn test_hex_values() {
        let list = parse_table(
            r#"[
                { "oid": "1.3.1", "type": "hex", "value": "00:1A:2b" },
                { "oid": "1.3.2", "type": "opaque", "value": "ff 00" }
            ]"#,
        )
        .unwrap();
        assert_eq!(
            list.item(&oid!(1, 3, 1)).unwrap().value(),
            &Value::OctetString(Bytes::from_static(&[0x00, 0x1A, 0x2B]))
        );
        assert_eq!(
            list.item(&oid!(1, 3, 2)).unwrap().value(),
            &Value::Opaque(Bytes::from_static(&[0xFF, 0x00]))
        );
    }

    #[test]
    fn test_rejects_bad_entries() {
        assert!(parse_table("not json").is_err());
        assert!(parse_table(r#"[{ "oid": "1.x", "type": "null" }]"#).is_err());
        assert!(parse_table(r#"[{ "oid": "1.3", "type": "integer", "value": "5" }]"#).is_err());
        assert!(
            parse_table(r#"[{ "oid": "1.3", "type": "integer", "value": 3000000000 }]"#).is_err()
        );
        assert!(parse_table(r#"[{ "oid": "1.3", "type": "counter32", "value": -1 }]"#).is_err());
        assert!(parse_table(r#"[{ "oid": "1.3", "type": "hex", "value": "abc" }]"#).is_err());
        assert!(parse_table(r#"[{ "oid": "1.3", "type": "float", "value": 1.0 }]"#).is_err());
    }
}
