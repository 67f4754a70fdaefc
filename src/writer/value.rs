//! Value dispatch

use std::rc::Rc;

use super::{Sink, Writer};
use crate::error::Error;
use crate::types::{Opcode, Value};

impl<W: Sink> Writer<W> {
    /// Write a single value record, consulting the memo table first
    pub(crate) fn write_value(&mut self, value: &Rc<Value>) -> Result<(), Error> {
        let key = Rc::as_ptr(value) as usize;
        if value.memoizable() {
            if let Some(&idx) = self.memo.get(&key) {
                self.sink.write_all(&[Opcode::Get as u8])?;
                self.sink.write_all(&idx.to_le_bytes())?;
                return Ok(());
            }
        }

        match &**value {
            Value::None => self.sink.write_all(&[Opcode::None as u8])?,
            Value::Bool(true) => self.sink.write_all(&[Opcode::True as u8])?,
            Value::Bool(false) => self.sink.write_all(&[Opcode::False as u8])?,
            Value::Int(i) => {
                self.sink.write_all(&[Opcode::Int as u8])?;
                self.sink.write_all(&i.to_le_bytes())?;
            }
            Value::Float(x) => {
                self.sink.write_all(&[Opcode::Float as u8])?;
                self.sink.write_all(&x.to_le_bytes())?;
            }
            Value::String(s) => {
                self.sink.write_all(&[Opcode::String as u8])?;
                self.sink.write_all(&(s.len() as u32).to_le_bytes())?;
                self.sink.write_all(s.as_bytes())?;
            }
            Value::Bytes(b) => {
                if self.protocol() < 3 {
                    return Err(Error::BytesUnsupported(self.protocol()));
                }
                self.sink.write_all(&[Opcode::Bytes as u8])?;
                self.sink.write_all(&(b.len() as u32).to_le_bytes())?;
                self.sink.write_all(b)?;
            }
            Value::List(items) => {
                self.sink.write_all(&[Opcode::List as u8])?;
                self.sink.write_all(&(items.len() as u32).to_le_bytes())?;
                for item in items {
                    self.write_value(item)?;
                }
            }
            Value::Dict(entries) => {
                self.sink.write_all(&[Opcode::Dict as u8])?;
                self.sink.write_all(&(entries.len() as u32).to_le_bytes())?;
                for (k, v) in entries {
                    let key_bytes = k.as_bytes();
                    self.sink
                        .write_all(&(key_bytes.len() as u16).to_le_bytes())?;
                    self.sink.write_all(key_bytes)?;
                    self.write_value(v)?;
                }
            }
            Value::Array(arr) => self.write_array(arr)?,
        }

        // Registered after children, so writer indexes match the reader's
        // append order.
        if value.memoizable() {
            let idx = self.memo.len() as u32;
            self.memo.insert(key, idx);
        }
        Ok(())
    }
}
