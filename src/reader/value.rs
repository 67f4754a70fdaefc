//! Opcode scan loop

use std::io::Read;
use std::rc::Rc;

use super::Reader;
use crate::error::Error;
use crate::types::{Opcode, Value};

impl<R: Read> Reader<R> {
    /// Decode a single value record
    pub(crate) fn read_value(&mut self) -> Result<Rc<Value>, Error> {
        let op = self.read_u8()?;
        match Opcode::from_u8(op).ok_or(Error::InvalidOpcode(op))? {
            Opcode::None => Ok(Rc::new(Value::None)),
            Opcode::True => Ok(Rc::new(Value::Bool(true))),
            Opcode::False => Ok(Rc::new(Value::Bool(false))),
            Opcode::Int => Ok(Rc::new(Value::Int(self.read_i64_le()?))),
            Opcode::Float => Ok(Rc::new(Value::Float(self.read_f64_le()?))),
            Opcode::String => {
                let len = self.read_u32_le()? as usize;
                let s = String::from_utf8(self.read_vec(len)?).map_err(|_| Error::InvalidUtf8)?;
                Ok(self.memoize(Rc::new(Value::String(s))))
            }
            Opcode::Bytes => {
                let len = self.read_u32_le()? as usize;
                let b = self.read_vec(len)?;
                Ok(self.memoize(Rc::new(Value::Bytes(b))))
            }
            Opcode::List => {
                let count = self.read_u32_le()? as usize;
                let mut items = Vec::with_capacity(count.min(4096));
                for _ in 0..count {
                    items.push(self.read_value()?);
                }
                Ok(self.memoize(Rc::new(Value::List(items))))
            }
            Opcode::Dict => {
                let count = self.read_u32_le()? as usize;
                let mut entries = Vec::with_capacity(count.min(4096));
                for _ in 0..count {
                    let key_len = {
                        let mut buf = [0u8; 2];
                        self.read_exact_into(&mut buf)?;
                        u16::from_le_bytes(buf) as usize
                    };
                    let key = String::from_utf8(self.read_vec(key_len)?)
                        .map_err(|_| Error::InvalidUtf8)?;
                    let val = self.read_value()?;
                    entries.push((key, val));
                }
                Ok(self.memoize(Rc::new(Value::Dict(entries))))
            }
            Opcode::Get => {
                let idx = self.read_u32_le()?;
                self.backref(idx)
            }
            Opcode::Array => {
                let arr = self.read_array()?;
                Ok(self.memoize(Rc::new(Value::Array(arr))))
            }
            // frame control, never valid inside a value
            Opcode::Proto | Opcode::Stop => Err(Error::InvalidOpcode(op)),
        }
    }
}
