//! Column types and their byte comparisons
//! 列类型及其字节比较
//!
//! Components are opaque bytes; the type decides how they order.
//! Fixed-width numbers are big-endian, signed integers are two's complement.
//! 组件是不透明字节，由类型决定排序方式。
//! 定长数值为大端序，有符号整数为补码。

use std::{cmp::Ordering, fmt};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Clustering column type
/// 聚簇列类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ty {
  Bytes,
  Utf8,
  Ascii,
  Bool,
  I8,
  I16,
  I32,
  I64,
  /// Milliseconds since epoch as i64
  /// 自纪元起的毫秒数 (i64)
  Timestamp,
  F32,
  F64,
}

#[inline(always)]
fn arr<const N: usize>(b: &[u8]) -> [u8; N] {
  let mut r = [0; N];
  r.copy_from_slice(b);
  r
}

/// Sign-extend a big-endian integer (non-empty, at most 16 bytes)
/// 对大端整数做符号扩展（非空，最多 16 字节）
#[inline]
fn be_int(b: &[u8]) -> Option<i128> {
  let first = *b.first()?;
  if b.len() > 16 {
    return None;
  }
  let fill = if first & 0x80 != 0 { 0xff } else { 0 };
  let mut buf = [fill; 16];
  buf[16 - b.len()..].copy_from_slice(b);
  Some(i128::from_be_bytes(buf))
}

impl Ty {
  /// Encoded width for fixed-width types
  /// 定长类型的编码宽度
  pub const fn width(self) -> Option<usize> {
    match self {
      Ty::Bool | Ty::I8 => Some(1),
      Ty::I16 => Some(2),
      Ty::I32 | Ty::F32 => Some(4),
      Ty::I64 | Ty::Timestamp | Ty::F64 => Some(8),
      Ty::Bytes | Ty::Utf8 | Ty::Ascii => None,
    }
  }

  /// Compare two encoded values ascending
  /// 升序比较两个编码值
  ///
  /// Order bands: empty, well-formed, then wrong-width values by (len, bytes).
  /// 排序区段：空值、合法值、宽度错误的值（按长度、字节）。
  pub fn cmp(self, a: &[u8], b: &[u8]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
      (true, true) => return Ordering::Equal,
      (true, false) => return Ordering::Less,
      (false, true) => return Ordering::Greater,
      (false, false) => {}
    }
    // UTF-8 byte order equals code point order
    // UTF-8 字节序等同于码点序
    let Some(w) = self.width() else {
      return a.cmp(b);
    };
    match (a.len() == w, b.len() == w) {
      (true, true) => self.cmp_fixed(a, b),
      (true, false) => Ordering::Less,
      (false, true) => Ordering::Greater,
      (false, false) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
    }
  }

  /// Both sides have exactly the type width
  /// 两侧长度均等于类型宽度
  #[inline]
  fn cmp_fixed(self, a: &[u8], b: &[u8]) -> Ordering {
    match self {
      Ty::F32 => OrderedFloat(f32::from_be_bytes(arr(a))).cmp(&OrderedFloat(f32::from_be_bytes(arr(b)))),
      Ty::F64 => OrderedFloat(f64::from_be_bytes(arr(a))).cmp(&OrderedFloat(f64::from_be_bytes(arr(b)))),
      // Two's complement: flip the sign bit, then bytes order as unsigned
      // 补码：翻转符号位后按无符号字节排序
      Ty::I8 | Ty::I16 | Ty::I32 | Ty::I64 | Ty::Timestamp => (a[0] ^ 0x80)
        .cmp(&(b[0] ^ 0x80))
        .then_with(|| a[1..].cmp(&b[1..])),
      _ => a.cmp(b),
    }
  }

  /// Check that bytes are a well-formed value of this type
  /// 检查字节是否为该类型的合法值
  pub fn validate(self, idx: usize, b: &[u8]) -> Result<()> {
    if b.is_empty() {
      return Ok(());
    }
    let ok = match self {
      Ty::Bytes => true,
      Ty::Utf8 => std::str::from_utf8(b).is_ok(),
      Ty::Ascii => b.is_ascii(),
      Ty::Bool => b.len() == 1 && b[0] <= 1,
      _ => self.width() == Some(b.len()),
    };
    if ok {
      Ok(())
    } else {
      Err(Error::InvalidComponent {
        idx,
        ty: self,
        len: b.len(),
      })
    }
  }

  /// Display adapter for an encoded value
  /// 编码值的显示适配器
  #[inline]
  pub fn show(self, b: &[u8]) -> Show<'_> {
    Show(self, b)
  }
}

pub struct Show<'a>(Ty, &'a [u8]);

fn hex(b: &[u8], f: &mut fmt::Formatter<'_>) -> fmt::Result {
  f.write_str("0x")?;
  for i in b {
    write!(f, "{i:02x}")?;
  }
  Ok(())
}

impl fmt::Display for Show<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let Show(ty, b) = *self;
    if b.is_empty() {
      return Ok(());
    }
    if ty.validate(0, b).is_err() {
      return hex(b, f);
    }
    match ty {
      Ty::Bytes => hex(b, f),
      Ty::Utf8 | Ty::Ascii => match std::str::from_utf8(b) {
        Ok(s) => f.write_str(s),
        Err(_) => hex(b, f),
      },
      Ty::Bool => write!(f, "{}", b[0] != 0),
      Ty::I8 | Ty::I16 | Ty::I32 | Ty::I64 | Ty::Timestamp => match be_int(b) {
        Some(n) => write!(f, "{n}"),
        None => hex(b, f),
      },
      Ty::F32 => match <[u8; 4]>::try_from(b) {
        Ok(x) => write!(f, "{}", f32::from_be_bytes(x)),
        Err(_) => hex(b, f),
      },
      Ty::F64 => match <[u8; 8]>::try_from(b) {
        Ok(x) => write!(f, "{}", f64::from_be_bytes(x)),
        Err(_) => hex(b, f),
      },
    }
  }
}
