/// Clustering kind tag
/// 聚簇类型标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
  /// Row holding only static columns, sorts before every real row
  /// 仅含静态列的行，排在所有真实行之前
  Static,
  /// Regular row key
  /// 普通行键
  Clustering,
}

/// Ownership of component bytes, fixed by the construction path
/// 组件字节的所有权，由构造路径决定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Own {
  /// Freshly decoded, bytes belong to this value
  /// 新解码，字节归本值所有
  Owned,
  /// Slices of a shared page buffer accounted elsewhere
  /// 共享页缓冲区的切片，由别处统计
  View,
}

/// Arity requirement checked at build time
/// 构造时检查的列数要求
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
  /// No requirement
  /// 无要求
  Any,
  /// Exactly the declared clustering column count
  /// 恰好等于声明的聚簇列数
  Exact(usize),
  /// Prefix of the clustering columns, used by range scans
  /// 聚簇列前缀，用于范围扫描
  AtMost(usize),
}

impl Arity {
  #[inline]
  pub fn check(self, got: usize) -> crate::Result<()> {
    match self {
      Arity::Exact(expect) if got != expect => Err(crate::Error::Arity { expect, got }),
      Arity::AtMost(expect) if got > expect => Err(crate::Error::Arity { expect, got }),
      _ => Ok(()),
    }
  }
}
