//! Type-aware total order over clustering values
//! 聚簇值的类型感知全序

use std::{cmp::Ordering, fmt};

use crate::{Arity, Clustering, Col, Comp, Error, Kind, Result, Ty};

/// Comparator for the clustering values of one table
/// 单表聚簇值比较器
#[derive(Clone, Debug)]
pub struct ClusteringComparator {
  col_li: Box<[Col]>,
}

impl ClusteringComparator {
  #[inline]
  pub fn new(col_li: impl Into<Box<[Col]>>) -> Self {
    Self {
      col_li: col_li.into(),
    }
  }

  /// Declared clustering column count
  /// 声明的聚簇列数
  #[inline]
  pub fn size(&self) -> usize {
    self.col_li.len()
  }

  #[inline]
  pub fn col_li(&self) -> &[Col] {
    &self.col_li
  }

  /// Row clustering, strict arity
  /// 行聚簇值，严格列数
  #[inline]
  pub fn make<I>(&self, li: I) -> Result<Clustering>
  where
    I: IntoIterator,
    I::Item: Into<Comp>,
  {
    Clustering::build(Kind::Clustering, li, Arity::Exact(self.size()))
  }

  /// Prefix of the clustering columns for range scans
  /// 用于范围扫描的聚簇列前缀
  #[inline]
  pub fn make_prefix<I>(&self, li: I) -> Result<Clustering>
  where
    I: IntoIterator,
    I::Item: Into<Comp>,
  {
    Clustering::build(Kind::Clustering, li, Arity::AtMost(self.size()))
  }

  /// Value can belong to this table
  /// 值可属于本表
  #[inline]
  pub fn check(&self, c: &Clustering) -> Result<()> {
    if c.len() > self.size() {
      return Err(Error::TypeMismatch {
        cols: self.size(),
        got: c.len(),
      });
    }
    Ok(())
  }

  /// Check arity and every component against its column type
  /// 检查列数及每个组件的类型
  pub fn validate(&self, c: &Clustering) -> Result<()> {
    self.check(c)?;
    for (idx, (col, b)) in self.col_li.iter().zip(c.iter()).enumerate() {
      col.ty.validate(idx, b)?;
    }
    Ok(())
  }

  /// Compare one component by its column, None if `idx` is not a declared column
  /// 按列比较单个组件，`idx` 不是已声明列时返回 None
  #[inline]
  pub fn compare_component(&self, idx: usize, a: &[u8], b: &[u8]) -> Option<Ordering> {
    let col = self.col_li.get(idx)?;
    Some(col.order.apply(col.ty.cmp(a, b)))
  }

  /// Total order: STATIC first, then components left to right, shorter prefix first
  /// 全序：STATIC 最前，然后从左到右比较组件，较短前缀在前
  pub fn compare(&self, a: &Clustering, b: &Clustering) -> Result<Ordering> {
    if a.is_same(b) {
      return Ok(Ordering::Equal);
    }
    self.check(a)?;
    self.check(b)?;
    Ok(self.cmp_checked(a, b))
  }

  fn cmp_checked(&self, a: &Clustering, b: &Clustering) -> Ordering {
    match (a.is_static(), b.is_static()) {
      (true, true) => return Ordering::Equal,
      (true, false) => return Ordering::Less,
      (false, true) => return Ordering::Greater,
      (false, false) => {}
    }
    for ((col, x), y) in self.col_li.iter().zip(a.iter()).zip(b.iter()) {
      let ord = col.order.apply(col.ty.cmp(x, y));
      if ord.is_ne() {
        return ord;
      }
    }
    a.len().cmp(&b.len())
  }

  /// Sort in clustering order, rejecting foreign values first
  /// 按聚簇顺序排序，先拒绝不属于本表的值
  pub fn sort(&self, li: &mut [Clustering]) -> Result<()> {
    for c in li.iter() {
      self.check(c)?;
    }
    li.sort_by(|a, b| self.cmp_checked(a, b));
    Ok(())
  }

  /// Display as `name=value, ...`
  /// 显示为 `name=value, ...`
  #[inline]
  pub fn show<'a>(&'a self, c: &'a Clustering) -> ClusteringShow<'a> {
    ClusteringShow { cmp: self, c }
  }
}

pub struct ClusteringShow<'a> {
  cmp: &'a ClusteringComparator,
  c: &'a Clustering,
}

impl fmt::Display for ClusteringShow<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let c = self.c;
    if c.is_static() {
      return f.write_str("STATIC");
    }
    if c.is_empty() {
      return f.write_str("EMPTY");
    }
    for (idx, b) in c.iter().enumerate() {
      if idx > 0 {
        f.write_str(", ")?;
      }
      match self.cmp.col_li.get(idx) {
        Some(col) => write!(f, "{}={}", col.name, col.ty.show(b))?,
        None => write!(f, "?={}", Ty::Bytes.show(b))?,
      }
    }
    Ok(())
  }
}
