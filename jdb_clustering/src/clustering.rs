//! Clustering value container
//! 聚簇值容器
//!
//! Immutable ordered list of byte components, one per clustering column.
//! Cloning shares the same instance.
//! 不可变的字节组件有序列表，每个聚簇列一个。克隆共享同一实例。

use std::{
  fmt,
  hash::{Hash, Hasher},
  ops::{Index, Range},
  sync::Arc,
};

use hipstr::HipByt;

use crate::{Arity, Error, Kind, Own, Result, sentinel};

/// One encoded clustering column value
/// 单个聚簇列的编码值
pub type Comp = HipByt<'static>;

pub(crate) struct Inner {
  pub(crate) kind: Kind,
  pub(crate) own: Own,
  pub(crate) li: Box<[Comp]>,
}

#[derive(Clone)]
pub struct Clustering(pub(crate) Arc<Inner>);

impl Clustering {
  #[inline]
  fn raw(kind: Kind, own: Own, li: Box<[Comp]>) -> Self {
    Self(Arc::new(Inner { kind, own, li }))
  }

  pub(crate) fn sentinel(kind: Kind) -> Self {
    Self::raw(kind, Own::Owned, Box::default())
  }

  /// Owned clustering from components, no arity check
  /// 由组件构造自有聚簇值，不检查列数
  pub fn new<I>(li: I) -> Self
  where
    I: IntoIterator,
    I::Item: Into<Comp>,
  {
    Self::raw(
      Kind::Clustering,
      Own::Owned,
      li.into_iter().map(Into::into).collect(),
    )
  }

  /// Build with kind tag and arity requirement
  /// 按类型标签与列数要求构造
  ///
  /// `Static`, and `Clustering` without components, return the shared sentinels.
  /// `Static` 以及无组件的 `Clustering` 返回共享哨兵。
  pub fn build<I>(kind: Kind, li: I, arity: Arity) -> Result<Self>
  where
    I: IntoIterator,
    I::Item: Into<Comp>,
  {
    let li: Box<[Comp]> = li.into_iter().map(Into::into).collect();
    match kind {
      Kind::Static => {
        Arity::Exact(0).check(li.len())?;
        Ok(sentinel::static_clustering())
      }
      Kind::Clustering => {
        arity.check(li.len())?;
        if li.is_empty() {
          return Ok(sentinel::empty());
        }
        Ok(Self::raw(kind, Own::Owned, li))
      }
    }
  }

  /// Zero-copy view over ranges of a shared page
  /// 基于共享页区间的零拷贝视图
  pub fn view(page: &Comp, range_li: &[Range<usize>]) -> Result<Self> {
    let len = page.len();
    let li = range_li
      .iter()
      .map(|r| {
        if r.start > r.end || r.end > len {
          Err(Error::OutOfRange {
            start: r.start,
            end: r.end,
            len,
          })
        } else {
          Ok(page.slice(r.clone()))
        }
      })
      .collect::<Result<Box<[Comp]>>>()?;
    Ok(Self::raw(Kind::Clustering, Own::View, li))
  }

  /// Copy view bytes so the value no longer pins the page
  /// 复制视图字节，使值不再持有页
  pub fn retainable(&self) -> Self {
    match self.0.own {
      Own::Owned => self.clone(),
      Own::View => Self::raw(
        self.0.kind,
        Own::Owned,
        self.0.li.iter().map(|c| Comp::from(c.to_vec())).collect(),
      ),
    }
  }

  #[inline]
  pub fn kind(&self) -> Kind {
    self.0.kind
  }

  #[inline]
  pub fn own(&self) -> Own {
    self.0.own
  }

  /// Component count (arity)
  /// 组件数量（列数）
  #[inline]
  pub fn len(&self) -> usize {
    self.0.li.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.0.li.is_empty()
  }

  #[inline]
  pub fn is_static(&self) -> bool {
    self.0.kind == Kind::Static
  }

  #[inline]
  pub fn get(&self, idx: usize) -> Option<&[u8]> {
    self.0.li.get(idx).map(|c| c.as_slice())
  }

  #[inline]
  pub fn li(&self) -> &[Comp] {
    &self.0.li
  }

  #[inline]
  pub fn iter(&self) -> impl ExactSizeIterator<Item = &[u8]> + '_ {
    self.0.li.iter().map(|c| c.as_slice())
  }

  /// Same instance, the sentinel fast path
  /// 同一实例，哨兵快速路径
  #[inline]
  pub fn is_same(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.0, &other.0)
  }

  /// Total payload bytes
  /// 负载总字节数
  #[inline]
  pub fn data_size(&self) -> usize {
    self.0.li.iter().map(|c| c.len()).sum()
  }
}

impl Index<usize> for Clustering {
  type Output = [u8];

  #[inline]
  fn index(&self, idx: usize) -> &[u8] {
    self.0.li[idx].as_slice()
  }
}

impl PartialEq for Clustering {
  fn eq(&self, other: &Self) -> bool {
    self.is_same(other) || (self.0.kind == other.0.kind && self.0.li == other.0.li)
  }
}

impl Eq for Clustering {}

impl Hash for Clustering {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.0.kind.hash(state);
    self.0.li.hash(state);
  }
}

impl fmt::Debug for Clustering {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Clustering")
      .field("kind", &self.0.kind)
      .field("own", &self.0.own)
      .field("li", &self.0.li)
      .finish()
  }
}
