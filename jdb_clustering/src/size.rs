//! Heap accounting for cache weighting
//! 用于缓存权重的堆内存统计

use std::mem::size_of;

use crate::{Clustering, Comp, Own, clustering::Inner};

/// Fixed cost of one instance: handle, shared block and counters
/// 单个实例的固定开销：句柄、共享块与计数器
pub const EMPTY_SIZE: usize =
  size_of::<Clustering>() + size_of::<Inner>() + 2 * size_of::<usize>();

/// Cost of the component reference array
/// 组件引用数组的开销
#[inline(always)]
pub const fn ref_array_size(n: usize) -> usize {
  n * size_of::<Comp>()
}

/// Bytes stored inside the component handle without a heap allocation
/// 无需堆分配、直接存于组件句柄内的字节数
pub const INLINE_CAP: usize = size_of::<Comp>() - 1;

/// Header of a spilled component: reference counter and buffer
/// 溢出到堆的组件头：引用计数与缓冲区
pub const ALLOC_OVERHEAD: usize = size_of::<usize>() + size_of::<Vec<u8>>();

/// Byte storage cost of one component of `len` bytes
/// 长度为 `len` 的单个组件的字节存储开销
#[inline(always)]
pub const fn comp_size(len: usize) -> usize {
  if len > INLINE_CAP {
    len + ALLOC_OVERHEAD
  } else {
    len
  }
}

impl Clustering {
  /// Cost as if every component byte were owned by this value
  /// 视为独占全部组件字节时的开销
  ///
  /// Sentinels are shared for the process lifetime and cost 0.
  /// 哨兵在进程生命周期内共享，开销为 0。
  pub fn unshared_heap_size(&self) -> usize {
    if self.is_sentinel() {
      return 0;
    }
    self.structure_size() + self.comp_li_size()
  }

  /// Cost of the structure only, payload accounted elsewhere
  /// 仅结构开销，负载由别处统计
  pub fn unshared_heap_size_excluding_data(&self) -> usize {
    if self.is_sentinel() {
      return 0;
    }
    self.structure_size()
  }

  /// Cost chosen by ownership: views exclude the page bytes
  /// 按所有权选择开销：视图不计页字节
  #[inline]
  pub fn heap_size(&self) -> usize {
    match self.own() {
      Own::Owned => self.unshared_heap_size(),
      Own::View => self.unshared_heap_size_excluding_data(),
    }
  }

  /// Each component counted once
  /// 每个组件只计一次
  #[inline]
  fn comp_li_size(&self) -> usize {
    self.iter().map(|c| comp_size(c.len())).sum()
  }

  #[inline]
  fn structure_size(&self) -> usize {
    EMPTY_SIZE + ref_array_size(self.len())
  }
}
