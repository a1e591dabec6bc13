use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Clustering column sort order
/// 聚簇列排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Order {
  #[default]
  Asc,
  /// Reversed type, largest value first
  /// 反转类型，最大值在前
  Desc,
}

impl Order {
  /// Apply the order to an ascending comparison result
  /// 将排序方向应用于升序比较结果
  #[inline(always)]
  pub fn apply(self, ord: Ordering) -> Ordering {
    match self {
      Order::Asc => ord,
      Order::Desc => ord.reverse(),
    }
  }
}
