//! Process-wide sentinels EMPTY and STATIC
//! 进程级哨兵 EMPTY 与 STATIC
//!
//! Built by a load-time constructor before `main`, read-only afterwards.
//! 由加载期构造器在 `main` 之前创建，之后只读。

use log::debug;

use crate::{Clustering, Kind};

fn init(kind: Kind) -> Clustering {
  debug!("clustering sentinel {kind:?} ready");
  Clustering::sentinel(kind)
}

/// Clustering of tables without clustering columns
/// 无聚簇列表的聚簇值
#[static_init::dynamic]
static EMPTY: Clustering = init(Kind::Clustering);

/// Clustering of the static row
/// 静态行的聚簇值
#[static_init::dynamic]
static STATIC: Clustering = init(Kind::Static);

#[inline]
pub fn empty() -> Clustering {
  Clustering::clone(&EMPTY)
}

#[inline]
pub fn static_clustering() -> Clustering {
  Clustering::clone(&STATIC)
}

impl Clustering {
  /// EMPTY or STATIC, by identity
  /// 是否为 EMPTY 或 STATIC（按实例判断）
  #[inline]
  pub fn is_sentinel(&self) -> bool {
    self.is_same(&EMPTY) || self.is_same(&STATIC)
  }
}
