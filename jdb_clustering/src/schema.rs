//! Table clustering layout
//! 表的聚簇列布局

use hipstr::HipStr;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{ClusteringComparator, Error, Order, Result, Ty};

/// Clustering column definition
/// 聚簇列定义
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Col {
  pub name: HipStr<'static>,
  pub ty: Ty,
  #[serde(default)]
  pub order: Order,
}

impl Col {
  #[inline]
  pub fn new(name: impl Into<HipStr<'static>>, ty: Ty) -> Self {
    Self {
      name: name.into(),
      ty,
      order: Order::Asc,
    }
  }

  #[inline]
  pub fn desc(mut self) -> Self {
    self.order = Order::Desc;
    self
  }
}

/// Clustering columns of a table, in declaration order
/// 表的聚簇列，按声明顺序
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
  pub name: HipStr<'static>,
  #[serde(default)]
  pub clustering_li: Vec<Col>,
}

impl Schema {
  #[inline]
  pub fn col_idx(&self, name: &str) -> Option<usize> {
    self
      .clustering_li
      .iter()
      .position(|c| c.name.as_str() == name)
  }

  /// Validate the layout and build its comparator
  /// 校验布局并构造比较器
  pub fn comparator(&self) -> Result<ClusteringComparator> {
    for (i, col) in self.clustering_li.iter().enumerate() {
      if self.clustering_li[..i].iter().any(|c| c.name == col.name) {
        let msg = format!("{}: duplicate clustering column {}", self.name, col.name);
        warn!("{msg}");
        return Err(Error::Schema(msg.into()));
      }
    }
    debug!(
      "{}: {} clustering columns",
      self.name,
      self.clustering_li.len()
    );
    Ok(ClusteringComparator::new(self.clustering_li.clone()))
  }
}
