//! Error types
//! 错误类型

use hipstr::HipStr;
use thiserror::Error;

use crate::Ty;

#[derive(Debug, Error)]
pub enum Error {
  /// Component count does not match the required arity
  /// 组件数量与要求的列数不符
  #[error("arity mismatch: expect {expect}, got {got} / 聚簇列数不匹配")]
  Arity { expect: usize, got: usize },

  /// Value cannot belong to the comparator's table
  /// 值不属于该比较器对应的表
  #[error("comparison type mismatch: table has {cols} clustering columns, value has {got} / 比较类型不匹配")]
  TypeMismatch { cols: usize, got: usize },

  #[error("component {idx} invalid for {ty:?}: len {len} / 组件非法")]
  InvalidComponent { idx: usize, ty: Ty, len: usize },

  #[error("view range {start}..{end} out of page len {len} / 视图越界")]
  OutOfRange { start: usize, end: usize, len: usize },

  #[error("schema: {0}")]
  Schema(HipStr<'static>),
}

pub type Result<T> = std::result::Result<T, Error>;
