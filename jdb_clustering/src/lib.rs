#![cfg_attr(docsrs, feature(doc_cfg))]

//! Clustering keys: composite row keys ordering rows within a partition
//! 聚簇键：决定分区内行顺序的复合行键
//!
//! - [`Clustering`] immutable, fixed-arity byte components
//! - [`empty`] / [`static_clustering`] process-wide sentinels
//! - [`ClusteringComparator`] type-aware total order
//! - heap accounting for cache weighting
//!
//! - [`Clustering`] 不可变、定长的字节组件
//! - [`empty`] / [`static_clustering`] 进程级哨兵
//! - [`ClusteringComparator`] 类型感知全序
//! - 用于缓存权重的堆内存统计

mod clustering;
mod comparator;
mod error;
mod kind;
mod order;
mod schema;
mod sentinel;
mod size;
mod ty;

pub use clustering::{Clustering, Comp};
pub use comparator::{ClusteringComparator, ClusteringShow};
pub use error::{Error, Result};
pub use kind::{Arity, Kind, Own};
pub use order::Order;
pub use schema::{Col, Schema};
pub use sentinel::{empty, static_clustering};
pub use size::{ALLOC_OVERHEAD, EMPTY_SIZE, INLINE_CAP, comp_size, ref_array_size};
pub use ty::{Show, Ty};
