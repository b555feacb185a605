//! 几何基础模块
//!
//! 提供空间索引和单元格查询所需的纯几何运算：
//! - 包围盒分类（相离/相交/包含）、四等分与合并
//! - 多边形质心（鞋带公式）
//! - 点在多边形内测试（奇偶交叉法）
//!
//! 所有函数均为无状态纯函数，不持有任何几何数据。

mod bounds;
mod polygon;

pub use bounds::{bounds_of, classify_point, classify_rect, merge, quarter, Containment};
pub use polygon::{point_in_polygon, polygon_centroid};
