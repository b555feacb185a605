//! 单元格模块
//!
//! 平面被不规则多边形单元格无缝铺满，本模块负责组织这些
//! 单元格并回答三类查询：
//! - 点定位：任意坐标落在哪个单元格里
//! - 邻接查询：与某个单元格接壤的全部单元格
//! - 范围查询：与任意矩形相交的叶子与候选单元格
//!
//! # 主要类型
//! - [`CellStore`]: 持有顶点缓冲、索引缓冲、单元格数组和四叉树
//! - [`Cell`]: 指向顶点缓冲中一段连续区间的轻量句柄
//! - [`CellVertex`]: 可直接上传 GPU 的顶点布局

mod cell;
mod store;
mod vertex;


pub use cell::Cell;
pub use store::CellStore;
pub use vertex::CellVertex;
