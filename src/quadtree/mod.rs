//! 索引四叉树模块
//!
//! 对一组固定的包围盒做递归四分区，每个节点只存储条目在外部
//! 存储中的下标（`u32`），树本身不持有任何几何负载。
//!
//! 用于加速：
//! - 点定位：沿树下降找到覆盖某个坐标的叶子
//! - 范围查询：收集与矩形相交的所有叶子
//! - 邻接查询：通过叶子成员快速缩小候选集
//!
//! # 主要类型
//! - [`QuadNode`]: 树节点，叶子或恰好四个子节点

mod index_tree;


pub use index_tree::QuadNode;
