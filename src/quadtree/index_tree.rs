//! 存储下标的包围盒四叉树
//!
//! 树只记录条目的整数下标，条目本体放在任意外部容器中
//! （例如单元格数组），同一棵树因此可以服务于不同的存储。
//!
//! # 重复成员
//! 包围盒跨越分割线的条目会同时出现在多个兄弟叶子里。
//! 这是刻意为之：边界附近的查询必须在任何一侧的叶子中都能
//! 找到该条目，去重是调用方的职责。

use egui::{Pos2, Rect};
use serde::{Deserialize, Serialize};

use crate::geometry::{classify_point, classify_rect, merge, quarter, Containment};

/// 四叉树节点
///
/// 叶子节点没有子节点，分支节点恰好有四个，分别覆盖本节点
/// 区域的四个等分象限。`children` 的 `Option<Box<[_; 4]>>` 结构
/// 使 0 或 4 的不变量无法被违反。
///
/// # 示例
/// ```ignore
/// let tree = QuadNode::build(&boxes, 64.0, None);
/// if let Some(leaf) = tree.node_at(pos) {
///     for &index in leaf.entries() {
///         // boxes[index as usize] 与该叶子区域不相离
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadNode {
    /// 节点覆盖的区域
    bounds: Rect,
    /// 与本节点区域不相离的条目下标
    ///
    /// 分支节点同样保存这份列表，供上层遍历时提前过滤。
    entries: Vec<u32>,
    /// 四个子节点，叶子为 `None`
    children: Option<Box<[QuadNode; 4]>>,
}

impl QuadNode {
    /// 从一组条目包围盒构建四叉树
    ///
    /// 递归地将区域四等分，直到下一层象限的宽或高不超过
    /// `leaf_size` 为止，深度约为 `log4(区域尺寸 / leaf_size)`。
    /// 每个节点收集与其区域不相离的全部条目下标。
    ///
    /// # 参数
    /// - `entry_bounds`: 条目包围盒，下标即树中存储的下标
    /// - `leaf_size`: 目标叶子尺寸，象限一旦不大于该值就停止细分
    /// - `universe`: 根节点覆盖的区域；`None` 时使用全部条目
    ///   包围盒的紧致合并，此时区域外不存在任何条目
    pub fn build(entry_bounds: &[Rect], leaf_size: f32, universe: Option<Rect>) -> Self {
        let leaf_size = leaf_size.max(f32::EPSILON);
        let candidates: Vec<u32> = (0..entry_bounds.len() as u32).collect();
        let region = universe.unwrap_or_else(|| {
            entry_bounds.iter().fold(Rect::NOTHING, |acc, &b| merge(acc, b))
        });
        Self::build_region(entry_bounds, &candidates, region, leaf_size)
    }

    /// 在给定区域上递归构建节点
    ///
    /// 与父节点区域相离的条目不可能与任何子象限相交，
    /// 因此每层只需要在父节点的候选集中筛选。
    fn build_region(
        entry_bounds: &[Rect],
        candidates: &[u32],
        region: Rect,
        leaf_size: f32,
    ) -> Self {
        let entries: Vec<u32> = candidates
            .iter()
            .copied()
            .filter(|&i| {
                classify_rect(region, entry_bounds[i as usize]) != Containment::Disjoint
            })
            .collect();

        let quadrants = quarter(region);
        let children = if quadrants[0].width() > leaf_size && quadrants[0].height() > leaf_size {
            Some(Box::new(quadrants.map(|quadrant| {
                Self::build_region(entry_bounds, &entries, quadrant, leaf_size)
            })))
        } else {
            None
        };

        Self {
            bounds: region,
            entries,
            children,
        }
    }

    /// 查找覆盖给定点的节点
    ///
    /// 按固定顺序下降到第一个不与该点相离的子节点，
    /// 遇到叶子即停止。点在根区域之外时返回 `None`。
    ///
    /// # 性能
    /// O(树深度)，点落在分割线上时最多多访问常数个兄弟分支。
    pub fn node_at(&self, pos: Pos2) -> Option<&QuadNode> {
        if classify_point(self.bounds, pos) == Containment::Disjoint {
            return None;
        }
        match &self.children {
            Some(children) => children.iter().find_map(|child| child.node_at(pos)),
            None => Some(self),
        }
    }

    /// 收集与给定矩形不相离的全部叶子
    ///
    /// 查询矩形越大结果越多，最坏退化为遍历整棵树；
    /// 调用方应将查询范围控制在单个条目的量级。
    pub fn nodes_overlapping(&self, rect: Rect) -> Vec<&QuadNode> {
        let mut result = Vec::new();
        self.collect_overlapping(rect, &mut result);
        result
    }

    fn collect_overlapping<'a>(&'a self, rect: Rect, result: &mut Vec<&'a QuadNode>) {
        if classify_rect(self.bounds, rect) == Containment::Disjoint {
            return;
        }
        match &self.children {
            Some(children) => {
                for child in children.iter() {
                    child.collect_overlapping(rect, result);
                }
            }
            None => result.push(self),
        }
    }

    /// 返回本节点之下的全部叶子
    pub fn leaves(&self) -> Vec<&QuadNode> {
        let mut result = Vec::new();
        self.collect_leaves(&mut result);
        result
    }

    fn collect_leaves<'a>(&'a self, result: &mut Vec<&'a QuadNode>) {
        match &self.children {
            Some(children) => {
                for child in children.iter() {
                    child.collect_leaves(result);
                }
            }
            None => result.push(self),
        }
    }

    /// 节点覆盖的区域
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// 与本节点区域不相离的条目下标
    pub fn entries(&self) -> &[u32] {
        &self.entries
    }

    /// 子节点，叶子为 `None`
    pub fn children(&self) -> Option<&[QuadNode; 4]> {
        self.children.as_deref()
    }

    /// 是否为叶子节点
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// 本节点之下的节点总数（含自身）
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .as_ref()
            .map_or(0, |children| children.iter().map(QuadNode::node_count).sum())
    }

    /// 本节点之下的最大层数，叶子为 0
    pub fn depth(&self) -> usize {
        self.children.as_ref().map_or(0, |children| {
            1 + children.iter().map(QuadNode::depth).max().unwrap_or(0)
        })
    }
}
