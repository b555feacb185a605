//! 单元格存储
//!
//! 集中持有顶点缓冲、三角形索引缓冲和全部 [`Cell`] 句柄，
//! 并在单元格包围盒之上维护一棵四叉树（树中下标 `i`
//! 对应 `cells[i]`）。构建完成后结构不再变化，所有查询
//! 都是只读的。

use egui::{Pos2, Rect};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::{classify_point, classify_rect, Containment};
use crate::quadtree::QuadNode;

use super::{Cell, CellVertex};

/// 可查询的单元格集合
///
/// 查询分两步走：先用四叉树把候选集缩小到一个叶子，
/// 再用精确的几何测试消歧。包围盒层面的判断只用来过滤，
/// 最终归属永远由多边形测试决定。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellStore {
    /// 顶点缓冲，按单元格分段连续存放
    vertices: Vec<CellVertex>,
    /// 三角形索引缓冲（每 3 个为一个三角形）
    indices: Vec<u32>,
    /// 全部单元格，与树中下标一一对应
    cells: Vec<Cell>,
    /// 单元格包围盒上的空间索引
    tree: QuadNode,
    /// 构建时使用的目标叶子尺寸
    leaf_size: f32,
}

impl CellStore {
    /// 构建单元格存储
    ///
    /// 校验每个单元格的顶点区间（至少质心加三个边界顶点、
    /// 不越过缓冲末尾）以及三角形索引范围，然后在全部
    /// 单元格包围盒上建立四叉树。
    ///
    /// # 错误
    /// 任何一项校验失败都立即返回错误而不产生部分结果：
    /// 一个错位的区间会悄悄破坏之后的所有查询。
    pub fn new(
        vertices: Vec<CellVertex>,
        indices: Vec<u32>,
        cells: Vec<Cell>,
        leaf_size: f32,
    ) -> Result<Self> {
        for (index, cell) in cells.iter().enumerate() {
            if cell.vertex_count() < 4 {
                return Err(Error::DegenerateCell {
                    index,
                    vertex_count: cell.vertex_count() as usize,
                });
            }
            let end = cell.first_vertex() as usize + cell.vertex_count() as usize;
            if end > vertices.len() {
                return Err(Error::VertexRunOutOfBounds {
                    index,
                    end,
                    len: vertices.len(),
                });
            }
        }
        if let Some(&value) = indices.iter().find(|&&i| i as usize >= vertices.len()) {
            return Err(Error::TriangleIndexOutOfBounds {
                value,
                len: vertices.len(),
            });
        }

        // 树的构建需要全部包围盒，顺便填充每个单元格的缓存
        let boxes: Vec<Rect> = cells
            .iter()
            .map(|cell| {
                let bounds = crate::geometry::bounds_of(&run_positions(
                    &vertices,
                    cell.boundary_start(),
                    cell.boundary_count(),
                ));
                cell.prime_bounds(bounds);
                bounds
            })
            .collect();
        let tree = QuadNode::build(&boxes, leaf_size, None);

        debug!(
            "单元格存储构建完成: {} 单元格, {} 顶点, {} 节点, 深度 {}",
            cells.len(),
            vertices.len(),
            tree.node_count(),
            tree.depth()
        );

        Ok(Self {
            vertices,
            indices,
            cells,
            tree,
            leaf_size,
        })
    }

    /// 返回包含给定世界坐标的单元格
    ///
    /// 先定位叶子，再检查叶子里第一个包围盒接触该点的候选：
    /// 包围盒可能误导（叶子的成员表也可能缺少真正的归属者），
    /// 因此先对候选的每个邻居做精确多边形测试，命中即返回；
    /// 都未命中时返回候选自身。点在索引区域外或叶子里没有
    /// 任何候选接触该点时返回 `None`。
    pub fn at_point(&self, pos: Pos2) -> Option<&Cell> {
        let node = self.tree.node_at(pos)?;
        for &index in node.entries() {
            let cell = &self.cells[index as usize];
            if classify_point(cell.bounding_box(self), pos) == Containment::Disjoint {
                continue;
            }
            for &neighbor_index in cell.neighbors(self) {
                let neighbor = &self.cells[neighbor_index as usize];
                if neighbor.contains(self, pos) {
                    return Some(neighbor);
                }
            }
            return Some(cell);
        }
        None
    }

    /// 查找与给定单元格接壤的全部单元格
    ///
    /// 候选集来自与该单元格包围盒相交的叶子。候选只要有任何
    /// 一个边界顶点落在该单元格的包围盒内（含边界）就算邻居。
    ///
    /// 这是一个刻意保留的包围盒近似而不是精确的共边判定：
    /// 包围盒仅仅接触而没有真实公共边的单元格可能被误报，
    /// 凹多边形也可能漏报。每个候选只检查一次，结果不含重复。
    ///
    /// # 性能
    /// 建议在构建或加载阶段批量触发，单元格多时全量计算较慢。
    pub fn find_neighbors(&self, cell: &Cell) -> Vec<u32> {
        let bounds = cell.bounding_box(self);
        let mut visited = vec![false; self.cells.len()];
        let mut neighbors = Vec::new();
        for node in self.tree.nodes_overlapping(bounds) {
            for &index in node.entries() {
                let other = &self.cells[index as usize];
                if visited[index as usize] || std::ptr::eq(other, cell) {
                    continue;
                }
                visited[index as usize] = true;
                if classify_rect(bounds, other.bounding_box(self)) == Containment::Disjoint {
                    continue;
                }
                let touches = self
                    .positions(other.boundary_start(), other.boundary_count())
                    .iter()
                    .any(|&corner| classify_point(bounds, corner) != Containment::Disjoint);
                if touches {
                    neighbors.push(index);
                }
            }
        }
        neighbors
    }

    /// 给定单元格下标的邻居表（首次访问时计算并缓存）
    pub fn neighbors_of(&self, index: u32) -> &[u32] {
        self.cells[index as usize].neighbors(self)
    }

    /// 从顶点缓冲中取出一段连续区间的坐标
    ///
    /// 仅用于几何测试，不要用于渲染：顶点缓冲的排布以渲染
    /// 连续性为先，这里的拷贝没有做任何优化。
    pub fn positions(&self, start: u32, len: u32) -> Vec<Pos2> {
        run_positions(&self.vertices, start, len)
    }

    /// 改写一个单元格顶点区间的颜色负载
    ///
    /// 只触碰颜色字段，拓扑和缓存不受影响。
    /// `include_centroid` 为 `false` 时跳过区间首部的质心顶点。
    pub fn paint_cell(&mut self, index: usize, color: [f32; 4], include_centroid: bool) {
        let cell = &self.cells[index];
        let start = cell.first_vertex() as usize + usize::from(!include_centroid);
        let end = cell.first_vertex() as usize + cell.vertex_count() as usize;
        for vertex in &mut self.vertices[start..end] {
            vertex.color = color;
        }
    }

    /// 全部单元格
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// 按下标取单元格
    pub fn cell(&self, index: u32) -> &Cell {
        &self.cells[index as usize]
    }

    /// 单元格数量
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// 顶点缓冲
    pub fn vertices(&self) -> &[CellVertex] {
        &self.vertices
    }

    /// 三角形索引缓冲
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// 空间索引的根节点
    pub fn tree(&self) -> &QuadNode {
        &self.tree
    }

    /// 索引覆盖的区域
    pub fn bounds(&self) -> Rect {
        self.tree.bounds()
    }

    /// 构建时使用的目标叶子尺寸
    pub fn leaf_size(&self) -> f32 {
        self.leaf_size
    }

    /// 与给定矩形相交的全部叶子
    pub fn nodes_overlapping(&self, rect: Rect) -> Vec<&QuadNode> {
        self.tree.nodes_overlapping(rect)
    }

    /// 空间索引的全部叶子
    pub fn leaves(&self) -> Vec<&QuadNode> {
        self.tree.leaves()
    }
}

fn run_positions(vertices: &[CellVertex], start: u32, len: u32) -> Vec<Pos2> {
    vertices[start as usize..(start + len) as usize]
        .iter()
        .map(|vertex| vertex.position)
        .collect()
}
