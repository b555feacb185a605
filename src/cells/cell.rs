//! 单元格句柄
//!
//! [`Cell`] 本身不存储几何数据，只记录顶点缓冲中的一段区间，
//! 数据本体集中放在 [`CellStore`] 里以便整体渲染。
//! 派生属性（包围盒、邻居表）在首次访问时计算并缓存，
//! 拓扑在构建后不再变化，缓存因此终生有效。

use std::cell::OnceCell;

use egui::{Pos2, Rect};
use serde::{Deserialize, Serialize};

use crate::geometry::point_in_polygon;

use super::store::CellStore;

/// 平面细分中的一个多边形单元格
///
/// 顶点区间的第一个顶点是质心，其余 `vertex_count - 1` 个是
/// 按环绕方向排列的边界顶点。句柄不持有存储的引用，所有
/// 需要几何数据的操作都显式接收 `&CellStore`。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    /// 顶点区间在缓冲中的起点
    first_vertex: u32,
    /// 区间长度（质心 + 边界顶点数）
    vertex_count: u32,
    /// 边界顶点的包围盒，首次访问时计算
    #[serde(skip)]
    bounds: OnceCell<Rect>,
    /// 邻居单元格下标，首次访问时计算
    #[serde(skip)]
    neighbors: OnceCell<Vec<u32>>,
}

/// 单元格身份只由顶点区间决定，缓存不参与比较
impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.first_vertex == other.first_vertex && self.vertex_count == other.vertex_count
    }
}

impl Cell {
    pub fn new(first_vertex: u32, vertex_count: u32) -> Self {
        Self {
            first_vertex,
            vertex_count,
            bounds: OnceCell::new(),
            neighbors: OnceCell::new(),
        }
    }

    /// 顶点区间起点（质心顶点）
    pub fn first_vertex(&self) -> u32 {
        self.first_vertex
    }

    /// 顶点区间长度
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// 边界顶点区间起点（跳过质心）
    pub(crate) fn boundary_start(&self) -> u32 {
        self.first_vertex + 1
    }

    /// 边界顶点数量
    pub(crate) fn boundary_count(&self) -> u32 {
        self.vertex_count - 1
    }

    /// 单元格质心
    ///
    /// 构建时已经预先算好并作为区间首顶点存储，这里只是读取。
    pub fn centroid(&self, store: &CellStore) -> Pos2 {
        store.vertices()[self.first_vertex as usize].position
    }

    /// 边界顶点坐标（不含质心）
    pub fn boundary(&self, store: &CellStore) -> Vec<Pos2> {
        store.positions(self.boundary_start(), self.boundary_count())
    }

    /// 单元格的包围盒
    ///
    /// 由边界顶点计算，质心不参与。只在首次访问时计算一次。
    pub fn bounding_box(&self, store: &CellStore) -> Rect {
        *self
            .bounds
            .get_or_init(|| crate::geometry::bounds_of(&self.boundary(store)))
    }

    /// 邻居单元格下标
    ///
    /// 首次访问时通过 [`CellStore::find_neighbors`] 计算并缓存。
    /// 构建后拓扑不变，缓存无需失效。
    pub fn neighbors<'a>(&'a self, store: &CellStore) -> &'a [u32] {
        self.neighbors.get_or_init(|| store.find_neighbors(self))
    }

    /// 精确测试点是否在单元格多边形内部
    pub fn contains(&self, store: &CellStore, pos: Pos2) -> bool {
        point_in_polygon(&self.boundary(store), pos)
    }

    /// 两个单元格的质心是否落在空间索引的同一个节点中
    ///
    /// 节点按实例比较。两个质心都在索引区域之外时视为同属。
    pub fn shares_parent(&self, store: &CellStore, other: &Cell) -> bool {
        let a = store.tree().node_at(self.centroid(store));
        let b = store.tree().node_at(other.centroid(store));
        match (a, b) {
            (Some(a), Some(b)) => std::ptr::eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    /// `other` 是否在本单元格的邻居表中
    ///
    /// 按存储中的实例身份判断。
    pub fn is_neighbor(&self, store: &CellStore, other: &Cell) -> bool {
        self.neighbors(store)
            .iter()
            .any(|&index| std::ptr::eq(store.cell(index), other))
    }

    /// 构建期预先填充包围盒缓存
    pub(crate) fn prime_bounds(&self, bounds: Rect) {
        let _ = self.bounds.set(bounds);
    }
}
