//! 单元格几何生成模块
//!
//! 从一组站点出发生成无缝铺满平面的多边形单元格，
//! 供演示、集成测试和基准测试使用：
//! - [`SiteGrid`]: 带抖动的站点网格，外加一圈边界伪站点
//! - [`voronoi_cell_polygons`]: 站点的 Voronoi 单元格多边形
//!
//! 生成流程：
//!
//! ```text
//! SiteGrid::new(…)          ── 抖动网格站点
//!        │ all_sites()
//!        ▼
//! voronoi_cell_polygons()   ── Delaunay 三角剖分 + 外心收集
//!        │
//!        ▼
//! Vec<Vec<Pos2>>            ── 每个内部站点一个闭合多边形
//! ```

mod grid;
mod voronoi;

pub use grid::SiteGrid;
pub use voronoi::voronoi_cell_polygons;
