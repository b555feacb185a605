//! Voronoi 单元格多边形生成
//!
//! 基于 Delaunay 三角剖分的对偶关系：每个三角形的外心是
//! Voronoi 图的一个顶点，一个站点的单元格由它参与的全部
//! 三角形的外心围成。站点的单元格是凸多边形，把外心按
//! 相对站点的角度排序即可得到闭合边界。

use delaunator::{triangulate, Point};
use egui::{pos2, Pos2};

/// 顶点坐标量化精度（用于去重）
const VERTEX_QUANTIZATION: f64 = 10000.0;

/// 计算每个内部站点的 Voronoi 单元格多边形
///
/// 边界伪站点（下标 `>= interior_count`）参与三角剖分、
/// 约束内部单元格的范围，但不产出自己的多边形。
///
/// # 参数
/// - `sites`: 全部站点，内部站点在前
/// - `interior_count`: 内部站点数量
///
/// # 返回值
/// 与内部站点一一对应的多边形列表，顶点按角度排列成闭合
/// 凸多边形。站点太少或共线时对应的列表可能少于三个顶点，
/// 由调用方决定如何处理。
pub fn voronoi_cell_polygons(sites: &[Pos2], interior_count: usize) -> Vec<Vec<Pos2>> {
    let interior_count = interior_count.min(sites.len());
    let points: Vec<Point> = sites
        .iter()
        .map(|site| Point {
            x: site.x as f64,
            y: site.y as f64,
        })
        .collect();
    let triangulation = triangulate(&points);

    // 把每个三角形的外心分发给它的三个站点
    let mut polygons: Vec<Vec<Pos2>> = vec![Vec::new(); interior_count];
    for triangle in 0..triangulation.triangles.len() / 3 {
        let a = triangulation.triangles[triangle * 3];
        let b = triangulation.triangles[triangle * 3 + 1];
        let c = triangulation.triangles[triangle * 3 + 2];
        let center = circumcenter(sites[a], sites[b], sites[c]);
        for site in [a, b, c] {
            if site < interior_count {
                polygons[site].push(center);
            }
        }
    }

    for (site, polygon) in polygons.iter_mut().enumerate() {
        sort_into_ring(polygon, sites[site]);
    }
    polygons
}

/// 按相对站点的角度排序并去除重合顶点
///
/// 四点共圆时相邻三角形的外心重合，量化后去重。
fn sort_into_ring(polygon: &mut Vec<Pos2>, site: Pos2) {
    polygon.sort_by(|a, b| {
        let angle_a = (a.y - site.y).atan2(a.x - site.x);
        let angle_b = (b.y - site.y).atan2(b.x - site.x);
        angle_a
            .partial_cmp(&angle_b)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    polygon.dedup_by_key(|p| {
        (
            (p.x as f64 * VERTEX_QUANTIZATION).round() as i64,
            (p.y as f64 * VERTEX_QUANTIZATION).round() as i64,
        )
    });
}

/// 计算三角形的外心
///
/// 外心是两条边中垂线的交点。退化三角形（三点接近共线）
/// 没有稳定的外心，退回重心。
fn circumcenter(a: Pos2, b: Pos2, c: Pos2) -> Pos2 {
    let ab_mid = pos2((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
    let bc_mid = pos2((b.x + c.x) / 2.0, (b.y + c.y) / 2.0);

    let ab_normal = pos2(-(b.y - a.y), b.x - a.x);
    let bc_normal = pos2(-(c.y - b.y), c.x - b.x);

    let det = ab_normal.x * bc_normal.y - ab_normal.y * bc_normal.x;
    if det.abs() < 1e-10 {
        return pos2((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0);
    }

    let t = ((bc_mid.x - ab_mid.x) * bc_normal.y - (bc_mid.y - ab_mid.y) * bc_normal.x) / det;
    pos2(ab_mid.x + t * ab_normal.x, ab_mid.y + t * ab_normal.y)
}
