//! 多边形运算
//!
//! 单元格以闭合多边形表示，这里提供两项基础运算：
//! 带符号面积加权的质心，以及奇偶交叉法的点包含测试。

use egui::Pos2;

/// 退化多边形判定阈值
///
/// 累积带符号面积的绝对值低于该值时认为多边形没有有效面积。
const DEGENERATE_AREA_EPSILON: f32 = 1e-7;

/// 计算闭合多边形的质心
///
/// 使用鞋带公式按带符号面积加权，对凹多边形同样正确。
/// 顶点按一致的环绕方向给出，最后一个点与第一个点之间隐式闭合。
///
/// # 返回值
/// 质心坐标；当累积带符号面积的绝对值低于 1e-7 时（共线、
/// 少于三个点或重合点）返回 [`Pos2::ZERO`]，避免除以零。
pub fn polygon_centroid(points: &[Pos2]) -> Pos2 {
    if points.is_empty() {
        return Pos2::ZERO;
    }

    let mut accumulated_area = 0.0f32;
    let mut center_x = 0.0f32;
    let mut center_y = 0.0f32;

    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let cross = points[i].x * points[j].y - points[j].x * points[i].y;
        accumulated_area += cross;
        center_x += (points[i].x + points[j].x) * cross;
        center_y += (points[i].y + points[j].y) * cross;
        j = i;
    }

    if accumulated_area.abs() < DEGENERATE_AREA_EPSILON {
        return Pos2::ZERO;
    }

    // 质心公式的分母是 6 倍带符号面积，而累积值已是 2 倍面积
    accumulated_area *= 3.0;
    Pos2::new(center_x / accumulated_area, center_y / accumulated_area)
}

/// 测试点是否位于多边形内部
///
/// 奇偶交叉法：从查询点向右发出射线，统计与多边形边的交点数，
/// 奇数为内、偶数为外。`boundary` 是按环绕方向排列的边界顶点，
/// 最后一个顶点与第一个顶点之间隐式闭合。
///
/// 恰好落在边上的点不保证稳定结果，调用方需要精确边界语义时
/// 应结合包围盒分类使用。
pub fn point_in_polygon(boundary: &[Pos2], p: Pos2) -> bool {
    if boundary.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = boundary.len() - 1;
    for i in 0..boundary.len() {
        if (boundary[i].y > p.y) != (boundary[j].y > p.y)
            && p.x
                < (boundary[j].x - boundary[i].x) * (p.y - boundary[i].y)
                    / (boundary[j].y - boundary[i].y)
                    + boundary[i].x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_centroid_of_square() {
        let square = [
            pos2(0.0, 0.0),
            pos2(2.0, 0.0),
            pos2(2.0, 2.0),
            pos2(0.0, 2.0),
        ];
        let c = polygon_centroid(&square);
        assert!((c.x - 1.0).abs() < 1e-5);
        assert!((c.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_centroid_winding_independent() {
        // 顺时针与逆时针给出同一质心
        let ccw = [pos2(0.0, 0.0), pos2(4.0, 0.0), pos2(4.0, 2.0), pos2(0.0, 2.0)];
        let cw = [pos2(0.0, 2.0), pos2(4.0, 2.0), pos2(4.0, 0.0), pos2(0.0, 0.0)];
        let a = polygon_centroid(&ccw);
        let b = polygon_centroid(&cw);
        assert!((a.x - b.x).abs() < 1e-5);
        assert!((a.y - b.y).abs() < 1e-5);
    }

    #[test]
    fn test_centroid_degenerate_returns_zero() {
        // 两个点没有面积，必须返回零点而不是除以零
        let segment = [pos2(1.0, 1.0), pos2(5.0, 5.0)];
        assert_eq!(polygon_centroid(&segment), Pos2::ZERO);

        // 共线的三个点同样退化
        let collinear = [pos2(0.0, 0.0), pos2(1.0, 1.0), pos2(2.0, 2.0)];
        assert_eq!(polygon_centroid(&collinear), Pos2::ZERO);

        assert_eq!(polygon_centroid(&[]), Pos2::ZERO);
    }

    #[test]
    fn test_point_in_polygon_square() {
        let square = [
            pos2(0.0, 0.0),
            pos2(2.0, 0.0),
            pos2(2.0, 2.0),
            pos2(0.0, 2.0),
        ];
        assert!(point_in_polygon(&square, pos2(1.0, 1.0)));
        assert!(!point_in_polygon(&square, pos2(3.0, 1.0)));
        assert!(!point_in_polygon(&square, pos2(-0.5, 1.0)));
    }

    #[test]
    fn test_point_in_polygon_concave() {
        // L 形多边形，凹口处的点在外部
        let shape = [
            pos2(0.0, 0.0),
            pos2(4.0, 0.0),
            pos2(4.0, 4.0),
            pos2(2.0, 4.0),
            pos2(2.0, 2.0),
            pos2(0.0, 2.0),
        ];
        assert!(point_in_polygon(&shape, pos2(1.0, 1.0)));
        assert!(point_in_polygon(&shape, pos2(3.0, 3.0)));
        // 凹口
        assert!(!point_in_polygon(&shape, pos2(1.0, 3.0)));
    }

    #[test]
    fn test_point_in_polygon_too_few_vertices() {
        assert!(!point_in_polygon(&[], pos2(0.0, 0.0)));
        assert!(!point_in_polygon(&[pos2(0.0, 0.0), pos2(1.0, 0.0)], pos2(0.5, 0.0)));
    }
}
