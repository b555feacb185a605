//! 包围盒运算
//!
//! 空间索引建立在轴对齐包围盒的三态分类之上：
//! 两个区域要么相离，要么相交，要么一方完全包含另一方。

use egui::{pos2, Pos2, Rect};
use serde::{Deserialize, Serialize};

/// 包围盒分类结果
///
/// 边界按闭区间处理：恰好落在边上的点、仅共享一条边的两个盒子
/// 都视为相交而非相离。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Containment {
    /// 完全分离，没有公共点
    Disjoint,
    /// 有公共点但不构成包含关系
    Intersects,
    /// `bounds` 完全包含对方
    Contains,
}

/// 对一个包围盒相对另一个包围盒进行分类
///
/// # 返回值
/// - [`Containment::Disjoint`]: `other` 与 `bounds` 没有任何公共点
/// - [`Containment::Contains`]: `other` 完全位于 `bounds` 内（含边界）
/// - [`Containment::Intersects`]: 其余情况（包括仅边界接触）
pub fn classify_rect(bounds: Rect, other: Rect) -> Containment {
    if other.max.x < bounds.min.x
        || other.min.x > bounds.max.x
        || other.max.y < bounds.min.y
        || other.min.y > bounds.max.y
    {
        Containment::Disjoint
    } else if bounds.min.x <= other.min.x
        && other.max.x <= bounds.max.x
        && bounds.min.y <= other.min.y
        && other.max.y <= bounds.max.y
    {
        Containment::Contains
    } else {
        Containment::Intersects
    }
}

/// 对一个点相对包围盒进行分类
///
/// 恰好落在边界上的点视为 [`Containment::Intersects`]（接触），
/// 严格位于内部的点视为 [`Containment::Contains`]。
pub fn classify_point(bounds: Rect, p: Pos2) -> Containment {
    if p.x < bounds.min.x || p.x > bounds.max.x || p.y < bounds.min.y || p.y > bounds.max.y {
        Containment::Disjoint
    } else if p.x == bounds.min.x
        || p.x == bounds.max.x
        || p.y == bounds.min.y
        || p.y == bounds.max.y
    {
        Containment::Intersects
    } else {
        Containment::Contains
    }
}

/// 将包围盒在中心点四等分
///
/// 四个象限共享中线，顺序固定：
///
/// ```text
/// +-------+-------+
/// |   0   |   1   |
/// +-------c-------+
/// |   2   |   3   |
/// +-------+-------+
/// ```
pub fn quarter(bounds: Rect) -> [Rect; 4] {
    let c = bounds.center();
    [
        Rect::from_min_max(bounds.min, c),
        Rect::from_min_max(pos2(c.x, bounds.min.y), pos2(bounds.max.x, c.y)),
        Rect::from_min_max(pos2(bounds.min.x, c.y), pos2(c.x, bounds.max.y)),
        Rect::from_min_max(c, bounds.max),
    ]
}

/// 合并两个包围盒
///
/// [`Rect::NOTHING`] 是合并运算的单位元。
pub fn merge(a: Rect, b: Rect) -> Rect {
    a.union(b)
}

/// 计算一组点的紧致包围盒
///
/// 空集合返回 [`Rect::NOTHING`]。
pub fn bounds_of(points: &[Pos2]) -> Rect {
    let mut bounds = Rect::NOTHING;
    for &p in points {
        bounds.extend_with(p);
    }
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_rect() {
        let bounds = Rect::from_min_max(pos2(0.0, 0.0), pos2(10.0, 10.0));

        // 完全在内部
        let inner = Rect::from_min_max(pos2(2.0, 2.0), pos2(8.0, 8.0));
        assert_eq!(classify_rect(bounds, inner), Containment::Contains);

        // 部分重叠
        let overlap = Rect::from_min_max(pos2(5.0, 5.0), pos2(15.0, 15.0));
        assert_eq!(classify_rect(bounds, overlap), Containment::Intersects);

        // 完全分离
        let outside = Rect::from_min_max(pos2(20.0, 20.0), pos2(30.0, 30.0));
        assert_eq!(classify_rect(bounds, outside), Containment::Disjoint);
    }

    #[test]
    fn test_touching_rects_are_not_disjoint() {
        // 仅共享一条边的盒子必须视为相交，否则跨越分割线的
        // 条目会从相邻叶子中丢失
        let a = Rect::from_min_max(pos2(0.0, 0.0), pos2(5.0, 5.0));
        let b = Rect::from_min_max(pos2(5.0, 0.0), pos2(10.0, 5.0));
        assert_eq!(classify_rect(a, b), Containment::Intersects);

        // 仅共享一个角点
        let c = Rect::from_min_max(pos2(5.0, 5.0), pos2(10.0, 10.0));
        assert_eq!(classify_rect(a, c), Containment::Intersects);
    }

    #[test]
    fn test_classify_point() {
        let bounds = Rect::from_min_max(pos2(0.0, 0.0), pos2(10.0, 10.0));

        assert_eq!(
            classify_point(bounds, pos2(5.0, 5.0)),
            Containment::Contains
        );
        // 边界上的点算接触
        assert_eq!(
            classify_point(bounds, pos2(0.0, 5.0)),
            Containment::Intersects
        );
        assert_eq!(
            classify_point(bounds, pos2(10.0, 10.0)),
            Containment::Intersects
        );
        assert_eq!(
            classify_point(bounds, pos2(10.1, 5.0)),
            Containment::Disjoint
        );
    }

    #[test]
    fn test_quarter() {
        let bounds = Rect::from_min_max(pos2(0.0, 0.0), pos2(4.0, 4.0));
        let quads = quarter(bounds);

        // 顺序固定且四份等大
        assert_eq!(quads[0], Rect::from_min_max(pos2(0.0, 0.0), pos2(2.0, 2.0)));
        assert_eq!(quads[1], Rect::from_min_max(pos2(2.0, 0.0), pos2(4.0, 2.0)));
        assert_eq!(quads[2], Rect::from_min_max(pos2(0.0, 2.0), pos2(2.0, 4.0)));
        assert_eq!(quads[3], Rect::from_min_max(pos2(2.0, 2.0), pos2(4.0, 4.0)));

        for q in &quads {
            assert_eq!(q.width(), 2.0);
            assert_eq!(q.height(), 2.0);
        }
    }

    #[test]
    fn test_merge_and_bounds_of() {
        let a = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
        let b = Rect::from_min_max(pos2(2.0, -1.0), pos2(3.0, 0.5));
        let merged = merge(a, b);
        assert_eq!(merged, Rect::from_min_max(pos2(0.0, -1.0), pos2(3.0, 1.0)));

        // NOTHING 是单位元
        assert_eq!(merge(Rect::NOTHING, a), a);

        let points = [pos2(1.0, 2.0), pos2(-1.0, 0.0), pos2(0.5, 3.0)];
        assert_eq!(
            bounds_of(&points),
            Rect::from_min_max(pos2(-1.0, 0.0), pos2(1.0, 3.0))
        );
        assert_eq!(bounds_of(&[]), Rect::NOTHING);
    }
}
