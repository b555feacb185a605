//! 站点网格
//!
//! 在矩形范围内生成带抖动的均匀站点，作为单元格铺满的种子。

use egui::{pos2, Pos2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 带抖动的站点网格
///
/// 站点在规则网格的基础上加入随机偏移，铺满后的单元格
/// 大小均匀但边界不规则。同一个种子总是生成同一组站点。
#[derive(Debug, Clone)]
pub struct SiteGrid {
    /// 网格宽度
    pub width: u32,
    /// 网格高度
    pub height: u32,
    /// 站点间距
    pub spacing: u32,
    /// 内部站点
    pub sites: Vec<Pos2>,
}

impl SiteGrid {
    /// 生成抖动的站点网格
    ///
    /// # 参数
    /// - `width` / `height`: 站点覆盖的矩形范围
    /// - `spacing`: 规则网格的间距
    /// - `seed`: 随机种子，相同种子产出相同站点
    pub fn new(width: u32, height: u32, spacing: u32, seed: u64) -> Self {
        let spacing = spacing.max(1);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut sites = Vec::new();

        // 最大偏移量取半间距的九成，保证相邻站点不会交换位置
        let radius = spacing as f32 / 2.0;
        let jittering = radius * 0.9;

        for y in (0..height).step_by(spacing as usize) {
            for x in (0..width).step_by(spacing as usize) {
                let jitter_x = rng.random_range(-jittering..jittering);
                let jitter_y = rng.random_range(-jittering..jittering);

                let site_x = (x as f32 + radius + jitter_x).clamp(0.0, width as f32);
                let site_y = (y as f32 + radius + jitter_y).clamp(0.0, height as f32);
                sites.push(pos2(site_x, site_y));
            }
        }

        Self {
            width,
            height,
            spacing,
            sites,
        }
    }

    /// 生成边界伪站点
    ///
    /// 在范围外侧一圈放置站点，把内部站点的单元格约束成
    /// 有限多边形；伪站点自己的单元格无界，不参与铺满。
    pub fn boundary_sites(&self) -> Vec<Pos2> {
        let mut boundary = Vec::new();
        let offset = -(self.spacing as f32);
        let boundary_spacing = self.spacing as f32 * 2.0;

        let w = self.width as f32 - offset * 2.0;
        let h = self.height as f32 - offset * 2.0;

        let number_x = (w / boundary_spacing).ceil() as i32 - 1;
        let number_y = (h / boundary_spacing).ceil() as i32 - 1;

        for i in 0..number_x {
            let x = w * (i as f32 + 0.5) / number_x as f32 + offset;
            boundary.push(pos2(x, offset));
            boundary.push(pos2(x, h + offset));
        }
        for i in 0..number_y {
            let y = h * (i as f32 + 0.5) / number_y as f32 + offset;
            boundary.push(pos2(offset, y));
            boundary.push(pos2(w + offset, y));
        }

        boundary
    }

    /// 内部站点加边界伪站点
    ///
    /// 内部站点在前，下标 `< interior_count()` 的都是内部站点。
    pub fn all_sites(&self) -> Vec<Pos2> {
        let mut all = self.sites.clone();
        all.extend(self.boundary_sites());
        all
    }

    /// 内部站点数量
    pub fn interior_count(&self) -> usize {
        self.sites.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_count_matches_grid() {
        let grid = SiteGrid::new(100, 60, 20, 7);
        // 5 列 × 3 行
        assert_eq!(grid.sites.len(), 15);
        assert_eq!(grid.interior_count(), 15);
    }

    #[test]
    fn test_deterministic_for_same_seed() {
        let a = SiteGrid::new(100, 100, 10, 42);
        let b = SiteGrid::new(100, 100, 10, 42);
        assert_eq!(a.sites, b.sites);

        let c = SiteGrid::new(100, 100, 10, 43);
        assert_ne!(a.sites, c.sites);
    }

    #[test]
    fn test_sites_stay_in_range() {
        let grid = SiteGrid::new(200, 100, 10, 1);
        for site in &grid.sites {
            assert!(site.x >= 0.0 && site.x <= 200.0);
            assert!(site.y >= 0.0 && site.y <= 100.0);
        }
    }

    #[test]
    fn test_boundary_sites_surround_the_frame() {
        let grid = SiteGrid::new(100, 100, 10, 1);
        for site in grid.boundary_sites() {
            // 伪站点全部在范围之外
            assert!(
                site.x < 0.0 || site.x > 100.0 || site.y < 0.0 || site.y > 100.0,
                "{:?} 落在范围内",
                site
            );
        }
    }
}
