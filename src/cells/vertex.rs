//! 单元格顶点布局

use bytemuck::{Pod, Zeroable};
use egui::Pos2;
use serde::{Deserialize, Serialize};

/// 单元格顶点
///
/// 顶点在缓冲中按单元格分段连续存放，每段以质心顶点开头。
/// 顶点不跨单元格共享，相邻单元格各自持有自己的副本，
/// 以保证每段区间可以整体上传渲染。
///
/// 除了位置，其余字段对空间核心是不透明负载：渲染方可以
/// 随时改写颜色而不影响任何拓扑结构。
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct CellVertex {
    /// 世界坐标
    pub position: Pos2,
    /// RGBA 颜色
    pub color: [f32; 4],
    /// 纹理坐标
    pub uv: [f32; 2],
    /// 每单元格标量属性（高度、生物群系）
    pub attrs: [f32; 2],
}

impl CellVertex {
    /// 以默认负载（黑色、零纹理坐标）创建顶点
    pub fn at(position: Pos2) -> Self {
        Self {
            position,
            color: [0.0, 0.0, 0.0, 1.0],
            uv: [0.0, 0.0],
            attrs: [0.0, 0.0],
        }
    }
}
