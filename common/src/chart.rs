//! レーダーチャートの幾何計算
//!
//! 各維度を1本の軸として、真上から時計回りに等間隔で並べる。
//! 値はパーセンテージ（0〜100）。描画（SVG）は呼び出し側で行う。

use std::f64::consts::PI;

/// 軸ラベルの水平方向の揃え
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    /// SVGの `text-anchor` 値
    pub fn as_svg(&self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// レーダーチャートの寸法
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Radar {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

impl Radar {
    pub fn new(cx: f64, cy: f64, radius: f64) -> Self {
        Self { cx, cy, radius }
    }

    /// i番目の軸の角度（ラジアン、真上が -π/2）
    fn angle(axis: usize, axes: usize) -> f64 {
        -PI / 2.0 + 2.0 * PI * axis as f64 / axes as f64
    }

    /// 軸上の点（value は 0〜100）
    pub fn point(&self, axis: usize, axes: usize, value: f64) -> (f64, f64) {
        let r = self.radius * value.clamp(0.0, 100.0) / 100.0;
        let a = Self::angle(axis, axes);
        (self.cx + r * a.cos(), self.cy + r * a.sin())
    }

    /// データ多角形の頂点
    pub fn polygon(&self, values: &[f64]) -> Vec<(f64, f64)> {
        let n = values.len();
        values
            .iter()
            .enumerate()
            .map(|(i, v)| self.point(i, n, *v))
            .collect()
    }

    /// 目盛り多角形（20%刻み）
    pub fn grid_rings(&self, axes: usize) -> Vec<Vec<(f64, f64)>> {
        [20.0, 40.0, 60.0, 80.0, 100.0]
            .iter()
            .map(|level| (0..axes).map(|i| self.point(i, axes, *level)).collect())
            .collect()
    }

    /// 軸ラベルの位置と揃え（外周から少し離す）
    pub fn label(&self, axis: usize, axes: usize, offset: f64) -> (f64, f64, Anchor) {
        let a = Self::angle(axis, axes);
        let r = self.radius + offset;
        let (x, y) = (self.cx + r * a.cos(), self.cy + r * a.sin());
        let anchor = if a.cos().abs() < 1e-6 {
            Anchor::Middle
        } else if a.cos() > 0.0 {
            Anchor::Start
        } else {
            Anchor::End
        };
        (x, y, anchor)
    }
}

/// SVG `points` 属性の文字列
pub fn svg_points(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn test_first_axis_points_up() {
        let radar = Radar::new(100.0, 100.0, 80.0);
        assert!(close(radar.point(0, 4, 100.0), (100.0, 20.0)));
        // 時計回りに2本目は右
        assert!(close(radar.point(1, 4, 50.0), (140.0, 100.0)));
    }

    #[test]
    fn test_values_are_clamped() {
        let radar = Radar::new(0.0, 0.0, 10.0);
        assert!(close(radar.point(0, 1, 150.0), radar.point(0, 1, 100.0)));
        assert!(close(radar.point(0, 1, -5.0), (0.0, 0.0)));
    }

    #[test]
    fn test_polygon_and_rings() {
        let radar = Radar::new(50.0, 50.0, 40.0);
        assert_eq!(radar.polygon(&[10.0, 20.0, 30.0, 40.0, 50.0]).len(), 5);
        let rings = radar.grid_rings(5);
        assert_eq!(rings.len(), 5);
        assert!(rings.iter().all(|r| r.len() == 5));
    }

    #[test]
    fn test_label_anchor() {
        let radar = Radar::new(100.0, 100.0, 80.0);
        assert_eq!(radar.label(0, 4, 10.0).2, Anchor::Middle);
        assert_eq!(radar.label(1, 4, 10.0).2, Anchor::Start);
        assert_eq!(radar.label(3, 4, 10.0).2, Anchor::End);
    }

    #[test]
    fn test_svg_points_format() {
        assert_eq!(svg_points(&[(1.0, 2.26), (3.0, 4.0)]), "1.0,2.3 3.0,4.0");
    }
}
