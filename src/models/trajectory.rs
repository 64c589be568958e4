// src/models/trajectory.rs

/// 2次元の表示座標 (x, y)
pub type Point2 = [f64; 2];
/// 3次元の位置 (x, y, z)
pub type Point3 = [f64; 3];

/// 時刻順に記録された位置のスナップショット列
///
/// 追記のみ可能で、記録は値のコピーとして保持される。
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory<P> {
    points: Vec<P>,
}

impl<P: Copy> Trajectory<P> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Trajectory {
            points: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn record(&mut self, point: P) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[P] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<P> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<P> {
        self.points.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &P> {
        self.points.iter()
    }
}

impl<const N: usize> Trajectory<[f64; N]> {
    /// 非有限値 (NaN/Inf) を含む最初の点のインデックス
    pub fn first_non_finite(&self) -> Option<usize> {
        self.points
            .iter()
            .position(|p| p.iter().any(|c| !c.is_finite()))
    }
}
