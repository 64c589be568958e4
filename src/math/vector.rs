// src/math/vector.rs

/// ベクトルのスカラー倍
pub fn scale(v: &[f64; 3], k: f64) -> [f64; 3] {
    [v[0] * k, v[1] * k, v[2] * k]
}

/// ベクトルの成分ごとの除算。ゼロ除算は検査しない。
pub fn divide(v: &[f64; 3], k: f64) -> [f64; 3] {
    [v[0] / k, v[1] / k, v[2] / k]
}

pub fn add(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

/// ベクトルの大きさの二乗
pub fn norm_squared(v: &[f64; 3]) -> f64 {
    v[0].powi(2) + v[1].powi(2) + v[2].powi(2)
}

/// XY平面上で原点へ向かう単位ベクトル（Z成分は0）
///
/// 位置のXY成分がちょうど原点の場合は 0/0 となり NaN を返す。
pub fn planar_inward_unit(position: &[f64; 3]) -> [f64; 3] {
    let planar = (position[0].powi(2) + position[1].powi(2)).sqrt();
    [-position[0] / planar, -position[1] / planar, 0.0]
}
