// src/math/integrator.rs

/// 陽的オイラー法による1ステップ積分
///
/// # 引数
/// - `y`: 現在の値
/// - `f`: 現在の微分値
/// - `dt`: 時間ステップ
///
/// # 戻り値
/// - `y + f * dt`
pub fn explicit_euler(y: f64, f: f64, dt: f64) -> f64 {
    y + f * dt
}

/// 3成分ベクトル版の陽的オイラー法
pub fn explicit_euler3(y: &[f64; 3], f: &[f64; 3], dt: f64) -> [f64; 3] {
    [
        explicit_euler(y[0], f[0], dt),
        explicit_euler(y[1], f[1], dt),
        explicit_euler(y[2], f[2], dt),
    ]
}
