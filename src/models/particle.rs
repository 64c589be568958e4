// src/models/particle.rs

use crate::math::{explicit_euler, explicit_euler3};
use crate::math::vector::divide;

/// 円周に沿った弧長スカラーで表す粒子（2Dモデル）
#[derive(Debug, Clone, PartialEq)]
pub struct AngularParticle {
    pub position: f64, // 弧長に相当する累積値（折り返さない）
    pub velocity: f64, // 速さ
    pub mass: f64,     // 質量
    pub energy: f64,   // 獲得エネルギーの累積
}

impl AngularParticle {
    pub fn new(position: f64, velocity: f64, mass: f64) -> Self {
        AngularParticle {
            position,
            velocity,
            mass,
            energy: 0.0,
        }
    }

    /// 加速度を直接与えて速度、位置の順に更新する
    ///
    /// # 引数
    /// - `acceleration`: 加速度
    /// - `time_step`: 時間ステップ
    pub fn update_position(&mut self, acceleration: f64, time_step: f64) {
        self.velocity = explicit_euler(self.velocity, acceleration, time_step);
        self.position = explicit_euler(self.position, self.velocity, time_step);
    }

    pub fn gain_energy(&mut self, increment: f64) {
        self.energy += increment;
    }
}

/// 3次元直交座標で表す質点（3Dモデル）
#[derive(Debug, Clone, PartialEq)]
pub struct SpiralParticle {
    pub position: [f64; 3], // [x, y, z] 座標
    pub velocity: [f64; 3], // [vx, vy, vz] 速度
    pub mass: f64,          // 質量（0 は検査しない）
    pub energy: f64,        // 獲得エネルギーの累積
}

impl SpiralParticle {
    pub fn new(position: [f64; 3], velocity: [f64; 3], mass: f64) -> Self {
        SpiralParticle {
            position,
            velocity,
            mass,
            energy: 0.0,
        }
    }

    /// 力から加速度を求め、速度、位置の順に更新する
    ///
    /// `mass == 0` の場合は Inf/NaN がそのまま状態に伝播する。
    ///
    /// # 引数
    /// - `force`: 力ベクトル [Fx, Fy, Fz]
    /// - `time_step`: 時間ステップ
    pub fn update_position(&mut self, force: [f64; 3], time_step: f64) {
        let acceleration = divide(&force, self.mass);
        self.velocity = explicit_euler3(&self.velocity, &acceleration, time_step);
        self.position = explicit_euler3(&self.position, &self.velocity, time_step);
    }

    pub fn gain_energy(&mut self, increment: f64) {
        self.energy += increment;
    }
}
