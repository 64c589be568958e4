// src/models/accelerator.rs

use std::f64::consts::TAU;

use log::debug;

use crate::math::{step_count, MathError};
use crate::math::vector::{add, norm_squared, planar_inward_unit, scale};
use crate::models::particle::{AngularParticle, SpiralParticle};
use crate::models::trajectory::{Point2, Point3, Trajectory};

/// 円形加速器モデルで粒子に与える一定の加速度
pub const RING_DRIVE_ACCELERATION: f64 = 0.01;

/// 螺旋モデルで質量あたりに加える鉛直方向の力
pub const VERTICAL_DRIFT_PER_MASS: f64 = 0.1;

/// 2D 円形加速器
///
/// 粒子の弧長スカラーを半径で割った角度から表示座標を求める。
/// 表示座標は粒子の状態へは戻されない。
#[derive(Debug, Clone, PartialEq)]
pub struct RingAccelerator {
    pub radius: f64,
    pub energy_increment: f64,
    particle: AngularParticle,
}

impl RingAccelerator {
    pub fn new(radius: f64, particle: AngularParticle, energy_increment: f64) -> Self {
        RingAccelerator {
            radius,
            energy_increment,
            particle,
        }
    }

    pub fn particle(&self) -> &AngularParticle {
        &self.particle
    }

    /// 現在の粒子位置に対応する角度 [0, 2π)
    pub fn angle(&self) -> f64 {
        (self.particle.position / self.radius).rem_euclid(TAU)
    }

    /// 現在の角度を半径 `radius` の円周上に射影した表示座標
    pub fn display_point(&self) -> Point2 {
        let angle = self.angle();
        [self.radius * angle.cos(), self.radius * angle.sin()]
    }

    /// `[0, total_time)` の各ステップで表示座標を記録してから粒子を進める
    ///
    /// 呼び出しごとに粒子はリセットされず、前回の終状態から続行する。
    pub fn simulate(
        &mut self,
        total_time: f64,
        time_step: f64,
    ) -> Result<Trajectory<Point2>, MathError> {
        let steps = step_count(total_time, time_step)?;
        debug!(
            "円形加速器: total_time={} time_step={} steps={}",
            total_time, time_step, steps
        );

        let mut trajectory = Trajectory::with_capacity(steps.min(PREALLOCATED_POINTS));
        for _ in 0..steps {
            trajectory.record(self.display_point());

            self.particle
                .update_position(RING_DRIVE_ACCELERATION, time_step);
            self.particle.gain_energy(self.energy_increment);
        }
        Ok(trajectory)
    }
}

/// 軌跡バッファの事前確保の上限
const PREALLOCATED_POINTS: usize = 1 << 16;

/// 3D 螺旋加速器
///
/// 向心力と一定の鉛直ドリフトで粒子を螺旋状に上昇させる。
#[derive(Debug, Clone, PartialEq)]
pub struct SpiralAccelerator {
    pub radius: f64,
    pub length: f64, // 力の計算には使われない
    pub energy_increment: f64,
    particle: SpiralParticle,
}

impl SpiralAccelerator {
    pub fn new(
        radius: f64,
        length: f64,
        particle: SpiralParticle,
        energy_increment: f64,
    ) -> Self {
        SpiralAccelerator {
            radius,
            length,
            energy_increment,
            particle,
        }
    }

    pub fn particle(&self) -> &SpiralParticle {
        &self.particle
    }

    /// 現在の状態から計算した合力
    ///
    /// - 大きさ `m |v|^2 / r` の向心力（XY平面内で原点方向）
    /// - 鉛直ドリフト `(0, 0, 0.1 m)`
    ///
    /// XY位置が原点にある場合は NaN になる。
    pub fn centripetal_force(&self) -> [f64; 3] {
        let p = &self.particle;
        let force_magnitude = p.mass * norm_squared(&p.velocity) / self.radius;
        let force = scale(&planar_inward_unit(&p.position), force_magnitude);
        add(&force, &[0.0, 0.0, VERTICAL_DRIFT_PER_MASS * p.mass])
    }

    /// `[0, total_time)` の各ステップで、更新前の状態から力を求めて粒子を進め、
    /// 更新後の位置を記録する
    ///
    /// 呼び出しごとに粒子はリセットされず、前回の終状態から続行する。
    pub fn simulate(
        &mut self,
        total_time: f64,
        time_step: f64,
    ) -> Result<Trajectory<Point3>, MathError> {
        let steps = step_count(total_time, time_step)?;
        debug!(
            "螺旋加速器: total_time={} time_step={} steps={}",
            total_time, time_step, steps
        );

        let mut trajectory = Trajectory::with_capacity(steps.min(PREALLOCATED_POINTS));
        for _ in 0..steps {
            let force = self.centripetal_force();

            self.particle.update_position(force, time_step);
            self.particle.gain_energy(self.energy_increment);

            trajectory.record(self.particle.position);
        }
        Ok(trajectory)
    }
}
