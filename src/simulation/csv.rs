// src/simulation/csv.rs

use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::simulation::RecordedTrajectory;

/// CSVヘッダーの書き込み
pub fn write_csv_header<W: Write>(writer: &mut W, dimension: usize) -> Result<(), std::io::Error> {
    let mut header = String::from("step,time(s),x,y");
    if dimension == 3 {
        header.push_str(",z");
    }
    header.push('\n');
    writer.write_all(header.as_bytes())
}

/// CSV行の作成
pub fn create_csv_row(step: usize, time: f64, point: &[f64]) -> String {
    let mut row = format!("{},{}", step, time);
    for component in point {
        row.push_str(&format!(",{}", component));
    }
    row.push('\n');
    row
}

/// 軌跡全体をヘッダー付きで書き込む
///
/// 各行の時刻はステップ番号 × `time_step`。
pub fn write_trajectory<W: Write>(
    writer: &mut W,
    trajectory: &RecordedTrajectory,
    time_step: f64,
) -> Result<(), std::io::Error> {
    write_csv_header(writer, trajectory.dimension())?;
    match trajectory {
        RecordedTrajectory::Planar(t) => {
            for (step, point) in t.points().iter().enumerate() {
                let row = create_csv_row(step, step as f64 * time_step, point);
                writer.write_all(row.as_bytes())?;
            }
        }
        RecordedTrajectory::Spatial(t) => {
            for (step, point) in t.points().iter().enumerate() {
                let row = create_csv_row(step, step as f64 * time_step, point);
                writer.write_all(row.as_bytes())?;
            }
        }
    }
    Ok(())
}

/// ファイルへの軌跡出力
pub fn write_trajectory_csv<P: AsRef<Path>>(
    path: P,
    trajectory: &RecordedTrajectory,
    time_step: f64,
) -> Result<(), Box<dyn Error>> {
    let output_file = File::create(path)?;
    let mut writer = BufWriter::new(output_file);
    write_trajectory(&mut writer, trajectory, time_step)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AngularParticle, RingAccelerator, SpiralAccelerator, SpiralParticle};

    #[test]
    fn test_header_by_dimension() {
        let mut planar = Vec::new();
        write_csv_header(&mut planar, 2).unwrap();
        assert_eq!(String::from_utf8(planar).unwrap(), "step,time(s),x,y\n");

        let mut spatial = Vec::new();
        write_csv_header(&mut spatial, 3).unwrap();
        assert_eq!(String::from_utf8(spatial).unwrap(), "step,time(s),x,y,z\n");
    }

    #[test]
    fn test_create_csv_row() {
        assert_eq!(create_csv_row(3, 0.25, &[1.5, -2.0]), "3,0.25,1.5,-2\n");
        assert_eq!(create_csv_row(0, 0.0, &[f64::NAN, 0.0, 1.0]), "0,0,NaN,0,1\n");
    }

    #[test]
    fn test_write_planar_trajectory() {
        let mut ring = RingAccelerator::new(10.0, AngularParticle::new(0.0, 0.5, 1.0), 0.1);
        let trajectory = RecordedTrajectory::Planar(ring.simulate(0.5, 0.25).unwrap());

        let mut buffer = Vec::new();
        write_trajectory(&mut buffer, &trajectory, 0.25).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "step,time(s),x,y");
        assert_eq!(lines[1], "0,0,10,0");
        assert!(lines[2].starts_with("1,0.25,"));
    }

    #[test]
    fn test_write_spatial_trajectory_row_count() {
        let mut spiral = SpiralAccelerator::new(
            10.0,
            50.0,
            SpiralParticle::new([10.0, 0.0, 0.0], [0.0, 1.0, 0.1], 1.0),
            0.1,
        );
        let trajectory = RecordedTrajectory::Spatial(spiral.simulate(1.0, 0.05).unwrap());

        let mut buffer = Vec::new();
        write_trajectory(&mut buffer, &trajectory, 0.05).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert_eq!(text.lines().count(), 21);
        assert!(text
            .lines()
            .skip(1)
            .all(|line| line.split(',').count() == 5));
    }
}
