//! Trajectory recording for the headless walk

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use stride_game::{Grounding, KinematicBody};

/// Body state after one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySample {
    pub frame: u32,
    /// Simulated seconds since start
    pub time: f64,
    pub position: [f32; 3],
    pub velocity: [f32; 3],
    pub grounding: Grounding,
}

/// Every frame of a run, in order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Trajectory {
    pub samples: Vec<TrajectorySample>,
}

impl Trajectory {
    pub fn record(&mut self, frame: u32, time: f64, body: KinematicBody, grounding: Grounding) {
        self.samples.push(TrajectorySample {
            frame,
            time,
            position: body.position.to_array(),
            velocity: body.velocity.to_array(),
            grounding,
        });
    }

    /// Lowest eye height reached during the run
    pub fn min_height(&self) -> Option<f32> {
        self.samples
            .iter()
            .map(|sample| sample.position[1])
            .reduce(f32::min)
    }

    /// Write the trajectory as pretty JSON
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create trajectory file {:?}", path))?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)
            .context("Failed to write trajectory")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn records_samples_in_order() {
        let mut trajectory = Trajectory::default();
        assert_eq!(trajectory.min_height(), None);

        trajectory.record(0, 0.0, KinematicBody::at(Vec3::new(0.0, 12.0, 0.0)), Grounding::Airborne);
        trajectory.record(1, 0.1, KinematicBody::at(Vec3::new(0.0, 10.0, 1.0)), Grounding::Grounded);

        assert_eq!(trajectory.samples.len(), 2);
        assert_eq!(trajectory.samples[1].position, [0.0, 10.0, 1.0]);
        assert_eq!(trajectory.min_height(), Some(10.0));
    }

    #[test]
    fn serializes_to_json() {
        let mut trajectory = Trajectory::default();
        trajectory.record(3, 0.05, KinematicBody::at(Vec3::new(1.0, 10.0, 2.0)), Grounding::Grounded);

        let json = serde_json::to_string(&trajectory).unwrap();
        assert!(json.contains("\"grounding\":\"Grounded\""));

        let parsed: Trajectory = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.samples, trajectory.samples);
    }
}
