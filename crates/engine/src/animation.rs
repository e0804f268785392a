//! Animation: the frame loop around a [`Scene`].

use std::convert::Infallible;
use std::time::Duration;

use anyhow::Result;
use tracing::{info, warn};

use crate::core::{FrameBuffer, FrameStats, Scene};
use crate::surface::Surface;
use crate::types::{ConfigError, RenderConfig};

/// Rotating-cube animation state.
///
/// The angle only ever grows; it feeds trigonometry, so it never needs
/// wrapping.
#[derive(Debug, Clone)]
pub struct Animation {
    scene: Scene,
    fb: FrameBuffer,
    angle: f32,
    angle_step: f32,
    frame_interval: Duration,
    frames: u64,
}

impl Animation {
    pub fn new(config: &RenderConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let scene = Scene::from_config(config);
        info!(
            width = config.width,
            height = config.height,
            fps = config.fps,
            angle_step = config.angle_step,
            projection = config.projection.as_str(),
            samples_per_axis = scene.samples_per_axis(),
            "animation configured"
        );

        Ok(Self {
            scene,
            fb: FrameBuffer::new(config.width, config.height),
            angle: 0.0,
            angle_step: config.angle_step,
            frame_interval: config.frame_interval(),
            frames: 0,
        })
    }

    /// Angle the next frame will be rendered at.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Frames completed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The most recently rendered frame.
    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.fb
    }

    /// Render, clear, present, sleep, then advance the angle.
    ///
    /// On a surface error the angle is left where it was.
    pub fn step<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<FrameStats> {
        let stats = self.scene.render_into(self.angle, &mut self.fb);
        if stats.clipped > 0 {
            warn!(
                frame = self.frames,
                clipped = stats.clipped,
                "samples fell outside the grid"
            );
        }

        surface.clear_screen()?;
        surface.present(&self.fb)?;
        surface.sleep(self.frame_interval);

        self.angle += self.angle_step;
        self.frames += 1;
        Ok(stats)
    }

    /// Run exactly `n` frames.
    pub fn run_frames<S: Surface + ?Sized>(&mut self, surface: &mut S, n: u64) -> Result<()> {
        for _ in 0..n {
            self.step(surface)?;
        }
        Ok(())
    }

    /// Run until the surface fails. There is no other way out.
    pub fn run<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<Infallible> {
        loop {
            self.step(surface)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Clear,
        Present { brightest: usize },
        Sleep(Duration),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
        fail_present_after: Option<usize>,
    }

    impl Surface for Recorder {
        fn clear_screen(&mut self) -> Result<()> {
            self.calls.push(Call::Clear);
            Ok(())
        }

        fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
            let presented = self
                .calls
                .iter()
                .filter(|c| matches!(c, Call::Present { .. }))
                .count();
            if self.fail_present_after == Some(presented) {
                bail!("terminal went away");
            }
            self.calls.push(Call::Present {
                brightest: fb.count('@'),
            });
            Ok(())
        }

        fn sleep(&mut self, interval: Duration) {
            self.calls.push(Call::Sleep(interval));
        }
    }

    #[test]
    fn step_orders_side_effects() {
        let mut anim = Animation::new(&RenderConfig::orthographic()).unwrap();
        let mut rec = Recorder::default();
        anim.step(&mut rec).unwrap();

        assert_eq!(rec.calls.len(), 3);
        assert_eq!(rec.calls[0], Call::Clear);
        assert!(matches!(rec.calls[1], Call::Present { brightest } if brightest > 0));
        assert_eq!(rec.calls[2], Call::Sleep(Duration::from_millis(40)));
    }

    #[test]
    fn angle_accumulates_by_fixed_step() {
        let config = RenderConfig::perspective();
        let mut anim = Animation::new(&config).unwrap();
        let mut rec = Recorder::default();

        anim.run_frames(&mut rec, 25).unwrap();
        assert_eq!(anim.frames(), 25);
        assert!((anim.angle() - 25.0 * config.angle_step).abs() < 1e-4);
        assert_eq!(rec.calls.len(), 75);
    }

    #[test]
    fn surface_error_stops_without_advancing() {
        let mut anim = Animation::new(&RenderConfig::orthographic()).unwrap();
        let mut rec = Recorder {
            fail_present_after: Some(2),
            ..Default::default()
        };

        let err = anim.run(&mut rec).unwrap_err();
        assert!(err.to_string().contains("terminal went away"));
        assert_eq!(anim.frames(), 2);
        assert!((anim.angle() - 0.12).abs() < 1e-6);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = RenderConfig {
            fps: 0,
            ..RenderConfig::orthographic()
        };
        assert_eq!(Animation::new(&config).unwrap_err(), ConfigError::ZeroFps);
    }
}
