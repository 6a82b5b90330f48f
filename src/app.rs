//! Main application module for the particle album.
//!
//! One cooperative loop owns every piece of mutable state: the photo
//! collection (through the navigation controller), the gesture interpreter and
//! the camera session. Each display frame polls whatever landmark frames are
//! ready, turns them into intents, applies the intents with their rebuilds and
//! then advances the backdrop animation.

use crate::{
    camera::{CameraSession, CameraState},
    config::Config,
    error::Result,
    gesture::{GestureInterpreter, GestureSample, IntentQueue},
    info_panel::InfoPanel,
    landmarks::LandmarkSource,
    navigation::NavigationController,
    photo::Photo,
    render_loop::{FramePacer, SceneAnimation},
    scene::SceneGraph,
};
use log::{debug, info};
use std::time::{Duration, Instant};

/// Summary of one rendered frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Landmark frames interpreted during this display frame
    pub gesture_frames: usize,
    /// Intents that moved the cursor
    pub intents_applied: usize,
    /// Objects in the scene after the frame
    pub scene_objects: usize,
}

/// Main application struct
pub struct AlbumApp {
    config: Config,
    navigation: NavigationController,
    interpreter: GestureInterpreter,
    intents: IntentQueue,
    camera: CameraSession,
    scene: Box<dyn SceneGraph>,
    animation: SceneAnimation,
}

impl AlbumApp {
    /// Create the application around a landmark source and a scene graph
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: Config, source: Box<dyn LandmarkSource>, scene: Box<dyn SceneGraph>) -> Result<Self> {
        info!("Initializing particle album");
        config.validate()?;

        let interpreter = GestureInterpreter::new(&config.gesture)?;
        info!(
            "Gesture thresholds: swipe {:.3}, pinch {:.3}, debounce {}ms, smoothing {}",
            config.gesture.swipe_threshold,
            config.gesture.pinch_threshold,
            config.gesture.pinch_debounce_ms,
            config.gesture.smoothing
        );

        Ok(Self {
            navigation: NavigationController::new(&config.globe),
            interpreter,
            intents: IntentQueue::new(),
            camera: CameraSession::new(source, config.camera.clone()),
            scene,
            animation: SceneAnimation::default(),
            config,
        })
    }

    /// Start gesture recognition (the explicit user action)
    ///
    /// # Errors
    ///
    /// Returns an error if the camera could not be started. The app stays
    /// usable and the start can be retried.
    pub fn start_camera(&mut self) -> Result<()> {
        self.camera.start(&mut self.interpreter)
    }

    /// Stop gesture recognition
    pub fn stop_camera(&mut self) {
        self.camera.stop(&mut self.interpreter);
    }

    /// Camera session state
    #[must_use]
    pub const fn camera_state(&self) -> &CameraState {
        self.camera.state()
    }

    /// The backend photo list changed
    pub fn on_collection_changed(&mut self, photos: Vec<Photo>) {
        self.navigation.on_collection_changed(photos, self.scene.as_mut());
    }

    /// An upload succeeded and the backend list was refetched
    pub fn on_upload_completed(&mut self, photos: Vec<Photo>) {
        self.navigation.on_upload_completed(photos, self.scene.as_mut());
    }

    /// Step through the timeline from a UI control
    pub fn step_photo(&mut self, delta: isize) -> bool {
        self.navigation.step_photo(delta, self.scene.as_mut())
    }

    /// Feed one landmark frame and apply the resulting intents.
    ///
    /// Returns the number of cursor steps taken.
    pub fn on_gesture_frame(&mut self, timestamp: Duration, sample: Option<&GestureSample>) -> usize {
        self.interpreter.process(timestamp, sample, &mut self.intents);
        self.navigation.apply_intents(&mut self.intents, self.scene.as_mut())
    }

    /// Run one display frame at session time `now`
    pub fn tick(&mut self, now: Duration) -> FrameStats {
        let mut stats = FrameStats::default();

        while let Some((timestamp, sample)) = self.camera.poll(now) {
            self.interpreter.process(timestamp, sample.as_ref(), &mut self.intents);
            stats.gesture_frames += 1;
        }
        stats.intents_applied = self.navigation.apply_intents(&mut self.intents, self.scene.as_mut());

        self.animation.advance(now);
        stats.scene_objects = self.scene.object_count();

        if stats.intents_applied > 0 {
            debug!("{}", self.navigation.info_panel().status);
        }
        stats
    }

    /// Run the main loop until the frame limit is hit or the gesture source
    /// has nothing more to deliver
    ///
    /// # Errors
    ///
    /// Currently always succeeds; returns `Result` for API consistency.
    pub fn run(&mut self) -> Result<()> {
        info!("Starting main application loop");
        let mut pacer = FramePacer::new(self.config.render.target_fps);

        loop {
            if let Some(max) = self.config.render.max_frames {
                if pacer.frame_count() >= max {
                    info!("Frame limit of {max} reached");
                    break;
                }
            } else if self.camera.state() != &CameraState::Running {
                info!("No gesture source running, leaving the render loop");
                break;
            }
            if self.camera.is_finished() {
                info!("End of gesture trace reached");
                break;
            }

            let frame_start = Instant::now();
            let stats = self.tick(pacer.elapsed());
            if stats.gesture_frames > 0 {
                debug!(
                    "Frame {}: {} gesture frames, {} steps, {} objects",
                    pacer.frame_count(),
                    stats.gesture_frames,
                    stats.intents_applied,
                    stats.scene_objects
                );
            }

            let idle = pacer.finish_frame(frame_start);
            if !idle.is_zero() {
                std::thread::sleep(idle);
            }
        }

        info!(
            "Application shutting down after {} frames ({:.1} fps)",
            pacer.frame_count(),
            pacer.fps()
        );
        Ok(())
    }

    /// Photo under the cursor
    #[must_use]
    pub fn current_photo(&self) -> Option<&Photo> {
        self.navigation.current_photo()
    }

    /// Current info panel contents
    #[must_use]
    pub const fn info_panel(&self) -> &InfoPanel {
        self.navigation.info_panel()
    }

    /// Navigation controller
    #[must_use]
    pub const fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    /// Backdrop animation state
    #[must_use]
    pub const fn animation(&self) -> &SceneAnimation {
        &self.animation
    }

    /// Scene graph
    #[must_use]
    pub fn scene(&self) -> &dyn SceneGraph {
        self.scene.as_ref()
    }
}
