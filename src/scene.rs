//! Photo markers and trails placed on the globe.
//!
//! The graphics engine is reached through [`SceneGraph`]. The builder keeps
//! the handles of everything it created so each rebuild removes the previous
//! generation before adding the next one.

use crate::{
    collection::PhotoCollection,
    config::GlobeConfig,
    constants::{
        ACTIVE_MARKER_COLOR, ACTIVE_MARKER_OPACITY, ACTIVE_MARKER_SIZE, ACTIVE_TRAIL_COLOR, ACTIVE_TRAIL_OPACITY,
        INACTIVE_MARKER_COLOR, INACTIVE_MARKER_OPACITY, INACTIVE_MARKER_SIZE, INACTIVE_TRAIL_COLOR,
        INACTIVE_TRAIL_OPACITY,
    },
    geo::{lat_lon_to_vector, ring_anchor},
};
use log::debug;
use nalgebra::Vector3;
use std::collections::BTreeMap;

/// Handle to an object owned by the scene graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectHandle(pub u64);

/// A sphere marking a photo's location
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    /// Id of the photo this marker represents
    pub photo_id: String,
    /// Position on the marker sphere
    pub position: Vector3<f64>,
    /// Sphere radius
    pub size: f64,
    /// RGB color
    pub color: u32,
    /// Opacity (0.0-1.0)
    pub opacity: f32,
}

/// A polyline from a marker out to the timeline ring
#[derive(Debug, Clone, PartialEq)]
pub struct TrailSpec {
    /// Id of the photo this trail belongs to
    pub photo_id: String,
    /// Interpolated points, marker first, ring anchor last
    pub points: Vec<Vector3<f64>>,
    /// RGB color
    pub color: u32,
    /// Opacity (0.0-1.0)
    pub opacity: f32,
}

/// Object stored by a scene graph
#[derive(Debug, Clone, PartialEq)]
pub enum SceneObject {
    /// Photo marker
    Marker(MarkerSpec),
    /// Photo trail
    Trail(TrailSpec),
}

/// Graphics engine seam for creating and destroying positioned primitives
pub trait SceneGraph {
    /// Add a marker mesh
    fn add_marker(&mut self, marker: MarkerSpec) -> ObjectHandle;

    /// Add a line strip
    fn add_trail(&mut self, trail: TrailSpec) -> ObjectHandle;

    /// Remove a previously added object. Unknown handles are ignored.
    fn remove(&mut self, handle: ObjectHandle);

    /// Number of live objects
    fn object_count(&self) -> usize;
}

/// In-memory scene graph used when no rendering engine is attached
#[derive(Debug, Default)]
pub struct HeadlessScene {
    next_handle: u64,
    objects: BTreeMap<ObjectHandle, SceneObject>,
}

impl HeadlessScene {
    /// Create an empty scene
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, object: SceneObject) -> ObjectHandle {
        let handle = ObjectHandle(self.next_handle);
        self.next_handle += 1;
        self.objects.insert(handle, object);
        handle
    }

    /// Look up an object
    #[must_use]
    pub fn get(&self, handle: ObjectHandle) -> Option<&SceneObject> {
        self.objects.get(&handle)
    }

    /// All live markers in creation order
    pub fn markers(&self) -> impl Iterator<Item = &MarkerSpec> {
        self.objects.values().filter_map(|object| match object {
            SceneObject::Marker(marker) => Some(marker),
            SceneObject::Trail(_) => None,
        })
    }

    /// All live trails in creation order
    pub fn trails(&self) -> impl Iterator<Item = &TrailSpec> {
        self.objects.values().filter_map(|object| match object {
            SceneObject::Trail(trail) => Some(trail),
            SceneObject::Marker(_) => None,
        })
    }
}

impl SceneGraph for HeadlessScene {
    fn add_marker(&mut self, marker: MarkerSpec) -> ObjectHandle {
        self.insert(SceneObject::Marker(marker))
    }

    fn add_trail(&mut self, trail: TrailSpec) -> ObjectHandle {
        self.insert(SceneObject::Trail(trail))
    }

    fn remove(&mut self, handle: ObjectHandle) {
        self.objects.remove(&handle);
    }

    fn object_count(&self) -> usize {
        self.objects.len()
    }
}

/// Builds one marker and one trail per photo
#[derive(Debug, Clone)]
pub struct SceneObjectBuilder {
    marker_radius: f64,
    ring_radius: f64,
    trail_segments: usize,
    markers: Vec<ObjectHandle>,
    trails: Vec<ObjectHandle>,
}

impl SceneObjectBuilder {
    /// Create a builder using the configured globe geometry
    #[must_use]
    pub fn new(config: &GlobeConfig) -> Self {
        Self {
            marker_radius: config.marker_radius,
            ring_radius: config.ring_radius,
            // At least one segment so a trail always has both endpoints
            trail_segments: config.trail_segments.max(1),
            markers: Vec::new(),
            trails: Vec::new(),
        }
    }

    /// Remove everything this builder created
    pub fn clear(&mut self, scene: &mut dyn SceneGraph) {
        for handle in self.markers.drain(..).chain(self.trails.drain(..)) {
            scene.remove(handle);
        }
    }

    /// Replace all markers and trails with a fresh set for `collection`
    pub fn rebuild(&mut self, collection: &PhotoCollection, scene: &mut dyn SceneGraph) {
        self.clear(scene);

        let current = collection.current_index();
        for (idx, photo) in collection.photos().iter().enumerate() {
            let active = current == Some(idx);
            let position = lat_lon_to_vector(photo.lat, photo.lon, self.marker_radius);

            let (size, color, opacity) = if active {
                (ACTIVE_MARKER_SIZE, ACTIVE_MARKER_COLOR, ACTIVE_MARKER_OPACITY)
            } else {
                (INACTIVE_MARKER_SIZE, INACTIVE_MARKER_COLOR, INACTIVE_MARKER_OPACITY)
            };
            self.markers.push(scene.add_marker(MarkerSpec {
                photo_id: photo.id.clone(),
                position,
                size,
                color,
                opacity,
            }));

            let (color, opacity) = if active {
                (ACTIVE_TRAIL_COLOR, ACTIVE_TRAIL_OPACITY)
            } else {
                (INACTIVE_TRAIL_COLOR, INACTIVE_TRAIL_OPACITY)
            };
            self.trails.push(scene.add_trail(TrailSpec {
                photo_id: photo.id.clone(),
                points: self.trail_points(&position),
                color,
                opacity,
            }));
        }

        debug!(
            "Rebuilt {} markers and {} trails",
            self.markers.len(),
            self.trails.len()
        );
    }

    /// Points from `start` to its ring anchor, both endpoints included
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Segment counts are small
    pub fn trail_points(&self, start: &Vector3<f64>) -> Vec<Vector3<f64>> {
        let end = ring_anchor(start, self.ring_radius);
        let segments = self.trail_segments as f64;
        (0..=self.trail_segments)
            .map(|i| start.lerp(&end, i as f64 / segments))
            .collect()
    }

    /// Handles of the markers from the last rebuild
    #[must_use]
    pub fn markers(&self) -> &[ObjectHandle] {
        &self.markers
    }

    /// Handles of the trails from the last rebuild
    #[must_use]
    pub fn trails(&self) -> &[ObjectHandle] {
        &self.trails
    }
}
