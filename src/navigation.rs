//! Applies navigation requests to the photo collection.
//!
//! Every cursor change is pushed straight into a scene rebuild and an info
//! panel refresh, so whatever the renderer reads next is consistent with the
//! cursor.

use crate::{
    collection::PhotoCollection,
    config::GlobeConfig,
    gesture::{IntentQueue, NavigationIntent},
    info_panel::InfoPanel,
    photo::Photo,
    scene::{SceneGraph, SceneObjectBuilder},
};
use log::{debug, info};

/// Single writer for the photo collection and its derived views
pub struct NavigationController {
    collection: PhotoCollection,
    builder: SceneObjectBuilder,
    panel: InfoPanel,
}

impl NavigationController {
    /// Create a controller with an empty collection
    #[must_use]
    pub fn new(globe: &GlobeConfig) -> Self {
        Self {
            collection: PhotoCollection::new(),
            builder: SceneObjectBuilder::new(globe),
            panel: InfoPanel::default(),
        }
    }

    /// Replace the collection after the backend list changed
    pub fn on_collection_changed(&mut self, photos: Vec<Photo>, scene: &mut dyn SceneGraph) {
        info!("Photo collection updated: {} photos", photos.len());
        self.collection.set_all(photos);
        self.refresh(scene);
    }

    /// Replace the collection after an upload and show the newest photo
    pub fn on_upload_completed(&mut self, photos: Vec<Photo>, scene: &mut dyn SceneGraph) {
        self.collection.set_all(photos);
        self.collection.select_last();
        info!(
            "Upload completed, showing photo {:?} of {}",
            self.collection.current_index().map(|i| i + 1),
            self.collection.len()
        );
        self.refresh(scene);
    }

    /// Move by `delta` photos, as for explicit next/previous controls
    pub fn step_photo(&mut self, delta: isize, scene: &mut dyn SceneGraph) -> bool {
        if !self.collection.step(delta) {
            return false;
        }
        self.refresh(scene);
        true
    }

    /// Apply a single intent
    pub fn apply_intent(&mut self, intent: NavigationIntent, scene: &mut dyn SceneGraph) -> bool {
        debug!("Applying {intent:?}");
        self.step_photo(intent.delta(), scene)
    }

    /// Apply all queued intents in arrival order, one step and one rebuild each.
    ///
    /// Returns how many intents moved the cursor.
    pub fn apply_intents(&mut self, queue: &mut IntentQueue, scene: &mut dyn SceneGraph) -> usize {
        let mut applied = 0;
        while let Some(intent) = queue.pop() {
            if self.apply_intent(intent, scene) {
                applied += 1;
            }
        }
        applied
    }

    fn refresh(&mut self, scene: &mut dyn SceneGraph) {
        if self.collection.is_empty() {
            self.builder.clear(scene);
        } else {
            self.builder.rebuild(&self.collection, scene);
        }
        self.panel = InfoPanel::from_collection(&self.collection);
        debug!("{}", self.panel.status);
    }

    /// Photo under the cursor
    #[must_use]
    pub fn current_photo(&self) -> Option<&Photo> {
        self.collection.current()
    }

    /// The photo collection
    #[must_use]
    pub const fn collection(&self) -> &PhotoCollection {
        &self.collection
    }

    /// Current panel contents
    #[must_use]
    pub const fn info_panel(&self) -> &InfoPanel {
        &self.panel
    }

    /// Scene object builder, for inspecting live handles
    #[must_use]
    pub const fn builder(&self) -> &SceneObjectBuilder {
        &self.builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::photo::PhotoTime;
    use crate::scene::HeadlessScene;

    fn photos(n: usize) -> Vec<Photo> {
        (0..n)
            .map(|i| Photo {
                id: format!("p{i}"),
                title: format!("Photo {i}"),
                lat: 10.0 * i as f64,
                lon: -20.0 * i as f64,
                time: PhotoTime::EpochMillis(1_700_000_000_000 + i as i64),
                notes: None,
                file_ref: format!("/uploads/{i}.jpg"),
            })
            .collect()
    }

    #[test]
    fn test_intents_applied_in_order_without_collapsing() {
        let mut scene = HeadlessScene::new();
        let mut controller = NavigationController::new(&GlobeConfig::default());
        controller.on_collection_changed(photos(5), &mut scene);

        let mut queue = IntentQueue::new();
        queue.push(NavigationIntent::Advance);
        queue.push(NavigationIntent::Advance);
        queue.push(NavigationIntent::Advance);
        queue.push(NavigationIntent::Retreat);

        assert_eq!(controller.apply_intents(&mut queue, &mut scene), 4);
        assert_eq!(controller.collection().current_index(), Some(2));
        assert!(queue.is_empty());
        assert_eq!(scene.object_count(), 10);
    }

    #[test]
    fn test_empty_collection_clears_scene() {
        let mut scene = HeadlessScene::new();
        let mut controller = NavigationController::new(&GlobeConfig::default());
        controller.on_collection_changed(photos(3), &mut scene);
        assert_eq!(scene.object_count(), 6);

        controller.on_collection_changed(Vec::new(), &mut scene);
        assert_eq!(scene.object_count(), 0);
        assert!(controller.current_photo().is_none());
        assert!(controller.info_panel().card.is_none());
        assert!(!controller.step_photo(1, &mut scene));
    }

    #[test]
    fn test_upload_selects_newest() {
        let mut scene = HeadlessScene::new();
        let mut controller = NavigationController::new(&GlobeConfig::default());
        controller.on_collection_changed(photos(2), &mut scene);
        controller.on_upload_completed(photos(3), &mut scene);
        assert_eq!(controller.current_photo().unwrap().id, "p2");
        assert!(controller.info_panel().status.starts_with("Timeline 3/3"));
    }
}
