//! Image resources keyed by symbolic id
//!
//! Decoding is the host's job: it supplies a [`ResourceLoader`] that turns an
//! id into its own image handle type. [`Resources`] loads each id at most once
//! and owns every handle; the simulation only ever stores a [`ResourceId`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every image the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceId {
    Submarine,
    Title,
    GameOver,
    Win,
    Coin,
    Bomb,
    Font,
}

impl ResourceId {
    pub const ALL: [ResourceId; 7] = [
        ResourceId::Submarine,
        ResourceId::Title,
        ResourceId::GameOver,
        ResourceId::Win,
        ResourceId::Coin,
        ResourceId::Bomb,
        ResourceId::Font,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceId::Submarine => "submarine",
            ResourceId::Title => "title",
            ResourceId::GameOver => "gameover",
            ResourceId::Win => "win",
            ResourceId::Coin => "coin",
            ResourceId::Bomb => "bomb",
            ResourceId::Font => "handdrawn_font",
        }
    }

    /// Asset path relative to the asset root
    pub fn path(&self) -> String {
        format!("assets/images/{}.png", self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("failed to read resource {id:?}: {source}")]
    Read {
        id: ResourceId,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode resource {id:?}: {reason}")]
    Decode { id: ResourceId, reason: String },
}

/// Host-side image loading
pub trait ResourceLoader {
    type Image;

    fn load(&mut self, id: ResourceId) -> Result<Self::Image, ResourceError>;
}

/// Load-once image cache
#[derive(Debug)]
pub struct Resources<I> {
    cache: HashMap<ResourceId, I>,
}

impl<I> Default for Resources<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> Resources<I> {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Load every resource, skipping (and logging) the ones that fail
    pub fn preload<L>(loader: &mut L) -> Self
    where
        L: ResourceLoader<Image = I>,
    {
        let mut resources = Self::new();
        for id in ResourceId::ALL {
            resources.load(loader, id);
        }
        log::info!(
            "Preloaded {}/{} resources",
            resources.len(),
            ResourceId::ALL.len()
        );
        resources
    }

    /// Load a single resource unless it is already cached. Returns whether the
    /// resource is available afterwards.
    pub fn load<L>(&mut self, loader: &mut L, id: ResourceId) -> bool
    where
        L: ResourceLoader<Image = I>,
    {
        if self.cache.contains_key(&id) {
            return true;
        }
        match loader.load(id) {
            Ok(image) => {
                log::debug!("Loaded resource: {}", id.as_str());
                self.cache.insert(id, image);
                true
            }
            Err(e) => {
                log::warn!("{e}");
                false
            }
        }
    }

    /// Borrow a handle; `None` means draw nothing or a fallback
    pub fn get(&self, id: ResourceId) -> Option<&I> {
        self.cache.get(&id)
    }

    pub fn is_loaded(&self, id: ResourceId) -> bool {
        self.cache.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
        log::info!("Resource cache cleared");
    }
}
