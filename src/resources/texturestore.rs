//! Texture store resource.
//!
//! A non-send resource holding every texture the scene draws, keyed by
//! string IDs. Textures are loaded once during setup and released with
//! [`TextureStore::clear`] on shutdown, before the raylib window closes.
//!
//! Loading hands back a [`SpriteSheet`] describing the texture so game code
//! can slice it without touching raylib.

use log::info;
use raylib::prelude::*;
use rustc_hash::FxHashMap;

use crate::components::spritesheet::SpriteSheet;

// NonSend resource: insert with insert_non_send_resource and access via NonSend/NonSendMut
pub struct TextureStore {
    textures: FxHashMap<String, Texture2D>,
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureStore {
    pub fn new() -> Self {
        Self {
            textures: FxHashMap::default(),
        }
    }

    /// Load `path` under `key` and describe it as a sheet.
    pub fn load(
        &mut self,
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        key: &str,
        path: &str,
    ) -> Result<SpriteSheet, String> {
        let texture = rl
            .load_texture(th, path)
            .map_err(|e| format!("Failed to load texture '{}' from {}: {:?}", key, path, e))?;
        let sheet = SpriteSheet::new(key, texture.width as u32, texture.height as u32);
        info!(
            "Loaded texture '{}' ({}x{}) from {}",
            key, sheet.width, sheet.height, path
        );
        self.textures.insert(key.to_string(), texture);
        Ok(sheet)
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<&Texture2D> {
        self.textures.get(key.as_ref())
    }

    /// Release all textures.
    pub fn clear(&mut self) {
        info!("Unloading {} textures", self.textures.len());
        self.textures.clear();
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
