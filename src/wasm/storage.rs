use web_sys::{Storage, Window};

use crate::theme::KeyValueStore;

/// `window.localStorage`, or nothing when the browser refuses access
/// (private mode, disabled cookies). Reads then miss and writes are dropped.
pub struct LocalStorage(Option<Storage>);

impl LocalStorage {
    pub fn of(window: &Window) -> Self {
        Self(window.local_storage().ok().flatten())
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = &self.0 else { return };
        if let Err(e) = storage.set_item(key, value) {
            log::warn!("could not persist {key}: {e:?}");
        }
    }
}
