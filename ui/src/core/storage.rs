//! Device-local persistence for the signed-in user record.
//!
//! The record is the backend's user JSON stored verbatim under [`USER_KEY`]:
//! `localStorage` in the browser, a small file in the platform data
//! directory on desktop.

use std::cell::RefCell;

use api::User;
use thiserror::Error;
use tracing::warn;

/// Fixed key (browser) / file stem (desktop) of the persisted user.
pub const USER_KEY: &str = "user";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not encode user record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Raw string slot holding the serialized user.
pub trait UserStore {
    fn read(&self) -> Result<Option<String>, StorageError>;
    fn write(&self, raw: &str) -> Result<(), StorageError>;
    fn remove(&self) -> Result<(), StorageError>;
}

/// Load the persisted user. Missing, unreadable or corrupt records all mean
/// "nobody is signed in".
pub fn load_user(store: &impl UserStore) -> Option<User> {
    let raw = match store.read() {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            warn!("Couldn't read stored user: {err}");
            return None;
        }
    };
    match serde_json::from_str::<User>(&raw) {
        Ok(user) => Some(user),
        Err(err) => {
            warn!("Ignoring unparsable stored user: {err}");
            None
        }
    }
}

pub fn save_user(store: &impl UserStore, user: &User) -> Result<(), StorageError> {
    let raw = serde_json::to_string(user)?;
    store.write(&raw)
}

pub fn clear_user(store: &impl UserStore) -> Result<(), StorageError> {
    store.remove()
}

/// In-process slot, used when no device storage is reachable and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(raw.into())),
        }
    }
}

impl UserStore for MemoryStore {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.slot.borrow().clone())
    }

    fn write(&self, raw: &str) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = Some(raw.to_string());
        Ok(())
    }

    fn remove(&self) -> Result<(), StorageError> {
        self.slot.borrow_mut().take();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore as PlatformStore;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore as PlatformStore;

/// Storage backing the session on the current platform.
pub fn platform_store() -> Result<PlatformStore, StorageError> {
    PlatformStore::open()
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{StorageError, UserStore, USER_KEY};

    /// `window.localStorage`
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserStore;

    impl BrowserStore {
        pub fn open() -> Result<Self, StorageError> {
            storage().map(|_| Self)
        }
    }

    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".into()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".into()))
    }

    impl UserStore for BrowserStore {
        fn read(&self) -> Result<Option<String>, StorageError> {
            storage()?
                .get_item(USER_KEY)
                .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
        }

        fn write(&self, raw: &str) -> Result<(), StorageError> {
            storage()?
                .set_item(USER_KEY, raw)
                .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
        }

        fn remove(&self) -> Result<(), StorageError> {
            storage()?
                .remove_item(USER_KEY)
                .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use directories::ProjectDirs;

    use super::{StorageError, UserStore, USER_KEY};

    /// `<data dir>/user.json`
    #[derive(Debug, Clone)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub fn open() -> Result<Self, StorageError> {
            let dirs = ProjectDirs::from("app", "ParkAll", "ParkAll").ok_or_else(|| {
                StorageError::Unavailable("no home directory for this user".into())
            })?;
            Ok(Self::at(dirs.data_dir()))
        }

        pub fn at(dir: &Path) -> Self {
            Self {
                path: dir.join(format!("{USER_KEY}.json")),
            }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl UserStore for FileStore {
        fn read(&self) -> Result<Option<String>, StorageError> {
            match fs::read_to_string(&self.path) {
                Ok(raw) => Ok(Some(raw)),
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
                Err(err) => Err(err.into()),
            }
        }

        fn write(&self, raw: &str) -> Result<(), StorageError> {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, raw)?;
            Ok(())
        }

        fn remove(&self) -> Result<(), StorageError> {
            match fs::remove_file(&self.path) {
                Ok(()) => Ok(()),
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
                Err(err) => Err(err.into()),
            }
        }
    }
}
