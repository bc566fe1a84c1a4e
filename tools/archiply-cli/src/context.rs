//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use archiply_cache::FileStore;
use archiply_commerce::catalog::Catalog;
use archiply_storefront::{Storefront, StorefrontConfig};

use crate::output::Output;

/// Config file names searched for, in order, from the working directory up.
pub const CONFIG_NAMES: [&str; 3] = ["archiply.toml", ".archiply.toml", "archiply.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// Storefront configuration.
    pub config: StorefrontConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = resolve(&cwd, path);
            (StorefrontConfig::load(&path)?, Some(path))
        } else {
            // Try to find config in current directory or parent directories
            match find_config(&cwd) {
                Some(path) => (StorefrontConfig::load(&path)?, Some(path)),
                None => (StorefrontConfig::default(), None),
            }
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Directory the cart is persisted in.
    ///
    /// Relative paths are taken from the directory holding the config file,
    /// or the working directory when running without one.
    pub fn storage_dir(&self) -> PathBuf {
        let base = self
            .config_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(&self.cwd);
        resolve(base, &self.config.storage.dir)
    }

    /// Open the storefront over the persisted cart.
    pub fn storefront(&self) -> Result<Storefront<FileStore>> {
        let mut config = self.config.clone();
        config.storage.dir = self.storage_dir();
        tracing::debug!(
            dir = %config.storage.dir.display(),
            key = %config.storage.key,
            "opening cart storage"
        );
        Storefront::open(config, Catalog::furniture())
    }
}

/// Find config file in directory tree.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}

fn resolve(base: &Path, path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("archiply.toml"), "").unwrap();

        assert_eq!(find_config(&nested), Some(dir.path().join("archiply.toml")));
    }

    #[test]
    fn test_storage_dir_relative_to_config() {
        let ctx = Context {
            config: StorefrontConfig::default(),
            config_path: Some(PathBuf::from("/srv/shop/archiply.toml")),
            output: Output::new(false),
            cwd: PathBuf::from("/home/me"),
        };
        assert_eq!(ctx.storage_dir(), PathBuf::from("/srv/shop/.archiply"));

        let ctx = Context {
            config_path: None,
            ..ctx
        };
        assert_eq!(ctx.storage_dir(), PathBuf::from("/home/me/.archiply"));
    }

    #[test]
    fn test_storefront_opens_storage_next_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = StorefrontConfig::default();
        config.storage.dir = PathBuf::from("cart");
        let ctx = Context {
            config,
            config_path: Some(dir.path().join("archiply.toml")),
            output: Output::new(true),
            cwd: PathBuf::from("/nonexistent"),
        };

        let storefront = ctx.storefront().unwrap();
        assert!(storefront.cart().cart().is_empty());
        assert_eq!(storefront.config().storage.dir, dir.path().join("cart"));
        assert!(dir.path().join("cart").is_dir());
    }
}
