use std::path::PathBuf;

use once_cell::sync::Lazy;

use crate::file_entry::ManifestEntry;

/// Where the Unity build lives and which artifacts we unpack there.
#[derive(Debug, Clone)]
pub struct GunzipConfig {
    pub build_dir: PathBuf,
    pub manifest: Vec<ManifestEntry>,
}

pub static CONFIG: Lazy<GunzipConfig> = Lazy::new(gunzip_config);

const BUILD_DIR: &str = r"a:\websites\aishi_games_web\quick-games\brick-smasher\Build";

const MANIFEST: [&str; 3] = [
    "strong.data.gz",
    "strong.framework.js.gz",
    "strong.wasm.gz",
];

fn gunzip_config() -> GunzipConfig {
    let manifest: Vec<ManifestEntry> = MANIFEST.iter().map(|name| ManifestEntry::new(*name)).collect();

    log::debug!("[gunzip_config] build_dir: {}", BUILD_DIR);
    log::debug!("[gunzip_config] manifest: {} entries", manifest.len());

    GunzipConfig {
        build_dir: PathBuf::from(BUILD_DIR),
        manifest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_is_fixed_and_ordered() {
        let names: Vec<&str> = CONFIG.manifest.iter().map(|e| e.name()).collect();
        assert_eq!(names, ["strong.data.gz", "strong.framework.js.gz", "strong.wasm.gz"]);
        assert!(CONFIG.build_dir.to_string_lossy().ends_with(r"brick-smasher\Build"));
    }
}
