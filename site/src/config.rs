use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub host: String,
    pub port: u16,
    /// Trunk output with index.html at its root
    pub dist_dir: PathBuf,
    pub assets_dir: PathBuf,
}

impl SiteConfig {
    /// Reads `SITE_*` variables, falling back to the layout used by `trunk build`
    /// run from `ui/` (bundle in `../dist`, assets in `../assets`).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")); // = site/

        let host = lookup("SITE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());

        let port = match lookup("SITE_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("SITE_PORT is not a valid port: {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let dist_dir = lookup("SITE_DIST")
            .map(PathBuf::from)
            .unwrap_or_else(|| root.join("../dist"));
        let assets_dir = lookup("SITE_ASSETS")
            .map(PathBuf::from)
            .unwrap_or_else(|| root.join("../assets"));

        Ok(Self {
            host,
            port,
            dist_dir,
            assets_dir,
        })
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = SiteConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 3000);
        assert!(cfg.dist_dir.ends_with("../dist"));
        assert!(cfg.assets_dir.ends_with("../assets"));
    }

    #[test]
    fn overrides_are_respected() {
        let cfg = SiteConfig::from_lookup(lookup_from(&[
            ("SITE_HOST", "0.0.0.0"),
            ("SITE_PORT", "8080"),
            ("SITE_DIST", "/srv/crossfire"),
        ]))
        .unwrap();

        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.index_file(), PathBuf::from("/srv/crossfire/index.html"));
    }

    #[test]
    fn bad_port_is_an_error() {
        let err = SiteConfig::from_lookup(lookup_from(&[("SITE_PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("SITE_PORT"));
    }
}
