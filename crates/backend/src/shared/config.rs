use serde::Deserialize;

/// Application configuration
///
/// Sections:
/// - `[server]`: bind address and the built frontend directory
/// - `[contentful]`: CMS space, environment and access token
/// - `[site]`: public URL and served locales (first one is the default)
/// - `[sitemap]`: output path of the sitemap binary
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub contentful: ContentfulConfig,
    pub site: SiteConfig,
    #[serde(default)]
    pub sitemap: SitemapConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Built frontend served for every non-API path
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContentfulConfig {
    #[serde(default)]
    pub space_id: String,
    #[serde(default)]
    pub access_token: String,
    #[serde(default = "default_environment")]
    pub environment: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// How long fetched listings are reused before asking the CMS again
    #[serde(default = "default_revalidate_secs")]
    pub revalidate_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Public base URL, no trailing slash
    pub url: String,
    /// First entry is the default locale
    pub locales: Vec<String>,
    #[serde(default = "default_static_pages")]
    pub static_pages: Vec<String>,
}

impl SiteConfig {
    pub fn default_locale(&self) -> &str {
        self.locales
            .first()
            .map(String::as_str)
            .unwrap_or(contracts::shared::locale::DEFAULT_LOCALE)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SitemapConfig {
    #[serde(default = "default_sitemap_path")]
    pub output_path: String,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            output_path: default_sitemap_path(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "dist".to_string()
}

fn default_environment() -> String {
    "master".to_string()
}

fn default_base_url() -> String {
    "https://cdn.contentful.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_revalidate_secs() -> u64 {
    60
}

fn default_static_pages() -> Vec<String> {
    vec![String::new(), "/recipes".to_string()]
}

fn default_sitemap_path() -> String {
    "public/sitemap.xml".to_string()
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"

[contentful]
environment = "master"
base_url = "https://cdn.contentful.com"

[site]
url = "http://localhost:3000"
locales = ["en", "es", "fr"]
static_pages = ["", "/recipes"]

[sitemap]
output_path = "public/sitemap.xml"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// Environment variables are applied on top in both cases.
pub fn load_config() -> anyhow::Result<Config> {
    let contents = read_config_file().unwrap_or_else(|| {
        tracing::info!("Using default embedded configuration");
        DEFAULT_CONFIG.to_string()
    });

    let mut config = parse_config(&contents)?;
    config.apply_env_overrides(|key| std::env::var(key).ok());
    config.validate()?;
    Ok(config)
}

fn read_config_file() -> Option<String> {
    let exe_path = std::env::current_exe().ok()?;
    let config_path = exe_path.parent()?.join("config.toml");

    if !config_path.exists() {
        tracing::warn!("config.toml not found at: {}", config_path.display());
        return None;
    }

    tracing::info!("Loading config from: {}", config_path.display());
    match std::fs::read_to_string(&config_path) {
        Ok(contents) => Some(contents),
        Err(e) => {
            tracing::warn!("Cannot read {}: {}", config_path.display(), e);
            None
        }
    }
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

impl Config {
    /// Credentials come from the environment so they never have to be
    /// written into config.toml
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("CONTENTFUL_SPACE_ID").filter(|v| !v.is_empty()) {
            self.contentful.space_id = v;
        }
        if let Some(v) = lookup("CONTENTFUL_ACCESS_TOKEN").filter(|v| !v.is_empty()) {
            self.contentful.access_token = v;
        }
        if let Some(v) = lookup("SITE_URL").filter(|v| !v.is_empty()) {
            self.site.url = v;
        }
        // a trailing slash would produce "//" in every sitemap entry
        let trimmed = self.site.url.trim_end_matches('/').len();
        self.site.url.truncate(trimmed);
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.site.locales.is_empty() {
            anyhow::bail!("site.locales must list at least one locale");
        }
        if let Some(blank) = self.site.locales.iter().find(|l| l.trim().is_empty()) {
            anyhow::bail!("site.locales contains an empty locale: {:?}", blank);
        }
        if !self.site.url.starts_with("http://") && !self.site.url.starts_with("https://") {
            anyhow::bail!("site.url must start with http:// or https://");
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
