#[derive(Debug, Clone)]
pub struct Config {
    pub snapshot_path: String,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> Self {
        let exe_dir = Self::exe_dir();

        // Try to load .env from executable's directory first
        if let Some(ref dir) = exe_dir {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        // Default snapshot path is relative to executable directory
        let snapshot_path = std::env::var("FEEDSTASH_SNAPSHOT_PATH").unwrap_or_else(|_| {
            exe_dir
                .map(|d| d.join("feedstash.json").to_string_lossy().into_owned())
                .unwrap_or_else(|| "./feedstash.json".to_string())
        });

        Self { snapshot_path }
    }
}
