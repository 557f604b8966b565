use std::path::{Path, PathBuf};

const SETTINGS_FILE_NAME: &str = "signin.toml";

#[derive(Clone, Debug, PartialEq)]
pub struct SigninDirectory(PathBuf);

impl SigninDirectory {
    pub fn new(p: PathBuf) -> Self {
        SigninDirectory(p)
    }
    pub fn new_default() -> Result<Self, Box<dyn std::error::Error>> {
        default_datadir().map(SigninDirectory::new)
    }
}

impl SigninDirectory {
    pub fn exists(&self) -> bool {
        self.0.as_path().exists()
    }
    pub fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        create_directory(self.0.as_path())
    }
    pub fn path(&self) -> &Path {
        self.0.as_path()
    }

    pub fn settings_path(&self) -> PathBuf {
        let mut path = self.0.clone();
        path.push(SETTINGS_FILE_NAME);
        path
    }
}

// Get the absolute path to the signin configuration folder.
///
/// This a "Signin" directory in the XDG standard configuration directory for all OSes but
/// Linux-based ones, for which it's `~/.signin`.
fn default_datadir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    #[cfg(target_os = "linux")]
    let configs_dir = dirs::home_dir();

    #[cfg(not(target_os = "linux"))]
    let configs_dir = dirs::config_dir();

    if let Some(mut path) = configs_dir {
        #[cfg(target_os = "linux")]
        path.push(".signin");

        #[cfg(not(target_os = "linux"))]
        path.push("Signin");

        return Ok(path);
    }

    Err("Failed to get default data directory".into())
}

fn create_directory(datadir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(unix)]
    return {
        use std::fs::DirBuilder;
        use std::os::unix::fs::DirBuilderExt;

        let mut builder = DirBuilder::new();
        builder
            .mode(0o700)
            .recursive(true)
            .create(datadir)
            .map_err(|e| e.into())
    };

    // TODO: permissions on Windows..
    #[cfg(not(unix))]
    return {
        std::fs::create_dir_all(datadir)?;
        Ok(())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_creates_nested_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = SigninDirectory::new(tmp.path().join("a").join("b"));
        assert!(!dir.exists());
        dir.init().unwrap();
        assert!(dir.exists());
        assert_eq!(dir.settings_path(), tmp.path().join("a/b/signin.toml"));
    }
}
