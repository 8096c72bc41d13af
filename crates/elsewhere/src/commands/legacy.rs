use anyhow::Context;
use elsewhere_catalog::{Paths, Preferences};

pub fn run_status() -> anyhow::Result<()> {
    let paths = Paths::new()?;
    let prefs = Preferences::load(&paths.prefs_file());
    println!("{}", describe(prefs));
    Ok(())
}

pub fn run_set(show_legacy: bool) -> anyhow::Result<()> {
    let paths = Paths::new()?;
    let path = paths.prefs_file();
    let mut prefs = Preferences::load(&path);
    prefs.show_legacy = show_legacy;
    prefs
        .save(&path)
        .with_context(|| format!("failed to save {}", path.display()))?;
    tracing::info!(show_legacy, "updated preference");
    println!("{}", describe(prefs));
    Ok(())
}

fn describe(prefs: Preferences) -> &'static str {
    if prefs.show_legacy {
        "Legacy entries: shown"
    } else {
        "Legacy entries: hidden"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elsewhere_catalog::HOME_ENV;
    use serial_test::serial;
    use tempfile::TempDir;

    /// Points `ELSEWHERE_HOME` at a directory until dropped
    struct HomeGuard;

    impl HomeGuard {
        fn set(dir: &TempDir) -> Self {
            std::env::set_var(HOME_ENV, dir.path());
            HomeGuard
        }
    }

    impl Drop for HomeGuard {
        fn drop(&mut self) {
            std::env::remove_var(HOME_ENV);
        }
    }

    #[test]
    #[serial]
    fn test_set_then_status() {
        let dir = TempDir::new().unwrap();
        let _home = HomeGuard::set(&dir);

        run_set(false).unwrap();
        let prefs = Preferences::load(&dir.path().join("prefs.json"));
        assert_eq!(describe(prefs), "Legacy entries: hidden");

        run_set(true).unwrap();
        assert!(Preferences::load(&dir.path().join("prefs.json")).show_legacy);
        assert!(run_status().is_ok());
    }

    #[test]
    #[serial]
    fn test_home_restored_after_guard() {
        let dir = TempDir::new().unwrap();
        {
            let _home = HomeGuard::set(&dir);
            assert_eq!(std::env::var_os(HOME_ENV), Some(dir.path().into()));
        }
        assert!(std::env::var_os(HOME_ENV).is_none());
    }
}
