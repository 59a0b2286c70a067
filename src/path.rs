use std::path::{Path, PathBuf};

/// Returns `<home>/.netrc` when a home directory is known and the file exists.
pub fn default_netrc_path<F>(home: Option<&Path>, exists: F) -> Option<PathBuf>
where
    F: Fn(&Path) -> bool,
{
    let path = home?.join(".netrc");
    exists(&path).then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existing_file() {
        let path = default_netrc_path(Some(Path::new("/home/alice")), |_| true);
        assert_eq!(Some(PathBuf::from("/home/alice/.netrc")), path);
    }

    #[test]
    fn missing_file() {
        let path = default_netrc_path(Some(Path::new("/home/alice")), |_| false);
        assert_eq!(None, path);
    }

    #[test]
    fn no_home() {
        let path = default_netrc_path(None, |_| panic!("Should not check without a home"));
        assert_eq!(None, path);
    }

    #[test]
    fn checks_joined_path() {
        let path = default_netrc_path(Some(Path::new("/root")), |p| {
            p == Path::new("/root/.netrc")
        });
        assert_eq!(Some(PathBuf::from("/root/.netrc")), path);
    }
}
