use std::fs;
use std::path::{Path, PathBuf};

/// Lazy depth-first traversal of a directory tree, yielding file paths.
///
/// Entries within each directory are visited in sorted order, so the
/// sequence is stable across filesystems. Hidden directories below the
/// root (`.git` in practice) are not descended into. Unreadable
/// directories are skipped rather than aborting the walk.
pub fn walk(root: impl Into<PathBuf>) -> Walk {
    let root = root.into();
    let pending = if root.is_dir() {
        vec![Entry {
            path: root,
            is_dir: true,
        }]
    } else {
        Vec::new()
    };
    Walk { pending }
}

pub struct Walk {
    pending: Vec<Entry>,
}

struct Entry {
    path: PathBuf,
    is_dir: bool,
}

impl Iterator for Walk {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        while let Some(entry) = self.pending.pop() {
            if entry.is_dir {
                self.descend(&entry.path);
            } else {
                return Some(entry.path);
            }
        }
        None
    }
}

impl Walk {
    fn descend(&mut self, dir: &Path) {
        let Ok(entries) = fs::read_dir(dir) else {
            return;
        };
        let mut children: Vec<Entry> = entries
            .filter_map(|entry| {
                let entry = entry.ok()?;
                let is_dir = entry.file_type().ok()?.is_dir();
                Some(Entry {
                    path: entry.path(),
                    is_dir,
                })
            })
            .filter(|child| !(child.is_dir && is_hidden(&child.path)))
            .collect();
        children.sort_by(|a, b| a.path.cmp(&b.path));
        // Pop order is LIFO, so push in reverse to visit sorted-first.
        self.pending.extend(children.into_iter().rev());
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with('.'))
}

#[cfg(test)]
mod tests {
    use super::walk;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn yields_files_in_sorted_depth_first_order() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("Global")).unwrap();
        fs::write(temp.path().join("Global/Vim.gitignore"), "").unwrap();
        fs::write(temp.path().join("Rust.gitignore"), "").unwrap();
        fs::write(temp.path().join("Ada.gitignore"), "").unwrap();

        let names: Vec<String> = walk(temp.path())
            .map(|p| {
                p.strip_prefix(temp.path())
                    .unwrap()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();

        assert_eq!(names, ["Ada.gitignore", "Global/Vim.gitignore", "Rust.gitignore"]);
    }

    #[test]
    fn skips_hidden_directories_but_not_hidden_files() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".git")).unwrap();
        fs::write(temp.path().join(".git/buried.gitignore"), "").unwrap();
        fs::write(temp.path().join(".hidden-file"), "").unwrap();
        fs::write(temp.path().join("Rust.gitignore"), "").unwrap();

        let names: Vec<String> = walk(temp.path())
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();

        assert_eq!(names, [".hidden-file", "Rust.gitignore"]);
    }

    #[test]
    fn missing_root_yields_nothing() {
        let temp = TempDir::new().unwrap();
        assert_eq!(walk(temp.path().join("absent")).count(), 0);
    }
}
