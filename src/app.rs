use anyhow::{Context, Result, anyhow};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::repo;
use crate::walk::walk;

pub struct App {
    cache_dir: PathBuf,
}

impl App {
    pub fn new(cache_dir: PathBuf) -> Self {
        Self { cache_dir }
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Make sure the cache directory holds a clone of the boilerplate
    /// repository, cloning on first use.
    fn ensure_cache(&self) -> Result<()> {
        match fs::metadata(&self.cache_dir) {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(anyhow!(
                "{} exists but is not a directory",
                self.cache_dir.display()
            )),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                fs::create_dir_all(&self.cache_dir).with_context(|| {
                    format!("creating cache directory at {}", self.cache_dir.display())
                })?;
                repo::clone_boilerplates(&self.cache_dir)
            }
            Err(err) => Err(err).with_context(|| {
                format!("inspecting cache directory at {}", self.cache_dir.display())
            }),
        }
    }

    /// Path of the first file named `<name>.gitignore` under the cache.
    /// The walk visits directories in sorted order, so a duplicated name
    /// always resolves to the same file.
    pub fn locate(&self, name: &str) -> Result<PathBuf> {
        let filename = format!("{name}.gitignore");
        walk(&self.cache_dir)
            .find(|path| path.file_name().is_some_and(|f| f == filename.as_str()))
            .ok_or_else(|| self.not_found(name))
    }

    fn not_found(&self, name: &str) -> anyhow::Error {
        let lower = name.to_lowercase();
        let suggestion = self
            .list_boilerplates_or_empty()
            .into_iter()
            .find(|candidate| candidate.to_lowercase() == lower);
        match suggestion {
            Some(other) => anyhow!("{name}: boilerplate not found (did you mean {other}?)"),
            None => anyhow!("{name}: boilerplate not found"),
        }
    }

    /// Write a boilerplate to `out`: two provenance comment lines, a blank
    /// line, then the file contents verbatim.
    pub fn dump_to(&self, name: &str, out: &mut impl Write) -> Result<()> {
        self.ensure_cache()?;
        let path = self.locate(name)?;
        let relative = path.strip_prefix(&self.cache_dir).unwrap_or(&path);
        let revision = repo::head_revision(&self.cache_dir)?;

        writeln!(out, "### Generated by gib (https://github.com/gib-cli/gib)")?;
        writeln!(
            out,
            "### https://raw.github.com/github/gitignore/{}/{}",
            revision,
            relative.display()
        )?;
        writeln!(out)?;

        let mut file =
            File::open(&path).with_context(|| format!("opening {}", path.display()))?;
        io::copy(&mut file, out).with_context(|| format!("printing {}", path.display()))?;
        Ok(())
    }

    pub fn dump(&self, name: &str) -> Result<()> {
        self.dump_to(name, &mut io::stdout().lock())
    }

    /// Names of every boilerplate in the cache, sorted. A name that appears
    /// under more than one directory is reported once per file.
    pub fn list_boilerplates(&self) -> Result<Vec<String>> {
        self.ensure_cache()?;
        let mut names: Vec<String> = walk(&self.cache_dir)
            .filter(|path| path.extension().is_some_and(|ext| ext == "gitignore"))
            .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .collect();
        names.sort();
        Ok(names)
    }

    /// Defaulting wrapper over [`App::list_boilerplates`] for call sites
    /// that cannot surface a failure.
    pub fn list_boilerplates_or_empty(&self) -> Vec<String> {
        self.list_boilerplates().unwrap_or_default()
    }

    /// Boilerplates whose name contains `term`, matched case-insensitively.
    pub fn search(&self, term: &str) -> Result<Vec<String>> {
        let needle = term.to_lowercase();
        let matches = self
            .list_boilerplates()?
            .into_iter()
            .filter(|name| name.to_lowercase().contains(&needle))
            .collect();
        Ok(matches)
    }

    /// Pull the latest boilerplates into the cache.
    pub fn update(&self) -> Result<()> {
        // Best effort: a failed first-time clone still surfaces below when
        // the cache cannot be opened.
        let _ = self.ensure_cache();
        repo::pull(&self.cache_dir)
    }
}
