//! Git plumbing for the boilerplate cache.

use std::path::Path;

use anyhow::{Context, Result};
use git2::build::{CheckoutBuilder, RepoBuilder};
use git2::{FetchOptions, Repository};

/// Remote repository holding the boilerplate files.
pub const REMOTE_URL: &str = "https://github.com/github/gitignore.git";

/// Shallow-clone the boilerplate repository into `dir`. A directory that
/// already holds a repository is left untouched.
pub fn clone_boilerplates(dir: &Path) -> Result<()> {
    if Repository::open(dir).is_ok() {
        return Ok(());
    }
    let mut fetch = FetchOptions::new();
    fetch.depth(1);
    RepoBuilder::new()
        .fetch_options(fetch)
        .clone(REMOTE_URL, dir)
        .with_context(|| format!("cloning {} into {}", REMOTE_URL, dir.display()))?;
    Ok(())
}

/// Commit id of the cache's current HEAD.
pub fn head_revision(dir: &Path) -> Result<String> {
    let repo = open(dir)?;
    let commit = repo
        .head()
        .and_then(|head| head.peel_to_commit())
        .context("resolving HEAD of the boilerplate cache")?;
    Ok(commit.id().to_string())
}

/// Fetch from origin and fast-forward the checked-out branch. A cache that
/// is already current is not an error.
pub fn pull(dir: &Path) -> Result<()> {
    let repo = open(dir)?;
    if repo.is_bare() {
        anyhow::bail!("{} has no working tree", dir.display());
    }

    let mut remote = repo
        .find_remote("origin")
        .context("looking up the origin remote")?;
    remote
        .fetch(&[] as &[&str], None, None)
        .context("fetching from origin")?;

    let fetch_head = repo.find_reference("FETCH_HEAD")?;
    let fetch_commit = repo.reference_to_annotated_commit(&fetch_head)?;
    let (analysis, _) = repo.merge_analysis(&[&fetch_commit])?;

    if analysis.is_up_to_date() {
        return Ok(());
    }
    if analysis.is_fast_forward() {
        let refname = repo
            .head()?
            .name()
            .map(str::to_owned)
            .context("HEAD is not a named reference")?;
        let mut reference = repo.find_reference(&refname)?;
        reference.set_target(fetch_commit.id(), "fast-forward")?;
        repo.set_head(&refname)?;
        let mut checkout = CheckoutBuilder::default();
        checkout.force();
        repo.checkout_head(Some(&mut checkout))?;
        return Ok(());
    }
    anyhow::bail!(
        "cannot fast-forward the boilerplate cache; remove {} and run update again",
        dir.display()
    )
}

fn open(dir: &Path) -> Result<Repository> {
    Repository::open(dir)
        .with_context(|| format!("opening the boilerplate cache at {}", dir.display()))
}
