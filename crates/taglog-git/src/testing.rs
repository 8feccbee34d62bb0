//! Fixture repositories for tests

use std::path::Path;

use git2::{Oid, Repository, Signature, Time};
use tempfile::TempDir;

/// Throwaway repository with deterministic commit times
pub struct FixtureRepo {
    temp: TempDir,
    repo: Repository,
    clock: std::cell::Cell<i64>,
}

impl FixtureRepo {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let repo = Repository::init(temp.path()).unwrap();
        Self {
            temp,
            repo,
            clock: std::cell::Cell::new(1_700_000_000),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    fn signature(&self) -> Signature<'static> {
        let now = self.clock.get() + 60;
        self.clock.set(now);
        Signature::new("Test", "test@example.com", &Time::new(now, 0)).unwrap()
    }

    /// Commit on top of HEAD (if any) and advance HEAD
    pub fn commit(&self, message: &str) -> Oid {
        let parents = match self.repo.head() {
            Ok(head) => vec![head.peel_to_commit().unwrap().id()],
            Err(_) => Vec::new(),
        };
        self.commit_with_parents(Some("HEAD"), message, &parents)
    }

    /// Commit with explicit parents, optionally updating a reference
    pub fn commit_with_parents(&self, update_ref: Option<&str>, message: &str, parents: &[Oid]) -> Oid {
        let sig = self.signature();
        let tree_id = self.repo.index().unwrap().write_tree().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();
        let parents: Vec<_> = parents
            .iter()
            .map(|oid| self.repo.find_commit(*oid).unwrap())
            .collect();
        let parent_refs: Vec<_> = parents.iter().collect();

        self.repo
            .commit(update_ref, &sig, &sig, message, &tree, &parent_refs)
            .unwrap()
    }

    /// Set a value in the repository's local config
    pub fn set_config(&self, name: &str, value: &str) {
        self.repo.config().unwrap().set_str(name, value).unwrap();
    }

    /// Lightweight tag at HEAD
    pub fn tag(&self, name: &str) {
        let head = self.repo.head().unwrap().peel_to_commit().unwrap();
        self.repo
            .tag_lightweight(name, head.as_object(), false)
            .unwrap();
    }

    /// Annotated tag at HEAD
    pub fn annotated_tag(&self, name: &str, message: &str) {
        let sig = self.signature();
        let head = self.repo.head().unwrap().peel_to_commit().unwrap();
        self.repo
            .tag(name, head.as_object(), &sig, message, false)
            .unwrap();
    }

    /// Create a side commit off HEAD and merge it back with a merge commit
    pub fn merge_side_commit(&self, side_message: &str, merge_message: &str) {
        let head = self.repo.head().unwrap().peel_to_commit().unwrap().id();
        let side = self.commit_with_parents(None, side_message, &[head]);
        self.commit_with_parents(Some("HEAD"), merge_message, &[head, side]);
    }
}
