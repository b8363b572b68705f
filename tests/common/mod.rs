#![allow(dead_code)]

use git2::{Oid, Repository};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const OAT_H_STD_ARRAY_170: &str = "\
class PACKED(4) OatHeader {
 public:
  static constexpr std::array<uint8_t, 4> kOatMagic { { 'o', 'a', 't', '\\n' } };
  static constexpr std::array<uint8_t, 4> kOatVersion { { '1', '7', '0', '\\0' } };
};
";

pub const OAT_H_STD_ARRAY_244: &str =
    "static constexpr std::array<uint8_t, 4> kOatVersion{{'2', '4', '4', '\\0'}};\n";

pub const OAT_H_LEGACY_064: &str =
    "  static constexpr uint8_t kOatVersion[] = { '0', '6', '4', '\\0' };\n";

pub const OAT_H_LEGACY_138: &str =
    "  static constexpr uint8_t kOatVersion[] = { '1', '3', '8', '\\0' };\n";

pub const OAT_H_DECLARATION_ONLY: &str = "  static const uint8_t kOatVersion[4];\n";

pub const OAT_CC_007: &str =
    "const uint8_t OatHeader::kOatVersion[] = { '0', '0', '7', '\\0' };\n";

/// A real git repository in a temporary directory
pub struct Fixture {
    pub dir: TempDir,
    pub repo: Repository,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Could not create temp dir");
        let repo = Repository::init(dir.path()).expect("Could not init git repo");

        {
            let mut config = repo.config().expect("Could not get config");
            config
                .set_str("user.name", "Test User")
                .expect("Could not set user.name");
            config
                .set_str("user.email", "test@example.com")
                .expect("Could not set user.email");
        }

        Fixture { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Commit a tree containing exactly `files` on top of HEAD
    pub fn commit(&self, files: &[(&str, &str)]) -> Oid {
        let mut index = self.repo.index().expect("Could not get index");
        index.clear().expect("Could not clear index");

        for (path, content) in files {
            let full_path = self.dir.path().join(path);
            fs::create_dir_all(full_path.parent().unwrap()).expect("Could not create dirs");
            fs::write(&full_path, content).expect("Could not write file");
            index
                .add_path(Path::new(path))
                .expect("Could not add file to index");
        }
        index.write().expect("Could not write index");

        let tree_id = index.write_tree().expect("Could not write tree");
        let tree = self.repo.find_tree(tree_id).expect("Could not find tree");
        let sig = self.repo.signature().expect("Could not get sig");

        let parents: Vec<git2::Commit> = match self.repo.head() {
            Ok(head) => vec![head.peel_to_commit().expect("Could not peel HEAD")],
            Err(_) => Vec::new(),
        };
        let parent_refs: Vec<&git2::Commit> = parents.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, "update sources", &tree, &parent_refs)
            .expect("Could not create commit")
    }

    /// Create an annotated tag
    pub fn tag(&self, name: &str, commit: Oid) {
        let object = self
            .repo
            .find_object(commit, None)
            .expect("Could not find commit");
        let sig = self.repo.signature().expect("Could not get sig");
        self.repo
            .tag(name, &object, &sig, name, false)
            .expect("Could not create tag");
    }

    /// The repository with tags android-10.0.0_r1, android-10.0.0_r2 (both
    /// oat 170) and an excluded android-10.0.0_r2-beta1 (oat 244)
    pub fn android_10() -> Self {
        let fixture = Fixture::new();

        let r1 = fixture.commit(&[("runtime/oat.h", OAT_H_STD_ARRAY_170)]);
        fixture.tag("android-10.0.0_r1", r1);

        let r2 = fixture.commit(&[
            ("runtime/oat.h", OAT_H_STD_ARRAY_170),
            ("README.md", "r2\n"),
        ]);
        fixture.tag("android-10.0.0_r2", r2);

        let beta = fixture.commit(&[("runtime/oat.h", OAT_H_STD_ARRAY_244)]);
        fixture.tag("android-10.0.0_r2-beta1", beta);

        fixture
    }
}
