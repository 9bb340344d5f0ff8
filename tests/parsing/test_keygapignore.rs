// Tests for .keygapignore handling during directory walking.

use std::fs;

use keygap_parsers::walker::FileWalker;

use super::common::create_project;

fn walked(root: &std::path::Path, excludes: &[String]) -> Vec<String> {
    FileWalker::new(root)
        .with_excludes(excludes)
        .walk()
        .iter()
        .map(|e| {
            e.path
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[test]
/// Files matching .keygapignore patterns are excluded.
fn test_keygapignore_excludes_matching_files() {
    let dir = create_project(&[
        ("src/app.ts", "export const app = 1;"),
        ("src/app.test.ts", "test('works', () => {});"),
        (".keygapignore", "*.test.ts\n"),
    ]);
    assert_eq!(walked(dir.path(), &[]), vec!["src/app.ts"]);
}

#[test]
/// node_modules is never walked, even without an ignore file.
fn test_node_modules_skipped() {
    let dir = create_project(&[
        ("node_modules/pkg/index.js", "module.exports = {};"),
        ("index.js", "export default 1;"),
    ]);
    assert_eq!(walked(dir.path(), &[]), vec!["index.js"]);
}

#[test]
/// Config exclude globs apply to root-relative paths; bad globs are dropped.
fn test_config_excludes() {
    let dir = create_project(&[
        ("src/a.ts", ""),
        ("src/a.stories.tsx", ""),
        ("docs/readme.md", ""),
    ]);
    let out = walked(
        dir.path(),
        &["**/*.stories.tsx".to_string(), "[broken".to_string()],
    );
    assert_eq!(out, vec!["src/a.ts"]);
}

#[test]
/// Output is sorted by path.
fn test_walk_is_sorted() {
    let dir = create_project(&[("z.ts", ""), ("a.ts", ""), ("m/b.tsx", "")]);
    fs::create_dir_all(dir.path().join("empty")).unwrap();
    assert_eq!(walked(dir.path(), &[]), vec!["a.ts", "m/b.tsx", "z.ts"]);
}
