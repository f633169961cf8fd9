//! Every source file opens with an inner doc comment describing the module.

use std::fs;
use std::path::Path;

#[test]
fn every_module_starts_with_inner_docs() {
    let src = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut checked = 0;
    for entry in fs::read_dir(&src).unwrap() {
        let path = entry.unwrap().path();
        if path.extension().is_none_or(|e| e != "rs") {
            continue;
        }
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("//!"), "{} lacks a //! header", path.display());
        checked += 1;
    }
    assert!(checked > 10);
}
