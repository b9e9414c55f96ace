use std::{fs, io::Cursor};

use opslang::run_source;
use walkdir::WalkDir;

#[test]
fn demo_programs_run_cleanly() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "ops"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let mut input = Cursor::new(String::new());
        let mut output = Vec::new();
        if let Err(e) = run_source(&source, &mut input, &mut output) {
            panic!("Demo {path:?} failed:\n{source}\nError: {e}");
        }
    }

    assert!(count > 0, "No demo programs found in demos/");
}
