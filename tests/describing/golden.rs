#[cfg(test)]
mod verify {
    use std::fs;
    use std::path::{Path, PathBuf};

    use mathobject::describing::describe;
    use mathobject::formatting::Identity;
    use mathobject::merging;
    use mathobject::rendering::{description_fragments, render};
    use mathobject::settings::InterfaceMode;

    /// Golden test for the describe command
    ///
    /// Each .json file in tests/golden/ is loaded, completed, and described
    /// object by object, threading the coefficient index through the whole
    /// file exactly as the `describe` command does. The plain output must
    /// match the sibling .txt file.

    fn show_diff(expected: &str, actual: &str, file_path: &Path) {
        let expected_lines: Vec<&str> = expected
            .lines()
            .collect();
        let actual_lines: Vec<&str> = actual
            .lines()
            .collect();

        let max_lines = expected_lines
            .len()
            .max(actual_lines.len());

        println!("\nDifferences found in file: {:?}", file_path);
        println!("--- Expected");
        println!("+++ Described");

        for i in 0..max_lines {
            let want = expected_lines
                .get(i)
                .unwrap_or(&"");
            let got = actual_lines
                .get(i)
                .unwrap_or(&"");

            if want != got {
                println!("@@ Line {} @@", i + 1);
                println!("- {}", want);
                println!("+ {}", got);
            }
        }
    }

    fn describe_file(file: &Path) -> String {
        let content = merging::load(file)
            .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));
        let inputs = merging::parse(file, &content)
            .unwrap_or_else(|e| panic!("Failed to parse file {:?}: {:?}", file, e));

        let mut output = String::new();
        let mut index = 1;

        for input in inputs {
            let result = input
                .convert()
                .unwrap_or_else(|e| panic!("Failed to convert object in {:?}: {}", file, e));
            let object = &result
                .merged
                .object;

            let description = describe(object, InterfaceMode::infer(object), index);
            index = description.next_index;

            output.push_str(&render(
                &Identity,
                description_fragments(object.object_type(), &description),
            ));
        }

        output
    }

    #[test]
    fn ensure_identical_output() {
        let dir = Path::new("tests/golden");

        assert!(dir.exists(), "golden directory missing");

        let entries = fs::read_dir(dir).expect("Failed to read golden directory");

        let mut files: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("json")
            {
                files.push(path);
            }
        }
        files.sort();

        assert!(!files.is_empty(), "No .json files found in golden directory");

        let mut failures = Vec::new();

        for file in &files {
            let expected_path = file.with_extension("txt");
            let expected = fs::read_to_string(&expected_path)
                .unwrap_or_else(|e| panic!("Failed to read {:?}: {:?}", expected_path, e));

            let actual = describe_file(file);

            if actual != expected {
                show_diff(&expected, &actual, file);
                failures.push(file.clone());
            }
        }

        if !failures.is_empty() {
            panic!(
                "All golden files must describe unchanged, but {} differ",
                failures.len()
            );
        }
    }
}
