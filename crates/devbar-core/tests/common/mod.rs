use std::fs;

use tempfile::TempDir;

/// A lesson document with `steps` steps, one task per step.
pub fn lesson_yaml(id: &str, steps: u32) -> String {
    let mut yaml = format!("id: {id}\ntitle: Module {id}\nintro: Intro for {id}.\ntasks:\n");
    for index in 1..=steps {
        yaml.push_str(&format!("  - Task {index}\n"));
    }
    yaml.push_str("steps:\n");
    for index in 1..=steps {
        yaml.push_str(&format!(
            "  - index: {index}\n    title: Task {index}\n    explanation: Do task {index}.\n    snippet:\n      title: src/App.jsx\n      highlighted_lines: [1]\n      body: |-\n        const step = {index};\n        export default step;\n"
        ));
    }
    yaml.push_str("completion:\n  summary: Done.\n");
    yaml
}

/// Write lesson files into a fresh catalog directory.
pub fn create_catalog_dir(lessons: &[(&str, String)]) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    for (name, source) in lessons {
        fs::write(temp_dir.path().join(name), source).expect("Failed to write lesson");
    }
    temp_dir
}
