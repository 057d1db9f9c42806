// Integration test utilities and common code

use std::path::{Path, PathBuf};
use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test fixture holding a temporary directory for batch files
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            root_path,
        }
    }

    /// Write a batch file: the count line followed by each line
    pub fn create_batch_file<P: AsRef<Path>>(&self, relative_path: P, lines: &[&str]) -> PathBuf {
        let mut content = format!("{}\n", lines.len());
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }
        self.create_raw_file(relative_path, content.as_bytes())
    }

    /// Write arbitrary bytes as a batch file
    pub fn create_raw_file<P: AsRef<Path>>(&self, relative_path: P, content: &[u8]) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }
}

/// Run the built binary with the given arguments
pub fn run_wordnorm(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wordnorm"))
        .args(args)
        .arg("--no-progress")
        .output()
        .expect("Failed to run wordnorm")
}
