//! Shared testing utilities for apache-node-proxy CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated Bitnami-like layout under a temp dir.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a work directory plus a full `opt/bitnami` tree.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        let ctx = Self { root, work_dir };
        fs::create_dir_all(ctx.vhosts_dir()).expect("Failed to create vhosts directory");
        fs::create_dir_all(ctx.project_dir()).expect("Failed to create project directory");
        ctx
    }

    /// Path to the work directory used as the CLI's current directory.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Emulated Bitnami base directory.
    pub fn base_dir(&self) -> PathBuf {
        self.root.path().join("opt/bitnami")
    }

    /// Emulated Apache configuration directory.
    pub fn conf_dir(&self) -> PathBuf {
        self.base_dir().join("apache/conf")
    }

    /// Emulated vhosts directory.
    pub fn vhosts_dir(&self) -> PathBuf {
        self.conf_dir().join("vhosts")
    }

    /// Project directory that exists inside the emulated install.
    pub fn project_dir(&self) -> PathBuf {
        self.base_dir().join("projects/testapp")
    }

    /// Remove the emulated install, leaving only the work directory.
    pub fn remove_install(&self) {
        fs::remove_dir_all(self.base_dir()).expect("Failed to remove emulated install");
    }

    /// Write a layout override pointing at the emulated install and return its path.
    pub fn write_layout(&self, restart_command: &[&str]) -> PathBuf {
        let command =
            restart_command.iter().map(|part| format!("\"{}\"", part)).collect::<Vec<_>>();
        let content = format!(
            "base_dir = \"{}\"\nconf_dir = \"{}\"\nvhosts_dir = \"{}\"\nrestart_command = [{}]\n",
            self.base_dir().display(),
            self.conf_dir().display(),
            self.vhosts_dir().display(),
            command.join(", "),
        );
        self.write_config_file("layout.toml", &content)
    }

    /// Write arbitrary config content next to the work directory.
    pub fn write_config_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(name);
        fs::write(&path, content).expect("Failed to write config file");
        path
    }

    /// File names currently present in the vhosts directory.
    pub fn vhost_files(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(self.vhosts_dir()) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Build a command for invoking the compiled binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("apache-node-proxy").expect("Failed to locate apache-node-proxy");
        cmd.current_dir(&self.work_dir).env_remove("APACHE_NODE_PROXY_CONFIG");
        cmd
    }

    /// Build a command that already points `--config` at the emulated install.
    pub fn cli_with_layout(&self) -> Command {
        let layout = self.write_layout(&["true"]);
        let mut cmd = self.cli();
        cmd.arg("--config").arg(layout);
        cmd
    }
}
