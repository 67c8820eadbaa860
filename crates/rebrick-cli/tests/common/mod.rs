use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Nothing listens here, so every remote call fails fast.
pub const UNREACHABLE_REMOTE: &str = "http://127.0.0.1:1/rebrickapi";

/// An isolated database and snapshot directory for one test.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("rebrickData")).unwrap();
        Self { dir }
    }

    pub fn database(&self) -> PathBuf {
        self.dir.path().join("catalog.db")
    }

    /// SQLite removes this file when the last connection closes cleanly.
    pub fn wal(&self) -> PathBuf {
        self.dir.path().join("catalog.db-wal")
    }

    pub fn snapshots(&self) -> PathBuf {
        self.dir.path().join("rebrickData")
    }

    pub fn write_snapshot(&self, file: &str, body: &str) {
        std::fs::write(self.snapshots().join(file), body).unwrap();
    }

    /// Run the CLI binary against this workspace.
    pub fn run(&self, args: &[&str]) -> Output {
        run_cli_with_env(args, self.dir.path(), &self.database(), &self.snapshots())
    }

    /// Run the CLI and expect success, returning stdout.
    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Execute SQL directly against the workspace database.
    pub async fn exec(&self, sql: &str) {
        let url = format!("sqlite://{}", self.database().display());
        let pool = sqlx::SqlitePool::connect(&url).await.unwrap();
        sqlx::query(sql).execute(&pool).await.unwrap();
        pool.close().await;
    }
}

pub fn run_cli_with_env(args: &[&str], home: &Path, database: &Path, snapshots: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_rebrick"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_DATA_HOME", home.join("data"));
    cmd.env("REBRICK_DATABASE", database);
    cmd.env("REBRICK_SNAPSHOTS", snapshots);
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("RUST_LOG");
    if !args.contains(&"--remote") {
        cmd.env("REBRICK_REMOTE", UNREACHABLE_REMOTE);
    }
    cmd.output().expect("Failed to execute CLI")
}
