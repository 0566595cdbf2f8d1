//! Test harness for building Quiver export fixtures on disk.

// Allow dead code since this is a shared utility; not every test file uses
// every helper.
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated environment with an input tree and an output directory, both
/// cleaned up on drop.
pub struct QuiverEnv {
    input: TempDir,
    output: TempDir,
}

impl QuiverEnv {
    pub fn new() -> Self {
        Self {
            input: TempDir::new().expect("failed to create input dir"),
            output: TempDir::new().expect("failed to create output dir"),
        }
    }

    pub fn input_dir(&self) -> &Path {
        self.input.path()
    }

    pub fn output_dir(&self) -> &Path {
        self.output.path()
    }

    /// Creates a `.qvlibrary` directory whose meta lists the given children.
    pub fn library(&self, name: &str, children: &[&str]) -> PathBuf {
        let dir = self.input.path().join(format!("{name}.qvlibrary"));
        std::fs::create_dir_all(&dir).expect("failed to create library dir");
        let refs: Vec<_> = children
            .iter()
            .map(|uuid| serde_json::json!({ "uuid": uuid }))
            .collect();
        let meta = serde_json::json!({ "uuid": name, "children": refs });
        std::fs::write(dir.join("meta.json"), meta.to_string()).expect("failed to write meta");
        dir
    }

    /// Creates a `.qvnotebook` directory under `parent`.
    pub fn notebook(&self, parent: &Path, uuid: &str, name: &str) -> PathBuf {
        let dir = parent.join(format!("{uuid}.qvnotebook"));
        std::fs::create_dir_all(&dir).expect("failed to create notebook dir");
        let meta = serde_json::json!({ "uuid": uuid, "name": name });
        std::fs::write(dir.join("meta.json"), meta.to_string()).expect("failed to write meta");
        dir
    }

    /// Creates a `.qvnote` directory under `parent` with the given cells.
    pub fn note(&self, parent: &Path, uuid: &str, title: &str, cells: serde_json::Value) -> PathBuf {
        let dir = parent.join(format!("{uuid}.qvnote"));
        std::fs::create_dir_all(&dir).expect("failed to create note dir");
        let meta = serde_json::json!({
            "title": title,
            "created_at": 1445623936u64,
            "updated_at": 1445868578u64,
            "uuid": uuid,
            "tags": ["test"]
        });
        std::fs::write(dir.join("meta.json"), meta.to_string()).expect("failed to write meta");
        let content = serde_json::json!({ "cells": cells });
        std::fs::write(dir.join("content.json"), content.to_string())
            .expect("failed to write content");
        dir
    }

    /// Creates a `.qvnote` directory with a meta.json but no content.json.
    pub fn broken_note(&self, parent: &Path, uuid: &str, title: &str) -> PathBuf {
        let dir = parent.join(format!("{uuid}.qvnote"));
        std::fs::create_dir_all(&dir).expect("failed to create note dir");
        let meta = serde_json::json!({ "title": title, "uuid": uuid });
        std::fs::write(dir.join("meta.json"), meta.to_string()).expect("failed to write meta");
        dir
    }

    /// Adds a resource file to a note, creating the resources directory.
    pub fn resource(&self, note_dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
        let resources = note_dir.join("resources");
        std::fs::create_dir_all(&resources).expect("failed to create resources dir");
        let path = resources.join(name);
        std::fs::write(&path, bytes).expect("failed to write resource");
        path
    }

    /// An `export` command targeting `path`, writing into this env's output
    /// directory.
    pub fn export_cmd(&self, path: &Path) -> Command {
        let mut cmd = Command::cargo_bin("qvhtml").expect("failed to find qvhtml binary");
        cmd.arg("export")
            .arg(path)
            .arg("--output")
            .arg(self.output.path());
        cmd
    }

    /// Reads a file under the output directory.
    pub fn read_output(&self, rel: &str) -> String {
        std::fs::read_to_string(self.output.path().join(rel))
            .unwrap_or_else(|e| panic!("failed to read output file {rel}: {e}"))
    }

    /// Lists the entry names directly under the output directory, sorted.
    pub fn output_entries(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.output.path())
            .expect("failed to read output dir")
            .filter_map(Result::ok)
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

impl Default for QuiverEnv {
    fn default() -> Self {
        Self::new()
    }
}
