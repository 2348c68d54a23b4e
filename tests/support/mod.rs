#![allow(dead_code)]
pub mod builders;

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch directory holding workbooks built for one test.
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_workbook(
        &self,
        name: &str,
        build: impl FnOnce(&mut umya_spreadsheet::Spreadsheet),
    ) -> PathBuf {
        let path = self.root().join(name);
        let mut book = umya_spreadsheet::new_file();
        build(&mut book);
        umya_spreadsheet::writer::xlsx::write(&book, &path).expect("write workbook");
        path
    }
}

pub fn open_workbook(path: &Path) -> umya_spreadsheet::Spreadsheet {
    umya_spreadsheet::reader::xlsx::read(path).expect("reopen workbook")
}
