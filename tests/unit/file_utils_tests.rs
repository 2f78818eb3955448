/*!
 * Tests for file utility functions
 */

use std::path::Path;
use anyhow::Result;
use chat2ass::file_utils::FileManager;
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "test_file_exists.tmp", "test content")?;

    assert!(FileManager::file_exists(&test_file));

    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));
}

/// Test that dir_exists distinguishes files and directories
#[test]
fn test_dir_exists_withFileAndDir_shouldOnlyAcceptDir() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "plain.txt", "x")?;

    assert!(FileManager::dir_exists(temp_dir.path()));
    assert!(!FileManager::dir_exists(&test_file));
    assert!(!FileManager::dir_exists("./non_existent_directory_12345"));

    Ok(())
}

/// Test that generate_output_path swaps the extension
#[test]
fn test_generate_output_path_withValidInputs_shouldCreateCorrectPath() {
    let output_path = FileManager::generate_output_path(
        Path::new("/tmp/input/stream.json"),
        Path::new("/tmp/output"),
        "ass",
    );

    assert_eq!(output_path, Path::new("/tmp/output/stream.ass"));
}

#[test]
fn test_generate_output_path_withDottedExtension_shouldNotDoubleDot() {
    let output_path = FileManager::generate_output_path("chat.json", "", ".ass");
    assert_eq!(output_path, Path::new("chat.ass"));
}

/// Test that ensure_dir creates nested directories
#[test]
fn test_ensure_dir_withNonExistentDir_shouldCreateDirectory() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let nested = temp_dir.path().join("a").join("b");

    FileManager::ensure_dir(&nested)?;

    assert!(nested.is_dir());
    Ok(())
}

/// Test that find_files filters by extension recursively
#[test]
fn test_find_files_withMixedFiles_shouldReturnMatchingOnly() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let sub_dir = temp_dir.path().join("day2");
    FileManager::ensure_dir(&sub_dir)?;

    common::create_test_file(temp_dir.path(), "a.json", "{}")?;
    common::create_test_file(temp_dir.path(), "notes.txt", "")?;
    common::create_test_file(&sub_dir, "b.JSON", "{}")?;

    let mut found = FileManager::find_files(temp_dir.path(), "json")?;
    found.sort();

    assert_eq!(found.len(), 2);
    assert!(found.iter().any(|p| p.ends_with("a.json")));
    assert!(found.iter().any(|p| p.ends_with("day2/b.JSON")));

    Ok(())
}

/// Test that write_to_file creates parents and read_to_string reads back
#[test]
fn test_write_to_file_withNestedPath_shouldCreateAndWrite() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("out").join("chat.ass");

    FileManager::write_to_file(&path, "content")?;

    assert_eq!(FileManager::read_to_string(&path)?, "content");
    Ok(())
}

#[test]
fn test_read_to_string_withMissingFile_shouldFail() {
    assert!(FileManager::read_to_string("missing_file_for_read.txt").is_err());
}
