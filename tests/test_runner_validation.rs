#[path = "../test_utils/lib.rs"]
mod test_utils;
use test_utils::constants::TEST_FILES_DIRECTORY;

use std::fs::read_dir;
use test_utils::run_test_for_file;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expectations_from_multiple_files() {
        println!("Testing fixture expectations...");

        // Directory containing the test files
        let test_dir = TEST_FILES_DIRECTORY.as_path();

        let mut files = read_dir(test_dir)
            .expect("Failed to read test files directory")
            .collect::<Result<Vec<_>, _>>()
            .expect("Failed to collect directory entries");

        files.sort_by_key(|file| file.path());

        let total_files = files.len();
        assert!(total_files > 0, "No fixture files found in {:?}", test_dir);

        for (file_idx, file) in files.iter().enumerate() {
            let file_path = file.path();

            println!(
                "   -- {:?} ({} of {})",
                file_path,
                file_idx + 1,
                total_files
            );

            if file_path.is_file() {
                let error_count = run_test_for_file(&file_path, true);
                assert_eq!(error_count, 0);
            }
        }
    }
}
