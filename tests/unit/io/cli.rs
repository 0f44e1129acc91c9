//! Tests for command-line interface parsing and file processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use image::{GrayImage, Luma};
    use pixel_recovery::io::cli::{Cli, FileProcessor};
    use pixel_recovery::io::configuration::{
        DEFAULT_DISTANCE_THRESHOLD, DEFAULT_HEALTH_LIMIT, DEFAULT_LOG_LEVEL, DEFAULT_MAX_DEPTH,
    };
    use pixel_recovery::io::image::{load_grayscale, save_grayscale};
    use pixel_recovery::recovery::HealthPredicate;
    use std::path::{Path, PathBuf};

    fn write_hot_frame(path: &Path) {
        let mut img = GrayImage::from_pixel(5, 5, Luma([60]));
        img.put_pixel(2, 2, Luma([255]));
        save_grayscale(&img, path).expect("write input frame");
    }

    // Tests CLI parsing with only required target argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "frame.png"]);

        assert_eq!(cli.target, PathBuf::from("frame.png"));
        assert_eq!(cli.max_depth, DEFAULT_MAX_DEPTH);
        assert!((cli.distance_threshold - DEFAULT_DISTANCE_THRESHOLD).abs() < f64::EPSILON);
        assert_eq!(cli.health_limit, DEFAULT_HEALTH_LIMIT);
        assert_eq!(cli.log_level, DEFAULT_LOG_LEVEL);
        assert!(!cli.single_pass);
        assert!(!cli.mask);
        assert!(!cli.quiet);
    }

    // Tests CLI parsing with all available arguments
    // Verified by dropping a field from the derived parser
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "frames",
            "--max-depth",
            "6",
            "--distance-threshold",
            "1.5",
            "--health-limit",
            "200",
            "--single-pass",
            "--mask",
            "--quiet",
            "--no-skip",
            "--log-level",
            "debug",
        ]);

        assert_eq!(cli.target, PathBuf::from("frames"));
        let config = cli.recovery_config();
        assert_eq!(config.max_depth, 6);
        assert!((config.distance_threshold - 1.5).abs() < f64::EPSILON);
        assert!(!config.second_pass);
        assert!(cli.health_predicate().is_healthy(199));
        assert!(!cli.health_predicate().is_healthy(200));
        assert!(cli.mask);
        assert!(!cli.skip_existing());
        assert!(!cli.should_show_progress());
    }

    // Tests short flag parsing
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["program", "a.png", "-d", "2", "-t", "3", "-l", "90", "-s", "-m"]);

        assert_eq!(cli.max_depth, 2);
        assert!((cli.distance_threshold - 3.0).abs() < f64::EPSILON);
        assert_eq!(cli.health_limit, 90);
        assert!(cli.single_pass);
        assert!(cli.mask);
    }

    // Tests quiet mode lowers the log level
    // Verified by ignoring the quiet flag
    #[test]
    fn test_effective_log_level() {
        let loud = Cli::parse_from(["program", "a.png", "--log-level", "trace"]);
        assert_eq!(loud.effective_log_level(), "trace");

        let quiet = Cli::parse_from(["program", "a.png", "--log-level", "trace", "-q"]);
        assert_eq!(quiet.effective_log_level(), "warn");
    }

    // Tests output naming keeps directory and extension
    // Verified by dropping the suffix
    #[test]
    fn test_output_paths() {
        let input = Path::new("frames/dark_01.png");
        assert_eq!(
            FileProcessor::get_output_path(input),
            PathBuf::from("frames/dark_01_recovered.png")
        );
        assert_eq!(
            FileProcessor::get_mask_path(input),
            PathBuf::from("frames/dark_01_mask.png")
        );
        assert!(FileProcessor::is_generated_output(Path::new("dark_01_recovered.png")));
        assert!(FileProcessor::is_generated_output(Path::new("dark_01_mask.png")));
        assert!(!FileProcessor::is_generated_output(input));
    }

    // Tests a single file is recovered and written next to the input
    // Verified by saving the unmodified image
    #[test]
    fn test_process_single_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let input = dir.path().join("hot.png");
        write_hot_frame(&input);

        let cli = Cli::parse_from([
            PathBuf::from("program"),
            input.clone(),
            PathBuf::from("--quiet"),
            PathBuf::from("--mask"),
        ]);
        let reports = FileProcessor::new(cli).process().expect("processing succeeds");

        assert_eq!(reports.len(), 1);
        assert_eq!(reports.first().map(|(_, r)| r.changed), Some(1));

        let output = load_grayscale(&FileProcessor::get_output_path(&input)).expect("output exists");
        assert_eq!(output.get_pixel(2, 2).0[0], 60);
        assert!(FileProcessor::get_mask_path(&input).exists());
    }

    // Tests directory processing skips existing outputs and generated files
    // Verified by reprocessing files whose output exists
    #[test]
    fn test_process_directory_skips_existing() {
        let dir = tempfile::tempdir().expect("temp dir");
        write_hot_frame(&dir.path().join("a.png"));
        write_hot_frame(&dir.path().join("b.png"));
        std::fs::write(dir.path().join("notes.txt"), "not an image").expect("write text file");

        let args = [
            PathBuf::from("program"),
            dir.path().to_path_buf(),
            PathBuf::from("-q"),
        ];
        let first = FileProcessor::new(Cli::parse_from(args.clone()))
            .process()
            .expect("first run succeeds");
        assert_eq!(first.len(), 2);

        let second = FileProcessor::new(Cli::parse_from(args))
            .process()
            .expect("second run succeeds");
        assert!(second.is_empty());

        let forced = FileProcessor::new(Cli::parse_from([
            PathBuf::from("program"),
            dir.path().to_path_buf(),
            PathBuf::from("-q"),
            PathBuf::from("--no-skip"),
        ]))
        .process()
        .expect("forced run succeeds");
        assert_eq!(forced.len(), 2);
    }

    // Tests non-PNG targets and invalid parameters are rejected
    // Verified by accepting any file extension
    #[test]
    fn test_process_rejects_bad_input() {
        let dir = tempfile::tempdir().expect("temp dir");
        let text = dir.path().join("notes.txt");
        std::fs::write(&text, "hello").expect("write text file");

        let cli = Cli::parse_from([PathBuf::from("program"), text, PathBuf::from("-q")]);
        assert!(FileProcessor::new(cli).process().is_err());

        let input = dir.path().join("hot.png");
        write_hot_frame(&input);
        let cli = Cli::parse_from([
            PathBuf::from("program"),
            input,
            PathBuf::from("-q"),
            PathBuf::from("--max-depth"),
            PathBuf::from("0"),
        ]);
        assert!(FileProcessor::new(cli).process().is_err());

        let missing = Cli::parse_from(["program", "/definitely/not/here", "-q"]);
        assert!(FileProcessor::new(missing).process().is_err());
    }
}
