use anyhow::{Context, Result, bail};
use line_splice_config::Config;
use line_splice_engine::{FileSink, FileSource, LineSink, SpliceReport, preview, splice_file};
use std::{env, path::PathBuf, process};

const PREVIEW_WIDTH: usize = 80;

#[derive(Debug, Default, PartialEq)]
struct Args {
    plan: Option<PathBuf>,
    output: Option<PathBuf>,
    dry_run: bool,
    help: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => parsed.help = true,
            "-n" | "--dry-run" => parsed.dry_run = true,
            "-o" | "--output" => match args.next() {
                Some(path) => parsed.output = Some(PathBuf::from(path)),
                None => return Err(format!("{arg} needs a path")),
            },
            flag if flag.starts_with('-') => return Err(format!("Unknown option: {flag}")),
            _ if parsed.plan.is_some() => return Err(format!("Unexpected argument: {arg}")),
            _ => parsed.plan = Some(PathBuf::from(&arg)),
        }
    }

    Ok(parsed)
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {program} [--dry-run] [--output <path>] [plan.toml]\n\
         \n\
         Without a plan argument {} is used.\n\
         \n\
         Options:\n  \
           -n, --dry-run        Report replacements without writing\n  \
           -o, --output <path>  Write the result here instead of the plan's destination\n  \
           -h, --help           Show this help",
        Config::config_path().display()
    )
}

/// Console lines describing each replacement, in document order
fn render_report(report: &SpliceReport<String>) -> Vec<String> {
    let mut lines = Vec::new();
    for r in &report.replacements {
        lines.push(format!(
            "Replacing lines {} to {} (indices {}:{})",
            r.start_line,
            r.end_line,
            r.start_line - 1,
            r.end_line
        ));
        if let Some(first) = r.removed.first() {
            lines.push(format!(
                "Original content start: {}",
                preview(first, PREVIEW_WIDTH)
            ));
        }
        if let Some(last) = r.removed.last() {
            lines.push(format!(
                "Original content end: {}",
                preview(last, PREVIEW_WIDTH)
            ));
        }
    }
    lines.push(format!(
        "{} lines -> {} lines",
        report.original_len, report.final_len
    ));
    lines
}

fn load_plan(plan_path: Option<PathBuf>) -> Result<Config> {
    let config_path = plan_path.clone().unwrap_or_else(Config::config_path);
    log::info!("Plan path: {}", config_path.display());

    let loaded = match plan_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    };
    match loaded.context("Failed to load plan")? {
        Some(config) => Ok(config),
        None => bail!(
            "Plan file '{}' not found (see --help)",
            config_path.display()
        ),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "line-splice".to_string());

    let args = match parse_args(args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{}", usage(&program));
            process::exit(1);
        }
    };
    if args.help {
        println!("{}", usage(&program));
        return Ok(());
    }

    let config = load_plan(args.plan)?;
    let destination = args
        .output
        .unwrap_or_else(|| config.destination().to_path_buf());

    let source = FileSource::new(&config.document);
    let file_sink = FileSink::new(&destination);
    let sink: Option<&dyn LineSink> = if args.dry_run {
        None
    } else {
        Some(&file_sink)
    };

    let report = splice_file(&source, config.edit_set(), sink).with_context(|| {
        format!(
            "Failed to splice '{}', no changes written",
            config.document.display()
        )
    })?;

    for line in render_report(&report) {
        println!("{line}");
    }
    if args.dry_run {
        println!("Dry run: no changes written.");
    } else {
        println!("Updates complete.");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use line_splice_engine::Replacement;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments_uses_defaults() {
        assert_eq!(parse_args(args(&[])).unwrap(), Args::default());
    }

    #[test]
    fn parses_plan_and_flags() {
        let parsed = parse_args(args(&["--dry-run", "plan.toml", "-o", "out.txt"])).unwrap();

        assert_eq!(
            parsed,
            Args {
                plan: Some(PathBuf::from("plan.toml")),
                output: Some(PathBuf::from("out.txt")),
                dry_run: true,
                help: false,
            }
        );
    }

    #[test]
    fn output_without_path_is_an_error() {
        let err = parse_args(args(&["--output"])).unwrap_err();

        assert_eq!(err, "--output needs a path");
    }

    #[test]
    fn rejects_unknown_option_and_second_plan() {
        assert!(parse_args(args(&["--force"])).is_err());
        assert!(parse_args(args(&["a.toml", "b.toml"])).is_err());
    }

    #[test]
    fn missing_plan_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let plan = dir.path().join("absent.toml");

        let err = load_plan(Some(plan)).unwrap_err();

        assert!(err.to_string().contains("absent.toml' not found"));
    }

    #[test]
    fn report_lists_each_replacement() {
        let report = SpliceReport {
            replacements: vec![Replacement {
                start_line: 3,
                end_line: 5,
                new_line: 3,
                removed: vec![
                    "    <Tab>\n".to_string(),
                    "x\n".to_string(),
                    "    </Tab>\n".to_string(),
                ],
            }],
            original_len: 10,
            final_len: 8,
        };

        assert_eq!(
            render_report(&report),
            vec![
                "Replacing lines 3 to 5 (indices 2:5)",
                "Original content start: <Tab>",
                "Original content end: </Tab>",
                "10 lines -> 8 lines",
            ]
        );
    }
}
