use std::path::Path;
use std::process::ExitCode;

use aidetect::analysis::scan_directory;
use aidetect::{AnalysisReport, CodeAnalyzer};

fn main() -> ExitCode {
    // .env next to the binary, if present, supplies classifier settings
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            let _ = dotenvy::from_path(dir.join(".env"));
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("aidetect");
    if args.len() != 2 {
        eprintln!("Usage: {} <file-or-directory>", program);
        return ExitCode::from(1);
    }

    let target = Path::new(&args[1]);
    if target.is_dir() {
        run_scan(target)
    } else {
        run_single(target)
    }
}

fn run_single(path: &Path) -> ExitCode {
    let analyzer = CodeAnalyzer::new();
    let report = match analyzer.analyze_path(path) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("aidetect: analysis failed: {:#}", e);
            AnalysisReport::fallback()
        }
    };
    print_pretty(&report);
    ExitCode::SUCCESS
}

fn run_scan(root: &Path) -> ExitCode {
    let analyzer = CodeAnalyzer::new();
    let reports = match scan_directory(&analyzer, root) {
        Ok(reports) => reports,
        Err(e) => {
            eprintln!("aidetect: scan failed: {:#}", e);
            return ExitCode::from(1);
        }
    };

    let mut map = serde_json::Map::new();
    for (path, report) in reports {
        let key = path
            .strip_prefix(root)
            .unwrap_or(&path)
            .to_string_lossy()
            .to_string();
        match serde_json::to_value(&report) {
            Ok(value) => {
                map.insert(key, value);
            }
            Err(e) => eprintln!("aidetect: failed to serialize report for {}: {}", key, e),
        }
    }
    print_pretty(&serde_json::Value::Object(map));
    ExitCode::SUCCESS
}

fn print_pretty<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => eprintln!("aidetect: failed to render report: {}", e),
    }
}
