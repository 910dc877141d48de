use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use serde_json::Value;
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use qpx::config;
use qpx::extract::resolve_charset;
use qpx::models::{FieldSchema, Record};
use qpx::services::{read_indirect, read_lines, read_stdin_lines};
use qpx::transform::{register_builtin, RecordTransform, TransformRegistry, EXTRACT_QUERY_PARAMS};
use qpx::utils::{pairs_row, selected_row};

#[derive(Parser)]
#[command(
    name = "qpx",
    author,
    version,
    about = "Extract query parameters from URLs and query strings",
    long_about = r#"qpx reads one URL or query string per line and prints the parameters it contains.

Keys and values are percent-decoded with the configured encoding. Repeated keys keep their first value; a key without `=` maps to null. A URL with no `?` and an http(s) scheme has no parameters, and a line holding just `-` is explicitly empty.

Examples:
  1) Parse a log of URLs to JSON lines:
      qpx extract access.log
  2) Pull two parameters out as tab-separated columns:
      qpx extract --select foo,bar access.log
  3) Read every file named in a list, repairing double-encoded input:
      qpx extract --paths-from inputs.txt --detect-double-encoding
"#,
    after_help = "Use `qpx <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse each input line into query parameters
    Extract {
        /// Input files, one URL or query string per line (stdin when none given)
        files: Vec<PathBuf>,
        /// File listing further input files, one path per line
        #[arg(long)]
        paths_from: Option<PathBuf>,
        /// Encoding used to interpret %xx escapes (overrides QPX_ENCODING)
        #[arg(long)]
        encoding: Option<String>,
        /// Decode once more when input looks double-encoded
        #[arg(long)]
        detect_double_encoding: bool,
        /// Name of the output field (overrides QPX_OUTPUT_FIELD)
        #[arg(long)]
        field: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// Comma-separated keys to print as tab-separated columns (implies tsv)
        #[arg(long, value_delimiter = ',')]
        select: Vec<String>,
        /// Log and skip lines that fail to decode instead of stopping
        #[arg(long)]
        skip_errors: bool,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Validate configuration (encoding and flags from env vars)
    CheckConfig {
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One JSON object per line
    Json,
    /// A table of line, key and value
    Table,
    /// Tab-separated: `--select` columns, or `key=value` cells in input order
    Tsv,
}

fn fail(context: &str, e: impl std::fmt::Display) -> ! {
    tracing::error!(%e, "{}", context);
    eprintln!("{}: {}", yansi::Paint::new(context).red(), e);
    process::exit(1);
}

fn collect_lines(files: &[PathBuf], paths_from: Option<&PathBuf>) -> Vec<String> {
    let mut lines = Vec::new();
    for path in files {
        match read_lines(path) {
            Ok(l) => lines.extend(l),
            Err(e) => fail("Failed to read input", e),
        }
    }
    if let Some(list) = paths_from {
        match read_indirect(list) {
            Ok(l) => lines.extend(l),
            Err(e) => fail("Failed to read input list", e),
        }
    }
    if files.is_empty() && paths_from.is_none() {
        match read_stdin_lines() {
            Ok(l) => lines.extend(l),
            Err(e) => fail("Failed to read input", e),
        }
    }
    lines
}

fn cell(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table.set_header(vec!["Line", "Key", "Value"]);
    table
}

fn add_table_rows(table: &mut Table, line_no: usize, params: &Value) {
    if let Some(obj) = params.as_object() {
        for (k, v) in obj {
            let shown = match v {
                Value::Null => yansi::Paint::new("(null)").dim().to_string(),
                other => cell(Some(other)),
            };
            table.add_row(vec![line_no.to_string(), k.clone(), shown]);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn run_extract(
    files: Vec<PathBuf>,
    paths_from: Option<PathBuf>,
    encoding: Option<String>,
    detect_double_encoding: bool,
    field: Option<String>,
    format: OutputFormat,
    select: Vec<String>,
    skip_errors: bool,
) {
    let encoding = encoding.unwrap_or_else(config::get_encoding);
    let detect = detect_double_encoding || config::get_detect_double_encoding();
    let flag = if detect { "true" } else { "false" };

    let mut registry = TransformRegistry::new();
    register_builtin(&mut registry);
    let transform: Box<dyn RecordTransform> =
        match registry.create(EXTRACT_QUERY_PARAMS, &[encoding.as_str(), flag]) {
            Ok(t) => t,
            Err(e) => fail("Invalid configuration", e),
        };

    let input_schema = field
        .or_else(config::get_output_field)
        .map(|alias| vec![FieldSchema::named(alias)]);
    let output = transform.output_schema(input_schema.as_deref());
    let output_field = output
        .alias
        .unwrap_or_else(|| config::DEFAULT_OUTPUT_FIELD.to_string());

    let lines = collect_lines(&files, paths_from.as_ref());
    tracing::info!(
        lines = lines.len(),
        encoding = %encoding,
        detect_double_encoding = detect,
        "extracting query parameters"
    );

    let mut table = (format == OutputFormat::Table && select.is_empty()).then(new_table);
    let mut skipped = 0usize;

    for (idx, line) in lines.iter().enumerate() {
        let line_no = idx + 1;
        let record = Record::single(line.as_str());
        let params = match transform.apply(Some(&record)) {
            Ok(p) => p,
            Err(e) if skip_errors => {
                tracing::warn!(line = line_no, %e, "skipping record");
                skipped += 1;
                continue;
            }
            Err(e) => fail(&format!("Line {}", line_no), e),
        };

        if !select.is_empty() {
            println!("{}", selected_row(params.as_ref(), &select));
        } else if format == OutputFormat::Tsv {
            println!("{}", params.as_ref().map(pairs_row).unwrap_or_default());
        } else if let Some(table) = table.as_mut() {
            if let Some(p) = &params {
                add_table_rows(table, line_no, p);
            }
        } else {
            let mut out = serde_json::Map::new();
            out.insert(output_field.clone(), params.unwrap_or(Value::Null));
            println!("{}", Value::Object(out));
        }
    }

    if let Some(table) = table {
        println!("\n{table}\n");
    }
    if skipped > 0 {
        eprintln!(
            "{}",
            yansi::Paint::new(format!("Skipped {} of {} lines", skipped, lines.len())).yellow()
        );
    }
}

fn run_check_config() {
    let encoding = config::get_encoding();
    let charset = match resolve_charset(&encoding) {
        Ok(c) => c,
        Err(e) => fail("Configuration appears invalid", e),
    };
    let field = config::get_output_field().unwrap_or_else(|| config::DEFAULT_OUTPUT_FIELD.to_string());

    println!("Encoding: {} (from '{}')", charset.name(), encoding);
    println!(
        "Double-encoding detection: {}",
        if config::get_detect_double_encoding() { "on" } else { "off" }
    );
    println!("Output field: {}", field);
    println!("{}", yansi::Paint::new("Configuration looks valid").green());
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    match cli.command {
        Commands::Extract {
            files,
            paths_from,
            encoding,
            detect_double_encoding,
            field,
            format,
            select,
            skip_errors,
            env_file,
        } => {
            config::load_env_file(env_file.as_deref());
            run_extract(
                files,
                paths_from,
                encoding,
                detect_double_encoding,
                field,
                format,
                select,
                skip_errors,
            );
        }
        Commands::CheckConfig { env_file } => {
            config::load_env_file(env_file.as_deref());
            run_check_config();
        }
    }
}
