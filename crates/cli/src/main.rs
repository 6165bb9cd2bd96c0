//! CLI tool for converting PowerPoint files to Markdown.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pptmd_core::{ConvertOptions, HeadingOrder};
use pptmd_pptx::{Conversion, Package, PptxConverter};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Convert PowerPoint (.pptx) files to Markdown.
#[derive(Parser, Debug)]
#[command(name = "pptx2md")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input .pptx file(s), or directories holding an already unpacked package
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output directory (default: same as input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print output to stdout instead of writing to file
    #[arg(short, long)]
    print: bool,

    /// Path that replaces `../media` in image links
    #[arg(long)]
    asset_prefix: Option<String>,

    /// Order of promoted headings when a slide has several
    #[arg(long, value_enum, default_value_t = HeadingOrderArg::Reverse)]
    heading_order: HeadingOrderArg,

    /// Emit slide records and diagnostics as JSON instead of Markdown
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum HeadingOrderArg {
    Reverse,
    Encounter,
}

impl From<HeadingOrderArg> for HeadingOrder {
    fn from(arg: HeadingOrderArg) -> Self {
        match arg {
            HeadingOrderArg::Reverse => HeadingOrder::Reverse,
            HeadingOrderArg::Encounter => HeadingOrder::Encounter,
        }
    }
}

/// Output flavor chosen on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Markdown,
    Json,
}

impl OutputFormat {
    fn from_args(args: &Args) -> Self {
        if args.json {
            Self::Json
        } else {
            Self::Markdown
        }
    }

    fn extension(self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Json => "json",
        }
    }

    fn render(self, input_path: &Path, conversion: &Conversion) -> Result<String> {
        match self {
            Self::Markdown => Ok(conversion.document.to_markdown()),
            Self::Json => {
                let output = JsonOutput {
                    source: input_path.display().to_string(),
                    conversion,
                };
                let mut json = serde_json::to_string_pretty(&output)?;
                json.push('\n');
                Ok(json)
            }
        }
    }
}

/// JSON view of a conversion.
#[derive(Serialize)]
struct JsonOutput<'a> {
    source: String,
    #[serde(flatten)]
    conversion: &'a Conversion,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let mut options = ConvertOptions::new().with_heading_order(args.heading_order.into());
    if let Some(prefix) = &args.asset_prefix {
        options = options.with_asset_path_prefix(prefix.clone());
    }
    let converter = PptxConverter::with_options(options);
    let format = OutputFormat::from_args(&args);

    let mut failed = 0;
    for input_path in &args.input {
        if args.verbose {
            eprintln!("Processing: {}", input_path.display());
        }

        let result = convert_input(input_path, &converter, args.verbose)
            .and_then(|conversion| format.render(input_path, &conversion));

        match result {
            Ok(output) if args.print => print!("{}", output),
            Ok(output) => {
                let written = save(input_path, args.output.as_deref(), format, &output)?;
                if args.verbose {
                    eprintln!("Written to: {}", written.display());
                }
            }
            Err(e) => {
                eprintln!("Error processing {}: {:#}", input_path.display(), e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} file(s) failed", failed, args.input.len());
    }

    Ok(())
}

/// Convert a `.pptx` file, or a directory holding an unpacked package.
fn convert_input(input_path: &Path, converter: &PptxConverter, verbose: bool) -> Result<Conversion> {
    let converted = if input_path.is_dir() {
        let package = Package::scan_dir(input_path)
            .with_context(|| format!("Failed to scan {}", input_path.display()))?;
        log::debug!("Package has {} files", package.files().len());
        converter.convert(&package)
    } else {
        converter.convert_file(input_path)
    };
    let conversion =
        converted.with_context(|| format!("Failed to convert {}", input_path.display()))?;

    if verbose {
        eprintln!(
            "  Found {} slides, {} with content",
            conversion.slides.len(),
            conversion.slides.iter().filter(|s| !s.record.is_empty()).count()
        );
        for diagnostic in conversion.diagnostics.warnings() {
            eprintln!("  warning: {}: {}", diagnostic.part, diagnostic.kind);
        }
    }

    Ok(conversion)
}

/// Write rendered output as `<stem>.<ext>` under `output_dir`, or next to the input.
fn save(
    input_path: &Path,
    output_dir: Option<&Path>,
    format: OutputFormat,
    content: &str,
) -> Result<PathBuf> {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let filename = format!("{}.{}", stem, format.extension());

    let dir = match output_dir {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.to_path_buf()
        }
        None => input_path.parent().map(Path::to_path_buf).unwrap_or_default(),
    };

    let path = dir.join(filename);
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::TempDir;
    use zip::write::FileOptions;
    use zip::ZipWriter;

    const SLIDE: &str = r#"<p:sld xmlns:p="p" xmlns:a="a"><p:cSld><p:spTree><p:sp><p:nvSpPr><p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr><p:txBody><a:p><a:r><a:t>Welcome</a:t></a:r></a:p></p:txBody></p:sp></p:spTree></p:cSld></p:sld>"#;

    fn write_pptx(path: &Path) {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer.start_file("ppt/slides/slide1.xml", FileOptions::default()).unwrap();
        writer.write_all(SLIDE.as_bytes()).unwrap();
        fs::write(path, writer.finish().unwrap().into_inner()).unwrap();
    }

    #[test]
    fn test_convert_pptx_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("talk.pptx");
        write_pptx(&input);

        let conversion = convert_input(&input, &PptxConverter::new(), false).unwrap();
        assert_eq!(conversion.document.to_markdown(), "---\n\n## Welcome\n\n");

        let written = save(&input, None, OutputFormat::Markdown, "# out\n").unwrap();
        assert_eq!(written, dir.path().join("talk.md"));
        assert_eq!(fs::read_to_string(written).unwrap(), "# out\n");
    }

    #[test]
    fn test_convert_unpacked_directory() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("talk");
        fs::create_dir_all(root.join("ppt/slides")).unwrap();
        fs::write(root.join("ppt/slides/slide1.xml"), SLIDE).unwrap();

        let conversion = convert_input(&root, &PptxConverter::new(), false).unwrap();
        assert_eq!(conversion.slides.len(), 1);
        assert_eq!(conversion.document.lines, vec!["---", "", "## Welcome", ""]);
    }

    #[test]
    fn test_missing_input_fails() {
        let dir = TempDir::new().unwrap();
        assert!(convert_input(&dir.path().join("none.pptx"), &PptxConverter::new(), false).is_err());
    }

    #[test]
    fn test_save_json_into_output_dir() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out");
        let written = save(Path::new("decks/talk.pptx"), Some(&out), OutputFormat::Json, "{}\n").unwrap();
        assert_eq!(written, out.join("talk.json"));
        assert!(written.exists());
    }

    #[test]
    fn test_render_json_names_source() {
        let conversion = PptxConverter::new()
            .convert(&Package::from_dir("unused", Vec::new()))
            .unwrap();
        let json = OutputFormat::Json.render(Path::new("talk.pptx"), &conversion).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["source"], "talk.pptx");
        assert!(value["slides"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from([
            "pptx2md",
            "talk.pptx",
            "--asset-prefix",
            "/img",
            "--heading-order",
            "encounter",
        ]);
        assert_eq!(args.asset_prefix.as_deref(), Some("/img"));
        assert_eq!(HeadingOrder::from(args.heading_order), HeadingOrder::Encounter);
        assert!(!args.json);
    }
}
