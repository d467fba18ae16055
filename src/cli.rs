// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::{
    catalog::{ParseMode, group_by_field},
    config::{
        consts::{DEFAULT_CATEGORY, FIELD_CATEGORY},
        options::{AppOptions, ExportFormat, ExportType, Source},
    },
    file, load,
    progress::Progress,
    render,
};

enum Action {
    /// Sectioned listing on stdout (default).
    Print,
    /// One "label,count" line per category.
    ListCategories,
    /// Write CSV/TSV file(s).
    Export,
}

struct Params {
    options: AppOptions,
    action: Action,
    field: String,
}

/// Prints status lines to stderr so stdout stays machine-readable.
struct StderrProgress;
impl Progress for StderrProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_cli()?;

    let set = load::collect_catalog(&params.options.source, Some(&mut StderrProgress))?;

    match params.action {
        Action::ListCategories => {
            let index = group_by_field(set, &params.field, DEFAULT_CATEGORY);
            for (label, records) in index.iter() {
                println!("{},{}", label, records.len());
            }
        }
        Action::Print => {
            let index = group_by_field(set, &params.field, DEFAULT_CATEGORY);
            for section in render::build_sections(&index) {
                println!("{} ({})", section.heading, section.cards.len());
                for card in &section.cards {
                    match &card.link {
                        Some(link) => println!("  {} — {} <{}>", card.title, card.description, link),
                        None => println!("  {} — {}", card.title, card.description),
                    }
                }
                println!();
            }
        }
        Action::Export => {
            let export = &params.options.export;
            let written = match export.export_type {
                ExportType::SingleFile => vec![file::write_export_single(export, &set)?],
                ExportType::PerCategory => {
                    let index = group_by_field(set, &params.field, DEFAULT_CATEGORY);
                    file::write_export_per_category(export, &index)?
                }
            };
            for path in written {
                eprintln!("Wrote {}", path.display());
            }
        }
    }

    Ok(())
}

fn parse_cli() -> Result<Params, Box<dyn Error>> {
    let mut options = AppOptions::default();
    let mut action = Action::Print;
    let mut field = s!(FIELD_CATEGORY);

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-f" | "--file" => {
                let v = args.next().ok_or("Missing value for --file")?;
                options.source.source = Source::File(PathBuf::from(v));}
            "--strict" => options.source.mode = ParseMode::Strict,
            "--field" => field = args.next().ok_or("Missing value for --field")?,
            "--list-categories" => action = Action::ListCategories,
            "-o" | "--out" => {
                let v = args.next().ok_or("Missing output path")?;
                options.export.set_path(&v);
                action = Action::Export;}
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                options.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "--per-category" => {
                options.export.export_type = ExportType::PerCategory;
                action = Action::Export;}
            "--no-headers" => options.export.include_headers = false,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(Params { options, action, field })
}
