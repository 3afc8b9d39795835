mod config;
mod logging;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use config::{CliConfig, ImageFormat};
use render::RenderOptions;
use slidekit_core::{
    ExtractorSettings, PmlDocument, PmlExtractor, PresentationContent, SlideSelection,
};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "slidekit")]
#[command(version, about = "PowerPoint content and animation extraction", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract slide images, notes and animations into one JSON file
    Extract {
        /// Path to the .pptx file
        #[arg(value_name = "PPTX")]
        pptx: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// What to extract
        #[arg(short, long = "extract", value_enum, num_args = 1.., required = true)]
        extract: Vec<Facet>,

        /// Slide image format
        #[arg(short, long, value_enum)]
        format: Option<ImageFormat>,

        /// Slide image resolution
        #[arg(short, long)]
        dpi: Option<u32>,

        /// Slides to process, e.g. "1-3,7,9-11"
        #[arg(long)]
        slide_nums: Option<String>,

        /// Configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Name of the JSON file written into the output directory
        #[arg(long)]
        output_filename: Option<String>,

        #[arg(short, long)]
        verbose: bool,
    },
    /// Write per-slide animation records as JSON
    Animations {
        /// Path to the .pptx file
        #[arg(value_name = "PPTX")]
        pptx: PathBuf,

        /// Output JSON file
        #[arg(short, long, default_value = "./animations.json")]
        output: PathBuf,

        /// Slides to process, e.g. "1-3,7,9-11"
        #[arg(long)]
        slide_nums: Option<String>,

        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Facet {
    Images,
    Notes,
    Animations,
    All,
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Facets {
    images: bool,
    notes: bool,
    animations: bool,
}

impl Facets {
    fn from_args(requested: &[Facet]) -> Self {
        let all = requested.contains(&Facet::All);
        Self {
            images: all || requested.contains(&Facet::Images),
            notes: all || requested.contains(&Facet::Notes),
            animations: all || requested.contains(&Facet::Animations),
        }
    }
}

struct ExtractJob {
    pptx: PathBuf,
    output_dir: PathBuf,
    output_filename: String,
    facets: Facets,
    selection: Option<SlideSelection>,
    render: RenderOptions,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            pptx,
            output,
            extract,
            format,
            dpi,
            slide_nums,
            config,
            output_filename,
            verbose,
        } => {
            logging::init_logging(verbose);
            let config = CliConfig::load(config.as_deref())?;
            let defaults = config.cli_defaults.clone();
            let job = ExtractJob {
                pptx,
                output_dir: output.unwrap_or(defaults.output_directory),
                output_filename: output_filename.unwrap_or(defaults.output_filename),
                facets: Facets::from_args(&extract),
                selection: slide_nums.as_deref().and_then(parse_selection),
                render: RenderOptions {
                    format: format.unwrap_or(defaults.image_format),
                    dpi: dpi.unwrap_or(defaults.dpi),
                },
            };
            run_extract(&job, &config)
        }
        Commands::Animations {
            pptx,
            output,
            slide_nums,
            verbose,
        } => {
            logging::init_logging(verbose);
            run_animations(&pptx, &output, slide_nums.as_deref())
        }
    }
}

/// `None` when no fragment was usable, so every slide is processed.
fn parse_selection(input: &str) -> Option<SlideSelection> {
    let selection = SlideSelection::parse(input);
    if selection.is_empty() {
        warn!(input, "no valid slide numbers given, processing all slides");
        return None;
    }
    info!(slides = selection.len(), "processing selected slides only");
    Some(selection)
}

fn open(pptx: &Path) -> Result<PmlDocument> {
    PmlDocument::from_file(pptx).with_context(|| format!("failed to open {}", pptx.display()))
}

fn run_extract(job: &ExtractJob, config: &CliConfig) -> Result<()> {
    std::fs::create_dir_all(&job.output_dir)
        .with_context(|| format!("failed to create {}", job.output_dir.display()))?;
    let doc = open(&job.pptx)?;

    let total = doc.slides()?.len();
    let to_process = match &job.selection {
        Some(selection) => (1..=total).filter(|&n| selection.contains(n)).count(),
        None => total,
    };
    let estimate = config.timeouts.estimate(to_process);
    info!(
        slides = to_process,
        "estimated processing time: up to {} seconds ({} minutes)",
        estimate,
        estimate / 60
    );

    let settings = ExtractorSettings {
        slides: job.selection.clone(),
        extract_notes: job.facets.notes,
        extract_animations: job.facets.animations,
    };
    let mut content = PmlExtractor::extract(&doc, Some(&settings))?;

    let mut image_count = 0;
    if job.facets.images {
        match attach_images(job, &mut content) {
            Ok(count) => image_count = count,
            Err(err) => error!("slide image extraction failed: {:#}", err),
        }
    }

    let json_path = job.output_dir.join(&job.output_filename);
    write_json(&json_path, &content)?;

    println!("\nExtraction Summary:");
    if job.facets.notes {
        println!("- Notes extracted from {} slides", content.slides.len());
    }
    if job.facets.animations {
        println!("- Animations extracted from {} slides", content.slides.len());
    }
    if job.facets.images {
        println!("- {} slides extracted as images", image_count);
    }
    println!("\nOutput directory: {}", job.output_dir.display());
    println!("Unified presentation content saved to: {}", json_path.display());
    Ok(())
}

/// Renders the selected slides and records each image path relative to the
/// output directory.
fn attach_images(job: &ExtractJob, content: &mut PresentationContent) -> Result<usize> {
    let slides: Vec<(usize, String)> = content
        .slides
        .iter()
        .map(|s| (s.number, s.title.clone()))
        .collect();
    let images = render::render_slides(
        &job.pptx,
        &job.output_dir.join("slides"),
        &slides,
        &job.render,
    )?;

    for (number, path) in &images {
        if let Some(slide) = content.slides.iter_mut().find(|s| s.number == *number) {
            let relative = path.strip_prefix(&job.output_dir).unwrap_or(path);
            slide.image_path = Some(relative.to_string_lossy().into_owned());
        }
    }
    Ok(images.len())
}

fn run_animations(pptx: &Path, output: &Path, slide_nums: Option<&str>) -> Result<()> {
    let doc = open(pptx)?;
    let settings = ExtractorSettings {
        slides: slide_nums.and_then(parse_selection),
        ..ExtractorSettings::default()
    };
    let records = PmlExtractor::extract_animations(&doc, Some(&settings))?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    write_json(output, &records)?;
    info!(slides = records.len(), path = %output.display(), "saved animation information");
    Ok(())
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn all_enables_every_facet() {
        assert_eq!(
            Facets::from_args(&[Facet::All]),
            Facets {
                images: true,
                notes: true,
                animations: true
            }
        );
        assert_eq!(
            Facets::from_args(&[Facet::Notes, Facet::Animations]),
            Facets {
                images: false,
                notes: true,
                animations: true
            }
        );
    }

    #[test]
    fn extract_accepts_multiple_facets() {
        let cli = Cli::try_parse_from([
            "slidekit", "extract", "deck.pptx", "-e", "notes", "animations", "-d", "150",
        ])
        .unwrap();
        match cli.command {
            Commands::Extract { extract, dpi, .. } => {
                assert_eq!(extract, vec![Facet::Notes, Facet::Animations]);
                assert_eq!(dpi, Some(150));
            }
            _ => panic!("expected extract"),
        }
    }

    #[test]
    fn unusable_slide_numbers_mean_all_slides() {
        assert_eq!(parse_selection("abc, x-y"), None);
        let selection = parse_selection("2-3").unwrap();
        assert!(selection.contains(2));
        assert!(!selection.contains(1));
    }

    #[test]
    fn extract_requires_a_facet() {
        assert!(Cli::try_parse_from(["slidekit", "extract", "deck.pptx"]).is_err());
    }
}
