use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use faceshape_core::catalog::domain::catalog::Catalog;
use faceshape_core::catalog::domain::catalog_source::CatalogSource;
use faceshape_core::catalog::domain::facets::facets;
use faceshape_core::catalog::domain::frame_filter::{filter_catalog, FrameFilter};
use faceshape_core::catalog::domain::frame_record::Gender;
use faceshape_core::catalog::infrastructure::json_catalog_source::JsonCatalogSource;
use faceshape_core::classification::domain::face_shape_classifier::FaceShapeClassifier;
use faceshape_core::classification::infrastructure::artifact_resolver;
use faceshape_core::classification::infrastructure::classifier_factory::{
    create_classifier, ClassifierKind,
};
use faceshape_core::config::settings::Settings;
use faceshape_core::features::domain::landmark::LandmarkSet;
use faceshape_core::pipeline::classify_face_use_case::ClassifyFaceUseCase;
use faceshape_core::recommendation::recommendation_resolver::recommend_by_name;
use faceshape_core::shared::frame_style::FrameStyle;

/// Face-shape classification and eyewear frame recommendations.
#[derive(Parser)]
#[command(name = "faceshape")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Classifier strategy: rule or statistical (overrides settings).
    #[arg(long, global = true)]
    classifier: Option<String>,

    /// Classifier artifact file for the statistical strategy.
    #[arg(long, global = true)]
    artifacts: Option<PathBuf>,

    /// Frame catalog JSON file (overrides settings).
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Classify a landmark file (JSON array of {x, y, z}; null = no face).
    Classify { landmarks: PathBuf },

    /// List recommended frame styles for a face shape.
    Recommend { shape: String },

    /// Filter the frame catalog.
    Frames {
        /// Face shape (expanded to recommended styles) or literal frame shape.
        #[arg(long)]
        shape: Option<String>,

        /// Only these frame styles (comma-separated).
        #[arg(long, value_delimiter = ',')]
        styles: Option<Vec<String>>,

        #[arg(long)]
        min_price: Option<f64>,

        #[arg(long)]
        max_price: Option<f64>,

        #[arg(long)]
        brand: Option<String>,

        /// male, female or unisex. Unisex frames match every value.
        #[arg(long)]
        gender: Option<String>,

        #[arg(long)]
        age_group: Option<String>,
    },

    /// Show distinct filter values and the price range of the catalog.
    Facets,

    /// Persist the given --classifier / --catalog (and artifact name) as
    /// defaults, then print the resulting settings.
    Config {
        /// Artifact file name looked up in the cache and bundled directories.
        #[arg(long)]
        artifact_name: Option<String>,
    },
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let settings = Settings::load();

    match &cli.command {
        Command::Classify { landmarks } => run_classify(&cli, &settings, landmarks),
        Command::Recommend { shape } => {
            print_json(&recommend_by_name(shape)?)?;
            Ok(())
        }
        Command::Frames {
            shape,
            styles,
            min_price,
            max_price,
            brand,
            gender,
            age_group,
        } => {
            let filter = FrameFilter {
                shape: shape.clone(),
                styles: styles.as_deref().map(parse_styles).transpose()?,
                min_price: *min_price,
                max_price: *max_price,
                brand: brand.clone(),
                gender: gender.as_deref().map(str::parse::<Gender>).transpose()?,
                age_group: age_group.clone(),
            };
            validate_filter(&filter)?;
            let catalog = load_catalog(&cli, &settings)?;
            print_json(&filter_catalog(&catalog, &filter))?;
            Ok(())
        }
        Command::Facets => {
            let catalog = load_catalog(&cli, &settings)?;
            print_json(&facets(&catalog))?;
            Ok(())
        }
        Command::Config { artifact_name } => {
            let updated = apply_overrides(&cli, settings, artifact_name.as_deref())?;
            updated.save();
            print_json(&updated)?;
            Ok(())
        }
    }
}

fn apply_overrides(
    cli: &Cli,
    mut settings: Settings,
    artifact_name: Option<&str>,
) -> Result<Settings, Box<dyn std::error::Error>> {
    if let Some(name) = &cli.classifier {
        settings.classifier = name.parse::<ClassifierKind>()?;
    }
    if let Some(path) = &cli.catalog {
        settings.catalog_path = Some(path.clone());
    }
    if let Some(name) = artifact_name {
        settings.artifact_name = name.to_string();
    }
    Ok(settings)
}

fn run_classify(
    cli: &Cli,
    settings: &Settings,
    landmarks_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    if !landmarks_path.exists() {
        return Err(format!("Landmark file not found: {}", landmarks_path.display()).into());
    }
    let json = fs::read_to_string(landmarks_path)?;
    let landmarks: Option<LandmarkSet> = serde_json::from_str(&json)?;

    let use_case = ClassifyFaceUseCase::new(build_classifier(cli, settings)?);
    let analysis = use_case.execute(landmarks.as_ref())?;
    print_json(&analysis)?;
    Ok(())
}

fn build_classifier(
    cli: &Cli,
    settings: &Settings,
) -> Result<Box<dyn FaceShapeClassifier>, Box<dyn std::error::Error>> {
    let kind = match &cli.classifier {
        Some(name) => name.parse::<ClassifierKind>()?,
        None => settings.classifier,
    };

    let artifact_path = match kind {
        ClassifierKind::Rule => None,
        ClassifierKind::Statistical => {
            log::info!("Resolving classifier artifacts: {}", settings.artifact_name);
            Some(artifact_resolver::resolve(
                &settings.artifact_name,
                cli.artifacts.as_deref(),
                None,
            )?)
        }
    };

    Ok(create_classifier(kind, artifact_path.as_deref())?)
}

fn load_catalog(cli: &Cli, settings: &Settings) -> Result<Catalog, Box<dyn std::error::Error>> {
    let path = cli
        .catalog
        .clone()
        .or_else(|| settings.catalog_path.clone())
        .ok_or("No catalog given; pass --catalog or set catalog_path in settings")?;
    if !path.exists() {
        return Err(format!("Catalog file not found: {}", path.display()).into());
    }
    Ok(JsonCatalogSource::new(path).load()?)
}

fn parse_styles(names: &[String]) -> Result<Vec<FrameStyle>, Box<dyn std::error::Error>> {
    names
        .iter()
        .map(|name| name.parse::<FrameStyle>().map_err(Into::into))
        .collect()
}

fn validate_filter(filter: &FrameFilter) -> Result<(), Box<dyn std::error::Error>> {
    for (flag, value) in [("--min-price", filter.min_price), ("--max-price", filter.max_price)] {
        if let Some(price) = value {
            if !price.is_finite() || price < 0.0 {
                return Err(format!("{flag} must be a non-negative number, got {price}").into());
            }
        }
    }
    if let (Some(min), Some(max)) = (filter.min_price, filter.max_price) {
        if min > max {
            return Err(format!("--min-price ({min}) must not exceed --max-price ({max})").into());
        }
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
