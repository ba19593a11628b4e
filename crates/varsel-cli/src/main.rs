mod pick;
mod report;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use varsel_catalog::{load_product, normalize_product, selection_vector, ProductRecord};
use varsel_core::{AppConfig, SelectionVector};
use varsel_resolver::{available_options_at, VariantSelector};

use crate::pick::{parse_pick, resolve_axis, resolve_pick, Pick};

#[derive(Debug, Parser)]
#[command(name = "varsel")]
#[command(about = "Resolve product variant selections against catalog data")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the normalized axes, selection and combination index of a product
    Inspect {
        /// Product record (JSON, or YAML by extension); defaults to `VARSEL_CATALOG_PATH`
        path: Option<PathBuf>,
    },
    /// Print the option values still reachable on one axis
    Available {
        /// Axis api name or zero-based index
        #[arg(long)]
        axis: String,

        /// Choice applied on top of the product's selection, as `AXIS=VALUE`
        #[arg(long = "select", value_parser = parse_pick)]
        picks: Vec<Pick>,

        path: Option<PathBuf>,
    },
    /// Replay choices through the picker and print each notification
    Resolve {
        /// Choice to apply, in order, as `AXIS=VALUE` (empty value clears)
        #[arg(long = "select", value_parser = parse_pick)]
        picks: Vec<Pick>,

        /// Start from an empty selection instead of the product's own
        #[arg(long)]
        clear: bool,

        path: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = varsel_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Inspect { path }) => run_inspect(&config, path.as_deref()),
        Some(Commands::Available { axis, picks, path }) => {
            run_available(&config, &axis, &picks, path.as_deref())
        }
        Some(Commands::Resolve { picks, clear, path }) => {
            run_resolve(&config, &picks, clear, path.as_deref())
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

fn load(config: &AppConfig, path: Option<&Path>) -> anyhow::Result<ProductRecord> {
    let path = path.unwrap_or(config.catalog_path.as_path());
    tracing::debug!(path = %path.display(), env = %config.env, "loading product record");
    load_product(path).with_context(|| format!("loading {}", path.display()))
}

fn run_inspect(config: &AppConfig, path: Option<&Path>) -> anyhow::Result<()> {
    println!("{}", inspect_json(config, path)?);
    Ok(())
}

fn run_available(
    config: &AppConfig,
    axis: &str,
    picks: &[Pick],
    path: Option<&Path>,
) -> anyhow::Result<()> {
    println!("{}", available_json(config, axis, picks, path)?);
    Ok(())
}

fn run_resolve(
    config: &AppConfig,
    picks: &[Pick],
    clear: bool,
    path: Option<&Path>,
) -> anyhow::Result<()> {
    println!("{}", resolve_json(config, picks, clear, path)?);
    Ok(())
}

fn inspect_json(config: &AppConfig, path: Option<&Path>) -> anyhow::Result<String> {
    let product = load(config, path)?;
    let normalized = normalize_product(&product).ok_or_else(|| no_picker(&product))?;
    Ok(report::render_json(config.output, &normalized)?)
}

fn available_json(
    config: &AppConfig,
    axis: &str,
    picks: &[Pick],
    path: Option<&Path>,
) -> anyhow::Result<String> {
    let product = load(config, path)?;
    let normalized = normalize_product(&product).ok_or_else(|| no_picker(&product))?;

    let axis_index = resolve_axis(&normalized.axes, axis)?;
    let mut selection = selection_vector(&normalized.axes, product.selected_attributes());
    for pick in picks {
        let index = resolve_pick(&normalized.axes, pick)?;
        selection.set(index, pick.value.as_str());
    }

    let available = available_options_at(axis_index, &selection, &normalized.valid_combinations);
    Ok(report::render_json(
        config.output,
        &report::AvailabilityReport {
            axis: &normalized.axes[axis_index].id,
            selection: &selection,
            available: &available,
        },
    )?)
}

fn resolve_json(
    config: &AppConfig,
    picks: &[Pick],
    clear: bool,
    path: Option<&Path>,
) -> anyhow::Result<String> {
    let product = load(config, path)?;
    let mut selector =
        VariantSelector::for_product(&product).ok_or_else(|| no_picker(&product))?;
    if clear {
        let variants = selector.variants().clone();
        let empty = SelectionVector::with_len(variants.axes.len());
        selector.reset(variants, &empty);
    }

    let mut events = Vec::with_capacity(picks.len());
    for pick in picks {
        let index = resolve_pick(selector.axes(), pick)?;
        if let Some(event) = selector.change(index, &pick.value) {
            events.push(event);
        }
    }

    Ok(report::render_json(
        config.output,
        &report::ResolveReport {
            events: &events,
            current: &selector.notification(),
            validity: selector.validity(),
            axes: &selector.axes_view(),
        },
    )?)
}

fn no_picker(product: &ProductRecord) -> anyhow::Error {
    anyhow::anyhow!(
        "product {} is a {} product and has no variant picker",
        product.id.as_deref().unwrap_or("<unknown>"),
        product.product_class
    )
}
