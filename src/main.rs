use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use ratingcluster::{
    analyze, clusterer, AnalysisConfig, CsvColumns, Dataset, InitStrategy, KMeansConfig,
    OutlierRule,
};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum InitArg {
    /// Draw k distinct records as starting centroids
    Sampled,
    /// Draw starting centroids uniformly from [range-min, range-max]
    Ranged,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutlierArg {
    /// Ratings outside mean ± 2σ
    Sigma,
    /// Members of clusters smaller than the mean cluster size
    SmallClusters,
}

/// Cluster movie ratings with k-means and flag outliers
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// CSV file with a header row
    #[arg(short, long)]
    file: PathBuf,

    /// Percentage of leading rows to read (0-100)
    #[arg(short, long, default_value_t = 100.0)]
    percentage: f64,

    /// Number of clusters
    #[arg(short)]
    k: usize,

    /// Seed for centroid initialization and reseeding
    #[arg(long, default_value_t = clusterer::DEFAULT_SEED)]
    seed: u64,

    /// Centroid initialization strategy
    #[arg(long, value_enum, default_value_t = InitArg::Sampled)]
    init: InitArg,

    /// Lower bound for ranged initialization
    #[arg(long, default_value_t = clusterer::DEFAULT_RANGE.0)]
    range_min: f64,

    /// Upper bound for ranged initialization
    #[arg(long, default_value_t = clusterer::DEFAULT_RANGE.1)]
    range_max: f64,

    /// Give up after this many iterations
    #[arg(long, default_value_t = clusterer::DEFAULT_MAX_ITERS)]
    max_iters: usize,

    /// Outlier rule
    #[arg(long, value_enum, default_value_t = OutlierArg::Sigma)]
    outlier_rule: OutlierArg,

    /// Column holding the record name
    #[arg(long, default_value = "Movie Name")]
    name_column: String,

    /// Column holding the numeric rating
    #[arg(long, default_value = "IMDB Rating")]
    value_column: String,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn analysis_config(&self) -> AnalysisConfig {
        let init = match self.init {
            InitArg::Sampled => InitStrategy::Sampled,
            InitArg::Ranged => InitStrategy::Ranged {
                min: self.range_min,
                max: self.range_max,
            },
        };
        let outlier_rule = match self.outlier_rule {
            OutlierArg::Sigma => OutlierRule::Sigma,
            OutlierArg::SmallClusters => OutlierRule::SmallClusters,
        };

        AnalysisConfig::new(self.k)
            .kmeans(
                KMeansConfig::new(self.k)
                    .max_iters(self.max_iters)
                    .init(init)
                    .seed(self.seed),
            )
            .outlier_rule(outlier_rule)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let start_time = Instant::now();

    // Step 1: Load records
    let columns = CsvColumns::new(cli.name_column.as_str(), cli.value_column.as_str());
    let dataset = Dataset::load_csv_percentage(&cli.file, &columns, cli.percentage)
        .with_context(|| format!("Failed to load {}", cli.file.display()))?;
    let load_duration = start_time.elapsed();

    // Step 2: Cluster and flag outliers
    let config = cli.analysis_config();
    let report = analyze(&dataset, &config).with_context(|| {
        format!(
            "Clustering {} records into {} clusters failed",
            dataset.len(),
            cli.k
        )
    })?;
    let total_duration = start_time.elapsed();

    if cli.json {
        println!("{}", report.to_json().context("Failed to serialize report")?);
        return Ok(());
    }

    println!(
        "✓ Loaded {} records ({}% of {}) [{:.3}s]",
        dataset.len(),
        cli.percentage,
        cli.file.display(),
        load_duration.as_secs_f64()
    );
    println!(
        "✓ k-means with k={} converged in {} iterations [{:.3}s]\n",
        cli.k,
        report.iterations,
        (total_duration - load_duration).as_secs_f64()
    );
    print!("{}", report);

    Ok(())
}
