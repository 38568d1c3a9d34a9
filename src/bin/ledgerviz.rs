use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use ledgerviz::{flow::FlowGraph, stats, storage, viz};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ledgerviz",
    version,
    about = "Load, visualize & summarize personal-finance data"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render charts from a data file (and optionally export and print stats).
    Show(ShowArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// Path to the finance data document (JSON).
    #[arg(short, long)]
    data: PathBuf,
    /// Create the debt chart at the given path (.svg or .png).
    #[arg(long)]
    plot: Option<PathBuf>,
    /// Width of the plot (default 1000).
    #[arg(long, default_value_t = 1000)]
    width: u32,
    /// Height of the plot (default 600).
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Series to hide, separated by comma or semicolon (e.g. "Visa,Total Debt").
    #[arg(long)]
    hide: Option<String>,
    /// Chart title.
    #[arg(long, default_value = "Debt Over Time")]
    title: String,
    /// Save the debt table to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
    /// Print per-series statistics and cash-flow totals to stdout.
    #[arg(long, default_value_t = false)]
    stats: bool,
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => {
            // Format up to 2 decimals, then trim trailing zeros and trailing dot.
            let s = format!("{:.2}", x);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        _ => "NA".to_string(),
    }
}

fn parse_list(s: &str) -> Vec<String> {
    s.split([',', ';'])
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Show(args) => cmd_show(args),
    }
}

fn cmd_show(args: ShowArgs) -> Result<()> {
    let doc = storage::load_json(&args.data)?;
    let hidden = args.hide.as_deref().map(parse_list).unwrap_or_default();

    if let Some(path) = args.out.as_ref() {
        let fmt = match args.format {
            Some(OutFormat::Csv) => "csv",
            Some(OutFormat::Json) => "json",
            None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
        }
        .to_ascii_lowercase();
        match fmt.as_str() {
            "csv" => storage::save_csv(&doc, path)?,
            "json" => storage::save_json(&doc, path)?,
            other => anyhow::bail!("unsupported format: {}", other),
        }
        eprintln!("Saved debt table to {}", path.display());
    }

    if let Some(plot_path) = args.plot.as_ref() {
        viz::plot_chart(
            &doc,
            &hidden,
            plot_path,
            args.width,
            args.height,
            &args.title,
            viz::DEFAULT_LEGEND_MODE,
        )?;
        eprintln!("Wrote plot to {}", plot_path.display());
    }

    if args.stats {
        let series = viz::build_series(&doc.debt, &hidden);
        for s in stats::series_summary(&series) {
            println!(
                "{}  count={} zeros={}  min={} max={} mean={} median={}",
                s.name,
                s.count,
                s.zeros,
                fmt_opt(s.min),
                fmt_opt(s.max),
                fmt_opt(s.mean),
                fmt_opt(s.median)
            );
        }
        let graph = FlowGraph::from_edges(&doc.cash_flow.categories)?;
        for i in 0..graph.nodes.len() {
            println!("{}", graph.node_tooltip(i).replace('\n', "  "));
        }
    }

    Ok(())
}
