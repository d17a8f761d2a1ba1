use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Path to the multirun results JSON
    #[arg(long, default_value = "n_sweep_ib_results_multirun.json")]
    pub input: String,

    /// Output figure path (PNG)
    #[arg(long, default_value = "n_sweep_ib_summary_plot_multirun.png")]
    pub output: String,

    /// Path to plot style TOML
    #[arg(long, default_value = "plotstyle.toml")]
    pub config: String,

    /// Skip writing the aggregate CSV next to the figure
    #[arg(long, default_value_t = false)]
    pub no_csv: bool,
}
