use anyhow::Result;
use clap::Parser;
use squeeze::cli::{self, AppContext, Cli};
use squeeze::core::emit::{Banner, today_stamp};
use squeeze::core::pipeline::{self, SqueezeArgs};
use squeeze::infra::config;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Identity check first: a mismatch must fail before anything else runs
    cli::verify_invocation(std::env::args_os().next().as_deref())?;

    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_target(false)
        .init();

    let ctx = AppContext { verbose: cli.verbose, quiet: cli.quiet };

    // CLI flags override squeeze.toml, which overrides built-in defaults
    let cfg = config::load_config()?;
    let args = SqueezeArgs {
        output: cli.output,
        src_dir: cli.src_dir.unwrap_or(cfg.src_dir),
        root: cli.root.unwrap_or(cfg.root),
        guard: cli.guard.unwrap_or(cfg.guard),
        banner: Banner {
            title: cfg.banner.title,
            author: cfg.banner.author,
            date: today_stamp(),
        },
    };

    pipeline::run(args, &ctx)
}
