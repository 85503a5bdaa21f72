use std::env;
use std::path::PathBuf;
use trainer_name_localizer::{run, Options};

fn usage() -> ! {
    eprintln!(
        "Usage: cargo run --release -- [--base-dir DIR] [--input DIR] [--output DIR] \
[--titles title_map.json] [--proper-names proper_name_map.json] [--copy-unresolved] [--parallel]"
    );
    std::process::exit(1);
}

fn parse_args(args: impl IntoIterator<Item = String>) -> anyhow::Result<Options> {
    let mut opts = Options::default();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let mut path_value = |flag: &str| {
            args.next()
                .map(PathBuf::from)
                .ok_or_else(|| anyhow::anyhow!("{flag} requires a path"))
        };
        match arg.as_str() {
            "--base-dir" => opts.base_dir = path_value("--base-dir")?,
            "--input" => opts.input_dir = Some(path_value("--input")?),
            "--output" => opts.output_dir = Some(path_value("--output")?),
            "--titles" => opts.title_map = Some(path_value("--titles")?),
            "--proper-names" => opts.proper_name_map = Some(path_value("--proper-names")?),
            "--copy-unresolved" => opts.copy_unresolved = true,
            "--parallel" => opts.parallel = true,
            "--help" | "-h" => usage(),
            other => return Err(anyhow::anyhow!("Unknown argument {other}")),
        }
    }

    Ok(opts)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let opts = parse_args(env::args().skip(1))?;
    run(&opts)?;
    Ok(())
}
