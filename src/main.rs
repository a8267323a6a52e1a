use anyhow::Result;
use clap::{Parser, Subcommand};
use kit::areas::repository::Repository;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `KIT_LOG=kit=debug`
const LOG_ENV: &str = "KIT_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser)]
#[command(
    name = "kit",
    version = "0.1.0",
    about = "A minimal content-addressed file tracker",
    long_about = "kit stores file snapshots keyed by their SHA-256 content hash, \
    keeps a flat staging index, and reports how the working tree drifted from it.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "add",
        about = "Stage files",
        long_about = "This command hashes the given files, stores their content and records them in the index. \
        Use '.' to stage every file of the working tree that is not ignored."
    )]
    Add {
        #[arg(index = 1, required = true, help = "Files to stage")]
        paths: Vec<String>,
    },
    #[command(
        name = "status",
        about = "Show the working tree status",
        long_about = "This command lists staged files, files changed or deleted since they were staged, \
        and untracked files."
    )]
    Status {
        #[arg(long, help = "Give the output in a machine-readable format")]
        porcelain: bool,
    },
    #[command(
        name = "hash-object",
        about = "Compute the object ID of a file and optionally store it",
        long_about = "This command hashes a file as a blob and can write it to the object database."
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1)]
        file: String,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints the content of a stored object given its full object ID."
    )]
    CatFile {
        #[arg(short = 'p', long, help = "The object ID to print")]
        oid: String,
    },
    #[command(
        name = "ls-files",
        about = "List the files in the index",
        long_about = "This command lists the staged paths in path order."
    )]
    LsFiles {
        #[arg(short, long, help = "Show the object ID of each entry")]
        stage: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // a subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .try_init();
}

fn open_repository() -> Result<Repository> {
    let pwd = std::env::current_dir()?;
    Ok(Repository::open(&pwd, Box::new(std::io::stdout()))?)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { path } => {
            let path = match path {
                Some(path) => path,
                None => std::env::current_dir()?,
            };
            let mut repository = Repository::new(&path, Box::new(std::io::stdout()))?;

            repository.init().await?
        }
        Commands::Add { paths } => open_repository()?.add(&paths).await?,
        Commands::Status { porcelain } => open_repository()?.show_status(porcelain).await?,
        Commands::HashObject { write, file } => open_repository()?.hash_object(&file, write)?,
        Commands::CatFile { oid } => open_repository()?.cat_file(&oid)?,
        Commands::LsFiles { stage } => open_repository()?.ls_files(stage).await?,
    }

    Ok(())
}
