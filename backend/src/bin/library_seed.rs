//! Register members and catalogue books directly in the library database.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Context, Result, eyre};
use tokio::runtime::Builder;

use library_backend::domain::ports::LibraryRegistry;
use library_backend::domain::{NewBook, NewUser};
use library_backend::outbound::persistence::{
    DbPool, DieselLibraryRegistry, PoolConfig, run_pending_migrations,
};
use library_backend::settings::{DATABASE_URL_ENV, ProcessEnv, SettingsEnv};

/// `library-seed` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "library-seed",
    about = "Register library members and catalogue books",
    version
)]
struct CliArgs {
    /// Database connection URL. Falls back to `DATABASE_URL` when omitted.
    #[arg(long = "database-url", value_name = "url", global = true)]
    database_url: Option<String>,
    /// Apply pending migrations before writing.
    #[arg(long, global = true)]
    migrate: bool,
    #[command(subcommand)]
    command: SeedCommand,
}

#[derive(Debug, Clone, Subcommand)]
enum SeedCommand {
    /// Register a member.
    User {
        #[arg(long)]
        name: String,
    },
    /// Catalogue an available book.
    Book {
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = CliArgs::parse();
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("create Tokio runtime")?;
    runtime.block_on(run(args))
}

async fn run(args: CliArgs) -> Result<()> {
    let database_url = resolve_database_url(args.database_url, &ProcessEnv)?;

    if args.migrate {
        let applied = run_pending_migrations(&database_url).wrap_err("apply migrations")?;
        println!("migrations_applied={applied}");
    }

    let pool = DbPool::new(PoolConfig::new(&database_url).with_max_size(1))
        .await
        .wrap_err("create database pool")?;
    let registry = DieselLibraryRegistry::new(pool);

    match args.command {
        SeedCommand::User { name } => {
            let user = registry
                .register_user(&NewUser::new(name)?)
                .await
                .wrap_err("register user")?;
            println!("user_id={}", user.id());
        }
        SeedCommand::Book { title, author } => {
            let book = registry
                .register_book(&NewBook::new(title, author)?)
                .await
                .wrap_err("register book")?;
            println!("book_id={}", book.id());
        }
    }
    Ok(())
}

fn resolve_database_url(explicit: Option<String>, env: &impl SettingsEnv) -> Result<String> {
    explicit
        .or_else(|| env.string(DATABASE_URL_ENV))
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| eyre!("pass --database-url or set DATABASE_URL"))
}
