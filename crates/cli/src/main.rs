use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use querylite::{QueryBuilder, QueryResult};

#[derive(Parser)]
#[command(name = "querylite")]
#[command(about = "Render SQL SELECT statements from fluent or JSON query definitions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a set of showcase queries built with the fluent API
    Demo,

    /// Render a JSON query definition to SQL
    Render {
        /// Path to the JSON query definition
        file: PathBuf,

        /// Wrap the rendered statement in a COUNT aggregate
        #[arg(long)]
        count: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo => run_demo(),
        Commands::Render { file, count } => render_file(&file, count),
    }
}

fn run_demo() -> anyhow::Result<()> {
    let users = QueryBuilder::new()
        .select(vec!["id", "email", "password"])
        .from("user")
        .where_clause(vec!["email like \"%andriy%\"", "password IS NOT NULL"])
        .order_by("email")
        .limit(15)
        .offset(5);

    print_rendered(users.render());

    // The first query doubles as a sub-query source here
    let count = QueryBuilder::new()
        .select("*")
        .from(users)
        .where_clause("id > 5")
        .render_count();

    print_rendered(count);

    // Rendering without a FROM clause prints the error message instead
    print_rendered(QueryBuilder::new().select("*").render());

    Ok(())
}

fn render_file(file: &PathBuf, count: bool) -> anyhow::Result<()> {
    let contents = fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let query: QueryBuilder = serde_json::from_str(&contents)
        .with_context(|| format!("invalid query definition in {}", file.display()))?;

    let rendered = if count {
        query.render_count()
    } else {
        query.render()
    };
    print_rendered(rendered);

    Ok(())
}

fn print_rendered(rendered: QueryResult<String>) {
    match rendered {
        Ok(sql) => println!("{}", sql),
        Err(error) => println!("{}", error),
    }
}
