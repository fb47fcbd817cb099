//! sqlkit CLI
//!
//! Builds queries from flags and runs them against a SQLite database.

use clap::{Args, Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use oxide_sqlkit_core::ast::SqlRaw;
use oxide_sqlkit_core::builder::SqlSelectBuilder;
use oxide_sqlkit_core::prelude::*;
use oxide_sqlkit_sqlite::{SqliteConfig, SqliteDatabase};

/// Query SQLite from the command line.
#[derive(Parser)]
#[command(name = "sqlkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Database URL (SQLite path or connection string).
    #[arg(short, long, env = "DATABASE_URL", default_value = "sqlite::memory:")]
    database: String,

    /// Maximum number of pooled connections.
    #[arg(long, default_value_t = 5)]
    max_connections: u32,

    /// Enable verbose output, including every executed query.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a SELECT and print each row as a JSON line.
    Query(SelectArgs),

    /// Print the SQL and binds a SELECT would run, without running it.
    Sql(SelectArgs),

    /// Run a raw SQL statement and print any returned rows.
    Exec {
        /// The statement.
        sql: String,
    },
}

#[derive(Args)]
struct SelectArgs {
    /// Table to select from.
    #[arg(short, long)]
    table: String,

    /// Column to select; repeat for several (all if not specified).
    #[arg(short, long = "column")]
    columns: Vec<String>,

    /// Equality filter `column=value`; repeat to AND several.
    #[arg(short, long = "filter", value_parser = parse_filter)]
    filters: Vec<(String, SqlValue)>,

    /// Ordering `column` or `column:desc`; repeat for several.
    #[arg(short, long = "order-by", value_parser = parse_order)]
    order_by: Vec<(String, SqlDirection)>,

    /// Maximum number of rows.
    #[arg(short, long)]
    limit: Option<u64>,

    /// Number of rows to skip.
    #[arg(long)]
    offset: Option<u64>,

    /// Drop duplicate rows.
    #[arg(long)]
    distinct: bool,
}

impl SelectArgs {
    fn build<'d, D: SqlDatabase>(&self, database: &'d D) -> SqlSelectBuilder<'d, D> {
        let mut builder = database.select().from(&self.table);
        if self.columns.is_empty() {
            builder = builder.column("*");
        }
        for column in &self.columns {
            builder = builder.column(column);
        }
        if self.distinct {
            builder = builder.distinct();
        }
        for (column, value) in &self.filters {
            builder = builder.where_column(column, SqlBinaryOperator::Equal, value.clone());
        }
        for (column, direction) in &self.order_by {
            builder = builder.order_by(column, *direction);
        }
        if let Some(limit) = self.limit {
            builder = builder.limit(limit);
        }
        if let Some(offset) = self.offset {
            builder = builder.offset(offset);
        }
        builder
    }
}

/// Parses `column=value`. Values that look like numbers are bound as numbers.
fn parse_filter(s: &str) -> Result<(String, SqlValue), String> {
    let (column, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected column=value, got '{s}'"))?;
    if column.is_empty() {
        return Err(format!("missing column name in '{s}'"));
    }
    let value = match (value.parse::<i64>(), value.parse::<f64>()) {
        (Ok(i), _) => SqlValue::Int(i),
        // `nan` and `inf` parse as floats but are words here
        (_, Ok(f)) if f.is_finite() => SqlValue::Float(f),
        _ => SqlValue::Text(value.to_string()),
    };
    Ok((column.to_string(), value))
}

/// Parses `column`, `column:asc` or `column:desc`.
fn parse_order(s: &str) -> Result<(String, SqlDirection), String> {
    match s.rsplit_once(':') {
        None => Ok((s.to_string(), SqlDirection::Ascending)),
        Some((column, direction)) => match direction.to_ascii_lowercase().as_str() {
            "asc" => Ok((column.to_string(), SqlDirection::Ascending)),
            "desc" => Ok((column.to_string(), SqlDirection::Descending)),
            other => Err(format!("unknown direction '{other}', expected asc or desc")),
        },
    }
}

fn print_row(row: &impl SqlRow) {
    println!("{}", serde_json::Value::Object(row.to_json_object()));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = SqliteConfig::new(&cli.database).with_max_connections(cli.max_connections);

    match cli.command {
        Commands::Query(args) => {
            let db = SqliteDatabase::connect(&config).await?;
            let mut count = 0_usize;
            args.build(&db)
                .run(|row| {
                    print_row(&row);
                    count += 1;
                })
                .await?;
            info!("{count} row(s)");
            db.close().await;
        }

        Commands::Sql(args) => {
            // Nothing runs, so no connection is opened.
            let db = SqliteDatabase::connect_lazy(&config)?;
            let query = db.serialize(args.build(&db).query());
            println!("{}", query.sql);
            for (i, bind) in query.binds.iter().enumerate() {
                println!("  [{}] {bind:?}", i + 1);
            }
        }

        Commands::Exec { sql } => {
            let db = SqliteDatabase::connect(&config).await?;
            db.statement(SqlRaw::new(sql))
                .run(|row| print_row(&row))
                .await?;
            db.close().await;
        }
    }

    Ok(())
}
