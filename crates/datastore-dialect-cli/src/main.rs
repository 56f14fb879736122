//! dsdialect CLI - Inspect datastore dialects and dry-run their SQL.

use clap::{Parser, Subcommand};
use datastore_dialect::{
    Call, Config, DatastoreDialect, DialectCatalog, DialectError, DialectImpl, RecordingManager,
    Row,
};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "dsdialect")]
#[command(about = "Inspect datastore dialects and dry-run their SQL")]
#[command(version)]
struct Cli {
    /// Path to YAML configuration file selecting the dialect
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Engine to use instead of a configuration file (mysql, sqlite, postgres, oracle, sqlserver)
    #[arg(short, long, conflicts_with = "config")]
    engine: Option<String>,

    /// Output JSON result to stdout
    #[arg(long)]
    output_json: bool,

    /// Log format: text or json
    #[arg(long, default_value = "text")]
    log_format: String,

    /// Log verbosity: debug, info, warn, error
    #[arg(long, default_value = "info")]
    verbosity: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available dialects and their capabilities
    Engines,

    /// Show the SQL an operation would issue, without a database
    Plan {
        /// Scripted result row for the first read (repeatable)
        #[arg(long = "row", value_name = "NAME")]
        rows: Vec<String>,

        #[command(subcommand)]
        operation: Operation,
    },
}

#[derive(Subcommand)]
enum Operation {
    /// Create a datastore
    CreateDatastore { datastore: String },

    /// Drop a datastore
    DropDatastore { datastore: String },

    /// Create a table from a column specification
    CreateTable {
        datastore: String,
        table: String,
        specification: String,
    },

    /// Drop a table
    DropTable { datastore: String, table: String },

    /// List tables of a datastore
    GetTables { datastore: String },

    /// Look up primary-key columns of a table
    GetKeyName { datastore: String, table: String },

    /// List datastores
    GetDatastores,

    /// Read the current datastore
    GetCurrentDatastore,

    /// Read a sequence value
    GetSequence { name: String },

    /// Disable foreign-key checks
    DisableFk,

    /// Enable foreign-key checks
    EnableFk,
}

impl Operation {
    fn label(&self) -> &'static str {
        match self {
            Operation::CreateDatastore { .. } => "create-datastore",
            Operation::DropDatastore { .. } => "drop-datastore",
            Operation::CreateTable { .. } => "create-table",
            Operation::DropTable { .. } => "drop-table",
            Operation::GetTables { .. } => "get-tables",
            Operation::GetKeyName { .. } => "get-key-name",
            Operation::GetDatastores => "get-datastores",
            Operation::GetCurrentDatastore => "get-current-datastore",
            Operation::GetSequence { .. } => "get-sequence",
            Operation::DisableFk => "disable-fk",
            Operation::EnableFk => "enable-fk",
        }
    }

    fn apply(&self, dialect: &dyn DatastoreDialect, manager: &RecordingManager) -> Result<Value, DialectError> {
        let result = match self {
            Operation::CreateDatastore { datastore } => {
                dialect.create_datastore(manager, datastore)?;
                Value::Null
            }
            Operation::DropDatastore { datastore } => {
                dialect.drop_datastore(manager, datastore)?;
                Value::Null
            }
            Operation::CreateTable {
                datastore,
                table,
                specification,
            } => {
                dialect.create_table(manager, datastore, table, specification)?;
                Value::Null
            }
            Operation::DropTable { datastore, table } => {
                dialect.drop_table(manager, datastore, table)?;
                Value::Null
            }
            Operation::GetTables { datastore } => json!(dialect.get_tables(manager, datastore)?),
            Operation::GetKeyName { datastore, table } => {
                json!(dialect.get_key_name(manager, datastore, table))
            }
            Operation::GetDatastores => json!(dialect.get_datastores(manager)?),
            Operation::GetCurrentDatastore => json!(dialect.get_current_datastore(manager)?),
            Operation::GetSequence { name } => json!(dialect.get_sequence(manager, name)?),
            Operation::DisableFk => {
                dialect.disable_foreign_key_check(manager)?;
                Value::Null
            }
            Operation::EnableFk => {
                dialect.enable_foreign_key_check(manager)?;
                Value::Null
            }
        };
        Ok(result)
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.format_detailed());
            ExitCode::from(e.exit_code())
        }
    }
}

fn run() -> Result<(), DialectError> {
    let cli = Cli::parse();

    setup_logging(&cli.verbosity, &cli.log_format).map_err(DialectError::Config)?;

    let config = match &cli.config {
        Some(path) => {
            let config = Config::load(path)?;
            info!("Loaded configuration from {:?}", path);
            Some(config)
        }
        None => None,
    };

    match &cli.command {
        Commands::Engines => list_engines(config.as_ref(), cli.output_json),
        Commands::Plan { rows, operation } => {
            let dialect = select_dialect(cli.engine.as_deref(), config.as_ref())?;
            plan(&dialect, rows, operation, cli.output_json)
        }
    }
}

fn select_dialect(engine: Option<&str>, config: Option<&Config>) -> Result<DialectImpl, DialectError> {
    match (engine, config) {
        (Some(engine), _) => DialectImpl::from_db_type(engine),
        (None, Some(config)) => config.build_dialect(),
        (None, None) => Err(DialectError::Config(
            "either --engine or --config is required".to_string(),
        )),
    }
}

fn list_engines(config: Option<&Config>, output_json: bool) -> Result<(), DialectError> {
    let mut catalog = DialectCatalog::with_builtins();
    if let Some(config) = config {
        let dialect = config.build_dialect()?;
        if dialect.engine().is_none() {
            catalog.register_dialect(dialect.name().to_string(), dialect);
        }
    }

    let manager = RecordingManager::new();
    let mut entries = Vec::new();
    for name in catalog.dialect_names() {
        let dialect = catalog.require_dialect(name)?;
        entries.push((name.to_string(), dialect.capabilities(&manager)));
    }

    if output_json {
        let report: Vec<Value> = entries
            .iter()
            .map(|(name, caps)| json!({ "name": name, "capabilities": caps }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Available dialects:");
    for (name, caps) in &entries {
        println!(
            "  {:<10} create={} drop={} batch={} key={} fk={}",
            name,
            yes_no(caps.can_create_datastore),
            yes_no(caps.can_drop_datastore),
            yes_no(caps.can_persist_batch),
            yes_no(caps.key_lookup),
            yes_no(caps.foreign_key_toggle)
        );
    }
    Ok(())
}

fn plan(
    dialect: &DialectImpl,
    rows: &[String],
    operation: &Operation,
    output_json: bool,
) -> Result<(), DialectError> {
    let mut manager = RecordingManager::new();
    if !rows.is_empty() {
        manager = manager.with_rows(rows.iter().map(|r| Row::named(r.as_str())).collect());
    }

    info!("Planning {} with dialect {}", operation.label(), dialect.name());
    let result = operation.apply(dialect, &manager)?;
    let calls = manager.calls();

    if output_json {
        let calls: Vec<Value> = calls.iter().map(call_json).collect();
        let report = json!({
            "dialect": dialect.name(),
            "operation": operation.label(),
            "calls": calls,
            "result": result,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for call in &calls {
        match call {
            Call::Execute { sql } => println!("{};", sql),
            Call::ReadAll { query, params } | Call::ReadSingle { query, params } => {
                if params.is_empty() {
                    println!("{};", query);
                } else {
                    let bound: Vec<String> = params.iter().map(|p| p.to_string()).collect();
                    println!("{}; -- params: {}", query, bound.join(", "));
                }
            }
        }
    }
    if !result.is_null() {
        println!("-- result: {}", result);
    }
    Ok(())
}

fn call_json(call: &Call) -> Value {
    let (kind, params) = match call {
        Call::Execute { .. } => ("execute", Vec::new()),
        Call::ReadAll { params, .. } => ("read_all", params.clone()),
        Call::ReadSingle { params, .. } => ("read_single", params.clone()),
    };
    let params: Vec<String> = params.iter().map(|p| p.to_string()).collect();
    json!({ "kind": kind, "sql": call.sql(), "params": params })
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn setup_logging(verbosity: &str, format: &str) -> Result<(), String> {
    let level = match verbosity.to_lowercase().as_str() {
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        other => return Err(format!("unknown verbosity '{}'", other)),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false);

    match format {
        "json" => subscriber.json().init(),
        "text" => subscriber.init(),
        other => return Err(format!("unknown log format '{}'", other)),
    }

    Ok(())
}
