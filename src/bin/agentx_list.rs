//! agentx-list: Query an OID list loaded from a JSON table file.
//!
//! Part of the agentx-oidlist CLI utilities.

use std::process::ExitCode;
use std::time::Instant;

use agentx_oidlist::cli::args::{OutputArgs, TableArgs};
use agentx_oidlist::cli::output::{write_results, write_verbose_query};
use agentx_oidlist::cli::query::{Query, walk};
use agentx_oidlist::cli::table::load_table;
use agentx_oidlist::{GetResult, ListHandler, Oid};
use clap::{Parser, Subcommand};

/// Run GET and GETNEXT lookups against an OID list.
#[derive(Debug, Parser)]
#[command(name = "agentx-list", version, about)]
struct Args {
    #[command(flatten)]
    table: TableArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Exact lookup of one or more OIDs.
    Get {
        #[arg(required = true, value_name = "OID")]
        oids: Vec<String>,
    },
    /// Smallest registered OID after FROM and before --to.
    Next {
        #[arg(value_name = "FROM")]
        from: String,
        /// Allow FROM itself to match.
        #[arg(short = 'i', long)]
        include_from: bool,
        /// Exclusive upper bound (default: none, search to the end of the table).
        #[arg(long, value_name = "OID")]
        to: Option<String>,
    },
    /// Every registered OID under ROOT, in order.
    Walk {
        #[arg(value_name = "ROOT")]
        root: String,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    args.output.init_tracing();

    let list = match load_table(&args.table.table) {
        Ok(list) => list,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let results = match run(&args, &list) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = write_results(args.output.format, &results) {
        eprintln!("Error writing output: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: &Args, list: &ListHandler) -> agentx_oidlist::Result<Vec<GetResult>> {
    let lookup = |query: Query| -> agentx_oidlist::Result<GetResult> {
        let start = Instant::now();
        let result = query.run(list)?;
        if args.output.verbose {
            write_verbose_query(&query, &result, start.elapsed());
        }
        Ok(result)
    };

    match &args.command {
        Command::Get { oids } => oids
            .iter()
            .map(|s| lookup(Query::Get { oid: Oid::parse(s)? }))
            .collect(),
        Command::Next {
            from,
            include_from,
            to,
        } => {
            let to = to.as_deref().map(Oid::parse).transpose()?;
            let query = Query::next(Oid::parse(from)?, *include_from, to);
            Ok(vec![lookup(query)?])
        }
        Command::Walk { root } => walk(Oid::parse(root)?, lookup),
    }
}
