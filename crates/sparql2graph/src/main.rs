use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sparql2graph::ast::loader::load_json;
use sparql2graph::emitter::cytoscape::CytoscapeEmitter;
use sparql2graph::emitter::json::JsonEmitter;
use sparql2graph::emitter::GraphEmitter;
use sparql2graph::graph::builder::{BuildOptions, GraphModelBuilder};
use sparql2graph::graph::classify::AnnotationPredicates;

/// Turn a parsed SPARQL query AST into a renderable graph model.
#[derive(Parser)]
#[command(name = "sparql2graph", version, about)]
struct Cli {
    /// Path to a SPARQL.js AST JSON file, or `-` for stdin.
    input: PathBuf,

    /// Output file path [default: stdout].
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format: json, cytoscape.
    #[arg(short, long, value_name = "FORMAT", default_value = "json")]
    format: String,

    /// Write single-line JSON.
    #[arg(long)]
    compact: bool,

    /// Extra predicate IRI whose literal objects count as annotations.
    #[arg(long = "annotation-predicate", value_name = "IRI")]
    annotation_predicates: Vec<String>,

    /// Start from an empty annotation predicate set.
    #[arg(long)]
    no_default_annotations: bool,

    /// Print the PREFIX legend to stderr.
    #[arg(long)]
    show_prefixes: bool,

    /// Verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// Quiet output.
    #[arg(short, long)]
    quiet: bool,
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }
    let default = if cli.verbose { "sparql2graph=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.verbose {
        eprintln!("Loading input from: {}", cli.input.display());
    }

    let ast = load_json(&cli.input)?;

    // Build options
    let base = if cli.no_default_annotations {
        AnnotationPredicates::empty()
    } else {
        AnnotationPredicates::default()
    };
    let options = BuildOptions {
        annotation_predicates: base.with_extra(cli.annotation_predicates.iter().cloned()),
    };
    if cli.verbose {
        eprintln!(
            "Annotation predicates: {}",
            options.annotation_predicates.len()
        );
    }

    let model = GraphModelBuilder::new(options).build(&ast);

    // Determine output writer
    let output_writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let format = cli.format.to_lowercase();
    match format.as_str() {
        "json" => {
            let mut emitter = if cli.compact {
                JsonEmitter::compact(output_writer)
            } else {
                JsonEmitter::new(output_writer)
            };
            emitter.emit(&model)?;
            emitter.flush()?;
        }
        "cytoscape" | "cy" => {
            let mut emitter = if cli.compact {
                CytoscapeEmitter::compact(output_writer)
            } else {
                CytoscapeEmitter::new(output_writer)
            };
            emitter.emit(&model)?;
            emitter.flush()?;
        }
        _ => {
            return Err(format!("Unknown format: {format}. Use 'json' or 'cytoscape'.").into());
        }
    }

    if cli.quiet {
        return Ok(());
    }

    if cli.show_prefixes {
        let legend = model.prefixes.legend();
        if legend.is_empty() {
            eprintln!("No PREFIX declarations found.");
        }
        for (prefix, namespace) in legend {
            eprintln!("{prefix} <{namespace}>");
        }
    }

    eprintln!(
        "Built {} nodes and {} edges from {} WHERE triples ({})",
        model.nodes.len(),
        model.edges.len(),
        model.where_triple_count,
        model.query_type
    );

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
