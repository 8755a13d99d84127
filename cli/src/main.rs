//! Ristretto CLI: browse an OBO Graphs ontology from the command line
//!
//! Loads the ontology from `--input` on every invocation and answers one
//! query per subcommand.

mod output;
mod predicates;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use output::{display_id, sorted_by_label, Output, OutputFormat};
use predicates::RelationFilter;
use ristretto::curie::load_curie_map;
use ristretto::{CurieMap, CurieUtil, Node, NodeOntology, OntologyLoader};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ristretto", version, about = "Navigate OBO Graphs ontologies")]
struct Cli {
    /// OBO Graphs JSON file
    #[arg(short, long, global = true, env = "RISTRETTO_INPUT")]
    input: Option<PathBuf>,

    /// Extra prefix mapping, e.g. --prefix WIBBLE=http://example.org/WIBBLE_
    #[arg(long = "prefix", value_parser = parse_prefix, global = true)]
    prefixes: Vec<(String, String)>,

    /// YAML file of PREFIX: expansion pairs
    #[arg(long, global = true)]
    curie_map: Option<PathBuf>,

    /// Use only the prefixes given on the command line
    #[arg(long, global = true)]
    no_default_prefixes: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "tsv", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display the known prefix mappings
    Prefixes {
        /// Only these prefixes
        prefixes: Vec<String>,
    },
    /// Display information about specific terms
    Info {
        /// Term identifiers, e.g. HP:0000118
        terms: Vec<String>,
    },
    /// Display the root terms of the ontology
    Roots,
    /// Display the leaf terms of the ontology
    Leaves,
    /// Display all ancestors of terms
    Ancestors { terms: Vec<String> },
    /// Display all descendants of terms
    Descendants { terms: Vec<String> },
    /// Display the siblings of terms
    Siblings { terms: Vec<String> },
    /// Show the direct relationships of terms
    Relationships {
        terms: Vec<String>,

        /// Direction to report, relative to the input term
        #[arg(short, long, value_enum, default_value = "down")]
        direction: Direction,

        /// Relations to keep, comma separated; accepts shorthands such as i,p
        #[arg(short, long, value_delimiter = ',')]
        predicates: Vec<String>,
    },
    /// Display the lowest common ancestor of two terms
    Lca {
        first: String,
        second: String,

        /// Report every lowest common ancestor
        #[arg(long)]
        all: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Direction {
    Up,
    Down,
    Both,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let curies = cli.curie_util()?;
    debug!("Using {} prefix mappings", curies.len());
    let format = cli.format;

    if let Commands::Prefixes { prefixes } = &cli.command {
        return run_prefixes(&curies, prefixes, format);
    }

    let path = cli
        .input
        .as_ref()
        .context("no input file, pass --input or set RISTRETTO_INPUT")?;
    let ontology = OntologyLoader::load_file(path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    let session = Session::new(&ontology, &curies);

    match &cli.command {
        Commands::Prefixes { .. } => Ok(()),
        Commands::Info { terms } => session.info(terms).print(format),
        Commands::Roots => session.listing(ontology.root_nodes()).print(format),
        Commands::Leaves => session.listing(ontology.leaf_nodes()).print(format),
        Commands::Ancestors { terms } => session
            .closure(terms, |node| Ok(ontology.ancestors(node)?.into_iter().collect()))?
            .print(format),
        Commands::Descendants { terms } => session
            .closure(terms, |node| Ok(ontology.descendants(node)?.into_iter().collect()))?
            .print(format),
        Commands::Siblings { terms } => session
            .closure(terms, |node| Ok(ontology.siblings(node)?.into_iter().collect()))?
            .print(format),
        Commands::Relationships {
            terms,
            direction,
            predicates,
        } => {
            let filter = RelationFilter::new(predicates, &curies);
            session.relationships(terms, *direction, &filter)?.print(format)
        }
        Commands::Lca { first, second, all } => session.lca(first, second, *all)?.print(format),
    }
}

impl Cli {
    /// Defaults (unless disabled), then the curie map file, then `--prefix`.
    fn curie_util(&self) -> Result<CurieUtil> {
        let mut extra = CurieMap::new();
        if let Some(path) = &self.curie_map {
            let map = load_curie_map(path)
                .with_context(|| format!("failed to read prefix map {}", path.display()))?;
            extra.extend(map);
        }
        extra.extend(self.prefixes.iter().cloned());

        let curies = if self.no_default_prefixes {
            CurieUtil::just(extra)?
        } else {
            CurieUtil::with_defaults_and(extra)?
        };
        Ok(curies)
    }
}

fn parse_prefix(s: &str) -> std::result::Result<(String, String), String> {
    s.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected PREFIX=EXPANSION, got '{}'", s))
}

fn run_prefixes(curies: &CurieUtil, prefixes: &[String], format: OutputFormat) -> Result<()> {
    let mut output = Output::columns(vec!["prefix", "expansion"]);
    if prefixes.is_empty() {
        for (prefix, expansion) in curies.prefix_to_iri() {
            output.push(vec![prefix.clone(), expansion.clone()]);
        }
    } else {
        for prefix in prefixes {
            match curies.get_expansion(prefix) {
                Some(expansion) => output.push(vec![prefix.clone(), expansion.to_string()]),
                None => eprintln!("{}\tnot found", prefix),
            }
        }
    }
    output.print(format)
}

/// A loaded ontology plus the term lookup used by every query.
struct Session<'a> {
    ontology: &'a NodeOntology,
    curies: &'a CurieUtil,
    by_id: HashMap<&'a str, &'a Node>,
}

impl<'a> Session<'a> {
    fn new(ontology: &'a NodeOntology, curies: &'a CurieUtil) -> Self {
        let by_id = ontology.nodes().map(|node| (node.id(), node)).collect();
        Session {
            ontology,
            curies,
            by_id,
        }
    }

    /// Find a term by CURIE, or by raw identifier if the CURIE does not expand.
    fn lookup(&self, term: &str) -> Option<&'a Node> {
        let iri = self.curies.expand(term);
        let id = iri.as_deref().unwrap_or(term);
        let node = self.by_id.get(id).copied();
        if node.is_none() {
            eprintln!("No such term: {}", term);
        }
        node
    }

    fn listing(&self, nodes: Vec<&Node>) -> Output {
        let mut output = Output::terms();
        for node in sorted_by_label(nodes) {
            output.push_term(node, self.curies);
        }
        output
    }

    fn info(&self, terms: &[String]) -> Output {
        let mut output = Output::terms();
        for node in terms.iter().filter_map(|term| self.lookup(term)) {
            output.push_term(node, self.curies);
        }
        output
    }

    fn closure<F>(&self, terms: &[String], query: F) -> Result<Output>
    where
        F: Fn(&'a Node) -> Result<Vec<&'a Node>>,
    {
        let mut output = Output::terms();
        for node in terms.iter().filter_map(|term| self.lookup(term)) {
            for related in sorted_by_label(query(node)?) {
                output.push_term(related, self.curies);
            }
        }
        Ok(output)
    }

    fn relationships(
        &self,
        terms: &[String],
        direction: Direction,
        filter: &RelationFilter,
    ) -> Result<Output> {
        let mut output = Output::columns(vec![
            "subject",
            "subject_label",
            "predicate",
            "predicate_label",
            "object",
            "object_label",
        ]);

        for query in terms.iter().filter_map(|term| self.lookup(term)) {
            if direction != Direction::Down {
                for parent in sorted_by_label(self.ontology.predecessors(query)?) {
                    for relation in self.ontology.edge_values(parent, query) {
                        if filter.accepts(relation) {
                            output.push(self.relationship_row(query, relation, parent));
                        }
                    }
                }
            }
            if direction != Direction::Up {
                for child in sorted_by_label(self.ontology.successors(query)?) {
                    for relation in self.ontology.edge_values(query, child) {
                        if filter.accepts(relation) {
                            output.push(self.relationship_row(child, relation, query));
                        }
                    }
                }
            }
        }
        Ok(output)
    }

    fn relationship_row(&self, subject: &Node, predicate: &Node, object: &Node) -> Vec<String> {
        vec![
            display_id(subject, self.curies),
            subject.label().to_string(),
            display_id(predicate, self.curies),
            predicate.label().to_string(),
            display_id(object, self.curies),
            object.label().to_string(),
        ]
    }

    fn lca(&self, first: &str, second: &str, all: bool) -> Result<Output> {
        let mut output = Output::terms();
        let (Some(a), Some(b)) = (self.lookup(first), self.lookup(second)) else {
            return Ok(output);
        };

        let found: Vec<&Node> = if all {
            self.ontology.lca_set(a, b)?.into_iter().collect()
        } else {
            self.ontology.lca(a, b)?.into_iter().collect()
        };
        if found.is_empty() {
            eprintln!("No common ancestor of {} and {}", first, second);
        }
        for node in sorted_by_label(found) {
            output.push_term(node, self.curies);
        }
        Ok(output)
    }
}
