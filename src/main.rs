//! node-holder - inspect and edit a saved node list from the terminal

use clap::{Parser, Subcommand};
use log::error;
use node_holder::holder::ReportLevel;
use node_holder::{
    GraphSnapshot, HolderConfig, JsonFileStore, NodeHolder, OperatorStatus, RecordStore,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Record document to use instead of the configured one
    #[arg(long, value_name = "FILE")]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List saved records
    List,

    /// Show the nodes and links stored in a record
    Show {
        uid: String,
    },

    /// Rename a record
    Rename {
        uid: String,
        name: String,
    },

    /// Delete a record
    Remove {
        uid: String,
    },

    /// Reload the document and write it back normalized
    Reload,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let config = match cli.data_file {
        Some(path) => HolderConfig::new(path),
        None => HolderConfig::from_env(),
    };
    let mut holder = NodeHolder::new(JsonFileStore::from_config(&config));

    let stdout = io::stdout();
    let ok = match run(&mut holder, cli.command, &mut stdout.lock()) {
        Ok(ok) => ok,
        Err(e) => {
            error!("Failed to write output: {}", e);
            false
        }
    };

    let mut failed = !ok;
    for report in holder.drain_reports() {
        if report.level == ReportLevel::Error {
            failed = true;
        }
        eprintln!("{}: {}", report.level, report.message);
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Execute one subcommand; `Ok(false)` when it could not be carried out
fn run<S: RecordStore>(
    holder: &mut NodeHolder<S>,
    command: Commands,
    out: &mut impl Write,
) -> io::Result<bool> {
    match command {
        Commands::List => {
            list(holder, out)?;
            Ok(true)
        }
        Commands::Show { uid } => show(holder, &uid, out),
        Commands::Rename { uid, name } => Ok(match holder.catalog().position(&uid) {
            Some(index) => holder.set_record_name(index, name),
            None => {
                error!("No record with uid {}", uid);
                false
            }
        }),
        Commands::Remove { uid } => Ok(match holder.catalog().position(&uid) {
            Some(index) => {
                holder.set_active_index(index);
                holder.remove_active() == OperatorStatus::Finished
            }
            None => {
                error!("No record with uid {}", uid);
                false
            }
        }),
        Commands::Reload => Ok(holder.reload() == OperatorStatus::Finished),
    }
}

fn list<S: RecordStore>(holder: &NodeHolder<S>, out: &mut impl Write) -> io::Result<()> {
    for record in holder.catalog().records() {
        let nodes = GraphSnapshot::decode(&record.node_data)
            .map(|s| s.nodes.len().to_string())
            .unwrap_or_else(|_| "?".to_string());
        writeln!(out, "{}  {:<24} {} nodes", record.uid, record.name, nodes)?;
    }
    Ok(())
}

fn show<S: RecordStore>(
    holder: &NodeHolder<S>,
    uid: &str,
    out: &mut impl Write,
) -> io::Result<bool> {
    let Some(record) = holder.catalog().position(uid).and_then(|i| holder.catalog().get(i)) else {
        error!("No record with uid {}", uid);
        return Ok(false);
    };
    let snapshot = match GraphSnapshot::decode(&record.node_data) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("Record {} has unreadable node data: {}", uid, e);
            return Ok(false);
        }
    };

    writeln!(out, "{} ({})", record.name, record.uid)?;
    for node in &snapshot.nodes {
        writeln!(
            out,
            "  node {:<20} {:<28} at ({:.1}, {:.1})",
            node.name, node.type_id, node.location.x, node.location.y
        )?;
        for (key, value) in &node.properties {
            writeln!(out, "      {} = {}", key, value)?;
        }
    }
    for link in &snapshot.links {
        writeln!(
            out,
            "  link {}[{}] -> {}[{}]",
            link.from_node, link.from_socket_index, link.to_node, link.to_socket_index
        )?;
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use node_holder::Record;
    use tempfile::TempDir;

    const PAYLOAD: &str = r#"{"node":[{"name":"Math","id":"ShaderNodeMath","location":[0.0,0.0],"width":140.0,"inputs":[],"properties":{"operation":"ADD"}}],"links":[]}"#;

    fn record(uid: &str, name: &str) -> Record {
        Record {
            uid: uid.to_string(),
            name: name.to_string(),
            node_data: PAYLOAD.to_string(),
        }
    }

    fn holder_in(dir: &TempDir) -> NodeHolder<JsonFileStore> {
        let path = dir.path().join("list.json");
        JsonFileStore::new(&path)
            .write_all(&[record("a", "First"), record("b", "Second")])
            .unwrap();
        NodeHolder::new(JsonFileStore::new(&path))
    }

    fn run_args(holder: &mut NodeHolder<JsonFileStore>, args: &[&str]) -> (bool, String) {
        let cli = Cli::try_parse_from(std::iter::once("node-holder").chain(args.iter().copied()))
            .unwrap();
        let mut out = Vec::new();
        let ok = run(holder, cli.command, &mut out).unwrap();
        (ok, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_list_prints_every_record() {
        let dir = TempDir::new().unwrap();
        let mut holder = holder_in(&dir);
        let (ok, out) = run_args(&mut holder, &["list"]);
        assert!(ok);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("a  First"));
        assert!(lines[1].ends_with("1 nodes"));
    }

    #[test]
    fn test_show_prints_nodes() {
        let dir = TempDir::new().unwrap();
        let mut holder = holder_in(&dir);
        let (ok, out) = run_args(&mut holder, &["show", "b"]);
        assert!(ok);
        assert!(out.starts_with("Second (b)"));
        assert!(out.contains("ShaderNodeMath"));
        assert!(out.contains("operation = 'ADD'"));

        let (ok, _) = run_args(&mut holder, &["show", "missing"]);
        assert!(!ok);
    }

    #[test]
    fn test_rename_updates_document() {
        let dir = TempDir::new().unwrap();
        let mut holder = holder_in(&dir);
        let (ok, _) = run_args(&mut holder, &["rename", "b", "Renamed"]);
        assert!(ok);

        let stored = JsonFileStore::new(dir.path().join("list.json")).read_all();
        assert_eq!(stored[1].name, "Renamed");
        assert!(!run_args(&mut holder, &["rename", "missing", "X"]).0);
    }

    #[test]
    fn test_remove_deletes_from_document() {
        let dir = TempDir::new().unwrap();
        let mut holder = holder_in(&dir);
        let (ok, _) = run_args(&mut holder, &["remove", "a"]);
        assert!(ok);

        let stored = JsonFileStore::new(dir.path().join("list.json")).read_all();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].uid, "b");
        assert!(!run_args(&mut holder, &["remove", "a"]).0);
    }

    #[test]
    fn test_data_file_flag_parses() {
        let cli = Cli::try_parse_from(["node-holder", "--data-file", "/tmp/x.json", "reload"]).unwrap();
        assert_eq!(cli.data_file, Some(PathBuf::from("/tmp/x.json")));
        assert!(matches!(cli.command, Commands::Reload));
    }
}
