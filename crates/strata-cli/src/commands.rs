//! CLI command implementations.

use crate::config::{Config, CONFIG_DIR};
use crate::demo;
use colored::Colorize;
use std::fs;
use std::path::Path;
use strata_core::Taggable;
use strata_graph::{ElementRef, Model, ReachedElement, Workspace, WorkspaceStore};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Initialize Strata in a directory.
pub fn init(path: &Path) -> Result<()> {
    if path.join(CONFIG_DIR).exists() {
        println!("{} Already initialized", "✓".green());
        return Ok(());
    }

    Config::default().save(path)?;

    println!("{} Initialized Strata in {}", "✓".green(), path.display());
    println!("  Run {} to build an example workspace", "strata demo".cyan());

    Ok(())
}

/// Build the example workspace.
pub fn demo(output: Option<&Path>) -> Result<()> {
    let workspace = demo::financial_risk_system()?;

    match output {
        Some(path) => write_workspace(&workspace, path)?,
        None => print_summary(&workspace),
    }

    Ok(())
}

/// Print the containment tree and relationships of a workspace file.
pub fn show(file: &Path) -> Result<()> {
    let workspace = read_workspace(file)?;
    let model = workspace.model();

    print_summary(&workspace);
    println!();

    for person in model.people() {
        print_element(&person, 1);
    }
    for system in model.software_systems() {
        print_element(&system, 1);
        for container in system.containers() {
            print_element(&container, 2);
            for component in container.components() {
                print_element(&component, 3);
            }
        }
    }

    if model.relationship_count() > 0 {
        println!();
        println!("{}", "Relationships".cyan().bold());
        for relationship in model.relationships() {
            let source = name_of(model, relationship.source());
            let destination = name_of(model, relationship.destination());
            print!(
                "  {} {} {}: {}",
                source,
                "→".dimmed(),
                destination,
                relationship.description()
            );
            if let Some(technology) = relationship.technology() {
                print!(" {}", format!("[{}]", technology).dimmed());
            }
            println!(" {}", format!("({})", relationship.interaction_style()).dimmed());
        }
    }

    Ok(())
}

/// Show which elements reach, or are reached by, an element.
pub fn relations(file: &Path, target: &str, max_depth: usize, json_output: bool) -> Result<()> {
    let workspace = read_workspace(file)?;
    let model = workspace.model();

    let element = match find_element(model, target) {
        Some(element) => element,
        None => {
            return Err(format!("Element '{}' not found in workspace", target).into());
        }
    };

    let analysis = model.analyze_reach(element.id(), max_depth)?;

    if json_output {
        let reached_json = |reached: &ReachedElement| {
            serde_json::json!({
                "id": reached.element.to_string(),
                "name": canonical_of(model, reached),
                "hops": reached.hops,
                "via": reached.via.to_string(),
                "description": model
                    .relationship(reached.via)
                    .map(|r| r.description().to_string())
                    .unwrap_or_default()
            })
        };
        let output = serde_json::json!({
            "target": {
                "id": element.id().to_string(),
                "name": element.canonical_name().as_str(),
                "kind": element.kind().to_string()
            },
            "upstream": analysis.upstream.iter().map(reached_json).collect::<Vec<_>>(),
            "downstream": analysis.downstream.iter().map(reached_json).collect::<Vec<_>>(),
            "total": analysis.total(),
            "maxDepth": analysis.max_depth
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "Target: {} ({})",
            element.canonical_name().as_str().cyan(),
            element.kind()
        );
        println!("{}", analysis.summary());
        println!();

        for (title, reached) in [
            ("Upstream (depends on it):", &analysis.upstream),
            ("Downstream (it depends on):", &analysis.downstream),
        ] {
            if reached.is_empty() {
                continue;
            }
            println!("{}", title.yellow());
            for entry in reached {
                let via = model
                    .relationship(entry.via)
                    .map(|r| r.description().to_string())
                    .unwrap_or_default();
                println!(
                    "  • {} {} {}",
                    canonical_of(model, entry),
                    format!("{} hop(s)", entry.hops).dimmed(),
                    format!("via \"{}\"", via).dimmed()
                );
            }
            println!();
        }
    }

    Ok(())
}

/// Save a workspace file into the local store.
pub fn save(file: &Path, path: &Path) -> Result<()> {
    let workspace = read_workspace(file)?;
    let store = open_store(path)?;
    store.save_workspace(&workspace)?;

    println!(
        "{} Saved {} ({} elements, {} relationships)",
        "✓".green(),
        workspace.name().cyan(),
        workspace.model().element_count(),
        workspace.model().relationship_count()
    );
    Ok(())
}

/// Export the stored workspace as JSON.
pub fn export(output: Option<&Path>, path: &Path) -> Result<()> {
    let store = open_store(path)?;
    let workspace = match store.load_workspace()? {
        Some(workspace) => workspace,
        None => {
            println!("{} No workspace stored", "✗".red());
            println!("  Run {} to store one", "strata save <file>".cyan());
            return Ok(());
        }
    };

    match output {
        Some(path) => write_workspace(&workspace, path)?,
        None => println!("{}", workspace.to_json()?),
    }
    Ok(())
}

fn open_store(path: &Path) -> Result<WorkspaceStore> {
    let config = Config::load(path)?;
    Ok(WorkspaceStore::open(config.store_dir(path))?)
}

fn read_workspace(file: &Path) -> Result<Workspace> {
    let json = fs::read_to_string(file)?;
    Ok(Workspace::from_json(&json)?)
}

fn write_workspace(workspace: &Workspace, path: &Path) -> Result<()> {
    fs::write(path, workspace.to_json()?)?;
    println!("{} Exported to {}", "✓".green(), path.display());
    Ok(())
}

fn print_summary(workspace: &Workspace) {
    let stats = workspace.model().stats();
    println!("{}", workspace.name().cyan().bold());
    if !workspace.description().is_empty() {
        println!("  {}", workspace.description().dimmed());
    }
    println!("  {} {}", "People:".dimmed(), stats.people);
    println!("  {} {}", "Software systems:".dimmed(), stats.software_systems);
    println!("  {} {}", "Containers:".dimmed(), stats.containers);
    println!("  {} {}", "Components:".dimmed(), stats.components);
    println!("  {} {}", "Relationships:".dimmed(), stats.relationships);
}

fn print_element(element: &ElementRef<'_>, depth: usize) {
    let mut line = format!(
        "{}{} {}",
        "  ".repeat(depth),
        element.kind().to_string().yellow(),
        element.name()
    );
    if let Some(technology) = element.technology() {
        line.push_str(&format!(" [{}]", technology));
    }
    println!("{} {}", line, format!("{{{}}}", element.tags()).dimmed());
}

/// Looks an element up by id, then canonical name, then plain name.
fn find_element<'a>(model: &'a Model, target: &str) -> Option<ElementRef<'a>> {
    model
        .element_by_id(target)
        .or_else(|| model.element_by_canonical_name(target))
        .or_else(|| model.find_by_name(target).into_iter().next())
}

fn name_of(model: &Model, id: strata_core::ElementId) -> String {
    model
        .element(id)
        .map(|element| element.name().to_string())
        .unwrap_or_else(|| id.to_string())
}

fn canonical_of(model: &Model, reached: &ReachedElement) -> String {
    model
        .canonical_name(reached.element)
        .map(|name| name.to_string())
        .unwrap_or_else(|| reached.element.to_string())
}
