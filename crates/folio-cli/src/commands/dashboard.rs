//! Guarded content editing.
//!
//! Every operation builds the next document from the current one and runs it
//! through the content store's `save`, so dashboard edits and imported
//! documents obey the same rules (URL admission included).

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use folio_content::{normalize_project_url, PortfolioProject};
use folio_store::{check_route, RouteDecision};

use crate::context::AppContext;

#[derive(Subcommand)]
pub enum DashboardCommand {
    /// Replace the hero title.
    SetTitle {
        /// New title. An empty string clears it.
        title: String,
    },
    /// Replace the hero description.
    SetDescription {
        /// New description.
        description: String,
    },
    /// Append a project to the catalog.
    AddProject {
        /// Project name (required, non-empty).
        name: String,
        /// Short summary.
        #[arg(long)]
        description: Option<String>,
        /// Project link; kept only when it starts with http:// or https://.
        #[arg(long)]
        url: Option<String>,
    },
    /// Remove a project by its position in `show` output.
    RemoveProject {
        /// 1-based project number.
        index: usize,
    },
    /// Replace the skills list.
    SetSkills {
        /// One entry per argument; blanks are dropped.
        items: Vec<String>,
    },
    /// Replace the languages list.
    SetLanguages {
        /// One entry per argument; blanks are dropped.
        items: Vec<String>,
    },
    /// Restore the default content.
    Reset,
}

pub fn run(ctx: &mut AppContext, command: DashboardCommand) -> Result<()> {
    if let RouteDecision::RedirectToLogin { return_url } = check_route(&ctx.session, "dashboard") {
        eprintln!("{}", "Log in first.".red());
        eprintln!("  folio login --return-to {return_url}");
        return Ok(());
    }

    match command {
        DashboardCommand::SetTitle { title } => {
            let mut content = ctx.content.content().clone();
            content.hero_title = title.trim().to_string();
            ctx.content.save(content);
            println!("Title updated.");
        }
        DashboardCommand::SetDescription { description } => {
            let description = description.trim().to_string();
            if description.is_empty() {
                eprintln!("{}", "The description cannot be empty.".red());
                return Ok(());
            }
            let mut content = ctx.content.content().clone();
            content.hero_description = description;
            ctx.content.save(content);
            println!("Description updated.");
        }
        DashboardCommand::AddProject {
            name,
            description,
            url,
        } => {
            let name = name.trim().to_string();
            if name.is_empty() {
                eprintln!("{}", "A project needs a name.".red());
                return Ok(());
            }

            let description = description
                .as_deref()
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .map(str::to_string);
            let admitted_url = url.as_deref().and_then(normalize_project_url);
            if url.is_some() && admitted_url.is_none() {
                eprintln!("{}", "URL dropped: only http(s):// links are kept.".yellow());
            }

            let mut content = ctx.content.content().clone();
            content.projects.push(PortfolioProject {
                name,
                description,
                url: admitted_url,
                image_url: None,
            });
            ctx.content.save(content);
            println!("Project saved.");
        }
        DashboardCommand::RemoveProject { index } => {
            let mut content = ctx.content.content().clone();
            if index == 0 || index > content.projects.len() {
                eprintln!("{}", "No project with that number.".red());
                return Ok(());
            }
            let removed = content.projects.remove(index - 1);
            ctx.content.save(content);
            println!("Removed \"{}\".", removed.name);
        }
        DashboardCommand::SetSkills { items } => {
            let skills = clean_list(items);
            if skills.is_empty() {
                eprintln!("{}", "The skills list cannot be empty.".red());
                return Ok(());
            }
            let mut content = ctx.content.content().clone();
            content.skills = skills;
            ctx.content.save(content);
            println!("Skills updated.");
        }
        DashboardCommand::SetLanguages { items } => {
            let languages = clean_list(items);
            if languages.is_empty() {
                eprintln!("{}", "The languages list cannot be empty.".red());
                return Ok(());
            }
            let mut content = ctx.content.content().clone();
            content.languages = languages;
            ctx.content.save(content);
            println!("Languages updated.");
        }
        DashboardCommand::Reset => {
            ctx.content.reset();
            println!("Content restored to the defaults.");
        }
    }

    Ok(())
}

fn clean_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}
