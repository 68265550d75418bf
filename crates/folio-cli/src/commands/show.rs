//! The public welcome page, rendered to the terminal.

use colored::Colorize;

use crate::context::AppContext;

pub fn run(ctx: &AppContext) {
    let content = ctx.content.content();

    if !content.hero_title.is_empty() {
        println!("{}", content.hero_title.bold());
    }
    println!("{}", content.hero_description);

    println!();
    println!("{}", "Projects".bold().underline());
    for (index, project) in content.projects.iter().enumerate() {
        println!("  {}. {}", index + 1, project.name.bold());
        if let Some(description) = &project.description {
            println!("     {description}");
        }
        if let Some(url) = &project.url {
            println!("     {}", url.blue());
        }
        if let Some(image_url) = &project.image_url {
            println!("     image: {image_url}");
        }
    }

    println!();
    println!("{}", "Skills".bold().underline());
    for skill in &content.skills {
        println!("  - {skill}");
    }

    println!();
    println!("{}", "Languages".bold().underline());
    println!("  {}", content.languages.join(", "));

    if ctx.session.is_authenticated() {
        println!();
        println!("{}", "Session active. `folio dashboard` to edit.".green());
    }
}
