//! Owner login flow.

use anyhow::Result;
use colored::Colorize;

use folio_auth::LoginCredentials;

use crate::commands::{prompt_line, prompt_password};
use crate::context::AppContext;

pub async fn run(ctx: &mut AppContext, return_to: &str) -> Result<()> {
    if ctx.session.is_authenticated() {
        println!("{}", "Already logged in.".green());
        return Ok(());
    }

    let username = prompt_line("Username: ")?;
    let password = prompt_password("Password: ")?;
    let credentials = LoginCredentials::new(username, password);

    // Wrong credentials and broken infrastructure get distinct, equally
    // unspecific messages: neither says which field was wrong, nor why the
    // backend failed.
    let granted = match ctx.authenticate.execute(&credentials).await {
        Ok(granted) => granted,
        Err(_) => {
            eprintln!("{}", "Could not validate credentials. Try again.".red());
            return Ok(());
        }
    };

    if !granted {
        eprintln!("{}", "Access denied. Check the credentials.".red());
        return Ok(());
    }

    ctx.session.start_session();
    println!("{}", "Logged in.".green());

    // A stored login target of "login" would loop; fall back to the
    // dashboard like any other successful login.
    let target = if return_to == "login" { "dashboard" } else { return_to };
    println!("Continue with `folio {target}`.");
    Ok(())
}
