//! Session queries and logout.

use colored::Colorize;

use crate::context::AppContext;

pub fn status(ctx: &AppContext) {
    if ctx.session.is_authenticated() {
        println!("{}", "Session active.".green());
    } else {
        println!("Not logged in.");
    }
}

pub fn logout(ctx: &mut AppContext) {
    ctx.session.end_session();
    println!("Logged out.");
}
