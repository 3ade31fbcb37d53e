extern crate colored;
use colored::*;

// hand-crafted ASCII art coloring, in the family tradition
#[rustfmt::skip]
pub fn print_banner() {
    println!("{}{}{}", "   ____ ".red().bold(),      " _  _ ".yellow().bold(), "____ _  _ ____ _ _ _ ____ ___ ____ _  _ ".blue().bold());
    println!("{}{}{}", "  |    |".red().bold(),      " |  | ".yellow().bold(), "|___ |  | |___ | | | |__|  |  |    |__| ".blue().bold());
    println!("{}{}{}", "  |__\\ |".green().bold(),   " |__| ".cyan().bold(),   "|___ |__| |___ |_|_| |  |  |  |___ |  | ".blue().bold());
    println!("{}{}{}", "      \\|".green().bold(),   "      ".cyan().bold(),   "              the queue, watched        ".magenta().bold());
}
