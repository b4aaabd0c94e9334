use crate::core::bot::Reply;
use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_RED: &str = "\x1b[31m";
const FG_CYAN: &str = "\x1b[36m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_ERR: &str = "❌";
const ICON_DOC: &str = "📎";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

/// Print one bot reply the way a chat client would show it.
pub fn reply(r: &Reply) {
    match r {
        Reply::Text { text, keyboard } => {
            println!("{}{}bot>{} {}", FG_CYAN, BOLD, RESET, text);
            if let Some(buttons) = keyboard {
                let row: Vec<String> = buttons.iter().map(|b| format!("[{b}]")).collect();
                println!("     {}", row.join(" "));
            }
        }
        Reply::Document { path, file_name } => {
            println!(
                "{}{}bot>{} {} {} ({})",
                FG_CYAN,
                BOLD,
                RESET,
                ICON_DOC,
                file_name,
                path.display()
            );
        }
    }
}
