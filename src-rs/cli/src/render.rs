use std::io::{self, Write};

use crate::models::{CLIConfig, CredentialInfo, Tab};

pub fn banner(cfg: &CLIConfig) {
    println!("AI App Idea Generator");
    println!("API: {}", cfg.base_url);
    println!("Type /help for commands.");
}

pub fn prompt(tab: Tab) {
    match tab {
        Tab::Ideas => print!("ideas> "),
        Tab::Problems => print!("problems> "),
    }
    let _ = io::stdout().flush();
}

pub fn help() {
    println!("Commands:");
    println!("  /help                   Show commands");
    println!("  /exit | /quit           Exit");
    println!("  /key <api key>          Validate and store a Gemini API key");
    println!("  /status                 Show API key status");
    println!("  /tab ideas|problems     Switch input mode");
    println!("  /show                   Show the latest results for this tab");
    println!("  /config                 Show current config");
    println!("  /base <url>             Update service URL");
    println!("Any other line is sent to the active tab.");
}

pub fn status_line(status: &str) {
    match status {
        "valid" => println!("[ok] API Key is valid"),
        "invalid" => println!("[!!] API Key is invalid"),
        _ => println!("[..] API Key not validated"),
    }
}

pub fn credential(info: &CredentialInfo) {
    if info.saved {
        println!("API key: {}", info.masked.clone().unwrap_or_default());
    } else {
        println!("No API key set. Use /key <api key>.");
    }
    status_line(&info.status);
}

/// One card per idea, titled `Idea N`; a solution is a single `Solution` card.
pub fn cards(tab: Tab, items: &[String]) {
    if items.is_empty() {
        println!("no results");
        return;
    }
    for (idx, item) in items.iter().enumerate() {
        let title = match tab {
            Tab::Ideas => format!("Idea {}", idx + 1),
            Tab::Problems => "Solution".to_string(),
        };
        card(&title, item);
    }
}

const CARD_WIDTH: usize = 76;

fn card(title: &str, body: &str) {
    for line in card_lines(title, body) {
        println!("{}", line);
    }
}

fn card_lines(title: &str, body: &str) -> Vec<String> {
    let title = wrap(title, CARD_WIDTH);
    let body: Vec<String> = body.lines().flat_map(|line| wrap(line, CARD_WIDTH)).collect();
    let width = title
        .iter()
        .chain(body.iter())
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let rule = format!("+{}+", "-".repeat(width + 2));
    let row = |line: &String| format!("| {:<width$} |", line, width = width);

    let mut out = vec![rule.clone()];
    out.extend(title.iter().map(row));
    out.push(rule.clone());
    out.extend(body.iter().map(row));
    out.push(rule);
    out
}

/// Breaks on whitespace; words longer than `width` are split.
fn wrap(line: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    for word in line.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            out.push(word.drain(..width).collect());
        }
        let word: String = word.into_iter().collect();
        let needed = current.chars().count() + usize::from(!current.is_empty()) + word.chars().count();
        if needed > width && !current.is_empty() {
            out.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }
    if !current.is_empty() || out.is_empty() {
        out.push(current);
    }
    out
}

pub fn tab(tab: Tab) {
    println!("tab: {}", tab.label());
}

pub fn config(cfg: &CLIConfig, tab: Tab) {
    println!("config:");
    println!("  base: {}", cfg.base_url);
    println!("  tab: {}", tab.label());
}

pub fn info(msg: &str) {
    println!("{}", msg);
}

pub fn error(msg: &str) {
    eprintln!("error: {}", msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_lines_stay_inside_the_border() {
        let body = format!("{} {}", "word ".repeat(40), "x".repeat(100));
        let lines = card_lines("Idea 1", &body);
        let border = lines[0].chars().count();
        assert_eq!(border, CARD_WIDTH + 4);
        assert!(lines.iter().all(|line| line.chars().count() == border));
        assert!(lines.iter().any(|line| line.contains(&"x".repeat(CARD_WIDTH))));
    }

    #[test]
    fn short_card_fits_its_content() {
        let lines = card_lines("Solution", "Water\n\nthe plants");
        assert_eq!(
            lines,
            vec![
                "+------------+",
                "| Solution   |",
                "+------------+",
                "| Water      |",
                "|            |",
                "| the plants |",
                "+------------+",
            ]
        );
    }

    #[test]
    fn wrap_splits_on_whitespace() {
        assert_eq!(wrap("aa bb cc", 5), vec!["aa bb", "cc"]);
        assert_eq!(wrap("abcdefg", 3), vec!["abc", "def", "g"]);
        assert_eq!(wrap("", 5), vec![""]);
    }
}
