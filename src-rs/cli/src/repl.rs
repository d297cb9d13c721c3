use std::io;

use crate::client::HTTPClient;
use crate::models::{CLIConfig, Tab};
use crate::render;

pub struct REPL {
    pub config: CLIConfig,
    pub client: HTTPClient,
    pub tab: Tab,
}

impl REPL {
    pub fn new(config: CLIConfig, client: HTTPClient) -> Self {
        let tab = config.tab;
        Self { config, client, tab }
    }

    pub fn run(&mut self) {
        render::banner(&self.config);
        self.show_status();
        loop {
            render::prompt(self.tab);
            let mut line = String::new();
            match io::stdin().read_line(&mut line) {
                Ok(0) | Err(_) => break,
                Ok(_) => {}
            }
            let line = line.trim().to_string();
            if line.is_empty() {
                continue;
            }
            if line.starts_with('/') {
                if self.handle_command(&line) {
                    break;
                }
                continue;
            }
            self.submit(&line);
        }
    }

    fn handle_command(&mut self, line: &str) -> bool {
        let mut parts = line.splitn(2, ' ');
        let cmd = parts.next().unwrap_or("").trim_start_matches('/');
        let rest = parts.next().unwrap_or("").trim();
        match cmd {
            "exit" | "quit" => return true,
            "help" => render::help(),
            "key" => {
                if rest.is_empty() {
                    render::error("usage: /key <api key>");
                } else {
                    self.validate(rest);
                }
            }
            "status" => self.show_status(),
            "tab" => {
                if rest.is_empty() {
                    render::tab(self.tab);
                } else if let Some(tab) = Tab::parse(rest) {
                    self.tab = tab;
                    render::tab(self.tab);
                } else {
                    render::error("unknown tab, use ideas or problems");
                }
            }
            "show" => self.show_slot(),
            "config" => render::config(&self.config, self.tab),
            "base" => {
                if rest.is_empty() {
                    render::info(&format!("base: {}", self.config.base_url));
                } else {
                    match HTTPClient::new(rest) {
                        Ok(client) => {
                            self.config.base_url = rest.to_string();
                            self.client = client;
                            render::info("base url updated");
                        }
                        Err(err) => render::error(&err),
                    }
                }
            }
            _ => render::info("unknown command, type /help"),
        }
        false
    }

    fn validate(&self, key: &str) {
        render::info("Validating...");
        match self.client.validate(key) {
            Ok(resp) => render::status_line(&resp.status),
            Err(err) => render::error(&err),
        }
    }

    fn show_status(&self) {
        match self.client.credential() {
            Ok(info) => render::credential(&info),
            Err(err) => render::error(&err),
        }
    }

    fn show_slot(&self) {
        match self.client.slot(self.tab) {
            Ok(slot) if slot.state == "in_flight" => {
                render::info(&format!("request {} still generating", slot.token))
            }
            Ok(slot) => render::cards(self.tab, &slot.items),
            Err(err) => render::error(&err),
        }
    }

    fn submit(&self, text: &str) {
        match self.tab {
            Tab::Ideas => render::info("Generating..."),
            Tab::Problems => render::info("Generating Solution"),
        }
        match self.client.generate(self.tab, text) {
            Ok(resp) => {
                if let Some(err) = resp.error {
                    render::error(&err);
                    return;
                }
                if resp.applied {
                    render::cards(self.tab, &resp.items);
                } else {
                    render::info(&format!("request {} was superseded, showing latest", resp.token));
                    self.show_slot();
                }
            }
            Err(err) => render::error(&err),
        }
    }
}
