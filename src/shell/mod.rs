use std::io::{BufRead, Write};

use tracing::{error, info};

use crate::{
    services::wigle_client::{
        types::{
            wigle_search_response::NetworkRecord, wigle_service_error::WigleServiceError,
        },
        wigle_service::NetworkSearch,
    },
    types::{
        app_config::Edition,
        search_request::{Credentials, SearchRequest},
        venue::Venue,
    },
};

pub mod menu;
pub mod presenter;

use menu::{
    classify_menu_input, render_hostile_banner, render_single_column, render_two_columns,
    MenuChoice, INVALID_CHOICE, LOCATION_PROMPT,
};
use presenter::display_open_networks;

pub const SEARCH_RADIUS_METERS: u32 = 500;

const API_NAME_PROMPT: &str = "Enter your Wigle.net API name: ";
const API_TOKEN_PROMPT: &str = "Enter your Wigle.net API token: ";
const SEARCH_AGAIN_PROMPT: &str = "Do you want to make another search [yes, no]? ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    MenuPrompt,
    Exit,
}

/// Menu loop over a line-oriented terminal. Closing the input ends it like `0`.
pub struct Shell<S, R, W> {
    search: S,
    edition: Edition,
    input: R,
    output: W,
}

impl<S, R, W> Shell<S, R, W>
where
    S: NetworkSearch,
    R: BufRead,
    W: Write,
{
    pub fn new(search: S, edition: Edition, input: R, output: W) -> Self {
        Self {
            search,
            edition,
            input,
            output,
        }
    }

    pub async fn run(&mut self) -> std::io::Result<()> {
        match self.edition {
            Edition::Extended => {
                while self.step().await? == ShellState::MenuPrompt {}
                Ok(())
            }
            Edition::Compact => self.run_once().await,
        }
    }

    /// One pass through the extended menu.
    pub async fn step(&mut self) -> std::io::Result<ShellState> {
        let venues = self.edition.venues();

        writeln!(self.output, "\nSelect a location:")?;
        render_two_columns(&mut self.output, &venues)?;
        writeln!(self.output, "0 - Quit")?;

        let line = match self.read_line(LOCATION_PROMPT)? {
            Some(line) => line,
            None => return Ok(ShellState::Exit),
        };

        let venue = match classify_menu_input(&line) {
            MenuChoice::Quit => {
                writeln!(self.output, "Exiting...")?;
                return Ok(ShellState::Exit);
            }
            MenuChoice::Hostile => {
                render_hostile_banner(&mut self.output)?;
                return Ok(ShellState::MenuPrompt);
            }
            MenuChoice::YesNo => return Ok(ShellState::MenuPrompt),
            MenuChoice::Venue(id) => match id.and_then(|id| venues.lookup(id)) {
                Some(venue) => venue,
                None => {
                    writeln!(self.output, "{}", INVALID_CHOICE)?;
                    return Ok(ShellState::MenuPrompt);
                }
            },
        };

        let credentials = match self.read_credentials()? {
            Some(credentials) => credentials,
            None => return Ok(ShellState::Exit),
        };

        match self.query(venue, credentials).await {
            Ok(records) => {
                display_open_networks(&mut self.output, &records)?;
                self.ask_search_again()
            }
            Err(e) => {
                writeln!(self.output, "{}", e)?;
                Ok(ShellState::MenuPrompt)
            }
        }
    }

    async fn run_once(&mut self) -> std::io::Result<()> {
        let venues = self.edition.venues();

        writeln!(self.output, "Select a location:")?;
        render_single_column(&mut self.output, &venues)?;

        let line = match self.read_line(LOCATION_PROMPT)? {
            Some(line) => line,
            None => return Ok(()),
        };

        let venue = match line
            .trim()
            .parse::<u32>()
            .ok()
            .and_then(|id| venues.lookup(id))
        {
            Some(venue) => venue,
            None => {
                writeln!(self.output, "{}", INVALID_CHOICE)?;
                return Ok(());
            }
        };

        let credentials = match self.read_credentials()? {
            Some(credentials) => credentials,
            None => return Ok(()),
        };

        match self.query(venue, credentials).await {
            Ok(records) => display_open_networks(&mut self.output, &records),
            Err(e) => writeln!(self.output, "{}", e),
        }
    }

    async fn query(
        &self,
        venue: &Venue,
        credentials: Credentials,
    ) -> Result<Vec<NetworkRecord>, WigleServiceError> {
        info!("Searching open networks around {}", venue.name);

        self.search
            .search_open_networks(SearchRequest::around(
                venue,
                SEARCH_RADIUS_METERS,
                credentials,
            ))
            .await
            .map_err(|e| {
                error!("Failed to fetch open networks around {}: {}", venue.name, e);
                e
            })
    }

    fn ask_search_again(&mut self) -> std::io::Result<ShellState> {
        loop {
            let answer = match self.read_line(SEARCH_AGAIN_PROMPT)? {
                Some(answer) => answer.to_lowercase(),
                None => return Ok(ShellState::Exit),
            };

            match answer.as_str() {
                "yes" | "y" => return Ok(ShellState::MenuPrompt),
                "no" | "n" => {
                    writeln!(self.output, "Exiting...")?;
                    return Ok(ShellState::Exit);
                }
                _ => writeln!(self.output, "Please answer with 'yes' or 'no'.")?,
            }
        }
    }

    fn read_credentials(&mut self) -> std::io::Result<Option<Credentials>> {
        let name = match self.read_line(API_NAME_PROMPT)? {
            Some(name) => name,
            None => return Ok(None),
        };
        let token = match self.read_line(API_TOKEN_PROMPT)? {
            Some(token) => token,
            None => return Ok(None),
        };

        Ok(Some(Credentials { name, token }))
    }

    /// `None` once the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);

        Ok(Some(line))
    }
}
