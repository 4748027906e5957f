//! Dashboard session state.
//!
//! A [`Dashboard`] owns one player's session: who they are, the last snapshot
//! of the scoreboard fetched from the service, and the refresh marker seen with
//! it. Every action mutates the service first and then reloads the documents it
//! touched, so the cache only ever holds state the service has confirmed.
//!
//! Change detection is polling: [`Dashboard::poll`] compares the service's
//! refresh marker and rule list with the cached copy and reloads on any
//! difference. Drinks added by other players do not move the marker, so they
//! show up on the next marker change, rule change or local action.

mod command;
mod render;

pub use command::*;
pub use render::render;

use std::num::NonZeroU32;

use crate::client::{ClientError, SipClient};
use crate::models::{Rule, SipData};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    /// No player name entered yet.
    NoName,
    /// Drinks are attributed to `player`.
    Active { player: String },
}

/// Cached copy of the service state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub players: SipData,
    pub rules: Vec<Rule>,
    pub last_refresh: f64,
}

/// Client-side state for one dashboard session.
#[derive(Debug)]
pub struct Dashboard {
    client: SipClient,
    session: Session,
    snapshot: Option<Snapshot>,
}

impl Dashboard {
    /// Create a session. Nothing is fetched until the state is first needed.
    pub fn new(client: SipClient) -> Self {
        Self {
            client,
            session: Session::NoName,
            snapshot: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The cached snapshot, if one has been loaded.
    pub fn cached(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// Draw the board from the cached state.
    pub fn render(&self) -> String {
        render(&self.session, self.snapshot.as_ref())
    }

    /// The cached snapshot, loading it on first use.
    pub async fn snapshot(&mut self) -> Result<&Snapshot, ClientError> {
        let snapshot = match self.snapshot.take() {
            Some(snapshot) => snapshot,
            None => self.fetch_snapshot().await?,
        };
        Ok(self.snapshot.insert(snapshot))
    }

    async fn fetch_snapshot(&self) -> Result<Snapshot, ClientError> {
        let last_refresh = self.client.last_refresh().await?;
        let players = self.client.sip_data().await?;
        let rules = self.client.rules().await?;
        Ok(Snapshot {
            players,
            rules,
            last_refresh,
        })
    }

    /// Replace the whole cache with fresh state from the service.
    async fn reload_all(&mut self) -> Result<(), ClientError> {
        let snapshot = self.fetch_snapshot().await?;
        self.snapshot = Some(snapshot);
        Ok(())
    }

    async fn reload_players(&mut self) -> Result<(), ClientError> {
        let players = self.client.sip_data().await?;
        match self.snapshot.as_mut() {
            Some(snapshot) => snapshot.players = players,
            None => self.reload_all().await?,
        }
        Ok(())
    }

    async fn reload_rules(&mut self) -> Result<(), ClientError> {
        let rules = self.client.rules().await?;
        match self.snapshot.as_mut() {
            Some(snapshot) => snapshot.rules = rules,
            None => self.reload_all().await?,
        }
        Ok(())
    }

    fn player(&self) -> Result<&str, ClientError> {
        match &self.session {
            Session::Active { player } => Ok(player),
            Session::NoName => Err(ClientError::Validation(
                "Please enter your name first.".to_string(),
            )),
        }
    }

    /// Leave `NO_NAME` by choosing the name drinks are attributed to.
    ///
    /// The name is kept exactly as typed; only an empty or blank name is refused.
    pub fn submit_name(&mut self, name: &str) -> Result<(), ClientError> {
        if name.trim().is_empty() {
            return Err(ClientError::Validation(
                "Please enter your name.".to_string(),
            ));
        }
        self.session = Session::Active {
            player: name.to_string(),
        };
        tracing::debug!(player = name, "session active");
        Ok(())
    }

    /// Record `count` drinks for the current player.
    pub async fn add_sips(&mut self, count: u32) -> Result<(), ClientError> {
        let player = self.player()?.to_string();
        let count = NonZeroU32::new(count)
            .ok_or_else(|| ClientError::Validation("Sip count must be at least 1.".to_string()))?;

        self.client.add_sip(&player, count).await?;
        self.reload_players().await
    }

    /// Record the drinks for the rule at `index` against the current player.
    pub async fn drink_for_rule(&mut self, index: usize) -> Result<(), ClientError> {
        self.player()?;
        let cost = self
            .snapshot()
            .await?
            .rules
            .get(index)
            .map(Rule::cost)
            .ok_or_else(|| ClientError::Validation(format!("There is no rule {}.", index)))?;

        self.add_sips(cost).await
    }

    /// Append a rule. Blank rule text is refused without contacting the service.
    pub async fn add_rule(&mut self, text: &str, cost: u32) -> Result<(), ClientError> {
        self.player()?;
        if text.trim().is_empty() {
            return Err(ClientError::Validation("Please enter a rule.".to_string()));
        }
        let cost = NonZeroU32::new(cost)
            .ok_or_else(|| ClientError::Validation("Rule cost must be at least 1.".to_string()))?;

        self.client.add_rule(text, cost).await?;
        self.reload_rules().await
    }

    /// Delete the rule at `index`, as currently numbered on the service.
    pub async fn delete_rule(&mut self, index: usize) -> Result<(), ClientError> {
        self.player()?;
        let index = i64::try_from(index)
            .map_err(|_| ClientError::Validation(format!("There is no rule {}.", index)))?;

        self.client.delete_rule(index).await?;
        self.reload_rules().await
    }

    /// Wipe all players and rules on the service, then reload everything.
    pub async fn reset(&mut self) -> Result<(), ClientError> {
        self.player()?;
        self.client.reset_data().await?;
        self.reload_all().await
    }

    /// Bump the refresh marker so every dashboard reloads, including this one.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        self.player()?;
        self.client.refresh().await?;
        self.reload_all().await
    }

    /// Check the service for changes and reload player data if there are any.
    ///
    /// Returns `true` when the cached state changed and the board should be
    /// redrawn. The first call loads the initial snapshot.
    pub async fn poll(&mut self) -> Result<bool, ClientError> {
        let Some(cached) = self.snapshot.as_ref() else {
            self.reload_all().await?;
            return Ok(true);
        };

        let last_refresh = self.client.last_refresh().await?;
        let rules = self.client.rules().await?;
        if last_refresh <= cached.last_refresh && rules == cached.rules {
            return Ok(false);
        }

        let players = self.client.sip_data().await?;
        tracing::debug!(last_refresh, "service state changed, reloaded");
        self.snapshot = Some(Snapshot {
            players,
            rules,
            last_refresh,
        });
        Ok(true)
    }

    /// Run one parsed command and describe the outcome.
    pub async fn execute(&mut self, command: Command) -> Result<String, ClientError> {
        match command {
            Command::Name { name } => {
                let name = name.join(" ");
                self.submit_name(&name)?;
                self.snapshot().await?;
                Ok(format!("Welcome, {}!", name))
            }
            Command::Sip { count } => {
                self.add_sips(count).await?;
                Ok("Sips added!".to_string())
            }
            Command::Drink { index } => {
                self.drink_for_rule(index).await?;
                Ok("Sips added!".to_string())
            }
            Command::AddRule { cost, text } => {
                self.add_rule(&text.join(" "), cost).await?;
                Ok("Rule added!".to_string())
            }
            Command::Delete { index } => {
                self.delete_rule(index).await?;
                Ok("Rule deleted.".to_string())
            }
            Command::Reset => {
                self.reset().await?;
                Ok("Data reset!".to_string())
            }
            Command::Refresh => {
                self.refresh().await?;
                Ok("Refreshed.".to_string())
            }
            Command::Show => {
                self.snapshot().await?;
                Ok(String::new())
            }
            Command::Quit => Ok("Bye!".to_string()),
        }
    }
}
