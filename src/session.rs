//! Interactive lookup session: input lines in, card text or messages out

use tracing::debug;

use crate::card::{Card, CardRenderer};
use crate::errors::LookupError;
use crate::resolver::Resolver;

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Flip,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            ":flip" | ":f" => Self::Flip,
            ":quit" | ":q" | ":exit" => Self::Quit,
            _ => Self::Search(line.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutput {
    /// Rendered card face
    Card(String),
    /// Single message slot (errors and hints)
    Message(String),
    Exit,
}

pub struct LookupSession {
    resolver: Resolver,
    renderer: CardRenderer,
    current: Option<Card>,
}

impl LookupSession {
    pub fn new(resolver: Resolver, renderer: CardRenderer) -> Self {
        Self {
            resolver,
            renderer,
            current: None,
        }
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub fn current(&self) -> Option<&Card> {
        self.current.as_ref()
    }

    pub async fn handle_line(&mut self, line: &str) -> SessionOutput {
        match Command::parse(line) {
            Command::Search(input) => self.search(&input).await,
            Command::Flip => self.flip(),
            Command::Quit => SessionOutput::Exit,
        }
    }

    /// Resolve input and show the front of its card; every error becomes a message
    pub async fn search(&mut self, input: &str) -> SessionOutput {
        match self.resolver.resolve(input).await {
            Ok(resolution) => {
                debug!(
                    "Showing #{} ({:?})",
                    resolution.record.id, resolution.state
                );
                let card = Card::new(resolution.record);
                let rendered = self.renderer.render(&card);
                self.current = Some(card);
                SessionOutput::Card(rendered)
            }
            Err(LookupError::EmptyInput) => {
                SessionOutput::Message(LookupError::EmptyInput.user_message().to_string())
            }
            Err(e) => {
                self.current = None;
                SessionOutput::Message(e.user_message().to_string())
            }
        }
    }

    pub fn flip(&mut self) -> SessionOutput {
        match self.current.as_mut() {
            Some(card) => {
                card.flip();
                SessionOutput::Card(self.renderer.render(card))
            }
            None => SessionOutput::Message("Search for a Pokémon first.".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{DurableCache, InMemoryStore, MemoryCache};
    use crate::card::CardFace;
    use crate::catalog::MockCatalogClient;
    use crate::config::DisplayConfig;
    use crate::models::fixtures;
    use std::sync::Arc;

    fn session_with(catalog: MockCatalogClient) -> LookupSession {
        let resolver = Resolver::new(
            MemoryCache::new(),
            DurableCache::new(Arc::new(InMemoryStore::new()), "pokemonCache"),
            Arc::new(catalog),
        );
        LookupSession::new(resolver, CardRenderer::new(DisplayConfig::default()))
    }

    #[test]
    fn test_command_parsing() {
        assert_eq!(Command::parse(" :flip "), Command::Flip);
        assert_eq!(Command::parse(":q"), Command::Quit);
        assert_eq!(Command::parse("Pikachu"), Command::Search("Pikachu".to_string()));
        assert_eq!(Command::parse(""), Command::Search(String::new()));
    }

    #[tokio::test]
    async fn test_search_flip_and_new_search_resets_face() {
        let mut catalog = MockCatalogClient::new();
        catalog
            .expect_fetch()
            .times(2)
            .returning(|key| match key.to_string().as_str() {
                "pikachu" => Ok(fixtures::record(25, "pikachu")),
                _ => Ok(fixtures::record(7, "squirtle")),
            });
        let mut session = session_with(catalog);

        let SessionOutput::Card(front) = session.handle_line("Pikachu").await else {
            panic!("expected a card");
        };
        assert!(front.starts_with("#025  pikachu"));

        let SessionOutput::Card(back) = session.handle_line(":flip").await else {
            panic!("expected a card");
        };
        assert!(back.contains("base stats"));
        assert_eq!(session.current().unwrap().face(), CardFace::Back);

        session.handle_line("squirtle").await;
        assert_eq!(session.current().unwrap().face(), CardFace::Front);
        assert_eq!(session.current().unwrap().record().id, 7);
    }

    #[tokio::test]
    async fn test_errors_land_in_message_slot() {
        let mut catalog = MockCatalogClient::new();
        catalog
            .expect_fetch()
            .times(1)
            .returning(|key| Err(LookupError::not_found(key.to_string())));
        let mut session = session_with(catalog);

        assert_eq!(
            session.handle_line("   ").await,
            SessionOutput::Message("Please enter a Pokémon name or ID.".to_string())
        );
        assert_eq!(
            session.handle_line("agumon").await,
            SessionOutput::Message("Pokémon not found. Check the name or ID.".to_string())
        );
        assert!(session.current().is_none());
        assert!(matches!(session.flip(), SessionOutput::Message(_)));
        assert_eq!(session.handle_line(":quit").await, SessionOutput::Exit);
    }
}
