//! Card decks.
//!
//! A deck is fixed when the session is created. Labels are trimmed, blank
//! labels and reserved route segments are dropped, and duplicates keep their
//! first position.

use super::PokerError;

/// Minimum number of usable cards in a deck.
pub const MIN_CARDS: usize = 2;

/// Labels that collide with routing segments under `/session/:id/`.
pub const RESERVED_LABELS: &[&str] = &["status"];

/// Ordered set of distinct card labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    cards: Vec<String>,
    numeric: bool,
}

impl Deck {
    /// Builds a deck from raw labels.
    ///
    /// # Errors
    ///
    /// - `InvalidDeck` if fewer than [`MIN_CARDS`] labels survive filtering
    pub fn new<I, S>(labels: I) -> Result<Self, PokerError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cards: Vec<String> = Vec::new();
        for label in labels {
            let label = label.as_ref().trim();
            if label.is_empty() || RESERVED_LABELS.contains(&label) {
                continue;
            }
            if cards.iter().any(|c| c == label) {
                continue;
            }
            cards.push(label.to_string());
        }

        if cards.len() < MIN_CARDS {
            return Err(PokerError::InvalidDeck {
                min: MIN_CARDS,
                actual: cards.len(),
            });
        }

        let numeric = cards.iter().all(|c| card_value(c).is_some());
        Ok(Self { cards, numeric })
    }

    /// Builds a deck from a comma-separated list such as `"1,2,3,5,8"`.
    pub fn parse(spec: &str) -> Result<Self, PokerError> {
        Self::new(spec.split(','))
    }

    pub fn cards(&self) -> &[String] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// True when every card is a finite number.
    pub fn is_numeric(&self) -> bool {
        self.numeric
    }

    pub fn contains(&self, label: &str) -> bool {
        self.cards.iter().any(|c| c == label)
    }

    /// Returns the card whose value is nearest to `target`.
    ///
    /// Ties go to the card that comes first in the deck. `None` for
    /// non-numeric decks.
    pub fn closest_to(&self, target: f64) -> Option<&str> {
        if !self.numeric {
            return None;
        }
        let mut best: Option<(&str, f64)> = None;
        for card in &self.cards {
            let Some(value) = card_value(card) else {
                continue;
            };
            let distance = (value - target).abs();
            match best {
                Some((_, d)) if d <= distance => {}
                _ => best = Some((card.as_str(), distance)),
            }
        }
        best.map(|(card, _)| card)
    }
}

/// Numeric value of a card label, if it has one.
pub fn card_value(label: &str) -> Option<f64> {
    label.parse::<f64>().ok().filter(|v| v.is_finite())
}
