use std::ops::ControlFlow;

use dioxus::prelude::*;

use crate::core::timing::use_interval;
use crate::t;

/// Rotation period of the home page quote card.
pub const QUOTE_PERIOD_MS: u64 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

pub static QUOTES: [Quote; 4] = [
    Quote {
        text: "The farmer is the only man in our economy who buys everything at retail, sells everything at wholesale, and pays the freight both ways.",
        author: "John F. Kennedy",
    },
    Quote {
        text: "Agriculture is the most healthful, most useful, and most noble employment of man.",
        author: "George Washington",
    },
    Quote {
        text: "Jai Jawan, Jai Kisan.",
        author: "Lal Bahadur Shastri",
    },
    Quote {
        text: "To forget how to dig the earth and to tend the soil is to forget ourselves.",
        author: "Mahatma Gandhi",
    },
];

pub fn quote_at(ticks: usize) -> &'static Quote {
    &QUOTES[ticks % QUOTES.len()]
}

/// Position in the rotation, starting at the first quote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuoteCycle {
    ticks: usize,
}

impl QuoteCycle {
    pub fn advance(&mut self) {
        self.ticks = (self.ticks + 1) % QUOTES.len();
    }

    pub fn current(&self) -> &'static Quote {
        quote_at(self.ticks)
    }
}

#[component]
pub fn QuoteRotator() -> Element {
    crate::i18n::use_language();
    let mut cycle = use_signal(QuoteCycle::default);
    use_interval(QUOTE_PERIOD_MS, move || {
        cycle.write().advance();
        ControlFlow::Continue(())
    });

    let quote = cycle.read().current();

    rsx! {
        section { class: "quotes",
            h2 { class: "section-title", {t!("quotes-title")} }
            // Keyed so the fade-in animation replays on every rotation.
            div { key: "{quote.author}", class: "quote-card",
                p { class: "quote-card__text", "“{quote.text}”" }
                span { class: "quote-card__author", "- {quote.author}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_quote() {
        assert_eq!(QuoteCycle::default().current(), &QUOTES[0]);
    }

    #[test]
    fn after_n_ticks_shows_quote_n_mod_len() {
        let mut cycle = QuoteCycle::default();
        for n in 1..=13 {
            cycle.advance();
            assert_eq!(cycle.current(), &QUOTES[n % QUOTES.len()], "tick {n}");
        }
    }

    #[test]
    fn quote_at_wraps() {
        assert_eq!(quote_at(4).author, "John F. Kennedy");
        assert_eq!(quote_at(6).author, "Lal Bahadur Shastri");
    }
}
