// file: src/view/cards.rs
// description: terminal rendering of search results as cards

use crate::models::SearchResult;
use crate::utils::Validator;
use colored::*;

const CARD_WIDTH: usize = 80;

#[derive(Debug, Clone, Default)]
pub struct CardRenderer {
    max_content_chars: usize,
}

impl CardRenderer {
    pub fn new(max_content_chars: usize) -> Self {
        Self { max_content_chars }
    }

    pub fn render_card(&self, position: usize, result: &SearchResult) -> String {
        let title = format!("PDF Result: {}", result.source);
        let number = format!("#{}", position);
        let padding = CARD_WIDTH.saturating_sub(title.chars().count() + number.chars().count());

        let mut card = String::new();
        card.push_str(&"─".repeat(CARD_WIDTH));
        card.push('\n');
        card.push_str(&format!(
            "{}{}{}\n",
            title.blue().bold(),
            " ".repeat(padding.max(1)),
            number.dimmed()
        ));
        card.push_str(&format!("{}\n\n", "Found in PDF".cyan()));

        // keep the passage's own line breaks
        let content = Validator::truncate_text(&result.content, self.max_content_chars);
        for line in content.lines() {
            card.push_str("  ");
            card.push_str(line);
            card.push('\n');
        }

        card
    }

    pub fn render_results(&self, results: &[SearchResult]) -> String {
        let mut out = String::new();
        for (idx, result) in results.iter().enumerate() {
            out.push_str(&self.render_card(idx + 1, result));
            out.push('\n');
        }
        out
    }
}
