use std::io::{self, Write};

use cinema_eats_core::{
    favorites::ToggleOutcome,
    view::{
        Highlighted, RenderFrame, RenderTarget, SceneCard, SearchStatus,
        SuggestionPanel, ViewMode,
    },
};
use cinema_eats_model::SceneId;
use tracing::warn;

const FAVORITE_MARK: &str = "♥";

/// Draws frames as plain text.
#[derive(Debug)]
pub struct TerminalRenderer<W> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn write_frame(&mut self, frame: &RenderFrame) -> io::Result<()> {
        match &frame.search {
            SearchStatus::Active { query, matches } => {
                writeln!(self.out, "Search \"{query}\": {matches} scene(s)")?
            }
            SearchStatus::Inactive if !frame.active_filters.is_empty() => {
                let badges: Vec<String> = frame
                    .active_filters
                    .iter()
                    .map(|(facet, value)| format!("{facet}:{value}"))
                    .collect();
                writeln!(self.out, "Filters: {}", badges.join(", "))?
            }
            SearchStatus::Inactive => {}
        }

        if frame.is_empty() {
            writeln!(self.out, "No scenes found.")?;
            return Ok(());
        }

        for card in &frame.cards {
            match frame.view_mode {
                ViewMode::Grid => self.write_card(card)?,
                ViewMode::List => self.write_row(card)?,
            }
        }

        write!(self.out, "Showing {} of {}", frame.cards.len(), frame.total)?;
        if frame.has_more {
            write!(self.out, " (more available)")?;
        }
        writeln!(self.out)
    }

    pub fn write_cards(&mut self, cards: &[SceneCard]) -> io::Result<()> {
        for card in cards {
            self.write_card(card)?;
        }
        Ok(())
    }

    pub fn write_panel(&mut self, panel: &SuggestionPanel) -> io::Result<()> {
        match panel {
            SuggestionPanel::Hidden => Ok(()),
            SuggestionPanel::NoResults { query } => {
                writeln!(self.out, "  no matches for \"{query}\"")
            }
            SuggestionPanel::Results {
                suggestions,
                total,
                selected,
                ..
            } => {
                for (index, suggestion) in suggestions.iter().enumerate() {
                    let cursor =
                        if *selected == Some(index) { ">" } else { " " };
                    let food = suggestion
                        .food
                        .as_ref()
                        .map(|food| format!(" - {}", bracketed(food)))
                        .unwrap_or_default();
                    writeln!(
                        self.out,
                        "{cursor} {}{food}  [{}]  {}",
                        bracketed(&suggestion.title),
                        suggestion.meta,
                        suggestion.scene_id
                    )?;
                }
                if *total > suggestions.len() {
                    let hidden = total - suggestions.len();
                    writeln!(self.out, "  ...and {hidden} more")?;
                }
                Ok(())
            }
        }
    }

    pub fn write_outcome(&mut self, outcome: &ToggleOutcome) -> io::Result<()> {
        let mark = if outcome.celebrate() { " 🎉" } else { "" };
        writeln!(self.out, "{}: {}{mark}", outcome.notice(), outcome.scene_id)
    }

    fn write_card(&mut self, card: &SceneCard) -> io::Result<()> {
        let favorite = if card.favorite { FAVORITE_MARK } else { " " };
        writeln!(
            self.out,
            "{favorite} {} ({}) [{}]",
            card.title, card.year, card.id
        )?;

        let mut tags = Vec::new();
        tags.extend(card.genre.as_deref());
        tags.push(card.cuisine.as_str());
        tags.push(card.meal);
        tags.extend(card.food.as_deref());
        writeln!(self.out, "  {}", tags.join(" · "))?;
        writeln!(self.out, "  {}", card.description_preview)?;
        writeln!(self.out, "  {}", card.attribution)?;
        writeln!(self.out)
    }

    fn write_row(&mut self, card: &SceneCard) -> io::Result<()> {
        let favorite = if card.favorite { FAVORITE_MARK } else { " " };
        writeln!(
            self.out,
            "{favorite} {:<28} {}  {:<22} {}",
            card.title,
            card.year,
            card.cuisine,
            card.food.as_deref().unwrap_or("-")
        )
    }
}

/// `text` with the highlighted part wrapped in brackets.
pub fn bracketed(highlighted: &Highlighted) -> String {
    match highlighted.span {
        Some(_) => {
            let (before, hit, after) = highlighted.parts();
            format!("{before}[{hit}]{after}")
        }
        None => highlighted.text.clone(),
    }
}

impl<W: Write + Send> RenderTarget for TerminalRenderer<W> {
    fn render(&mut self, frame: &RenderFrame) {
        if let Err(err) =
            self.write_frame(frame).and_then(|_| self.out.flush())
        {
            warn!("Failed to draw frame: {}", err);
        }
    }

    fn suggestions(&mut self, panel: &SuggestionPanel) {
        if let Err(err) = self.write_panel(panel) {
            warn!("Failed to draw suggestions: {}", err);
        }
    }

    fn favorite_changed(&mut self, outcome: &ToggleOutcome) {
        if let Err(err) = self.write_outcome(outcome) {
            warn!("Failed to report favorite change: {}", err);
        }
    }

    fn focus(&mut self, scene: &SceneId) {
        if let Err(err) = writeln!(self.out, "Opening {scene}") {
            warn!("Failed to report focus: {}", err);
        }
    }
}
