//! Line commands for the interactive browser.
//!
//! Anything that does not start with `/` is search input.

use std::str::FromStr;

use cinema_eats_core::view::{Intent, ViewMode};
use cinema_eats_model::{Decade, Facet, MealType, ModelError, SceneId};
use thiserror::Error;

pub const HELP: &str = "\
Type to search (at least 2 characters). Commands:
  /filter <facet> <value>    add a filter (facets: genre, cuisine, decade, meal)
  /unfilter <facet> <value>  remove a filter
  /clear                     clear all filters
  /reset                     clear the search
  /more                      load more scenes
  /view grid|list            switch layout
  /fav <scene-id>            toggle a favorite
  /next, /prev, /open        pick a suggestion
  /help, /quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Intent(Intent),
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReplError {
    #[error("unknown command: /{0} (try /help)")]
    UnknownCommand(String),
    #[error("missing {0}")]
    MissingArgument(&'static str),
    #[error("view must be grid or list, got {0:?}")]
    InvalidViewMode(String),
    #[error(transparent)]
    Model(#[from] ModelError),
}

pub fn parse_line(line: &str) -> Result<Command, ReplError> {
    let Some(command) = line.trim().strip_prefix('/') else {
        let query = line.trim_end_matches(['\r', '\n']).to_owned();
        return Ok(Command::Intent(Intent::QueryChanged(query)));
    };

    let mut words = command.split_whitespace();
    let name = words.next().unwrap_or_default();
    let rest: Vec<&str> = words.collect();

    let intent = match name {
        "filter" | "unfilter" => {
            let (facet, value) = facet_argument(&rest)?;
            Intent::FilterToggled {
                facet,
                value,
                selected: name == "filter",
            }
        }
        "clear" => Intent::ClearFilters,
        "reset" => Intent::ClearSearch,
        "more" => Intent::LoadMore,
        "view" => {
            let mode = rest.first().copied().unwrap_or_default();
            Intent::SetViewMode(parse_view_mode(mode)?)
        }
        "fav" => {
            let id =
                rest.first().ok_or(ReplError::MissingArgument("scene id"))?;
            Intent::FavoriteToggled(SceneId::from(*id))
        }
        "next" => Intent::SelectNextSuggestion,
        "prev" => Intent::SelectPreviousSuggestion,
        "open" => Intent::AcceptSuggestion,
        "help" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),
        other => return Err(ReplError::UnknownCommand(other.to_owned())),
    };
    Ok(Command::Intent(intent))
}

pub fn parse_view_mode(raw: &str) -> Result<ViewMode, ReplError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "grid" => Ok(ViewMode::Grid),
        "list" => Ok(ViewMode::List),
        _ => Err(ReplError::InvalidViewMode(raw.to_owned())),
    }
}

/// Validate a facet value: decades and meals must parse, genres and cuisines
/// are free text.
pub fn facet_value(facet: Facet, raw: &str) -> Result<String, ModelError> {
    match facet {
        Facet::Decade => Ok(Decade::from_str(raw)?.label()),
        Facet::Meal => Ok(MealType::from_str(raw)?.label().to_owned()),
        Facet::Genre | Facet::Cuisine => Ok(raw.trim().to_owned()),
    }
}

fn facet_argument(rest: &[&str]) -> Result<(Facet, String), ReplError> {
    let (facet, value) = rest
        .split_first()
        .ok_or(ReplError::MissingArgument("facet"))?;
    if value.is_empty() {
        return Err(ReplError::MissingArgument("filter value"));
    }
    let facet = Facet::from_str(facet)?;
    Ok((facet, facet_value(facet, &value.join(" "))?))
}
