use crate::reply::{ChoiceKeyboard, ChoiceReply};
use moviequeue_protocol::{CatalogItem, MovieStatus, Verb};

const CHOICES_PER_ROW: usize = 2;

pub(crate) const CHOICE_PROMPT: &str =
    r"Choose the matching movie from the reply keyboard \(does not work in telegram web\)";

/// A re-issuable command and the keyboard row it is shown in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisambiguationChoice {
    pub command: String,
    pub row: usize,
}

/// One choice per candidate, two per row, in candidate order.
///
/// Titles are kept verbatim: pressing the button sends the label back as a command.
pub fn choices(candidates: &[CatalogItem], command_verb: &str) -> Vec<DisambiguationChoice> {
    candidates
        .iter()
        .enumerate()
        .map(|(idx, candidate)| DisambiguationChoice {
            command: format!("{command_verb} {}", candidate.title),
            row: idx / CHOICES_PER_ROW,
        })
        .collect()
}

/// Groups choices into keyboard rows; an odd trailing candidate gets a row of its own.
pub fn build_rows(candidates: &[CatalogItem], command_verb: &str) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    for choice in choices(candidates, command_verb) {
        if rows.len() <= choice.row {
            rows.push(Vec::with_capacity(CHOICES_PER_ROW));
        }
        rows[choice.row].push(choice.command);
    }
    rows
}

/// Keyboard asking which candidate should be marked with `status`.
pub(crate) fn mark_choice(candidates: &[CatalogItem], verb: Verb, status: MovieStatus) -> ChoiceReply {
    ChoiceReply {
        prompt: CHOICE_PROMPT.to_string(),
        keyboard: ChoiceKeyboard {
            rows: build_rows(candidates, &verb.slash()),
            one_time: true,
            selective: true,
            resize: true,
            placeholder: Some(format!("mark selected movie as {}", status.past_tense())),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn items(titles: &[&str]) -> Vec<CatalogItem> {
        titles
            .iter()
            .enumerate()
            .map(|(idx, title)| CatalogItem::new(idx.to_string(), *title, None))
            .collect()
    }

    #[test]
    fn pairs_candidates_into_rows() {
        let rows = build_rows(&items(&["A", "B", "C", "D"]), "/watch");
        assert_eq!(
            rows,
            vec![
                vec!["/watch A".to_string(), "/watch B".to_string()],
                vec!["/watch C".to_string(), "/watch D".to_string()],
            ]
        );
    }

    #[test]
    fn odd_candidate_gets_its_own_row() {
        let rows = build_rows(&items(&["A", "B", "C"]), "/delete");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec!["/delete C".to_string()]);
    }

    #[test]
    fn titles_are_not_escaped() {
        let choices = choices(&items(&["Mission: Impossible - Fallout (2018)."]), "/watch");
        assert_eq!(choices[0].command, "/watch Mission: Impossible - Fallout (2018).");
        assert_eq!(choices[0].row, 0);
    }

    #[test]
    fn mark_choice_is_one_time_and_selective() {
        let reply = mark_choice(&items(&["A", "B"]), Verb::Watch, MovieStatus::Watched);
        assert!(reply.keyboard.one_time);
        assert!(reply.keyboard.selective);
        assert!(reply.prompt.contains("does not work in telegram web"));
        assert_eq!(
            reply.keyboard.placeholder.as_deref(),
            Some("mark selected movie as watched")
        );
    }
}
