use serde::Serialize;

/// Every action the command palette lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandAction {
    MarkDone,
    Remind,
    Star,
    Move,
    Label,
    Reply,
    Forward,
    Archive,
    Trash,
    Search,
}

/// What choosing an action does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Wiring {
    /// Runs an effect
    Wired(Effect),
    /// Listed in the palette but has no behavior yet; choosing it only
    /// closes the palette
    Declared,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    MarkDone,
}

impl CommandAction {
    pub fn wiring(self) -> Wiring {
        match self {
            CommandAction::MarkDone => Wiring::Wired(Effect::MarkDone),
            CommandAction::Remind
            | CommandAction::Star
            | CommandAction::Move
            | CommandAction::Label
            | CommandAction::Reply
            | CommandAction::Forward
            | CommandAction::Archive
            | CommandAction::Trash
            | CommandAction::Search => Wiring::Declared,
        }
    }
}

/// A row of the palette
#[derive(Debug, Clone, Serialize)]
pub struct PaletteAction {
    pub action: CommandAction,
    pub icon: &'static str,
    pub label: &'static str,
    pub shortcut: &'static str,
}

/// Fuzzy match result for a palette action
#[derive(Debug, Clone)]
pub struct ScoredAction {
    pub action: PaletteAction,
    pub score: i32,
    /// Matched character indices within the label
    pub label_matched: Vec<usize>,
    /// Matched character indices within the shortcut
    pub shortcut_matched: Vec<usize>,
}

/// The fixed palette table, in display order
pub fn palette_actions() -> Vec<PaletteAction> {
    let row = |action, icon, label, shortcut| PaletteAction {
        action,
        icon,
        label,
        shortcut,
    };
    vec![
        row(CommandAction::MarkDone, "\u{2714}", "Mark Done", "E"),
        row(CommandAction::Remind, "\u{25F7}", "Remind Me", "H"),
        row(CommandAction::Star, "\u{2605}", "Star", "S"),
        row(CommandAction::Move, "\u{21C4}", "Move", "V"),
        row(CommandAction::Label, "\u{25C6}", "Label", "L"),
        row(CommandAction::Reply, "\u{21A9}", "Reply", "R"),
        row(CommandAction::Forward, "\u{21AA}", "Forward", "F"),
        row(CommandAction::Archive, "\u{25A4}", "Archive", "A"),
        row(CommandAction::Trash, "\u{2715}", "Trash", "#"),
        row(CommandAction::Search, "\u{2315}", "Search", "/"),
    ]
}

/// The palette action bound to a single-key shortcut, case-insensitive
pub fn action_for_shortcut(c: char) -> Option<CommandAction> {
    palette_actions()
        .into_iter()
        .find(|a| a.shortcut.chars().eq(c.to_uppercase()))
        .map(|a| a.action)
}

// ---------------------------------------------------------------------------
// Fuzzy matching
// ---------------------------------------------------------------------------

/// Fuzzy score a query against a target string.
/// Returns None if no match, or Some((score, matched_indices)).
pub fn fuzzy_score(query: &str, target: &str) -> Option<(i32, Vec<usize>)> {
    if query.is_empty() {
        return Some((0, vec![]));
    }

    let query_lower: Vec<char> = query.chars().flat_map(|c| c.to_lowercase()).collect();
    let target_chars: Vec<char> = target.chars().collect();
    let target_lower: Vec<char> = target.chars().flat_map(|c| c.to_lowercase()).collect();

    let mut matched = Vec::with_capacity(query_lower.len());
    let mut from = 0;
    for &qc in &query_lower {
        let pos = target_lower.get(from..)?.iter().position(|&tc| tc == qc)?;
        matched.push(from + pos);
        from += pos + 1;
    }

    let half = target_chars.len() / 2;
    let mut score: i32 = 0;
    for (mi, &idx) in matched.iter().enumerate() {
        let at_word_start =
            idx == 0 || matches!(target_chars.get(idx.wrapping_sub(1)), Some(' ' | '-' | '/'));
        if at_word_start {
            score += 10;
        }
        if idx < half {
            score += 3;
        }
        if mi > 0 {
            let prev = matched[mi - 1];
            if idx == prev + 1 {
                score += 5;
            }
            score -= idx.saturating_sub(prev + 1) as i32;
        }
    }

    Some((score, matched))
}

/// Filter and score actions against a query, matching the combined
/// "label shortcut" string so typing "e" finds "Mark Done" by its key.
/// An empty query keeps table order; otherwise best score first.
pub fn filter_actions(query: &str, actions: &[PaletteAction]) -> Vec<ScoredAction> {
    let mut results: Vec<ScoredAction> = actions
        .iter()
        .filter_map(|a| {
            let combined = format!("{} {}", a.label, a.shortcut);
            let (score, indices) = fuzzy_score(query, &combined)?;

            let label_len = a.label.chars().count();
            let (label_matched, shortcut_matched) = indices.into_iter().fold(
                (Vec::new(), Vec::new()),
                |(mut l, mut s), idx| {
                    if idx < label_len {
                        l.push(idx);
                    } else if idx > label_len {
                        s.push(idx - label_len - 1);
                    }
                    (l, s)
                },
            );

            Some(ScoredAction {
                action: a.clone(),
                score,
                label_matched,
                shortcut_matched,
            })
        })
        .collect();

    if !query.is_empty() {
        // Stable sort keeps table order among equal scores
        results.sort_by(|a, b| b.score.cmp(&a.score));
    }
    results
}

// ---------------------------------------------------------------------------
// Command palette state
// ---------------------------------------------------------------------------

/// State for the command palette overlay
#[derive(Debug, Clone)]
pub struct CommandPaletteState {
    /// Filter text typed by the user
    pub input: String,
    /// Currently selected index in the filtered results
    pub selected: usize,
    /// Filtered and scored results
    pub results: Vec<ScoredAction>,
    /// Total number of actions before filtering
    pub total_count: usize,
}

impl Default for CommandPaletteState {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandPaletteState {
    pub fn new() -> Self {
        let actions = palette_actions();
        CommandPaletteState {
            input: String::new(),
            selected: 0,
            results: filter_actions("", &actions),
            total_count: actions.len(),
        }
    }

    /// Recompute results after the input changed
    pub fn update_filter(&mut self) {
        self.results = filter_actions(&self.input, &palette_actions());
        self.selected = 0;
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
        self.update_filter();
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
        self.update_filter();
    }

    pub fn move_selection(&mut self, delta: isize) {
        if self.results.is_empty() {
            return;
        }
        let last = self.results.len() - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }

    pub fn selected_action(&self) -> Option<CommandAction> {
        self.results.get(self.selected).map(|r| r.action.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_ten_actions_with_one_wired() {
        let actions = palette_actions();
        assert_eq!(actions.len(), 10);
        let wired: Vec<CommandAction> = actions
            .iter()
            .filter(|a| matches!(a.action.wiring(), Wiring::Wired(_)))
            .map(|a| a.action)
            .collect();
        assert_eq!(wired, vec![CommandAction::MarkDone]);
        assert_eq!(CommandAction::Trash.wiring(), Wiring::Declared);
    }

    #[test]
    fn shortcuts_are_unique() {
        let actions = palette_actions();
        let mut keys: Vec<&str> = actions.iter().map(|a| a.shortcut).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), actions.len());
    }

    #[test]
    fn shortcut_lookup() {
        assert_eq!(action_for_shortcut('e'), Some(CommandAction::MarkDone));
        assert_eq!(action_for_shortcut('E'), Some(CommandAction::MarkDone));
        assert_eq!(action_for_shortcut('#'), Some(CommandAction::Trash));
        assert_eq!(action_for_shortcut('z'), None);
    }

    #[test]
    fn fuzzy_score_exact_match() {
        let (score, indices) = fuzzy_score("done", "Mark Done").unwrap();
        assert!(score > 0);
        assert_eq!(indices, vec![5, 6, 7, 8]);
    }

    #[test]
    fn fuzzy_score_no_match() {
        assert!(fuzzy_score("xyz", "Mark Done").is_none());
    }

    #[test]
    fn fuzzy_score_empty_query() {
        let (score, indices) = fuzzy_score("", "anything").unwrap();
        assert_eq!(score, 0);
        assert!(indices.is_empty());
    }

    #[test]
    fn fuzzy_score_prefix_beats_middle() {
        let (prefix, _) = fuzzy_score("re", "Reply R").unwrap();
        let (middle, _) = fuzzy_score("re", "Forward F").unwrap_or((i32::MIN, vec![]));
        assert!(prefix > middle);
    }

    #[test]
    fn empty_query_keeps_table_order() {
        let results = filter_actions("", &palette_actions());
        let labels: Vec<&str> = results.iter().map(|r| r.action.label).collect();
        assert_eq!(labels[0], "Mark Done");
        assert_eq!(labels[9], "Search");
    }

    #[test]
    fn filter_matches_shortcut() {
        let results = filter_actions("#", &palette_actions());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].action.action, CommandAction::Trash);
        assert!(results[0].label_matched.is_empty());
        assert_eq!(results[0].shortcut_matched, vec![0]);
    }

    #[test]
    fn filter_ranks_word_start_first() {
        let results = filter_actions("st", &palette_actions());
        assert_eq!(results[0].action.action, CommandAction::Star);
    }

    #[test]
    fn palette_selection_clamps() {
        let mut cp = CommandPaletteState::new();
        assert_eq!(cp.total_count, 10);
        cp.move_selection(-1);
        assert_eq!(cp.selected, 0);
        cp.move_selection(50);
        assert_eq!(cp.selected, 9);
        assert_eq!(cp.selected_action(), Some(CommandAction::Search));

        cp.push_char('z');
        cp.push_char('q');
        assert!(cp.results.is_empty());
        assert_eq!(cp.selected_action(), None);
        cp.pop_char();
        cp.pop_char();
        assert_eq!(cp.results.len(), 10);
    }
}
