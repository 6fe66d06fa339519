use std::collections::HashMap;
use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    SpawnBrowser,
    SpawnTerminal,
    CloseWindow,
    MinimizeWindow,
    CycleNextWindow,
    CyclePrevWindow,
    ToggleHelp,
    CloseHelp,
}

impl Action {
    /// Every action, in the order the help overlay lists them.
    pub const ALL: [Action; 9] = [
        Action::SpawnBrowser,
        Action::SpawnTerminal,
        Action::CloseWindow,
        Action::MinimizeWindow,
        Action::CycleNextWindow,
        Action::CyclePrevWindow,
        Action::ToggleHelp,
        Action::CloseHelp,
        Action::Quit,
    ];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Quit => "Quit",
            Action::SpawnBrowser => "New browser window",
            Action::SpawnTerminal => "New terminal window",
            Action::CloseWindow => "Close active window",
            Action::MinimizeWindow => "Minimize / restore active window",
            Action::CycleNextWindow => "Activate next window",
            Action::CyclePrevWindow => "Activate previous window",
            Action::ToggleHelp => "Toggle this help",
            Action::CloseHelp => "Close help",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyCombo {
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    /// Letter keys compare case-insensitively; some terminals report
    /// Alt+B as an uppercase char.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let code_matches = match (self.code, key.code) {
            (KeyCode::Char(a), KeyCode::Char(b)) => a.eq_ignore_ascii_case(&b),
            (a, b) => a == b,
        };
        code_matches
            && key.modifiers.difference(KeyModifiers::SHIFT)
                == self.mods.difference(KeyModifiers::SHIFT)
    }

    pub fn display(&self) -> String {
        let mut parts = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl".to_string());
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt".to_string());
        }
        let code = match self.code {
            KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::F(n) => format!("F{}", n),
            _ => format!("{:?}", self.code),
        };
        parts.push(code);
        parts.join("+")
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[derive(Debug, Clone)]
pub struct KeyBindings {
    map: HashMap<Action, Vec<KeyCombo>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        use Action::*;
        let mut kb = Self::new();
        kb.add(
            Quit,
            KeyCombo::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
        );
        kb.add(
            SpawnBrowser,
            KeyCombo::new(KeyCode::Char('b'), KeyModifiers::ALT),
        );
        kb.add(
            SpawnTerminal,
            KeyCombo::new(KeyCode::Char('t'), KeyModifiers::ALT),
        );
        kb.add(
            CloseWindow,
            KeyCombo::new(KeyCode::Char('w'), KeyModifiers::ALT),
        );
        kb.add(
            MinimizeWindow,
            KeyCombo::new(KeyCode::Char('m'), KeyModifiers::ALT),
        );
        kb.add(
            CycleNextWindow,
            KeyCombo::new(KeyCode::Char('n'), KeyModifiers::ALT),
        );
        kb.add(
            CyclePrevWindow,
            KeyCombo::new(KeyCode::Char('p'), KeyModifiers::ALT),
        );
        kb.add(
            CyclePrevWindow,
            KeyCombo::new(KeyCode::BackTab, KeyModifiers::NONE),
        );
        kb.add(ToggleHelp, KeyCombo::new(KeyCode::F(1), KeyModifiers::NONE));
        kb.add(CloseHelp, KeyCombo::new(KeyCode::Esc, KeyModifiers::NONE));
        kb
    }
}

impl KeyBindings {
    /// An empty binding table.
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    pub fn add(&mut self, action: Action, combo: KeyCombo) {
        self.map.entry(action).or_default().push(combo);
    }

    pub fn matches(&self, action: Action, key: &KeyEvent) -> bool {
        if let Some(list) = self.map.get(&action) {
            list.iter().any(|c| c.matches(key))
        } else {
            false
        }
    }

    /// First action bound to `key`, checked in `Action::ALL` order so the
    /// answer does not depend on hash iteration.
    pub fn action_for_key(&self, key: &KeyEvent) -> Option<Action> {
        Action::ALL
            .into_iter()
            .find(|action| self.matches(*action, key))
    }

    /// `(action, combos)` rows for the help overlay, skipping unbound actions.
    pub fn help_entries(&self) -> Vec<(Action, Vec<String>)> {
        Action::ALL
            .into_iter()
            .filter_map(|action| {
                let combos = self.combos_for(action);
                (!combos.is_empty()).then_some((action, combos))
            })
            .collect()
    }

    pub fn combos_for(&self, action: Action) -> Vec<String> {
        self.map
            .get(&action)
            .map(|list| list.iter().map(|c| c.display()).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_quit() {
        let kb = KeyBindings::default();
        let ev = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert!(kb.matches(Action::Quit, &ev));
        assert!(!kb.matches(Action::Quit, &KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
    }

    #[test]
    fn alt_letters_ignore_case_and_shift() {
        let kb = KeyBindings::default();
        let ev = KeyEvent::new(KeyCode::Char('B'), KeyModifiers::ALT | KeyModifiers::SHIFT);
        assert_eq!(kb.action_for_key(&ev), Some(Action::SpawnBrowser));
    }

    #[test]
    fn plain_letters_are_not_bound() {
        let kb = KeyBindings::default();
        for ch in ['b', 't', 'w', 'n'] {
            let ev = KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE);
            assert_eq!(kb.action_for_key(&ev), None);
        }
    }

    #[test]
    fn help_entries_follow_declared_order() {
        let kb = KeyBindings::default();
        let entries = kb.help_entries();
        assert_eq!(entries.first().map(|e| e.0), Some(Action::SpawnBrowser));
        assert_eq!(entries.last().map(|e| e.1.clone()), Some(vec!["Ctrl+Q".to_string()]));
    }

    #[test]
    fn backtab_cycles_backwards() {
        let kb = KeyBindings::default();
        let ev = KeyEvent::new(KeyCode::BackTab, KeyModifiers::NONE);
        assert_eq!(kb.action_for_key(&ev), Some(Action::CyclePrevWindow));
        assert_eq!(
            kb.combos_for(Action::CyclePrevWindow),
            vec!["Alt+P".to_string(), "Shift+Tab".to_string()]
        );
    }
}
